// src/extractors/fixtures.rs
// Trimmed-down copies of SBCPrice responses used across the test modules.

pub const MATURED_ROW: &str = r##"<tr class="altrow1">
<td><input type="checkbox" name="chkBox0" value="0"></td>
<td><strong>abcdef</strong></td>
<td>EE</td>
<td>$50</td>
<td>01/1990</td>
<td>&nbsp;</td>
<td>01/2020</td>
<td>$25.00</td>
<td>$78.68</td>
<td>&nbsp;</td>
<td><strong>$103.68</strong></td>
<td><a href="#noteMA">MA</a></td>
</tr>"##;

pub const UNMATURED_ROW: &str = r##"<tr class="altrow1">
<td><input type="checkbox" name="chkBox1" value="1"></td>
<td><strong>ghijk</strong></td>
<td>EE</td>
<td>$50</td>
<td>01/2000</td>
<td>02/2026</td>
<td>01/2030</td>
<td>$25.00</td>
<td>$41.20</td>
<td>2.70%</td>
<td><strong>$66.20</strong></td>
<td>&nbsp;</td>
</tr>"##;

/// Row from a page that lost four columns.
pub const SHORT_ROW: &str = r##"<tr class="altrow1">
<td><strong>abcdef</strong></td>
<td>EE</td>
<td>$50</td>
<td>01/1990</td>
<td>$25.00</td>
<td>$103.68</td>
<td><a href="#noteMA">MA</a></td>
</tr>"##;

pub const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Savings Bond Calculator</title></head>
<body><div class="errortext">The serial number you entered is not valid for Series AA.</div></body>
</html>"#;

pub fn bond_table(row: &str) -> String {
    bond_table_rows(&[row])
}

pub fn bond_table_rows(rows: &[&str]) -> String {
    format!(
        r#"<table class="bnddata">
<tr><th>&nbsp;</th><th>Serial #</th><th>Series</th><th>Denom</th><th>Issue Date</th><th>Next Accrual</th><th>Final Maturity</th><th>Issue Price</th><th>Interest</th><th>Interest Rate</th><th>Value</th><th>Note</th></tr>
{}
</table>"#,
        rows.join("\n")
    )
}

pub fn bond_page(row: &str) -> String {
    bond_page_rows(&[row])
}

pub fn bond_page_rows(rows: &[&str]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Savings Bond Calculator</title></head>
<body>
<form name="calc" method="post" action="/BC/SBCPrice">
<table class="summary"><tr class="altrow1"><th>Total Price</th><th>Total Value</th></tr></table>
{}
</form>
</body>
</html>"#,
        bond_table_rows(rows)
    )
}
