// src/extractors/row.rs
use crate::extractors::cell::classify_cell;
use crate::extractors::dom::MarkupNode;
use crate::utils::error::ExtractError;

// --- Class Markers ---
/// Class of the element wrapping the redemption table.
pub const BOND_DATA_CLASS: &str = "bnddata";
/// Class of the row holding a bond's values (header rows lack it).
pub const HIGHLIGHTED_ROW_CLASS: &str = "altrow1";
const CELL_TAG: &str = "td";

/// Collects the trimmed cell values of every highlighted row inside every
/// bond data container, in document order.
///
/// An empty vector means nothing matched; judging the shape is left to the
/// record mapper.
pub fn extract_row_values<N: MarkupNode>(root: &N) -> Result<Vec<String>, ExtractError> {
    let containers = root.find_by_class(BOND_DATA_CLASS);
    tracing::debug!("Found {} '{}' containers", containers.len(), BOND_DATA_CLASS);

    let mut values = Vec::new();
    for container in containers {
        let rows = container.find_by_class(HIGHLIGHTED_ROW_CLASS);
        tracing::debug!("Found {} '{}' rows in container", rows.len(), HIGHLIGHTED_ROW_CLASS);

        for row in rows {
            for (column, cell) in row.find_by_tag(CELL_TAG).into_iter().enumerate() {
                if let Some(value) = classify_cell(cell, column)? {
                    values.push(value.trim().to_string());
                }
            }
        }
    }

    tracing::debug!("Extracted {} row values", values.len());
    Ok(values)
}
