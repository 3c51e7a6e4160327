// src/extractors/cell.rs
use crate::extractors::dom::MarkupNode;
use crate::utils::error::ExtractError;

// --- Tag Sets ---
const EMPHASIS_TAGS: &[&str] = &["strong", "b", "em"];
const HYPERLINK_TAG: &str = "a";
const INPUT_TAG: &str = "input";

/// How a table cell carries its value, decided by the cell's first child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Emphasis,
    Hyperlink,
    /// Form control with no textual payload. The cell is skipped.
    Input,
    PlainText,
}

impl CellKind {
    /// Order in which kinds are tried. `PlainText` accepts anything, so it stays last.
    pub const PRECEDENCE: [CellKind; 4] = [
        CellKind::Emphasis,
        CellKind::Hyperlink,
        CellKind::Input,
        CellKind::PlainText,
    ];

    fn matches<N: MarkupNode>(self, first_child: &N) -> bool {
        match self {
            CellKind::Emphasis => first_child
                .tag_name()
                .is_some_and(|tag| EMPHASIS_TAGS.contains(&tag)),
            CellKind::Hyperlink => first_child.is_element(HYPERLINK_TAG),
            CellKind::Input => first_child.is_element(INPUT_TAG),
            CellKind::PlainText => true,
        }
    }

    /// Picks the first kind in `PRECEDENCE` that accepts `first_child`.
    pub fn of<N: MarkupNode>(first_child: &N) -> CellKind {
        Self::PRECEDENCE
            .into_iter()
            .find(|kind| kind.matches(first_child))
            .unwrap_or(CellKind::PlainText)
    }
}

/// Reads the value of one `<td>`.
///
/// Returns `Ok(None)` for input cells, which contribute nothing to the row.
/// `column` is only used to report which cell was empty.
pub fn classify_cell<N: MarkupNode>(
    cell: &N,
    column: usize,
) -> Result<Option<String>, ExtractError> {
    let first = cell.first_child().ok_or(ExtractError::EmptyCell { column })?;

    let value = match CellKind::of(first) {
        CellKind::Emphasis | CellKind::Hyperlink => {
            // The wrapper's own first child holds the text
            let inner = first.first_child().ok_or(ExtractError::EmptyCell { column })?;
            node_text(inner)
        }
        CellKind::Input => {
            tracing::trace!("Skipping input cell at column {}", column);
            return Ok(None);
        }
        CellKind::PlainText => node_text(first),
    };

    Ok(Some(value))
}

fn node_text<N: MarkupNode>(node: &N) -> String {
    match node.text() {
        Some(text) => text.to_string(),
        None => node.text_content(),
    }
}
