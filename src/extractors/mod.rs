// src/extractors/mod.rs
pub mod cell;
pub mod dom;
pub mod row;

#[cfg(test)]
pub mod fixtures;

// Re-export key extraction types for convenience
pub use dom::DomNode;
pub use row::extract_row_values;
