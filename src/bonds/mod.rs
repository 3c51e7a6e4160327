// src/bonds/mod.rs
pub mod collection;
pub mod record;

pub use collection::BondCollection;
pub use record::{parse_bond_page, BondRecord};
