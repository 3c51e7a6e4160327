// src/treasury/mod.rs
pub mod client;
pub mod models;

pub use client::{load_bonds, TreasuryClient};
