//! Shared helpers for the market service crates: log setup and wire types
//! that do not belong to any single layer.

pub mod types;
pub mod utils;
