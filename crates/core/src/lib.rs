//! Domain types shared by the roster crates.

pub mod error;
pub mod threshold;
pub mod types;
