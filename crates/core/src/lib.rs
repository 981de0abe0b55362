//! `stockcast-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no framework
//! concerns): the tabular data model and the shared error taxonomy.

pub mod error;
pub mod table;

pub use error::{ForecastError, ForecastResult};
pub use table::{Cell, Table};

