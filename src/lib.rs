//! csvscrub - clean messy CSV exports
//!
//! Normalizes column names, then scrubs money, integer, reference and
//! free-text columns with per-cell cleaners, optionally sorts by a key
//! column and writes the result. A small file organizer ships alongside.

pub mod classify;
pub mod clean;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod organize;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod writer;

pub use config::Config;
pub use error::{CleanError, Result};
pub use model::Table;
pub use pipeline::{clean_table, run, CleanReport};
