//! Actions applied to scan results.

pub mod delete;

pub use delete::{remove_files, BatchRemoveResult};
