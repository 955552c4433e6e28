//! # Batchsort Core
//!
//! Core types for the batchsort service:
//! - Common error types
//! - The batch sorter, in sequential and concurrent variants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod sorter;

pub use error::{Error, Result};
pub use sorter::{sort_concurrent, sort_sequential, SortMode};
