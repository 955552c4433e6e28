//! # Batchsort Server
//!
//! HTTP API server exposing sequential and concurrent batch sorting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod server;

pub use server::{Server, ServerConfig};
