//! Wire types for the batchsort HTTP API.

use serde::{Deserialize, Serialize};

// === Sorting ===

/// A batch sorting request.
#[derive(Debug, Clone, Deserialize)]
pub struct SortRequest {
    /// The integer sequences to sort. Inner sequences may hold duplicates
    /// and negatives and may be empty.
    pub to_sort: Vec<Vec<i64>>,
}

/// A batch sorting response.
#[derive(Debug, Clone, Serialize)]
pub struct SortResponse {
    /// The sorted sequences.
    pub sorted_arrays: Vec<Vec<i64>>,
    /// Wall-clock duration of the sort phase, in nanoseconds.
    pub time_ns: u64,
}

// === Status ===

/// Server status response.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Server state ("running").
    pub status: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
}
