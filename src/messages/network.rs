//! Network messages - communication between App and Network layers

use crate::models::Driver;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch the full driver listing
    FetchDrivers { seq: u64 },
    /// Approve a driver's submitted documents
    ApproveDriver { seq: u64, driver_id: i64 },
    /// Set a driver's balance to a new value
    UpdateBalance {
        seq: u64,
        driver_id: i64,
        balance: i64,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Driver listing fetched and parsed
    DriversFetched {
        seq: u64,
        drivers: Vec<Driver>,
        time_ms: u64,
    },
    /// Listing fetch failed (transport or parse)
    FetchFailed {
        seq: u64,
        message: String,
        time_ms: u64,
    },
    /// Mutation completed at the HTTP level; the body is opaque text
    MutationCompleted { seq: u64, body: String },
    /// Mutation failed at the transport level
    MutationFailed { seq: u64, message: String },
}

impl NetworkResponse {
    /// Get the originating request's sequence number
    pub fn seq(&self) -> u64 {
        match self {
            NetworkResponse::DriversFetched { seq, .. } => *seq,
            NetworkResponse::FetchFailed { seq, .. } => *seq,
            NetworkResponse::MutationCompleted { seq, .. } => *seq,
            NetworkResponse::MutationFailed { seq, .. } => *seq,
        }
    }
}
