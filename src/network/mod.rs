//! Network layer - HTTP calls against the driver backend
//!
//! The Network actor receives directory commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ApiClient;
