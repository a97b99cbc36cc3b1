//! # Deydem Admin
//!
//! A terminal dashboard for administering driver accounts against the
//! Deydem HTTP backend.
//!
//! ## Features
//! - Driver listing with phone-substring search
//! - Document approval for drivers awaiting review
//! - Balance updates via a popup editor
//! - Dashboard summary by document state
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod cli;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Driver, StatusLabel};
pub use network::{ApiClient, NetworkActor};
