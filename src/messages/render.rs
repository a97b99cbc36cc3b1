//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Utc};

use crate::app::state::{BalanceEditor, DirectoryCounts};
use crate::messages::ui_events::{InputMode, Tab};
use crate::models::Driver;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Tab
    pub active_tab: Tab,
    pub input_mode: InputMode,

    // Driver directory
    /// Drivers passing the current search filter, in backend order
    pub drivers: Vec<Driver>,
    /// Size of the unfiltered collection
    pub total_drivers: usize,
    pub is_loading: bool,
    pub search: String,
    pub selected: usize,
    pub last_refresh: Option<DateTime<Utc>>,

    // Dashboard summary
    pub counts: DirectoryCounts,

    // Popups
    pub balance_editor: Option<BalanceEditor>,
    pub show_help: bool,
}
