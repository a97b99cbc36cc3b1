//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Utc};

use crate::messages::ui_events::{InputMode, Tab};
use crate::messages::RenderState;
use crate::models::{Driver, StatusLabel};

/// Collection summary by document state, shown on the dashboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectoryCounts {
    pub docs_pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// Ephemeral state of the balance editor popup
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceEditor {
    pub driver_id: i64,
    pub phone: String,
    /// Balance before editing, the fallback for unparseable input
    pub current: i64,
    pub input: String,
}

impl BalanceEditor {
    /// The balance to submit: the typed value, or the driver's current
    /// balance when the input does not parse as an integer.
    pub fn parsed(&self) -> i64 {
        self.input.trim().parse().unwrap_or(self.current)
    }
}

/// The authoritative in-memory driver collection.
///
/// Owns the loading flag and the search filter. The backend is the sole
/// source of truth: every mutation is followed by a full reload, never a
/// partial merge. Fetches carry a sequence number; a response older than
/// the most recently issued fetch is stale and gets discarded instead of
/// overwriting fresher data.
#[derive(Debug, Default)]
pub struct DriverDirectory {
    drivers: Vec<Driver>,
    pub is_loading: bool,
    pub search: String,
    latest_fetch: u64,
}

impl DriverDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issued fetch and raise the loading flag.
    pub fn begin_fetch(&mut self, seq: u64) {
        self.latest_fetch = seq;
        self.is_loading = true;
    }

    /// Replace the collection with a fetched listing.
    ///
    /// Returns false when the response is stale (an even newer fetch has
    /// been issued since); stale responses leave the collection untouched.
    pub fn apply_fetch(&mut self, seq: u64, drivers: Vec<Driver>) -> bool {
        if seq < self.latest_fetch {
            return false;
        }
        self.drivers = drivers;
        self.is_loading = false;
        true
    }

    /// Record a failed fetch: clear the loading flag, keep the collection.
    ///
    /// Returns false when the failure belongs to a superseded fetch.
    pub fn fetch_failed(&mut self, seq: u64) -> bool {
        if seq < self.latest_fetch {
            return false;
        }
        self.is_loading = false;
        true
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Drivers passing the search filter, in backend order.
    ///
    /// The filter matches the phone field as a substring; an empty query
    /// means no filtering.
    pub fn filtered(&self) -> Vec<&Driver> {
        if self.search.is_empty() {
            self.drivers.iter().collect()
        } else {
            self.drivers
                .iter()
                .filter(|d| d.phone.contains(&self.search))
                .collect()
        }
    }

    /// Counts by document state over the whole (unfiltered) collection.
    pub fn counts(&self) -> DirectoryCounts {
        let mut counts = DirectoryCounts::default();
        for driver in &self.drivers {
            match driver.status_label() {
                StatusLabel::DocsPending => counts.docs_pending += 1,
                StatusLabel::DocsRejected => counts.rejected += 1,
                StatusLabel::Active | StatusLabel::Inactive => counts.approved += 1,
                StatusLabel::Blocked => {
                    // Blocked hides the document state; count by the raw field
                    match driver.docs_status.as_str() {
                        "pending" | "send" => counts.docs_pending += 1,
                        "rejected" => counts.rejected += 1,
                        _ => counts.approved += 1,
                    }
                }
            }
        }
        counts
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Tab navigation
    pub active_tab: Tab,
    pub input_mode: InputMode,

    // Driver directory (the authoritative collection)
    pub directory: DriverDirectory,
    pub last_refresh: Option<DateTime<Utc>>,

    // UI-only state
    pub selected: usize,
    pub balance_editor: Option<BalanceEditor>,
    pub show_help: bool,

    next_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            active_tab: Tab::Dashboard,
            input_mode: InputMode::Normal,
            directory: DriverDirectory::new(),
            last_refresh: None,
            selected: 0,
            balance_editor: None,
            show_help: false,
            next_seq: 1,
        }
    }

    /// Generate a unique request sequence number
    pub fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// The driver currently highlighted in the filtered list
    pub fn selected_driver(&self) -> Option<&Driver> {
        self.directory.filtered().get(self.selected).copied()
    }

    /// Keep the selection inside the filtered list after it shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.directory.filtered().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_tab: self.active_tab,
            input_mode: self.input_mode,
            drivers: self.directory.filtered().into_iter().cloned().collect(),
            total_drivers: self.directory.len(),
            is_loading: self.directory.is_loading,
            search: self.directory.search.clone(),
            selected: self.selected,
            last_refresh: self.last_refresh,
            counts: self.directory.counts(),
            balance_editor: self.balance_editor.clone(),
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: i64, phone: &str) -> Driver {
        Driver {
            id,
            phone: phone.to_string(),
            balance: 0,
            status: String::from("active"),
            online: false,
            docs_status: String::from("approved"),
            blocked: false,
        }
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let mut dir = DriverDirectory::new();
        dir.begin_fetch(1);
        dir.apply_fetch(1, vec![driver(1, "770"), driver(2, "780"), driver(3, "790")]);
        let ids: Vec<i64> = dir.filtered().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_matches_phone_substring() {
        let mut dir = DriverDirectory::new();
        dir.begin_fetch(1);
        dir.apply_fetch(
            1,
            vec![driver(1, "770123"), driver(2, "781234"), driver(3, "770999")],
        );
        dir.search = String::from("770");
        let ids: Vec<i64> = dir.filtered().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut dir = DriverDirectory::new();
        dir.begin_fetch(1);
        dir.begin_fetch(2);
        // The newer fetch lands first
        assert!(dir.apply_fetch(2, vec![driver(9, "779")]));
        // The straggler from fetch 1 must not overwrite it
        assert!(!dir.apply_fetch(1, vec![driver(1, "770")]));
        assert_eq!(dir.filtered()[0].id, 9);
        assert!(!dir.is_loading);
    }

    #[test]
    fn test_fetch_failure_keeps_collection_and_clears_loading() {
        let mut dir = DriverDirectory::new();
        dir.begin_fetch(1);
        dir.apply_fetch(1, vec![driver(1, "770")]);
        dir.begin_fetch(2);
        assert!(dir.is_loading);
        assert!(dir.fetch_failed(2));
        assert!(!dir.is_loading);
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_balance_editor_falls_back_to_current() {
        let editor = BalanceEditor {
            driver_id: 1,
            phone: String::from("770"),
            current: 500,
            input: String::from("abc"),
        };
        assert_eq!(editor.parsed(), 500);

        let editor = BalanceEditor {
            input: String::from("1200"),
            ..editor
        };
        assert_eq!(editor.parsed(), 1200);
    }

    #[test]
    fn test_counts_by_document_state() {
        let mut dir = DriverDirectory::new();
        let mut pending = driver(1, "770");
        pending.docs_status = String::from("pending");
        let mut sent = driver(2, "771");
        sent.docs_status = String::from("send");
        let mut rejected = driver(3, "772");
        rejected.docs_status = String::from("rejected");
        let approved = driver(4, "773");
        dir.begin_fetch(1);
        dir.apply_fetch(1, vec![pending, sent, rejected, approved]);
        assert_eq!(
            dir.counts(),
            DirectoryCounts {
                docs_pending: 2,
                approved: 1,
                rejected: 1,
            }
        );
    }
}
