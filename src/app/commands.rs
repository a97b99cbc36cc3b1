//! Command handlers - business logic for processing UI events

use crate::app::state::BalanceEditor;
use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Tab};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn next_driver(&mut self) {
        let len = self.directory.filtered().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn prev_driver(&mut self) {
        let len = self.directory.filtered().len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    // ========================
    // Search filter
    // ========================

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_char(&mut self, c: char) {
        self.directory.search.push(c);
        self.clamp_selection();
    }

    pub fn search_backspace(&mut self) {
        self.directory.search.pop();
        self.clamp_selection();
    }

    // ========================
    // Directory operations
    // ========================

    /// Issue a full reload of the driver listing.
    pub fn refresh(&mut self) -> NetworkCommand {
        let seq = self.next_seq();
        self.directory.begin_fetch(seq);
        NetworkCommand::FetchDrivers { seq }
    }

    /// Approve the highlighted driver's documents.
    ///
    /// Only offered while the documents are awaiting review, matching the
    /// conditions under which the action is shown.
    pub fn approve_selected(&mut self) -> Option<NetworkCommand> {
        let driver = self.selected_driver()?;
        if !driver.docs_pending() {
            return None;
        }
        let driver_id = driver.id;
        let seq = self.next_seq();
        tracing::info!(seq, driver_id, "approving driver documents");
        Some(NetworkCommand::ApproveDriver { seq, driver_id })
    }

    // ========================
    // Balance editor popup
    // ========================

    pub fn open_balance_editor(&mut self) {
        if let Some(driver) = self.selected_driver() {
            self.balance_editor = Some(BalanceEditor {
                driver_id: driver.id,
                phone: driver.phone.clone(),
                current: driver.balance,
                input: driver.balance.to_string(),
            });
        }
    }

    pub fn balance_char(&mut self, c: char) {
        if let Some(editor) = &mut self.balance_editor {
            // Integer balances only; a leading minus is allowed
            if c.is_ascii_digit() || (c == '-' && editor.input.is_empty()) {
                editor.input.push(c);
            }
        }
    }

    pub fn balance_backspace(&mut self) {
        if let Some(editor) = &mut self.balance_editor {
            editor.input.pop();
        }
    }

    pub fn cancel_balance(&mut self) {
        self.balance_editor = None;
    }

    /// Submit the balance editor's value and close the popup.
    pub fn confirm_balance(&mut self) -> Option<NetworkCommand> {
        let editor = self.balance_editor.take()?;
        let balance = editor.parsed();
        let seq = self.next_seq();
        tracing::info!(seq, driver_id = editor.driver_id, balance, "updating driver balance");
        Some(NetworkCommand::UpdateBalance {
            seq,
            driver_id: editor.driver_id,
            balance,
        })
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network responses
    // ========================

    /// Apply a network response to the directory.
    ///
    /// A completed mutation triggers exactly one follow-up fetch regardless
    /// of what the response body says; the backend is the source of truth
    /// and the collection is reloaded rather than patched. Failures only
    /// log - the collection stays as it was.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::DriversFetched {
                seq,
                drivers,
                time_ms,
            } => {
                let count = drivers.len();
                if self.directory.apply_fetch(seq, drivers) {
                    tracing::info!(seq, count, time_ms, "driver listing replaced");
                    self.last_refresh = Some(chrono::Utc::now());
                    self.clamp_selection();
                } else {
                    tracing::warn!(seq, "discarding stale driver listing");
                }
                None
            }
            NetworkResponse::FetchFailed {
                seq,
                message,
                time_ms,
            } => {
                if self.directory.fetch_failed(seq) {
                    tracing::error!(seq, time_ms, %message, "driver listing fetch failed");
                } else {
                    tracing::warn!(seq, %message, "ignoring failure of superseded fetch");
                }
                None
            }
            NetworkResponse::MutationCompleted { seq, body } => {
                tracing::info!(seq, %body, "mutation accepted, reloading listing");
                Some(self.refresh())
            }
            NetworkResponse::MutationFailed { seq, message } => {
                tracing::error!(seq, %message, "mutation failed, state unchanged");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Driver;

    fn driver(id: i64, docs_status: &str) -> Driver {
        Driver {
            id,
            phone: format!("77{id}"),
            balance: 100,
            status: String::from("active"),
            online: true,
            docs_status: docs_status.to_string(),
            blocked: false,
        }
    }

    fn state_with(drivers: Vec<Driver>) -> AppState {
        let mut state = AppState::new();
        let cmd = state.refresh();
        let NetworkCommand::FetchDrivers { seq } = cmd else {
            panic!("refresh must issue a fetch");
        };
        state.handle_response(NetworkResponse::DriversFetched {
            seq,
            drivers,
            time_ms: 1,
        });
        state
    }

    #[test]
    fn test_mutation_success_triggers_exactly_one_fetch() {
        let mut state = state_with(vec![driver(1, "pending")]);
        let follow_up = state.handle_response(NetworkResponse::MutationCompleted {
            seq: 99,
            body: String::from("whatever the backend says"),
        });
        assert!(matches!(
            follow_up,
            Some(NetworkCommand::FetchDrivers { .. })
        ));
        assert!(state.directory.is_loading);
    }

    #[test]
    fn test_mutation_failure_changes_nothing() {
        let mut state = state_with(vec![driver(1, "pending")]);
        let follow_up = state.handle_response(NetworkResponse::MutationFailed {
            seq: 99,
            message: String::from("connection refused"),
        });
        assert!(follow_up.is_none());
        assert!(!state.directory.is_loading);
        assert_eq!(state.directory.len(), 1);
    }

    #[test]
    fn test_approve_only_while_docs_pending() {
        let mut state = state_with(vec![driver(1, "approved")]);
        assert!(state.approve_selected().is_none());

        let mut state = state_with(vec![driver(2, "send")]);
        let cmd = state.approve_selected();
        assert!(matches!(
            cmd,
            Some(NetworkCommand::ApproveDriver { driver_id: 2, .. })
        ));
    }

    #[test]
    fn test_confirm_balance_submits_and_closes_popup() {
        let mut state = state_with(vec![driver(5, "approved")]);
        state.open_balance_editor();
        state.balance_backspace();
        state.balance_backspace();
        state.balance_backspace();
        state.balance_char('2');
        state.balance_char('5');
        state.balance_char('0');
        let cmd = state.confirm_balance();
        assert_eq!(
            cmd,
            Some(NetworkCommand::UpdateBalance {
                seq: 2,
                driver_id: 5,
                balance: 250,
            })
        );
        assert!(state.balance_editor.is_none());
    }

    #[test]
    fn test_balance_editor_rejects_non_digits() {
        let mut state = state_with(vec![driver(5, "approved")]);
        state.open_balance_editor();
        state.balance_char('x');
        assert_eq!(state.balance_editor.as_ref().unwrap().input, "100");
    }

    #[test]
    fn test_search_clamps_selection() {
        let mut state = state_with(vec![
            driver(1, "approved"),
            driver(2, "approved"),
            driver(3, "approved"),
        ]);
        state.next_driver();
        state.next_driver();
        assert_eq!(state.selected, 2);
        state.search_char('7');
        state.search_char('7');
        state.search_char('1');
        assert_eq!(state.directory.filtered().len(), 1);
        assert_eq!(state.selected, 0);
    }
}
