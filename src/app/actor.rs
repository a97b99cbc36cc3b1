//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Load the listing once on startup, then render the initial state
        let cmd = self.state.refresh();
        let _ = self.network_tx.send(cmd);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(seq = response.seq(), "network response received");
                    if let Some(follow_up) = self.state.handle_response(response) {
                        let _ = self.network_tx.send(follow_up);
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Tab switching
            UiEvent::SwitchTab(tab) => self.state.switch_tab(tab),

            // Driver list
            UiEvent::Refresh => {
                let cmd = self.state.refresh();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::NextDriver => self.state.next_driver(),
            UiEvent::PrevDriver => self.state.prev_driver(),
            UiEvent::ApproveSelected => {
                if let Some(cmd) = self.state.approve_selected() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Search filter
            UiEvent::StartSearch => self.state.start_search(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::SearchChar(c) => self.state.search_char(c),
            UiEvent::SearchBackspace => self.state.search_backspace(),

            // Balance editor
            UiEvent::OpenBalanceEditor => self.state.open_balance_editor(),
            UiEvent::BalanceChar(c) => self.state.balance_char(c),
            UiEvent::BalanceBackspace => self.state.balance_backspace(),
            UiEvent::ConfirmBalance => {
                if let Some(cmd) = self.state.confirm_balance() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::CancelBalance => self.state.cancel_balance(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
