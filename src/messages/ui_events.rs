//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application tabs
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Drivers,
    Profile,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Tab navigation
    SwitchTab(Tab),

    // Driver list
    Refresh,
    NextDriver,
    PrevDriver,
    ApproveSelected,

    // Search filter editing
    StartSearch,
    StopEditing,
    SearchChar(char),
    SearchBackspace,

    // Balance editor popup
    OpenBalanceEditor,
    BalanceChar(char),
    BalanceBackspace,
    ConfirmBalance,
    CancelBalance,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_tab: Tab,
    input_mode: InputMode,
    show_help: bool,
    balance_editor_open: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Handle popups first
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if balance_editor_open {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelBalance),
            KeyCode::Enter => Some(UiEvent::ConfirmBalance),
            KeyCode::Backspace => Some(UiEvent::BalanceBackspace),
            KeyCode::Char(c) => Some(UiEvent::BalanceChar(c)),
            _ => None,
        };
    }

    // Tab switching: number keys (only in normal mode, not while editing)
    if input_mode == InputMode::Normal {
        match key.code {
            KeyCode::Char('1') => return Some(UiEvent::SwitchTab(Tab::Dashboard)),
            KeyCode::Char('2') => return Some(UiEvent::SwitchTab(Tab::Drivers)),
            KeyCode::Char('3') => return Some(UiEvent::SwitchTab(Tab::Profile)),
            _ => {}
        }
    }

    match active_tab {
        Tab::Drivers => handle_drivers_tab_keys(key, input_mode),
        Tab::Dashboard | Tab::Profile => handle_static_tab_keys(key),
    }
}

/// Handle keys for the drivers tab
fn handle_drivers_tab_keys(key: KeyEvent, input_mode: InputMode) -> Option<UiEvent> {
    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            KeyCode::Char('/') => Some(UiEvent::StartSearch),
            KeyCode::Char('a') => Some(UiEvent::ApproveSelected),
            KeyCode::Char('b') => Some(UiEvent::OpenBalanceEditor),
            KeyCode::Up => Some(UiEvent::PrevDriver),
            KeyCode::Down => Some(UiEvent::NextDriver),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Backspace => Some(UiEvent::SearchBackspace),
            KeyCode::Char(c) => Some(UiEvent::SearchChar(c)),
            _ => None,
        },
    }
}

/// Handle keys for the dashboard and profile tabs
fn handle_static_tab_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_balance_editor_captures_keys_before_tabs() {
        let event = key_to_ui_event(
            press(KeyCode::Char('2')),
            Tab::Drivers,
            InputMode::Normal,
            false,
            true,
        );
        assert_eq!(event, Some(UiEvent::BalanceChar('2')));
    }

    #[test]
    fn test_search_editing_consumes_action_keys() {
        let event = key_to_ui_event(
            press(KeyCode::Char('a')),
            Tab::Drivers,
            InputMode::Editing,
            false,
            false,
        );
        assert_eq!(event, Some(UiEvent::SearchChar('a')));
    }
}
