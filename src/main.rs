//! Deydem Admin - actor-based terminal dashboard for driver administration
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

mod app;
mod cli;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use cli::CliArgs;
use messages::ui_events::{key_to_ui_event, InputMode, Tab};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use network::{ApiClient, NetworkActor};
use ui::{label_color, online_span};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &args.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(base_url = %args.base_url, "starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor with an explicitly constructed client
    let api = ApiClient::new(args.base_url);
    let network_actor = NetworkActor::new(api, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_tab,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.balance_editor.is_some(),
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    // Main layout with tab bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, main_chunks[0]);

    match state.active_tab {
        Tab::Dashboard => draw_dashboard_tab(f, state, main_chunks[1]),
        Tab::Drivers => draw_drivers_tab(f, state, main_chunks[1]),
        Tab::Profile => draw_profile_tab(f, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Popups
    if let Some(editor) = &state.balance_editor {
        draw_balance_popup(f, editor, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let titles = ["1:Dashboard", "2:Drivers", "3:Profile"];
    let selected = match state.active_tab {
        Tab::Dashboard => 0,
        Tab::Drivers => 1,
        Tab::Profile => 2,
    };
    f.render_widget(ui::render_tabs(&titles, selected), area);
}

fn draw_dashboard_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let counts = state.counts;

    let mut lines = vec![
        Line::from(Span::styled(
            "Driver accounts",
            Style::default().bold(),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::raw("  Awaiting document review : "),
            Span::styled(counts.docs_pending.to_string(), Style::default().fg(Color::Yellow).bold()),
        ]),
        Line::from(vec![
            Span::raw("  Documents approved       : "),
            Span::styled(counts.approved.to_string(), Style::default().fg(Color::Green).bold()),
        ]),
        Line::from(vec![
            Span::raw("  Documents rejected       : "),
            Span::styled(counts.rejected.to_string(), Style::default().fg(Color::Red).bold()),
        ]),
        Line::raw(""),
        Line::from(format!("  Total drivers           : {}", state.total_drivers)),
    ];

    if let Some(refreshed) = state.last_refresh {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("  Last refresh: {} UTC", refreshed.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = if state.is_loading {
        " Dashboard [...] "
    } else {
        " Dashboard "
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_drivers_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Driver list
        ])
        .split(area);

    draw_search_bar(f, state, chunks[0]);
    draw_driver_list(f, state, chunks[1]);
}

fn draw_search_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search by phone (/:edit) ");

    f.render_widget(Paragraph::new(state.search.as_str()).block(block), area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.search.len() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_driver_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let loading = if state.is_loading { " [...]" } else { "" };
    let title = format!(
        " Drivers ({}/{}){} ",
        state.drivers.len(),
        state.total_drivers,
        loading
    );

    let items: Vec<ListItem> = state
        .drivers
        .iter()
        .map(|driver| {
            let label = driver.status_label();
            let approvable = if driver.docs_pending() { "  [a:approve]" } else { "" };
            let lines = vec![
                Line::from(vec![
                    Span::styled(driver.phone.clone(), Style::default().bold()),
                    Span::raw(format!("  {} FCFA  ", driver.balance)),
                    online_span(driver.online),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        label.as_str(),
                        Style::default().fg(label_color(label)).bold(),
                    ),
                    Span::styled(approvable, Style::default().fg(Color::DarkGray)),
                ]),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    if !state.drivers.is_empty() {
        list_state.select(Some(state.selected));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_profile_tab(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Administrator", Style::default().bold())),
        Line::raw(""),
        Line::raw("  Name  : Administrateur"),
        Line::raw("  Email : admin@deydem.com"),
        Line::raw(""),
        Line::from(Span::styled(
            "  Press q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Profile ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        " Loading... "
    } else if state.balance_editor.is_some() {
        " Enter:save | Esc:cancel "
    } else if state.input_mode == InputMode::Editing {
        " typing filters by phone | Enter/Esc:done "
    } else {
        match state.active_tab {
            Tab::Drivers => " 1-3:tab | up/down:select | a:approve | b:balance | /:search | r:reload | ?:help | q:quit ",
            _ => " 1-3:tab | r:reload | ?:help | q:quit ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_balance_popup(f: &mut Frame, editor: &app::state::BalanceEditor, area: Rect) {
    let popup_area = centered_rect(50, 25, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Update balance (Enter to save, Esc to cancel) ")
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        Line::from(format!("Driver : {}", editor.phone)),
        Line::from(format!("Current: {} FCFA", editor.current)),
        Line::raw(""),
        Line::from(vec![
            Span::raw("New balance: "),
            Span::styled(editor.input.clone(), Style::default().fg(Color::Yellow)),
        ]),
    ];

    f.render_widget(Clear, popup_area);
    f.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 DEYDEM ADMIN - Keyboard Shortcuts

 NAVIGATION
   1 / 2 / 3          Dashboard / Drivers / Profile
   Up / Down          Select driver

 DRIVERS
   a                  Approve selected driver's documents
                      (only while documents are pending)
   b                  Edit selected driver's balance
   /                  Edit the phone search filter
   r                  Reload the listing from the backend

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
