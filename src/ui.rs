use ratatui::{prelude::*, widgets::*};

use crate::models::StatusLabel;

/// Color for a driver's derived status label
///
/// Mirrors the card colors the admins are used to: green for active,
/// red for blocked, orange (terminal yellow) for everything in between.
pub fn label_color(label: StatusLabel) -> Color {
    match label {
        StatusLabel::Active => Color::Green,
        StatusLabel::Blocked => Color::Red,
        StatusLabel::DocsRejected | StatusLabel::DocsPending | StatusLabel::Inactive => {
            Color::Yellow
        }
    }
}

/// Online indicator span for a driver row
pub fn online_span(online: bool) -> Span<'static> {
    if online {
        Span::styled("online", Style::default().fg(Color::Green))
    } else {
        Span::styled("offline", Style::default().fg(Color::DarkGray))
    }
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_colors() {
        assert_eq!(label_color(StatusLabel::Active), Color::Green);
        assert_eq!(label_color(StatusLabel::Blocked), Color::Red);
        assert_eq!(label_color(StatusLabel::DocsPending), Color::Yellow);
    }
}
