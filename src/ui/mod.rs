mod alert;
mod campaign_list;
mod detail;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_title_bar(frame, app_layout.title_bar, state);
    match &state.screen {
        Screen::Listing => campaign_list::render(frame, app_layout.content, state),
        Screen::Detail(campaign) => detail::render(frame, app_layout.content, campaign),
    }
    render_help_bar(frame, app_layout.help_bar, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Alerts draw over everything else
    if let Some((_, alert)) = state.dialogs.top() {
        alert::render(frame, alert);
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match &state.screen {
        Screen::Listing => " Campaign Browser".to_string(),
        Screen::Detail(c) => format!(" Campaign Browser › {}", c.name),
    };
    frame.render_widget(Paragraph::new(Span::styled(title, Theme::title_bar())), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints: &[(&str, &str)] = if !state.dialogs.is_empty() {
        &[("Enter", "Confirm"), ("Esc", "Close")]
    } else {
        match state.screen {
            Screen::Listing => &[
                ("↑↓", "Navigate"),
                ("Enter", "Open"),
                ("r", "Reload"),
                ("q", "Quit"),
            ],
            Screen::Detail(_) => &[("Esc", "Back"), ("q", "Quit")],
        }
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(
            format!(" {} ", label),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
