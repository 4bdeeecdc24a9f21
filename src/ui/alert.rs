use crate::app::dialog::Alert;
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, alert: &Alert) {
    let area = frame.area();
    let popup_area = centered_popup(area, 50, 40, 8);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::alert_border())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 2 {
        return;
    }

    let message_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height - 1);
    let message = Paragraph::new(alert.message.as_str())
        .style(Style::default().fg(Theme::TEXT_PRIMARY))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    let button_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let button = Line::from(vec![
        Span::styled(format!(" {} ", alert.action_label), Theme::alert_button()),
        Span::styled("  Esc", Theme::key_hint()),
        Span::styled(" close", Style::default().fg(Theme::TEXT_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(button).alignment(Alignment::Center), button_area);
}
