use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 28;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.listing_view;
    let block = Block::default()
        .title(" Campaigns ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.campaigns.is_empty() {
        // Nothing shown until the first successful load
        if view.loaded {
            let empty = Paragraph::new(Span::styled(" No campaigns", Theme::description()));
            frame.render_widget(empty, inner);
        }
        return;
    }

    let visible = inner.height as usize;
    let start = view.window_start(visible);
    let text_width = inner.width.saturating_sub(1) as usize;

    let lines: Vec<Line> = view
        .campaigns
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, campaign)| {
            let name = truncate(&campaign.name, NAME_WIDTH);
            let pad = NAME_WIDTH.saturating_sub(name.width());
            let desc_width = text_width.saturating_sub(NAME_WIDTH + 3);
            let desc = truncate(&campaign.description, desc_width);
            if i == view.selected {
                let text = format!(" {}{}  {}", name, " ".repeat(pad), desc);
                let fill = text_width.saturating_sub(text.width());
                Line::from(Span::styled(
                    format!("{}{}", text, " ".repeat(fill)),
                    Theme::campaign_selected(),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!(" {}{}  ", name, " ".repeat(pad)),
                        Theme::campaign_name(),
                    ),
                    Span::styled(desc, Theme::description()),
                ])
            }
        })
        .collect();

    let list_area = Rect::new(inner.x, inner.y, inner.width.saturating_sub(1), inner.height);
    frame.render_widget(Paragraph::new(lines), list_area);

    if view.campaigns.len() > visible {
        let scrollbar_area = Rect::new(
            inner.x + inner.width.saturating_sub(1),
            inner.y,
            1,
            inner.height,
        );
        let mut scrollbar_state =
            ScrollbarState::new(view.campaigns.len().saturating_sub(visible)).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
