use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title_bar: Rect,
    pub content: Rect,
    pub help_bar: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Screen content
            Constraint::Length(1), // Key help
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        title_bar: chunks[0],
        content: chunks[1],
        help_bar: chunks[2],
        status_bar: chunks[3],
    }
}

/// Centered popup rect: `percent_w` of the width, `height` rows, clamped to
/// the available area.
pub fn centered_popup(area: Rect, percent_w: u16, min_w: u16, height: u16) -> Rect {
    let w = (u32::from(area.width) * u32::from(percent_w) / 100) as u16;
    let w = w.max(min_w).min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}
