use crate::listing::model::Campaign;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, campaign: &Campaign) {
    let block = Block::default()
        .title(format!(" {} ", campaign.name))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let mut lines = vec![Line::from("")];
    if campaign.description.is_empty() {
        lines.push(Line::from(Span::styled(" No description.", Theme::description())));
    } else {
        for para in campaign.description.lines() {
            lines.push(Line::from(Span::styled(
                format!(" {}", para),
                Theme::campaign_name(),
            )));
        }
    }
    if let Some(url) = &campaign.image_url {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Image: ", Theme::description()),
            Span::styled(url.clone(), Theme::link()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
