//! Help popup rendering: a centered modal listing the key bindings

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::help_content::{HELP_ENTRIES, HELP_FOOTER};
use super::help_state::HelpState;
use crate::widgets::popup;

const HELP_POPUP_PADDING: u16 = 2; // borders

pub fn render_popup(state: &HelpState, frame: &mut Frame) {
    if !state.visible {
        return;
    }

    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    // Size the popup to the widest entry line
    let formatted: Vec<String> = HELP_ENTRIES
        .iter()
        .map(|(key, desc)| format!("  {:<20}{}", key, desc))
        .collect();
    let content_height = HELP_ENTRIES.len() as u16;
    let popup_width = (popup::content_width(formatted.iter().map(String::as_str))
        + HELP_POPUP_PADDING)
        .min(frame_area.width);
    let popup_height = (content_height + HELP_POPUP_PADDING).min(frame_area.height);

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    for (key, desc) in HELP_ENTRIES {
        if key.is_empty() && desc.is_empty() {
            lines.push(Line::from(""));
        } else if key.is_empty() {
            // Category header
            lines.push(Line::from(Span::styled(
                format!("  {}", desc),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<20}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*desc),
            ]));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_bottom(HELP_FOOTER)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines).block(block).scroll((state.scroll, 0));

    frame.render_widget(paragraph, popup_area);
}
