use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use super::state::{NotificationState, Severity};

/// Render the current notification into the footer line, if any
pub fn render_notification(state: &NotificationState, frame: &mut Frame, area: Rect) {
    let Some((message, severity)) = state.current() else {
        return;
    };

    let color = match severity {
        Severity::Info => Color::Green,
        Severity::Error => Color::Red,
    };

    let paragraph = Paragraph::new(message).style(Style::default().fg(color));
    frame.render_widget(paragraph, area);
}
