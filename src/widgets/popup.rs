use ratatui::{Frame, layout::Rect, widgets::Clear};
use unicode_width::UnicodeWidthStr;

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Display width of the widest line, for content-sized popups
pub fn content_width<'a>(lines: impl IntoIterator<Item = &'a str>) -> u16 {
    lines
        .into_iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_centered() {
        let frame = Rect::new(0, 0, 80, 24);
        let popup = centered_popup(frame, 40, 10);

        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 7);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
    }

    #[test]
    fn test_centered_popup_clamps_to_frame() {
        let frame = Rect::new(0, 0, 30, 8);
        let popup = centered_popup(frame, 40, 10);

        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 8);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
    }

    #[test]
    fn test_content_width_uses_widest_line() {
        assert_eq!(content_width(["abc", "abcdef", "a"]), 6);
        assert_eq!(content_width([]), 0);
    }

    #[test]
    fn test_content_width_counts_display_columns() {
        // CJK characters are double-width
        assert_eq!(content_width(["日本語"]), 6);
    }
}
