use super::help_content::HELP_ENTRIES;

#[derive(Debug, Default)]
pub struct HelpState {
    pub visible: bool,
    pub scroll: u16,
}

impl HelpState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.scroll = 0;
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = HELP_ENTRIES.len().saturating_sub(1) as u16;
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_resets_scroll_on_close() {
        let mut state = HelpState::new();

        state.toggle();
        assert!(state.visible);

        state.scroll_down(5);
        assert!(state.scroll > 0);

        state.toggle();
        assert!(!state.visible);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut state = HelpState::new();

        state.scroll_up(10);
        assert_eq!(state.scroll, 0);

        state.scroll_down(u16::MAX);
        assert_eq!(state.scroll, HELP_ENTRIES.len() as u16 - 1);
    }
}
