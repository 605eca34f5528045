/// Severity of the displayed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Default)]
pub struct NotificationState {
    message: Option<(String, Severity)>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), Severity::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), Severity::Error));
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn current(&self) -> Option<(&str, Severity)> {
        self.message.as_ref().map(|(m, s)| (m.as_str(), *s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let state = NotificationState::new();
        assert!(state.current().is_none());
    }

    #[test]
    fn test_info_then_clear() {
        let mut state = NotificationState::new();

        state.info("Copied report to clipboard");
        assert_eq!(
            state.current(),
            Some(("Copied report to clipboard", Severity::Info))
        );

        state.clear();
        assert!(state.current().is_none());
    }

    #[test]
    fn test_latest_message_wins() {
        let mut state = NotificationState::new();

        state.info("first");
        state.error("second");

        assert_eq!(state.current(), Some(("second", Severity::Error)));
    }
}
