use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::calc::{CalculationResult, CalculatorInput, Control, Distribution, calculate};
use crate::clipboard::copy_to_clipboard;
use crate::config::{ClipboardBackend, Config};
use crate::help::HelpState;
use crate::link;
use crate::notification::NotificationState;
use crate::report::build_report;

/// Whether the audit results panel has been revealed
///
/// One-way: `Hidden -> Shown` on the first reveal, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Shown,
}

impl PanelState {
    pub fn is_shown(self) -> bool {
        self == PanelState::Shown
    }
}

/// Direct numeric entry popup for one slider field
pub struct ValueEditor {
    pub textarea: TextArea<'static>,
    pub control: Control,
}

impl ValueEditor {
    pub fn new(control: Control, current: u32) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", control.label()))
                .border_style(Style::default().fg(Color::Yellow)),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.insert_str(current.to_string());

        Self { textarea, control }
    }

    /// Parse the entered text as a non-negative whole number
    pub fn parse(&self) -> Result<u32, String> {
        let text = self.textarea.lines()[0].trim().to_string();
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.round().min(f64::from(u32::MAX)) as u32)
            .ok_or_else(|| format!("Not a valid amount: {}", text))
    }
}

/// Application state
///
/// Owns the single input/output pair: `results` is a cache of the pure
/// derivation, refreshed atomically by every input mutator.
pub struct App {
    pub input: CalculatorInput,
    pub results: CalculationResult,
    pub selected: Control,
    pub panel: PanelState,
    pub editor: Option<ValueEditor>,
    pub help: HelpState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance with the starting input record
    pub fn new(input: CalculatorInput, config: &Config) -> Self {
        Self {
            input,
            results: calculate(&input),
            selected: Control::MonthlySpend,
            panel: PanelState::Hidden,
            editor: None,
            help: HelpState::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Re-derive the results from the current input
    ///
    /// The only place `results` is written; callers mutate `input` then come
    /// through here so the output is never partially updated.
    fn recompute(&mut self) {
        self.results = calculate(&self.input);
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Step the selected control up (cycles the tier selector)
    pub fn step_up(&mut self) {
        self.input.step_up(self.selected);
        self.recompute();
    }

    /// Step the selected control down (cycles the tier selector)
    pub fn step_down(&mut self) {
        self.input.step_down(self.selected);
        self.recompute();
    }

    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.input.distribution = distribution;
        self.recompute();
    }

    /// Reveal the results panel; there is no way back to `Hidden`
    pub fn reveal(&mut self) {
        self.panel = PanelState::Shown;
    }

    /// Open the numeric entry popup for the selected control
    pub fn begin_edit(&mut self) {
        let Some(current) = self.input.value(self.selected) else {
            // Tier selector has no numeric editor
            return;
        };
        self.editor = Some(ValueEditor::new(self.selected, current));
    }

    /// Commit the editor value, snapping and clamping into the field domain
    ///
    /// On a parse error the editor stays open and the footer shows why.
    pub fn commit_edit(&mut self) {
        let Some(editor) = &self.editor else {
            return;
        };
        match editor.parse() {
            Ok(value) => {
                let control = editor.control;
                self.input.set_value(control, value);
                self.recompute();
                self.editor = None;
            }
            Err(message) => {
                self.notification.error(message);
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Copy the plain-text report to the clipboard
    pub fn copy_report(&mut self) {
        let report = build_report(&self.input, &self.results);
        match copy_to_clipboard(&report, self.clipboard_backend) {
            Ok(()) => self.notification.info("Copied report to clipboard"),
            Err(e) => self.notification.error(format!("Clipboard copy failed: {:?}", e)),
        }
    }

    /// Open the booking page in the system browser
    pub fn open_booking_link(&mut self) {
        match link::open_booking_page() {
            Ok(_) => self.notification.info("Opened booking page"),
            Err(e) => self.notification.error(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
