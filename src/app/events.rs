use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use crate::calc::Distribution;

use super::state::App;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Notifications live until the next key press
        self.notification.clear();

        // Help popup blocks everything else while visible
        if self.help.visible {
            self.handle_help_key(key);
            return;
        }

        // The value editor owns the keyboard while open
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        self.handle_global_key(key);
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.help.close();
            }
            KeyCode::Char('j') | KeyCode::Down => self.help.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.help.scroll_up(1),
            KeyCode::PageDown => self.help.scroll_down(10),
            KeyCode::PageUp => self.help.scroll_up(10),
            // Block all other keys while help is visible
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            _ => {
                if let Some(editor) = &mut self.editor {
                    editor.textarea.input(key);
                }
            }
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) {
        // Ctrl+C: exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.step_down(),
            KeyCode::Right | KeyCode::Char('l') => self.step_up(),

            KeyCode::Char('1') => self.set_distribution(Distribution::Local),
            KeyCode::Char('2') => self.set_distribution(Distribution::Regional),
            KeyCode::Char('3') => self.set_distribution(Distribution::National),

            KeyCode::Enter => self.reveal(),
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('y') => self.copy_report(),
            KeyCode::Char('o') => self.open_booking_link(),

            KeyCode::F(1) | KeyCode::Char('?') => self.help.toggle(),

            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
