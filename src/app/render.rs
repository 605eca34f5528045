use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::calc::{
    Control, Distribution, HOURLY_RATE, OFFER_INVESTMENT, TIME_RETURNED,
};
use crate::format::{format_break_even, format_currency, format_percent};
use crate::help;
use crate::notification::render_notification;
use crate::widgets::popup;

use super::state::{App, PanelState};

const GOLD: Color = Color::Yellow;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let panel_height = match self.panel {
            PanelState::Shown => 7,
            PanelState::Hidden => 0,
        };

        let layout = Layout::vertical([
            Constraint::Length(3),            // Header
            Constraint::Min(16),              // Inputs + live results
            Constraint::Length(panel_height), // Revealed audit panel
            Constraint::Length(1),            // Footer / notifications
        ])
        .split(frame.area());

        let main = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[1]);

        self.render_header(frame, layout[0]);
        self.render_inputs(frame, main[0]);
        self.render_results(frame, main[1]);
        if self.panel.is_shown() {
            self.render_audit_panel(frame, layout[2]);
        }
        self.render_footer(frame, layout[3]);

        // Popups last so they sit on top
        if let Some(editor) = &self.editor {
            let area = popup::centered_popup(frame.area(), 36, 3);
            popup::clear_area(frame, area);
            frame.render_widget(&editor.textarea, area);
        }
        help::render_popup(&self.help, frame);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let line = Line::from(vec![
            Span::styled(
                "THE LIVE AUDIT",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Calculate the true cost of remaining a 'Local Artist'",
                Style::default().fg(Color::Gray),
            ),
        ]);

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    /// Render the input sliders and the tier selector (left pane)
    fn render_inputs(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Input Parameters ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(3), // spend
            Constraint::Length(3), // revenue
            Constraint::Length(3), // hours
            Constraint::Length(4), // distribution label + one line per tier
            Constraint::Min(0),
        ])
        .split(inner);

        self.render_slider_row(frame, rows[0], Control::MonthlySpend);
        self.render_slider_row(frame, rows[1], Control::MonthlyRevenue);
        self.render_slider_row(frame, rows[2], Control::HoursPerWeek);
        self.render_distribution_row(frame, rows[3]);
    }

    fn render_slider_row(&self, frame: &mut Frame, area: Rect, control: Control) {
        if area.height < 2 {
            return;
        }
        let Some(domain) = control.domain() else {
            return;
        };
        let value = self.input.value(control).unwrap_or(0);

        let value_text = match control {
            Control::HoursPerWeek => format!("{} hrs", value),
            _ => format_currency(f64::from(value)),
        };

        let selected = self.selected == control && self.editor.is_none();
        let label_style = if selected {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "> " } else { "  " };

        let label_line = padded_line(
            area.width,
            &format!("{}{}", marker, control.label()),
            &value_text,
            label_style,
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        );
        frame.render_widget(
            Paragraph::new(label_line),
            Rect { height: 1, ..area },
        );

        let gauge_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        let ratio = (f64::from(value) / f64::from(domain.max)).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(if selected {
                Style::default().fg(GOLD).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Gray).bg(Color::DarkGray)
            })
            .ratio(ratio)
            .label("");
        frame.render_widget(gauge, gauge_area);
    }

    fn render_distribution_row(&self, frame: &mut Frame, area: Rect) {
        if area.height < 2 {
            return;
        }
        let selected = self.selected == Control::Distribution && self.editor.is_none();
        let marker = if selected { "> " } else { "  " };
        let label_style = if selected {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{}{}", marker, Control::Distribution.label()),
                label_style,
            ))),
            Rect { height: 1, ..area },
        );

        for (index, tier) in [
            Distribution::Local,
            Distribution::Regional,
            Distribution::National,
        ]
        .into_iter()
        .enumerate()
        {
            let y = area.y + 1 + index as u16;
            if y >= area.y + area.height {
                break;
            }
            let active = self.input.distribution == tier;
            let style = if active {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mark = if active { "(x)" } else { "( )" };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("  {} {} [{}]", mark, tier.label(), index + 1),
                    style,
                ))),
                Rect { y, height: 1, ..area },
            );
        }
    }

    /// Render the live burn analysis and the alternative-offer box (right pane)
    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Current Burn Analysis ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let results = &self.results;
        let width = inner.width;

        let value_style = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::Gray);
        let roi_style = if results.current_roi < 100.0 {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![
            padded_line(
                width,
                "Content Spend",
                &format_currency(f64::from(self.input.monthly_spend)),
                dim,
                value_style,
            ),
            padded_line(
                width,
                &format!(
                    "Time Cost ({}hrs x ${:.0}/hr)",
                    self.input.hours_per_week, HOURLY_RATE
                ),
                &format_currency(results.time_cost),
                dim,
                value_style,
            ),
            padded_line(
                width,
                "TRUE MONTHLY BURN",
                &format_currency(results.current_burn),
                Style::default().add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            padded_line(
                width,
                "Current Revenue",
                &format_currency(f64::from(self.input.monthly_revenue)),
                dim,
                value_style,
            ),
            Line::from(""),
            padded_line(
                width,
                "Current ROI",
                &format_percent(results.current_roi),
                dim,
                roi_style,
            ),
        ];

        if results.current_roi < 100.0 {
            lines.push(Line::from(Span::styled(
                "  Operating at a loss",
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "THE ALTERNATIVE",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )));
        let gold_value = Style::default().fg(GOLD).add_modifier(Modifier::BOLD);
        lines.push(padded_line(
            width,
            "Investment",
            &format!("{}/month", format_currency(OFFER_INVESTMENT)),
            dim,
            gold_value,
        ));
        lines.push(padded_line(
            width,
            "Time Returned",
            &format!("{} hours/week", TIME_RETURNED),
            dim,
            gold_value,
        ));
        lines.push(padded_line(
            width,
            "New Revenue Streams",
            &format!("+{}/month", format_currency(results.new_revenue)),
            dim,
            gold_value,
        ));
        lines.push(padded_line(
            width,
            "Break-Even Point",
            &format_break_even(results.break_even),
            Style::default().add_modifier(Modifier::BOLD),
            gold_value,
        ));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Render the revealed summary panel (below the panes)
    fn render_audit_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Financial Autopsy Results ")
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let results = &self.results;
        let mut lines = vec![Line::from(vec![
            Span::raw("You are currently burning "),
            Span::styled(
                format!("{}/month", format_currency(results.current_burn)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to earn "),
            Span::styled(
                format_currency(f64::from(self.input.monthly_revenue)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("."),
        ])];

        if results.monthly_loss > 0.0 {
            lines.push(Line::from(Span::styled(
                format!(
                    "You lose {} every 30 days.",
                    format_currency(results.monthly_loss)
                ),
                Style::default().fg(Color::Red),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("The audit flips the burn: ", Style::default().fg(GOLD)),
            Span::raw(format!(
                "invest {} -> own the infrastructure -> break even at ",
                format_currency(OFFER_INVESTMENT)
            )),
            Span::styled(
                format_break_even(results.break_even),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::raw("."),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        if self.notification.current().is_some() {
            render_notification(&self.notification, frame, area);
            return;
        }

        let hints = " Up/Down select | Left/Right adjust | e edit | Enter reveal | y copy | o book | ? help | q quit";
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

/// A single line with a left label and a right-aligned value
fn padded_line<'a>(
    width: u16,
    label: &str,
    value: &str,
    label_style: Style,
    value_style: Style,
) -> Line<'a> {
    let pad = (width as usize)
        .saturating_sub(label.len())
        .saturating_sub(value.len())
        .max(1);
    Line::from(vec![
        Span::styled(label.to_string(), label_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(value.to_string(), value_style),
    ])
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
