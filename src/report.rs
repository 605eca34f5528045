//! Plain-text audit report
//!
//! The same text backs `--report`, the copy-to-clipboard action, and the
//! output printed on exit after the results panel was revealed.

use crate::calc::{
    BOOKING_URL, CalculationResult, CalculatorInput, HOURLY_RATE, OFFER_INVESTMENT, TIME_RETURNED,
};
use crate::format::{format_break_even, format_currency, format_percent};

const LABEL_WIDTH: usize = 30;

/// Build the full report for one input/result pair
pub fn build_report(input: &CalculatorInput, results: &CalculationResult) -> String {
    let mut out = String::new();

    out.push_str("THE LIVE AUDIT\n");
    out.push_str("==============\n\n");

    out.push_str("CURRENT BURN ANALYSIS\n");
    push_row(
        &mut out,
        "Content spend",
        &format_currency(f64::from(input.monthly_spend)),
    );
    push_row(
        &mut out,
        &format!(
            "Time cost ({}hrs x ${:.0}/hr)",
            input.hours_per_week, HOURLY_RATE
        ),
        &format_currency(results.time_cost),
    );
    push_row(
        &mut out,
        "True monthly burn",
        &format_currency(results.current_burn),
    );
    push_row(
        &mut out,
        "Current revenue",
        &format_currency(f64::from(input.monthly_revenue)),
    );

    let roi_note = if results.current_roi < 100.0 {
        "  (operating at a loss)"
    } else {
        ""
    };
    push_row(
        &mut out,
        "Current ROI",
        &format!("{}{}", format_percent(results.current_roi), roi_note),
    );
    out.push('\n');

    out.push_str("THE ALTERNATIVE\n");
    push_row(
        &mut out,
        "Investment",
        &format!("{}/month", format_currency(OFFER_INVESTMENT)),
    );
    push_row(
        &mut out,
        "Time returned",
        &format!("{} hours/week", TIME_RETURNED),
    );
    push_row(
        &mut out,
        "New revenue streams",
        &format!("+{}/month", format_currency(results.new_revenue)),
    );
    push_row(
        &mut out,
        "Break-even point",
        &format_break_even(results.break_even),
    );
    out.push('\n');

    out.push_str(&format!(
        "You are currently burning {}/month to earn {}.\n",
        format_currency(results.current_burn),
        format_currency(f64::from(input.monthly_revenue)),
    ));
    if results.monthly_loss > 0.0 {
        out.push_str(&format!(
            "You lose {} every 30 days.\n",
            format_currency(results.monthly_loss)
        ));
    }
    out.push_str(&format!(
        "Invest {} -> break even at {}.\n\n",
        format_currency(OFFER_INVESTMENT),
        format_break_even(results.break_even),
    ));

    out.push_str(&format!("Book the audit: {}\n", BOOKING_URL));

    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<width$}{}\n", label, value, width = LABEL_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::calculate;

    #[test]
    fn test_report_contains_scenario_figures() {
        let input = CalculatorInput::default();
        let results = calculate(&input);
        let report = build_report(&input, &results);

        assert!(report.contains("$1,083")); // time cost
        assert!(report.contains("$1,433")); // burn
        assert!(report.contains("35%"));
        assert!(report.contains("operating at a loss"));
        assert!(report.contains("You lose $933 every 30 days."));
        assert!(report.contains("Month 6"));
        assert!(report.contains(BOOKING_URL));
    }

    #[test]
    fn test_loss_line_omitted_when_profitable() {
        let input = CalculatorInput {
            monthly_spend: 100,
            monthly_revenue: 5000,
            hours_per_week: 0,
            ..CalculatorInput::default()
        };
        let results = calculate(&input);
        let report = build_report(&input, &results);

        assert!(!report.contains("You lose"));
        assert!(report.contains("Immediate"));
    }

    #[test]
    fn test_roi_note_absent_at_or_above_100() {
        let input = CalculatorInput {
            monthly_spend: 100,
            monthly_revenue: 5000,
            hours_per_week: 0,
            ..CalculatorInput::default()
        };
        let results = calculate(&input);
        let report = build_report(&input, &results);

        assert!(!report.contains("operating at a loss"));
    }

    #[test]
    fn test_alternative_section_is_static_apart_from_uplift() {
        let input = CalculatorInput::default();
        let results = calculate(&input);
        let report = build_report(&input, &results);

        assert!(report.contains("$1,500/month"));
        assert!(report.contains("30 hours/week"));
        assert!(report.contains("+$800/month"));
    }
}
