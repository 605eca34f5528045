//! Display formatting for the results pane and the plain-text report
//!
//! Currency is USD with no fractional digits (round half away from zero).
//! ROI renders as a whole percent.

use crate::calc::BreakEven;

/// Format a dollar amount: `1432.5` -> `"$1,433"`, `-200.0` -> `"-$200"`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.unsigned_abs()))
}

/// Format an ROI percentage as a whole percent: `34.904` -> `"35%"`
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Format the break-even point as a month label
pub fn format_break_even(break_even: BreakEven) -> String {
    match break_even {
        BreakEven::Immediate => "Immediate".to_string(),
        other => format!("Month {}", other),
    }
}

/// Insert comma separators into a non-negative integer
fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{:03}", group));
    }
    groups.reverse();
    groups.join(",")
}
