use std::fmt;

use super::input::CalculatorInput;
use super::offer::{BREAK_EVEN_HORIZON, HOURLY_RATE, OFFER_INVESTMENT, WEEKS_PER_MONTH};

/// First month at which the offer's investment is recouped
///
/// `Capped` covers both "more than six months out" and "never recoups at the
/// current numbers"; both render as the six month display ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEven {
    /// Revenue already covers the full burn (ROI >= 100%)
    Immediate,
    /// Recoups within the displayed horizon (1..=6)
    Month(u32),
    /// At or beyond the six month display ceiling
    Capped,
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Immediate => write!(f, "Immediate"),
            BreakEven::Month(n) => write!(f, "{}", n),
            BreakEven::Capped => write!(f, "{}", BREAK_EVEN_HORIZON),
        }
    }
}

/// Everything the display layer shows, derived in one shot from the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// Monetized value of the weekly admin hours, per month
    pub time_cost: f64,
    /// True monthly cost: direct spend plus time cost
    pub current_burn: f64,
    /// Revenue over burn, as a percentage
    pub current_roi: f64,
    /// Fixed uplift assumed for the selected distribution tier
    pub new_revenue: f64,
    pub break_even: BreakEven,
    /// Burn minus revenue; negative means the user is already profitable
    pub monthly_loss: f64,
}

/// Derive all displayed metrics from the input record
///
/// Pure and total over the input domain: no side effects, no error conditions.
/// The only guarded case is a zero burn, which reports 0% ROI instead of
/// dividing by zero.
pub fn calculate(input: &CalculatorInput) -> CalculationResult {
    let time_cost = f64::from(input.hours_per_week) * WEEKS_PER_MONTH * HOURLY_RATE;
    let current_burn = f64::from(input.monthly_spend) + time_cost;
    let current_roi = if current_burn > 0.0 {
        f64::from(input.monthly_revenue) / current_burn * 100.0
    } else {
        0.0
    };

    let new_revenue = input.distribution.monthly_uplift();
    let total_new_revenue = f64::from(input.monthly_revenue) + new_revenue;
    let net_gain = total_new_revenue - OFFER_INVESTMENT;
    let monthly_loss = current_burn - f64::from(input.monthly_revenue);

    // Break-even policy, ordered: first match wins
    let break_even = if net_gain <= 0.0 {
        BreakEven::Capped
    } else if current_roi >= 100.0 {
        BreakEven::Immediate
    } else {
        let months = (OFFER_INVESTMENT / net_gain).ceil() as u32;
        if months > BREAK_EVEN_HORIZON {
            BreakEven::Capped
        } else {
            BreakEven::Month(months)
        }
    };

    CalculationResult {
        time_cost,
        current_burn,
        current_roi,
        new_revenue,
        break_even,
        monthly_loss,
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
