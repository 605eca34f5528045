//! Process-wide constants describing the time valuation and the fixed
//! alternative offer the calculator compares against.

use super::input::Distribution;

/// Dollar value assigned to one hour of admin work
pub const HOURLY_RATE: f64 = 25.0;

/// Average weeks per month used to monetize weekly hours
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Fixed monthly cost of the alternative offer
pub const OFFER_INVESTMENT: f64 = 1500.0;

/// Weekly hours the offer hands back (comparison panel only)
pub const TIME_RETURNED: u32 = 30;

/// Display ceiling for the break-even month
pub const BREAK_EVEN_HORIZON: u32 = 6;

/// Booking page opened by the call-to-action key
pub const BOOKING_URL: &str = "https://calendly.com";

impl Distribution {
    /// Fixed monthly revenue uplift assumed for each distribution tier
    pub fn monthly_uplift(self) -> f64 {
        match self {
            Distribution::Local => 800.0,
            Distribution::Regional => 1500.0,
            Distribution::National => 2400.0,
        }
    }

    /// Human-readable tier label
    pub fn label(self) -> &'static str {
        match self {
            Distribution::Local => "Local circuit only",
            Distribution::Regional => "Regional",
            Distribution::National => "National (no system)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uplift_increases_with_tier() {
        assert!(Distribution::Local.monthly_uplift() < Distribution::Regional.monthly_uplift());
        assert!(Distribution::Regional.monthly_uplift() < Distribution::National.monthly_uplift());
    }

    #[test]
    fn test_uplift_table_values() {
        assert_eq!(Distribution::Local.monthly_uplift(), 800.0);
        assert_eq!(Distribution::Regional.monthly_uplift(), 1500.0);
        assert_eq!(Distribution::National.monthly_uplift(), 2400.0);
    }
}
