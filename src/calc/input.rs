use clap::ValueEnum;
use serde::Deserialize;

/// Current distribution tier, a categorical proxy for reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    #[default]
    Local,
    Regional,
    National,
}

impl Distribution {
    /// Next tier, wrapping around
    pub fn next(self) -> Self {
        match self {
            Distribution::Local => Distribution::Regional,
            Distribution::Regional => Distribution::National,
            Distribution::National => Distribution::Local,
        }
    }

    /// Previous tier, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Distribution::Local => Distribution::National,
            Distribution::Regional => Distribution::Local,
            Distribution::National => Distribution::Regional,
        }
    }
}

/// Valid range and slider step for one numeric input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDomain {
    pub max: u32,
    pub step: u32,
}

impl FieldDomain {
    /// Clamp a raw value into the domain and snap it to the nearest step
    pub fn snap(self, value: u32) -> u32 {
        let clamped = value.min(self.max);
        let rem = clamped % self.step;
        let snapped = if rem * 2 >= self.step {
            clamped - rem + self.step
        } else {
            clamped - rem
        };
        snapped.min(self.max)
    }
}

/// Which input control is being adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MonthlySpend,
    MonthlyRevenue,
    HoursPerWeek,
    Distribution,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::MonthlySpend,
        Control::MonthlyRevenue,
        Control::HoursPerWeek,
        Control::Distribution,
    ];

    pub fn next(self) -> Self {
        match self {
            Control::MonthlySpend => Control::MonthlyRevenue,
            Control::MonthlyRevenue => Control::HoursPerWeek,
            Control::HoursPerWeek => Control::Distribution,
            Control::Distribution => Control::MonthlySpend,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Control::MonthlySpend => Control::Distribution,
            Control::MonthlyRevenue => Control::MonthlySpend,
            Control::HoursPerWeek => Control::MonthlyRevenue,
            Control::Distribution => Control::HoursPerWeek,
        }
    }

    /// Slider domain for the numeric controls; `None` for the tier selector
    pub fn domain(self) -> Option<FieldDomain> {
        match self {
            Control::MonthlySpend => Some(FieldDomain { max: 5000, step: 50 }),
            Control::MonthlyRevenue => Some(FieldDomain { max: 10000, step: 100 }),
            Control::HoursPerWeek => Some(FieldDomain { max: 40, step: 1 }),
            Control::Distribution => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::MonthlySpend => "Monthly Content Spend",
            Control::MonthlyRevenue => "Monthly Music Revenue",
            Control::HoursPerWeek => "Hours/Week on Admin",
            Control::Distribution => "Current Distribution",
        }
    }
}

/// The full input record the calculator derives from
///
/// All numeric fields are kept in-domain by the mutators below; the derivation
/// in [`super::calculate`] assumes valid input and does not re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorInput {
    pub monthly_spend: u32,
    pub monthly_revenue: u32,
    pub hours_per_week: u32,
    pub distribution: Distribution,
}

impl Default for CalculatorInput {
    /// Stock starting values for a first audit
    fn default() -> Self {
        Self {
            monthly_spend: 350,
            monthly_revenue: 500,
            hours_per_week: 10,
            distribution: Distribution::Local,
        }
    }
}

impl CalculatorInput {
    /// Get the current value of a numeric control
    pub fn value(&self, control: Control) -> Option<u32> {
        match control {
            Control::MonthlySpend => Some(self.monthly_spend),
            Control::MonthlyRevenue => Some(self.monthly_revenue),
            Control::HoursPerWeek => Some(self.hours_per_week),
            Control::Distribution => None,
        }
    }

    /// Set a numeric control, clamping and snapping to its domain
    pub fn set_value(&mut self, control: Control, value: u32) {
        let Some(domain) = control.domain() else {
            return;
        };
        let snapped = domain.snap(value);
        match control {
            Control::MonthlySpend => self.monthly_spend = snapped,
            Control::MonthlyRevenue => self.monthly_revenue = snapped,
            Control::HoursPerWeek => self.hours_per_week = snapped,
            Control::Distribution => {}
        }
    }

    /// Increase a control by one step (cycles the tier selector)
    pub fn step_up(&mut self, control: Control) {
        match control.domain() {
            Some(domain) => {
                let current = self.value(control).unwrap_or(0);
                self.set_value(control, current.saturating_add(domain.step));
            }
            None => self.distribution = self.distribution.next(),
        }
    }

    /// Decrease a control by one step (cycles the tier selector)
    pub fn step_down(&mut self, control: Control) {
        match control.domain() {
            Some(domain) => {
                let current = self.value(control).unwrap_or(0);
                self.set_value(control, current.saturating_sub(domain.step));
            }
            None => self.distribution = self.distribution.prev(),
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
