// Configuration type definitions

use serde::Deserialize;

use crate::calc::{CalculatorInput, Control, Distribution};

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Starting values for the input sliders
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "defaults::spend")]
    pub spend: u32,
    #[serde(default = "defaults::revenue")]
    pub revenue: u32,
    #[serde(default = "defaults::hours")]
    pub hours: u32,
    #[serde(default)]
    pub distribution: Distribution,
}

mod defaults {
    pub fn spend() -> u32 {
        350
    }
    pub fn revenue() -> u32 {
        500
    }
    pub fn hours() -> u32 {
        10
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            spend: defaults::spend(),
            revenue: defaults::revenue(),
            hours: defaults::hours(),
            distribution: Distribution::default(),
        }
    }
}

impl DefaultsConfig {
    /// Build the starting input record, clamping configured values into the
    /// slider domains
    pub fn to_input(&self) -> CalculatorInput {
        let mut input = CalculatorInput {
            distribution: self.distribution,
            ..CalculatorInput::default()
        };
        input.set_value(Control::MonthlySpend, self.spend);
        input.set_value(Control::MonthlyRevenue, self.revenue);
        input.set_value(Control::HoursPerWeek, self.hours);
        input
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_stock_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(config.defaults.to_input(), CalculatorInput::default());
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
[clipboard]
backend = "osc52"

[defaults]
spend = 1000
revenue = 2000
hours = 20
distribution = "national"
"#,
        )
        .unwrap();

        assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
        let input = config.defaults.to_input();
        assert_eq!(input.monthly_spend, 1000);
        assert_eq!(input.monthly_revenue, 2000);
        assert_eq!(input.hours_per_week, 20);
        assert_eq!(input.distribution, Distribution::National);
    }

    #[test]
    fn test_out_of_domain_defaults_are_clamped() {
        let config: Config = toml::from_str(
            r#"
[defaults]
spend = 99999
hours = 55
"#,
        )
        .unwrap();

        let input = config.defaults.to_input();
        assert_eq!(input.monthly_spend, 5000);
        assert_eq!(input.hours_per_week, 40);
        // untouched fields keep the stock defaults
        assert_eq!(input.monthly_revenue, 500);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[clipboard]
backend = "telepathy"
"#,
        );

        assert!(result.is_err());
    }

    // Property: every valid backend value round-trips through the parser.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_backend_parsing(backend in prop::sample::select(vec!["auto", "system", "osc52"])) {
            let toml_content = format!("[clipboard]\nbackend = \"{}\"\n", backend);

            let config: Config = toml::from_str(&toml_content).unwrap();

            let expected = match backend {
                "auto" => ClipboardBackend::Auto,
                "system" => ClipboardBackend::System,
                "osc52" => ClipboardBackend::Osc52,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.clipboard.backend, expected);
        }

        // Property: any in-domain defaults section produces exactly those
        // starting values after clamping.
        #[test]
        fn prop_in_domain_defaults_preserved(
            spend in (0u32..=100).prop_map(|n| n * 50),
            revenue in (0u32..=100).prop_map(|n| n * 100),
            hours in 0u32..=40,
        ) {
            let toml_content = format!(
                "[defaults]\nspend = {}\nrevenue = {}\nhours = {}\n",
                spend, revenue, hours
            );

            let config: Config = toml::from_str(&toml_content).unwrap();
            let input = config.defaults.to_input();

            prop_assert_eq!(input.monthly_spend, spend);
            prop_assert_eq!(input.monthly_revenue, revenue);
            prop_assert_eq!(input.hours_per_week, hours);
        }
    }
}
