use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use liveaudit::app::App;
use liveaudit::calc::{CalculatorInput, Control, Distribution, calculate};
use liveaudit::config;
use liveaudit::report::build_report;

/// Interactive burn-rate and ROI audit calculator
#[derive(Debug, Parser)]
#[command(name = "liveaudit", version, about)]
struct Cli {
    /// Explicit config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the audit report and exit instead of starting the TUI
    #[arg(long)]
    report: bool,

    /// Starting monthly content spend in dollars
    #[arg(long, value_name = "DOLLARS")]
    spend: Option<u32>,

    /// Starting monthly music revenue in dollars
    #[arg(long, value_name = "DOLLARS")]
    revenue: Option<u32>,

    /// Starting admin hours per week
    #[arg(long, value_name = "HOURS")]
    hours: Option<u32>,

    /// Starting distribution tier
    #[arg(long, value_enum, value_name = "TIER")]
    distribution: Option<Distribution>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    let mut input = cfg.defaults.to_input();
    apply_overrides(&mut input, &cli);

    if cli.report {
        let results = calculate(&input);
        print!("{}", build_report(&input, &results));
        return Ok(());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let app = App::new(input, &cfg);
    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    // Once revealed, the report follows the user out of the TUI
    let app = result?;
    if app.panel.is_shown() {
        print!("{}", build_report(&app.input, &app.results));
    }

    Ok(())
}

/// CLI flags override the configured starting values, clamped like any other
/// input mutation
fn apply_overrides(input: &mut CalculatorInput, cli: &Cli) {
    if let Some(spend) = cli.spend {
        input.set_value(Control::MonthlySpend, spend);
    }
    if let Some(revenue) = cli.revenue {
        input.set_value(Control::MonthlyRevenue, revenue);
    }
    if let Some(hours) = cli.hours {
        input.set_value(Control::HoursPerWeek, hours);
    }
    if let Some(distribution) = cli.distribution {
        input.distribution = distribution;
    }
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
