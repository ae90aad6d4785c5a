//! Runway Simulator CLI
//!
//! Runs one scenario and prints the flight table and KPIs.
//!
//! Usage: `runway-sim [--config FILE] [--performance TIER] [--weather WEATHER]
//! [--flights N] [--runways N] [--seed N] [--strategy NAME] [--format text|json]`
//!
//! Values from `--config` (JSON, any subset of fields) are applied first,
//! then command-line flags override them. Logs go to stderr, results to
//! stdout.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use runway_simulator_core_rs::{
    simulate, PerformanceTier, RunwayStrategy, ScenarioConfig, SimulationReport, WeatherCondition,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "runway-sim")]
#[command(about = "Simulate runway scheduling delays before and after optimization")]
struct Args {
    /// JSON scenario file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Performance tier: Bad, Medium, Good, Excellent
    #[arg(long)]
    performance: Option<PerformanceTier>,

    /// Weather: Clear, "Light Rain", Thunderstorm, Fog
    #[arg(long)]
    weather: Option<WeatherCondition>,

    /// Number of flights
    #[arg(long)]
    flights: Option<usize>,

    /// Number of runways
    #[arg(long)]
    runways: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Runway strategy: two_runway or trend (default follows runway count)
    #[arg(long)]
    strategy: Option<RunwayStrategy>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,runway_sim=info,runway_simulator_core_rs=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    info!(
        tier = %config.performance_tier,
        weather = %config.weather_condition,
        flights = config.flight_count,
        runways = config.runway_count,
        seed = config.rng_seed,
        "running scenario"
    );

    let report = simulate(config).context("simulation failed")?;

    let output = match args.format {
        OutputFormat::Json => report.to_json_pretty()?,
        OutputFormat::Text => render_text(&report),
    };
    println!("{}", output);
    Ok(())
}

/// Layer file values, then flags, over the defaults
fn build_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<ScenarioConfig>(&raw)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    if let Some(tier) = args.performance {
        config.performance_tier = tier;
    }
    if let Some(weather) = args.weather {
        config.weather_condition = weather;
    }
    if let Some(flights) = args.flights {
        config.flight_count = flights;
    }
    if let Some(runways) = args.runways {
        config.runway_count = runways;
    }
    if let Some(seed) = args.seed {
        config.rng_seed = seed;
    }
    if let Some(strategy) = args.strategy {
        config.runway_strategy = Some(strategy);
    }

    Ok(config)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Plain-text rendering of a report
fn render_text(report: &SimulationReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.profile.describe());
    let _ = writeln!(
        out,
        "Runway strategy: {} ({} runways) | config {}",
        report.profile.runway_strategy,
        report.profile.runway_count,
        &report.config_hash[..12]
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<7} {:<10} {:>5} {:>7} {:>6} {:>6} {:>6} {:>6} {:>8} {:>6} {:>6}",
        "Flight", "Type", "Sched", "Delayed", "Before", "New", "After", "New", "Improved", "Rwy", "Rwy'"
    );
    for f in &report.flights {
        let _ = writeln!(
            out,
            "{:<7} {:<10} {:>5} {:>7} {:>6} {:>6} {:>6} {:>6} {:>8} {:>6} {:>6}",
            f.id(),
            f.kind().to_string(),
            f.scheduled_time(),
            yes_no(f.delayed_before()),
            f.delay_before_min(),
            f.new_time_before(),
            f.delay_after_min(),
            f.new_time_after(),
            yes_no(f.improved()),
            f.runway_before(),
            f.runway_after(),
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Runway occupancy (before -> after):");
    for entry in &report.runway_occupancy {
        let _ = writeln!(out, "  {:<5} {:>4} -> {:<4}", entry.runway, entry.before, entry.after);
    }
    let _ = writeln!(out);

    let s = &report.summary;
    let _ = writeln!(out, "Average delay before: {:.1} min", s.avg_delay_before);
    let _ = writeln!(out, "Average delay after:  {:.1} min", s.avg_delay_after);
    let _ = writeln!(
        out,
        "Delayed flights: {} -> {} | improved: {}",
        s.delayed_before_count, s.delayed_after_count, s.improved_count
    );
    let _ = writeln!(out, "Improvement: {:.1}%", s.improvement_pct);
    let _ = writeln!(
        out,
        "Estimated savings: {} ({} planes back under 240 min)",
        s.estimated_savings, s.savings_count
    );
    let _ = write!(out, "Feedback: {}", s.feedback);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["runway-sim"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = build_config(&args(&[
            "--performance",
            "bad",
            "--weather",
            "Light Rain",
            "--flights",
            "40",
            "--runways",
            "20",
            "--seed",
            "7",
        ]))
        .unwrap();

        assert_eq!(config.performance_tier, PerformanceTier::Bad);
        assert_eq!(config.weather_condition, WeatherCondition::LightRain);
        assert_eq!(config.flight_count, 40);
        assert_eq!(config.runway_count, 20);
        assert_eq!(config.rng_seed, 7);
        assert_eq!(config.runway_strategy, None);
    }

    #[test]
    fn test_unknown_weather_rejected_by_parser() {
        let parsed = Args::try_parse_from(["runway-sim", "--weather", "Hail"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = build_config(&args(&["--config", "/nonexistent/scenario.json"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_text_lists_every_flight() {
        let report = simulate(ScenarioConfig::default()).unwrap();
        let text = render_text(&report);

        for flight in &report.flights {
            assert!(text.contains(flight.id()));
        }
        assert!(text.contains(report.summary.feedback.message()));
    }
}
