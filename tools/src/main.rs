//! game-runner: headless runner for the climate adoption game.
//!
//! Usage:
//!   game-runner --data data/countries.json --rounds 10 --theta 0.8
//!   game-runner --data data/countries.json --out history.json

use anyhow::{Context, Result};
use climate_core::{config::GameConfig, country::RawCountry, engine::GameEngine, snapshot::History};
use std::env;
use std::fs;

#[derive(serde::Serialize)]
struct RunSummary {
    countries: usize,
    rounds: u64,
    snapshots: usize,
    final_w: f64,
    threshold_crossed: bool,
    final_adopters: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    const KNOWN_FLAGS: [&str; 9] = [
        "--data", "--out", "--rounds", "--lambda", "--gamma", "--z", "--theta", "--min-gdp",
        "--json",
    ];
    for arg in args.iter().filter(|a| a.starts_with("--")) {
        if !KNOWN_FLAGS.contains(&arg.as_str()) {
            log::warn!("Unknown flag: {arg}");
        }
    }

    let data_path = parse_str(&args, "--data", "data/countries.json");
    let out_path = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].clone());
    let json_mode = args.iter().any(|a| a == "--json");

    let mut config = GameConfig::default();
    config.rounds = parse_arg(&args, "--rounds", config.rounds);
    config.lambda_u = parse_arg(&args, "--lambda", config.lambda_u);
    config.gamma = parse_arg(&args, "--gamma", config.gamma);
    config.z = parse_arg(&args, "--z", config.z);
    config.theta = parse_arg(&args, "--theta", config.theta);
    config.min_gdp_threshold = parse_arg(&args, "--min-gdp", config.min_gdp_threshold);

    if !json_mode {
        println!("Climate Adoption Game — game-runner");
        println!("  data:     {data_path}");
        println!("  rounds:   {}", config.rounds);
        println!("  lambda_u: {}", config.lambda_u);
        println!("  gamma:    {}", config.gamma);
        println!("  Z:        {}", config.z);
        println!("  theta:    {}", config.theta);
        println!("  min GDP:  {}", config.min_gdp_threshold);
        println!();
    }

    let raw = fs::read_to_string(&data_path).with_context(|| format!("Cannot read {data_path}"))?;
    let records: Vec<RawCountry> = serde_json::from_str(&raw)?;

    let engine = GameEngine::new(&records, config)?;
    let country_count = engine.countries().len();
    let history = engine.run();

    if json_mode {
        println!("{}", serde_json::to_string(&build_summary(&history, country_count))?);
    } else {
        print_summary(&history, country_count);
    }

    if let Some(path) = out_path {
        fs::write(&path, history.to_json()?).with_context(|| format!("Cannot write {path}"))?;
        if !json_mode {
            println!();
            println!("History written to {path}");
        }
    }

    Ok(())
}

fn build_summary(history: &History, country_count: usize) -> RunSummary {
    let last_round = history.rounds();
    let last_rows: Vec<_> = history
        .rows()
        .iter()
        .filter(|r| r.round == last_round)
        .collect();
    RunSummary {
        countries: country_count,
        rounds: last_round,
        snapshots: history.len(),
        final_w: last_rows.first().map_or(0.0, |r| r.w),
        threshold_crossed: last_rows.first().is_some_and(|r| r.threshold_crossed),
        final_adopters: last_rows
            .iter()
            .filter(|r| r.strategy.is_adopt())
            .map(|r| r.country.clone())
            .collect(),
    }
}

fn print_summary(history: &History, country_count: usize) {
    println!("=== RUN SUMMARY ===");
    println!("  countries: {country_count}");
    println!("  rounds:    {}", history.rounds());
    println!("  snapshots: {}", history.len());
    println!();
    println!("  round |      W_t | adopting | crossed");
    println!("  ------+----------+----------+--------");

    let adoption = history.global_adoption();
    let shares = history.adoption_share();
    for ((round, w), (_, share)) in adoption.iter().zip(&shares) {
        let crossed = history
            .rows()
            .iter()
            .find(|r| r.round == *round)
            .is_some_and(|r| r.threshold_crossed);
        println!(
            "  {round:>5} | {w:>8.4} | {:>7.1}% | {}",
            share * 100.0,
            if crossed { "yes" } else { "no" },
        );
    }

    let last_round = history.rounds();
    let adopters: Vec<&str> = history
        .rows()
        .iter()
        .filter(|r| r.round == last_round && r.strategy.is_adopt())
        .map(|r| r.country.as_str())
        .collect();
    println!();
    if adopters.is_empty() {
        println!("  final adopters: (none)");
    } else {
        println!("  final adopters: {}", adopters.join(", "));
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn parse_str(args: &[String], flag: &str, default: &str) -> String {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
        .unwrap_or_else(|| default.to_string())
}
