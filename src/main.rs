//! Bitga CLI - drive the optimizer against built-in sample objectives.

// Allow print in the CLI binary and the nanosecond seed truncation
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::cast_possible_truncation
)]

use bitga::{CrossoverConfig, DomainPair, GaConfig, Optimizer};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::process::ExitCode;
use std::time::Instant;

/// Bitga - binary-encoded genetic minimizer
#[derive(Parser, Debug)]
#[command(name = "bitga")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Objective to minimize
    #[arg(short, long, default_value = "cross-in-tray")]
    objective: Objective,

    /// Population size
    #[arg(short, long, default_value = "1024")]
    population: usize,

    /// Chromosome length in bits (even, at most 106)
    #[arg(short = 'l', long, default_value = "32")]
    length: usize,

    /// One end of the search interval
    #[arg(long, default_value = "-10", allow_hyphen_values = true)]
    min: f64,

    /// The other end of the search interval
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    max: f64,

    /// Probability that a pair of chromosomes is recombined
    #[arg(short, long, default_value = "1.0")]
    rate: f64,

    /// Maximum number of generations
    #[arg(short = 'g', long, default_value = "10000")]
    generations: u64,

    /// Random seed (default: derived from the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Show progress bar instead of periodic generation lines
    #[arg(long)]
    progress: bool,
}

/// Built-in sample objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Objective {
    /// Cross-in-tray test function; four symmetric minima near (±1.35, ±1.35).
    CrossInTray,
    /// Sphere function x² + y², minimum at the origin.
    Sphere,
    /// Rastrigin function, many regularly spaced local minima.
    Rastrigin,
}

impl Objective {
    fn evaluate(self, (x, y): DomainPair) -> f64 {
        use std::f64::consts::PI;

        match self {
            Self::CrossInTray => {
                let inner = (x.sin() * y.sin() * (100.0 - x.hypot(y) / PI).abs().exp()).abs() + 1.0;
                -0.0001 * inner.powf(0.1)
            }
            Self::Sphere => x * x + y * y,
            Self::Rastrigin => {
                20.0 + x * x - 10.0 * (2.0 * PI * x).cos() + y * y - 10.0 * (2.0 * PI * y).cos()
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::CrossInTray => "cross-in-tray",
            Self::Sphere => "sphere",
            Self::Rastrigin => "rastrigin",
        }
    }
}

/// Output format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Final report of a minimization run.
#[derive(Debug, Serialize)]
struct RunSummary {
    objective: &'static str,
    seed: u64,
    generations: u64,
    converged: bool,
    minimum: f64,
    x: f64,
    y: f64,
    elapsed_seconds: f64,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let config = GaConfig {
        population_size: args.population,
        chromosome_length: args.length,
        crossover: CrossoverConfig { rate: args.rate },
        bound_a: args.min,
        bound_b: args.max,
    };

    let objective = args.objective;
    let mut ga = Optimizer::with_seed(&config, move |domain| objective.evaluate(domain), seed)?;

    let pb = if args.progress {
        let pb = ProgressBar::new(args.generations);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} generations",
                )
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let mut generation = 0u64;
    let mut converged = false;

    while generation < args.generations {
        if !ga.step()? {
            converged = true;
            break;
        }
        generation += 1;

        if let Some(pb) = &pb {
            pb.inc(1);
        } else if args.format == OutputFormat::Text && generation % 100 == 0 {
            let (_, best) = ga.best_solution();
            println!("gen {generation:>5}: best={best:.6}");
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let elapsed = start.elapsed().as_secs_f64();
    let ((x, y), minimum) = ga.best_solution();

    let summary = RunSummary {
        objective: args.objective.name(),
        seed,
        generations: generation,
        converged,
        minimum,
        x,
        y,
        elapsed_seconds: elapsed,
    };

    match args.format {
        OutputFormat::Text => {
            println!();
            println!("Minimization complete!");
            println!("  Objective: {}", summary.objective);
            println!("  Seed: {}", summary.seed);
            if summary.converged {
                println!("  Converged after {} generations", summary.generations);
            } else {
                println!(
                    "  Generation cap reached ({} generations)",
                    summary.generations
                );
            }
            println!("  Minimum: {:.6}", summary.minimum);
            println!("  x: {:.6}  y: {:.6}", summary.x, summary.y);
            println!("  Elapsed time: {:.3}s", summary.elapsed_seconds);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_in_tray_matches_known_minimum() {
        // Global minima are approximately -2.06261 at (±1.34941, ±1.34941).
        let value = Objective::CrossInTray.evaluate((1.34941, 1.34941));
        assert!((value + 2.06261).abs() < 1e-3);
    }

    #[test]
    fn test_sphere_minimum_at_origin() {
        assert!(Objective::Sphere.evaluate((0.0, 0.0)).abs() < f64::EPSILON);
        assert!(Objective::Sphere.evaluate((1.0, 2.0)) > 0.0);
    }

    #[test]
    fn test_rastrigin_minimum_at_origin() {
        assert!(Objective::Rastrigin.evaluate((0.0, 0.0)).abs() < 1e-12);
        assert!(Objective::Rastrigin.evaluate((0.5, 0.5)) > 0.0);
    }
}
