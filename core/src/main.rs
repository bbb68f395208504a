use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use status_core::{StatusChecker, STATUS_UNAVAILABLE};
use tracing_subscriber::EnvFilter;

/// Issue a GET to each URL and print the status code it returned.
///
/// Prints `0` for a URL whose request failed; the reason goes to stderr.
#[derive(Debug, Parser)]
#[command(name = "get-status", version, about)]
struct Cli {
    /// URLs to probe, in order.
    #[arg(required = true, env = "STATUS_PROBE_URL")]
    urls: Vec<String>,

    /// Probe the whole list this many times, one request at a time, and
    /// print a throughput summary.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Log every request at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "status_core=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let mut stdout = io::stdout().lock();
    match run_probes(&StatusChecker::new(), &cli.urls, cli.repeat, &mut stdout) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "writing results failed");
            ExitCode::FAILURE
        }
    }
}

/// Probe `urls` in order, `repeat` times, one request at a time.
///
/// Writes `<status>\t<url>` for each URL of the first round, then a
/// throughput summary when `repeat > 1`. Returns the number of probes that
/// yielded no status, across all rounds.
fn run_probes(
    checker: &StatusChecker,
    urls: &[String],
    repeat: u32,
    out: &mut impl Write,
) -> io::Result<u64> {
    let mut failures = 0u64;
    let mut round_rates = Vec::with_capacity(repeat as usize);
    let started = Instant::now();

    for round in 0..repeat {
        let round_started = Instant::now();
        for url in urls {
            let status = checker.get_status(url);
            if status == STATUS_UNAVAILABLE {
                failures += 1;
            }
            if round == 0 {
                writeln!(out, "{status}\t{url}")?;
            }
        }
        round_rates.push(rate(urls.len() as u64, round_started.elapsed()));
    }

    if repeat > 1 {
        let total = urls.len() as u64 * u64::from(repeat);
        let elapsed = started.elapsed();
        writeln!(
            out,
            "{total} requests in {:.2}s: {:.2} req/s (round mean {:.2}, median {:.2}, failures {failures})",
            elapsed.as_secs_f64(),
            rate(total, elapsed),
            mean(&round_rates),
            median(&round_rates),
        )?;
    }

    Ok(failures)
}

fn rate(requests: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    requests as f64 / secs
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2],
        n => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}
