use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use knapgen::{write_instance, Generator, RangePolicy};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "knapsack_gen")]
#[command(version)]
#[command(about = "Print a random knapsack problem instance: a capacity line, then name,cost,value lines")]
struct Cli {
    /// Number of items to generate
    #[arg(value_name = "NUMBER_OF_ITEMS", allow_negative_numbers = true, value_parser = parse_item_count)]
    count: usize,

    /// Seed for a reproducible instance (default: system entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// How capacity, weights and name lengths scale with the item count
    #[arg(short, long, value_enum, default_value_t = Policy::Unique)]
    policy: Policy,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// capacity in [5n, 15n], names of 1 to 1 + n/26 letters
    Unique,
    /// capacity in [n, 10n], names of 5 to 10 letters
    Legacy,
}

impl From<Policy> for RangePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Unique => RangePolicy::Unique,
            Policy::Legacy => RangePolicy::Legacy,
        }
    }
}

fn parse_item_count(arg: &str) -> Result<usize, knapgen::Error> {
    let count: i128 = arg
        .trim()
        .parse()
        .map_err(|_| knapgen::Error::InvalidArgument(format!("`{arg}` is not a number")))?;
    if count <= 0 {
        return Err(knapgen::Error::InvalidArgument(format!(
            "number of items must be positive, got {count}"
        )));
    }
    usize::try_from(count)
        .map_err(|_| knapgen::Error::InvalidArgument(format!("{count} items is too many")))
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {err}");
    }
}

/// Die quietly on a closed stdout instead of reporting EPIPE, like other filters.
#[cfg(all(unix, feature = "default_sigpipe"))]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(all(unix, feature = "default_sigpipe")))]
fn reset_sigpipe() {}

fn run(cli: &Cli) -> Result<()> {
    let policy = RangePolicy::from(cli.policy);
    let mut generator = match cli.seed {
        Some(seed) => Generator::with_seed(policy, seed),
        None => Generator::new(policy),
    };
    debug!(seed = ?cli.seed, %policy, "seeded generator");

    // Generate everything before writing so a failure leaves stdout empty.
    let instance = generator
        .generate(cli.count)
        .with_context(|| format!("failed to generate {} items", cli.count))?;
    info!(
        items = instance.items.len(),
        capacity = instance.capacity,
        "generated instance"
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_instance(&instance, &mut writer).context("failed to write instance")?;
    writer.flush().context("failed to write instance")?;
    Ok(())
}

fn main() -> ExitCode {
    reset_sigpipe();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                return ExitCode::FAILURE;
            }
        },
    };
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("knapsack_gen: {err:#}");
            ExitCode::FAILURE
        }
    }
}
