// Transform/reduce benchmark runner
// Runs one strategy once over N zero-initialised f64 values and prints
//   <strategy>, result = <sum>, duration = <microseconds>us
//
// Usage: transform_reduce <seq|par|par_unseq|unseq|tbb|omp> [--threads T] [--grain G] [--affinity] [--format text|csv|json]

use std::process::ExitCode;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use tracing::error;

use transform_reduce_bench::strategies::token_list;
use transform_reduce_bench::{logging, report, timing, workload};
use transform_reduce_bench::{BenchConfig, ExecContext, OutputFormat, Strategy};

#[derive(Debug, Parser)]
#[command(
    name = "transform_reduce",
    about = "Time sigmoid(sin(x)) transform + sum under one execution strategy",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Execution strategy
    #[arg(value_enum, value_name = "STRATEGY")]
    strategy: Strategy,

    /// Worker threads (0 = all cores)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Minimum blocked-range size for `tbb`
    #[arg(
        long,
        default_value_t = transform_reduce_bench::context::DEFAULT_GRAIN,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    grain: usize,

    /// Pin worker threads to cores
    #[arg(long)]
    affinity: bool,

    /// Report line format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            threads: self.threads,
            grain: self.grain,
            affinity: self.affinity,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(err),
    };

    logging::init();

    match run(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let ctx = ExecContext::new(&cli.config()).context("invalid execution settings")?;
    let measurement = timing::measure(cli.strategy, workload::N, &ctx)
        .with_context(|| format!("strategy {} failed", cli.strategy))?;
    report::render(&measurement, cli.format).context("failed to render report")
}

// every parse failure, including --help and --version, is a usage error
fn usage_error(err: clap::Error) -> ExitCode {
    eprint!("{}", err.render());
    print_usage();
    ExitCode::from(1)
}

fn print_usage() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "transform_reduce".to_string());
    println!("Usage: {} {}", program, token_list());
}
