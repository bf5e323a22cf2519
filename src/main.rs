/* ====================================================================================================
  SEQUENTIAL VS INTERLEAVED PRIME SEARCH
====================================================================================================

OVERVIEW:
  Finds every prime below a limit (30 million by default) with plain trial division, first on the
  main thread and then across a fixed pool of 4 worker threads, and prints the elapsed wall-clock
  time of each run.

PROGRAM FLOW:
  1. Parse the command line and install the stderr log subscriber
  2. Sequential run: build [1, limit), drop the non-primes in place, stop the clock
  3. Threaded run: build one interleaved partition per worker (start 1 + i, step 4)
  4. Each worker filters its own partition; the main thread joins all of them
  5. Filtered partitions are concatenated and the clock is stopped
  6. Both timings are printed, optionally followed by the primes themselves

PARTITIONING:
  Worker i sees i + 1, i + 5, i + 9, ... so every worker owns one residue class modulo 4. The
  classes never overlap, which leaves nothing to lock while filtering. The threaded result is
  grouped by class, so its order differs from the sequential result.

OUTPUT:
  stdout: "Single-threaded: <ms>ms elapsed" and "Multithreaded: <ms>ms elapsed"
  stderr: tracing events, filtered by RUST_LOG (default prime_bench=info)

==================================================================================================== */

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use prime_bench::{console, run_sequential, run_threaded, Int, LIMIT, N_THREADS};

#[derive(Parser)]
#[command(name = "prime-bench")]
#[command(about = "Time a single-threaded and a multi-threaded trial-division prime search")]
#[command(version)]
struct Cli {
    /// Exclusive upper bound of the search
    #[arg(long, default_value_t = LIMIT)]
    limit: Int,

    /// Print the primes found by both runs after timing
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "prime_bench=info"
                    .parse()
                    .expect("static directive is valid"),
            ),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> prime_bench::Result<()> {
    info!(limit = cli.limit, threads = N_THREADS, "starting prime search");

    let sequential = run_sequential(cli.limit)?;
    console::report(&sequential)?;

    let threaded = run_threaded(cli.limit)?;
    console::report(&threaded)?;

    if cli.print {
        console::print_sequence(&sequential.primes)?;
        console::print_sequence(&threaded.primes)?;
    }

    Ok(())
}
