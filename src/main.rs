use anyhow::Context;
use clap::Parser;
use station_uptime::cli::Args;
use station_uptime::constants::{ERROR_OUTPUT, EXIT_FAILURE, EXIT_SUCCESS, LOG_TARGET};
use station_uptime::output::{print_summary, write_results};
use station_uptime::{UptimeError, process_file};
use std::io;
use std::process;
use tracing::{debug, error};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{}", e);
            fail();
        }
    };

    setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            let line = e.downcast_ref::<UptimeError>().and_then(UptimeError::line);
            error!(line, "{:#}", e);
            fail();
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.to_config();
    config.log_effective();

    let run = process_file(&args.input, &config)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    let mut stdout = io::stdout().lock();
    write_results(&mut stdout, &run.results).context("Failed to write results")?;

    if config.summary {
        print_summary(&run.stats, &run.results);
    }
    Ok(())
}

/// Report failure the only way the output format allows
fn fail() -> ! {
    println!("{}", ERROR_OUTPUT);
    process::exit(EXIT_FAILURE);
}

/// Set up structured logging on stderr based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}
