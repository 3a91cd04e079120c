mod commands;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt, EnvFilter};

/// Maritime navigation calculators and watch schedules.
#[derive(clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Opts {
    /// A level of verbosity, and can be used multiple times
    #[clap(short, long, parse(from_occurrences))]
    verbose: i32,
    /// Print results as JSON
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: commands::Command,
}

fn main() {
    // settings such as RUST_LOG or NAVCALC_MAX_WATCH_HOURS may live in a .env file
    dotenv::dotenv().ok();

    let opts: Opts = Opts::parse();
    init_tracing(opts.verbose);

    if let Err(err) = commands::execute(opts.command, opts.json) {
        tracing::error!(%err, "calculation failed");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: i32) {
    let registry = tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr));

    if let Ok(directives) = std::env::var("RUST_LOG") {
        registry.with(EnvFilter::new(directives)).init();
        return;
    }

    let max_level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    registry
        .with(filter::filter_fn(move |m| {
            m.target().starts_with("navcalc") && m.level() <= &max_level
        }))
        .init();
}
