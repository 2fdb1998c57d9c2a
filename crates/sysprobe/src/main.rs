//! sysprobe - one-shot report of process and host resource state.
//!
//! Prints open fds, RSS, executable path, CPU, memory, mounts and cgroup v1
//! limits, then exits.
//!
//! Usage:
//!   sysprobe           # tab-aligned table
//!   sysprobe --json    # pretty-printed JSON
//!
//! Probe failures that do not abort the run are logged to stderr at `warn`
//! level; set `RUST_LOG=debug` to see every probe result.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sysprobe_core::collector::{Collector, RealFs};
use sysprobe_core::render::{OutputFormat, render};

/// Point-in-time process and host resource report.
#[derive(Parser)]
#[command(name = "sysprobe", about = "Process and host resource snapshot", version)]
struct Args {
    /// Output in JSON format.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Initializes the tracing subscriber.
/// Default level is WARN; `RUST_LOG` overrides it.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let collector = Collector::new(RealFs::new());
    let snapshot = match collector.collect() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    debug!("rendering {:?} report", args.format());

    match render(&snapshot, args.format()) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("JSON marshal error: {}", e);
            std::process::exit(1);
        }
    }
}
