//! Depdot CLI - dependency graphs from the command line.
//!
//! Reads an edge list on stdin and writes DOT (or a filtered edge list)
//! on stdout:
//!
//! ```text
//! go mod graph | depdot | dot -Tpng -o graph.png
//! go mod graph | depdot --dest test.com/D
//! ```

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Convert a "parent child" dependency edge list on stdin into Graphviz
/// DOT on stdout, highlighting which version of each module was selected.
#[derive(Parser)]
#[command(name = "depdot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Emit only the edges on paths from the root to nodes containing
    /// this label, as a plain edge list instead of DOT
    #[arg(short, long, env = "DEPDOT_DST_NODE", default_value = "")]
    dest: String,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity; diagnostics go to stderr so the
    // rendered graph on stdout stays clean.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    let result = depdot::render(stdin, &mut stdout, &cli.dest)
        .and_then(|()| stdout.flush().map_err(depdot::Error::Io));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
