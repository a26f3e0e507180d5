//! qbench Command-Line Interface
//!
//! Lists the registered benchmark circuits and generates them at a requested
//! size.
//!
//! ```text
//! qbench list
//! qbench generate dynamic_qft --qubits 8 --format qasm3 --output dqft_8.qasm
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::generate::OutputFormat;
use commands::list::ListFormat;
use commands::{generate, list, version};

/// qbench - benchmark circuit generation for quantum backends
#[derive(Parser)]
#[command(name = "qbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered benchmarks
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Generate a benchmark circuit
    Generate {
        /// Benchmark identifier (see `qbench list`)
        benchmark: String,

        /// Number of qubits
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        qubits: i64,

        /// Output format
        #[arg(short, long, value_enum, env = "QBENCH_FORMAT", default_value_t = OutputFormat::Qasm3)]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long, env = "QBENCH_OUTPUT")]
        output: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::List { format } => list::execute(format),

        Commands::Generate {
            benchmark,
            qubits,
            format,
            output,
        } => generate::execute(&benchmark, qubits, format, output.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
