//! Quire CLI: inspect how a site's template names resolve.
//!
//! Provides `quire paths` for listing the search directories in precedence
//! order, `quire resolve` for showing which file each logical name maps to,
//! and `quire source` for printing a resolved template.

#![warn(missing_docs)]

mod paths;
mod project;
mod resolve;
mod source;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Quire: layered template resolution for static sites.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about = "Quire template resolver")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `quire.toml` configuration file or its directory.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List template search directories, highest precedence first.
    Paths,
    /// Show the file each logical template name resolves to.
    Resolve(ResolveArgs),
    /// Print the text of a resolved template.
    Source {
        /// Logical template name.
        name: String,
    },
}

/// Arguments for the `quire resolve` subcommand.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Logical template names to resolve.
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };
    init_tracing(&global);

    let result = match cli.command {
        Command::Paths => paths::run(&global),
        Command::Resolve(ref args) => resolve::run(args, &global),
        Command::Source { ref name } => source::run(name, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber at the level the flags ask for.
fn init_tracing(global: &GlobalArgs) {
    let level = if global.verbose {
        tracing::Level::DEBUG
    } else if global.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
