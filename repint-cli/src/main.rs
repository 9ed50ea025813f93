use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use repint_core::Config;

mod commands;
mod output;

use commands::CliError;
use output::Output;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe a repeat vector: element kind, state and realized buffer.
    Inspect {
        /// JSON pair `[element, length]`, e.g. '[7, 5]' or '[null, 3]'
        spec: String,
        /// Materialize the buffer before inspecting
        #[clap(long)]
        materialize: bool,
    },
    /// Print the element at INDEX (0-based).
    Elt {
        /// JSON pair `[element, length]`, e.g. '[7, 5]' or '[null, 3]'
        spec: String,
        /// 0-based element index
        index: u64,
    },
    /// Copy a window of elements without materializing the vector.
    Region {
        /// JSON pair `[element, length]`, e.g. '[7, 5]' or '[null, 3]'
        spec: String,
        /// First index to copy
        #[clap(long, default_value_t = 0)]
        start: u64,
        /// Number of elements to copy
        #[clap(long)]
        count: u64,
    },
    /// Print sum, min, max, sortedness and missing-value status.
    Summary {
        /// JSON pair `[element, length]`, e.g. '[7, 5]' or '[null, 3]'
        spec: String,
        /// Skip missing values
        #[clap(long)]
        na_rm: bool,
    },
    /// Realize and print every element.
    Materialize {
        /// JSON pair `[element, length]`, e.g. '[7, 5]' or '[null, 3]'
        spec: String,
    },
}

#[derive(Parser)]
#[clap(version, author, about)]
pub struct Cli {
    /// Output format
    #[clap(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Suppress informational output
    #[clap(long, short, global = true)]
    pub quiet: bool,

    /// Path to a repint.toml (defaults to searching from the current directory)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

fn load_config(path: Option<&PathBuf>) -> commands::Result<Config> {
    if let Some(path) = path {
        return Config::load(path)
            .map_err(|e| CliError::Config(format!("Failed to load {}: {}", path.display(), e)));
    }
    let current_dir = std::env::current_dir()?;
    match Config::find(&current_dir) {
        Some(config) => Ok(config?),
        None => {
            log::debug!("No repint.toml found, using defaults");
            Ok(Config::default())
        }
    }
}

fn try_main(cli: Cli, output: &Output) -> Result<(), CliError> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Inspect { spec, materialize } => {
            commands::inspect::run(output, &config, &spec, materialize)
        }
        Command::Elt { spec, index } => commands::elt::run(output, &config, &spec, index),
        Command::Region { spec, start, count } => {
            commands::region::run(output, &config, &spec, start, count)
        }
        Command::Summary { spec, na_rm } => commands::summary::run(output, &config, &spec, na_rm),
        Command::Materialize { spec } => commands::materialize::run(output, &config, &spec),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.quiet);

    if let Err(e) = try_main(cli, &output) {
        output.error(e.error_type(), &e.to_string());
        ::std::process::exit(1)
    }
}
