//! CLI for the mactypes descriptor wrappers.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mactypes_core::config;

use commands::{run_alias, run_completions, run_file_url, run_path, run_units, run_url};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mactypes")]
#[command(about = "Convert between POSIX paths, file URLs, aliases and units", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the file://localhost URL for a POSIX path.
    Url {
        /// POSIX path (need not exist).
        path: String,
    },

    /// Print the POSIX path of a file:// URL.
    Path {
        /// file:// URL.
        url: String,
    },

    /// Resolve an alias to an existing filesystem object.
    Alias {
        /// POSIX path of an existing file or folder.
        path: String,
    },

    /// Build a file URL for a location that may not exist yet.
    FileUrl {
        /// POSIX path.
        path: String,
        /// Also convert to an alias (the location must exist).
        #[arg(long)]
        alias: bool,
    },

    /// Render a measurement, e.g. `units 3 square_feet`.
    Units {
        /// Numeric value.
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Unit tag, e.g. inches or degrees_Celsius.
        unit: String,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Url { path } => run_url(&path, cfg.output),
            CliCommand::Path { url } => run_path(&url, cfg.output)?,
            CliCommand::Alias { path } => run_alias(&path, cfg.output)?,
            CliCommand::FileUrl { path, alias } => run_file_url(&path, alias, cfg.output)?,
            CliCommand::Units { value, unit } => run_units(value, &unit, &cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
