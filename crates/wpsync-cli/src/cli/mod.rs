//! CLI for the wpsync wallpaper manifest synchronizer.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use wpsync_core::config::{self, SyncConfig};

use commands::{run_completions, run_status, run_sync};

/// Top-level CLI. Without a subcommand, `sync` runs with configured paths.
#[derive(Debug, Parser)]
#[command(name = "wpsync")]
#[command(
    about = "wpsync: download remote wallpapers listed in a manifest and point it at the local copies",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Path overrides shared by `sync` and `status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct PathArgs {
    /// Manifest file to read and rewrite (default from config: wallpapers.json).
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Directory to save wallpapers into (default from config: wallpapers).
    #[arg(long, value_name = "DIR")]
    pub asset_dir: Option<PathBuf>,
}

impl PathArgs {
    fn apply(self, cfg: SyncConfig) -> SyncConfig {
        cfg.with_overrides(self.manifest, self.asset_dir)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every remote wallpaper and rewrite its url to the local path.
    Sync {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Show per-category counts of remote, local and missing entries.
    Status {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Sync {
            paths: PathArgs::default(),
        });

        if let CliCommand::Completions { shell } = command {
            return run_completions(shell);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let base_dir = std::env::current_dir()?;

        match command {
            CliCommand::Sync { paths } => run_sync(paths.apply(cfg), base_dir).await?,
            CliCommand::Status { paths } => run_status(paths.apply(cfg), base_dir).await?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
