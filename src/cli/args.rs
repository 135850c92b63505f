//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Plan (and with `--apply`, run) a translation pass
//! - `families`: List discovered document families and their members
//! - `init`: Initialize a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Sync(cmd)) => cmd.args.common.verbose,
            Some(Command::Families(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory to start searching for the config file from
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory to scan, relative to the project root (overrides config file)
    /// Can be specified multiple times: --scan-dir content/docs --scan-dir messages
    #[arg(long = "scan-dir")]
    pub scan_dirs: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Comma-separated list of changed files; omit for a full scan
    #[arg(long, env = "I18N_CHANGED_FILES")]
    pub changed_files: Option<String>,

    /// Actually call the translation backend and write files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Args)]
pub struct FamiliesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create missing and update existing translations for affected document families
    Sync(SyncCommand),
    /// List document families and the locale files they contain
    Families(FamiliesCommand),
    /// Initialize a new .i18nrc.json configuration file
    Init,
}
