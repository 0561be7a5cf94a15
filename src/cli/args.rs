//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `get`: Resolve a scalar translation
//! - `list`: Resolve a list translation
//! - `keys`: List every translation path with its value type
//! - `render`: Print the copy of one site section
//! - `check`: Audit translation tables and `t()` / `ta()` call sites
//! - `init`: Initialize the karto configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;
use crate::core::Locale;
use crate::sections::SectionName;

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
            Some(Command::Get(cmd)) => cmd.lookup.common.verbose,
            Some(Command::List(cmd)) => cmd.lookup.common.verbose,
            Some(Command::Keys(cmd)) => cmd.lookup.common.verbose,
            Some(Command::Render(cmd)) => cmd.lookup.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long, value_enum)]
    pub primary_locale: Option<Locale>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for commands that read translations.
#[derive(Debug, Clone, Default, Args)]
pub struct LookupArgs {
    /// Locale to read (defaults to the configured default locale)
    #[arg(long, short, value_enum)]
    pub locale: Option<Locale>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Dot-delimited lookup path, e.g. `hero.title`
    pub path: String,
    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Dot-delimited lookup path of a list, e.g. `pricing.pro.features`
    pub path: String,
    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Only show paths under this prefix
    pub prefix: Option<String>,
    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    #[arg(value_enum)]
    pub section: SectionName,
    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the translation of a scalar path (the path itself when absent)
    Get(GetCommand),
    /// Print the items of a list path, one per line
    List(ListCommand),
    /// Print every translation path with its value type
    Keys(KeysCommand),
    /// Print the copy of a site section
    Render(RenderCommand),
    /// Check translation tables and call sites for drift and missing paths
    Check(CheckCommand),
    /// Initialize a new .kartorc.json configuration file
    Init,
}
