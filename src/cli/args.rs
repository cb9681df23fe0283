//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Resolve every manifest element and report constructor and manifest issues
//! - `resolve`: Print the resolved binding metadata of one type, property, or parameter
//! - `init`: Initialize a bindmeta configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(name = "bindmeta", author, version, about, long_about = None)]
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
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Manifest root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Type to resolve, as declared in a manifest
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// Resolve a property of the type instead of the type itself
    #[arg(long, conflicts_with = "parameter")]
    pub property: Option<String>,

    /// Resolve a parameter of the type's bound constructor
    #[arg(long)]
    pub parameter: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check manifests for constructor ambiguity, duplicate types, and parse errors
    Check(CheckCommand),
    /// Print the resolved binding metadata of a type, property, or constructor parameter
    Resolve(ResolveCommand),
    /// Initialize a new .bindmetarc.json configuration file
    Init,
}
