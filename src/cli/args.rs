//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! type-locales commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `generate`: Merge locale files and write the typed key module
//! - `check`: Merge locale files and report conflicts without writing
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::OutputLang;

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
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing <locale>.json files (overrides config file)
    pub path: Option<PathBuf>,

    /// Also read locale files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file; the language extension is added when missing
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output language
    #[arg(short, long, value_enum)]
    pub lang: Option<OutputLang>,

    /// Spaces per indentation level
    #[arg(short, long)]
    pub indent: Option<usize>,

    /// Terminate statements with semicolons
    #[arg(long)]
    pub semi: bool,

    /// Emit the key mapping without a type description
    #[arg(long)]
    pub no_typing: bool,

    /// Do not mark keys missing from some locales as optional
    #[arg(long)]
    pub no_strict: bool,

    /// Do not emit the LocalesMap placeholder type
    #[arg(long)]
    pub no_placeholders: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge locale files and write the typed translation key module
    Generate(GenerateCommand),
    /// Report conflicts and missing keys without writing anything
    Check(CheckCommand),
    /// Initialize a new .typelocalesrc.json configuration file
    Init,
}
