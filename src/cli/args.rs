//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::Settings;
use crate::domain::WildcardPolicy;

/// Derive a compact pattern matching accepted words while rejecting rejected words.
///
/// Without a subcommand, behaves like `generate` with the configured input and output files.
#[derive(Parser, Debug)]
#[command(name = "patsyn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .patsyn.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the pattern and write keyword and pattern lines
    Generate {
        /// Input file (default: configured input, input.txt)
        #[arg(value_hint = ValueHint::FilePath)]
        input: Option<PathBuf>,
        /// Output file (default: configured output, output.txt)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing the output file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
        #[command(flatten)]
        synthesis: SynthesisArgs,
    },

    /// Show the prefix tree of the accepted words
    Tree {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        input: Option<PathBuf>,
    },

    /// Report rejected words the emitted pattern still matches
    Audit {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        input: Option<PathBuf>,
        #[command(flatten)]
        synthesis: SynthesisArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print config file locations
    Path,
}

/// Overrides for the synthesis settings.
#[derive(Args, Debug, Default, Clone)]
pub struct SynthesisArgs {
    /// Wildcard policy: interior, reachable or never
    #[arg(long, value_name = "POLICY")]
    pub wildcard: Option<WildcardPolicy>,

    /// Emit characters of words without escaping
    #[arg(long)]
    pub raw: bool,
}

impl SynthesisArgs {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(wildcard) = self.wildcard {
            settings.wildcard = wildcard;
        }
        if self.raw {
            settings.escape = false;
        }
    }
}
