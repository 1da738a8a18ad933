//! Command line argument parsing for the Parrot CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paraphrase::level::DifficultyLevel;

/// Parrot - a synonym-based document paraphraser
#[derive(Parser, Debug, Clone)]
#[command(name = "parrot")]
#[command(about = "A synonym-based document paraphraser for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Parrot Contributors")]
#[command(long_about = None)]
pub struct ParrotArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ParrotArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract text from a document and paraphrase it
    Paraphrase(ParaphraseArgs),

    /// Extract text from a document without paraphrasing
    Extract(ExtractArgs),

    /// Show the synonym candidates recorded for a word
    Synonyms(SynonymsArgs),
}

/// Arguments for paraphrasing a document
#[derive(Parser, Debug, Clone)]
pub struct ParaphraseArgs {
    /// Document file to paraphrase (.pdf or .txt)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Difficulty level to produce
    #[arg(short, long, default_value = "all")]
    pub level: LevelSelection,

    /// Seed for the random source (pins medium/hard output)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Lexicon file (JSON); defaults to the bundled lexicon
    #[arg(long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,
}

/// Arguments for text extraction
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Document file to extract text from
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for synonym lookup
#[derive(Parser, Debug, Clone)]
pub struct SynonymsArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Lexicon file (JSON); defaults to the bundled lexicon
    #[arg(long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,
}

/// Level selection on the command line: a single level or all three.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelSelection {
    Easy,
    Medium,
    Hard,
    All,
}

impl LevelSelection {
    /// The single level selected, or `None` for all three.
    pub fn single(self) -> Option<DifficultyLevel> {
        match self {
            LevelSelection::Easy => Some(DifficultyLevel::Easy),
            LevelSelection::Medium => Some(DifficultyLevel::Medium),
            LevelSelection::Hard => Some(DifficultyLevel::Hard),
            LevelSelection::All => None,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
