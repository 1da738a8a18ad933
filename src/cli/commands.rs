//! Command implementations for the Parrot CLI.

use std::path::PathBuf;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ParrotConfig;
use crate::document::extractor_for;
use crate::error::{ParrotError, Result};
use crate::lexicon::{CachedLexicon, InMemoryLexicon, Lexicon};
use crate::paraphrase::level::DifficultyLevel;
use crate::service::ParaphraseService;

/// The lexicon bundled with the binary, used when no `--lexicon` is given.
const BUNDLED_LEXICON: &str = include_str!("../../resources/lexicon.json");

/// Execute a CLI command.
pub fn execute_command(args: ParrotArgs) -> Result<()> {
    match &args.command {
        Command::Paraphrase(paraphrase_args) => paraphrase(paraphrase_args.clone(), &args),
        Command::Extract(extract_args) => extract(extract_args.clone(), &args),
        Command::Synonyms(synonyms_args) => synonyms(synonyms_args.clone(), &args),
    }
}

/// Load the lexicon: a file if given, the bundled one otherwise.
fn load_lexicon(path: Option<&PathBuf>) -> Result<Arc<dyn Lexicon>> {
    let lexicon = match path {
        Some(path) => InMemoryLexicon::load_from_file(path)?,
        None => InMemoryLexicon::from_json_str(BUNDLED_LEXICON)?,
    };
    Ok(Arc::new(CachedLexicon::new(lexicon)))
}

/// Build the random source, seeded if requested.
fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Paraphrase a document.
fn paraphrase(args: ParaphraseArgs, cli_args: &ParrotArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Paraphrasing: {}", args.file.display());
    }

    let lexicon = load_lexicon(args.lexicon.as_ref())?;
    let config = Arc::new(ParrotConfig::default());
    let service = ParaphraseService::new(config, lexicon);
    let mut rng = build_rng(args.seed);

    let response = service
        .process_file(&args.file, &mut rng)
        .map_err(|e| ParrotError::other(e.to_string()))?;

    match args.level.single() {
        Some(level) => {
            let variant = VariantResult {
                level: level.as_str().to_string(),
                text: response_text(&response, level).to_string(),
            };
            output_result("Paraphrase complete", &variant, cli_args)
        }
        None => output_result("Paraphrase complete", &response, cli_args),
    }
}

fn response_text(response: &crate::service::ParaphraseResponse, level: DifficultyLevel) -> &str {
    match level {
        DifficultyLevel::Easy => &response.easy,
        DifficultyLevel::Medium => &response.medium,
        DifficultyLevel::Hard => &response.hard,
    }
}

/// A single paraphrased variant, for `--level easy|medium|hard`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct VariantResult {
    level: String,
    text: String,
}

/// Extract text from a document.
fn extract(args: ExtractArgs, cli_args: &ParrotArgs) -> Result<()> {
    let extractor = extractor_for(&args.file).ok_or_else(|| {
        ParrotError::extraction(format!(
            "No extractor for '{}': unsupported extension",
            args.file.display()
        ))
    })?;

    if cli_args.verbosity() > 1 {
        println!(
            "Extracting with the {} extractor: {}",
            extractor.name(),
            args.file.display()
        );
    }

    let text = extractor.extract(&args.file)?;
    let result = ExtractionResult {
        path: args.file.display().to_string(),
        characters: text.chars().count(),
        tokens: text.split_whitespace().count(),
        text,
    };

    output_result("Extraction complete", &result, cli_args)
}

/// Look up the synonym candidates for a word.
fn synonyms(args: SynonymsArgs, cli_args: &ParrotArgs) -> Result<()> {
    let lexicon = load_lexicon(args.lexicon.as_ref())?;
    let cleaner = crate::analysis::clean::WordCleaner::new();

    let cleaned = cleaner.clean(&args.word).to_lowercase();
    let candidates = lexicon.candidates(&cleaned)?;

    let eligible = DifficultyLevel::ALL
        .iter()
        .map(|&level| {
            let slice = if candidates.len() >= level.min_candidates() {
                candidates[level.first_eligible()..].to_vec()
            } else {
                Vec::new()
            };
            LevelCandidates {
                level: level.as_str().to_string(),
                candidates: slice,
            }
        })
        .collect();

    let result = SynonymsResult {
        word: args.word,
        cleaned,
        candidates,
        eligible,
    };

    output_result("Lookup complete", &result, cli_args)
}
