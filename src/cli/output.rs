//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ParrotArgs};
use crate::error::Result;
use crate::service::ParaphraseResponse;

/// Result structure for text extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub path: String,
    pub characters: usize,
    pub tokens: usize,
    pub text: String,
}

/// Result structure for synonym lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymsResult {
    pub word: String,
    pub cleaned: String,
    pub candidates: Vec<String>,
    /// Candidates each level may draw from, in level order (easy, medium, hard).
    pub eligible: Vec<LevelCandidates>,
}

/// The candidate slice one difficulty level may draw from.
#[derive(Debug, Serialize, Deserialize)]
pub struct LevelCandidates {
    pub level: String,
    pub candidates: Vec<String>,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ParrotArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => output_human(message, result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ParrotArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ParrotArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("ParaphraseResponse") => {
            output_paraphrase_human(&value)
        }
        _ if std::any::type_name::<T>().contains("SynonymsResult") => {
            output_synonyms_human(&value)
        }
        _ => output_generic_human(&value),
    }
}

/// Output a paraphrase response in human format.
fn output_paraphrase_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        for (label, key) in [
            ("Original", "original"),
            ("Easy", "easy"),
            ("Medium", "medium"),
            ("Hard", "hard"),
        ] {
            if let Some(text) = obj.get(key).and_then(|t| t.as_str()) {
                println!("{label}:");
                println!("─────────");
                println!("{text}");
                println!();
            }
        }
    }
    Ok(())
}

/// Output a synonym lookup in human format.
fn output_synonyms_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(word) = obj.get("word").and_then(|w| w.as_str()) {
            println!("Synonyms for '{word}':");
            println!("══════════════");
        }

        match obj.get("candidates").and_then(|c| c.as_array()) {
            Some(candidates) if !candidates.is_empty() => {
                for (i, candidate) in candidates.iter().enumerate() {
                    if let Some(text) = candidate.as_str() {
                        println!("  {}. {text}", i + 1);
                    }
                }
            }
            _ => println!("  (no candidates recorded)"),
        }

        if let Some(eligible) = obj.get("eligible").and_then(|e| e.as_array()) {
            println!();
            for entry in eligible {
                let level = entry
                    .get("level")
                    .and_then(|l| l.as_str())
                    .unwrap_or("unknown");
                let candidates: Vec<&str> = entry
                    .get("candidates")
                    .and_then(|c| c.as_array())
                    .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
                    .unwrap_or_default();
                if candidates.is_empty() {
                    println!("{level}: passthrough (too few candidates)");
                } else {
                    println!("{level}: {}", candidates.join(", "));
                }
            }
        }
    }
    Ok(())
}

/// Generic human output: top-level fields, one per line.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        for (key, field_value) in obj {
            match field_value {
                serde_json::Value::String(s) if s.contains('\n') => {
                    println!("{key}:");
                    println!("{s}");
                }
                other => println!("{key}: {other}"),
            }
        }
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Render a paraphrase response for the default (human) surface.
///
/// Kept public so integration tests can assert on the exact rendering the
/// presentation contract promises: four text strings or one error string.
pub fn paraphrase_summary(response: &ParaphraseResponse) -> String {
    format!(
        "Original:\n{}\n\nEasy:\n{}\n\nMedium:\n{}\n\nHard:\n{}\n",
        response.original, response.easy, response.medium, response.hard
    )
}
