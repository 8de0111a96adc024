//! Rendering of assembled batch reports
//!
//! Pure formatting over an already-assembled [`BatchReport`]: either an
//! indented JSON document or one human-readable line per record. Retained
//! failures always appear in the output, clearly separated from successes.

use serde::Serialize;

use crate::error::{FailureReport, Result};
use crate::types::{BatchReport, Pokemon};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented JSON document
    Json,
    /// One line of text per record
    Text,
}

impl From<bool> for OutputFormat {
    /// Maps a `--json` style flag to a format
    fn from(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// JSON document shape for a rendered report
#[derive(Serialize)]
struct JsonReport<'a> {
    pokemon: &'a [Pokemon],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<FailureReport>,
}

/// Render a report in the chosen format
///
/// # Errors
///
/// Returns a serialization error only; the text path is infallible in practice.
pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let doc = JsonReport {
                pokemon: &report.pokemon,
                failures: report.failures.iter().map(FailureReport::from).collect(),
            };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Text => {
            let mut lines: Vec<String> =
                report.pokemon.iter().map(Pokemon::human_readable).collect();
            lines.extend(
                report
                    .failures
                    .iter()
                    .map(|f| format!("FAILED {}: {}", f.identifier(), f)),
            );
            Ok(lines.join("\n"))
        }
    }
}
