//! Decoding of the `{ "platforms": [...] }` data document and the load outcome.

use super::aggregate::Platform;
use super::fallback::fallback_platforms;
use serde_json::Value;
use thiserror::Error;

/// Why the data document could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("HTTP {0}")]
    BadStatus(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Diagnostic family of a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The server answered with a non-success status.
    BadResponse,
    /// Transport error or an unreadable body.
    Exception,
}

impl LoadFailure {
    pub fn reason(&self) -> FallbackReason {
        match self {
            LoadFailure::BadStatus(_) => FallbackReason::BadResponse,
            LoadFailure::Transport(_) | LoadFailure::Malformed(_) => FallbackReason::Exception,
        }
    }
}

/// Where the loaded records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Document,
    Fallback(LoadFailure),
}

/// A `platforms` entry that could not be decoded and was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub platforms: Vec<Platform>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub platforms: Vec<Platform>,
    pub source: DataSource,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, DataSource::Fallback(_))
    }

    /// One-line message for the console.
    pub fn diagnostic(&self) -> String {
        match &self.source {
            DataSource::Document => {
                format!("Loaded {} platforms from JSON", self.platforms.len())
            }
            DataSource::Fallback(failure) => match failure.reason() {
                FallbackReason::BadResponse => format!(
                    "Could not load platforms.json ({}), using fallback data",
                    failure
                ),
                FallbackReason::Exception => {
                    format!("Error loading platforms, using fallback: {}", failure)
                }
            },
        }
    }
}

/// Decodes the document, skipping entries that are not valid records.
///
/// A missing or `null` `platforms` field yields an empty list. A body that is
/// not an object, or a `platforms` field that is not an array, is malformed.
pub fn parse_document(text: &str) -> Result<ParsedDocument, LoadFailure> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| LoadFailure::Malformed(e.to_string()))?;
    let Value::Object(mut document) = value else {
        return Err(LoadFailure::Malformed("expected a JSON object".into()));
    };
    let entries = match document.remove("platforms") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(LoadFailure::Malformed("`platforms` is not an array".into()));
        }
    };

    let mut platforms = Vec::new();
    let mut skipped = Vec::new();
    for (index, value) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Platform>(value) {
            Ok(platform) => platforms.push(platform),
            Err(e) => skipped.push(SkippedRecord {
                index,
                reason: e.to_string(),
            }),
        }
    }

    Ok(ParsedDocument { platforms, skipped })
}

/// Maps the fetch result onto the records the directory starts with.
///
/// Never fails: every failure degrades to the fallback dataset.
pub fn resolve_load(fetched: Result<String, LoadFailure>) -> LoadOutcome {
    let parsed = fetched.and_then(|text| parse_document(&text));
    match parsed {
        Ok(doc) => LoadOutcome {
            platforms: doc.platforms,
            source: DataSource::Document,
            skipped: doc.skipped,
        },
        Err(failure) => LoadOutcome {
            platforms: fallback_platforms(),
            source: DataSource::Fallback(failure),
            skipped: Vec::new(),
        },
    }
}
