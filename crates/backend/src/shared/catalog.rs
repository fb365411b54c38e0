//! Startup check of the data document the frontend will fetch.

use contracts::domain::a001_platform::{parse_document, LoadFailure};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Invalid(#[from] LoadFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub platforms: usize,
    pub skipped: usize,
    pub per_category: BTreeMap<String, usize>,
}

pub fn summarize(text: &str) -> Result<CatalogSummary, CatalogError> {
    let doc = parse_document(text)?;

    let mut per_category = BTreeMap::new();
    for platform in &doc.platforms {
        *per_category.entry(platform.category.clone()).or_insert(0) += 1;
    }

    Ok(CatalogSummary {
        platforms: doc.platforms.len(),
        skipped: doc.skipped.len(),
        per_category,
    })
}

pub fn validate_file(path: &Path) -> Result<CatalogSummary, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    summarize(&text)
}

/// Logs what the frontend will get; an unusable document only warns.
pub fn report(path: &Path) {
    match validate_file(path) {
        Ok(summary) => {
            tracing::info!(
                "Catalog {}: {} platforms, {} skipped",
                path.display(),
                summary.platforms,
                summary.skipped
            );
            for (category, count) in &summary.per_category {
                tracing::debug!("  {}: {}", category, count);
            }
        }
        Err(e) => {
            tracing::warn!("Catalog unusable, the frontend will show its fallback data: {}", e);
        }
    }
}
