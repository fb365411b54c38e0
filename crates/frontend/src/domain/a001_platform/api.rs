use contracts::domain::a001_platform::{
    resolve_load, DataSource, FallbackReason, LoadFailure, LoadOutcome,
};
use gloo_net::http::Request;

/// Data document, relative to the page.
pub const PLATFORMS_URL: &str = "data/platforms.json";

async fn fetch_document() -> Result<String, LoadFailure> {
    let response = Request::get(PLATFORMS_URL)
        .send()
        .await
        .map_err(|e| LoadFailure::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(LoadFailure::BadStatus(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| LoadFailure::Transport(e.to_string()))
}

/// Fetches the data document once. Falls back to the built-in records on any failure.
pub async fn load_platforms() -> LoadOutcome {
    log::info!("Loading platform data from {}", PLATFORMS_URL);
    let outcome = resolve_load(fetch_document().await);
    report(&outcome);
    outcome
}

fn report(outcome: &LoadOutcome) {
    for skipped in &outcome.skipped {
        log::warn!("Skipped platform entry #{}: {}", skipped.index, skipped.reason);
    }

    match &outcome.source {
        DataSource::Document => log::info!("{}", outcome.diagnostic()),
        DataSource::Fallback(failure) => match failure.reason() {
            FallbackReason::BadResponse => log::warn!("{}", outcome.diagnostic()),
            FallbackReason::Exception => log::error!("{}", outcome.diagnostic()),
        },
    }
}
