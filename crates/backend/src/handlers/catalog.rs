use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::AppState;

/// GET /data/platforms.json
///
/// Read from disk on every request and passed through untouched, so the
/// frontend sees exactly what is deployed.
pub async fn platforms_document(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&*state.catalog_path).await {
        Ok(text) => ([(header::CONTENT_TYPE, "application/json")], text).into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Catalog not found: {}", state.catalog_path.display());
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(
                "Failed to read catalog {}: {}",
                state.catalog_path.display(),
                e
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn state_for(path: PathBuf) -> State<AppState> {
        State(AppState {
            catalog_path: Arc::new(path),
        })
    }

    #[tokio::test]
    async fn test_missing_catalog_is_404() {
        let response =
            platforms_document(state_for(PathBuf::from("/definitely/missing/platforms.json")))
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_existing_catalog_is_json() {
        let path = std::env::temp_dir().join("directory-host-handler-test.json");
        std::fs::write(&path, r#"{"platforms":[]}"#).unwrap();

        let response = platforms_document(state_for(path.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let _ = std::fs::remove_file(path);
    }
}
