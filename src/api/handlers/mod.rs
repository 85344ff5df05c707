use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::StoryError;
use crate::models::StoryData;
use crate::slides::assemble_story;

/// JSON body returned with every error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map a story error to a response.
///
/// The underlying I/O error is logged server-side; clients only get a
/// generic message.
fn story_error(e: StoryError) -> (StatusCode, Json<ErrorBody>) {
    match e {
        StoryError::NotFound(name) => {
            tracing::debug!("Story not found: {}", name);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Story not found or invalid".to_string(),
                }),
            )
        }
        e @ StoryError::ReadFailure { .. } => {
            tracing::error!("{}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Could not read story file".to_string(),
                }),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Stories
// ============================================================

pub async fn list_stories(State(catalog): State<Catalog>) -> Json<Vec<String>> {
    Json(catalog.list())
}

pub async fn get_story(
    State(catalog): State<Catalog>,
    Path(name): Path<String>,
) -> Result<Json<StoryData>, (StatusCode, Json<ErrorBody>)> {
    assemble_story(&catalog, &name)
        .map(Json)
        .map_err(story_error)
}
