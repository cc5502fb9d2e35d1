//! Document upload endpoint.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use doclens_core::PipelineResponse;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for document upload.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Sentences to keep in the summary lead window.
    pub max_sentences: Option<i64>,
}

/// Run the understanding pipeline over an uploaded document.
/// POST /documents
///
/// Expects a multipart body with a `file` part; the part's Content-Type
/// header declares the upload format. Responds with the pipeline result,
/// or 415/400 when the upload cannot be extracted.
pub async fn upload_document(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> ApiResult<Json<PipelineResponse>> {
    let mut upload: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("Malformed multipart body"))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ApiError::bad_request("Failed to read file part"))?;

        upload = Some((bytes.to_vec(), content_type));
        break;
    }

    let (bytes, content_type) =
        upload.ok_or_else(|| ApiError::bad_request("Missing 'file' part in multipart body"))?;

    let max_sentences = params
        .max_sentences
        .unwrap_or(state.config.default_max_sentences);

    debug!(
        content_type = %content_type,
        size = bytes.len(),
        max_sentences,
        "Processing uploaded document"
    );

    let response = state
        .pipeline
        .process(&bytes, &content_type, max_sentences)
        .await?;

    Ok(Json(response))
}
