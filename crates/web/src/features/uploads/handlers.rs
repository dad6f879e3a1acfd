use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
    response::{IntoResponse, Response},
};
use storage::dto::common::UploadResponse;

use crate::{error::WebError, state::AppState};

use super::services::{self, ImageKind, UploadedFile};

#[utoipa::path(
    post,
    path = "/api/athletes/upload",
    request_body(content = String, content_type = "multipart/form-data", description = "Parts: `file` (the image) and `type` (`avatar` or `cover`)"),
    responses(
        (status = 200, description = "Image stored; public URL returned", body = UploadResponse),
        (status = 400, description = "No form data or no file provided"),
        (status = 500, description = "Object storage error")
    ),
    tag = "athletes"
)]
pub async fn upload_athlete_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, WebError> {
    let mut multipart = multipart?;
    let mut file: Option<UploadedFile> = None;
    let mut kind: Option<String> = None;
    let mut parts = 0usize;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(e.to_string()))?
    {
        parts += 1;
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| WebError::BadRequest(e.to_string()))?;

                if let Some(filename) = filename.filter(|f| !f.is_empty()) {
                    file = Some(UploadedFile {
                        filename,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            "type" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| WebError::BadRequest(e.to_string()))?;
                kind = Some(text);
            }
            _ => {}
        }
    }

    if parts == 0 {
        return Err(WebError::BadRequest("No form data provided".to_string()));
    }

    let file = file.ok_or_else(|| WebError::BadRequest("No file provided".to_string()))?;
    let kind = ImageKind::parse(kind.as_deref())?;

    let url = services::upload_image(state.images.as_ref(), kind, file).await?;

    Ok(Json(UploadResponse { success: true, url }).into_response())
}
