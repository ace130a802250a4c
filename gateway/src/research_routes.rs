//! Research upload and retrieval endpoints.
//!
//! Uploads arrive as multipart forms with `title`, `description`,
//! `data_type` and a file. The file's extension picks the parser; the
//! parsed payload is wrapped into an envelope whose filename embeds a
//! second-resolution timestamp (two uploads of the same data_type in
//! the same second overwrite each other, an accepted race).

use axum::extract::{Multipart, Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use dataset_store::{ResearchSummary, ResearchUpload, StoreError};
use research_ingest::{IngestError, UploadFormat};

use crate::error::ApiError;
use crate::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}

pub async fn upload_research_data(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut title = None;
    let mut description = None;
    let mut data_type = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        match field.name() {
            Some("title") => {
                title = Some(field.text().await.map_err(|e| ApiError::Upload(e.to_string()))?)
            }
            Some("description") => {
                description =
                    Some(field.text().await.map_err(|e| ApiError::Upload(e.to_string()))?)
            }
            Some("data_type") => {
                data_type =
                    Some(field.text().await.map_err(|e| ApiError::Upload(e.to_string()))?)
            }
            Some("file") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Upload(e.to_string()))?;
                file = Some((name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| ApiError::Upload("missing field: title".to_string()))?;
    let description =
        description.ok_or_else(|| ApiError::Upload("missing field: description".to_string()))?;
    let data_type =
        data_type.ok_or_else(|| ApiError::Upload("missing field: data_type".to_string()))?;
    let (original_name, bytes) =
        file.ok_or_else(|| ApiError::Upload("missing field: file".to_string()))?;

    let format = UploadFormat::from_filename(&original_name).map_err(|e| match e {
        IngestError::UnsupportedFileType(ext) => ApiError::UnsupportedFileType(ext),
        other => ApiError::Upload(other.to_string()),
    })?;
    let data = format
        .parse(&bytes)
        .map_err(|e| ApiError::Upload(e.to_string()))?;

    let now = Utc::now();
    let filename = format!("{}_{}.json", data_type, now.format("%Y%m%d_%H%M%S"));

    tracing::debug!(filename = %filename, format = ?format, "storing research upload");

    let envelope = ResearchUpload {
        title,
        description,
        data_type,
        upload_date: now,
        filename: filename.clone(),
        data,
    };
    state
        .research
        .save(&envelope)
        .map_err(|e| ApiError::Upload(e.to_string()))?;

    Ok(Json(UploadResponse {
        message: "Research data uploaded successfully".to_string(),
        filename,
    }))
}

pub async fn list_research_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResearchSummary>>, ApiError> {
    Ok(Json(state.research.list()?))
}

pub async fn get_research_data(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<ResearchUpload>, ApiError> {
    state
        .research
        .get(&filename)
        .map(Json)
        .map_err(|e| match e {
            StoreError::NotFound(_) => {
                ApiError::NotFound("Research data file not found".to_string())
            }
            other => other.into(),
        })
}
