//! Axum route handlers for the parse API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::acquisition::{DocumentKind, Upload};
use crate::errors::AppError;
use crate::extraction::parse_resume;
use crate::models::resume::ParsedResume;
use crate::state::AppState;

/// Characters of acquired text echoed back so callers can sanity-check decoding.
const SOURCE_PREVIEW_CHARS: usize = 500;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub document_kind: DocumentKind,
    pub source_preview: String,
    pub resume: ParsedResume,
}

/// POST /api/v1/resumes/parse
///
/// Parses pasted resume text.
pub async fn handle_parse(
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(parse_resume(&request.text)))
}

/// POST /api/v1/resumes/upload
///
/// Accepts a `.pdf` or `.txt` file in the `file` multipart field, extracts its
/// text and parses it.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let upload = read_file_field(&mut multipart).await?;
    let acquired = state.reader.read(&upload).await?;
    let resume = parse_resume(&acquired.text);

    info!(
        filename = %upload.filename,
        skills = resume.skills.len(),
        "Parsed uploaded resume"
    );

    Ok(Json(UploadResponse {
        filename: upload.filename,
        document_kind: acquired.kind,
        source_preview: acquired.text.chars().take(SOURCE_PREVIEW_CHARS).collect(),
        resume,
    }))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = match field.file_name() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => {
                return Err(AppError::Validation(
                    "the file field must carry a filename".to_string(),
                ))
            }
        };
        let bytes = field.bytes().await?;
        return Ok(Upload { filename, bytes });
    }

    Err(AppError::Validation(format!(
        "multipart body must contain a '{FILE_FIELD}' field"
    )))
}
