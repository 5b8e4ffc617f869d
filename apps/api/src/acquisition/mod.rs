//! Text Acquisition — turns an uploaded document into the single string the
//! Field Extractor consumes.
//!
//! `AppState` holds an `Arc<dyn DocumentReader>`, so tests and alternate
//! backends can swap the reader without touching the handlers.

pub mod pdf;
pub mod text;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::Config;

/// Why a document could not be turned into text. The extractor never runs after one of these.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Unsupported file type '{0}': expected a .pdf or .txt file")]
    UnsupportedFileType(String),

    #[error("Could not extract text from PDF: {0}")]
    Pdf(String),

    #[error("Document contains no extractable text")]
    EmptyDocument,

    #[error("Upload is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Classifies by extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Result<Self, AcquisitionError> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") => Ok(DocumentKind::PlainText),
            _ => Err(AcquisitionError::UnsupportedFileType(filename.to_string())),
        }
    }
}

/// A raw uploaded document.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Text pulled out of an upload, tagged with how it was read.
#[derive(Debug, Clone)]
pub struct AcquiredText {
    pub kind: DocumentKind,
    pub text: String,
}

#[async_trait]
pub trait DocumentReader: Send + Sync {
    async fn read(&self, upload: &Upload) -> Result<AcquiredText, AcquisitionError>;
}

/// Plain text via UTF-8/Latin-1, PDFs via `lopdf` with a `pdf-extract` fallback.
pub struct DefaultDocumentReader {
    max_upload_bytes: usize,
    pdf_min_text_chars: usize,
}

impl DefaultDocumentReader {
    pub fn new(max_upload_bytes: usize, pdf_min_text_chars: usize) -> Self {
        Self {
            max_upload_bytes,
            pdf_min_text_chars,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_upload_bytes, config.pdf_min_text_chars)
    }
}

#[async_trait]
impl DocumentReader for DefaultDocumentReader {
    async fn read(&self, upload: &Upload) -> Result<AcquiredText, AcquisitionError> {
        let size = upload.bytes.len();
        if size > self.max_upload_bytes {
            return Err(AcquisitionError::TooLarge {
                size,
                limit: self.max_upload_bytes,
            });
        }

        let kind = DocumentKind::from_filename(&upload.filename)?;
        let text = match kind {
            DocumentKind::PlainText => text::decode_text(&upload.bytes),
            DocumentKind::Pdf => {
                let bytes = upload.bytes.clone();
                let min_chars = self.pdf_min_text_chars;
                tokio::task::spawn_blocking(move || pdf::extract_pdf_text(&bytes, min_chars))
                    .await
                    .map_err(|e| AcquisitionError::Pdf(format!("extraction task failed: {e}")))??
            }
        };

        if text.trim().is_empty() {
            return Err(AcquisitionError::EmptyDocument);
        }

        info!(
            filename = %upload.filename,
            kind = ?kind,
            bytes = size,
            chars = text.chars().count(),
            "Acquired document text"
        );
        Ok(AcquiredText { kind, text })
    }
}
