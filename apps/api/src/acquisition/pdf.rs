//! PDF text extraction.
//!
//! Primary pass: `lopdf`, page by page, pages joined with `\n`.
//! Secondary pass: `pdf-extract` over the whole buffer, used when the primary
//! pass fails or yields fewer than `min_chars` characters after trimming.
//!
//! Both passes are CPU-bound. Callers run this inside `spawn_blocking`.

use lopdf::Document;
use tracing::{debug, info, warn};

use crate::acquisition::AcquisitionError;

/// Extracts text from an in-memory PDF.
pub fn extract_pdf_text(bytes: &[u8], min_chars: usize) -> Result<String, AcquisitionError> {
    select_text(extract_pages(bytes), || extract_whole(bytes), min_chars)
}

fn extract_pages(bytes: &[u8]) -> Result<String, String> {
    let doc = Document::load_mem(bytes).map_err(|e| format!("failed to load PDF: {e}"))?;

    let mut pages = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(text) if !text.is_empty() => pages.push(text),
            Ok(_) => debug!(page = page_num, "Page has no text"),
            Err(e) => warn!(page = page_num, error = %e, "Failed to extract page text"),
        }
    }
    Ok(pages.join("\n"))
}

fn extract_whole(bytes: &[u8]) -> Result<String, String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| format!("pdf-extract failed: {e}"))
}

/// Keeps the primary text when it clears `min_chars`; otherwise runs the
/// fallback and keeps whichever result carries more text.
fn select_text<F>(
    primary: Result<String, String>,
    fallback: F,
    min_chars: usize,
) -> Result<String, AcquisitionError>
where
    F: FnOnce() -> Result<String, String>,
{
    let primary_chars = match &primary {
        Ok(text) => trimmed_len(text),
        Err(_) => 0,
    };
    if primary.is_ok() && primary_chars >= min_chars {
        return primary.map_err(AcquisitionError::Pdf);
    }

    info!(
        primary_chars,
        min_chars,
        "Primary PDF pass came up short, trying fallback extractor"
    );

    match (primary, fallback()) {
        (Ok(primary_text), Ok(fallback_text)) => {
            if trimmed_len(&fallback_text) >= primary_chars {
                Ok(fallback_text)
            } else {
                Ok(primary_text)
            }
        }
        (Err(_), Ok(fallback_text)) => Ok(fallback_text),
        (Ok(primary_text), Err(e)) => {
            warn!(error = %e, "Fallback PDF extractor failed, keeping primary text");
            Ok(primary_text)
        }
        (Err(primary_err), Err(fallback_err)) => Err(AcquisitionError::Pdf(format!(
            "{primary_err}; {fallback_err}"
        ))),
    }
}

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
