//! Axum route handlers for the export API.

use anyhow::Context;
use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::info;

use crate::errors::AppError;
use crate::export::json::{json_filename, render_json};
use crate::export::report::{render_report, report_filename};
use crate::models::resume::ParsedResume;

/// POST /api/v1/resumes/export/json
pub async fn handle_export_json(Json(resume): Json<ParsedResume>) -> Result<Response, AppError> {
    let body = render_json(&resume).context("Failed to serialize parsed resume")?;
    let filename = json_filename(Local::now().naive_local());
    info!(%filename, "Exporting resume as JSON");
    Ok(attachment(&filename, "application/json", body))
}

/// POST /api/v1/resumes/export/txt
pub async fn handle_export_txt(Json(resume): Json<ParsedResume>) -> Response {
    let filename = report_filename(Local::now().naive_local());
    info!(%filename, "Exporting resume as text report");
    attachment(&filename, "text/plain; charset=utf-8", render_report(&resume))
}

fn attachment(filename: &str, content_type: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
