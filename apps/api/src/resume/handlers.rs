use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::resume::pdf::{extract_pdf_text, validate_pdf_filename};
use crate::resume::upload::{analyze_resume_text, ResumeAnalysis};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// POST /api/resume/upload
///
/// Multipart form with a single `file` field holding a PDF. Nothing is
/// written to disk; the bytes are parsed in memory.
pub async fn handle_resume_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let (file_name, data) = read_file_field(&mut multipart).await?;
    validate_pdf_filename(&file_name)?;

    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(format!(
            "File exceeds the {} byte upload limit",
            state.config.max_upload_bytes
        )));
    }

    let text = extract_pdf_text(data).await?;
    info!(
        "Extracted {} characters from '{}'",
        text.chars().count(),
        file_name
    );

    let analysis = analyze_resume_text(
        &state.extractor,
        state.recommender.as_deref(),
        &text,
    )
    .await;
    info!(
        "Resume analysis {} found {} skills",
        analysis.analysis_id,
        analysis.extracted_skills.len()
    );

    Ok(Json(analysis))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        return Ok((file_name, data));
    }
    Err(AppError::Validation("No file uploaded".to_string()))
}
