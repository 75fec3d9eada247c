//! PDF text extraction. Runs the parser on a blocking thread so large files do
//! not stall the runtime.

use anyhow::anyhow;
use bytes::Bytes;

use crate::errors::AppError;

/// Pulls the text layer out of an in-memory PDF.
///
/// A file with no extractable text (scanned images, empty pages) is reported
/// the same way as a corrupt one.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("PDF extraction task failed: {e}")))?
    .map_err(AppError::PdfExtraction)?;

    if text.trim().is_empty() {
        return Err(AppError::PdfExtraction("no text layer".to_string()));
    }
    Ok(text)
}

/// Accepts only names with a `.pdf` extension, case-insensitively.
pub fn validate_pdf_filename(file_name: &str) -> Result<(), AppError> {
    if file_name.trim().is_empty() {
        return Err(AppError::Validation("No file uploaded".to_string()));
    }
    let is_pdf = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }
    Ok(())
}
