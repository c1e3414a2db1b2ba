//! Text extraction for uploaded evidence documents.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts readable text from an uploaded file.
/// `text/*` uploads are decoded as UTF-8 (lossily); anything else is treated as a PDF.
pub async fn extract_document_text(
    content_type: Option<&str>,
    data: Bytes,
) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    if is_plain_text(content_type) {
        return Ok(String::from_utf8_lossy(&data).into_owned());
    }

    let size = data.len();
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            // the PDF parser panics on some malformed files
            AppError::UnprocessableEntity("Could not read PDF".to_string())
        } else {
            AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
        }
    })?
    .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;

    debug!(bytes = size, chars = text.len(), "Extracted text from PDF upload");
    Ok(text)
}

fn is_plain_text(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with("text/"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_upload_decoded() {
        let text = extract_document_text(
            Some("text/plain; charset=utf-8"),
            Bytes::from_static("Letter of support".as_bytes()),
        )
        .await
        .unwrap();
        assert_eq!(text, "Letter of support");
    }

    #[tokio::test]
    async fn test_empty_upload_rejected() {
        let err = extract_document_text(Some("application/pdf"), Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unprocessable() {
        let err = extract_document_text(
            Some("application/pdf"),
            Bytes::from_static(b"definitely not a pdf"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_content_type_detection() {
        assert!(is_plain_text(Some("TEXT/markdown")));
        assert!(!is_plain_text(Some("application/pdf")));
        assert!(!is_plain_text(None));
    }
}
