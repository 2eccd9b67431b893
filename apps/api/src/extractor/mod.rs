//! Résumé text extraction — pluggable, trait-based adapter over document parsers.
//!
//! Default: `PdfTextExtractor` (pure text-layer extraction via `pdf-extract`,
//! no rendering subsystem involved). OCR or other formats can implement the
//! same trait and be swapped in at startup.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

/// The text extractor trait. Implement this to support another upload format
/// without touching the endpoint, handler, or matcher code.
///
/// Contract: returns the document's full text in page order (pages separated
/// by newlines). An unparseable buffer is an `AppError::Extraction`, never a
/// silent empty string.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: Bytes) -> Result<String, AppError>;
}

/// PDF-backed extractor. Parsing is CPU-bound, so it runs under
/// `spawn_blocking` to keep the async runtime responsive.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Bytes) -> Result<String, AppError> {
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
            .map_err(|e| AppError::Extraction(e.to_string()))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_pdf_buffer_is_an_extraction_error() {
        let data = Bytes::from_static(b"this is plainly not a pdf document");
        let result = PdfTextExtractor.extract(data).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_empty_buffer_is_an_extraction_error() {
        let result = PdfTextExtractor.extract(Bytes::new()).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
