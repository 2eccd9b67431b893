use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::extractor::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable résumé text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
