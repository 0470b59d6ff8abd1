//! The highlighting seam.

use crate::error::HighlightError;
use async_trait::async_trait;

pub const DEFAULT_LANGUAGE: &str = "json";
pub const DEFAULT_THEME: &str = "vesper";

/// Converts source text into HTML markup.
#[async_trait]
pub trait Highlighter: Send + Sync {
    async fn highlight(
        &self,
        code: &str,
        language: &str,
        theme: &str,
    ) -> Result<String, HighlightError>;
}
