//! Code view state with latest-input-wins rendering.

use crate::error::HighlightError;
use crate::highlighter::{Highlighter, DEFAULT_LANGUAGE, DEFAULT_THEME};
use tokio::sync::Mutex;
use tracing::debug;

/// Identifies the input a render was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    generation: u64,
}

impl RenderTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
struct ViewState {
    generation: u64,
    code: String,
    language: String,
    markup: String,
}

/// Displays highlighted code; markup starts empty until a render lands.
#[derive(Debug)]
pub struct CodeView {
    theme: String,
    state: Mutex<ViewState>,
}

impl Default for CodeView {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeView {
    pub fn new() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            state: Mutex::new(ViewState {
                language: DEFAULT_LANGUAGE.to_string(),
                ..ViewState::default()
            }),
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Record a new input and return the ticket its render must present.
    ///
    /// Empty code clears the markup and returns `None`: there is nothing to
    /// render, and any render still in flight is now stale.
    pub async fn set_input(&self, code: &str, language: &str) -> Option<RenderTicket> {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.code = code.to_string();
        state.language = language.to_string();

        if code.is_empty() {
            state.markup.clear();
            return None;
        }

        Some(RenderTicket {
            generation: state.generation,
        })
    }

    /// Whether `ticket` still belongs to the latest input.
    pub async fn is_current(&self, ticket: RenderTicket) -> bool {
        self.state.lock().await.generation == ticket.generation
    }

    /// Store `markup` if `ticket` is current. Returns whether it was applied.
    pub async fn apply(&self, ticket: RenderTicket, markup: String) -> bool {
        let mut state = self.state.lock().await;
        if state.generation != ticket.generation {
            debug!(
                "Discarding stale render (generation {} < {})",
                ticket.generation, state.generation
            );
            return false;
        }
        state.markup = markup;
        true
    }

    /// Set the input, highlight it and apply the result if still current.
    ///
    /// Returns `Ok(true)` when the markup was applied.
    pub async fn render<H: Highlighter + ?Sized>(
        &self,
        highlighter: &H,
        code: &str,
        language: &str,
    ) -> Result<bool, HighlightError> {
        let Some(ticket) = self.set_input(code, language).await else {
            return Ok(false);
        };

        let markup = highlighter.highlight(code, language, &self.theme).await?;
        Ok(self.apply(ticket, markup).await)
    }

    /// Current markup; empty until the first render lands.
    pub async fn markup(&self) -> String {
        self.state.lock().await.markup.clone()
    }

    /// Current `(code, language)` input.
    pub async fn input(&self) -> (String, String) {
        let state = self.state.lock().await;
        (state.code.clone(), state.language.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Echoes the code back, sleeping first when the code says "slow".
    struct EchoHighlighter;

    #[async_trait]
    impl Highlighter for EchoHighlighter {
        async fn highlight(
            &self,
            code: &str,
            _language: &str,
            theme: &str,
        ) -> Result<String, HighlightError> {
            if code.starts_with("slow") {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            Ok(format!("[{theme}] {code}"))
        }
    }

    struct BrokenHighlighter;

    #[async_trait]
    impl Highlighter for BrokenHighlighter {
        async fn highlight(
            &self,
            _code: &str,
            _language: &str,
            _theme: &str,
        ) -> Result<String, HighlightError> {
            Err(HighlightError::Backend("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_empty() {
        let view = CodeView::new();
        assert_eq!(view.markup().await, "");
        assert_eq!(view.input().await, (String::new(), "json".to_string()));
        assert_eq!(view.theme(), "vesper");
    }

    #[tokio::test]
    async fn test_render_applies_markup() {
        let view = CodeView::new().with_theme("nord");
        assert!(view.render(&EchoHighlighter, "{}", "json").await.unwrap());
        assert_eq!(view.markup().await, "[nord] {}");
    }

    #[tokio::test]
    async fn test_stale_ticket_is_discarded() {
        let view = CodeView::new();

        let first = view.set_input("old", "json").await.unwrap();
        let second = view.set_input("new", "json").await.unwrap();

        assert!(view.apply(second, "new markup".to_string()).await);
        assert!(!view.apply(first, "old markup".to_string()).await);
        assert!(!view.is_current(first).await);
        assert_eq!(view.markup().await, "new markup");
    }

    #[tokio::test]
    async fn test_slow_render_does_not_overwrite_newer_input() {
        let view = CodeView::new();

        let (slow, fast) = tokio::join!(
            view.render(&EchoHighlighter, "slow old", "json"),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                view.render(&EchoHighlighter, "fast new", "json").await
            }
        );

        assert!(!slow.unwrap());
        assert!(fast.unwrap());
        assert_eq!(view.markup().await, "[vesper] fast new");
    }

    #[tokio::test]
    async fn test_empty_code_clears_markup() {
        let view = CodeView::new();
        view.render(&EchoHighlighter, "{}", "json").await.unwrap();

        assert!(!view.render(&EchoHighlighter, "", "json").await.unwrap());
        assert_eq!(view.markup().await, "");
    }

    #[tokio::test]
    async fn test_highlighter_error_keeps_previous_markup() {
        let view = CodeView::new();
        view.render(&EchoHighlighter, "{}", "json").await.unwrap();

        let err = view.render(&BrokenHighlighter, "[]", "json").await.unwrap_err();
        assert_eq!(err.to_string(), "Highlighter failed: offline");
        assert_eq!(view.markup().await, "[vesper] {}");
    }
}
