//! Highlighted code display.
//!
//! A [`CodeView`] projects `(code, language)` into HTML markup through a
//! [`Highlighter`]. Every input change gets a new [`RenderTicket`]; a
//! result is only applied if its ticket still matches the latest input, so
//! a slow highlight of old input never overwrites newer markup.
//!
//! ```rust
//! use hookseed_code_view::{CodeView, JsonHighlighter};
//!
//! # tokio_test::block_on(async {
//! let view = CodeView::new();
//! view.render(&JsonHighlighter, r#"{"ok": true}"#, "json").await.unwrap();
//! assert!(view.markup().await.contains("json-keyword"));
//! # });
//! ```

pub mod error;
pub mod highlighter;
pub mod json;
pub mod view;

pub use error::HighlightError;
pub use highlighter::{Highlighter, DEFAULT_LANGUAGE, DEFAULT_THEME};
pub use json::JsonHighlighter;
pub use view::{CodeView, RenderTicket};
