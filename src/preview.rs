//! Preview a single synthetic event on stdout.

use anyhow::Context;
use clap::{Args, ValueEnum};
use hookseed_code_view::{CodeView, JsonHighlighter, DEFAULT_LANGUAGE, DEFAULT_THEME};
use hookseed_generator::{EventGenerator, SamplingPlan};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewFormat {
    /// Pretty-printed JSON body, as stored in the request log
    #[default]
    Json,
    /// Highlighted HTML fragment
    Html,
}

#[derive(Args, Clone, Debug)]
pub struct PreviewArgs {
    /// Event kind to generate (random Stripe kind when omitted)
    #[arg(value_name = "KIND")]
    pub kind: Option<String>,

    /// Random seed for deterministic output
    #[arg(long, env = "HOOKSEED_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = PreviewFormat::Json)]
    pub format: PreviewFormat,

    /// Theme name for HTML output
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,
}

/// Render one event in the requested format.
pub async fn run_preview(args: PreviewArgs) -> anyhow::Result<String> {
    let mut generator = match args.seed {
        Some(seed) => EventGenerator::new(seed),
        None => EventGenerator::from_entropy(),
    };

    // The kind comes from the same generator so a seeded preview is reproducible.
    let kind = match args.kind {
        Some(kind) => kind,
        None => generator
            .pick_kind(&SamplingPlan::stripe())
            .context("Failed to pick an event kind")?
            .to_string(),
    };

    let event = generator.generate(&kind);
    let body = serde_json::to_string_pretty(&event).context("Failed to serialize event")?;

    match args.format {
        PreviewFormat::Json => Ok(body),
        PreviewFormat::Html => {
            let view = CodeView::new().with_theme(args.theme);
            view.render(&JsonHighlighter, &body, DEFAULT_LANGUAGE)
                .await
                .context("Failed to highlight event")?;
            Ok(view.markup().await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookseed_core::STRIPE_EVENT_KINDS;

    fn args(kind: Option<&str>, format: PreviewFormat) -> PreviewArgs {
        PreviewArgs {
            kind: kind.map(str::to_string),
            seed: Some(7),
            format,
            theme: DEFAULT_THEME.to_string(),
        }
    }

    #[tokio::test]
    async fn test_json_preview_of_given_kind() {
        let out = run_preview(args(Some("invoice.paid"), PreviewFormat::Json))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["type"], "invoice.paid");
        assert_eq!(value["object"], "event");
        assert_eq!(value["data"]["object"]["status"], "paid");
    }

    #[tokio::test]
    async fn test_random_kind_is_a_stripe_kind() {
        let out = run_preview(args(None, PreviewFormat::Json)).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let kind = value["type"].as_str().unwrap();

        assert!(STRIPE_EVENT_KINDS.contains(&kind));
    }

    #[tokio::test]
    async fn test_seeded_preview_without_kind_is_reproducible() {
        let mut outputs = Vec::new();
        for _ in 0..10 {
            let out = run_preview(args(None, PreviewFormat::Json)).await.unwrap();
            let value: serde_json::Value = serde_json::from_str(&out).unwrap();
            outputs.push(value["type"].as_str().unwrap().to_string());
        }

        outputs.dedup();
        assert_eq!(outputs.len(), 1, "kinds: {outputs:?}");
    }

    #[tokio::test]
    async fn test_html_preview() {
        let out = run_preview(args(Some("charge.succeeded"), PreviewFormat::Html))
            .await
            .unwrap();

        assert!(out.starts_with("<pre class=\"hookseed vesper\" data-language=\"json\">"));
        assert!(out.contains("charge.succeeded"));
    }
}
