//! Built-in JSON highlighter.

use crate::error::HighlightError;
use crate::highlighter::Highlighter;
use async_trait::async_trait;

/// Highlights JSON into `<span>`-classed HTML.
///
/// Other languages are rendered escaped, without token spans. Malformed
/// JSON is still rendered; unknown characters pass through escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonHighlighter;

#[async_trait]
impl Highlighter for JsonHighlighter {
    async fn highlight(
        &self,
        code: &str,
        language: &str,
        theme: &str,
    ) -> Result<String, HighlightError> {
        let body = if language.eq_ignore_ascii_case("json") {
            highlight_json(code)
        } else {
            escape_html(code)
        };

        Ok(format!(
            "<pre class=\"hookseed {}\" data-language=\"{}\"><code>{}</code></pre>",
            escape_html(theme),
            escape_html(language),
            body
        ))
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&escape_html(text));
    out.push_str("</span>");
}

/// Tokenize JSON text and wrap each token in a classed span.
pub fn highlight_json(code: &str) -> String {
    let chars: Vec<(usize, char)> = code.char_indices().collect();
    let mut out = String::with_capacity(code.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];
        match c {
            '"' => {
                let mut j = i + 1;
                while j < chars.len() {
                    match chars[j].1 {
                        '\\' => j += 2,
                        '"' => {
                            j += 1;
                            break;
                        }
                        _ => j += 1,
                    }
                }
                let j = j.min(chars.len());
                let end = byte_offset(code, &chars, j);
                let class = if next_significant(&chars, j) == Some(':') {
                    "json-key"
                } else {
                    "json-string"
                };
                push_span(&mut out, class, &code[start..end]);
                i = j;
            }
            '-' | '0'..='9' => {
                let mut j = i + 1;
                while j < chars.len()
                    && matches!(chars[j].1, '0'..='9' | '.' | 'e' | 'E' | '+' | '-')
                {
                    j += 1;
                }
                push_span(&mut out, "json-number", &code[start..byte_offset(code, &chars, j)]);
                i = j;
            }
            'a'..='z' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].1.is_ascii_lowercase() {
                    j += 1;
                }
                let word = &code[start..byte_offset(code, &chars, j)];
                if matches!(word, "true" | "false" | "null") {
                    push_span(&mut out, "json-keyword", word);
                } else {
                    out.push_str(&escape_html(word));
                }
                i = j;
            }
            '{' | '}' | '[' | ']' | ':' | ',' => {
                push_span(&mut out, "json-punct", &code[start..start + c.len_utf8()]);
                i += 1;
            }
            _ => {
                out.push_str(&escape_html(&code[start..start + c.len_utf8()]));
                i += 1;
            }
        }
    }

    out
}

fn byte_offset(code: &str, chars: &[(usize, char)], idx: usize) -> usize {
    chars.get(idx).map(|(offset, _)| *offset).unwrap_or(code.len())
}

fn next_significant(chars: &[(usize, char)], from: usize) -> Option<char> {
    chars[from.min(chars.len())..]
        .iter()
        .map(|(_, c)| *c)
        .find(|c| !c.is_whitespace())
}
