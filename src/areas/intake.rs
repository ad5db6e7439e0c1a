use anyhow::Context;
use regex::Regex;
use std::path::Path;

pub const PRE_BLOCK_REGEX: &str = r"(?is)<pre[^>]*>(.*?)</pre>";
pub const DROPPED_BLOCK_REGEX: &str = r"(?is)<(?:script|style)[^>]*>.*?</(?:script|style)>";
pub const TAG_REGEX: &str = r"(?s)<[^>]+>";

/// Reads a scan log into memory, recovering plain text from HTML sources.
///
/// The scan tooling re-ingests its own generated HTML reports, so files
/// named `.html`/`.htm` (or whose content opens with an HTML document
/// marker) go through [`extract_text`] before the core ever sees them. The
/// core itself never touches a file handle.
pub async fn read_document(path: &Path) -> anyhow::Result<String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    if looks_like_html(path, &raw) {
        extract_text(&raw)
    } else {
        Ok(raw)
    }
}

fn looks_like_html(path: &Path, content: &str) -> bool {
    let by_name = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            extension.eq_ignore_ascii_case("html") || extension.eq_ignore_ascii_case("htm")
        });

    let head: String = content
        .trim_start()
        .chars()
        .take(15)
        .collect::<String>()
        .to_ascii_lowercase();

    by_name || head.starts_with("<!doctype html") || head.starts_with("<html")
}

/// Recovers the text content of an HTML report.
///
/// `<pre>` blocks carry the original log verbatim, so when any exist their
/// contents are joined and returned. Otherwise the fallback strips scripts,
/// styles, and remaining tags from the whole document. Either way the five
/// standard entities are decoded back to their characters.
pub fn extract_text(html: &str) -> anyhow::Result<String> {
    let pre_blocks = Regex::new(PRE_BLOCK_REGEX)
        .with_context(|| format!("invalid pre-block regex: {PRE_BLOCK_REGEX}"))?;

    let mut combined = String::new();
    for caps in pre_blocks.captures_iter(html) {
        combined.push_str(&caps[1]);
        combined.push('\n');
    }

    if !combined.is_empty() {
        return Ok(decode_entities(&combined));
    }

    let dropped_blocks = Regex::new(DROPPED_BLOCK_REGEX)
        .with_context(|| format!("invalid dropped-block regex: {DROPPED_BLOCK_REGEX}"))?;
    let tags = Regex::new(TAG_REGEX).with_context(|| format!("invalid tag regex: {TAG_REGEX}"))?;

    let without_blocks = dropped_blocks.replace_all(html, "");
    let text = tags.replace_all(&without_blocks, "");

    Ok(decode_entities(&text))
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}
