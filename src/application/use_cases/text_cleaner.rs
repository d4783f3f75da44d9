// ============================================================
// TEXT CLEANER
// ============================================================
// Strips HTML markup from question/answer text before the length
// filters run. Single-pass regex substitution, no HTML parsing;
// nested or malformed tags are not guaranteed to be fully stripped.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// `.` does not match newlines, so code blocks spanning lines survive.
static CODE_BLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<pre><code>.*?</code></pre>").unwrap());

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<a[^>]+>(.*)</a>").unwrap());

// Checked against the link's inner text, not its href.
static SCHEME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+://").unwrap());

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Clean one raw text field, in order:
/// 1. remove `<pre><code>…</code></pre>` spans (non-greedy);
/// 2. replace each hyperlink with its inner text, unless the inner text
///    starts with a `scheme://` prefix, in which case drop it entirely;
/// 3. remove any remaining angle-bracket tag.
/// The result is lowercased. Cleaning is idempotent.
pub fn clean_text(raw: &str) -> String {
    let no_code = CODE_BLOCK_PATTERN.replace_all(raw, "");
    let no_links = LINK_PATTERN.replace_all(&no_code, |caps: &Captures| {
        let inner = &caps[1];
        if SCHEME_PATTERN.is_match(inner) {
            String::new()
        } else {
            inner.to_string()
        }
    });
    let no_tags = TAG_PATTERN.replace_all(&no_links, "");
    no_tags.to_lowercase()
}

/// Character count of a cleaned field.
pub fn char_count(text: &str) -> u64 {
    text.chars().count() as u64
}
