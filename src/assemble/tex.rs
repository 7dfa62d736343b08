//! Small helpers for producing LaTeX text.

use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]").expect("valid line break regex"));

static SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([&%$#_{}])").expect("valid special char regex"));

static TRAILING_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\.\s*$").expect("valid trailing period regex"));

/// Clean free text for inclusion in a LaTeX body.
///
/// Line breaks become spaces, `& % $ # _ { }` are backslash-escaped and a
/// single trailing period is removed.
pub fn escape_tex(text: &str) -> String {
    let text = text.trim();
    let text = LINE_BREAKS.replace_all(text, " ");
    let text = SPECIAL_CHARS.replace_all(&text, r"\$1");
    TRAILING_PERIOD.replace(&text, "").into_owned()
}

/// Escaped text ending in sentence punctuation (`.` added unless `.?!` present).
pub fn sentence(text: &str) -> String {
    let mut text = escape_tex(text);
    if !text.ends_with(['.', '?', '!']) {
        text.push('.');
    }
    text
}

/// Anchor that other parts of the document can link to.
pub fn hypertarget(key: &str) -> String {
    format!("\\hypertarget{{{}}}{{}}", key)
}

/// Link to an anchor, labelled with the key itself.
pub fn hyperlink(key: &str) -> String {
    format!("\\hyperlink{{{}}}{{{}}}", key, key)
}
