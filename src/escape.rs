//! Markdown escaping for extracted descriptions
//!
//! Descriptions come from arbitrary comment text and are embedded in a
//! generated markdown list, so anything that markdown would treat as
//! structure is neutralised with a backslash. This is tuned for short,
//! single-line comment text rather than full documents.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6} )").expect("HEADING regex is invalid"));

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([-*_] *){3,}$").expect("HORIZONTAL_RULE regex is invalid"));

static ORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\W* {0,3})(\d+)\. ").expect("ORDERED_LIST regex is invalid"));

static UNORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([^\\\w]*)[*+-] ").expect("UNORDERED_LIST regex is invalid"));

static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\W* {0,3})> ").expect("BLOCKQUOTE regex is invalid"));

/// Escape markdown-significant sequences in `text`.
///
/// The steps run in a fixed order and the final inline pass leaves alone any
/// character that an earlier step already escaped. Escaping twice doubles the
/// backslashes.
///
/// ```
/// use toc::escape::escape_markdown;
///
/// assert_eq!(escape_markdown("50% off!"), "50% off!");
/// assert_eq!(escape_markdown("* bullet"), "\\* bullet");
/// assert_eq!(escape_markdown("# Heading"), "\\# Heading");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let text = escape_backslashes(text);
    let text = HEADING.replace_all(&text, r"\$1");
    let text = HORIZONTAL_RULE.replace_all(&text, |caps: &Captures| escape_rule(&caps[0]));
    let text = ORDERED_LIST.replace_all(&text, r"${1}${2}\. ");
    let text = UNORDERED_LIST.replace_all(&text, |caps: &Captures| escape_chars(&caps[0], &['*', '+', '-']));
    let text = BLOCKQUOTE.replace_all(&text, |caps: &Captures| escape_chars(&caps[0], &['>']));
    escape_inline(&text)
}

/// Double every backslash that is followed by a non-whitespace character.
fn escape_backslashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' && chars.peek().is_some_and(|next| !next.is_whitespace()) {
            out.push('\\');
        }
    }
    out
}

/// Escape the first three rule characters of a horizontal rule.
fn escape_rule(rule: &str) -> String {
    let marker = if rule.contains('-') {
        '-'
    } else if rule.contains('_') {
        '_'
    } else {
        '*'
    };
    rule.replacen(marker, &format!("\\{}", marker), 3)
}

fn escape_chars(text: &str, targets: &[char]) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if targets.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape emphasis, code and table characters.
///
/// After [`escape_backslashes`] every backslash run in front of one of these
/// characters has even length, so an odd run means a block-level step has
/// already escaped it.
fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut backslashes = 0usize;
    for c in text.chars() {
        if matches!(c, '*' | '_' | '`' | '|') && backslashes % 2 == 0 {
            out.push('\\');
        }
        out.push(c);
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_markdown("50% off!"), "50% off!");
        assert_eq!(
            escape_markdown("Build the table of contents"),
            "Build the table of contents"
        );
        assert_eq!(escape_markdown(""), "");
    }

    #[test]
    fn test_unordered_list_marker() {
        assert_eq!(escape_markdown("* bullet"), r"\* bullet");
        assert_eq!(escape_markdown("- item"), r"\- item");
        assert_eq!(escape_markdown("+ item"), r"\+ item");
    }

    #[test]
    fn test_heading() {
        assert_eq!(escape_markdown("# Heading"), r"\# Heading");
        assert_eq!(escape_markdown("### Third"), r"\### Third");
        // Not a heading without the space
        assert_eq!(escape_markdown("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(escape_markdown("---"), r"\-\-\-");
        assert_eq!(escape_markdown("- - - -"), r"\- \- \- -");
        assert_eq!(escape_markdown("***"), r"\*\*\*");
        assert_eq!(escape_markdown("****"), r"\*\*\*\*");
        assert_eq!(escape_markdown("___"), r"\_\_\_");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(escape_markdown("1. First step"), r"1\. First step");
        assert_eq!(escape_markdown("2023. A year"), r"2023\. A year");
        assert_eq!(escape_markdown("Version 1. beta"), "Version 1. beta");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(escape_markdown("> quoted"), r"\> quoted");
        assert_eq!(escape_markdown("a > b"), "a > b");
    }

    #[test]
    fn test_inline_characters() {
        assert_eq!(escape_markdown("use *args"), r"use \*args");
        assert_eq!(escape_markdown("snake_case"), r"snake\_case");
        assert_eq!(escape_markdown("run `make`"), r"run \`make\`");
        assert_eq!(escape_markdown("a | b"), r"a \| b");
        assert_eq!(escape_markdown("**bold**"), r"\*\*bold\*\*");
    }

    #[test]
    fn test_existing_backslash_escape_is_preserved() {
        assert_eq!(escape_markdown(r"a\*b"), r"a\\\*b");
        assert_eq!(escape_markdown(r"C:\path"), r"C:\\path");
        // Each backslash of a run is doubled on its own
        assert_eq!(escape_markdown(r"a\\b"), r"a\\\\b");
        // Backslash before whitespace is left alone
        assert_eq!(escape_markdown(r"a \ b"), r"a \ b");
    }

    #[test]
    fn test_not_idempotent() {
        let once = escape_markdown("* bullet");
        let twice = escape_markdown(&once);
        assert_ne!(once, twice);
    }

    #[test]
    fn test_multiline_text() {
        assert_eq!(escape_markdown("intro\n# Heading"), "intro\n\\# Heading");
    }
}
