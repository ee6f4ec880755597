//! The two comment readers behind [`CommentStrategy`](crate::grammar::CommentStrategy)
//!
//! Both readers take the leading lines of a file and return the comment text
//! with its markers removed, or `None` when the comment style is absent.
//! Captured lines are concatenated without a separator, so a multi-line
//! comment collapses into one description string.

/// Strip `prefix` from the start of `line` for as long as it keeps matching.
///
/// ```
/// use toc::readers::strip_repeated_prefix;
///
/// assert_eq!(strip_repeated_prefix("//// title", "//"), " title");
/// assert_eq!(strip_repeated_prefix("## ## title", "#"), " ## title");
/// assert_eq!(strip_repeated_prefix("code", "#"), "code");
/// ```
pub fn strip_repeated_prefix<'a>(line: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return line;
    }
    let mut rest = line;
    while let Some(stripped) = rest.strip_prefix(prefix) {
        rest = stripped;
    }
    rest
}

/// Read the first run of lines starting with `prefix`.
///
/// Lines before the run are skipped and the first line after it ends the
/// run. Only the first captured line is whitespace-trimmed; later lines keep
/// whatever follows their prefix.
pub fn read_line_prefix<S: AsRef<str>>(lines: &[S], prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }

    let mut captured: Vec<&str> = Vec::new();
    for line in lines.iter().map(AsRef::as_ref) {
        if !line.starts_with(prefix) {
            if captured.is_empty() {
                continue;
            }
            break;
        }
        let text = strip_repeated_prefix(line, prefix);
        if captured.is_empty() {
            captured.push(text.trim());
        } else {
            captured.push(text);
        }
    }

    if captured.is_empty() {
        None
    } else {
        Some(captured.concat())
    }
}

/// Read the first block opened by `start` and closed by `end`.
///
/// The opening line loses `start` and surrounding whitespace. The closing
/// line loses `end` and nothing else. A block that is still open at the end
/// of `lines` is not a match.
pub fn read_delimited_block<S: AsRef<str>>(lines: &[S], start: &str, end: &str) -> Option<String> {
    let mut lines = lines.iter().map(AsRef::as_ref);
    let opening = lines.find(|line| line.starts_with(start))?;
    let first = opening[start.len()..].trim();

    // `"""summary"""` opens and closes on one line
    if !end.is_empty() && first.len() >= end.len() {
        if let Some(body) = first.strip_suffix(end) {
            return Some(body.to_string());
        }
    }

    let mut captured = vec![first];
    for line in lines {
        if let Some(body) = line.strip_suffix(end) {
            captured.push(body);
            return Some(captured.concat());
        }
        captured.push(line);
    }

    None
}
