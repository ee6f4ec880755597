//! Shared file reading utilities for description extraction
//!
//! Only the first few lines of a file are ever needed, so files are read
//! line by line and closed as soon as the buffer is full.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Number of lines handed to the comment readers.
pub const BUFFER_LINES: usize = 6;

/// Read up to [`BUFFER_LINES`] lines from the start of `path`.
///
/// A first line starting with `#!` is dropped and does not count towards the
/// buffer. Line endings (`\n` or `\r\n`) are removed and invalid UTF-8 is
/// replaced rather than rejected.
pub fn read_leading_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(BUFFER_LINES);
    let mut buf = Vec::new();
    let mut at_first_line = true;

    while lines.len() < BUFFER_LINES {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        if at_first_line {
            at_first_line = false;
            if line.starts_with("#!") {
                continue;
            }
        }
        lines.push(line);
    }

    Ok(lines)
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// The text after the last `.` of the file name, or `""` when there is none.
///
/// Unlike [`Path::extension`], dotfiles count: `.bashrc` has extension
/// `bashrc`.
///
/// ```
/// use std::path::Path;
/// use toc::file_utils::file_extension;
///
/// assert_eq!(file_extension(Path::new("src/main.rs")), "rs");
/// assert_eq!(file_extension(Path::new("archive.tar.gz")), "gz");
/// assert_eq!(file_extension(Path::new("Makefile")), "");
/// assert_eq!(file_extension(Path::new(".bashrc")), "bashrc");
/// ```
pub fn file_extension(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_at_most_six_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("long.txt");
        let content: String = (1..=10).map(|i| format!("line {}\n", i)).collect();
        fs::write(&path, content).unwrap();

        let lines = read_leading_lines(&path).unwrap();
        assert_eq!(lines.len(), BUFFER_LINES);
        assert_eq!(lines[0], "line 1");
        assert_eq!(lines[5], "line 6");
    }

    #[test]
    fn test_shebang_is_dropped_and_not_counted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("script.sh");
        let mut content = String::from("#!/bin/bash\n");
        content.extend((1..=10).map(|i| format!("# {}\n", i)));
        fs::write(&path, content).unwrap();

        let lines = read_leading_lines(&path).unwrap();
        assert_eq!(lines.len(), BUFFER_LINES);
        assert_eq!(lines[0], "# 1");
        assert_eq!(lines[5], "# 6");
    }

    #[test]
    fn test_shebang_only_on_first_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("odd.sh");
        fs::write(&path, "# comment\n#!/bin/bash\n").unwrap();

        let lines = read_leading_lines(&path).unwrap();
        assert_eq!(lines, vec!["# comment", "#!/bin/bash"]);
    }

    #[test]
    fn test_crlf_and_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("windows.txt");
        fs::write(&path, b"// caf\xe9\r\nnext\r\n").unwrap();

        let lines = read_leading_lines(&path).unwrap();
        assert_eq!(lines, vec!["// caf\u{FFFD}", "next"]);
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.rs");
        fs::write(&path, "").unwrap();

        assert!(read_leading_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_leading_lines(Path::new("/nonexistent/file.rs"));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_extension_edge_cases() {
        assert_eq!(file_extension(Path::new("trailing.")), "");
        assert_eq!(file_extension(Path::new("dir.d/file")), "");
        assert_eq!(file_extension(Path::new("font.EOT")), "EOT");
        assert_eq!(file_extension(Path::new("/")), "");
    }
}
