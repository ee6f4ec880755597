//! Shared utility functions for console output

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stream(use_color: bool, to_stderr: bool) -> StandardStream {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    if to_stderr {
        StandardStream::stderr(color_choice)
    } else {
        StandardStream::stdout(color_choice)
    }
}

/// Write `message` in bold `color`, followed by a newline.
pub fn write_status<W: WriteColor>(out: &mut W, message: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", message)?;
    out.reset()?;
    writeln!(out)
}

/// Print a status line to stdout.
pub fn print_status(message: &str, color: Color, use_color: bool) -> io::Result<()> {
    write_status(&mut stream(use_color, false), message, color)
}

/// Print an error line to stderr, prefixed with the program name.
pub fn print_error(message: &str, use_color: bool) -> io::Result<()> {
    let mut stderr = stream(use_color, true);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "toc:")?;
    stderr.reset()?;
    writeln!(stderr, " {}", message)
}
