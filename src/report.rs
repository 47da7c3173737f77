//! Line diffs attached to failed string equality checks.

use std::io::{self, Write};

use difference::{Changeset, Difference};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{settings::Settings, value::Value};

/// Returns a rendered diff when `expected` and `actual` are both strings that
/// differ and diffs are enabled.
pub(crate) fn string_diff(expected: Option<&Value>, actual: &Value, settings: &Settings) -> Option<String> {
    if !settings.diff {
        return None;
    }
    let (Some(Value::String(expected)), Value::String(actual)) = (expected, actual) else {
        return None;
    };
    if expected == actual {
        return None;
    }
    render(expected, actual, settings.color).ok()
}

fn render(expected: &str, actual: &str, color: bool) -> io::Result<String> {
    let changeset = Changeset::new(expected, actual, "\n");
    let mut buffer = if color { Buffer::ansi() } else { Buffer::no_color() };
    writeln!(buffer, "diff (- expected, + actual):")?;
    for change in &changeset.diffs {
        match change {
            Difference::Same(text) => write_lines(&mut buffer, ' ', text, None)?,
            Difference::Rem(text) => write_lines(&mut buffer, '-', text, Some(Color::Red))?,
            Difference::Add(text) => write_lines(&mut buffer, '+', text, Some(Color::Green))?,
        }
    }
    Ok(String::from_utf8_lossy(buffer.as_slice()).trim_end().to_string())
}

fn write_lines(buffer: &mut Buffer, marker: char, text: &str, color: Option<Color>) -> io::Result<()> {
    if let Some(color) = color {
        buffer.set_color(ColorSpec::new().set_fg(Some(color)))?;
    }
    for line in text.split('\n') {
        writeln!(buffer, "{} {}", marker, line)?;
    }
    buffer.reset()
}
