//! Parsing of single answer lines typed at the terminal.

use digitizer_traits::{PixelPoint, PointerEvent};

/// Parse one line of point-capture input.
///
/// - `X Y` or `X,Y` selects a point
/// - `u` / `undo` removes the last point
/// - empty, `done`, `f` or `finish` stops capturing
///
/// Returns `None` for anything else.
pub fn parse_pointer_line(line: &str) -> Option<PointerEvent> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" | "done" | "f" | "finish" => return Some(PointerEvent::Finish),
        "u" | "undo" => return Some(PointerEvent::Undo),
        _ => {}
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let x = parts.next()?.parse::<f64>().ok()?;
    let y = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let p = PixelPoint::new(x, y);
    p.is_finite().then_some(PointerEvent::Add(p))
}

/// Parse a float answer; blank or malformed input yields `None`.
pub fn parse_float(line: &str) -> Option<f64> {
    line.trim().parse::<f64>().ok()
}

/// Parse a yes/no answer. Blank means "no"; unrecognized text yields `None`.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "" | "n" | "no" => Some(false),
        _ => None,
    }
}
