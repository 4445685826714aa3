//! Literal-style text rendering shared by the handlers.
//!
//! Values render the way an interactive interpreter echoes them:
//! `None`, `True`, `'text'`, `(1, 'a')`, `[..]`, `{'k': v}`.

use std::fmt::Write;

/// Quote a string, switching to double quotes when it contains `'` but no `"`.
///
/// Backslashes, the chosen quote, and control characters are escaped.
pub fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (0x7f..0xa0).contains(&(c as u32)) => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Render a byte string as `b'..'` with non-printable bytes hex-escaped.
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::from("b'");
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            0x20..=0x7e => out.push(b as char),
            _ => {
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
    out.push('\'');
    out
}

/// Render a float so whole numbers keep their trailing `.0`.
pub fn float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:?}", value)
    }
}

/// Join already-rendered items as a tuple; a single item gets a trailing comma.
pub fn tuple(items: &[String]) -> String {
    match items {
        [single] => format!("({},)", single),
        _ => format!("({})", items.join(", ")),
    }
}

/// Join already-rendered items as a list.
pub fn list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
