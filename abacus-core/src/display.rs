//! Text <-> number conversion for the display line.
//!
//! The display is kept as text so partial entries ("0.", "12") survive
//! verbatim. Numbers are produced from it by a lenient prefix parse and
//! written back in shortest round-trip form.

use crate::config::DisplayConfig;

/// Parse display text. The longest numeric prefix wins, a dangling `.` is
/// ignored, `Infinity` is recognised, and text with no numeric prefix is NaN.
pub fn parse_display(text: &str) -> f64 {
    let s = text.trim_start();
    let (sign, body) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    if body.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let end = numeric_prefix_len(body);
    if end == 0 {
        return f64::NAN;
    }

    let mut literal = body[..end].replacen(".e", "e", 1).replacen(".E", "E", 1);
    if literal.ends_with('.') {
        literal.pop();
    }
    if literal.starts_with('.') {
        literal.insert(0, '0');
    }

    literal
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

/// Length in bytes of the leading `digits [. digits] [e [sign] digits]` run.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    let mut mantissa = 0;

    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        mantissa += 1;
    }

    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        let mut frac = 0;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
            frac += 1;
        }
        if mantissa + frac > 0 {
            i = j;
            mantissa += frac;
        }
    }

    if mantissa == 0 {
        return 0;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let digits_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits_start {
            i = j;
        }
    }

    i
}

/// Shortest round-trip text for a value. Plain decimal between 1e-6 and
/// 1e21, exponential outside that band, `Infinity`/`NaN` for non-finite.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        signed_exponent(format!("{:e}", value))
    } else {
        format!("{}", value)
    }
}

/// Enough digits to print any finite f64 exactly.
const EXACT_DIGITS: usize = 1100;

/// Exponential form with a fixed number of fraction digits, e.g.
/// `1.234568e+12`. Exact ties round away from zero.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    if value == 0.0 {
        return signed_exponent(format!("{:.*e}", fraction_digits, 0.0));
    }

    let exact = format!("{:.*e}", EXACT_DIGITS.max(fraction_digits + 1), value.abs());
    let Some((mantissa, exp)) = exact.split_once('e') else {
        return signed_exponent(format!("{:.*e}", fraction_digits, value));
    };
    let mut exponent: i32 = exp.parse().unwrap_or(0);

    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let keep = fraction_digits + 1;
    let mut kept = digits[..keep].to_vec();

    if digits.get(keep).is_some_and(|&d| d >= 5) {
        let mut i = keep;
        loop {
            if i == 0 {
                // 9.99.. carried all the way: becomes 1.00.. one decade up
                kept.insert(0, 1);
                kept.pop();
                exponent += 1;
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let mut out = String::with_capacity(keep + 8);
    if value < 0.0 {
        out.push('-');
    }
    out.push(char::from(b'0' + kept[0]));
    if fraction_digits > 0 {
        out.push('.');
        out.extend(kept[1..].iter().map(|&d| char::from(b'0' + d)));
    }
    out.push('e');
    if exponent >= 0 {
        out.push('+');
    }
    out.push_str(&exponent.to_string());
    out
}

/// Round to `digits` significant digits. Zero disables rounding.
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if digits == 0 || !value.is_finite() || value == 0.0 {
        return value;
    }
    let precision = (digits - 1) as usize;
    format!("{:.*e}", precision, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// What the display area shows for the current display text: the text
/// itself, or its exponential form once it outgrows `max_len` characters.
pub fn render(display: &str, config: &DisplayConfig) -> String {
    if display.chars().count() > config.max_len {
        to_exponential(parse_display(display), config.exponent_digits)
    } else {
        display.to_string()
    }
}

fn signed_exponent(mut text: String) -> String {
    if let Some(pos) = text.find('e') {
        if !text[pos + 1..].starts_with('-') {
            text.insert(pos + 1, '+');
        }
    }
    text
}
