use crate::engine::config::NamingScheme;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BASE36_WRAP: usize = 36 * 36 * 36;
const DECIMAL_WRAP: usize = 1000;

/// Encodes an integer with the digits `0-9a-z`, most significant first.
///
/// Negative values are prefixed with `-`. No padding is applied.
pub fn b36_encode(value: i64) -> String {
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        digits.push(BASE36_DIGITS[(magnitude % 36) as usize]);
        magnitude /= 36;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        digits.push(b'-');
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Left-pads `s` with `0` up to `width` characters, keeping a leading sign.
pub fn zero_fill(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let padding = "0".repeat(width - len);
    match s.strip_prefix(['-', '+']) {
        Some(rest) => format!("{}{}{}", &s[..1], padding, rest),
        None => format!("{}{}", padding, s),
    }
}

/// The 3-character numeric part of the name of bead `serial`.
pub fn atom_name(serial: usize, scheme: NamingScheme) -> String {
    match scheme {
        NamingScheme::Decimal => format!("{:03}", serial % DECIMAL_WRAP),
        NamingScheme::Base36 => zero_fill(&b36_encode((serial % BASE36_WRAP) as i64), 3),
    }
}
