//! Conversion of ASCII hexadecimal characters to numeric values.

/// Decode a single hexadecimal digit.
///
/// Accepts `0-9`, `A-F` and `a-f`. Returns `None` for any other character.
pub const fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 0x0A),
        b'a'..=b'f' => Some(c - b'a' + 0x0A),
        _ => None,
    }
}

/// Decode a byte from its high and low hexadecimal digits.
pub const fn decode_byte(high: u8, low: u8) -> Option<u8> {
    match (decode_digit(high), decode_digit(low)) {
        (Some(high), Some(low)) => Some(high << 4 | low),
        _ => None,
    }
}

/// Decode consecutive pairs of hexadecimal digits.
///
/// A trailing unpaired character is ignored. Each item is `None` where the
/// pair holds a non-hexadecimal character.
pub fn decode_pairs(r: &[u8]) -> impl Iterator<Item = Option<u8>> + '_ {
    r.chunks_exact(2).map(|pair| decode_byte(pair[0], pair[1]))
}
