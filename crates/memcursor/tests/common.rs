#![allow(missing_docs)]
#![allow(dead_code)]

pub const PAYLOAD: [u8; 5] = [10, 20, 30, 40, 50];

pub const TEXT: &str = "héllo";

/// Encodes `s` the way `CharCursor::from_str` does, for borrowed cursors.
pub fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
