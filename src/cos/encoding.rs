//! PDFDocEncoding, the single-byte encoding of text strings without a
//! byte order mark.

/// Code points for bytes 0x18..=0x1F.
const ACCENTS: [char; 8] = [
    '\u{02D8}', // breve
    '\u{02C7}', // caron
    '\u{02C6}', // circumflex
    '\u{02D9}', // dot above
    '\u{02DD}', // double acute
    '\u{02DB}', // ogonek
    '\u{02DA}', // ring
    '\u{02DC}', // small tilde
];

/// Code points for bytes 0x80..=0xA0. `None` marks an undefined code.
const HIGH: [Option<char>; 33] = [
    Some('\u{2022}'), // bullet
    Some('\u{2020}'), // dagger
    Some('\u{2021}'), // double dagger
    Some('\u{2026}'), // ellipsis
    Some('\u{2014}'), // em dash
    Some('\u{2013}'), // en dash
    Some('\u{0192}'), // florin
    Some('\u{2044}'), // fraction slash
    Some('\u{2039}'),
    Some('\u{203A}'),
    Some('\u{2212}'), // minus
    Some('\u{2030}'), // per mille
    Some('\u{201E}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201A}'),
    Some('\u{2122}'), // trademark
    Some('\u{FB01}'), // fi
    Some('\u{FB02}'), // fl
    Some('\u{0141}'),
    Some('\u{0152}'),
    Some('\u{0160}'),
    Some('\u{0178}'),
    Some('\u{017D}'),
    Some('\u{0131}'),
    Some('\u{0142}'),
    Some('\u{0153}'),
    Some('\u{0161}'),
    Some('\u{017E}'),
    None,             // 0x9F
    Some('\u{20AC}'), // euro
];

/// Decode one byte. Undefined codes (0x7F, 0x9F, 0xAD) keep their raw
/// code point.
pub fn decode_byte(byte: u8) -> char {
    match byte {
        0x18..=0x1F => ACCENTS[usize::from(byte - 0x18)],
        0x80..=0xA0 => HIGH[usize::from(byte - 0x80)].unwrap_or(char::from(byte)),
        _ => char::from(byte),
    }
}

pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| decode_byte(b)).collect()
}

/// The byte that decodes to `c`, if there is one.
pub fn encode_char(c: char) -> Option<u8> {
    if let Ok(byte) = u8::try_from(u32::from(c)) {
        if decode_byte(byte) == c {
            return Some(byte);
        }
    }
    ACCENTS
        .iter()
        .position(|&a| a == c)
        .map(|i| 0x18 + i as u8)
        .or_else(|| {
            HIGH.iter()
                .position(|&h| h == Some(c))
                .map(|i| 0x80 + i as u8)
        })
}
