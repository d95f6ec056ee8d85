//! Decoders for the three encodings a self-writing page stacks on its payload:
//! the JavaScript string literal itself, then `unescape` or
//! `decodeURIComponent` on the literal's value.

use crate::errors::{RebrandError, RebrandResult};

fn hex_value(digits: &[char]) -> RebrandResult<u32> {
    let text: String = digits.iter().collect();
    u32::from_str_radix(&text, 16)
        .map_err(|_| RebrandError::Decode(format!("invalid hex escape '{text}'")))
}

fn take_hex(chars: &[char], start: usize, len: usize) -> RebrandResult<u32> {
    let Some(digits) = chars.get(start..start + len) else {
        return Err(RebrandError::Decode("truncated hex escape".into()));
    };
    if !digits.iter().all(char::is_ascii_hexdigit) {
        return Err(RebrandError::Decode(format!(
            "invalid hex escape '{}'",
            digits.iter().collect::<String>()
        )));
    }
    hex_value(digits)
}

fn from_utf16(units: &[u16]) -> RebrandResult<String> {
    String::from_utf16(units).map_err(|e| RebrandError::Decode(e.to_string()))
}

/// Decode the body of a quoted JavaScript string literal.
///
/// Handles the single-character escapes, `\xHH` and `\uXXXX` (surrogate pairs
/// included). Line continuations are dropped.
///
/// # Errors
///
/// Fails on malformed hex escapes, a trailing backslash, or unpaired
/// surrogates.
pub fn decode_js_string(literal: &str) -> RebrandResult<String> {
    let chars: Vec<char> = literal.chars().collect();
    let mut units: Vec<u16> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '\\' {
            let mut buf = [0u16; 2];
            units.extend_from_slice(c.encode_utf16(&mut buf));
            i += 1;
            continue;
        }

        let Some(&escaped) = chars.get(i + 1) else {
            return Err(RebrandError::Decode("trailing backslash".into()));
        };
        i += 2;
        match escaped {
            'n' => units.push(u16::from(b'\n')),
            'r' => units.push(u16::from(b'\r')),
            't' => units.push(u16::from(b'\t')),
            'b' => units.push(0x08),
            'f' => units.push(0x0c),
            'v' => units.push(0x0b),
            '0' => units.push(0),
            'x' => {
                let value = take_hex(&chars, i, 2)?;
                // two hex digits always fit in u16
                units.push(value as u16);
                i += 2;
            }
            'u' => {
                let value = take_hex(&chars, i, 4)?;
                units.push(value as u16);
                i += 4;
            }
            '\n' => {}
            other => {
                let mut buf = [0u16; 2];
                units.extend_from_slice(other.encode_utf16(&mut buf));
            }
        }
    }

    from_utf16(&units)
}

/// JavaScript `unescape`: `%uXXXX` is a UTF-16 unit, `%XX` a Latin-1 code
/// point, and a `%` that starts neither is kept literally.
///
/// # Errors
///
/// Fails only when the resulting UTF-16 sequence holds unpaired surrogates.
pub fn js_unescape(input: &str) -> RebrandResult<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut units: Vec<u16> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '%' {
            if chars.get(i + 1) == Some(&'u') {
                if let Ok(value) = take_hex(&chars, i + 2, 4) {
                    units.push(value as u16);
                    i += 6;
                    continue;
                }
            }
            if let Ok(value) = take_hex(&chars, i + 1, 2) {
                units.push(value as u16);
                i += 3;
                continue;
            }
        }
        let mut buf = [0u16; 2];
        units.extend_from_slice(c.encode_utf16(&mut buf));
        i += 1;
    }

    from_utf16(&units)
}

/// JavaScript `decodeURIComponent`: every `%` must start a `%XX` escape and
/// the decoded bytes must be UTF-8.
///
/// # Errors
///
/// Fails on a malformed escape or invalid UTF-8, as the browser's
/// `URIError` would.
pub fn uri_component_decode(input: &str) -> RebrandResult<String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(RebrandError::Decode(format!(
                    "malformed percent escape at byte {i}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| RebrandError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(
            decode_js_string(r#"<p class=\"x\">it\'s\n\x41é</p>"#).unwrap(),
            "<p class=\"x\">it's\nAé</p>"
        );
        assert_eq!(decode_js_string(r"<\/script>").unwrap(), "</script>");
    }

    #[test]
    fn test_js_string_surrogate_pair() {
        assert_eq!(decode_js_string(r"\ud83d\ude00").unwrap(), "😀");
        assert!(decode_js_string(r"\ud83d").is_err());
    }

    #[test]
    fn test_js_string_malformed() {
        assert!(decode_js_string(r"\x4").is_err());
        assert!(decode_js_string(r"\uZZZZ").is_err());
        assert!(decode_js_string("abc\\").is_err());
    }

    #[test]
    fn test_unescape_latin1_and_utf16() {
        assert_eq!(js_unescape("%3Cb%3E%E9%u20AC%3C/b%3E").unwrap(), "<b>é€</b>");
        assert_eq!(js_unescape("100%").unwrap(), "100%");
        assert_eq!(js_unescape("%zz").unwrap(), "%zz");
    }

    #[test]
    fn test_uri_component_decode() {
        assert_eq!(uri_component_decode("%3Ch1%3E%C3%A9%3C%2Fh1%3E").unwrap(), "<h1>é</h1>");
        assert!(uri_component_decode("%E0%A4%A").is_err());
        assert!(uri_component_decode("%C3").is_err());
    }
}
