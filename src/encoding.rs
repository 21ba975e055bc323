// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Encoding sniffing and byte decoding.
//!
//! Order of authority: byte-order mark, then the transport-layer label,
//! then a prescan of the first 1024 bytes for `<meta charset>` /
//! `<meta http-equiv=content-type>`, then the windows-1252 fallback.
//! Sniffing never fails; malformed byte sequences decode to U+FFFD.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252, X_USER_DEFINED};
use tendril::StrTendril;

/// How sure the sniffer is about its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confidence {
    Tentative,
    Certain,
    /// The caller supplied decoded text, so no encoding applies.
    Irrelevant,
}

/// How many bytes the prescan may examine.
const PRESCAN_WINDOW: usize = 1024;

/// Decide an encoding for a byte stream.
pub fn sniff(bytes: &[u8], transport_label: Option<&[u8]>) -> (&'static Encoding, Confidence) {
    if let Some(enc) = bom_encoding(bytes) {
        return (enc, Confidence::Certain);
    }

    if let Some(label) = transport_label {
        if let Some(enc) = Encoding::for_label(label) {
            return (enc, Confidence::Certain);
        }
    }

    if let Some(enc) = prescan(&bytes[..bytes.len().min(PRESCAN_WINDOW)]) {
        return (demote_for_meta(enc), Confidence::Tentative);
    }

    (WINDOWS_1252, Confidence::Tentative)
}

/// Decode a whole byte buffer with the given encoding. Invalid sequences
/// become U+FFFD; a leading BOM matching the encoding is removed.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> StrTendril {
    let (text, _actual, _had_errors) = encoding.decode(bytes);
    StrTendril::from_slice(&text)
}

/// Encoding for a leading byte-order mark, if any.
fn bom_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    match bytes {
        [0xEF, 0xBB, 0xBF, ..] => Some(UTF_8),
        [0xFE, 0xFF, ..] => Some(UTF_16BE),
        [0xFF, 0xFE, ..] => Some(UTF_16LE),
        _ => None,
    }
}

/// An in-document declaration cannot name an encoding the document could
/// not have been written in.
fn demote_for_meta(enc: &'static Encoding) -> &'static Encoding {
    if enc == UTF_16BE || enc == UTF_16LE {
        UTF_8
    } else if enc == X_USER_DEFINED {
        WINDOWS_1252
    } else {
        enc
    }
}

/// <https://html.spec.whatwg.org/multipage/#prescan-a-byte-stream-to-determine-its-encoding>
fn prescan(bytes: &[u8]) -> Option<&'static Encoding> {
    let mut pos = 0usize;

    while pos < bytes.len() {
        if bytes[pos..].starts_with(b"<!--") {
            // Comment: skip to the first `-->` (the opening dashes may
            // overlap it, hence the -2).
            pos += 2;
            loop {
                if pos + 3 > bytes.len() {
                    return None;
                }
                if &bytes[pos..pos + 3] == b"-->" {
                    pos += 3;
                    break;
                }
                pos += 1;
            }
            continue;
        }

        if starts_with_meta(&bytes[pos..]) {
            pos += "<meta".len();
            if let Some(enc) = prescan_meta(bytes, &mut pos) {
                return Some(enc);
            }
            continue;
        }

        if bytes[pos] == b'<' && pos + 1 < bytes.len() {
            let next = bytes[pos + 1];
            if next.is_ascii_alphabetic() || (next == b'/' && is_tag_after_solidus(bytes, pos + 2))
            {
                // A tag we don't care about: skip its name, then drain
                // attributes so a quoted `>` doesn't end it early.
                pos += 1;
                while pos < bytes.len()
                    && !matches!(bytes[pos], 0x09 | 0x0A | 0x0C | 0x0D | b' ' | b'>')
                {
                    pos += 1;
                }
                while get_attribute(bytes, &mut pos).is_some() {}
                pos += 1;
                continue;
            }
            if matches!(next, b'!' | b'/' | b'?') {
                // Bogus markup: skip to `>`.
                pos += 2;
                while pos < bytes.len() && bytes[pos] != b'>' {
                    pos += 1;
                }
                pos += 1;
                continue;
            }
        }

        pos += 1;
    }

    None
}

fn is_tag_after_solidus(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos).is_some_and(|b| b.is_ascii_alphabetic())
}

fn starts_with_meta(bytes: &[u8]) -> bool {
    if bytes.len() < 6 || !bytes[..5].eq_ignore_ascii_case(b"<meta") {
        return false;
    }
    matches!(bytes[5], 0x09 | 0x0A | 0x0C | 0x0D | b' ' | b'/')
}

/// Process the attributes of a prescanned `<meta>`; `pos` points just
/// after the name.
fn prescan_meta(bytes: &[u8], pos: &mut usize) -> Option<&'static Encoding> {
    let mut seen: Vec<Vec<u8>> = Vec::new();
    let mut got_pragma = false;
    let mut need_pragma: Option<bool> = None;
    let mut charset: Option<&'static Encoding> = None;

    while let Some((name, value)) = get_attribute(bytes, pos) {
        if seen.iter().any(|n| *n == name) {
            continue;
        }
        match name.as_slice() {
            b"http-equiv" => {
                if value.eq_ignore_ascii_case(b"content-type") {
                    got_pragma = true;
                }
            },
            b"content" => {
                if charset.is_none() {
                    if let Some(label) = charset_from_content(&value) {
                        if let Some(enc) = Encoding::for_label(label) {
                            charset = Some(enc);
                            need_pragma = Some(true);
                        }
                    }
                }
            },
            b"charset" => {
                if let Some(enc) = Encoding::for_label(&value) {
                    charset = Some(enc);
                    need_pragma = Some(false);
                }
            },
            _ => (),
        }
        seen.push(name);
    }

    match (charset, need_pragma) {
        (Some(enc), Some(false)) => Some(enc),
        (Some(enc), Some(true)) if got_pragma => Some(enc),
        _ => None,
    }
}

/// <https://html.spec.whatwg.org/multipage/#concept-get-attributes-when-sniffing>
fn get_attribute(bytes: &[u8], pos: &mut usize) -> Option<(Vec<u8>, Vec<u8>)> {
    while *pos < bytes.len() && matches!(bytes[*pos], 0x09 | 0x0A | 0x0C | 0x0D | b' ' | b'/') {
        *pos += 1;
    }
    if *pos >= bytes.len() || bytes[*pos] == b'>' {
        return None;
    }

    let mut name = Vec::new();
    let mut value = Vec::new();

    loop {
        if *pos >= bytes.len() {
            return None;
        }
        match bytes[*pos] {
            b'=' if !name.is_empty() => {
                *pos += 1;
                break;
            },
            0x09 | 0x0A | 0x0C | 0x0D | b' ' => {
                // Spaces before a possible `=`.
                while *pos < bytes.len()
                    && matches!(bytes[*pos], 0x09 | 0x0A | 0x0C | 0x0D | b' ')
                {
                    *pos += 1;
                }
                if *pos >= bytes.len() {
                    return None;
                }
                if bytes[*pos] != b'=' {
                    return Some((name, value));
                }
                *pos += 1;
                break;
            },
            b'/' | b'>' => return Some((name, value)),
            b => {
                name.push(b.to_ascii_lowercase());
                *pos += 1;
            },
        }
    }

    while *pos < bytes.len() && matches!(bytes[*pos], 0x09 | 0x0A | 0x0C | 0x0D | b' ') {
        *pos += 1;
    }
    if *pos >= bytes.len() {
        return None;
    }

    match bytes[*pos] {
        quote @ (b'"' | b'\'') => {
            *pos += 1;
            while *pos < bytes.len() {
                let b = bytes[*pos];
                *pos += 1;
                if b == quote {
                    return Some((name, value));
                }
                value.push(b.to_ascii_lowercase());
            }
            None
        },
        b'>' => Some((name, value)),
        _ => {
            while *pos < bytes.len()
                && !matches!(bytes[*pos], 0x09 | 0x0A | 0x0C | 0x0D | b' ' | b'>')
            {
                value.push(bytes[*pos].to_ascii_lowercase());
                *pos += 1;
            }
            Some((name, value))
        },
    }
}

/// <https://html.spec.whatwg.org/multipage/#algorithm-for-extracting-a-character-encoding-from-a-meta-element>
fn charset_from_content(input: &[u8]) -> Option<&[u8]> {
    let mut position = 0;
    loop {
        loop {
            let candidate = input.get(position..position + "charset".len())?;
            if candidate.eq_ignore_ascii_case(b"charset") {
                break;
            }
            position += 1;
        }
        position += "charset".len();

        position += input[position..]
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();

        if input.get(position) == Some(&b'=') {
            break;
        }
    }
    position += 1;

    position += input[position..]
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();

    match input.get(position)? {
        quote @ (b'"' | b'\'') => {
            let length = input[position + 1..].iter().position(|b| b == quote)?;
            Some(&input[position + 1..position + 1 + length])
        },
        _ => {
            let rest = &input[position..];
            let length = rest
                .iter()
                .position(|b| b.is_ascii_whitespace() || *b == b';')
                .unwrap_or(rest.len());
            Some(&rest[..length])
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_without_charset() {
        assert_eq!(charset_from_content(b"foobar"), None);
    }

    #[test]
    fn content_with_capitalized_charset() {
        assert_eq!(charset_from_content(b"cHarSet=utf8"), Some(&b"utf8"[..]));
    }

    #[test]
    fn content_with_no_equals_after_charset() {
        assert_eq!(charset_from_content(b"charset utf8"), None);
    }

    #[test]
    fn content_with_whitespace_around_equals() {
        assert_eq!(
            charset_from_content(b"charset \t=\tutf8"),
            Some(&b"utf8"[..])
        );
    }

    #[test]
    fn content_with_quoted_value() {
        assert_eq!(charset_from_content(b"charset='utf8'"), Some(&b"utf8"[..]));
        assert_eq!(
            charset_from_content(b"charset=\"utf8\""),
            Some(&b"utf8"[..])
        );
        assert_eq!(charset_from_content(b"charset='utf8"), None);
        assert_eq!(charset_from_content(b"charset=\"utf8"), None);
    }

    #[test]
    fn content_with_implicit_terminator() {
        assert_eq!(charset_from_content(b"charset=utf8 foo"), Some(&b"utf8"[..]));
        assert_eq!(charset_from_content(b"charset=utf8;foo"), Some(&b"utf8"[..]));
    }

    #[test]
    fn content_with_content_type() {
        assert_eq!(
            charset_from_content(b"text/html; charset=utf8"),
            Some(&b"utf8"[..])
        );
    }

    #[test]
    fn bom_wins() {
        let (enc, conf) = sniff(b"\xEF\xBB\xBF<meta charset=latin1>", None);
        assert_eq!(enc, UTF_8);
        assert_eq!(conf, Confidence::Certain);

        let (enc, _) = sniff(b"\xFE\xFFxx", None);
        assert_eq!(enc, UTF_16BE);
        let (enc, _) = sniff(b"\xFF\xFExx", None);
        assert_eq!(enc, UTF_16LE);
    }

    #[test]
    fn transport_label() {
        let (enc, conf) = sniff(b"hello", Some(&b" Shift_JIS "[..]));
        assert_eq!(enc.name(), "Shift_JIS");
        assert_eq!(conf, Confidence::Certain);

        // Unknown labels fall through to the prescan / fallback.
        let (enc, conf) = sniff(b"hello", Some(&b"not-a-charset"[..]));
        assert_eq!(enc, WINDOWS_1252);
        assert_eq!(conf, Confidence::Tentative);
    }

    #[test]
    fn meta_prescan() {
        let (enc, conf) = sniff(b"<html><meta charset=utf-8><body>", None);
        assert_eq!(enc, UTF_8);
        assert_eq!(conf, Confidence::Tentative);

        let (enc, _) = sniff(
            b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=EUC-JP\">",
            None,
        );
        assert_eq!(enc.name(), "EUC-JP");

        // A content charset without the pragma is ignored.
        let (enc, _) = sniff(b"<meta content=\"text/html; charset=EUC-JP\">", None);
        assert_eq!(enc, WINDOWS_1252);

        // Declarations inside comments are not real.
        let (enc, _) = sniff(b"<!-- <meta charset=EUC-JP> --><p>", None);
        assert_eq!(enc, WINDOWS_1252);
    }

    #[test]
    fn meta_utf16_demoted() {
        let (enc, _) = sniff(b"<meta charset=utf-16be>", None);
        assert_eq!(enc, UTF_8);
        let (enc, _) = sniff(b"<meta charset=x-user-defined>", None);
        assert_eq!(enc, WINDOWS_1252);
    }

    #[test]
    fn decode_replaces_malformed() {
        let text = decode(b"ab\xFF\xFEcd", UTF_8);
        assert_eq!(&*text, "ab\u{fffd}\u{fffd}cd");
        let text = decode(b"\xEF\xBB\xBFhey", UTF_8);
        assert_eq!(&*text, "hey");
    }
}
