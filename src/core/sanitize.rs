// src/core/sanitize.rs

/// Reverse the JavaScript string-literal escaping understat wraps its JSON in.
///
/// Handles `\xNN`, `\uNNNN`, and the single-character escapes. `\xNN` escapes
/// are collected as raw bytes and decoded as UTF-8; if that fails they are
/// read as Latin-1 code points instead. Unknown escapes keep the escaped
/// character, as JavaScript does.
pub fn unescape_js(s: &str) -> Result<String, String> {
    match unescape_with(s, ByteMode::Utf8) {
        Ok(out) => Ok(out),
        Err(Unescape::BadUtf8) => unescape_with(s, ByteMode::Latin1).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ByteMode {
    Utf8,
    Latin1,
}

#[derive(Debug)]
enum Unescape {
    Truncated(usize),
    BadHex(usize),
    BadUtf8,
}

impl std::fmt::Display for Unescape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unescape::Truncated(at) => write!(f, "truncated escape at byte {at}"),
            Unescape::BadHex(at) => write!(f, "invalid hex escape at byte {at}"),
            Unescape::BadUtf8 => write!(f, "escaped bytes are not valid UTF-8"),
        }
    }
}

fn unescape_with(s: &str, mode: ByteMode) -> Result<String, Unescape> {
    let mut out: Vec<u8> = Vec::with_capacity(s.len());
    let mut chars = s.char_indices();

    let push_char = |out: &mut Vec<u8>, ch: char| {
        let mut buf = [0u8; 4];
        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    };

    while let Some((i, ch)) = chars.next() {
        if ch != '\\' {
            push_char(&mut out, ch);
            continue;
        }
        let (_, esc) = chars.next().ok_or(Unescape::Truncated(i))?;
        match esc {
            'x' => {
                let v = read_hex(&mut chars, 2, i)?;
                match mode {
                    ByteMode::Utf8 => out.push(v as u8),
                    ByteMode::Latin1 => push_char(&mut out, char::from(v as u8)),
                }
            }
            'u' => {
                let mut v = read_hex(&mut chars, 4, i)?;
                // UTF-16 surrogate pair spelled as two escapes
                if (0xD800..0xDC00).contains(&v) {
                    let mut ahead = chars.clone();
                    if let (Some((_, '\\')), Some((_, 'u'))) = (ahead.next(), ahead.next()) {
                        if let Ok(lo) = read_hex(&mut ahead, 4, i) {
                            if (0xDC00..0xE000).contains(&lo) {
                                v = 0x10000 + ((v - 0xD800) << 10) + (lo - 0xDC00);
                                chars = ahead;
                            }
                        }
                    }
                }
                push_char(&mut out, char::from_u32(v).unwrap_or('\u{FFFD}'));
            }
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            '0' => out.push(0),
            other => push_char(&mut out, other),
        }
    }
    String::from_utf8(out).map_err(|_| Unescape::BadUtf8)
}

fn read_hex(chars: &mut std::str::CharIndices<'_>, n: usize, at: usize) -> Result<u32, Unescape> {
    let mut v = 0u32;
    for _ in 0..n {
        let (_, c) = chars.next().ok_or(Unescape::Truncated(at))?;
        v = v * 16 + c.to_digit(16).ok_or(Unescape::BadHex(at))?;
    }
    Ok(v)
}

/// Output file stem: whitespace runs become `_`, path separators are dropped.
pub fn file_stem(name: &str) -> String {
    name.split_whitespace()
        .map(|part| part.replace(['/', '\\'], ""))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Percent-encode one URL path segment (RFC 3986 unreserved set kept).
pub fn encode_path_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
