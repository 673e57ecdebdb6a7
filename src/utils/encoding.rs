//! Tolerant text reading with UTF-8 fallback.
//!
//! Pipe-delimited exports frequently arrive as windows-1252 rather than
//! UTF-8, so the text loader decodes with this strategy:
//! 1. strip a BOM when present (UTF-8, UTF-16 LE/BE)
//! 2. strict UTF-8 fast path
//! 3. chardetng guess, decoded with replacement characters

use anyhow::Result;
use chardetng::EncodingDetector;
use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8};
use std::fs;
use std::path::Path;

/// Read a whole file as text, never failing on encoding problems alone.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_lossy(&bytes))
}

fn decode_lossy(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if bytes.starts_with(&[0xef, 0xbb, 0xbf]) {
        let (text, _, _) = UTF_8.decode(bytes);
        return text.into_owned();
    }
    if bytes.starts_with(&[0xff, 0xfe]) {
        let (text, _, _) = UTF_16LE.decode(bytes);
        return text.into_owned();
    }
    if bytes.starts_with(&[0xfe, 0xff]) {
        let (text, _, _) = UTF_16BE.decode(bytes);
        return text.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plain_utf8_passthrough() {
        assert_eq!(decode_lossy("ID|Name\n1|Köln".as_bytes()), "ID|Name\n1|Köln");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"ID|Name");
        assert_eq!(decode_lossy(&bytes), "ID|Name");
    }

    #[test]
    fn test_windows_1252_falls_back() {
        // "Köln" in windows-1252: K 0xf6 l n
        let bytes = [b'K', 0xf6, b'l', b'n'];
        assert_eq!(decode_lossy(&bytes), "Köln");
    }

    #[test]
    fn test_read_text_lossy_roundtrip() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("data.txt");
        fs::write(&path, "ID|Name\n1|X\n").expect("write");
        assert_eq!(read_text_lossy(&path).expect("read"), "ID|Name\n1|X\n");
    }
}
