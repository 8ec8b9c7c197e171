//! Recipient file loading with encoding auto-detection.
//!
//! Recipient lists arrive as `.txt` or `.csv` exports from all kinds of
//! tools, so the bytes are decoded after sniffing their charset. The text is
//! handed to [`mailblast_core::parse`] unchanged.
//!
//! A file that cannot be read yields an empty string (and a warning log
//! entry): the operator sees "0 valid recipients" and picks another file.

use std::io::Read;
use std::path::Path;

use mailblast_core::LoadSequencer;

use crate::api::logs::{log_info, log_warning};
use crate::error::{LoadError, LoadResult};

/// Text decoded from a recipient file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// Detected or used encoding
    pub encoding: String,
    /// Size of the raw input
    pub bytes: usize,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _confidence, _language) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes with the given encoding. Never fails: unknown encodings and
/// malformed sequences fall back to lossy UTF-8.
///
/// Latin-1 labels decode as windows-1252, the WHATWG mapping for them.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        "iso-8859-15" | "latin-9" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        // Strips a leading BOM
        _ => encoding_rs::UTF_8.decode(bytes).0.into_owned(),
    }
}

/// Detect and decode in one step.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    let encoding = detect_encoding(bytes);
    let text = decode_content(bytes, &encoding);

    DecodedText { text, encoding, bytes: bytes.len() }
}

/// Read a whole stream (e.g. stdin) and decode it like a file.
///
/// A failed read logs a warning and gives an empty string.
pub fn load_from_reader<R: Read>(mut reader: R) -> String {
    let mut bytes = Vec::new();
    match reader.read_to_end(&mut bytes) {
        Ok(_) => decode_bytes(&bytes).text,
        Err(e) => {
            log_warning(format!("Could not read input: {}", e));
            String::new()
        }
    }
}

/// Read and decode a file, reporting failures.
pub async fn try_load_file(path: &Path, max_bytes: Option<u64>) -> LoadResult<DecodedText> {
    if let Some(limit) = max_bytes {
        let size = tokio::fs::metadata(path).await?.len();
        if size > limit {
            return Err(LoadError::TooLarge { size, limit });
        }
    }

    let bytes = tokio::fs::read(path).await?;
    Ok(decode_bytes(&bytes))
}

/// Read a recipient file into text. Unreadable files give an empty string.
pub async fn load_from_file(path: &Path) -> String {
    match try_load_file(path, None).await {
        Ok(decoded) => {
            log_info(format!(
                "Loaded {} ({} bytes, {})",
                path.display(),
                decoded.bytes,
                decoded.encoding
            ));
            decoded.text
        }
        Err(e) => {
            log_warning(format!("Could not read {}: {}", path.display(), e));
            String::new()
        }
    }
}

/// Loads files one selection at a time; a read that finishes after a newer
/// selection started is discarded.
#[derive(Debug, Default)]
pub struct RecipientFileLoader {
    sequencer: LoadSequencer,
}

impl RecipientFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when a newer [`load`](Self::load) started before this one finished.
    pub async fn load(&self, path: &Path) -> Option<String> {
        let ticket = self.sequencer.begin();
        let text = load_from_file(path).await;
        let result = self.sequencer.complete(ticket, text);
        if result.is_none() {
            log_info(format!("Discarded stale read of {}", path.display()));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblast_core::parse;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_ascii_is_utf8() {
        assert_eq!(detect_encoding(b"a@b.com\nc@d.com"), "utf-8");
    }

    #[test]
    fn test_latin1_decoding() {
        // "José@café.fr" in ISO-8859-1
        let bytes: &[u8] = &[0x4A, 0x6F, 0x73, 0xE9, 0x40, 0x63, 0x61, 0x66, 0xE9, 0x2E, 0x66, 0x72];
        assert_eq!(decode_content(bytes, "iso-8859-1"), "José@café.fr");
        assert_eq!(decode_content(bytes, "windows-1252"), "José@café.fr");
    }

    #[test]
    fn test_latin1_label_uses_whatwg_mapping() {
        assert_eq!(decode_content(&[0xA4], "iso-8859-1"), "\u{a4}");
        assert_eq!(decode_content(&[0xA4], "iso-8859-15"), "€");
    }

    #[test]
    fn test_reader_is_decoded_like_a_file() {
        // "José@café.fr\na@b.com" in ISO-8859-1
        let latin1: &[u8] = b"Jos\xE9@caf\xE9.fr\na@b.com";
        let text = load_from_reader(latin1);
        assert!(text.ends_with("\na@b.com"));
        assert_eq!(parse(&text).total_lines, 2);

        let with_bom: &[u8] = b"\xEF\xBB\xBFa@b.com";
        assert_eq!(load_from_reader(with_bom), "a@b.com");
    }

    #[test]
    fn test_reader_failure_gives_empty_text() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("broken pipe"))
            }
        }
        assert_eq!(load_from_reader(Broken), "");
    }

    #[test]
    fn test_bom_is_stripped() {
        let decoded = decode_bytes(b"\xEF\xBB\xBFa@b.com");
        assert_eq!(decoded.text, "a@b.com");
        assert_eq!(parse(&decoded.text).valid_count, 1);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let text = decode_content(b"a@b.com\n\xFF\xFE", "utf-8");
        assert!(text.starts_with("a@b.com\n"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let file = temp_file(b"a@b.com\n1.2.3.4:c@d.com\na@b.com\n");
        let text = load_from_file(file.path()).await;

        let batch = parse(&text);
        assert_eq!(batch.total_lines, 3);
        assert_eq!(batch.valid_count, 2);
        assert_eq!(batch.duplicate_count, 1);
    }

    #[tokio::test]
    async fn test_missing_file_gives_empty_text() {
        let text = load_from_file(Path::new("/definitely/not/here.csv")).await;
        assert_eq!(text, "");
        assert!(parse(&text).is_empty());
    }

    #[tokio::test]
    async fn test_size_limit() {
        let file = temp_file(b"a@b.com,c@d.com");
        let err = try_load_file(file.path(), Some(4)).await.unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { limit: 4, .. }));

        assert!(try_load_file(file.path(), Some(1024)).await.is_ok());
    }

    #[tokio::test]
    async fn test_loader_applies_latest_read() {
        let file = temp_file(b"x@y.com");
        let loader = RecipientFileLoader::new();
        assert_eq!(loader.load(file.path()).await.as_deref(), Some("x@y.com"));
    }

    #[tokio::test]
    async fn test_loader_discards_overlapped_read() {
        let first = temp_file(b"old@y.com");
        let second = temp_file(b"new@y.com");
        let loader = RecipientFileLoader::new();

        // join! starts both reads before either file is read
        let (older, newer) = tokio::join!(loader.load(first.path()), loader.load(second.path()));

        assert_eq!(older, None);
        assert_eq!(newer.as_deref(), Some("new@y.com"));
    }
}
