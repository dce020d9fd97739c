// ============================================================
// TEXT DECODER
// ============================================================
// Decode uploaded bytes with BOM sniffing and legacy fallback

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

use crate::domain::error::{IngestError, Result};

/// Byte-to-text decoder for uploaded content.
///
/// Exported files arrive in whatever encoding the producing tool used;
/// a byte order mark wins when present, plain UTF-8 is tried next, and
/// in lenient mode anything else is read as Windows-1252 (which accepts
/// every byte sequence).
#[derive(Debug, Clone)]
pub struct TextDecoder {
    lenient: bool,
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self { lenient: true }
    }
}

impl TextDecoder {
    /// Create a decoder; `lenient` enables the Windows-1252 fallback
    pub fn new(lenient: bool) -> Self {
        Self { lenient }
    }

    /// Decode input bytes into text
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
            return self.decode_with(encoding, &bytes[bom_length..]);
        }

        match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
            Some(text) => Ok(text.into_owned()),
            None if self.lenient => {
                warn!("input is not valid UTF-8, falling back to Windows-1252");
                let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
                Ok(text.into_owned())
            }
            None => Err(IngestError::MalformedLine(
                "input bytes are not valid UTF-8".to_string(),
            )),
        }
    }

    fn decode_with(&self, encoding: &'static Encoding, bytes: &[u8]) -> Result<String> {
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);

        if had_errors {
            if !self.lenient {
                return Err(IngestError::MalformedLine(format!(
                    "input bytes are not valid {}",
                    encoding.name()
                )));
            }
            warn!(
                encoding = encoding.name(),
                "decoded with replacement characters"
            );
        } else {
            debug!(encoding = encoding.name(), "decoded via byte order mark");
        }

        Ok(text.into_owned())
    }
}
