//! Binary braille editor files to Unicode braille
//!
//! Two on-disk formats are understood:
//! * [`DotPatternDecoder`]: each data byte is a dot pattern offset by 0xA0
//!   (`.BES`, `.BET` and relatives). Unknown bytes are dropped silently and
//!   only counted in [`DecodeStats`].
//! * [`FlatDecoder`]: each data byte is a NABCC character (`.BSE`). An
//!   unknown byte fails the whole file with [`DecodeError::UnmappedByte`].

use std::path::Path;

use log::warn;

use crate::cell::BrailleDocument;

mod dot_pattern;
mod flat;

pub use dot_pattern::{DotPatternDecoder, decode_dot_pattern};
pub use flat::{FlatDecoder, decode_flat};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("Byte {byte:#04x} at offset {offset} has no braille glyph")]
    UnmappedByte { offset: usize, byte: u8 },
}

/// Header length skipped by the dot-pattern decoder
pub const DOT_PATTERN_HEADER_LEN: usize = 1024;
/// Header length skipped by the flat decoder
pub const FLAT_HEADER_LEN: usize = 512;

/// Line feed
pub const LF: u8 = 0x0a;
/// Carriage return
pub const CR: u8 = 0x0d;
/// Bytes blanked out in front of a [`PAGE_END`]
pub const SKIP: u8 = 0x0c;
/// End of page, volume or paragraph; emitted as CRLF
pub const PAGE_END: u8 = 0xfd;
/// End of line; emitted as CRLF
pub const LINE_END: u8 = 0xfe;
/// Filler byte without meaning
pub const FILL: u8 = 0xff;

/// Counters collected while decoding one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Bytes skipped as header
    pub header: usize,
    /// Cells emitted
    pub cells: usize,
    /// Line break characters emitted (CRLF counts as two)
    pub line_breaks: usize,
    /// Skip and fill bytes
    pub skipped: usize,
    /// Bytes that were neither cells nor control codes
    pub dropped: usize,
}

impl DecodeStats {
    pub(crate) fn report(&self, format: SourceFormat) {
        log::debug!(
            "{format}: header {} bytes, {} cells, {} line breaks, {} skipped",
            self.header,
            self.cells,
            self.line_breaks,
            self.skipped
        );
        if self.dropped > 0 {
            warn!("{format}: dropped {} unrecognised bytes", self.dropped);
        }
    }
}

/// The binary layout of a braille file, chosen by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    DotPattern,
    Flat,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<SourceFormat> {
        match extension.to_ascii_uppercase().as_str() {
            "BES" | "BET" | "BMT" | "NAB" | "BRL" => Some(SourceFormat::DotPattern),
            "BSE" => Some(SourceFormat::Flat),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<SourceFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(SourceFormat::from_extension)
    }

    /// Decode `bytes` with the decoder for this format.
    pub fn decode(&self, bytes: &[u8]) -> Result<(BrailleDocument, DecodeStats), DecodeError> {
        let decoded = match self {
            SourceFormat::DotPattern => Ok(DotPatternDecoder::default().decode(bytes)),
            SourceFormat::Flat => FlatDecoder::default().decode(bytes),
        };
        if let Ok((_, stats)) = &decoded {
            stats.report(*self);
        }
        decoded
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::DotPattern => write!(f, "dot pattern"),
            SourceFormat::Flat => write!(f, "flat"),
        }
    }
}
