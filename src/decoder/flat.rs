use crate::{
    cell::{BrailleCell, BrailleDocument},
    decoder::{CR, DecodeError, DecodeStats, FILL, FLAT_HEADER_LEN, LF, LINE_END, PAGE_END},
    tables::nabcc,
};

/// Decoder for files that store one NABCC character per byte.
#[derive(Debug, Clone)]
pub struct FlatDecoder {
    header_len: usize,
}

impl Default for FlatDecoder {
    fn default() -> Self {
        Self::new(FLAT_HEADER_LEN)
    }
}

impl FlatDecoder {
    pub fn new(header_len: usize) -> Self {
        Self { header_len }
    }

    /// Decode `bytes`, failing on the first byte without a glyph.
    pub fn decode(&self, bytes: &[u8]) -> Result<(BrailleDocument, DecodeStats), DecodeError> {
        let header = self.header_len.min(bytes.len());
        let mut stats = DecodeStats {
            header,
            ..Default::default()
        };
        let mut document = BrailleDocument::new();
        for (offset, byte) in bytes.iter().copied().enumerate().skip(header) {
            match byte {
                PAGE_END | LINE_END | LF => {
                    document.push_crlf();
                    stats.line_breaks += 2;
                }
                CR | FILL => stats.skipped += 1,
                _ => {
                    let cell = nabcc::glyph(byte)
                        .and_then(BrailleCell::from_char)
                        .ok_or(DecodeError::UnmappedByte { offset, byte })?;
                    document.push_cell(cell);
                    stats.cells += 1;
                }
            }
        }
        Ok((document, stats))
    }
}

/// Decode a flat file with the standard 512 byte header.
pub fn decode_flat(bytes: &[u8]) -> Result<BrailleDocument, DecodeError> {
    FlatDecoder::default().decode(bytes).map(|(document, _)| document)
}
