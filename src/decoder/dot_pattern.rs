use crate::{
    cell::{BrailleCell, BrailleDocument},
    decoder::{CR, DOT_PATTERN_HEADER_LEN, DecodeStats, FILL, LF, LINE_END, PAGE_END, SKIP},
};

/// Byte value of the blank cell; the following 63 bytes are the other cells
const CELL_OFFSET: u8 = 0xa0;

/// Decoder for files that store one dot pattern per byte.
#[derive(Debug, Clone)]
pub struct DotPatternDecoder {
    header_len: usize,
}

impl Default for DotPatternDecoder {
    fn default() -> Self {
        Self::new(DOT_PATTERN_HEADER_LEN)
    }
}

impl DotPatternDecoder {
    pub fn new(header_len: usize) -> Self {
        Self { header_len }
    }

    /// Decode `bytes`. Never fails: bytes that are neither control codes
    /// nor cells are dropped and counted in [`DecodeStats::dropped`].
    pub fn decode(&self, bytes: &[u8]) -> (BrailleDocument, DecodeStats) {
        let header = self.header_len.min(bytes.len());
        let mut data = bytes[header..].to_vec();
        let mut stats = DecodeStats {
            header,
            ..Default::default()
        };

        normalize_line_ends(&mut data);
        blank_before_page_ends(&mut data);

        let mut document = BrailleDocument::new();
        for byte in data {
            match byte {
                CR | LF => {
                    document.push_line_break(if byte == CR { '\r' } else { '\n' });
                    stats.line_breaks += 1;
                }
                PAGE_END | LINE_END => {
                    document.push_crlf();
                    stats.line_breaks += 2;
                }
                SKIP | FILL => stats.skipped += 1,
                _ => match cell(byte) {
                    Some(cell) => {
                        document.push_cell(cell);
                        stats.cells += 1;
                    }
                    None => stats.dropped += 1,
                },
            }
        }
        (document, stats)
    }
}

/// Decode a dot-pattern file with the standard 1024 byte header.
pub fn decode_dot_pattern(bytes: &[u8]) -> BrailleDocument {
    DotPatternDecoder::default().decode(bytes).0
}

fn cell(byte: u8) -> Option<BrailleCell> {
    byte.checked_sub(CELL_OFFSET)
        .and_then(BrailleCell::from_bits)
}

/// Rewrite every `CR LINE_END` pair to `CR LF`, scanning left to right
/// without overlap.
fn normalize_line_ends(data: &mut [u8]) {
    let mut i = 0;
    while i + 1 < data.len() {
        if data[i] == CR && data[i + 1] == LINE_END {
            data[i + 1] = LF;
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// The two bytes in front of a page end carry page bookkeeping, not text.
fn blank_before_page_ends(data: &mut [u8]) {
    for i in 2..data.len() {
        if data[i] == PAGE_END {
            data[i - 2] = SKIP;
            data[i - 1] = SKIP;
        }
    }
}
