//! Japanese braille books to text
//!
//! Braille editor files (`.BES`, `.BSE` and relatives) are decoded to Unicode
//! braille by the [`decoder`], transcoded to katakana by the [`transcoder`]
//! and cleaned up by the [`normalize`] steps. [`book`] ties the stages
//! together for whole files.

pub mod book;
pub mod cell;
pub mod check_yaml;
pub mod decoder;
pub mod kana;
pub mod normalize;
pub mod tables;
pub mod transcoder;
pub mod yaml;

pub use book::{Book, ConvertError, ConvertOptions, OutputFormat, convert_volumes};
pub use cell::BrailleDocument;
pub use transcoder::{TranscodeOptions, Transcoder};

/// Transcode Unicode braille to normalized katakana with the standard
/// tables.
pub fn translate(braille: &str) -> String {
    let text = Transcoder::default().transcode(braille);
    normalize::PostProcessor::default().apply(&text)
}

#[cfg(test)]
mod tests {
    use crate::translate;

    #[test]
    fn it_works() {
        assert_eq!(translate("⠐⠡⠂⠂⠪⠒\r\n\r\n⠼⠁"), "ガ……コー\n　　　\n１");
    }
}
