//! Whole books: volume files in, one text and a title out
//!
//! A book is one or more volume files. Their braille is decoded per volume
//! and concatenated in order; kana output is transcoded in a single pass
//! over the whole book so that a quote or annotation spanning two volumes is
//! still recognised.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    cell::BrailleDocument,
    decoder::{DecodeError, SourceFormat},
    kana::KanaStyle,
    normalize::{Normalization, PostProcessor},
    tables::Tables,
    transcoder::{TranscodeOptions, Transcoder},
};

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("Could not read volume: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not decode volume: {0}")]
    Decode(#[from] DecodeError),
    #[error("Unsupported file type: {0:?}")]
    UnsupportedFormat(PathBuf),
    #[error("No volumes given")]
    NoVolumes,
}

/// What a conversion produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Transcoded and normalized text
    #[default]
    Kana,
    /// The decoded braille with CRLF line ends turned into LF
    Braille,
    /// The decoded braille as it is
    Unconverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub output: OutputFormat,
    pub transcode: TranscodeOptions,
    /// Applied after the normalizers
    pub kana: KanaStyle,
}

/// A converted book
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub text: String,
}

/// The title of a book is the file name of its first volume without the
/// extension.
pub fn book_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Turn decoded braille into the requested output.
pub fn render(document: &BrailleDocument, options: &ConvertOptions, tables: &Tables) -> String {
    match options.output {
        OutputFormat::Kana => {
            let transcoder = Transcoder::new(tables, options.transcode);
            let text = transcoder.transcode_document(document);
            options.kana.apply(&PostProcessor::default().apply(&text))
        }
        OutputFormat::Braille => Normalization::CrlfToLf.apply(document.as_str()),
        OutputFormat::Unconverted => document.as_str().to_string(),
    }
}

/// Decode and render the bytes of a single volume.
pub fn convert_bytes(
    bytes: &[u8],
    format: SourceFormat,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    let (document, _) = format.decode(bytes)?;
    Ok(render(&document, options, Tables::standard()))
}

/// Read, decode and concatenate the volumes of a book, then render it.
pub fn convert_volumes(volumes: &[PathBuf], options: &ConvertOptions) -> Result<Book, ConvertError> {
    let first = volumes.first().ok_or(ConvertError::NoVolumes)?;
    let mut document = BrailleDocument::new();
    for volume in volumes {
        document.append(&read_volume(volume)?);
    }
    info!("converting {} volume(s) to {:?}", volumes.len(), options.output);
    Ok(Book {
        title: book_title(first),
        text: render(&document, options, Tables::standard()),
    })
}

/// Read and decode one volume file, choosing the decoder by extension.
pub fn read_volume(path: &Path) -> Result<BrailleDocument, ConvertError> {
    let Some(format) = SourceFormat::from_path(path) else {
        log::warn!("{} has no braille file extension", path.display());
        return Err(ConvertError::UnsupportedFormat(path.to_path_buf()));
    };
    info!("reading {} as {format}", path.display());
    let bytes = fs::read(path)?;
    let (document, _) = format.decode(&bytes)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{DOT_PATTERN_HEADER_LEN, FLAT_HEADER_LEN};
    use tempfile::TempDir;

    fn dot_pattern(body: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0; DOT_PATTERN_HEADER_LEN];
        bytes.extend_from_slice(body);
        bytes
    }

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn period_fallback_end_to_end() {
        // ⠲ is 0xa0 + 0x32
        let text = convert_bytes(&dot_pattern(&[0xd2]), SourceFormat::DotPattern, &Default::default());
        assert_eq!(text.unwrap(), "。");
    }

    #[test]
    fn number_end_to_end() {
        // ⠼ ⠁ ⠃ ⠉
        let bytes = dot_pattern(&[0xdc, 0xa1, 0xa3, 0xa9]);
        let text = convert_bytes(&bytes, SourceFormat::DotPattern, &Default::default()).unwrap();
        assert_eq!(text, "１２３");
        let options = ConvertOptions {
            transcode: TranscodeOptions::default().with_digits(crate::transcoder::Width::Half),
            ..Default::default()
        };
        let text = convert_bytes(&bytes, SourceFormat::DotPattern, &options).unwrap();
        assert_eq!(text, "123");
    }

    #[test]
    fn line_end_only() {
        let bytes = dot_pattern(&[0x0d, 0xfe, 0, 0, 0]);
        let options = ConvertOptions {
            output: OutputFormat::Unconverted,
            ..Default::default()
        };
        let text = convert_bytes(&bytes, SourceFormat::DotPattern, &options).unwrap();
        assert_eq!(text, "\r\n");
    }

    #[test]
    fn output_formats() {
        // ⠡ CR LF LF ⠡
        let bytes = dot_pattern(&[0xc1, 0x0d, 0x0a, 0x0a, 0xc1]);
        let convert = |output| {
            let options = ConvertOptions {
                output,
                ..Default::default()
            };
            convert_bytes(&bytes, SourceFormat::DotPattern, &options).unwrap()
        };
        assert_eq!(convert(OutputFormat::Unconverted), "⠡\r\n\n⠡");
        assert_eq!(convert(OutputFormat::Braille), "⠡\n\n⠡");
        assert_eq!(convert(OutputFormat::Kana), "カ\n　　　\nカ");
    }

    #[test]
    fn hiragana_after_normalization() {
        // ⠡ ⠂ ⠂ → カッッ → カ……
        let options = ConvertOptions {
            kana: KanaStyle::Hiragana,
            ..Default::default()
        };
        let text = convert_bytes(&dot_pattern(&[0xc1, 0xa2, 0xa2]), SourceFormat::DotPattern, &options);
        assert_eq!(text.unwrap(), "か……");
    }

    #[test]
    fn flat_errors_propagate() {
        let mut bytes = vec![0; FLAT_HEADER_LEN];
        bytes.push(0x80);
        let result = convert_bytes(&bytes, SourceFormat::Flat, &Default::default());
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }

    #[test]
    fn titles() {
        assert_eq!(book_title(Path::new("books/N0480682.BES")), "N0480682");
        assert_eq!(book_title(Path::new("vol.1.bse")), "vol.1");
        assert_eq!(book_title(Path::new("")), "");
    }

    #[test]
    fn volumes_are_concatenated() {
        let dir = TempDir::new().unwrap();
        // a quote opened in the first volume and closed in the second
        let first = write(&dir, "book-001.BES", &dot_pattern(&[0xc6, 0xa1]));
        let second = write(&dir, "book-002.bes", &dot_pattern(&[0xd4]));
        let book = convert_volumes(&[first, second], &Default::default()).unwrap();
        assert_eq!(book.title, "book-001");
        assert_eq!(book.text, "￣a￣");
    }

    #[test]
    fn volume_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(convert_volumes(&[], &Default::default()), Err(ConvertError::NoVolumes)));
        let text = write(&dir, "notes.txt", b"hello");
        assert!(matches!(
            convert_volumes(&[text], &Default::default()),
            Err(ConvertError::UnsupportedFormat(_))
        ));
        let missing = dir.path().join("missing.BES");
        assert!(matches!(
            convert_volumes(&[missing], &Default::default()),
            Err(ConvertError::Io(_))
        ));
    }
}
