//! Decoding file contents with an ordered list of candidate encodings.

use std::path::Path;

use encoding_rs::{Encoding, GBK};
use log::debug;

use crate::error::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Text read from disk along with the encoding that decoded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
}

pub struct TextLoader<'a> {
    encodings: &'a [&'static Encoding],
}

impl<'a> TextLoader<'a> {
    pub fn new(encodings: &'a [&'static Encoding]) -> Self {
        Self { encodings }
    }

    /// Reads the whole file at `path` and decodes it.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Decoded> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|source| Error::FileRead { path: path.to_path_buf(), source })?;
        self.decode(path, &bytes)
    }

    /// Tries each candidate encoding in order; the first one that decodes the
    /// bytes without any malformed sequence wins. A leading byte-order mark is
    /// dropped from the result.
    pub fn decode(&self, path: &Path, bytes: &[u8]) -> Result<Decoded> {
        for &encoding in self.encodings {
            let decoded = encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .filter(|_| is_well_formed(encoding, bytes));
            match decoded {
                Some(text) => {
                    debug!("Decoded '{}' as {}", path.display(), encoding.name());
                    let text = match text.strip_prefix(BYTE_ORDER_MARK) {
                        Some(stripped) => stripped.to_string(),
                        None => text.into_owned(),
                    };
                    return Ok(Decoded { text, encoding });
                }
                None => debug!("'{}' is not valid {}", path.display(), encoding.name()),
            }
        }

        Err(Error::Decode {
            path: path.to_path_buf(),
            tried: self.encodings.iter().map(|e| e.name().to_string()).collect(),
        })
    }
}

/// `encoding_rs` decodes GBK with the GB18030 decoder, which also takes the
/// four-byte form and a lone `0x80`. Plain GBK only has single ASCII bytes and
/// two-byte pairs, so anything else is rejected here.
fn is_well_formed(encoding: &'static Encoding, bytes: &[u8]) -> bool {
    if encoding != GBK {
        return true;
    }
    let mut iter = bytes.iter().copied();
    while let Some(byte) = iter.next() {
        match byte {
            0x00..=0x7f => {}
            0x81..=0xfe => match iter.next() {
                Some(0x40..=0x7e | 0x80..=0xfe) => {}
                _ => return false,
            },
            _ => return false,
        }
    }
    true
}
