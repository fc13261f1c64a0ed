//! Input stream adapter.
//!
//! Wraps a raw buffer as a bounded, randomly addressable character source. Byte
//! buffers are read with a fixed single-byte encoding (Latin-1): every byte is one
//! character, so offsets into the original buffer are character offsets. The adapter
//! trusts the declared encoding and never validates it.

use std::borrow::Cow;
use std::ops::Range;

use crate::{Error, Result};

/// Character encoding declared for an input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Single-byte encoding: byte `b` is the character `U+00bb`.
    Latin1,
    /// Text that was already decoded by the caller.
    Utf8,
}

/// Immutable character source consumed by the lexer.
#[derive(Debug, Clone)]
pub struct InputStream<'src> {
    bytes: &'src [u8],
    text: Cow<'src, str>,
    encoding: Encoding,
}

impl<'src> InputStream<'src> {
    /// Wraps already-decoded text.
    pub fn from_text(text: &'src str) -> Result<Self> {
        reject_nul(text.as_bytes())?;
        Ok(Self {
            bytes: text.as_bytes(),
            text: Cow::Borrowed(text),
            encoding: Encoding::Utf8,
        })
    }

    /// Wraps a byte buffer declared as Latin-1.
    ///
    /// ASCII buffers are borrowed as-is; anything else is decoded byte by byte.
    pub fn from_bytes(bytes: &'src [u8]) -> Result<Self> {
        reject_nul(bytes)?;
        let text = match std::str::from_utf8(bytes) {
            Ok(text) if bytes.is_ascii() => Cow::Borrowed(text),
            _ => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
        };
        Ok(Self {
            bytes,
            text,
            encoding: Encoding::Latin1,
        })
    }

    /// Byte-level entry point where the buffer may be absent.
    pub fn from_raw(bytes: Option<&'src [u8]>) -> Result<Self> {
        match bytes {
            Some(bytes) => Self::from_bytes(bytes),
            None => Err(Error::InvalidInput("input buffer is null".to_string())),
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Length of the original buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decoded text, consumed sequentially by the lexer.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Character at `offset` in the original buffer.
    ///
    /// For UTF-8 input, `offset` must fall on a character boundary.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        match self.encoding {
            Encoding::Latin1 => self.bytes.get(offset).map(|&b| char::from(b)),
            Encoding::Utf8 => self.text.get(offset..)?.chars().next(),
        }
    }

    /// Slice of the decoded text. `None` when out of bounds or not on a char boundary.
    pub fn slice(&self, range: Range<usize>) -> Option<&str> {
        self.text.get(range)
    }
}

fn reject_nul(bytes: &[u8]) -> Result<()> {
    match bytes.iter().position(|&b| b == 0) {
        Some(offset) => Err(Error::InvalidInput(format!(
            "input contains a NUL byte at offset {offset}"
        ))),
        None => Ok(()),
    }
}
