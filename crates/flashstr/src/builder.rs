//! Producer side: laying out objects in the stored format.
//!
//! The builder appends objects one after another, each starting on a 4-byte
//! boundary, and returns the header address of each. References between
//! objects are plain addresses, so referenced objects are written first.

use crate::image::{Image, ImageError};
use crate::object::{Addr, COPY_BIT, HEADER_SIZE, Header, NULL_SENTINEL, POINTER_SIZE, align_up};
use crate::storage::Scalar;
use crate::views::TableRow;

/// Largest image the 31-bit address space can describe.
const MAX_IMAGE_SIZE: usize = COPY_BIT as usize;

/// Image construction error.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("image would grow to {0} bytes (maximum {MAX_IMAGE_SIZE})")]
    ImageTooLarge(usize),
    #[error("object content of {0} bytes does not fit the length field")]
    LengthOverflow(usize),
    #[error("invalid image: {0}")]
    Image(#[from] ImageError),
}

/// Incrementally writes a region image.
#[derive(Clone, Debug)]
pub struct ImageBuilder {
    bytes: Vec<u8>,
}

impl Default for ImageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBuilder {
    /// An image holding only the null sentinel at address 0.
    pub fn new() -> Self {
        Self {
            bytes: NULL_SENTINEL.to_le_bytes().to_vec(),
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.len() <= HEADER_SIZE
    }

    /// A string, followed by a terminator that its length does not count.
    pub fn string(&mut self, text: impl AsRef<[u8]>) -> Result<Addr, BuildError> {
        let text = text.as_ref();
        let mut content = Vec::with_capacity(text.len() + 1);
        content.extend_from_slice(text);
        content.push(0);
        self.push(text.len(), &content)
    }

    /// A raw counted blob.
    pub fn bytes(&mut self, content: &[u8]) -> Result<Addr, BuildError> {
        self.push(content.len(), content)
    }

    pub fn array<T: Scalar>(&mut self, values: &[T]) -> Result<Addr, BuildError> {
        let mut content = Vec::with_capacity(values.len() * T::SIZE);
        for value in values {
            value.write_le(&mut content);
        }
        self.push(content.len(), &content)
    }

    pub fn table<T: Scalar, const N: usize>(&mut self, rows: &[[T; N]]) -> Result<Addr, BuildError> {
        let rows: Vec<TableRow<T, N>> = rows.iter().copied().map(TableRow::new).collect();
        self.array(&rows)
    }

    /// References to objects already written; `None` is stored as null.
    pub fn vector(&mut self, entries: &[Option<Addr>]) -> Result<Addr, BuildError> {
        let mut content = Vec::with_capacity(entries.len() * POINTER_SIZE);
        for entry in entries {
            content.extend_from_slice(&reference(*entry).to_le_bytes());
        }
        self.push(content.len(), &content)
    }

    /// Packed scalar-keyed entries.
    pub fn map<K: Scalar>(&mut self, entries: &[(K, Option<Addr>)]) -> Result<Addr, BuildError> {
        let mut content = Vec::with_capacity(entries.len() * (K::SIZE + POINTER_SIZE));
        for (key, value) in entries {
            key.write_le(&mut content);
            content.extend_from_slice(&reference(*value).to_le_bytes());
        }
        self.push(content.len(), &content)
    }

    /// Entries keyed by strings already written.
    pub fn string_map(&mut self, entries: &[(Addr, Option<Addr>)]) -> Result<Addr, BuildError> {
        let mut content = Vec::with_capacity(entries.len() * POINTER_SIZE * 2);
        for (key, value) in entries {
            content.extend_from_slice(&key.0.to_le_bytes());
            content.extend_from_slice(&reference(*value).to_le_bytes());
        }
        self.push(content.len(), &content)
    }

    /// A copy header naming `target`. A copy of a copy names the original.
    pub fn alias(&mut self, target: Addr) -> Result<Addr, BuildError> {
        let target = match self.header_at(target) {
            Some(Header::Copy(original)) => original,
            _ => target,
        };
        self.push_header(Header::Copy(target))
    }

    /// A stored null sentinel.
    pub fn null_object(&mut self) -> Result<Addr, BuildError> {
        self.push_header(Header::Null)
    }

    /// The raw image bytes, unvalidated.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Validate and load the finished image.
    pub fn finish(self) -> Result<Image, BuildError> {
        tracing::debug!(size = self.bytes.len(), "finished image");
        Ok(Image::from_bytes(self.bytes)?)
    }

    fn header_at(&self, addr: Addr) -> Option<Header> {
        let raw = self.bytes.get(addr.get()..addr.content())?;
        let word = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
        Some(Header::from_word(word))
    }

    fn push_header(&mut self, header: Header) -> Result<Addr, BuildError> {
        let addr = self.next_addr(HEADER_SIZE)?;
        self.bytes.extend_from_slice(&header.to_word().to_le_bytes());
        Ok(addr)
    }

    /// Append a real object. `content` may extend past `length` (string
    /// terminators) and is padded to the alignment.
    fn push(&mut self, length: usize, content: &[u8]) -> Result<Addr, BuildError> {
        if length >= COPY_BIT as usize {
            return Err(BuildError::LengthOverflow(length));
        }
        let stored = align_up(content.len());
        let addr = self.next_addr(HEADER_SIZE + stored)?;

        self.bytes.extend_from_slice(&Header::Length(length as u32).to_word().to_le_bytes());
        self.bytes.extend_from_slice(content);
        self.bytes.resize(addr.content() + stored, 0);
        Ok(addr)
    }

    fn next_addr(&self, appended: usize) -> Result<Addr, BuildError> {
        let end = self.bytes.len() + appended;
        if end > MAX_IMAGE_SIZE {
            return Err(BuildError::ImageTooLarge(end));
        }
        Ok(Addr(self.bytes.len() as u32))
    }
}

fn reference(target: Option<Addr>) -> u32 {
    target.map_or(0, |addr| addr.0)
}
