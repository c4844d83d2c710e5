//! Word-aligned working copy of a region image.
//!
//! Headers and pointers sit on 4-byte boundaries inside an image, so the
//! buffer holding it must itself start on one. A `Vec<u8>` makes no such
//! promise.

use std::fmt;
use std::io;
use std::ops::Deref;
use std::path::Path;

use crate::object::ALIGN;

#[repr(C, align(4))]
#[derive(Clone, Copy, Default)]
struct Word([u8; ALIGN]);

/// Image bytes stored as whole words, zero padded up to the next boundary.
#[derive(Clone)]
pub struct AlignedVec {
    words: Vec<Word>,
    len: usize,
}

impl AlignedVec {
    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        let words = bytes
            .chunks(ALIGN)
            .map(|chunk| {
                let mut word = Word::default();
                word.0[..chunk.len()].copy_from_slice(chunk);
                word
            })
            .collect();
        Self {
            words,
            len: bytes.len(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        std::fs::read(path).map(|bytes| Self::copy_from_slice(&bytes))
    }

    /// Number of image bytes, excluding padding.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes of word `index`. The last word carries zero padding.
    pub fn word_bytes(&self, index: usize) -> Option<[u8; ALIGN]> {
        self.words.get(index).map(|word| word.0)
    }

    /// Word `index` decoded little-endian.
    pub fn word(&self, index: usize) -> Option<u32> {
        self.word_bytes(index).map(u32::from_le_bytes)
    }

    /// Copy from byte `offset` into `dst` one word at a time, stopping at
    /// `len`. Returns the number of bytes copied.
    pub fn copy_words(&self, offset: usize, dst: &mut [u8]) -> usize {
        let end = self.len.min(offset.saturating_add(dst.len()));
        let mut pos = offset;
        while pos < end {
            let Some(bytes) = self.word_bytes(pos / ALIGN) else {
                break;
            };
            let start = pos % ALIGN;
            let count = (ALIGN - start).min(end - pos);
            let at = pos - offset;
            dst[at..at + count].copy_from_slice(&bytes[start..start + count]);
            pos += count;
        }
        pos.saturating_sub(offset)
    }

    pub fn as_slice(&self) -> &[u8] {
        debug_assert!(self.len <= self.words.len() * ALIGN);
        if self.words.is_empty() {
            return &[];
        }
        // SAFETY: `Word` is `repr(C)` over `[u8; 4]`, so the words form one
        // contiguous run of initialized bytes at least `len` long.
        unsafe { std::slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), self.len) }
    }
}

impl Deref for AlignedVec {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for AlignedVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedVec")
            .field("len", &self.len)
            .field("words", &self.words.len())
            .finish()
    }
}
