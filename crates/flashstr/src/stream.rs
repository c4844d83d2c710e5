//! Sequential access to object content through `std::io`.

use std::io::{self, Read, Seek, SeekFrom};

use crate::object::{ObjectBase, View};

/// Seekable reader over the content of any object.
///
/// Reads bypass the cache unless the stream was made with
/// [`cached`](Self::cached), since streamed content is usually large and read
/// once.
#[derive(Debug)]
pub struct FlashStream<'a> {
    object: ObjectBase<'a>,
    position: usize,
    direct: bool,
}

impl<'a> FlashStream<'a> {
    pub fn new<V: View<'a>>(view: &V) -> Self {
        Self {
            object: view.base().alias(),
            position: 0,
            direct: true,
        }
    }

    /// Read through the cached path instead.
    pub fn cached(mut self) -> Self {
        self.direct = false;
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Content length in bytes.
    pub fn length(&self) -> usize {
        self.object.length()
    }

    /// Bytes left to read.
    pub fn available(&self) -> usize {
        self.length().saturating_sub(self.position)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.length()
    }
}

impl Read for FlashStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = if self.direct {
            self.object.read_flash(self.position, buf)
        } else {
            self.object.read(self.position, buf)
        };
        self.position += count;
        Ok(count)
    }
}

impl Seek for FlashStream<'_> {
    /// Positions outside `0..=length()` are rejected and leave the stream
    /// where it was.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let length = self.length() as u64;
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::Current(delta) => (self.position as u64).checked_add_signed(delta),
            SeekFrom::End(delta) => length.checked_add_signed(delta),
        };
        match target {
            Some(position) if position <= length => {
                self.position = position as usize;
                Ok(position)
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("seek outside object content (length {length})"),
            )),
        }
    }
}
