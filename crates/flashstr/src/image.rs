//! Owned region images.
//!
//! An [`Image`] is a complete region held in working memory, for tools and
//! tests. It validates its own framing when loaded and every object address
//! when binding a view, so views bound through it never see a malformed
//! header.

use std::io;
use std::path::Path;

use crate::object::{ALIGN, Addr, HEADER_SIZE, Header, NULL_SENTINEL, View};
use crate::storage::{AlignedVec, Flash, copy_clamped};

/// Image load or bind error.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image too small: {0} bytes (minimum {HEADER_SIZE})")]
    TooSmall(usize),
    #[error("image size {0} is not a multiple of {ALIGN}")]
    Unaligned(usize),
    #[error("missing null sentinel at address 0: found {0:#010x}")]
    MissingNullSentinel(u32),
    #[error("object address {0} is not {ALIGN}-byte aligned")]
    MisalignedAddress(Addr),
    #[error("object at {addr} extends to {end:#x}, past the image end {size:#x}")]
    OutOfBounds { addr: Addr, end: usize, size: usize },
    #[error("copy at {addr} refers to another copy at {target}")]
    CopyOfCopy { addr: Addr, target: Addr },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A region image in aligned working memory.
#[derive(Clone, Debug)]
pub struct Image {
    storage: AlignedVec,
}

impl Image {
    /// Load an image from owned bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ImageError> {
        Self::from_storage(AlignedVec::copy_from_slice(&bytes))
    }

    /// Load an image from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let storage = AlignedVec::from_file(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "read image file");
        Self::from_storage(storage)
    }

    fn from_storage(storage: AlignedVec) -> Result<Self, ImageError> {
        if storage.len() < HEADER_SIZE {
            return Err(ImageError::TooSmall(storage.len()));
        }
        if !storage.len().is_multiple_of(ALIGN) {
            return Err(ImageError::Unaligned(storage.len()));
        }
        let first = storage.word(0).unwrap_or_default();
        if first != NULL_SENTINEL {
            return Err(ImageError::MissingNullSentinel(first));
        }

        tracing::debug!(size = storage.len(), "loaded image");
        Ok(Self { storage })
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Decode the header at `addr` after checking that it lies in the image.
    pub fn header(&self, addr: Addr) -> Result<Header, ImageError> {
        if !addr.is_aligned() {
            return Err(ImageError::MisalignedAddress(addr));
        }
        self.check_bounds(addr, addr.content())?;
        Ok(Header::read(self, addr))
    }

    /// Bind a view to the object at `addr`.
    ///
    /// Checks alignment and bounds of the header, its content, and the
    /// target of a copy.
    pub fn bind<'a, V: View<'a>>(&'a self, addr: Addr) -> Result<V, ImageError> {
        self.validate(addr).inspect_err(|err| {
            tracing::warn!(%addr, %err, "rejected object binding");
        })?;
        Ok(V::at(self, addr))
    }

    fn validate(&self, addr: Addr) -> Result<(), ImageError> {
        match self.header(addr)? {
            Header::Null => Ok(()),
            Header::Length(len) => self.check_bounds(addr, addr.content() + len as usize),
            Header::Copy(target) => match self.header(target)? {
                Header::Length(len) => self.check_bounds(target, target.content() + len as usize),
                Header::Copy(_) | Header::Null => Err(ImageError::CopyOfCopy { addr, target }),
            },
        }
    }

    fn check_bounds(&self, addr: Addr, end: usize) -> Result<(), ImageError> {
        if end > self.storage.len() {
            return Err(ImageError::OutOfBounds {
                addr,
                end,
                size: self.storage.len(),
            });
        }
        Ok(())
    }
}

impl Flash for Image {
    fn size(&self) -> usize {
        self.storage.len()
    }

    fn cached_read(&self, offset: usize, dst: &mut [u8]) -> usize {
        copy_clamped(&self.storage, offset, dst)
    }

    /// Copies whole words out of storage, the way an uncached bus would
    /// deliver them.
    fn direct_read(&self, offset: usize, dst: &mut [u8]) -> usize {
        self.storage.copy_words(offset, dst)
    }

    fn read_u32(&self, addr: usize) -> u32 {
        if addr.is_multiple_of(ALIGN) {
            return self.storage.word(addr / ALIGN).unwrap_or(0);
        }
        let mut buf = [0u8; 4];
        self.cached_read(addr, &mut buf);
        u32::from_le_bytes(buf)
    }
}
