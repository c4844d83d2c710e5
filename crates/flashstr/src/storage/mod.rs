//! Read access to the region holding counted objects.
//!
//! The region is slower than working memory and may not support unaligned
//! loads, so every access goes through [`Flash`]: bulk copies via a cached or
//! a direct path, plus scalar loads that a backend can specialise.

mod aligned_vec;
pub mod scalar;

#[cfg(test)]
mod aligned_vec_tests;
#[cfg(test)]
mod scalar_tests;

pub use aligned_vec::AlignedVec;
pub use scalar::{INLINE_LIMIT, Scalar, read_value};

use crate::object::NULL_SENTINEL;

/// Backing storage for views.
///
/// Implementations only move bytes; they never interpret the object layout.
/// Reads past the end of the region copy nothing for the missing part, so a
/// damaged image degrades to zeroes instead of faulting.
pub trait Flash: Sync {
    /// Size of the region in bytes.
    fn size(&self) -> usize;

    /// Copy bytes starting at `offset` through the normal, possibly cached,
    /// access path. Returns the number of bytes copied.
    fn cached_read(&self, offset: usize, dst: &mut [u8]) -> usize;

    /// Same contract as [`cached_read`](Self::cached_read), bypassing any
    /// cache. Intended for large or rarely used content.
    fn direct_read(&self, offset: usize, dst: &mut [u8]) -> usize;

    fn read_u8(&self, addr: usize) -> u8 {
        let mut buf = [0u8; 1];
        self.cached_read(addr, &mut buf);
        buf[0]
    }

    /// Halfword load. Must tolerate odd addresses.
    fn read_u16(&self, addr: usize) -> u16 {
        let mut buf = [0u8; 2];
        self.cached_read(addr, &mut buf);
        u16::from_le_bytes(buf)
    }

    /// Word load. Callers only use this for 4-aligned addresses, but the
    /// default works for any address.
    fn read_u32(&self, addr: usize) -> u32 {
        let mut buf = [0u8; 4];
        self.cached_read(addr, &mut buf);
        u32::from_le_bytes(buf)
    }
}

/// Copy from `src[offset..]` into `dst`, stopping at the end of either.
pub(crate) fn copy_clamped(src: &[u8], offset: usize, dst: &mut [u8]) -> usize {
    let Some(available) = src.len().checked_sub(offset) else {
        return 0;
    };
    let count = dst.len().min(available);
    dst[..count].copy_from_slice(&src[offset..offset + count]);
    count
}

static NULL_WORD: [u8; 4] = NULL_SENTINEL.to_le_bytes();

/// Region holding nothing but the null sentinel word.
///
/// Null views bind here, so `empty()` needs no image and the data address of
/// a null view still points at a readable header.
#[derive(Debug)]
pub struct NullFlash;

impl Flash for NullFlash {
    fn size(&self) -> usize {
        NULL_WORD.len()
    }

    fn cached_read(&self, offset: usize, dst: &mut [u8]) -> usize {
        copy_clamped(&NULL_WORD, offset, dst)
    }

    fn direct_read(&self, offset: usize, dst: &mut [u8]) -> usize {
        copy_clamped(&NULL_WORD, offset, dst)
    }
}

static NULL_FLASH: NullFlash = NullFlash;

/// The process-wide null region.
pub fn null_flash() -> &'static dyn Flash {
    &NULL_FLASH
}
