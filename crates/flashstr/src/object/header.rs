//! Header words and handle bindings.

use std::fmt;

use super::{ALIGN, COPY_BIT, HEADER_SIZE, NULL_SENTINEL};
use crate::storage::Flash;

/// Byte offset of an object header inside a region.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Addr(pub u32);

impl Addr {
    /// Address of the null sentinel.
    pub const NULL: Self = Self(0);

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Address of the content following the header.
    #[inline]
    pub fn content(self) -> usize {
        self.get().saturating_add(HEADER_SIZE)
    }

    #[inline]
    pub fn is_aligned(self) -> bool {
        self.get().is_multiple_of(ALIGN)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Decoded header word.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Header {
    /// The null sentinel.
    Null,
    /// A copy of the object at the given address.
    Copy(Addr),
    /// A real object with this many content bytes.
    Length(u32),
}

impl Header {
    pub fn from_word(word: u32) -> Self {
        if word == NULL_SENTINEL {
            Header::Null
        } else if word & COPY_BIT != 0 {
            Header::Copy(Addr(word & !COPY_BIT))
        } else {
            Header::Length(word)
        }
    }

    /// Encode for storage. Lengths must stay below [`COPY_BIT`].
    pub fn to_word(self) -> u32 {
        match self {
            Header::Null => NULL_SENTINEL,
            Header::Copy(target) => COPY_BIT | target.0,
            Header::Length(len) => {
                debug_assert!(len & COPY_BIT == 0, "length {len:#x} overlaps the copy bit");
                len & !COPY_BIT
            }
        }
    }

    /// Load the header stored at `addr`.
    #[inline]
    pub fn read(flash: &dyn Flash, addr: Addr) -> Self {
        Self::from_word(flash.read_u32(addr.get()))
    }

    /// Content length; zero for anything but a real object.
    #[inline]
    pub fn length(self) -> u32 {
        match self {
            Header::Length(len) => len,
            Header::Null | Header::Copy(_) => 0,
        }
    }
}

/// What a view handle is bound to.
///
/// Copies always name a real object: resolution is a single hop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Binding {
    #[default]
    Null,
    Real(Addr),
    Copy(Addr),
}

impl Binding {
    /// Header address of the backing object.
    #[inline]
    pub fn target(self) -> Addr {
        match self {
            Binding::Null => Addr::NULL,
            Binding::Real(addr) | Binding::Copy(addr) => addr,
        }
    }

    #[inline]
    pub fn is_null(self) -> bool {
        matches!(self, Binding::Null)
    }

    #[inline]
    pub fn is_copy(self) -> bool {
        matches!(self, Binding::Copy(_))
    }
}
