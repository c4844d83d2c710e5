//! Untyped object handle.

use std::fmt;

use super::{Addr, Binding, Header, align_up};
use crate::storage::{Flash, null_flash};

/// Handle to a counted object: the region it lives in plus its binding.
///
/// Two words wide. Cloning produces a copy handle and never touches content.
pub struct ObjectBase<'a> {
    flash: &'a dyn Flash,
    binding: Binding,
}

impl<'a> ObjectBase<'a> {
    /// The null object, bound to the process-wide null region.
    pub fn null() -> Self {
        Self {
            flash: null_flash(),
            binding: Binding::Null,
        }
    }

    /// Bind to the header stored at `addr`.
    ///
    /// A stored copy word produces a copy handle naming its target, and the
    /// sentinel produces the null object. No validation happens here; see
    /// [`Image::bind`](crate::Image::bind) for the checked path.
    pub fn at(flash: &'a dyn Flash, addr: Addr) -> Self {
        let binding = match Header::read(flash, addr) {
            Header::Null => return Self::null(),
            Header::Copy(target) => Binding::Copy(target),
            Header::Length(_) => Binding::Real(addr),
        };
        Self { flash, binding }
    }

    pub fn flash(&self) -> &'a dyn Flash {
        self.flash
    }

    pub fn binding(&self) -> Binding {
        self.binding
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.binding.is_null()
    }

    #[inline]
    pub fn is_copy(&self) -> bool {
        self.binding.is_copy()
    }

    /// Content length in bytes.
    pub fn length(&self) -> usize {
        match self.binding {
            Binding::Null => 0,
            Binding::Real(addr) | Binding::Copy(addr) => {
                Header::read(self.flash, addr).length() as usize
            }
        }
    }

    /// Content length rounded up to the storage alignment.
    pub fn size(&self) -> usize {
        align_up(self.length())
    }

    /// Content address of the backing object. Zero for null, which is the
    /// sentinel's own header.
    pub fn data(&self) -> usize {
        match self.binding {
            Binding::Null => 0,
            Binding::Real(addr) | Binding::Copy(addr) => addr.content(),
        }
    }

    /// Copy content starting at `offset` through the cached path.
    pub fn read(&self, offset: usize, buf: &mut [u8]) -> usize {
        match self.clamp(offset, buf.len()) {
            0 => 0,
            count => self.flash.cached_read(self.data() + offset, &mut buf[..count]),
        }
    }

    /// Copy content starting at `offset`, bypassing the cache.
    pub fn read_flash(&self, offset: usize, buf: &mut [u8]) -> usize {
        match self.clamp(offset, buf.len()) {
            0 => 0,
            count => self.flash.direct_read(self.data() + offset, &mut buf[..count]),
        }
    }

    fn clamp(&self, offset: usize, wanted: usize) -> usize {
        self.length().saturating_sub(offset).min(wanted)
    }

    /// A copy handle naming the same real object.
    pub fn copy(&self) -> Self {
        let binding = match self.binding {
            Binding::Null => Binding::Null,
            Binding::Real(addr) | Binding::Copy(addr) => Binding::Copy(addr),
        };
        Self {
            flash: self.flash,
            binding,
        }
    }

    /// Same binding, unchanged. Used when reinterpreting as another view.
    pub(crate) fn alias(&self) -> Self {
        Self {
            flash: self.flash,
            binding: self.binding,
        }
    }

    /// Whether both handles resolve to the same non-null object.
    pub fn same_object(&self, other: &ObjectBase<'_>) -> bool {
        !self.is_null()
            && std::ptr::addr_eq(self.flash, other.flash)
            && self.binding.target() == other.binding.target()
    }
}

impl Default for ObjectBase<'_> {
    fn default() -> Self {
        Self::null()
    }
}

impl Clone for ObjectBase<'_> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl fmt::Debug for ObjectBase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBase")
            .field("binding", &self.binding)
            .field("length", &self.length())
            .finish()
    }
}
