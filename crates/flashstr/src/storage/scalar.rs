//! Alignment-safe scalar reads.
//!
//! Element fields inside an object can sit at any byte offset (a map entry's
//! content pointer follows a key of arbitrary width). [`read_value`] picks the
//! widest load the address allows and falls back to a byte-wise copy.

use std::fmt;

use super::Flash;

/// Largest scalar the default [`Scalar::load`] decodes.
pub const INLINE_LIMIT: usize = 16;

/// A fixed-width, plain-data value stored little-endian in the region.
///
/// Views and pointers do not implement this, which is what keeps them out of
/// [`Array`](crate::Array).
///
/// Types wider than [`INLINE_LIMIT`] have to provide their own `load`:
///
/// ```compile_fail
/// use flashstr::{NullFlash, Scalar, read_value};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Digest([u8; 32]);
///
/// impl Scalar for Digest {
///     const SIZE: usize = 32;
///     fn zero() -> Self {
///         Digest([0; 32])
///     }
///     fn from_le_slice(bytes: &[u8]) -> Self {
///         let mut raw = [0; 32];
///         raw.copy_from_slice(&bytes[..32]);
///         Digest(raw)
///     }
///     fn write_le(&self, out: &mut Vec<u8>) {
///         out.extend_from_slice(&self.0);
///     }
/// }
///
/// let digest: Digest = read_value(&NullFlash, 0);
/// println!("{digest:?}");
/// ```
pub trait Scalar: Copy + PartialEq + fmt::Debug {
    /// Stored width in bytes.
    const SIZE: usize;

    /// Value returned for out-of-range reads.
    fn zero() -> Self;

    /// Decode from exactly `SIZE` little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Append the little-endian encoding of `self`.
    fn write_le(&self, out: &mut Vec<u8>);

    /// Load from the region. Composite types override this to read
    /// field by field.
    ///
    /// The default decodes through a stack buffer of [`INLINE_LIMIT`]
    /// bytes, so types wider than that must override it.
    fn load(flash: &dyn Flash, addr: usize) -> Self {
        match Self::SIZE {
            1 => Self::from_le_slice(&[flash.read_u8(addr)]),
            2 => Self::from_le_slice(&flash.read_u16(addr).to_le_bytes()),
            4 if addr.is_multiple_of(4) => Self::from_le_slice(&flash.read_u32(addr).to_le_bytes()),
            _ => read_bytewise(flash, addr),
        }
    }
}

/// Read a scalar of type `T` at `addr`, whatever the address alignment.
#[inline]
pub fn read_value<T: Scalar>(flash: &dyn Flash, addr: usize) -> T {
    T::load(flash, addr)
}

/// Copy the value's bytes into a local buffer, then decode.
fn read_bytewise<T: Scalar>(flash: &dyn Flash, addr: usize) -> T {
    const {
        assert!(
            T::SIZE <= INLINE_LIMIT,
            "scalars wider than INLINE_LIMIT must override Scalar::load"
        );
    }
    let mut buf = [0u8; INLINE_LIMIT];
    let bytes = &mut buf[..T::SIZE];
    flash.cached_read(addr, bytes);
    T::from_le_slice(bytes)
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();

            fn zero() -> Self {
                0 as $ty
            }

            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..Self::SIZE]);
                <$ty>::from_le_bytes(raw)
            }

            fn write_le(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }
        }
    )*};
}

impl_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl Scalar for bool {
    const SIZE: usize = 1;

    fn zero() -> Self {
        false
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }

    fn write_le(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }
}
