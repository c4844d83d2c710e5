//! Counted-object encoding and the generic view layer.
//!
//! Stored layout: `[ length/tag: u32 LE ][ content, padded to 4 bytes ]`.
//! The top bit of the header word marks a copy, whose remaining bits hold the
//! address of the real object. A copy with address zero is the null sentinel,
//! which every image stores at address 0.

mod base;
mod header;
mod iter;
mod view;


pub use base::ObjectBase;
pub use header::{Addr, Binding, Header};
pub use iter::Iter;
pub use view::{Element, Plain, Ptr, ValueOf, View};

/// Alignment of headers and content.
pub const ALIGN: usize = 4;

/// Size of the length/tag word preceding content.
pub const HEADER_SIZE: usize = 4;

/// Size of a stored object reference.
pub const POINTER_SIZE: usize = 4;

/// Header bit marking a copy.
pub const COPY_BIT: u32 = 0x8000_0000;

/// Copy with a zero address.
pub const NULL_SENTINEL: u32 = COPY_BIT;

/// Round `n` up to the next multiple of [`ALIGN`].
#[inline]
pub const fn align_up(n: usize) -> usize {
    n.next_multiple_of(ALIGN)
}
