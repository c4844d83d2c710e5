//! Zero-copy typed views over counted objects in slow, alignment-strict
//! storage.
//!
//! This crate contains:
//! - The stored object format (length/copy header, padded content)
//! - Typed views: strings, scalar arrays, vectors of objects, maps, tables
//! - Alignment-safe scalar reads over any [`Flash`] backend
//! - Streaming printers and an `io::Read` adapter
//! - [`Image`] and [`ImageBuilder`] for loading and producing region images

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod image;
pub mod object;
pub mod print;
pub mod storage;
pub mod stream;
pub mod views;


// Re-export commonly used items at crate root
pub use builder::{BuildError, ImageBuilder};
pub use image::{Image, ImageError};
pub use object::{
    ALIGN, Addr, Binding, COPY_BIT, Element, HEADER_SIZE, Header, Iter, NULL_SENTINEL,
    ObjectBase, POINTER_SIZE, Plain, Ptr, ValueOf, View, align_up,
};
pub use print::{
    ArrayPrinter, MapPrinter, PRINT_CHUNK, Printable, SMALL_PRINT_LIMIT, StringPrinter,
};
pub use storage::{AlignedVec, Flash, NullFlash, Scalar, null_flash, read_value};
pub use stream::FlashStream;
pub use views::{Array, Entry, Lookup, Map, MapKey, Pair, Str, Table, TableRow, Vector};
