mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{DumpParams, InfoParams};

use clap::ValueEnum;

/// View type used to interpret an object for `dump`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ObjectKind {
    /// Counted string
    String,
    /// Raw content as a hex listing
    Bytes,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    /// Vector of strings
    Strings,
    /// Map from string keys to strings
    StringMap,
    /// Map from u32 keys to strings
    IntMap,
}
