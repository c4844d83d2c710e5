//! Shared argument builders for CLI commands.

use std::num::ParseIntError;
use std::path::PathBuf;

use clap::{Arg, value_parser};
use flashstr::Addr;

use super::ObjectKind;

/// Region image file (positional).
pub fn image_path_arg() -> Arg {
    Arg::new("image_path")
        .value_name("IMAGE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Region image file")
}

/// Object header address (--at).
pub fn addr_arg() -> Arg {
    Arg::new("addr")
        .long("at")
        .value_name("ADDR")
        .required(true)
        .value_parser(parse_addr)
        .help("Object header address, decimal or 0x-prefixed hex")
}

/// View kind (-k/--kind).
pub fn kind_arg() -> Arg {
    Arg::new("kind")
        .short('k')
        .long("kind")
        .value_name("KIND")
        .default_value("string")
        .value_parser(value_parser!(ObjectKind))
        .help("How to interpret the object")
}

/// Parse `123` or `0x7b`.
pub fn parse_addr(text: &str) -> Result<Addr, String> {
    let parsed: Result<u32, ParseIntError> = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed
        .map(Addr)
        .map_err(|err| format!("invalid address '{text}': {err}"))
}
