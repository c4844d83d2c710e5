//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("flashstr")
        .about("Inspect flashstr region images")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(info_command())
        .subcommand(dump_command())
}

/// Decode the header of one object.
pub fn info_command() -> Command {
    Command::new("info")
        .about("Show the header of an object")
        .after_help(
            r#"EXAMPLES:
  flashstr info image.bin --at 4
  flashstr info image.bin --at 0x40"#,
        )
        .arg(image_path_arg())
        .arg(addr_arg())
}

/// Print an object through a typed view.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print an object as a given view type")
        .after_help(
            r#"EXAMPLES:
  flashstr dump image.bin --at 4                  # string
  flashstr dump image.bin --at 0x20 -k u16        # array of u16
  flashstr dump image.bin --at 0x40 -k string-map # map of strings"#,
        )
        .arg(image_path_arg())
        .arg(addr_arg())
        .arg(kind_arg())
}
