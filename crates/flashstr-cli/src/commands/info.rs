use std::io::Write;
use std::path::PathBuf;

use flashstr::{Addr, Array, Binding, Header, Image, View};

use super::CommandError;

pub struct InfoArgs {
    pub image_path: PathBuf,
    pub addr: Addr,
}

pub fn run(args: InfoArgs, out: &mut dyn Write) -> Result<(), CommandError> {
    let image = Image::from_path(&args.image_path)?;
    tracing::debug!(path = %args.image_path.display(), addr = %args.addr, "describing object");
    describe(&image, args.addr, out)
}

/// Print the stored header at `addr` and what it resolves to.
pub fn describe(image: &Image, addr: Addr, out: &mut dyn Write) -> Result<(), CommandError> {
    let header = image.header(addr)?;
    let object: Array<'_, u8> = image.bind(addr)?;
    let base = object.base();

    writeln!(out, "address:  {addr}")?;
    writeln!(out, "header:   {:#010x}", header.to_word())?;
    match base.binding() {
        Binding::Null => writeln!(out, "kind:     null")?,
        Binding::Real(_) => writeln!(out, "kind:     real")?,
        Binding::Copy(target) => writeln!(out, "kind:     copy of {target}")?,
    }
    if !matches!(header, Header::Null) {
        writeln!(out, "resolved: {}", base.binding().target())?;
        writeln!(out, "length:   {}", base.length())?;
        writeln!(out, "size:     {}", base.size())?;
        writeln!(out, "data:     {:#06x}", base.data())?;
    }
    Ok(())
}
