use std::io::{Read, Write};
use std::path::PathBuf;

use flashstr::{Addr, Array, FlashStream, Image, Map, Printable, Scalar, Str, Vector};

use super::CommandError;
use crate::cli::ObjectKind;

/// Bytes per line of the hex listing.
const HEX_ROW: usize = 16;

pub struct DumpArgs {
    pub image_path: PathBuf,
    pub addr: Addr,
    pub kind: ObjectKind,
}

pub fn run(args: DumpArgs, out: &mut dyn Write) -> Result<(), CommandError> {
    let image = Image::from_path(&args.image_path)?;
    tracing::debug!(
        path = %args.image_path.display(),
        addr = %args.addr,
        kind = ?args.kind,
        "dumping object"
    );
    dump(&image, args.addr, args.kind, out)
}

/// Print the object at `addr` interpreted as `kind`.
pub fn dump(
    image: &Image,
    addr: Addr,
    kind: ObjectKind,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    match kind {
        ObjectKind::String => print(image.bind::<Str>(addr)?, out),
        ObjectKind::Bytes => hex_listing(image.bind::<Array<u8>>(addr)?, out),
        ObjectKind::U8 => print_array::<u8>(image, addr, out),
        ObjectKind::I8 => print_array::<i8>(image, addr, out),
        ObjectKind::U16 => print_array::<u16>(image, addr, out),
        ObjectKind::I16 => print_array::<i16>(image, addr, out),
        ObjectKind::U32 => print_array::<u32>(image, addr, out),
        ObjectKind::I32 => print_array::<i32>(image, addr, out),
        ObjectKind::U64 => print_array::<u64>(image, addr, out),
        ObjectKind::I64 => print_array::<i64>(image, addr, out),
        ObjectKind::F32 => print_array::<f32>(image, addr, out),
        ObjectKind::F64 => print_array::<f64>(image, addr, out),
        ObjectKind::Strings => print(image.bind::<Vector<Str>>(addr)?, out),
        ObjectKind::StringMap => print(image.bind::<Map<Str, Str>>(addr)?, out),
        ObjectKind::IntMap => print(image.bind::<Map<u32, Str>>(addr)?, out),
    }
}

fn print_array<T: Scalar + Printable>(
    image: &Image,
    addr: Addr,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    print(image.bind::<Array<T>>(addr)?, out)
}

fn print(view: impl Printable, out: &mut dyn Write) -> Result<(), CommandError> {
    view.print_to(out)?;
    writeln!(out)?;
    Ok(())
}

/// Offset, hex bytes and printable ASCII, one row at a time.
fn hex_listing(bytes: Array<'_, u8>, out: &mut dyn Write) -> Result<(), CommandError> {
    let mut stream = FlashStream::new(&bytes);
    let mut row = [0u8; HEX_ROW];
    let mut offset = 0;
    loop {
        let count = stream.read(&mut row)?;
        if count == 0 {
            break;
        }
        write!(out, "{offset:04x}:")?;
        for byte in &row[..count] {
            write!(out, " {byte:02x}")?;
        }
        for _ in count..HEX_ROW {
            write!(out, "   ")?;
        }
        let ascii: String = row[..count]
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { char::from(b) } else { '.' })
            .collect();
        writeln!(out, "  {ascii}")?;
        offset += count;
    }
    Ok(())
}
