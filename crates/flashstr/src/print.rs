//! Bounded-memory text rendering of views.
//!
//! Printers write straight to an [`io::Write`] sink and report the number of
//! bytes written. String content is streamed in fixed chunks, so printing a
//! large object never buffers more than [`PRINT_CHUNK`] bytes.

use std::io;

use crate::object::View;
use crate::storage::Scalar;
use crate::views::{Array, Map, MapKey, Pair, Str, TableRow, Vector};

/// Strings up to this length are printed with a single read.
pub const SMALL_PRINT_LIMIT: usize = 64;

/// Chunk size for streaming longer strings.
pub const PRINT_CHUNK: usize = 256;

/// Something that can render itself as text.
pub trait Printable {
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize>;

    /// Render into a host string.
    fn to_text(&self) -> String {
        let mut out = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.print_to(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

fn write_text(out: &mut dyn io::Write, text: &str) -> io::Result<usize> {
    out.write_all(text.as_bytes())?;
    Ok(text.len())
}

macro_rules! impl_printable_display {
    ($($ty:ty),* $(,)?) => {$(
        impl Printable for $ty {
            fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
                write_text(out, &self.to_string())
            }
        }
    )*};
}

impl_printable_display!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, bool);

/// Streams string content to a sink.
pub struct StringPrinter<'v, 'a> {
    string: &'v Str<'a>,
}

impl<'v, 'a> StringPrinter<'v, 'a> {
    pub fn new(string: &'v Str<'a>) -> Self {
        Self { string }
    }
}

impl Printable for StringPrinter<'_, '_> {
    /// Short strings take one cached read. Longer ones are copied with
    /// direct reads, one chunk at a time, until the content runs out or the
    /// sink accepts less than a full chunk.
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        let len = self.string.length();
        if len <= SMALL_PRINT_LIMIT {
            let mut buf = [0u8; SMALL_PRINT_LIMIT];
            let count = self.string.read(0, &mut buf[..len]);
            return out.write(&buf[..count]);
        }

        let mut buf = [0u8; PRINT_CHUNK];
        let mut offset = 0;
        let mut written = 0;
        loop {
            let count = self.string.read_flash(offset, &mut buf);
            if count == 0 {
                break;
            }
            let accepted = out.write(&buf[..count])?;
            tracing::trace!(offset, count, accepted, "printed chunk");
            written += accepted;
            if accepted != count {
                break;
            }
            offset += count;
        }
        Ok(written)
    }
}

/// Prints a sequence as `[e0, e1, ...]`.
pub struct ArrayPrinter<'s, I> {
    elements: I,
    separator: &'s str,
}

impl<I> ArrayPrinter<'static, I> {
    pub fn new(elements: I) -> Self {
        Self {
            elements,
            separator: ", ",
        }
    }
}

impl<'s, I> ArrayPrinter<'s, I> {
    /// Use `separator` between elements instead of `", "`.
    pub fn separator<'t>(self, separator: &'t str) -> ArrayPrinter<'t, I> {
        ArrayPrinter {
            elements: self.elements,
            separator,
        }
    }
}

impl<I> Printable for ArrayPrinter<'_, I>
where
    I: Iterator + Clone,
    I::Item: Printable,
{
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        let mut count = write_text(out, "[")?;
        for (index, element) in self.elements.clone().enumerate() {
            if index > 0 {
                count += write_text(out, self.separator)?;
            }
            count += element.print_to(out)?;
        }
        count += write_text(out, "]")?;
        Ok(count)
    }
}

/// Prints map entries one per line inside braces.
pub struct MapPrinter<I> {
    pairs: I,
}

impl<I> MapPrinter<I> {
    pub fn new(pairs: I) -> Self {
        Self { pairs }
    }
}

impl<I> Printable for MapPrinter<I>
where
    I: Iterator + Clone,
    I::Item: Printable,
{
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        let mut count = write_text(out, "{\n")?;
        for pair in self.pairs.clone() {
            count += write_text(out, "  ")?;
            count += pair.print_to(out)?;
            count += write_text(out, "\n")?;
        }
        count += write_text(out, "}")?;
        Ok(count)
    }
}

impl Printable for Str<'_> {
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        self.printer().print_to(out)
    }
}

impl<'a, T: Scalar + Printable> Printable for Array<'a, T> {
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        self.printer().print_to(out)
    }
}

impl<'a, V: View<'a> + Printable> Printable for Vector<'a, V> {
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        self.printer().print_to(out)
    }
}

impl<'a, K, V> Printable for Map<'a, K, V>
where
    K: MapKey<'a> + Printable,
    V: View<'a> + Printable,
{
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        self.printer().print_to(out)
    }
}

impl<'a, K, V> Printable for Pair<'a, K, V>
where
    K: MapKey<'a> + Printable,
    V: View<'a> + Printable,
{
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        if !self.is_valid() {
            return write_text(out, "(invalid)");
        }
        let mut count = self.key().print_to(out)?;
        count += write_text(out, " => ")?;
        count += self.content().print_to(out)?;
        Ok(count)
    }
}

impl<T: Scalar + Printable, const N: usize> Printable for TableRow<T, N> {
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        ArrayPrinter::new(self.values().iter()).print_to(out)
    }
}

impl<T: Printable + ?Sized> Printable for &T {
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<usize> {
        (**self).print_to(out)
    }
}
