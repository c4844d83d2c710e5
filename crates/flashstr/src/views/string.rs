//! Counted strings.
//!
//! Content may hold embedded zero bytes. The producer always writes a trailing
//! terminator after the content, inside the padding, which `length()` does not
//! count but `size()` does.

use std::fmt;

use crate::object::{Iter, ObjectBase, Plain, View, align_up};
use crate::print::StringPrinter;

/// Stack buffer width used when comparing content.
const COMPARE_CHUNK: usize = 64;

/// View of a counted byte string.
pub struct Str<'a> {
    base: ObjectBase<'a>,
}

impl<'a> View<'a> for Str<'a> {
    type Layout = Plain<u8>;

    fn from_base(base: ObjectBase<'a>) -> Self {
        Self { base }
    }

    fn base(&self) -> &ObjectBase<'a> {
        &self.base
    }

    fn size(&self) -> usize {
        align_up(self.base.length() + 1)
    }
}

impl<'a> Str<'a> {
    /// Compare content with another stored string.
    ///
    /// A null view equals only another null view. Two views of the same
    /// object are equal without reading content.
    pub fn equals(&self, other: &Str<'_>, ignore_case: bool) -> bool {
        if self.is_null() || other.is_null() {
            return self.is_null() && other.is_null();
        }
        if self.base.same_object(&other.base) {
            return true;
        }
        let len = self.base.length();
        if len != other.base.length() {
            return false;
        }

        let mut left = [0u8; COMPARE_CHUNK];
        let mut right = [0u8; COMPARE_CHUNK];
        let mut offset = 0;
        while offset < len {
            let count = self.read(offset, &mut left);
            if count == 0 || other.read(offset, &mut right[..count]) != count {
                return false;
            }
            if !bytes_match(&left[..count], &right[..count], ignore_case) {
                return false;
            }
            offset += count;
        }
        true
    }

    /// Compare content with host bytes. A null view equals the empty string.
    pub fn equals_bytes(&self, other: &[u8], ignore_case: bool) -> bool {
        if self.base.length() != other.len() {
            return false;
        }

        let mut buf = [0u8; COMPARE_CHUNK];
        let mut offset = 0;
        for chunk in other.chunks(COMPARE_CHUNK) {
            let stored = &mut buf[..chunk.len()];
            if self.read(offset, stored) != chunk.len() {
                return false;
            }
            if !bytes_match(stored, chunk, ignore_case) {
                return false;
            }
            offset += chunk.len();
        }
        true
    }

    pub fn equals_ignore_case(&self, other: &str) -> bool {
        self.equals_bytes(other.as_bytes(), true)
    }

    /// Content copied into a host buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.base.length()];
        let count = self.read(0, &mut bytes);
        bytes.truncate(count);
        bytes
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }

    /// Streaming printer that never buffers more than one chunk.
    pub fn printer(&self) -> StringPrinter<'_, 'a> {
        StringPrinter::new(self)
    }
}

fn bytes_match(left: &[u8], right: &[u8], ignore_case: bool) -> bool {
    if ignore_case {
        left.eq_ignore_ascii_case(right)
    } else {
        left == right
    }
}

impl<'b> PartialEq<Str<'b>> for Str<'_> {
    fn eq(&self, other: &Str<'b>) -> bool {
        self.equals(other, false)
    }
}

impl PartialEq<str> for Str<'_> {
    fn eq(&self, other: &str) -> bool {
        self.equals_bytes(other.as_bytes(), false)
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.equals_bytes(other.as_bytes(), false)
    }
}

impl PartialEq<[u8]> for Str<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.equals_bytes(other, false)
    }
}

impl PartialEq<&[u8]> for Str<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.equals_bytes(other, false)
    }
}

impl Default for Str<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Clone for Str<'_> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("Str(null)");
        }
        write!(f, "Str({:?})", self.to_string_lossy())
    }
}

impl<'s, 'a> IntoIterator for &'s Str<'a> {
    type Item = u8;
    type IntoIter = Iter<'a, Plain<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
