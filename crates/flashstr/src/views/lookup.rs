use super::Str;
use crate::object::View;
use crate::storage::Scalar;

/// A search key comparable against stored elements of type `K`.
///
/// Scalars compare exactly and ignore `ignore_case`. String keys may be
/// host strings, byte slices, optional strings or another stored string.
pub trait Lookup<K> {
    fn matches(&self, stored: &K, ignore_case: bool) -> bool;
}

impl<T: Scalar> Lookup<T> for T {
    fn matches(&self, stored: &T, _ignore_case: bool) -> bool {
        self == stored
    }
}

impl<'a> Lookup<Str<'a>> for &str {
    fn matches(&self, stored: &Str<'a>, ignore_case: bool) -> bool {
        stored.equals_bytes(self.as_bytes(), ignore_case)
    }
}

impl<'a> Lookup<Str<'a>> for &[u8] {
    fn matches(&self, stored: &Str<'a>, ignore_case: bool) -> bool {
        stored.equals_bytes(self, ignore_case)
    }
}

/// `None` matches null and empty entries.
impl<'a> Lookup<Str<'a>> for Option<&str> {
    fn matches(&self, stored: &Str<'a>, ignore_case: bool) -> bool {
        match self {
            Some(key) => stored.equals_bytes(key.as_bytes(), ignore_case),
            None => stored.is_empty(),
        }
    }
}

impl<'a> Lookup<Str<'a>> for &Str<'_> {
    fn matches(&self, stored: &Str<'a>, ignore_case: bool) -> bool {
        stored.equals(self, ignore_case)
    }
}
