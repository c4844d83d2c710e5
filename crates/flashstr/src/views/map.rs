//! Associative arrays.
//!
//! Each entry is stored packed: the key (`K::SIZE` bytes, or a 4-byte string
//! reference) immediately followed by a 4-byte content reference. With keys
//! narrower than a word the content reference is misaligned, so both halves
//! go through the scalar reader.

use std::fmt;
use std::marker::PhantomData;

use super::{Lookup, Str};
use crate::object::{Addr, Element, Iter, ObjectBase, POINTER_SIZE, Ptr, View};
use crate::print::MapPrinter;
use crate::storage::{Flash, Scalar, null_flash, read_value};

/// A type usable as a map key.
pub trait MapKey<'a>: Sized {
    /// Stored width of the key.
    const SIZE: usize;

    fn load_key(flash: &'a dyn Flash, addr: usize) -> Self;

    /// Key of the empty pair.
    fn zero_key() -> Self;
}

impl<'a, T: Scalar> MapKey<'a> for T {
    const SIZE: usize = <T as Scalar>::SIZE;

    fn load_key(flash: &'a dyn Flash, addr: usize) -> T {
        read_value(flash, addr)
    }

    fn zero_key() -> T {
        <T as Scalar>::zero()
    }
}

/// String keys are stored as references; a null reference reads as empty.
impl<'a> MapKey<'a> for Str<'a> {
    const SIZE: usize = POINTER_SIZE;

    fn load_key(flash: &'a dyn Flash, addr: usize) -> Self {
        <Ptr<Str<'a>> as Element<'a>>::load(flash, addr)
    }

    fn zero_key() -> Self {
        Str::empty()
    }
}

/// One key/content entry of a [`Map`].
pub struct Pair<'a, K, V> {
    key: K,
    content: Addr,
    flash: &'a dyn Flash,
    _content: PhantomData<fn() -> V>,
}

impl<'a, K: MapKey<'a>, V: View<'a>> Pair<'a, K, V> {
    /// The pair returned by failed lookups.
    pub fn empty() -> Self {
        Self {
            key: K::zero_key(),
            content: Addr::NULL,
            flash: null_flash(),
            _content: PhantomData,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// The referenced content, or `V::empty()` when the reference is null.
    pub fn content(&self) -> V {
        if self.content.is_null() {
            return V::empty();
        }
        V::at(self.flash, self.content)
    }

    /// False for the empty pair.
    pub fn is_valid(&self) -> bool {
        !self.content.is_null()
    }
}

impl<'a, K: MapKey<'a> + fmt::Debug, V: View<'a> + fmt::Debug> fmt::Debug for Pair<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("Pair(invalid)");
        }
        f.debug_struct("Pair")
            .field("key", &self.key)
            .field("content", &self.content())
            .finish()
    }
}

/// Layout of a map entry.
pub struct Entry<K, V>(PhantomData<fn() -> (K, V)>);

impl<'a, K: MapKey<'a>, V: View<'a>> Element<'a> for Entry<K, V> {
    type Value = Pair<'a, K, V>;
    const SIZE: usize = K::SIZE + POINTER_SIZE;

    fn load(flash: &'a dyn Flash, addr: usize) -> Pair<'a, K, V> {
        Pair {
            key: K::load_key(flash, addr),
            content: Addr(read_value(flash, addr + K::SIZE)),
            flash,
            _content: PhantomData,
        }
    }

    fn zero() -> Pair<'a, K, V> {
        Pair::empty()
    }
}

/// View of a packed array of key/content pairs.
pub struct Map<'a, K, V> {
    base: ObjectBase<'a>,
    _entry: PhantomData<fn() -> (K, V)>,
}

impl<'a, K: MapKey<'a>, V: View<'a>> View<'a> for Map<'a, K, V> {
    type Layout = Entry<K, V>;

    fn from_base(base: ObjectBase<'a>) -> Self {
        Self {
            base,
            _entry: PhantomData,
        }
    }

    fn base(&self) -> &ObjectBase<'a> {
        &self.base
    }
}

impl<'a, K: MapKey<'a>, V: View<'a>> Map<'a, K, V> {
    /// Position of the first entry whose key matches. String keys are
    /// compared ignoring ASCII case.
    pub fn index_of<Q: Lookup<K>>(&self, key: Q) -> Option<usize> {
        self.index_of_with(key, true)
    }

    pub fn index_of_with<Q: Lookup<K>>(&self, key: Q, ignore_case: bool) -> Option<usize> {
        let flash = self.base.flash();
        let data = self.data();
        let stride = <Entry<K, V> as Element<'a>>::SIZE;
        (0..self.length()).find(|&index| {
            let stored = K::load_key(flash, data + index * stride);
            key.matches(&stored, ignore_case)
        })
    }

    /// The pair for `key`, or the empty pair when absent.
    pub fn get<Q: Lookup<K>>(&self, key: Q) -> Pair<'a, K, V> {
        match self.index_of(key) {
            Some(index) => self.value_at(index),
            None => Pair::empty(),
        }
    }

    pub fn contains<Q: Lookup<K>>(&self, key: Q) -> bool {
        self.index_of(key).is_some()
    }

    /// Printer producing one `key => content` line per entry.
    pub fn printer(&self) -> MapPrinter<Iter<'a, Entry<K, V>>> {
        MapPrinter::new(self.iter())
    }
}

impl<'a, K: MapKey<'a>, V: View<'a>> Default for Map<'a, K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, K: MapKey<'a>, V: View<'a>> Clone for Map<'a, K, V> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<'a, K, V> fmt::Debug for Map<'a, K, V>
where
    K: MapKey<'a> + fmt::Debug,
    V: View<'a> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'s, 'a, K: MapKey<'a>, V: View<'a>> IntoIterator for &'s Map<'a, K, V> {
    type Item = Pair<'a, K, V>;
    type IntoIter = Iter<'a, Entry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
