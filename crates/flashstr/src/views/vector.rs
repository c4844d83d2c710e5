use std::fmt;
use std::marker::PhantomData;

use super::{Lookup, Str};
use crate::object::{Iter, ObjectBase, Ptr, View};
use crate::print::ArrayPrinter;

/// View of an array of references to other objects.
///
/// Entries may be null and read back as `V::empty()`.
pub struct Vector<'a, V> {
    base: ObjectBase<'a>,
    _element: PhantomData<fn() -> V>,
}

impl<'a, V: View<'a>> View<'a> for Vector<'a, V> {
    type Layout = Ptr<V>;

    fn from_base(base: ObjectBase<'a>) -> Self {
        Self {
            base,
            _element: PhantomData,
        }
    }

    fn base(&self) -> &ObjectBase<'a> {
        &self.base
    }
}

impl<'a, V: View<'a>> Vector<'a, V> {
    pub fn printer(&self) -> ArrayPrinter<'static, Iter<'a, Ptr<V>>> {
        ArrayPrinter::new(self.iter())
    }
}

impl<'a> Vector<'a, Str<'a>> {
    /// Position of the first string matching `key`, ignoring ASCII case.
    pub fn index_of<Q: Lookup<Str<'a>>>(&self, key: Q) -> Option<usize> {
        self.index_of_with(key, true)
    }

    pub fn index_of_with<Q: Lookup<Str<'a>>>(&self, key: Q, ignore_case: bool) -> Option<usize> {
        self.iter().position(|entry| key.matches(&entry, ignore_case))
    }
}

impl<'a, V: View<'a>> Default for Vector<'a, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, V: View<'a>> Clone for Vector<'a, V> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<'a, V: View<'a> + fmt::Debug> fmt::Debug for Vector<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'s, 'a, V: View<'a>> IntoIterator for &'s Vector<'a, V> {
    type Item = V;
    type IntoIter = Iter<'a, Ptr<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
