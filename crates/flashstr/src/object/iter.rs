use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::Element;
use crate::storage::Flash;

/// Forward iterator over the elements of a view.
///
/// Captures the region, data address and element count at creation, so it
/// stays valid independently of the view it came from.
pub struct Iter<'a, E> {
    flash: &'a dyn Flash,
    data: usize,
    length: usize,
    index: usize,
    _layout: PhantomData<fn() -> E>,
}

impl<'a, E: Element<'a>> Iter<'a, E> {
    pub(crate) fn new(flash: &'a dyn Flash, data: usize, length: usize) -> Self {
        Self {
            flash,
            data,
            length,
            index: 0,
            _layout: PhantomData,
        }
    }

    /// Index of the next element.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<'a, E: Element<'a>> Iterator for Iter<'a, E> {
    type Item = E::Value;

    fn next(&mut self) -> Option<E::Value> {
        if self.index >= self.length {
            return None;
        }
        let addr = self.data + self.index * E::SIZE;
        self.index += 1;
        Some(E::load(self.flash, addr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.length - self.index;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<E::Value> {
        self.index = self.index.saturating_add(n).min(self.length);
        self.next()
    }
}

impl<'a, E: Element<'a>> ExactSizeIterator for Iter<'a, E> {}

impl<'a, E: Element<'a>> FusedIterator for Iter<'a, E> {}

impl<E> PartialEq for Iter<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.flash, other.flash)
            && self.data == other.data
            && self.index == other.index
    }
}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            flash: self.flash,
            data: self.data,
            length: self.length,
            index: self.index,
            _layout: PhantomData,
        }
    }
}

impl<E> fmt::Debug for Iter<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("data", &self.data)
            .field("length", &self.length)
            .field("index", &self.index)
            .finish()
    }
}
