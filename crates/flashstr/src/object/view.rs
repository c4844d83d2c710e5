//! Typed views over counted objects.
//!
//! A view pairs an [`ObjectBase`] with an element [`Element`] layout that says
//! how wide each element is and how to load it. Everything else (length in
//! elements, indexed access, linear search, iteration) is provided by
//! [`View`] on top of those two.

use std::marker::PhantomData;

use super::{Addr, Iter, ObjectBase, POINTER_SIZE};
use crate::storage::{Flash, Scalar, read_value};

/// How the elements of a view are stored and decoded.
pub trait Element<'a> {
    type Value;

    /// Stored width of one element.
    const SIZE: usize;

    /// Decode the element stored at `addr`.
    fn load(flash: &'a dyn Flash, addr: usize) -> Self::Value;

    /// Value of an out-of-range element.
    fn zero() -> Self::Value;
}

/// Elements stored inline as scalars.
pub struct Plain<T>(PhantomData<fn() -> T>);

impl<'a, T: Scalar> Element<'a> for Plain<T> {
    type Value = T;
    const SIZE: usize = {
        assert!(T::SIZE > 0, "array elements cannot be zero-sized");
        T::SIZE
    };

    #[inline]
    fn load(flash: &'a dyn Flash, addr: usize) -> T {
        read_value(flash, addr)
    }

    fn zero() -> T {
        T::zero()
    }
}

/// Elements stored as 4-byte references to other objects.
///
/// A zero reference loads as `V::empty()`.
pub struct Ptr<V>(PhantomData<fn() -> V>);

impl<'a, V: View<'a>> Element<'a> for Ptr<V> {
    type Value = V;
    const SIZE: usize = POINTER_SIZE;

    fn load(flash: &'a dyn Flash, addr: usize) -> V {
        let target = Addr(read_value(flash, addr));
        if target.is_null() {
            return V::empty();
        }
        V::at(flash, target)
    }

    fn zero() -> V {
        V::empty()
    }
}

/// Element value type of a view.
pub type ValueOf<'a, V> = <<V as View<'a>>::Layout as Element<'a>>::Value;

/// A typed, read-only view of a counted object.
pub trait View<'a>: Sized {
    type Layout: Element<'a>;

    fn from_base(base: ObjectBase<'a>) -> Self;

    fn base(&self) -> &ObjectBase<'a>;

    /// The canonical null view.
    fn empty() -> Self {
        Self::from_base(ObjectBase::null())
    }

    /// Bind to the object stored at `addr`, unchecked.
    fn at(flash: &'a dyn Flash, addr: Addr) -> Self {
        Self::from_base(ObjectBase::at(flash, addr))
    }

    fn is_null(&self) -> bool {
        self.base().is_null()
    }

    fn is_copy(&self) -> bool {
        self.base().is_copy()
    }

    /// Number of elements.
    fn length(&self) -> usize {
        self.base().length() / <Self::Layout as Element<'a>>::SIZE
    }

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Stored size of the content, padding included.
    fn size(&self) -> usize {
        self.base().size()
    }

    fn data(&self) -> usize {
        self.base().data()
    }

    /// Element at `index`, or the layout's zero value when out of range.
    fn value_at(&self, index: usize) -> ValueOf<'a, Self> {
        if index >= self.length() {
            return <Self::Layout as Element<'a>>::zero();
        }
        let addr = self.data() + index * <Self::Layout as Element<'a>>::SIZE;
        <Self::Layout as Element<'a>>::load(self.base().flash(), addr)
    }

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &ValueOf<'a, Self>) -> Option<usize>
    where
        ValueOf<'a, Self>: PartialEq,
    {
        self.iter().position(|element| element == *value)
    }

    /// A fresh iterator over the elements.
    fn iter(&self) -> Iter<'a, Self::Layout> {
        Iter::new(self.base().flash(), self.data(), self.length())
    }

    /// Copy raw content bytes through the cached path.
    fn read(&self, offset: usize, buf: &mut [u8]) -> usize {
        self.base().read(offset, buf)
    }

    /// Copy raw content bytes, bypassing the cache.
    fn read_flash(&self, offset: usize, buf: &mut [u8]) -> usize {
        self.base().read_flash(offset, buf)
    }

    /// A copy handle naming the same object.
    fn copy(&self) -> Self {
        Self::from_base(self.base().copy())
    }

    /// Reinterpret the same object as another view type.
    fn as_view<U: View<'a>>(&self) -> U {
        U::from_base(self.base().alias())
    }
}
