use std::fmt;
use std::marker::PhantomData;

use crate::object::{Iter, ObjectBase, Plain, View};
use crate::print::ArrayPrinter;
use crate::storage::Scalar;

/// Bytes decoded per bulk read in [`Array::read_elements`].
const DECODE_CHUNK: usize = 256;

/// View of a homogeneous array of scalars.
///
/// Only [`Scalar`] element types are accepted; arrays of objects are
/// [`Vector`](super::Vector)s.
pub struct Array<'a, T> {
    base: ObjectBase<'a>,
    _element: PhantomData<fn() -> T>,
}

impl<'a, T: Scalar> View<'a> for Array<'a, T> {
    type Layout = Plain<T>;

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

impl<'a, T: Scalar> Array<'a, T> {
    /// Decode elements starting at `index` into `out`. Returns the number of
    /// elements written, clamped to what the array holds.
    pub fn read_elements(&self, index: usize, out: &mut [T]) -> usize {
        let count = self.length().saturating_sub(index).min(out.len());
        if count == 0 {
            return 0;
        }
        if T::SIZE > DECODE_CHUNK {
            for (slot, value) in out[..count].iter_mut().zip(self.iter().skip(index)) {
                *slot = value;
            }
            return count;
        }

        let per_chunk = DECODE_CHUNK / T::SIZE;
        let mut buf = [0u8; DECODE_CHUNK];
        let mut done = 0;
        while done < count {
            let batch = per_chunk.min(count - done);
            let bytes = &mut buf[..batch * T::SIZE];
            let read = self.read((index + done) * T::SIZE, bytes) / T::SIZE;
            for (slot, raw) in out[done..done + read].iter_mut().zip(bytes.chunks_exact(T::SIZE)) {
                *slot = T::from_le_slice(raw);
            }
            done += read;
            if read < batch {
                break;
            }
        }
        done
    }

    /// Printer producing `[e0, e1, ...]`.
    pub fn printer(&self) -> ArrayPrinter<'static, Iter<'a, Plain<T>>> {
        ArrayPrinter::new(self.iter())
    }

    /// All elements copied into a host vector.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.length()];
        let count = self.read_elements(0, &mut out);
        out.truncate(count);
        out
    }
}

impl<'b, T: Scalar> PartialEq<Array<'b, T>> for Array<'_, T> {
    fn eq(&self, other: &Array<'b, T>) -> bool {
        if self.base.same_object(&other.base) {
            return true;
        }
        self.length() == other.length() && self.iter().eq(other.iter())
    }
}

impl<T: Scalar> Default for Array<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar> Clone for Array<'_, T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: Scalar> fmt::Debug for Array<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'s, 'a, T: Scalar> IntoIterator for &'s Array<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, Plain<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
