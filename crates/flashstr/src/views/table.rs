use std::ops::Index;

use super::Array;
use crate::storage::{Flash, Scalar};

/// A fixed row of `N` inline scalar columns.
///
/// Rows are themselves scalars, so a table is an [`Array`] of rows. A row
/// needs at least one column:
///
/// ```compile_fail
/// use flashstr::{Scalar, TableRow};
///
/// let width = <TableRow<u8, 0> as Scalar>::SIZE;
/// println!("{width}");
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TableRow<T, const N: usize> {
    values: [T; N],
}

/// Rows of `N` columns of `T`.
pub type Table<'a, T, const N: usize> = Array<'a, TableRow<T, N>>;

impl<T: Scalar, const N: usize> TableRow<T, N> {
    pub fn new(values: [T; N]) -> Self {
        Self { values }
    }

    /// Column `index`, or zero when out of range.
    pub fn get(&self, index: usize) -> T {
        self.values.get(index).copied().unwrap_or_else(T::zero)
    }

    /// Number of columns.
    pub fn length(&self) -> usize {
        N
    }

    pub fn values(&self) -> &[T; N] {
        &self.values
    }
}

impl<T: Scalar, const N: usize> Index<usize> for TableRow<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T: Scalar, const N: usize> Scalar for TableRow<T, N> {
    const SIZE: usize = {
        assert!(N > 0, "table rows need at least one column");
        T::SIZE * N
    };

    fn zero() -> Self {
        Self {
            values: [T::zero(); N],
        }
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        Self {
            values: std::array::from_fn(|column| T::from_le_slice(&bytes[column * T::SIZE..])),
        }
    }

    fn write_le(&self, out: &mut Vec<u8>) {
        for value in &self.values {
            value.write_le(out);
        }
    }

    /// Columns are loaded one by one, each with the alignment its own width
    /// allows.
    fn load(flash: &dyn Flash, addr: usize) -> Self {
        Self {
            values: std::array::from_fn(|column| T::load(flash, addr + column * T::SIZE)),
        }
    }
}
