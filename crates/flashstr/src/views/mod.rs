//! Concrete view types.

mod array;
mod lookup;
mod map;
mod string;
mod table;
mod vector;

#[cfg(test)]
mod array_tests;
#[cfg(test)]
mod string_tests;
#[cfg(test)]
mod table_tests;

pub use array::Array;
pub use lookup::Lookup;
pub use map::{Entry, Map, MapKey, Pair};
pub use string::Str;
pub use table::{Table, TableRow};
pub use vector::Vector;
