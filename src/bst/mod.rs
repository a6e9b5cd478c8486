//! Unbalanced binary search tree. Its arena-backed tree and iterators are also the foundation
//! that the avl tree rebalances on top of.

pub(crate) mod iter;
mod map;
pub(crate) mod node;
pub(crate) mod tree;

pub use self::iter::{IntoIter, Iter, IterMut};
pub use self::map::BstMap;
