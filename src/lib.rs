//! Ordered maps and sets backed by binary search trees.
//!
//! [`BstMap`](bst/struct.BstMap.html) is a plain binary search tree that never rebalances.
//! [`AvlMap`](avl_tree/struct.AvlMap.html) and [`AvlSet`](avl_tree/struct.AvlSet.html) layer
//! avl rebalancing on top of the same tree so lookups, insertions and removals stay
//! logarithmic.

#![cfg_attr(feature = "clippy", feature(plugin))]
#![cfg_attr(feature = "clippy", plugin(clippy))]

#[macro_use]
extern crate log;
extern crate serde;
#[cfg(test)]
extern crate serde_test;

#[macro_use]
mod macros;

mod entry;
mod error;
pub mod arena;
pub mod avl_tree;
pub mod bst;

pub use crate::error::{Error, Result};
