use crate::arena::{Arena, NodeId};
use crate::bst::node::{Link, Node};
use crate::bst::tree::Tree;
use crate::entry::Entry;
use std::vec;

/// An iterator over the entries of a tree map.
///
/// The iterator starts at some node and advances by following successor links, so it yields
/// entries in ascending key order. An exhausted iterator plays the role of an end position.
pub struct Iter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    tree: &'a Tree<T, U>,
    current: Link,
}

impl<'a, T, U> Iter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    pub(crate) fn new(tree: &'a Tree<T, U>, current: Link) -> Self {
        Iter { tree, current }
    }

    /// Returns the entry the iterator is positioned at without advancing it. Returns `None` at
    /// the end.
    pub fn peek(&self) -> Option<(&'a T, &'a U)> {
        let tree = self.tree;
        self.current.map(|id| {
            let Entry { ref key, ref value } = tree[id].entry;
            (key, value)
        })
    }
}

impl<'a, T, U> Iterator for Iter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        let ret = self.peek();
        if let Some(id) = self.current {
            self.current = self.tree.successor(id);
        }
        ret
    }
}

/// A mutable iterator over the entries of a tree map.
///
/// This iterator traverses the elements of the map in-order and yields mutable references to
/// the values.
pub struct IterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    order: vec::IntoIter<NodeId>,
    nodes: Vec<Option<&'a mut Node<T, U>>>,
}

impl<'a, T, U> IterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    pub(crate) fn new(tree: &'a mut Tree<T, U>) -> Self {
        let order = tree.in_order().into_iter();
        IterMut {
            order,
            nodes: tree.arena.slots_mut(),
        }
    }
}

impl<'a, T, U> Iterator for IterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        let node = self.nodes[id.index()].take()?;
        let entry = &mut node.entry;
        Some((&entry.key, &mut entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

/// An owning iterator over the entries of a tree map.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct IntoIter<T, U> {
    arena: Arena<Node<T, U>>,
    order: vec::IntoIter<NodeId>,
}

impl<T, U> IntoIter<T, U> {
    pub(crate) fn new(tree: Tree<T, U>) -> Self {
        let order = tree.in_order().into_iter();
        IntoIter {
            arena: tree.arena,
            order,
        }
    }
}

impl<T, U> Iterator for IntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        let Entry { key, value } = self.arena.free(id).entry;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}
