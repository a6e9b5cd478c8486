use crate::arena::{Arena, NodeId};
use crate::bst::node::{Link, Node, Side};
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::collections::HashMap;
use std::fmt::Debug;
use std::mem;
use std::ops::{Index, IndexMut};

/// The outcome of placing a key in the tree.
pub enum Placement<U> {
    /// The key already existed. Holds the value it was mapped to before.
    Replaced(U),
    /// A new leaf was attached.
    Inserted(NodeId),
}

/// A binary search tree whose nodes live in an arena and refer to each other by `NodeId`.
///
/// The tree never rebalances itself. The avl tree drives the same structure and restores its
/// invariant after each mutation.
pub struct Tree<T, U> {
    pub arena: Arena<Node<T, U>>,
    pub root: Link,
}

impl<T, U> Tree<T, U> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn find<V>(&self, key: &V) -> Link
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self[id];
            curr = match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Descends to the position of `key`. Overwrites the value if the key exists, otherwise
    /// attaches a new leaf with a balance factor of zero.
    pub fn insert_leaf(&mut self, key: T, value: U) -> Placement<U>
    where
        T: Ord,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(id) = curr {
            side = match key.cmp(&self[id].entry.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let old_value = mem::replace(&mut self[id].entry.value, value);
                    return Placement::Replaced(old_value);
                },
            };
            parent = Some(id);
            curr = self[id].child(side);
        }

        let id = self.arena.allocate(Node::new(key, value, parent));
        match parent {
            Some(parent) => self[parent].set_child(side, Some(id)),
            None => self.root = Some(id),
        }
        Placement::Inserted(id)
    }

    /// Returns the side of its parent `id` hangs from, or `None` for the root.
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        self[id].parent.map(|parent| {
            if self[parent].left == Some(id) {
                Side::Left
            } else {
                Side::Right
            }
        })
    }

    /// Redirects the link that points at `old` (a child link of its parent, or the root) to
    /// `new`. The parent link of `new` is left untouched.
    pub fn replace_child(&mut self, old: NodeId, new: Link) {
        match (self[old].parent, self.side_of(old)) {
            (Some(parent), Some(side)) => self[parent].set_child(side, new),
            _ => self.root = new,
        }
    }

    pub fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    pub fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right;
        }
        id
    }

    pub fn first(&self) -> Link {
        self.root.map(|root| self.leftmost(root))
    }

    pub fn last(&self) -> Link {
        self.root.map(|root| self.rightmost(root))
    }

    /// Returns the in-order next node: the leftmost node of the right subtree, or else the
    /// first ancestor reached through a left-child edge.
    pub fn successor(&self, id: NodeId) -> Link {
        if let Some(right) = self[id].right {
            return Some(self.leftmost(right));
        }
        let mut curr = id;
        while let Some(parent) = self[curr].parent {
            if self[parent].left == Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }

    /// Returns the in-order previous node: the rightmost node of the left subtree, or else the
    /// first ancestor reached through a right-child edge.
    pub fn predecessor(&self, id: NodeId) -> Link {
        if let Some(left) = self[id].left {
            return Some(self.rightmost(left));
        }
        let mut curr = id;
        while let Some(parent) = self[curr].parent {
            if self[parent].right == Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }

    /// Exchanges the positions of two nodes. Entries stay with their node and balance factors
    /// are not touched.
    pub fn swap_nodes(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }

        let (a_parent, a_left, a_right) = (self[a].parent, self[a].left, self[a].right);
        let (b_parent, b_left, b_right) = (self[b].parent, self[b].left, self[b].right);
        let a_side = self.side_of(a);
        let b_side = self.side_of(b);

        {
            let node = &mut self[a];
            node.parent = b_parent;
            node.left = b_left;
            node.right = b_right;
        }
        {
            let node = &mut self[b];
            node.parent = a_parent;
            node.left = a_left;
            node.right = a_right;
        }

        // adjacent nodes end up pointing at themselves
        if a_right == Some(b) {
            self[b].right = Some(a);
            self[a].parent = Some(b);
        } else if a_left == Some(b) {
            self[b].left = Some(a);
            self[a].parent = Some(b);
        } else if b_right == Some(a) {
            self[a].right = Some(b);
            self[b].parent = Some(a);
        } else if b_left == Some(a) {
            self[a].left = Some(b);
            self[b].parent = Some(a);
        }

        if a_parent != Some(b) {
            match (a_parent, a_side) {
                (Some(parent), Some(side)) => self[parent].set_child(side, Some(b)),
                _ => self.root = Some(b),
            }
        }
        for child in [a_left, a_right].iter().cloned().flatten() {
            if child != b {
                self[child].parent = Some(b);
            }
        }

        if b_parent != Some(a) {
            match (b_parent, b_side) {
                (Some(parent), Some(side)) => self[parent].set_child(side, Some(a)),
                _ => self.root = Some(a),
            }
        }
        for child in [b_left, b_right].iter().cloned().flatten() {
            if child != a {
                self[child].parent = Some(a);
            }
        }
    }

    /// Detaches a node that has at most one child, splicing the child into its place, and
    /// releases it.
    ///
    /// # Panics
    ///
    /// Panics if the node has two children.
    pub fn unlink(&mut self, id: NodeId) -> Node<T, U> {
        let (parent, left, right) = (self[id].parent, self[id].left, self[id].right);
        assert!(
            left.is_none() || right.is_none(),
            "Expected node to have at most one child."
        );
        let child = left.or(right);
        self.replace_child(id, child);
        if let Some(child) = child {
            self[child].parent = parent;
        }
        self.arena.free(id)
    }

    /// Removes a key without rebalancing. A node with two children first trades places with
    /// its in-order predecessor.
    pub fn remove<V>(&mut self, key: &V) -> Option<Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let id = self.find(key)?;
        if let (Some(left), Some(_)) = (self[id].left, self[id].right) {
            let predecessor = self.rightmost(left);
            self.swap_nodes(id, predecessor);
        }
        Some(self.unlink(id).entry)
    }

    /// Releases every node children first and returns how many were released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut stack: Vec<NodeId> = self.root.take().into_iter().collect();
        while let Some(&id) = stack.last() {
            let node = &mut self[id];
            if let Some(left) = node.left.take() {
                stack.push(left);
            } else if let Some(right) = node.right.take() {
                stack.push(right);
            } else {
                stack.pop();
                self.arena.free(id);
                released += 1;
            }
        }
        debug!("released {} nodes", released);
        released
    }

    /// Returns every node in in-order sequence by following successor links.
    pub fn in_order(&self) -> Vec<NodeId> {
        let mut ret = Vec::with_capacity(self.len());
        let mut curr = self.first();
        while let Some(id) = curr {
            ret.push(id);
            curr = self.successor(id);
        }
        ret
    }

    fn post_order(&self) -> Vec<NodeId> {
        let mut ret = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            ret.push(id);
            stack.extend(self[id].left);
            stack.extend(self[id].right);
        }
        ret.reverse();
        ret
    }

    fn subtree_heights(&self) -> HashMap<NodeId, usize> {
        let mut heights = HashMap::with_capacity(self.len());
        for id in self.post_order() {
            let height = cmp::max(
                link_height(&heights, self[id].left),
                link_height(&heights, self[id].right),
            ) + 1;
            heights.insert(id, height);
        }
        heights
    }

    pub fn height(&self) -> usize {
        let heights = self.subtree_heights();
        link_height(&heights, self.root)
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    pub fn is_balanced(&self) -> bool {
        let heights = self.subtree_heights();
        heights.keys().all(|&id| {
            let left = link_height(&heights, self[id].left);
            let right = link_height(&heights, self[id].right);
            cmp::max(left, right) - cmp::min(left, right) <= 1
        })
    }

    /// Returns `true` if every stored balance factor is in `{-1, 0, 1}` and equals the actual
    /// height difference of the node's subtrees.
    pub fn has_valid_balance_factors(&self) -> bool {
        let heights = self.subtree_heights();
        heights.keys().all(|&id| {
            let left = link_height(&heights, self[id].left) as i64;
            let right = link_height(&heights, self[id].right) as i64;
            let balance = i64::from(self[id].balance);
            balance.abs() <= 1 && balance == right - left
        })
    }

    /// Returns `true` if parent and child links agree, every live node is reachable from the
    /// root, and keys are strictly ascending in-order.
    pub fn is_well_formed(&self) -> bool
    where
        T: Ord,
    {
        if let Some(root) = self.root {
            if self[root].parent.is_some() {
                return false;
            }
        }

        let nodes = self.post_order();
        if nodes.len() != self.len() {
            return false;
        }
        let links_agree = nodes.iter().all(|&id| {
            let node = &self[id];
            node.left.map_or(true, |child| self[child].parent == Some(id))
                && node.right.map_or(true, |child| self[child].parent == Some(id))
        });
        if !links_agree {
            return false;
        }

        let order = self.in_order();
        order.len() == nodes.len()
            && order
                .windows(2)
                .all(|pair| self[pair[0]].entry.key < self[pair[1]].entry.key)
    }

    pub fn floor<V>(&self, key: &V) -> Link
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(id) = curr {
            curr = match key.cmp(self[id].entry.key.borrow()) {
                Ordering::Less => self[id].left,
                Ordering::Greater => {
                    ret = Some(id);
                    self[id].right
                },
                Ordering::Equal => return Some(id),
            };
        }
        ret
    }

    pub fn ceil<V>(&self, key: &V) -> Link
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(id) = curr {
            curr = match key.cmp(self[id].entry.key.borrow()) {
                Ordering::Greater => self[id].right,
                Ordering::Less => {
                    ret = Some(id);
                    self[id].left
                },
                Ordering::Equal => return Some(id),
            };
        }
        ret
    }

    /// Renders the tree sideways: the right subtree above its parent, the left below, each
    /// level indented by four spaces. Balance factors are appended when `with_balance` is set.
    pub fn render(&self, with_balance: bool) -> String
    where
        T: Debug,
    {
        let mut ret = String::new();
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let mut curr = self.root;
        let mut depth = 0;
        loop {
            while let Some(id) = curr {
                stack.push((id, depth));
                curr = self[id].right;
                depth += 1;
            }
            let (id, node_depth) = match stack.pop() {
                Some(pair) => pair,
                None => break,
            };
            let node = &self[id];
            for _ in 0..node_depth {
                ret.push_str("    ");
            }
            let line = if with_balance {
                format!("{:?} ({:+})\n", node.entry.key, node.balance)
            } else {
                format!("{:?}\n", node.entry.key)
            };
            ret.push_str(&line);
            curr = node.left;
            depth = node_depth + 1;
        }
        ret
    }
}

fn link_height(heights: &HashMap<NodeId, usize>, link: Link) -> usize {
    link.and_then(|id| heights.get(&id).cloned()).unwrap_or(0)
}

impl<T, U> Index<NodeId> for Tree<T, U> {
    type Output = Node<T, U>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.arena[id]
    }
}

impl<T, U> IndexMut<NodeId> for Tree<T, U> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.arena[id]
    }
}

#[cfg(test)]
mod tests {
    use super::{Placement, Tree};
    use crate::arena::NodeId;

    fn build(keys: &[u32]) -> Tree<u32, u32> {
        let mut tree = Tree::new();
        for &key in keys {
            tree.insert_leaf(key, key * 10);
        }
        tree
    }

    fn id(tree: &Tree<u32, u32>, key: u32) -> NodeId {
        tree.find(&key).unwrap()
    }

    fn keys(tree: &Tree<u32, u32>) -> Vec<u32> {
        tree.in_order().into_iter().map(|id| tree[id].entry.key).collect()
    }

    #[test]
    fn test_insert_leaf() {
        let mut tree = build(&[2, 1, 3]);
        let root = tree.root.unwrap();
        assert_eq!(tree[root].entry.key, 2);
        assert_eq!(tree[tree[root].left.unwrap()].entry.key, 1);
        assert_eq!(tree[tree[root].right.unwrap()].entry.key, 3);

        match tree.insert_leaf(1, 7) {
            Placement::Replaced(old) => assert_eq!(old, 10),
            Placement::Inserted(_) => panic!("Expected the value to be replaced."),
        }
        assert_eq!(tree.len(), 3);
        assert_eq!(tree[id(&tree, 1)].entry.value, 7);
    }

    #[test]
    fn test_find_missing() {
        let tree = build(&[2, 1, 3]);
        assert_eq!(tree.find(&4), None);
        assert_eq!(Tree::<u32, u32>::new().find(&4), None);
    }

    #[test]
    fn test_successor_predecessor() {
        let tree = build(&[5, 3, 8, 1, 4, 7, 9, 2, 6]);
        let mut curr = tree.first();
        let mut seen = Vec::new();
        while let Some(node) = curr {
            seen.push(tree[node].entry.key);
            curr = tree.successor(node);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let mut curr = tree.last();
        seen.clear();
        while let Some(node) = curr {
            seen.push(tree[node].entry.key);
            curr = tree.predecessor(node);
        }
        assert_eq!(seen, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_predecessor_without_left_subtree() {
        let tree = build(&[5, 3, 8, 4, 6]);
        // 6 has no left child so its predecessor is the ancestor reached through a right edge
        assert_eq!(tree.predecessor(id(&tree, 6)), Some(id(&tree, 5)));
        assert_eq!(tree.predecessor(id(&tree, 4)), Some(id(&tree, 3)));
        assert_eq!(tree.predecessor(id(&tree, 3)), None);
    }

    #[test]
    fn test_swap_unrelated_nodes() {
        let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);
        let (a, b) = (id(&tree, 1), id(&tree, 9));
        tree.swap_nodes(a, b);
        assert_eq!(tree[id(&tree, 3)].left, Some(b));
        assert_eq!(tree[id(&tree, 8)].right, Some(a));
        assert_eq!(tree[a].parent, Some(id(&tree, 8)));
        assert_eq!(tree[b].parent, Some(id(&tree, 3)));
        assert_eq!(keys(&tree), vec![9, 3, 4, 5, 7, 8, 1]);
    }

    #[test]
    fn test_swap_parent_and_child() {
        let mut tree = build(&[5, 3, 8, 1, 4]);
        let (parent, child) = (id(&tree, 3), id(&tree, 4));
        tree.swap_nodes(parent, child);
        assert_eq!(tree[tree.root.unwrap()].left, Some(child));
        assert_eq!(tree[child].right, Some(parent));
        assert_eq!(tree[child].left, Some(id(&tree, 1)));
        assert_eq!(tree[parent].parent, Some(child));
        assert_eq!(tree[id(&tree, 1)].parent, Some(child));
        assert!(tree[parent].is_leaf());

        // swapping back restores the original shape
        tree.swap_nodes(child, parent);
        assert_eq!(keys(&tree), vec![1, 3, 4, 5, 8]);
        assert!(tree.is_well_formed());
    }

    #[test]
    fn test_swap_root() {
        let mut tree = build(&[2, 1, 3]);
        let (root, left) = (id(&tree, 2), id(&tree, 1));
        tree.swap_nodes(root, left);
        assert_eq!(tree.root, Some(left));
        assert_eq!(tree[left].parent, None);
        assert_eq!(tree[left].left, Some(root));
        assert_eq!(tree[id(&tree, 3)].parent, Some(left));
    }

    #[test]
    fn test_remove_leaf_and_single_child() {
        let mut tree = build(&[5, 3, 8, 7]);
        assert_eq!(tree.remove(&3).map(|entry| entry.value), Some(30));
        assert_eq!(tree.remove(&8).map(|entry| entry.value), Some(80));
        assert_eq!(tree[id(&tree, 5)].right, Some(id(&tree, 7)));
        assert_eq!(tree[id(&tree, 7)].parent, Some(id(&tree, 5)));
        assert_eq!(keys(&tree), vec![5, 7]);
        assert!(tree.is_well_formed());
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);
        assert!(tree.remove(&5).is_some());
        let root = tree.root.unwrap();
        assert_eq!(tree[root].entry.key, 4);
        assert_eq!(keys(&tree), vec![1, 3, 4, 7, 8, 9]);
        assert!(tree.is_well_formed());
    }

    #[test]
    fn test_remove_root_chain() {
        let mut tree = build(&[1, 2, 3]);
        assert!(tree.remove(&1).is_some());
        assert_eq!(tree[tree.root.unwrap()].entry.key, 2);
        assert!(tree.remove(&2).is_some());
        assert!(tree.remove(&3).is_some());
        assert_eq!(tree.root, None);
        assert_eq!(tree.remove(&3).map(|entry| entry.key), None);
    }

    #[test]
    fn test_clear() {
        let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(tree.clear(), 7);
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root, None);
        tree.insert_leaf(1, 1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_height_and_balance() {
        let tree = build(&[2, 1, 3]);
        assert_eq!(tree.height(), 2);
        assert!(tree.is_balanced());

        let tree = build(&[1, 2, 3]);
        assert_eq!(tree.height(), 3);
        assert!(!tree.is_balanced());
        assert!(!tree.has_valid_balance_factors());
        assert_eq!(Tree::<u32, u32>::new().height(), 0);
    }

    #[test]
    fn test_floor_ceil() {
        let tree = build(&[3, 1, 5]);
        let key = |link: Option<NodeId>| link.map(|id| tree[id].entry.key);
        assert_eq!(key(tree.floor(&0)), None);
        assert_eq!(key(tree.floor(&2)), Some(1));
        assert_eq!(key(tree.floor(&5)), Some(5));
        assert_eq!(key(tree.ceil(&2)), Some(3));
        assert_eq!(key(tree.ceil(&6)), None);
    }

    #[test]
    fn test_render() {
        let tree = build(&[2, 1, 3]);
        assert_eq!(tree.render(false), "    3\n2\n    1\n");
        assert_eq!(tree.render(true), "    3 (+0)\n2 (+0)\n    1 (+0)\n");
    }
}
