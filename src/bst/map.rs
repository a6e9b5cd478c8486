use crate::bst::iter::{Iter, IterMut};
use crate::bst::tree::{Placement, Tree};
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::fmt::Debug;

/// An ordered map implemented using an unbalanced binary search tree.
///
/// Keys are placed by plain binary search descent and the shape of the tree depends entirely on
/// the order of insertion, so operations take time proportional to the height of the tree. A
/// node with two children is removed by first swapping it with its in-order predecessor.
///
/// # Examples
///
/// ```
/// use avl_collections::bst::BstMap;
///
/// let mut map = BstMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct BstMap<T, U> {
    tree: Tree<T, U>,
}

impl<T, U> BstMap<T, U> {
    /// Constructs a new, empty `BstMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::bst::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// ```
    pub fn new() -> Self {
        BstMap { tree: Tree::new() }
    }

    /// Constructs a new, empty `BstMap<T, U>` with room for `capacity` entries before the
    /// node arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        BstMap {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, the value
    /// is overwritten in place and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        match self.tree.insert_leaf(key, value) {
            Placement::Replaced(old_value) => Some(old_value),
            Placement::Inserted(_) => None,
        }
    }

    /// Removes a key-value pair from the map. Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.remove(key).map(|entry| (entry.key, entry.value))
    }

    /// Checks if a key exists in the map.
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `None` if such a key does not exist.
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let tree = &self.tree;
        tree.find(key).map(|id| &tree[id].entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns
    /// `None` if such a key does not exist.
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let id = self.tree.find(key)?;
        Some(&mut self.tree[id].entry.value)
    }

    /// Returns an immutable reference to the value associated with a particular key, or
    /// `Error::KeyNotFound` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::bst::BstMap;
    /// use avl_collections::Error;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.at(&1), Ok(&1));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn at<V>(&self, key: &V) -> Result<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with a particular key, or
    /// `Error::KeyNotFound` if the key does not exist.
    pub fn at_mut<V>(&mut self, key: &V) -> Result<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns an iterator positioned at a particular key. The iterator is exhausted if the key
    /// does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.find(&1);
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(map.find(&3).next(), None);
    /// ```
    pub fn find<V>(&self, key: &V) -> Iter<T, U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        Iter::new(&self.tree, self.tree.find(key))
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, releasing every node.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the height of the tree. An empty tree has a height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// for key in 0..4 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.height(), 4);
    /// assert!(!map.is_balanced());
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.tree.is_balanced()
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let tree = &self.tree;
        tree.floor(key).map(|id| &tree[id].entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let tree = &self.tree;
        tree.ceil(key).map(|id| &tree[id].entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&T> {
        let tree = &self.tree;
        tree.first().map(|id| &tree[id].entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&T> {
        let tree = &self.tree;
        tree.last().map(|id| &tree[id].entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs in ascending
    /// key order.
    pub fn iter(&self) -> Iter<T, U> {
        Iter::new(&self.tree, self.tree.first())
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs in
    /// ascending key order.
    pub fn iter_mut(&mut self) -> IterMut<T, U> {
        IterMut::new(&mut self.tree)
    }

    /// Renders the keys of the tree sideways, one per line, with the right subtree above its
    /// parent.
    pub fn pretty_print(&self) -> String
    where
        T: Debug,
    {
        self.tree.render(false)
    }
}

tree_map_traits!(BstMap);
