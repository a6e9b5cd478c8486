use crate::avl_tree::tree;
use crate::bst::iter::{Iter, IterMut};
use crate::bst::tree::Tree;
use crate::error::{Error, Result};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::result;

// Upper bound on the arena space reserved from an untrusted size hint while deserializing.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. Every node stores its
/// balance factor, the height of its right subtree minus the height of its left subtree, and
/// insertions and removals walk up from the point of mutation adjusting balance factors and
/// rotating wherever a factor reaches two.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
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
pub struct AvlMap<T, U> {
    tree: Tree<T, U>,
}

impl<T, U> AvlMap<T, U> {
    /// Constructs a new, empty `AvlMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap { tree: Tree::new() }
    }

    /// Constructs a new, empty `AvlMap<T, U>` with room for `capacity` entries before the node
    /// arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::with_capacity(1024);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        AvlMap {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, the value is
    /// overwritten in place, the shape of the tree is unchanged, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        tree::insert(&mut self.tree, key, value)
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the map untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::remove(&mut self.tree, key).map(|entry| (entry.key, entry.value))
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let tree = &self.tree;
        tree.find(key).map(|id| &tree[id].entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let id = self.tree.find(key)?;
        Some(&mut self.tree[id].entry.value)
    }

    /// Returns an immutable reference to the value associated with a particular key. Unlike
    /// indexing, a missing key is reported as `Error::KeyNotFound` instead of panicking, and no
    /// entry is ever created.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    /// use avl_collections::Error;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.at(&1), Ok(&1));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// assert_eq!(map.len(), 1);
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
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.at_mut(&1).unwrap() += 1;
    /// assert_eq!(map[&1], 2);
    /// assert!(map.at_mut(&2).is_err());
    /// ```
    pub fn at_mut<V>(&mut self, key: &V) -> Result<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns an iterator positioned at a particular key. Advancing the iterator yields the
    /// following entries in ascending order. If the key does not exist, the iterator is already
    /// exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    ///
    /// let mut iterator = map.find(&2);
    /// assert_eq!(iterator.peek(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), Some((&3, &3)));
    /// assert_eq!(iterator.next(), None);
    ///
    /// assert_eq!(map.find(&4).peek(), None);
    /// ```
    pub fn find<V>(&self, key: &V) -> Iter<T, U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        Iter::new(&self.tree, self.tree.find(key))
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, releasing every node. The map behaves like a freshly constructed one
    /// afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the height of the tree. An empty tree has a height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// for key in 1..8 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    /// The map maintains this incrementally, so this is a diagnostic.
    pub fn is_balanced(&self) -> bool {
        self.tree.is_balanced()
    }

    /// Returns `true` if the tree is a valid avl tree: keys ascend in-order, parent and child
    /// links agree, and every stored balance factor is in `{-1, 0, 1}` and matches the actual
    /// height difference of the node's subtrees.
    pub fn is_valid(&self) -> bool
    where
        T: Ord,
    {
        self.tree.is_well_formed() && self.tree.has_valid_balance_factors()
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
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
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let tree = &self.tree;
        tree.ceil(key).map(|id| &tree[id].entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        let tree = &self.tree;
        tree.first().map(|id| &tree[id].entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        let tree = &self.tree;
        tree.last().map(|id| &tree[id].entry.key)
    }

    /// Returns an iterator over the map. The iterator starts at the minimum key and advances to
    /// each in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T, U> {
        Iter::new(&self.tree, self.tree.first())
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<T, U> {
        IterMut::new(&mut self.tree)
    }

    /// Renders the tree sideways with each key followed by its balance factor. The right subtree
    /// is printed above its parent and every level is indented by four spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, ());
    /// map.insert(2, ());
    /// assert_eq!(map.pretty_print(), "    2 (+0)\n1 (+1)\n");
    /// ```
    pub fn pretty_print(&self) -> String
    where
        T: Debug,
    {
        self.tree.render(true)
    }
}

tree_map_traits!(AvlMap);

impl<T, U> Serialize for AvlMap<T, U>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct AvlMapVisitor<T, U> {
    marker: PhantomData<AvlMap<T, U>>,
}

impl<'de, T, U> Visitor<'de> for AvlMapVisitor<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    type Value = AvlMap<T, U>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = cmp::min(access.size_hint().unwrap_or(0), MAX_PREALLOCATED_ENTRIES);
        let mut map = AvlMap::with_capacity(capacity);
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T, U> Deserialize<'de> for AvlMap<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AvlMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AvlMap;
    use crate::error::Error;
    use serde_test::{assert_de_tokens, assert_tokens, Token};
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_len_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert!(map.is_empty());
        assert!(map.is_valid());
        assert_eq!(map.height(), 0);
    }

    #[test]
    fn test_min_max_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = AvlMap::new();
        for key in 0..10 {
            map.insert(key, key);
        }
        let before = map.pretty_print();
        assert_eq!(map.insert(3, 30), Some(3));
        assert_eq!(map.get(&3), Some(&30));
        assert_eq!(map.pretty_print(), before);
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn test_remove() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut map = AvlMap::new();
        for key in 0..10 {
            map.insert(key, key);
        }
        let before = map.pretty_print();
        assert_eq!(map.remove(&42), None);
        assert_eq!(map.pretty_print(), before);
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn test_reinsert_after_remove() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.remove(&1);
        assert_eq!(map.get(&1), None);
        assert_eq!(map.insert(1, 3), None);
        assert_eq!(map.get(&1), Some(&3));
        assert!(map.is_valid());
    }

    #[test]
    fn test_min_max() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_at() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        assert_eq!(map.at(&1), Ok(&1));
        assert_eq!(map.at(&2), Err(Error::KeyNotFound));
        assert_eq!(map.len(), 1);
    }

    #[test]
    #[should_panic]
    fn test_index_missing() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        let _ = map[&1];
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_sequential_insert() {
        let mut map = AvlMap::new();
        for key in 1..8 {
            map.insert(key, key);
            assert!(map.is_valid());
        }
        assert_eq!(map.height(), 3);
        assert!(map.is_balanced());
        assert_eq!(
            map.pretty_print(),
            "        7 (+0)\n    6 (+0)\n        5 (+0)\n4 (+0)\n        3 (+0)\n    2 (+0)\n        1 (+0)\n",
        );
    }

    #[test]
    fn test_find() {
        let mut map = AvlMap::new();
        for key in 0..5 {
            map.insert(key, key * 2);
        }
        assert_eq!(
            map.find(&2).collect::<Vec<(&u32, &u32)>>(),
            vec![(&2, &4), (&3, &6), (&4, &8)],
        );
        assert_eq!(map.find(&7).next(), None);
    }

    #[test]
    fn test_clear_releases_every_value() {
        let drops = Rc::new(Cell::new(0));
        let mut map = AvlMap::new();
        for key in 0..100 {
            map.insert(key, DropCounter(drops.clone()));
        }
        map.clear();
        assert_eq!(drops.get(), 100);
        assert!(map.is_empty());
        assert_eq!(map.min(), None);

        map.insert(1, DropCounter(drops.clone()));
        assert_eq!(map.len(), 1);
        assert!(map.is_valid());
        drop(map);
        assert_eq!(drops.get(), 101);
    }

    #[test]
    fn test_remove_releases_value() {
        let drops = Rc::new(Cell::new(0));
        let mut map = AvlMap::new();
        for key in 0..10 {
            map.insert(key, DropCounter(drops.clone()));
        }
        map.remove(&4);
        map.remove(&4);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_into_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_from_iter() {
        let map: AvlMap<u32, char> = vec![(2, 'b'), (1, 'a'), (2, 'c')].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'c'}");
    }

    #[test]
    fn test_serde() {
        let mut map = AvlMap::new();
        map.insert(2, 'b');
        map.insert(1, 'a');

        assert_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::I32(1),
                Token::Char('a'),
                Token::I32(2),
                Token::Char('b'),
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_oversized_len() {
        assert_de_tokens(
            &AvlMap::<u32, u32>::new(),
            &[Token::Map { len: Some(usize::MAX / 2) }, Token::MapEnd],
        );

        let mut map: AvlMap<u32, char> = AvlMap::new();
        map.insert(1, 'a');
        assert_de_tokens(
            &map,
            &[
                Token::Map { len: Some(usize::MAX) },
                Token::U32(1),
                Token::Char('a'),
                Token::MapEnd,
            ],
        );
    }
}
