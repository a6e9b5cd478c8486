/// Implements the iteration, comparison, collection and indexing traits shared by the tree maps.
///
/// The map type must wrap a `Tree<T, U>` in a field named `tree` and provide `new`, `len`,
/// `insert`, `get`, `get_mut`, `iter` and `iter_mut`.
macro_rules! tree_map_traits {
    ($map:ident) => {
        impl<T, U> IntoIterator for $map<T, U> {
            type IntoIter = $crate::bst::IntoIter<T, U>;
            type Item = (T, U);

            fn into_iter(self) -> Self::IntoIter {
                $crate::bst::IntoIter::new(self.tree)
            }
        }

        impl<'a, T, U> IntoIterator for &'a $map<T, U>
        where
            T: 'a,
            U: 'a,
        {
            type IntoIter = $crate::bst::Iter<'a, T, U>;
            type Item = (&'a T, &'a U);

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<'a, T, U> IntoIterator for &'a mut $map<T, U>
        where
            T: 'a,
            U: 'a,
        {
            type IntoIter = $crate::bst::IterMut<'a, T, U>;
            type Item = (&'a T, &'a mut U);

            fn into_iter(self) -> Self::IntoIter {
                self.iter_mut()
            }
        }

        impl<T, U> Default for $map<T, U> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T, U> std::fmt::Debug for $map<T, U>
        where
            T: std::fmt::Debug,
            U: std::fmt::Debug,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.debug_map().entries(self.iter()).finish()
            }
        }

        impl<T, U> PartialEq for $map<T, U>
        where
            T: PartialEq,
            U: PartialEq,
        {
            fn eq(&self, other: &$map<T, U>) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<T, U> Eq for $map<T, U>
        where
            T: Eq,
            U: Eq,
        {
        }

        impl<T, U> Extend<(T, U)> for $map<T, U>
        where
            T: Ord,
        {
            fn extend<I>(&mut self, iter: I)
            where
                I: IntoIterator<Item = (T, U)>,
            {
                for (key, value) in iter {
                    self.insert(key, value);
                }
            }
        }

        impl<T, U> std::iter::FromIterator<(T, U)> for $map<T, U>
        where
            T: Ord,
        {
            fn from_iter<I>(iter: I) -> Self
            where
                I: IntoIterator<Item = (T, U)>,
            {
                let mut map = $map::new();
                map.extend(iter);
                map
            }
        }

        impl<'a, T, U, V> std::ops::Index<&'a V> for $map<T, U>
        where
            T: std::borrow::Borrow<V>,
            V: Ord + ?Sized,
        {
            type Output = U;

            fn index(&self, key: &V) -> &Self::Output {
                self.get(key).expect("Error: key does not exist.")
            }
        }

        impl<'a, T, U, V> std::ops::IndexMut<&'a V> for $map<T, U>
        where
            T: std::borrow::Borrow<V>,
            V: Ord + ?Sized,
        {
            fn index_mut(&mut self, key: &V) -> &mut Self::Output {
                self.get_mut(key).expect("Error: key does not exist.")
            }
        }
    };
}
