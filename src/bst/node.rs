use crate::arena::NodeId;
use crate::entry::Entry;

pub type Link = Option<NodeId>;

/// The side of a parent a child hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The change in balance factor caused by one extra level of height on this side.
    pub fn delta(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// A struct representing an internal node of a binary search tree.
///
/// `balance` is the height of the right subtree minus the height of the left subtree. Only the
/// avl tree maintains it; an unbalanced tree leaves it at zero.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub balance: i8,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U, parent: Link) -> Self {
        Node {
            entry: Entry { key, value },
            balance: 0,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: Link) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, Side};

    #[test]
    fn test_side() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Left.delta(), -1);
        assert_eq!(Side::Right.delta(), 1);
    }

    #[test]
    fn test_new_node() {
        let node = Node::new(1, 2, None);
        assert_eq!(node.balance, 0);
        assert!(node.is_leaf());
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.child(Side::Right), None);
    }
}
