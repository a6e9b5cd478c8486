use crate::arena::NodeId;
use crate::bst::node::Side;
use crate::bst::tree::{Placement, Tree};
use crate::entry::Entry;
use std::borrow::Borrow;

/// Rotates `node` toward `direction`. The child on the opposite side becomes the root of the
/// subtree and its inner subtree is handed to `node`. Balance factors are left to the caller.
///
/// # Panics
///
/// Panics if `node` has no child on the side opposite to `direction`.
fn rotate<T, U>(tree: &mut Tree<T, U>, node: NodeId, direction: Side) {
    let pivot = tree[node]
        .child(direction.opposite())
        .expect("Expected rotation pivot to be `Some`.");
    trace!("rotating {:?} {:?} around {:?}", node, direction, pivot);

    let parent = tree[node].parent;
    tree.replace_child(node, Some(pivot));
    tree[pivot].parent = parent;

    let inner = tree[pivot].child(direction);
    tree[node].set_child(direction.opposite(), inner);
    if let Some(inner) = inner {
        tree[inner].parent = Some(node);
    }

    tree[pivot].set_child(direction, Some(node));
    tree[node].parent = Some(pivot);
}

pub fn rotate_left<T, U>(tree: &mut Tree<T, U>, node: NodeId) {
    rotate(tree, node, Side::Left);
}

pub fn rotate_right<T, U>(tree: &mut Tree<T, U>, node: NodeId) {
    rotate(tree, node, Side::Right);
}

// Balances of the lower and upper rotated nodes after a double rotation, given the balance
// the pivot had before it and the heavy direction. The pivot always ends at zero.
fn zig_zag_balances(pivot: i8, heavy: i8) -> (i8, i8) {
    if pivot == heavy {
        (0, -heavy)
    } else if pivot == -heavy {
        (heavy, 0)
    } else {
        (0, 0)
    }
}

/// Exchanges the positions of two nodes together with their balance factors, so each position
/// keeps the balance factor that describes it.
pub fn swap_nodes<T, U>(tree: &mut Tree<T, U>, a: NodeId, b: NodeId) {
    tree.swap_nodes(a, b);
    let balance = tree[a].balance;
    tree[a].balance = tree[b].balance;
    tree[b].balance = balance;
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    let id = match tree.insert_leaf(key, value) {
        Placement::Replaced(old_value) => return Some(old_value),
        Placement::Inserted(id) => id,
    };

    if let (Some(parent), Some(side)) = (tree[id].parent, tree.side_of(id)) {
        if tree[parent].balance == 0 {
            tree[parent].balance = side.delta();
            insert_fix(tree, parent, id);
        } else {
            // the new leaf filled the shorter side
            tree[parent].balance = 0;
        }
    }
    None
}

/// Walks up from a subtree whose height grew by one. `parent` already carries its new balance
/// and `child` is the child of `parent` on the grown side.
fn insert_fix<T, U>(tree: &mut Tree<T, U>, mut parent: NodeId, mut child: NodeId) {
    loop {
        let (grandparent, side) = match (tree[parent].parent, tree.side_of(parent)) {
            (Some(grandparent), Some(side)) => (grandparent, side),
            _ => return,
        };

        let heavy = side.delta();
        let balance = tree[grandparent].balance + heavy;
        tree[grandparent].balance = balance;

        if balance == 0 {
            return;
        }
        if balance == heavy {
            child = parent;
            parent = grandparent;
            continue;
        }

        if tree.side_of(child) == Some(side) {
            // zig-zig
            rotate(tree, grandparent, side.opposite());
            tree[parent].balance = 0;
            tree[grandparent].balance = 0;
        } else {
            // zig-zag
            rotate(tree, parent, side);
            rotate(tree, grandparent, side.opposite());
            let (parent_balance, grandparent_balance) =
                zig_zag_balances(tree[child].balance, heavy);
            tree[parent].balance = parent_balance;
            tree[grandparent].balance = grandparent_balance;
            tree[child].balance = 0;
        }
        trace!("insert fix-up stopped after rotating at {:?}", grandparent);
        return;
    }
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let id = tree.find(key)?;
    if let (Some(left), Some(_)) = (tree[id].left, tree[id].right) {
        let predecessor = tree.rightmost(left);
        swap_nodes(tree, id, predecessor);
    }

    let parent = tree[id].parent;
    let side = tree.side_of(id);
    let node = tree.unlink(id);
    if let (Some(parent), Some(side)) = (parent, side) {
        remove_fix(tree, parent, -side.delta());
    }
    Some(node.entry)
}

/// Walks up from `node` after one of its subtrees shrank by one level. `diff` is `+1` if the
/// left subtree shrank and `-1` if the right one did.
fn remove_fix<T, U>(tree: &mut Tree<T, U>, mut node: NodeId, mut diff: i8) {
    loop {
        let parent = tree[node].parent;
        let next_diff = match tree.side_of(node) {
            Some(side) => -side.delta(),
            None => 0,
        };

        let balance = tree[node].balance + diff;
        let shrank = match balance {
            0 => {
                tree[node].balance = 0;
                true
            },
            -1 | 1 => {
                tree[node].balance = balance;
                false
            },
            _ => rebalance_after_removal(tree, node, balance),
        };

        match parent {
            Some(parent) if shrank => {
                node = parent;
                diff = next_diff;
            },
            _ => {
                trace!("remove fix-up stopped at {:?}", node);
                return;
            },
        }
    }
}

// Restores a node whose balance reached +-2 and returns whether the rotated subtree ended up
// shorter than it was before the removal.
fn rebalance_after_removal<T, U>(tree: &mut Tree<T, U>, node: NodeId, balance: i8) -> bool {
    let heavy_side = if balance < 0 { Side::Left } else { Side::Right };
    let heavy = heavy_side.delta();
    let child = tree[node]
        .child(heavy_side)
        .expect("Expected taller child to be `Some`.");
    let child_balance = tree[child].balance;

    if child_balance == heavy {
        // zig-zig
        rotate(tree, node, heavy_side.opposite());
        tree[node].balance = 0;
        tree[child].balance = 0;
        true
    } else if child_balance == 0 {
        // zig-zig with an evenly balanced child keeps the height
        rotate(tree, node, heavy_side.opposite());
        tree[node].balance = heavy;
        tree[child].balance = -heavy;
        false
    } else {
        // zig-zag
        let grandchild = tree[child]
            .child(heavy_side.opposite())
            .expect("Expected inner grandchild to be `Some`.");
        rotate(tree, child, heavy_side);
        rotate(tree, node, heavy_side.opposite());
        let (child_balance, node_balance) = zig_zag_balances(tree[grandchild].balance, heavy);
        tree[child].balance = child_balance;
        tree[node].balance = node_balance;
        tree[grandchild].balance = 0;
        true
    }
}
