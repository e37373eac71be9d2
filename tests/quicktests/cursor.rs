use cursor_bst::{Cursor, CursorMut, Side, Tree};

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Builds a tree by inserting every value from the root.
fn from_root(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    let mut cursor = tree.cursor_mut();
    for x in xs {
        cursor.move_to_root();
        cursor.insert_pair(*x, x.wrapping_neg());
    }
    tree
}

/// Applies one operation, returning `true` when it was an insert.
fn do_op(cursor: &mut CursorMut<'_, i8>, op: &Op<i8>) -> bool {
    match *op {
        Op::Insert(x, y) => {
            cursor.insert_pair(x, y);
            true
        }
        Op::InsertFromRoot(x, y) => {
            cursor.move_to_root();
            cursor.insert_pair(x, y);
            true
        }
        Op::MoveLeft => {
            cursor.move_left();
            false
        }
        Op::MoveRight => {
            cursor.move_right();
            false
        }
        Op::MoveUp => {
            cursor.move_up();
            false
        }
    }
}

/// Walks the whole subtree below `cursor` using only cursor moves, checking at every node that
/// going up and back down the same side lands where we started, and that the depth matches.
fn walk(cursor: &mut Cursor<'_, i8>, level: usize) -> bool {
    if cursor.depth() != Some(level) {
        return false;
    }
    for side in [Side::Left, Side::Right] {
        if !cursor.move_child(side) {
            continue;
        }
        let here = cursor.current().map(|n| n.id());
        if !(cursor.move_up() && cursor.move_child(side)) {
            return false;
        }
        if cursor.current().map(|n| n.id()) != here || !walk(cursor, level + 1) {
            return false;
        }
        if !cursor.move_up() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn in_order_is_sorted_when_inserting_from_root(xs: Vec<i8>) -> bool {
    let tree = from_root(&xs);
    let visited: Vec<i8> = tree.in_order().map(|n| *n.primary()).collect();

    let mut expected = xs;
    expected.sort();
    visited == expected
}

#[quickcheck]
fn every_insert_adds_one_node(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut expected = 0;
    for op in &ops {
        if do_op(&mut tree.cursor_mut(), op) {
            expected += 1;
        }
        if tree.len() != expected {
            return false;
        }
    }
    true
}

#[quickcheck]
fn up_then_back_down_returns_to_the_same_node(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    {
        let mut cursor = tree.cursor_mut();
        for op in &ops {
            do_op(&mut cursor, op);
        }
    }

    let mut cursor = tree.cursor();
    cursor.move_to_root();
    tree.is_empty() || walk(&mut cursor, 0)
}

#[quickcheck]
fn depth_counts_parent_hops(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    {
        let mut cursor = tree.cursor_mut();
        for op in &ops {
            do_op(&mut cursor, op);
        }
    }

    let hops = tree
        .cursor()
        .current()
        .map(|node| std::iter::successors(node.parent(), |n| n.parent()).count());
    tree.cursor().depth() == hops
}

#[quickcheck]
fn pre_order_lists_every_node_once(xs: Vec<i8>) -> bool {
    let tree = from_root(&xs);
    let listed = tree.to_ordered_list();

    let ids: HashSet<_> = listed.iter().map(|n| n.id()).collect();
    listed.len() == xs.len()
        && ids.len() == xs.len()
        && listed.first().map(|n| n.is_root()).unwrap_or(true)
        && listed.iter().skip(1).all(|n| !n.is_root())
}

#[quickcheck]
fn clones_compare_equal(xs: Vec<i8>) -> bool {
    let tree = from_root(&xs);
    tree.clone() == tree
}
