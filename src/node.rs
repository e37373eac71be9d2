//! Nodes of a [`Tree`] and borrowed views over them.
//!
//! A [`Node`] stores two payloads: the `primary` value, which orders the tree, and a `secondary`
//! value carried alongside it. Nodes live in the tree's arena and point at each other by
//! [`NodeId`]. Child links are the tree structure. The parent link is only a back-index used to
//! walk upwards, so nothing ever holds a second owning reference to a node.
//!
//! Reading a node that is part of a tree goes through a [`NodeRef`], which pairs the node with
//! the tree it lives in so that its relatives can be reached too.

use std::fmt;
use std::hash::{Hash, Hasher};

use generational_arena::Index;

use crate::{PreOrder, Tree};

/// Handle naming a node inside a [`Tree`]. Handles of released nodes go stale: looking them up
/// yields nothing rather than some newer node that reused the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Holds values strictly less than the parent's primary value.
    Left,
    /// Holds values greater than or equal to the parent's primary value.
    Right,
}

/// A single cell of a [`Tree`].
///
/// Nodes built by callers carry no links. They are only useful as the argument of
/// [`CursorMut::insert_node`][crate::CursorMut::insert_node], which copies their values into a
/// freshly placed node.
///
/// # Examples
///
/// ```
/// use cursor_bst::Node;
///
/// let empty: Node<i32> = Node::default();
/// assert_eq!((empty.primary(), empty.secondary()), (&0, &0));
///
/// let node = Node::with_secondary(3, 9);
/// assert_eq!((node.primary(), node.secondary()), (&3, &9));
/// assert!(node.is_root());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Node<T> {
    pub(crate) primary: T,
    pub(crate) secondary: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// Creates a node holding `primary` and a default secondary value.
    pub fn new(primary: T) -> Self
    where
        T: Default,
    {
        Self::with_secondary(primary, T::default())
    }

    /// Creates a node holding both payloads.
    pub fn with_secondary(primary: T, secondary: T) -> Self {
        Self {
            primary,
            secondary,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// Creates a node that already knows its parent. The parent's child slot is set separately
    /// by the caller.
    pub(crate) fn attached(primary: T, secondary: T, parent: NodeId) -> Self {
        Self {
            parent: Some(parent),
            ..Self::with_secondary(primary, secondary)
        }
    }

    /// The value used for ordering.
    pub fn primary(&self) -> &T {
        &self.primary
    }

    /// The value carried alongside the primary one.
    pub fn secondary(&self) -> &T {
        &self.secondary
    }

    /// `true` when this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Consumes the node, returning `(primary, secondary)`.
    pub fn into_values(self) -> (T, T) {
        (self.primary, self.secondary)
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: NodeId) {
        match side {
            Side::Left => self.left = Some(child),
            Side::Right => self.right = Some(child),
        }
    }
}

/// A borrowed view of one node in a [`Tree`].
///
/// Equality and hashing are structural: two views are equal when their primary and secondary
/// values, their root flags and their whole left and right subtrees are equal. Where the nodes
/// live (and their ids) does not matter.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
    node: &'a Node<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId, node: &'a Node<T>) -> Self {
        Self { tree, id, node }
    }

    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value used for ordering.
    pub fn primary(&self) -> &'a T {
        &self.node.primary
    }

    /// The value carried alongside the primary one.
    pub fn secondary(&self) -> &'a T {
        &self.node.secondary
    }

    /// `true` when this node has no parent. That holds for the root and for detached nodes.
    pub fn is_root(&self) -> bool {
        self.node.is_root()
    }

    /// The parent of this node.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node.parent.and_then(|id| self.tree.get(id))
    }

    /// The left child of this node.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.child(Side::Left)
    }

    /// The right child of this node.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.child(Side::Right)
    }

    /// The child in the given slot.
    pub fn child(&self, side: Side) -> Option<NodeRef<'a, T>> {
        self.node.child(side).and_then(|id| self.tree.get(id))
    }

    /// Which slot of its parent this node occupies, or `None` for a parentless node.
    pub fn side(&self) -> Option<Side> {
        let parent = self.parent()?;
        if parent.node.left == Some(self.id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }
}

impl<T: PartialEq> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(*self, *other)];
        while let Some((a, b)) = pending.pop() {
            if a.primary() != b.primary()
                || a.secondary() != b.secondary()
                || a.is_root() != b.is_root()
            {
                return false;
            }
            for side in [Side::Left, Side::Right] {
                match (a.child(side), b.child(side)) {
                    (Some(a), Some(b)) => pending.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for NodeRef<'_, T> {}

impl<T: Hash> Hash for NodeRef<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![*self];
        while let Some(node) = pending.pop() {
            node.primary().hash(state);
            node.secondary().hash(state);
            node.is_root().hash(state);
            node.node.left.is_some().hash(state);
            node.node.right.is_some().hash(state);
            pending.extend(node.right());
            pending.extend(node.left());
        }
    }
}

/// Lists the subtree in pre-order, one entry per node, so deep chains format without recursing.
impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(PreOrder::new(Some(*self)).map(Entry))
            .finish()
    }
}

struct Entry<'a, T>(NodeRef<'a, T>);

impl<T> fmt::Debug for Entry<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("primary", self.0.primary())
            .field("secondary", self.0.secondary())
            .field("is_root", &self.0.is_root())
            .field("side", &self.0.side())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.primary(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn build(values: &[(i32, i32)]) -> Tree<i32> {
        let mut tree = Tree::new();
        let mut cursor = tree.cursor_mut();
        for &(primary, secondary) in values {
            cursor.move_to_root();
            cursor.insert_pair(primary, secondary);
        }
        tree
    }

    #[test]
    fn constructors_default_the_missing_values() {
        let node = Node::new(7);
        assert_eq!(node.primary(), &7);
        assert_eq!(node.secondary(), &0);
        assert!(node.is_root());

        let node = Node::<String>::default();
        assert_eq!(node.into_values(), (String::new(), String::new()));
    }

    #[test]
    fn side_reports_the_parent_slot() {
        let tree = build(&[(5, 0), (3, 0), (8, 0)]);
        let root = tree.root().unwrap();

        assert_eq!(root.side(), None);
        assert_eq!(root.left().unwrap().side(), Some(Side::Left));
        assert_eq!(root.right().unwrap().side(), Some(Side::Right));
        assert_eq!(root.left().unwrap().parent().map(|p| p.id()), Some(root.id()));
    }

    #[test]
    fn structural_equality_ignores_insertion_history() {
        // Same shape and values, but the second tree allocated a detached node in between.
        let a = build(&[(5, 1), (3, 2), (8, 3)]);
        let mut b = Tree::with_root_pair(5, 1);
        let mut cursor = b.cursor_mut();
        cursor.replace_with_detached();
        cursor.move_to_root();
        cursor.insert_pair(3, 2);
        cursor.move_to_root();
        cursor.insert_pair(8, 3);

        assert_eq!(a.root(), b.root());
        assert_eq!(hash_of(&a.root().unwrap()), hash_of(&b.root().unwrap()));
    }

    #[test]
    fn structural_equality_sees_secondary_and_shape() {
        let a = build(&[(5, 1), (3, 2)]);
        let b = build(&[(5, 1), (3, 9)]);
        let c = build(&[(5, 1), (7, 2)]);

        assert_ne!(a.root(), b.root());
        assert_ne!(a.root(), c.root());

        // A subtree is never equal to a whole tree because the root flag differs.
        let d = build(&[(3, 2)]);
        assert_ne!(a.root().unwrap().left(), d.root());
    }

    #[test]
    fn debug_lists_the_subtree_in_pre_order() {
        let tree = build(&[(5, 1), (3, 2)]);
        assert_eq!(
            format!("{:?}", tree.root().unwrap()),
            "[Node { primary: 5, secondary: 1, is_root: true, side: None }, \
             Node { primary: 3, secondary: 2, is_root: false, side: Some(Left) }]"
        );
    }

    #[test]
    fn debug_handles_a_long_chain() {
        let mut tree = Tree::new();
        let mut cursor = tree.cursor_mut();
        for x in 0..100_000 {
            cursor.insert(x);
        }

        let printed = format!("{:?}", tree.root().unwrap());
        assert_eq!(printed.matches("Node {").count(), 100_000);
    }

    #[test]
    fn display_prints_the_primary_value() {
        let tree = build(&[(42, 1)]);
        assert_eq!(tree.root().unwrap().to_string(), "42");
    }
}
