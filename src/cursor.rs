//! Cursors over a [`Tree`].
//!
//! A tree remembers one position, its cursor. [`CursorMut`] moves that position and inserts
//! relative to it. [`Cursor`] starts from the same position but carries its own copy, so moving
//! it never disturbs the tree. Depth is measured with such a copy.
//!
//! # Examples
//!
//! ```
//! use cursor_bst::Tree;
//!
//! let mut tree = Tree::with_root(10);
//! let mut cursor = tree.cursor_mut();
//! cursor.insert(5);
//! assert_eq!(cursor.depth(), Some(1));
//!
//! // There is nothing left of 5.
//! assert!(!cursor.move_left());
//! assert!(cursor.move_up());
//! assert!(cursor.is_root().unwrap());
//!
//! // Peeking with a read-only cursor leaves the tree's cursor alone.
//! let mut peek = tree.cursor();
//! assert!(peek.move_left());
//! assert_eq!(peek.data(), Ok(&5));
//! assert_eq!(tree.cursor().data(), Ok(&10));
//! ```

use std::mem;

use tracing::{debug, instrument};

use crate::{Node, NodeId, NodeRef, Side, Tree, TreeError, TreeResult};

/// A read-only cursor. Copies of it move independently of each other and of the tree.
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    current: Option<NodeId>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, current: Option<NodeId>) -> Self {
        Self { tree, current }
    }

    /// The node under the cursor. `None` only when the tree is empty.
    pub fn current(&self) -> Option<NodeRef<'a, T>> {
        self.current.and_then(|id| self.tree.get(id))
    }

    fn node(&self) -> TreeResult<NodeRef<'a, T>> {
        self.current().ok_or(TreeError::EmptyTree)
    }

    /// The primary value of the node under the cursor.
    pub fn data(&self) -> TreeResult<&'a T> {
        self.node().map(|n| n.primary())
    }

    /// The secondary value of the node under the cursor.
    pub fn sub_data(&self) -> TreeResult<&'a T> {
        self.node().map(|n| n.secondary())
    }

    /// Whether the node under the cursor has no parent.
    pub fn is_root(&self) -> TreeResult<bool> {
        self.node().map(|n| n.is_root())
    }

    /// The left child of the node under the cursor.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.current()?.left()
    }

    /// The right child of the node under the cursor.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.current()?.right()
    }

    /// Moves to the child in the given slot. Returns `false`, without moving, when the cursor is
    /// unset or the slot is empty.
    pub fn move_child(&mut self, side: Side) -> bool {
        let target = self.current().and_then(|n| n.child(side));
        self.step_to(target)
    }

    /// Moves to the left child. See [`Cursor::move_child`].
    pub fn move_left(&mut self) -> bool {
        self.move_child(Side::Left)
    }

    /// Moves to the right child. See [`Cursor::move_child`].
    pub fn move_right(&mut self) -> bool {
        self.move_child(Side::Right)
    }

    /// Moves to the parent. Returns `false`, without moving, when the cursor is unset or on a
    /// parentless node.
    pub fn move_up(&mut self) -> bool {
        let target = self.current().and_then(|n| n.parent());
        self.step_to(target)
    }

    /// Moves to the root. Returns `false` only on an empty tree.
    pub fn move_to_root(&mut self) -> bool {
        let target = self.tree.root();
        self.step_to(target)
    }

    /// How many parent hops separate the cursor from a parentless node: 0 at the root, 1 for
    /// its children and so on. `None` when the cursor is unset. The cursor itself stays put.
    pub fn depth(&self) -> Option<usize> {
        let mut walker = *self;
        walker.current?;

        let mut hops = 0;
        while walker.move_up() {
            hops += 1;
        }
        Some(hops)
    }

    fn step_to(&mut self, target: Option<NodeRef<'a, T>>) -> bool {
        match target {
            Some(node) => {
                self.current = Some(node.id());
                true
            }
            None => false,
        }
    }
}

/// A cursor that owns the tree's cursor position for as long as it lives. Everything it does is
/// remembered by the tree afterwards.
pub struct CursorMut<'a, T> {
    tree: &'a mut Tree<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>) -> Self {
        Self { tree }
    }

    /// A read-only copy of this cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.tree, self.tree.current)
    }

    /// The node under the cursor.
    pub fn current(&self) -> Option<NodeRef<'_, T>> {
        self.as_cursor().current()
    }

    /// The primary value of the node under the cursor.
    pub fn data(&self) -> TreeResult<&T> {
        self.as_cursor().data()
    }

    /// The secondary value of the node under the cursor.
    pub fn sub_data(&self) -> TreeResult<&T> {
        self.as_cursor().sub_data()
    }

    /// Whether the node under the cursor has no parent.
    pub fn is_root(&self) -> TreeResult<bool> {
        self.as_cursor().is_root()
    }

    /// The left child of the node under the cursor.
    pub fn left(&self) -> Option<NodeRef<'_, T>> {
        self.as_cursor().left()
    }

    /// The right child of the node under the cursor.
    pub fn right(&self) -> Option<NodeRef<'_, T>> {
        self.as_cursor().right()
    }

    /// See [`Cursor::depth`].
    pub fn depth(&self) -> Option<usize> {
        self.as_cursor().depth()
    }

    fn current_node_mut(&mut self) -> TreeResult<&mut Node<T>> {
        let id = self.tree.current.ok_or(TreeError::EmptyTree)?;
        Ok(self.tree.node_mut(id))
    }

    /// Mutable access to the primary value under the cursor. Changing it does not move the
    /// node, so the caller is responsible for keeping the tree ordered.
    pub fn data_mut(&mut self) -> TreeResult<&mut T> {
        self.current_node_mut().map(|n| &mut n.primary)
    }

    /// Mutable access to the secondary value under the cursor.
    pub fn sub_data_mut(&mut self) -> TreeResult<&mut T> {
        self.current_node_mut().map(|n| &mut n.secondary)
    }

    /// Overwrites the primary value under the cursor, returning the old one.
    pub fn set_data(&mut self, primary: T) -> TreeResult<T> {
        self.data_mut().map(|slot| mem::replace(slot, primary))
    }

    /// Overwrites the secondary value under the cursor, returning the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::{Tree, TreeError};
    ///
    /// let mut empty = Tree::<i32>::new();
    /// assert_eq!(empty.cursor_mut().set_sub_data(1), Err(TreeError::EmptyTree));
    ///
    /// let mut tree = Tree::with_root_pair(1, 2);
    /// assert_eq!(tree.cursor_mut().set_sub_data(3), Ok(2));
    /// assert_eq!(tree.cursor().sub_data(), Ok(&3));
    /// ```
    pub fn set_sub_data(&mut self, secondary: T) -> TreeResult<T> {
        self.sub_data_mut().map(|slot| mem::replace(slot, secondary))
    }

    fn reposition(&mut self, step: impl FnOnce(&mut Cursor<'_, T>) -> bool) -> bool {
        let mut scout = self.as_cursor();
        let moved = step(&mut scout);
        let target = scout.current;
        if moved {
            self.tree.current = target;
        }
        moved
    }

    /// See [`Cursor::move_child`].
    pub fn move_child(&mut self, side: Side) -> bool {
        self.reposition(|c| c.move_child(side))
    }

    /// See [`Cursor::move_left`].
    pub fn move_left(&mut self) -> bool {
        self.reposition(|c| c.move_left())
    }

    /// See [`Cursor::move_right`].
    pub fn move_right(&mut self) -> bool {
        self.reposition(|c| c.move_right())
    }

    /// See [`Cursor::move_up`].
    pub fn move_up(&mut self) -> bool {
        self.reposition(|c| c.move_up())
    }

    /// Moves back to the root. Do this before inserting to order the new value against the
    /// whole tree rather than the cursor's subtree.
    ///
    /// Leaving a detached node this way releases it, together with everything inserted below
    /// it, since nothing can reach those nodes afterwards.
    pub fn move_to_root(&mut self) -> bool {
        self.tree.release_detached();
        self.reposition(|c| c.move_to_root())
    }

    /// Inserts `primary` with a default secondary value. See [`CursorMut::insert_pair`].
    pub fn insert(&mut self, primary: T) -> NodeId
    where
        T: Ord + Default,
    {
        self.insert_pair(primary, T::default())
    }

    /// Inserts a node holding both payloads, ordered from the cursor position, and moves the
    /// cursor onto it. On an empty tree the new node becomes the root.
    ///
    /// Starting at the cursor, the new primary value goes left of any node whose primary value
    /// is strictly greater and right otherwise, so equal values end up on the right. The search
    /// never looks above the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let mut cursor = tree.cursor_mut();
    /// cursor.insert_pair(5, 50);
    /// cursor.insert_pair(3, 30);
    ///
    /// // The cursor is on 3 now, so 4 lands right of 3 even though 4 < 5.
    /// cursor.insert_pair(4, 40);
    /// assert_eq!(cursor.depth(), Some(2));
    /// assert!(cursor.move_up());
    /// assert_eq!(cursor.data(), Ok(&3));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert_pair(&mut self, primary: T, secondary: T) -> NodeId
    where
        T: Ord,
    {
        let id = self.tree.place(self.tree.current, primary, secondary);
        if self.tree.root.is_none() {
            debug!(?id, "new node is the root");
            self.tree.root = Some(id);
        }
        self.tree.current = Some(id);
        id
    }

    /// Inserts the values held by `node`. Any links the node carried are ignored.
    pub fn insert_node(&mut self, node: Node<T>) -> NodeId
    where
        T: Ord,
    {
        let (primary, secondary) = node.into_values();
        self.insert_pair(primary, secondary)
    }

    /// Moves the cursor onto a brand new, default-valued node that is not linked into the tree.
    ///
    /// On an empty tree that node simply becomes the root. Otherwise the root and everything
    /// reachable from it stay as they were, but the cursor now sits on a parentless node outside
    /// the tree. Ordered inserts made from there attach below the detached node and are not
    /// reachable from the root either. The detached subtree lives only as long as the cursor
    /// stays in it: [`CursorMut::move_to_root`], or another call to this method, releases it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::Tree;
    ///
    /// let mut tree = Tree::with_root(7);
    /// let mut cursor = tree.cursor_mut();
    /// cursor.replace_with_detached();
    /// assert_eq!(cursor.data(), Ok(&0));
    /// assert!(cursor.is_root().unwrap());
    ///
    /// cursor.insert(9);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn replace_with_detached(&mut self) -> NodeId
    where
        T: Default,
    {
        self.tree.release_detached();
        let id = self.tree.alloc(Node::default());
        if self.tree.root.is_none() {
            debug!(?id, "new node is the root");
            self.tree.root = Some(id);
        } else {
            debug!(?id, "cursor moved to a detached node");
        }
        self.tree.current = Some(id);
        id
    }
}
