//! The tree itself: an arena of [`Node`]s, the root link and the persisted cursor position.
//!
//! Placement never rebalances, and it starts from wherever the cursor is rather than from the
//! root. Inserting after moving the cursor therefore orders the new value only against the
//! cursor's subtree. Call [`CursorMut::move_to_root`] before each insert to keep the whole tree
//! ordered.
//!
//! # Examples
//!
//! ```
//! use cursor_bst::Tree;
//!
//! let mut tree = Tree::new();
//! let mut cursor = tree.cursor_mut();
//! cursor.insert(3);
//! cursor.insert_pair(4, 9);
//! cursor.insert_pair(5, 10);
//!
//! // Every insert started at the node inserted before it, so this is a chain to the right.
//! let listed: Vec<_> = tree
//!     .iter()
//!     .map(|n| (*n.primary(), *n.secondary(), n.is_root()))
//!     .collect();
//! assert_eq!(listed, [(3, 0, true), (4, 9, false), (5, 10, false)]);
//! assert_eq!(tree.cursor().depth(), Some(2));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use generational_arena::Arena;
use tracing::debug;

use crate::{Cursor, CursorMut, InOrder, Node, NodeId, NodeRef, PreOrder, Side};

/// An unbalanced Binary Search Tree with a cursor. Inserting, moving around and reading values
/// all go through [`Tree::cursor`] and [`Tree::cursor_mut`].
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) current: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        // Ids are arena indices, so a slot-for-slot copy keeps every link valid.
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            current: self.current,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root())
            .field("current", &self.current)
            .finish()
    }
}

/// Two trees are equal when their roots and their cursor nodes are structurally equal.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root() && self.cursor().current() == other.cursor().current()
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Hash> Hash for Tree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root().hash(state);
        self.cursor().current().hash(state);
    }
}

/// Shows the primary value under the cursor. An empty tree shows nothing.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cursor().current() {
            Some(node) => fmt::Display::fmt(&node, f),
            None => Ok(()),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = PreOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`. It has no root and its cursor is unset.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            current: None,
        }
    }

    /// Generates a `Tree` whose root holds `primary` and a default secondary value. The cursor
    /// starts at the root.
    pub fn with_root(primary: T) -> Self
    where
        T: Default,
    {
        Self::with_root_pair(primary, T::default())
    }

    /// Generates a `Tree` whose root holds both payloads. The cursor starts at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::Tree;
    ///
    /// let tree = Tree::with_root_pair("key", "value");
    /// assert_eq!(tree.cursor().data(), Ok(&"key"));
    /// assert_eq!(tree.cursor().sub_data(), Ok(&"value"));
    /// ```
    pub fn with_root_pair(primary: T, secondary: T) -> Self {
        let mut tree = Self::new();
        let root = tree.alloc(Node::with_secondary(primary, secondary));
        tree.root = Some(root);
        tree.current = Some(root);
        tree
    }

    /// The root node, if the tree has one.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.and_then(|id| self.get(id))
    }

    /// Looks a node up by its handle. Handles of released nodes yield `None`.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.nodes.get(id.0).map(|node| NodeRef::new(self, id, node))
    }

    /// `true` when the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes reachable from the root. Detached nodes are not counted. This walks the
    /// whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the nodes reachable from the root in pre-order: a node, then its left
    /// subtree, then its right subtree.
    pub fn iter(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Iterates over the nodes reachable from the root in order: left subtree, node, right
    /// subtree. When every insert started at the root this yields non-decreasing primary values.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let mut cursor = tree.cursor_mut();
    /// for x in [5, 2, 8, 2, 6] {
    ///     cursor.move_to_root();
    ///     cursor.insert(x);
    /// }
    ///
    /// let sorted: Vec<_> = tree.in_order().map(|n| *n.primary()).collect();
    /// assert_eq!(sorted, [2, 2, 5, 6, 8]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Collects the nodes reachable from the root in pre-order. An empty tree gives an empty
    /// list.
    pub fn to_ordered_list(&self) -> Vec<NodeRef<'_, T>> {
        self.iter().collect()
    }

    /// A read-only cursor starting at the tree's cursor position. Moving it does not move the
    /// tree's cursor.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.current)
    }

    /// A cursor that moves the tree's own cursor position and inserts relative to it.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Releases every node and empties the tree, returning how many nodes were released.
    ///
    /// Nodes reachable from the root go first, in pre-order, each dropping its primary value and
    /// then its secondary value. The detached subtree holding the cursor, if there is one,
    /// follows. Calling this on an empty tree does nothing and returns 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::Tree;
    ///
    /// let mut tree = Tree::with_root(1);
    /// tree.cursor_mut().insert(2);
    ///
    /// assert_eq!(tree.clear(), 2);
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.clear(), 0);
    /// ```
    pub fn clear(&mut self) -> usize {
        let released = self.nodes.len();
        if released == 0 {
            return 0;
        }

        let order: Vec<NodeId> = self.iter().map(|n| n.id()).collect();
        self.root = None;
        self.current = None;
        for id in order {
            self.nodes.remove(id.0);
        }
        // Only the detached subtree holding the cursor can be left.
        self.nodes.clear();

        debug!(released, "released tree nodes");
        released
    }

    /// The parentless node above the cursor, when that node is not the root.
    fn detached_top(&self) -> Option<NodeId> {
        let mut at = self.current?;
        while let Some(parent) = self.node(at).parent {
            at = parent;
        }
        (Some(at) != self.root).then_some(at)
    }

    /// Releases the detached subtree holding the cursor, in pre-order, and puts the cursor back
    /// on the root. Returns how many nodes were released, 0 when the cursor was in the tree.
    pub(crate) fn release_detached(&mut self) -> usize {
        let Some(top) = self.detached_top() else {
            return 0;
        };

        let order: Vec<NodeId> = PreOrder::new(self.get(top)).map(|n| n.id()).collect();
        self.current = self.root;
        for &id in &order {
            self.nodes.remove(id.0);
        }

        debug!(released = order.len(), "released detached nodes");
        order.len()
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        NodeId(self.nodes.insert(node))
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes
            .get(id.0)
            .expect("links and the cursor only name live nodes")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes
            .get_mut(id.0)
            .expect("links and the cursor only name live nodes")
    }

    /// Places a new node below `anchor`: strictly smaller primaries go left, everything else
    /// goes right, until an empty slot is found. Without an anchor the node is allocated without
    /// a parent. Returns the new node's id.
    pub(crate) fn place(&mut self, anchor: Option<NodeId>, primary: T, secondary: T) -> NodeId
    where
        T: Ord,
    {
        let Some(mut at) = anchor else {
            let id = self.alloc(Node::with_secondary(primary, secondary));
            debug!(?id, "allocated parentless node");
            return id;
        };

        loop {
            let node = self.node(at);
            let side = if primary < node.primary {
                Side::Left
            } else {
                Side::Right
            };
            match node.child(side) {
                Some(next) => at = next,
                None => {
                    let id = self.alloc(Node::attached(primary, secondary, at));
                    self.node_mut(at).set_child(side, id);
                    debug!(?id, parent = ?at, ?side, "attached node");
                    return id;
                }
            }
        }
    }
}
