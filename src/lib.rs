//! This crate exposes a Binary Search Tree (BST) that is navigated with a cursor, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built from `Node`s. Every `Node` stores a value and
//! has up to two child `Node`s. The tree is kept ordered by where new `Node`s are placed:
//!
//! 1. A value strictly less than a `Node`'s value goes into its left subtree.
//! 2. Any other value, equal ones included, goes into its right subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Visiting the left subtree, then the subtree root, then the right subtree yields the values in
//! sorted order. This tree never rebalances, so inserting already sorted values produces a long
//! chain whose height equals the number of `Node`s.
//!
//! ## Cursors
//!
//! Every `Node` here carries two values. The `primary` one orders the tree and the `secondary`
//! one rides along. Each `Node` also remembers its parent, so a cursor can walk up as well as
//! down. The tree keeps one cursor position of its own. Inserts start their search from that
//! position instead of from the root, and the cursor then moves onto the new `Node`.
//!
//! ```
//! use cursor_bst::Tree;
//!
//! let mut tree = Tree::new();
//! let mut cursor = tree.cursor_mut();
//! for x in [4, 2, 6] {
//!     cursor.move_to_root();
//!     cursor.insert(x);
//! }
//!
//! let sorted: Vec<_> = tree.in_order().map(|n| *n.primary()).collect();
//! assert_eq!(sorted, [2, 4, 6]);
//!
//! // The cursor is still on 6, one hop below the root.
//! assert_eq!(tree.cursor().depth(), Some(1));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod cursor;
mod error;
mod iter;
mod node;
mod tree;


pub use cursor::{Cursor, CursorMut};
pub use error::{TreeError, TreeResult};
pub use iter::{InOrder, PreOrder};
pub use node::{Node, NodeId, NodeRef, Side};
pub use tree::Tree;
