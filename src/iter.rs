//! Stack based traversals over the nodes reachable from a tree's root.

use crate::NodeRef;

/// Pre-order iterator returned by [`Tree::iter`][crate::Tree::iter]: a node, then its left
/// subtree, then its right subtree.
pub struct PreOrder<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<NodeRef<'a, T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so that left comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// In-order iterator returned by [`Tree::in_order`][crate::Tree::in_order]: left subtree, then
/// the node, then its right subtree.
pub struct InOrder<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
    descend: Option<NodeRef<'a, T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<NodeRef<'a, T>>) -> Self {
        Self {
            stack: Vec::new(),
            descend: root,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.descend.take() {
            self.stack.push(node);
            self.descend = node.left();
        }
        let node = self.stack.pop()?;
        self.descend = node.right();
        Some(node)
    }
}
