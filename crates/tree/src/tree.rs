//! Arena storage for the box tree.
//!
//! Boxes refer to each other through [`BoxId`] indices, so parent, child and
//! sibling navigation is O(1) without reference cycles.

use std::fmt;
use std::ops::Index;

use crate::error::TreeError;
use crate::node::BoxNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(usize);

impl BoxId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoxTree {
    nodes: Vec<BoxNode>,
    roots: Vec<BoxId>,
}

impl BoxTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[BoxId] {
        &self.roots
    }

    pub fn add_root(&mut self, mut node: BoxNode) -> BoxId {
        let id = BoxId(self.nodes.len());
        node.parent = None;
        node.children.clear();
        node.index_in_parent = self.roots.len();
        self.nodes.push(node);
        self.roots.push(id);
        id
    }

    /// Appends `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: BoxId, mut node: BoxNode) -> Result<BoxId, TreeError> {
        if parent.0 >= self.nodes.len() {
            return Err(TreeError::UnknownBox(parent.0));
        }
        let id = BoxId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        node.index_in_parent = self.nodes[parent.0].children.len();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    pub fn get(&self, id: BoxId) -> Option<&BoxNode> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: BoxId) -> Option<BoxId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: BoxId) -> &[BoxId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn first_child(&self, id: BoxId) -> Option<BoxId> {
        self.children(id).first().copied()
    }

    fn siblings(&self, id: BoxId) -> &[BoxId] {
        match self.parent(id) {
            Some(parent) => self.children(parent),
            None => &self.roots,
        }
    }

    pub fn prev_sibling(&self, id: BoxId) -> Option<BoxId> {
        let index = self.get(id)?.index_in_parent;
        index.checked_sub(1).and_then(|i| self.siblings(id).get(i).copied())
    }

    pub fn next_sibling(&self, id: BoxId) -> Option<BoxId> {
        let index = self.get(id)?.index_in_parent;
        self.siblings(id).get(index + 1).copied()
    }

    /// Walks from `id`'s parent up to its root.
    pub fn ancestors(&self, id: BoxId) -> impl Iterator<Item = BoxId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Every box in document order: a box before its children, children
    /// before the box's next sibling.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoxId, &BoxNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (BoxId(i), n))
    }
}

impl Index<BoxId> for BoxTree {
    type Output = BoxNode;

    fn index(&self, id: BoxId) -> &BoxNode {
        &self.nodes[id.0]
    }
}

pub struct Preorder<'a> {
    tree: &'a BoxTree,
    stack: Vec<BoxId>,
}

impl Iterator for Preorder<'_> {
    type Item = BoxId;

    fn next(&mut self) -> Option<BoxId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
