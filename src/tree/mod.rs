//! Tree structure the engine results are attached to.
//!
//! Nodes live in one flat vector; [`NodeIdx`] distinguishes internal nodes
//! from leaves while indexing into it. Trees are n-ary since the engine may
//! emit multifurcations (e.g. when rooting at a trifurcation).

use std::collections::BTreeMap;

use NodeIdx::{Internal as Int, Leaf};

pub(crate) mod tree_parser;

#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Eq, Ord, Hash)]
pub enum NodeIdx {
    Internal(usize),
    Leaf(usize),
}

impl From<NodeIdx> for usize {
    fn from(node_idx: NodeIdx) -> usize {
        match node_idx {
            Int(idx) => idx,
            Leaf(idx) => idx,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub idx: NodeIdx,
    pub parent: Option<NodeIdx>,
    pub children: Vec<NodeIdx>,
    pub blen: f64,
    pub id: String,
    /// Named float parameters attached by the engine-result mapper.
    pub params: BTreeMap<String, f64>,
}

impl Node {
    pub(crate) fn new_leaf(idx: usize, blen: f64, id: String) -> Self {
        Self {
            idx: Leaf(idx),
            parent: None,
            children: Vec::new(),
            blen,
            id,
            params: BTreeMap::new(),
        }
    }

    pub(crate) fn new_empty_internal(idx: usize) -> Self {
        Self {
            idx: Int(idx),
            parent: None,
            children: Vec::new(),
            blen: 0.0,
            id: String::new(),
            params: BTreeMap::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.idx, Leaf(_))
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    pub root: NodeIdx,
    pub nodes: Vec<Node>,
    pub postorder: Vec<NodeIdx>,
}

impl Tree {
    pub(crate) fn new_empty() -> Self {
        Self {
            root: Int(0),
            nodes: Vec::new(),
            postorder: Vec::new(),
        }
    }

    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[usize::from(idx)]
    }

    pub fn node_mut(&mut self, idx: NodeIdx) -> &mut Node {
        &mut self.nodes[usize::from(idx)]
    }

    pub fn is_root(&self, idx: NodeIdx) -> bool {
        self.root == idx
    }

    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    pub fn leaf_ids(&self) -> Vec<String> {
        self.leaves().map(|node| node.id.clone()).collect()
    }

    pub(crate) fn compute_postorder(&mut self) {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::with_capacity(self.nodes.len());
        stack.push(self.root);
        while let Some(cur) = stack.pop() {
            order.push(cur);
            for child in &self.node(cur).children {
                stack.push(*child);
            }
        }
        order.reverse();
        self.postorder = order;
    }

    /// Structural identity as the engine defines it: same child count at
    /// every node, same branch length at every node, equal leaf names.
    /// Internal node names are ignored.
    pub fn same_structure(&self, other: &Tree) -> bool {
        self.nodes_equal(self.root, other, other.root)
    }

    fn nodes_equal(&self, idx: NodeIdx, other: &Tree, other_idx: NodeIdx) -> bool {
        let node = self.node(idx);
        let other_node = other.node(other_idx);
        if node.children.len() != other_node.children.len() {
            return false;
        }
        for (child, other_child) in node.children.iter().zip(other_node.children.iter()) {
            if !self.nodes_equal(*child, other, *other_child) {
                return false;
            }
        }
        if node.children.is_empty() {
            return node.id == other_node.id && node.blen == other_node.blen;
        }
        node.blen == other_node.blen
    }

    pub fn to_newick(&self) -> String {
        format!("{};", self.subtree_newick(self.root))
    }

    fn subtree_newick(&self, idx: NodeIdx) -> String {
        let node = self.node(idx);
        if node.children.is_empty() {
            return format!("{}:{}", node.id, node.blen);
        }
        let children = node
            .children
            .iter()
            .map(|child| self.subtree_newick(*child))
            .collect::<Vec<_>>()
            .join(",");
        format!("({}){}:{}", children, node.id, node.blen)
    }
}

#[cfg(test)]
mod tests;
