use std::fmt;

use anyhow::bail;
use log::debug;
use pest::{error::Error as PestError, iterators::Pair, Parser};
use pest_derive::Parser;

use crate::tree::{
    Node,
    NodeIdx::{self, Internal as Int, Leaf},
    Tree,
};
use crate::Result;

#[derive(Parser)]
#[grammar = "./tree/newick.pest"]
pub struct NewickParser;

#[derive(Debug)]
pub(crate) struct ParsingError(pub(crate) Box<PestError<Rule>>);

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Malformed newick string")?;
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParsingError {}

/// Parses one or more newick trees from a string.
pub fn from_newick(newick: &str) -> Result<Vec<Tree>> {
    debug!("Parsing newick string.");
    let mut trees = Vec::new();
    let newick_rule = match NewickParser::parse(Rule::newick, newick) {
        Ok(mut rules) => rules.next().unwrap(),
        Err(error) => bail!(ParsingError(Box::new(error))),
    };
    for tree_rule in newick_rule.into_inner() {
        if tree_rule.as_rule() != Rule::tree {
            continue;
        }
        let subtree_rule = tree_rule.into_inner().next().unwrap();
        let mut tree = Tree::new_empty();
        tree.root = tree.parse_subtree_rule(subtree_rule);
        tree.compute_postorder();
        trees.push(tree);
    }
    Ok(trees)
}

/// Parses exactly one newick tree; more or fewer is an error.
pub fn single_from_newick(newick: &str) -> Result<Tree> {
    let mut trees = from_newick(newick)?;
    if trees.len() != 1 {
        bail!("Expected a single newick tree, got {}.", trees.len());
    }
    Ok(trees.pop().unwrap())
}

impl Tree {
    fn parse_subtree_rule(&mut self, subtree_rule: Pair<Rule>) -> NodeIdx {
        let node_idx = self.nodes.len();
        match subtree_rule.as_rule() {
            Rule::leaf => {
                let mut id = String::new();
                let mut blen = 0.0;
                for rule in subtree_rule.into_inner() {
                    match rule.as_rule() {
                        Rule::label => id = rule.as_str().to_string(),
                        Rule::branch_length => blen = parse_branch_length_rule(rule),
                        _ => unreachable!(),
                    }
                }
                self.nodes.push(Node::new_leaf(node_idx, blen, id));
                Leaf(node_idx)
            }
            Rule::internal => {
                self.nodes.push(Node::new_empty_internal(node_idx));
                let mut id = String::new();
                let mut blen = 0.0;
                let mut children = Vec::new();
                for rule in subtree_rule.into_inner() {
                    match rule.as_rule() {
                        Rule::label => id = rule.as_str().to_string(),
                        Rule::branch_length => blen = parse_branch_length_rule(rule),
                        Rule::internal | Rule::leaf => {
                            children.push(self.parse_subtree_rule(rule))
                        }
                        _ => unreachable!(),
                    }
                }
                for child in &children {
                    self.nodes[usize::from(*child)].parent = Some(Int(node_idx));
                }
                let node = &mut self.nodes[node_idx];
                node.id = id;
                node.blen = blen;
                node.children = children;
                Int(node_idx)
            }
            _ => unreachable!(),
        }
    }
}

fn parse_branch_length_rule(rule: Pair<Rule>) -> f64 {
    rule.into_inner()
        .next()
        .unwrap()
        .as_str()
        .trim()
        .parse::<f64>()
        .unwrap_or_default()
}
