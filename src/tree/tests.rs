use rstest::rstest;

use crate::tree::tree_parser::{from_newick, single_from_newick};
use crate::tree::NodeIdx::{Internal as Int, Leaf};

#[test]
fn parse_rooted_binary() {
    let tree = single_from_newick("((A:1.0,B:2.0)E:3.0,(C:0.5,D:0.5)F:1.5)G:0.0;").unwrap();
    assert_eq!(tree.root, Int(0));
    assert_eq!(tree.leaf_ids(), vec!["A", "B", "C", "D"]);
    assert_eq!(tree.node(tree.root).id, "G");
    assert_eq!(tree.node(tree.root).children.len(), 2);
    let left = tree.node(tree.node(tree.root).children[0]);
    assert_eq!(left.id, "E");
    assert_eq!(left.blen, 3.0);
    assert_eq!(left.parent, Some(Int(0)));
}

#[test]
fn parse_multifurcation() {
    let tree = single_from_newick("(A:0.1,B:0.2,C:0.3):0.0;").unwrap();
    assert_eq!(tree.node(tree.root).children.len(), 3);
    assert_eq!(tree.leaf_ids(), vec!["A", "B", "C"]);
}

#[test]
fn parse_missing_branch_lengths_default_to_zero() {
    let tree = single_from_newick("(A,B)R;").unwrap();
    for leaf in tree.leaves() {
        assert_eq!(leaf.blen, 0.0);
    }
    assert_eq!(tree.node(tree.root).id, "R");
}

#[test]
fn parse_multiple_trees() {
    let trees = from_newick("(A:1,B:1):0.0;\n(C:1,D:1):0.0;").unwrap();
    assert_eq!(trees.len(), 2);
    assert_eq!(trees[0].leaf_ids(), vec!["A", "B"]);
    assert_eq!(trees[1].leaf_ids(), vec!["C", "D"]);
}

#[rstest]
#[case("((A:1,B:1:0.0;")]
#[case("(A:1,B:1))):0.0;")]
#[case("(A:1,B:1)")]
#[case("")]
fn parse_malformed(#[case] newick: &str) {
    let error = single_from_newick(newick).unwrap_err();
    assert!(error.to_string().contains("Malformed newick string"));
}

#[test]
fn single_rejects_multiple() {
    let error = single_from_newick("(A:1,B:1):0.0;(C:1,D:1):0.0;").unwrap_err();
    assert!(error.to_string().contains("Expected a single newick tree"));
}

#[test]
fn postorder_children_before_parent() {
    let tree = single_from_newick("((A:1,B:1)E:1,C:1)R:0.0;").unwrap();
    assert_eq!(tree.postorder.len(), tree.nodes.len());
    let position = |idx| {
        tree.postorder
            .iter()
            .position(|node_idx| *node_idx == idx)
            .unwrap()
    };
    for node in &tree.nodes {
        for child in &node.children {
            assert!(position(*child) < position(node.idx));
        }
    }
    assert_eq!(*tree.postorder.last().unwrap(), tree.root);
}

#[test]
fn newick_round_trip() {
    let newick = "((A:1,B:2)E:3,(C:0.5,D:0.5)F:1.5)G:0;";
    let tree = single_from_newick(newick).unwrap();
    let reparsed = single_from_newick(&tree.to_newick()).unwrap();
    assert!(tree.same_structure(&reparsed));
}

#[test]
fn same_structure_ignores_internal_names() {
    let tree = single_from_newick("((A:1,B:2)X:3,C:4)Y:0.0;").unwrap();
    let other = single_from_newick("((A:1,B:2)P:3,C:4):0.0;").unwrap();
    assert!(tree.same_structure(&other));
}

#[rstest]
#[case("((A:1,B:2):3,C:4):0.0;", "((A:1,B:2):3.01,C:4):0.0;")]
#[case("((A:1,B:2):3,C:4):0.0;", "((A:1,B:2,C:4):3):0.0;")]
#[case("((A:1,B:2):3,C:4):0.0;", "((A:1,D:2):3,C:4):0.0;")]
fn same_structure_detects_differences(#[case] newick: &str, #[case] other_newick: &str) {
    let tree = single_from_newick(newick).unwrap();
    let other = single_from_newick(other_newick).unwrap();
    assert!(!tree.same_structure(&other));
}

#[test]
fn leaf_params_attachable() {
    let mut tree = single_from_newick("(A:1,B:1)R:0.0;").unwrap();
    let leaf_idx = tree.leaves().next().unwrap().idx;
    tree.node_mut(leaf_idx)
        .params
        .insert("rate[A/G]".to_string(), 4.39);
    assert_eq!(tree.node(leaf_idx).params["rate[A/G]"], 4.39);
    assert_eq!(tree.node(Leaf(usize::from(leaf_idx))).id, "A");
}
