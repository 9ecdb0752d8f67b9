use crate::node::{BoxGeometry, BoxNode, Fragment, SourceNode};
use crate::tree::BoxTree;
use crate::TreeError;
use boxpaint_style::BoxStyle;
use std::sync::Arc;

fn element(tag: &str) -> BoxNode {
    BoxNode::new(
        SourceNode::element(tag),
        Arc::new(BoxStyle::default()),
        BoxGeometry::default(),
    )
}

#[test]
fn test_sibling_navigation() {
    let mut tree = BoxTree::new();
    let root = tree.add_root(element("span"));
    let a = tree.add_child(root, element("b")).unwrap();
    let b = tree.add_child(root, element("i")).unwrap();
    let c = tree.add_child(root, BoxNode::text(" ", BoxGeometry::default())).unwrap();

    assert_eq!(tree.children(root), &[a, b, c]);
    assert_eq!(tree.first_child(root), Some(a));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.next_sibling(c), None);
    assert_eq!(tree.parent(c), Some(root));
    assert!(tree[c].source.is_collapsible_whitespace());
}

#[test]
fn test_preorder_visits_parent_before_children() {
    let mut tree = BoxTree::new();
    let root = tree.add_root(element("p"));
    let first = tree.add_child(root, element("span")).unwrap();
    let nested = tree.add_child(first, element("a")).unwrap();
    let second = tree.add_child(root, element("span")).unwrap();
    let other_root = tree.add_root(element("p"));

    let order: Vec<_> = tree.preorder().collect();
    assert_eq!(order, vec![root, first, nested, second, other_root]);
    assert_eq!(tree.ancestors(nested).collect::<Vec<_>>(), vec![first, root]);
}

#[test]
fn test_add_child_to_unknown_parent_fails() {
    let mut tree = BoxTree::new();
    let mut other = BoxTree::new();
    other.add_root(element("p"));
    let foreign = other.add_root(element("p"));

    let err = tree.add_child(foreign, element("span")).unwrap_err();
    assert!(matches!(err, TreeError::UnknownBox(1)));
}

#[test]
fn test_fragment_sequence() {
    assert_eq!(Fragment::sequence(1), vec![Fragment::Whole]);
    let three = Fragment::sequence(3);
    assert_eq!(three, vec![Fragment::First, Fragment::Middle, Fragment::Last]);
    assert!(three[0].is_first() && !three[0].is_last());
    assert!(!three[1].is_first() && !three[1].is_last());
    assert!(three[2].is_last());
    assert!(Fragment::Whole.is_first() && Fragment::Whole.is_last());
}

#[test]
fn test_negative_geometry_clamps_to_zero() {
    let geometry = BoxGeometry::new(5.0, 5.0, -10.0, 4.0);
    let rect = geometry.padding_box();
    assert_eq!(rect.width, 0.0);
    assert_eq!(rect.height, 4.0);
}

#[test]
fn test_source_attributes_ignore_empty_values() {
    let node = SourceNode::element("A")
        .with_attr("href", "")
        .with_attr("name", "top");
    assert!(node.is_hyperlink());
    assert_eq!(node.attr("href"), None);
    assert_eq!(node.attr("name"), Some("top"));
}
