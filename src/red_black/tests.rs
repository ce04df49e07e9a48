use super::*;

type Arena = NodeArena<u32, &'static str>;

/// Builds the working tree most tests poke at:
///
/// ```text
///       5 (black, root)
///      / \
///     3   8 (black)
///        / \
///       7   9
/// ```
///
/// with 3, 7 and 9 red, returning `[k5, k3, k8, k7, k9]`.
fn five_node_tree() -> (Arena, [usize; 5]) {
    let mut arena = Arena::new();
    let k5 = arena.insert_root(Node::new(5, "five"));
    let mut root = arena.root_mut().expect("a root was just inserted");
    let k3 = root
        .attach_left(Node::new(3, "three").with_color(Color::Red))
        .expect("the left slot of the root starts out empty");
    let k8 = root
        .attach_right(Node::new(8, "eight"))
        .expect("the right slot of the root starts out empty");
    let mut eight = NodeRefMut::new_raw(&mut arena, k8).expect("the node was just attached");
    let k7 = eight
        .attach_left(Node::new(7, "seven").with_color(Color::Red))
        .expect("the left slot of a fresh node starts out empty");
    let k9 = eight
        .attach_right(Node::new(9, "nine").with_color(Color::Red))
        .expect("the right slot of a fresh node starts out empty");
    (arena, [k5, k3, k8, k7, k9])
}

#[test]
fn construction_defaults() {
    let node: Node<u32, &str> = Node::new(5, "x");
    assert_eq!(node.key(), &5);
    assert_eq!(node.data(), &"x");
    assert_eq!(node.color(), Color::Black);

    let node: Node<u32, u64> = Node::with_key(17);
    assert_eq!(node.key(), &17);
    assert_eq!(node.data(), &0);
    assert_eq!(node.color(), Color::Black);

    let node: Node<u32, u64> = Node::default();
    assert_eq!(node.key(), &0);
    assert_eq!(node.data(), &0);
    assert_eq!(node.color(), Color::Black);

    let node = Node::<u32, ()>::with_key(1).with_color(Color::Red);
    assert_eq!(node.color(), Color::Red);
}

#[test]
fn side_queries() {
    let (arena, [_, k3, _, _, k9]) = five_node_tree();

    let three = NodeRef::new_raw(&arena, k3).expect("the node is in the tree");
    assert_eq!(three.side(), Some(Side::Left));
    assert_eq!(three.is_left(), Some(true));
    assert_eq!(three.is_right(), Some(false));

    let nine = NodeRef::new_raw(&arena, k9).expect("the node is in the tree");
    assert_eq!(nine.side(), Some(Side::Right));
    assert_eq!(nine.is_left(), Some(false));
    assert_eq!(nine.is_right(), Some(true));

    // The root has no parent, which the queries report instead of crashing
    let root = arena.root().expect("the tree has a root");
    assert_eq!(root.side(), None);
    assert_eq!(root.is_left(), None);
    assert_eq!(root.is_right(), None);
}

#[test]
fn ascend_walks_to_ancestors() {
    let (arena, [k5, _, k8, k7, _]) = five_node_tree();
    let seven = NodeRef::new_raw(&arena, k7).expect("the node is in the tree");
    assert_eq!(
        seven.ascend(0).expect("zero levels is an identity").raw_key(),
        &k7,
    );
    assert_eq!(
        seven.ascend(1).expect("the node is one level below 8").raw_key(),
        &k8,
    );
    assert_eq!(
        seven.ascend(2).expect("the node is two levels below the root").raw_key(),
        &k5,
    );
    assert!(seven.ascend(2).expect("as above").is_root());
    assert_eq!(seven.depth(), 2);
}

#[test]
fn ascend_past_root_fails() {
    let (arena, [_, _, _, k7, _]) = five_node_tree();
    let seven = NodeRef::new_raw(&arena, k7).expect("the node is in the tree");
    assert_eq!(
        seven.ascend(3).expect_err("the node only has two ancestors"),
        AscendError {
            levels: 3,
            climbed: 2,
        },
    );

    let root = arena.root().expect("the tree has a root");
    assert_eq!(
        root.ascend(1).expect_err("the root has no ancestors"),
        AscendError {
            levels: 1,
            climbed: 0,
        },
    );
    assert_eq!(root.depth(), 0);
}

#[test]
fn leaf_and_branch_queries() {
    let (arena, [_, k3, k8, ..]) = five_node_tree();
    assert!(!arena.root().expect("the tree has a root").is_leaf());
    assert!(NodeRef::new_raw(&arena, k3).expect("the node is in the tree").is_leaf());
    assert!(!NodeRef::new_raw(&arena, k8).expect("the node is in the tree").is_leaf());
}

#[test]
fn attach_to_occupied_slot_fails() {
    let (mut arena, _) = five_node_tree();
    let len = arena.len();
    let mut root = arena.root_mut().expect("the tree has a root");
    let err = root
        .attach_left(Node::new(1, "one"))
        .expect_err("the left slot of the root is occupied");
    assert_eq!(err.side, Side::Left);
    // the node comes back instead of being dropped
    let node = err.into_node();
    assert_eq!(node.key(), &1);
    assert_eq!(arena.len(), len);
}

#[test]
fn left_rotation_rewires_links() {
    let (mut arena, [k5, k3, k8, k7, k9]) = five_node_tree();

    // Left rotation around the root: 8 moves up, 5 becomes its left child and adopts 7,
    // the old left child of 8. Exactly the three-step rewiring a balancing layer performs.
    let mut five = NodeRefMut::new_raw(&mut arena, k5).expect("the root is in the tree");
    let displaced = five.link_child(Side::Right, Some(k7));
    assert_eq!(displaced, Some(k8));
    let mut eight = NodeRefMut::new_raw(&mut arena, k8).expect("the node is in the tree");
    eight.make_root();
    eight.link_child(Side::Left, Some(k5));

    let root = arena.root().expect("the tree has a root");
    assert_eq!(root.raw_key(), &k8);
    assert_eq!(root.key(), &8);
    assert_eq!(root.side(), None);

    let five = NodeRef::new_raw(&arena, k5).expect("the node is in the tree");
    assert_eq!(five.is_left(), Some(true));
    assert_eq!(
        five.parent().expect("the node hangs below the new root").raw_key(),
        &k8,
    );

    let seven = NodeRef::new_raw(&arena, k7).expect("the node is in the tree");
    assert_eq!(seven.is_right(), Some(true));
    assert_eq!(seven.parent().expect("the node was adopted by 5").raw_key(), &k5);

    let nine = NodeRef::new_raw(&arena, k9).expect("the node is in the tree");
    assert_eq!(nine.is_right(), Some(true));
    assert_eq!(nine.parent().expect("the node stayed below 8").raw_key(), &k8);

    let three = NodeRef::new_raw(&arena, k3).expect("the node is in the tree");
    assert_eq!(three.depth(), 2);
    assert_eq!(
        three.ascend(2).expect("the node is two levels below the new root").raw_key(),
        &k8,
    );

    // No node was created or released by the rotation
    assert_eq!(arena.len(), 5);
}

#[test]
fn detach_child_keeps_node_in_arena() {
    let (mut arena, [_, k3, ..]) = five_node_tree();
    let mut root = arena.root_mut().expect("the tree has a root");
    assert_eq!(root.detach_child(Side::Left), Some(k3));
    assert!(root.as_ref().left_child().is_none());
    drop(root);

    let three = NodeRef::new_raw(&arena, k3).expect("detaching does not remove");
    assert_eq!(three.side(), None);
    assert_eq!(three.depth(), 0);
    assert!(!three.is_root());
    assert_eq!(arena.len(), 5);
}

#[test]
fn remove_subtree_cascades() {
    let (mut arena, [_, k3, k8, k7, k9]) = five_node_tree();
    let eight = NodeRefMut::new_raw(&mut arena, k8).expect("the node is in the tree");
    assert_eq!(eight.remove_subtree(), 3);
    assert_eq!(arena.len(), 2);
    assert!(NodeRef::new_raw(&arena, k8).is_none());
    assert!(NodeRef::new_raw(&arena, k7).is_none());
    assert!(NodeRef::new_raw(&arena, k9).is_none());

    let root = arena.root().expect("the root was not part of the removed subtree");
    assert!(root.right_child().is_none());
    assert_eq!(
        root.left_child().expect("the left subtree was untouched").raw_key(),
        &k3,
    );

    // Freed slots are reused instead of growing the storage
    let reused = arena.insert_detached(Node::new(11, "eleven"));
    assert!([k7, k8, k9].contains(&reused));
}

#[test]
fn remove_root_subtree_clears_designation() {
    let (mut arena, _) = five_node_tree();
    let root = arena.root_mut().expect("the tree has a root");
    assert_eq!(root.remove_subtree(), 5);
    assert!(arena.is_empty());
    assert!(arena.root().is_none());
}

#[test]
#[should_panic(expected = "already has one")]
fn double_root_panics() {
    let mut arena = Arena::new();
    arena.insert_root(Node::new(1, "a"));
    arena.insert_root(Node::new(2, "b"));
}

#[test]
#[should_panic(expected = "ownership cycle")]
fn linking_an_ancestor_panics() {
    let (mut arena, [k5, _, _, k7, _]) = five_node_tree();
    let mut seven = NodeRefMut::new_raw(&mut arena, k7).expect("the node is in the tree");
    seven.link_child(Side::Left, Some(k5));
}

#[test]
#[should_panic(expected = "its own child")]
fn linking_self_panics() {
    let (mut arena, [k5, ..]) = five_node_tree();
    let mut five = NodeRefMut::new_raw(&mut arena, k5).expect("the root is in the tree");
    five.link_child(Side::Left, Some(k5));
}

#[test]
fn color_and_data_mutation() {
    let (mut arena, _) = five_node_tree();
    let mut root = arena.root_mut().expect("the tree has a root");
    assert_eq!(root.set_color(Color::Red), Color::Black);
    assert_eq!(root.color(), Color::Red);
    assert_eq!(root.recolor(), Color::Black);
    assert_eq!(root.color(), Color::Black);
    *root.data_mut() = "FIVE";
    assert_eq!(root.data(), &"FIVE");
}

#[test]
fn display_key_and_color() {
    let (arena, [_, k3, ..]) = five_node_tree();
    let root = arena.root().expect("the tree has a root");
    assert_eq!(format!("{}", root), "key = 5 (black)");

    let three = NodeRef::new_raw(&arena, k3).expect("the node is in the tree");
    assert_eq!(format!("{}", three), "key = 3 (red)");
    assert_eq!(
        format!("{:#}", three),
        "key = \u{1b}[32m3\u{1b}[0m (\u{1b}[31mred\u{1b}[0m)",
    );
}

#[test]
fn display_subtree_dump() {
    let (arena, _) = five_node_tree();
    let dump = format!(
        "{}",
        arena.root().expect("the tree has a root").display_subtree(),
    );
    assert_eq!(dump, "[B] 5\n  [R] 3\n  [B] 8\n    [R] 7\n    [R] 9\n");
}

#[test]
fn display_subtree_marks_missing_children() {
    let mut arena = Arena::new();
    arena.insert_root(Node::new(2, "two"));
    arena
        .root_mut()
        .expect("a root was just inserted")
        .attach_right(Node::new(4, "four").with_color(Color::Red))
        .expect("the right slot of the root starts out empty");
    let dump = format!(
        "{}",
        arena.root().expect("the tree has a root").display_subtree(),
    );
    assert_eq!(dump, "[B] 2\n  [B] NIL\n  [R] 4\n");
}

#[test]
fn display_subtree_draws_continuation_rules() {
    let mut arena = Arena::new();
    arena.insert_root(Node::new(5, "five"));
    let mut root = arena.root_mut().expect("a root was just inserted");
    let k3 = root
        .attach_left(Node::new(3, "three"))
        .expect("the left slot of the root starts out empty");
    root.attach_right(Node::new(8, "eight"))
        .expect("the right slot of the root starts out empty");
    let mut three = NodeRefMut::new_raw(&mut arena, k3).expect("the node was just attached");
    three
        .attach_left(Node::new(2, "two").with_color(Color::Red))
        .expect("the left slot of a fresh node starts out empty");
    three
        .attach_right(Node::new(4, "four").with_color(Color::Red))
        .expect("the right slot of a fresh node starts out empty");
    let dump = format!(
        "{}",
        arena.root().expect("the tree has a root").display_subtree(),
    );
    // descendants of 3, a non-last child, carry the connecting rule in its column
    assert_eq!(dump, "[B] 5\n  [B] 3\n  | [R] 2\n  | [R] 4\n  [B] 8\n");
}

#[test]
fn display_subtree_handles_deep_chains() {
    let mut arena = NodeArena::<u32, ()>::new();
    let mut curr = arena.insert_root(Node::with_key(0));
    for key in 1..70 {
        let mut tip = NodeRefMut::new_raw(&mut arena, curr).expect("the chain tip is live");
        curr = tip
            .attach_right(Node::with_key(key))
            .expect("the chain tip has no right child");
    }
    let dump = format!(
        "{}",
        arena.root().expect("the tree has a root").display_subtree(),
    );
    // every chain node except the deepest is a branch with an empty left slot
    assert_eq!(dump.lines().count(), 70 + 69);
    assert!(dump.starts_with("[B] 0\n  [B] NIL\n  [B] 1\n"));
    assert!(dump.ends_with(&format!("{}[B] 69\n", "  ".repeat(69))));
}

#[test]
fn error_messages() {
    let err = AscendError {
        levels: 3,
        climbed: 2,
    };
    assert_eq!(
        format!("{}", err),
        "cannot ascend 3 levels: a parentless node was reached after 2",
    );
}
