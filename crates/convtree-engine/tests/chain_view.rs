use convtree_engine::{ConversationTree, RenderError, render_chain};
use convtree_testing::MappingFixture;
use serde_json::json;

fn build(fixture: MappingFixture) -> ConversationTree {
    ConversationTree::build(fixture.into_mapping()).unwrap()
}

#[test]
fn test_two_node_scenario() {
    let tree = build(
        MappingFixture::new()
            .turn("r", None, &["a"], "user", "Hi")
            .turn("a", Some("r"), &[], "assistant", "Hello!"),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(lines, vec!["user: Hi", "- assistant: Hello!"]);
}

#[test]
fn test_branch_point_emits_sibling_chains_in_source_order() {
    let tree = build(
        MappingFixture::new()
            .turn("r", None, &["a2", "a1"], "user", "Question")
            .turn("a2", Some("r"), &[], "assistant", "Second draft")
            .turn("a1", Some("r"), &[], "assistant", "First draft"),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(
        lines,
        vec![
            "user: Question",
            "- assistant: Second draft",
            "- assistant: First draft",
        ]
    );
}

#[test]
fn test_system_node_is_spliced_out() {
    let tree = build(
        MappingFixture::new()
            .turn("s", None, &["u"], "system", "You are a helpful assistant")
            .turn("u", Some("s"), &["a"], "user", "Hi")
            .turn("a", Some("u"), &[], "assistant", "Hello!"),
    );

    let lines = render_chain(&tree, false).unwrap();
    // The user turn lands at the prefix the system node occupied.
    assert_eq!(lines, vec!["user: Hi", "- assistant: Hello!"]);
    assert!(lines.iter().all(|line| !line.contains("system")));
}

#[test]
fn test_empty_non_user_node_is_spliced_out() {
    let tree = build(
        MappingFixture::new()
            .turn("r", None, &["f"], "user", "Hi")
            .node("f", Some("r"), &["a"], Some("assistant"), json!([""]))
            .turn("a", Some("f"), &[], "assistant", "Hello!"),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(lines, vec!["user: Hi", "- assistant: Hello!"]);
}

#[test]
fn test_empty_user_node_is_kept() {
    let tree = build(
        MappingFixture::new()
            .node("r", None, &["a"], Some("user"), json!([""]))
            .turn("a", Some("r"), &[], "assistant", "Hello!"),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(lines, vec!["user: ", "- assistant: Hello!"]);
}

#[test]
fn test_line_count_matches_node_count_without_fillers() {
    let tree = build(
        MappingFixture::new()
            .turn("r", None, &["a"], "user", "one")
            .turn("a", Some("r"), &["b", "c"], "assistant", "two")
            .turn("b", Some("a"), &[], "user", "three")
            .turn("c", Some("a"), &[], "user", "four"),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(lines.len(), tree.len());
}

#[test]
fn test_preview_truncates_at_80_chars() {
    let long = "x".repeat(81);
    let exact = "y".repeat(80);
    let tree = build(
        MappingFixture::new()
            .turn("r", None, &["a"], "user", &long)
            .turn("a", Some("r"), &[], "assistant", &exact),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(lines[0], format!("user: {}...", "x".repeat(80)));
    assert_eq!(lines[1], format!("- assistant: {exact}"));
}

#[test]
fn test_preview_collapses_newlines() {
    let tree = build(MappingFixture::new().turn("r", None, &[], "user", "line one\nline two"));

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(lines, vec!["user: line one line two"]);
}

#[test]
fn test_show_ids_prints_id_prefix() {
    let tree = build(
        MappingFixture::new()
            .turn("1a2b3c4d-5e6f-7081", None, &["a"], "user", "Hi")
            .turn("a", Some("1a2b3c4d-5e6f-7081"), &[], "assistant", "Hello!"),
    );

    let lines = render_chain(&tree, true).unwrap();
    assert_eq!(lines, vec!["user [1a2b3c4d]: Hi", "- assistant [a]: Hello!"]);
}

#[test]
fn test_cycle_emits_marker_and_terminates() {
    let tree = build(
        MappingFixture::new()
            .turn("r", None, &["a"], "user", "start")
            .turn("a", Some("r"), &["b"], "assistant", "A")
            .turn("b", Some("a"), &["a"], "assistant", "B"),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(
        lines,
        vec![
            "user: start",
            "- assistant: A",
            "- - assistant: B",
            "- - - [structural cycle at a]",
        ]
    );
}

#[test]
fn test_cycle_in_one_branch_leaves_siblings_intact() {
    let tree = build(
        MappingFixture::new()
            .turn("r", None, &["loop", "ok"], "user", "start")
            .turn("loop", Some("r"), &["loop"], "assistant", "echoes itself")
            .turn("ok", Some("r"), &[], "assistant", "fine"),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(
        lines,
        vec![
            "user: start",
            "- assistant: echoes itself",
            "- - [structural cycle at loop]",
            "- assistant: fine",
        ]
    );
}

#[test]
fn test_dangling_child_renders_as_leaf() {
    let tree = build(
        MappingFixture::new()
            .turn("r", None, &["a", "ghost"], "user", "Hi")
            .turn("a", Some("r"), &[], "assistant", "Hello!"),
    );

    let lines = render_chain(&tree, false).unwrap();
    assert_eq!(lines, vec!["user: Hi", "- assistant: Hello!"]);
}

#[test]
fn test_depth_ceiling_is_a_hard_error() {
    let mut fixture = MappingFixture::new().turn("n0", None, &["n1"], "user", "0");
    for i in 1..1030 {
        let id = format!("n{i}");
        let parent = format!("n{}", i - 1);
        let child = format!("n{}", i + 1);
        let children: Vec<&str> = if i == 1029 { vec![] } else { vec![child.as_str()] };
        fixture = fixture.turn(&id, Some(&parent), &children, "user", "deep");
    }

    let tree = ConversationTree::build(fixture.into_mapping()).unwrap();
    assert!(matches!(
        render_chain(&tree, false),
        Err(RenderError::DepthExceeded { .. })
    ));
}
