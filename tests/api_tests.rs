use blazejump::api::{JumpOutcome, JumpSession};
use blazejump::config::EngineConfig;

fn session(main: &str, custom: &[&str]) -> JumpSession<u32> {
    let config = EngineConfig {
        layout_main: main.to_string(),
        layout_custom: custom.iter().map(|s| s.to_string()).collect(),
        depth: 1,
        ..Default::default()
    };
    JumpSession::from_config(&config).unwrap()
}

fn labels(s: &JumpSession<u32>) -> Vec<String> {
    s.snapshot_by(|p| *p)
        .iter()
        .map(|n| n.label().to_string())
        .collect()
}

#[test]
fn test_single_key_jump() {
    let mut s = session("abc def ghi", &[]);
    s.begin(Some('x'));
    assert_eq!(s.assign("x", 10).as_deref(), Some("xe"));
    assert_eq!(s.assign("x", 20).as_deref(), Some("xa"));
    assert_eq!(labels(&s), vec!["e", "a"]);

    assert_eq!(s.press('a'), JumpOutcome::Jump(20));
    assert!(s.trie().is_empty());
}

#[test]
fn test_pending_then_jump() {
    let mut s = session("abc def ghi", &[]);
    s.begin(Some('x'));
    s.assign("xy", 1);
    s.assign("xy", 2);
    s.assign("xz", 3);
    assert_eq!(labels(&s), vec!["ye", "ya", "ze"]);

    match s.press('y') {
        JumpOutcome::Pending(nodes) => {
            let mut ids: Vec<String> = nodes.into_iter().map(|n| n.full_id).collect();
            ids.sort();
            assert_eq!(ids, vec!["xya", "xye"]);
        }
        other => panic!("expected pending, got {:?}", other),
    }
    assert_eq!(s.press('e'), JumpOutcome::Jump(1));
}

#[test]
fn test_unknown_key_resets() {
    let mut s = session("abc def ghi", &[]);
    s.begin(Some('x'));
    s.assign("x", 1);
    s.assign("x", 2);
    assert_eq!(s.press('q'), JumpOutcome::NotFound);
    assert!(s.trie().is_empty());
    assert_eq!(s.trie().consumed(), "");
}

#[test]
fn test_first_key_selects_layout() {
    let mut s = session("abc def ghi", &["qwe rty uio"]);
    assert_eq!(s.begin(Some('r')), 1);
    assert_eq!(s.assign("r", 1).as_deref(), Some("rt"));

    // A key no layout has leaves the cursor alone.
    assert_eq!(s.begin(Some('%')), 1);
    assert_eq!(s.begin(Some('A')), 0);
}

#[test]
fn test_recognition_can_be_disabled() {
    let config = EngineConfig {
        layout_main: "abc def ghi".to_string(),
        layout_custom: vec!["qwe rty uio".to_string()],
        recognize: false,
        ..Default::default()
    };
    let mut s: JumpSession<u32> = JumpSession::from_config(&config).unwrap();
    assert_eq!(s.begin(Some('r')), 0);
}

#[test]
fn test_line_mode_uses_home_key() {
    let mut s = session("abc def ghi", &[]);
    s.begin(None);
    assert_eq!(s.assign_placeholder(1).as_deref(), Some("ee"));
    assert_eq!(s.assign_placeholder(2).as_deref(), Some("ea"));
    assert_eq!(labels(&s), vec!["e", "a"]);
    assert_eq!(s.press('a'), JumpOutcome::Jump(2));
}

#[test]
fn test_layout_cursor_controls() {
    let mut s = session("abc", &["def", "ghi"]);
    assert_eq!(s.toggle_layout(-1), 2);
    assert_eq!(s.commit_and_toggle(), 0);
    assert_eq!(s.trie().layouts().default_index(), 2);
    assert_eq!(s.toggle_layout(1), 1);
    assert_eq!(s.reset_layout(), 2);
    assert_eq!(s.layout(), 2);
}

#[test]
fn test_abort_then_new_search() {
    let mut s = session("abc def ghi", &[]);
    s.begin(Some('x'));
    s.assign("x", 1);
    s.press('x');
    s.abort();

    s.begin(Some('y'));
    assert_eq!(s.assign("y", 2).as_deref(), Some("ye"));
    assert_eq!(s.press('e'), JumpOutcome::Jump(2));
}

#[test]
fn test_finished_search_returns_to_default_layout() {
    let mut s = session("12 ab", &["12 qw"]);
    assert_eq!(s.begin(Some('q')), 1);
    s.assign("q", 1);
    s.assign("q", 2);
    assert_eq!(s.press('x'), JumpOutcome::NotFound);

    // Digits exist on both layouts, so only the reset picks layout 0 here.
    assert_eq!(s.begin(Some('1')), 0);

    s.begin(Some('w'));
    s.assign("w", 3);
    assert_eq!(s.press('w'), JumpOutcome::Jump(3));
    assert_eq!(s.layout(), 0);
}

#[test]
fn test_toggle_is_undone_by_abort_without_recognition() {
    let config = EngineConfig {
        layout_main: "abc".to_string(),
        layout_custom: vec!["def".to_string()],
        recognize: false,
        ..Default::default()
    };
    let mut s: JumpSession<u32> = JumpSession::from_config(&config).unwrap();
    s.toggle_layout(1);
    // A toggle made before the search still applies to it.
    assert_eq!(s.begin(Some('a')), 1);
    s.abort();
    assert_eq!(s.layout(), 0);
}
