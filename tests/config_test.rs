use blazejump::config::{EngineConfig, DEFAULT_LAYOUT, MAX_CUSTOM_LAYOUTS};
use blazejump::error::BlazeJumpError;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct Harness {
    #[command(flatten)]
    config: EngineConfig,
}

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.layout_main, DEFAULT_LAYOUT);
    assert!(config.layout_custom.is_empty());
    assert_eq!(config.depth, 2);
    assert_eq!(config.heuristic, "spiral");
    assert!(config.recognize);
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_defaults_match_default_impl() {
    let harness = Harness::parse_from(["blazejump"]);
    assert_eq!(harness.config, EngineConfig::default());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_json(r#"{ "layout_main": "abc def", "depth": 1 }"#);
    let config = EngineConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.layout_main, "abc def");
    assert_eq!(config.depth, 1);
    assert_eq!(config.heuristic, "spiral");
    assert!(config.recognize);
}

#[test]
fn test_bad_json_is_reported() {
    let file = write_json("{ depth: ");
    let err = EngineConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, BlazeJumpError::Json(_)));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, BlazeJumpError::Io(_)));
}

#[test]
fn test_explicit_flags_override_file() {
    let file = write_json(r#"{ "layout_main": "abc def", "depth": 1, "ignored": "x" }"#);
    let mut config = EngineConfig::load_from_file(file.path()).unwrap();

    let matches = Harness::command().get_matches_from(["blazejump", "--depth", "3"]);
    let cli = Harness::from_arg_matches(&matches).unwrap();
    config.merge_from_cli(&cli.config, &matches);

    assert_eq!(config.depth, 3);
    assert_eq!(config.layout_main, "abc def");
    assert_eq!(config.ignored, "x");
}

#[test]
fn test_custom_layout_flags() {
    let harness = Harness::parse_from([
        "blazejump",
        "--layout-custom",
        "qwe",
        "--layout-custom",
        "asd",
        "--recognize",
        "false",
    ]);
    assert_eq!(harness.config.layout_custom, vec!["qwe", "asd"]);
    assert!(!harness.config.recognize);
}

#[test]
fn test_layout_definitions_drop_blanks_and_cap() {
    let mut config = EngineConfig::default();
    config.layout_custom = vec!["".to_string(), "  ".to_string()];
    config
        .layout_custom
        .extend((0..12).map(|i| format!("k{}", i)));

    let defs = config.layout_definitions();
    assert_eq!(defs.len(), 1 + MAX_CUSTOM_LAYOUTS);
    assert_eq!(defs[0], DEFAULT_LAYOUT);
    assert_eq!(defs[1], "k0");
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = EngineConfig::default();
    config.depth = 0;
    assert!(matches!(config.validate(), Err(BlazeJumpError::Config(_))));

    let mut config = EngineConfig::default();
    config.layout_main = "   ".to_string();
    assert!(matches!(config.validate(), Err(BlazeJumpError::Config(_))));

    let mut config = EngineConfig::default();
    config.heuristic = "zigzag".to_string();
    assert!(matches!(
        config.validate(),
        Err(BlazeJumpError::UnknownHeuristic(_))
    ));
}

#[test]
fn test_build_trie_from_config() {
    let mut config = EngineConfig::default();
    config.layout_main = "abc def ghi".to_string();
    config.layout_custom = vec!["qwerty".to_string()];
    config.depth = 1;

    let mut trie = config.build_trie::<u8>().unwrap();
    assert_eq!(trie.layouts().len(), 2);
    assert_eq!(trie.max_depth(), 1);
    assert_eq!(trie.assign("x", 0, 0).as_deref(), Some("xe"));
    assert_eq!(trie.assign("x", 1, 1).as_deref(), Some("xh"));
}

#[test]
fn test_build_trie_rejects_invalid_config() {
    let mut config = EngineConfig::default();
    config.depth = -1;
    assert!(config.build_trie::<u8>().is_err());
}
