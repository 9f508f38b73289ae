use super::*;

#[test]
fn test_defaults() {
    let config = SearchConfig::default();
    assert_eq!(config.opening_moves, 5);
    assert_eq!(config.opening_choices, 100);
    assert_eq!(config.min_depth, 1);
    assert_eq!(config.depth_log_base, 3);
    assert_eq!(config.max_depth, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = SearchConfig::from_toml_str("opening_moves = 3\nmax_depth = 2\n").unwrap();
    assert_eq!(config.opening_moves, 3);
    assert_eq!(config.max_depth, Some(2));
    assert_eq!(config.opening_choices, 100);
    assert_eq!(config.depth_log_base, 3);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(SearchConfig::from_toml_str("").unwrap(), SearchConfig::default());
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = SearchConfig::from_toml_str("search_depth = 4").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_invalid_values_are_rejected() {
    for text in [
        "opening_choices = 0",
        "min_depth = 0",
        "depth_log_base = 1",
        "min_depth = 3\nmax_depth = 2",
    ] {
        let err = SearchConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{text}: {err}");
    }
}

#[test]
fn test_missing_file() {
    let err = SearchConfig::load("/nonexistent/minimax.toml").unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/minimax.toml")),
        other => panic!("expected an io error, got {other}"),
    }
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("minimax-config-{}.toml", std::process::id()));
    fs::write(&path, "opening_moves = 0\n").unwrap();
    let config = SearchConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.opening_moves, 0);
}

#[test]
fn test_depth_grows_with_log3_of_moves() {
    let config = SearchConfig::default();
    for (moves, depth) in [
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 1),
        (5, 1),
        (8, 1),
        (9, 2),
        (26, 2),
        (27, 3),
        (80, 3),
        (81, 4),
    ] {
        assert_eq!(config.depth_for(moves), depth, "after {moves} moves");
    }
}

#[test]
fn test_depth_respects_bounds() {
    let config = SearchConfig {
        min_depth: 2,
        max_depth: Some(3),
        ..SearchConfig::default()
    };
    assert_eq!(config.depth_for(5), 2);
    assert_eq!(config.depth_for(27), 3);
    assert_eq!(config.depth_for(90), 3);

    let binary = SearchConfig {
        depth_log_base: 2,
        ..SearchConfig::default()
    };
    assert_eq!(binary.depth_for(8), 3);
}
