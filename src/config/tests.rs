// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::collections::HashMap;

const APP_CONFIG: &str = r#"
# Test config
app:
  name: TestApp
  version: "1.0.0"
  debug: true
  server:
    host: localhost
    port: 8080
  features:
  - auth
  - logging
  max_connections: 100
  log-level: info
"#;

#[test]
fn test_config_from_string() {
    let config = YamlConfig::from_str(APP_CONFIG).expect("Failed to parse config");

    let app_name: String = config.get("app.name").expect("Failed to get app.name");
    assert_eq!(app_name, "TestApp");

    let version: String = config.get("app.version").expect("Failed to get app.version");
    assert_eq!(version, "1.0.0");

    let host: String = config.get("app.server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("app.server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let debug: bool = config.get("app.debug").expect("Failed to get debug");
    assert!(debug);

    let features: Vec<String> = config.get("app.features").expect("Failed to get features");
    assert_eq!(features, vec!["auth", "logging"]);

    assert!(config.has("app.name"));
    assert!(!config.has("app.nonexistent"));

    let server_keys = config.get_keys("app.server").expect("Failed to get server keys");
    assert_eq!(server_keys, vec!["host", "port"]);
}

#[test]
fn test_sequence_index_paths() {
    let config = YamlConfig::from_str(APP_CONFIG).unwrap();

    let first: String = config.get("app.features.0").expect("Failed to get first feature");
    assert_eq!(first, "auth");
    assert_eq!(config.get::<String>("app.features.1").unwrap(), "logging");
    assert!(!config.has("app.features.2"));
    assert!(!config.has("app.features.first"));
}

#[test]
fn test_compact_sequence_of_maps() {
    let content = "servers:\n- name: alpha\n  port: 80\n- name: beta\n  port: 8080\n";
    let config = YamlConfig::from_str(content).unwrap();

    assert_eq!(config.get::<String>("servers.1.name").unwrap(), "beta");
    assert_eq!(config.get::<u16>("servers.0.port").unwrap(), 80);

    let servers: Vec<HashMap<String, String>> = config.get("servers").unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0]["name"], "alpha");
}

#[test]
fn test_keys_match_exactly() {
    let config = YamlConfig::from_str(APP_CONFIG).unwrap();

    assert_eq!(config.get::<u32>("app.max_connections").unwrap(), 100);
    assert_eq!(config.get::<String>("app.log-level").unwrap(), "info");

    assert!(!config.has("app.max-connections"));
    assert!(!config.has("app.log_level"));
    assert!(!config.has("App.Name"));
    assert!(matches!(
        config.get::<String>("app.log_level").unwrap_err(),
        EmbedYamlError::PathNotFound { .. }
    ));
    assert_eq!(config.get_optional::<u32>("app.max-connections").unwrap(), None);
}

#[test]
fn test_optional_and_default_values() {
    let config = YamlConfig::from_str(APP_CONFIG).unwrap();

    let missing: Option<String> = config.get_optional("app.api_key").unwrap();
    assert!(missing.is_none());

    let present: Option<u16> = config.get_optional("app.server.port").unwrap();
    assert_eq!(present, Some(8080));

    // A value that exists but does not convert is still an error.
    assert!(config.get_optional::<u16>("app.server.host").is_err());

    assert_eq!(config.get_or("app.timeout", 30_u32), 30);
    assert_eq!(config.get_or("app.server.port", 1_u16), 8080);
}

#[test]
fn test_missing_path_error() {
    let config = YamlConfig::from_str(APP_CONFIG).unwrap();
    let err = config.get::<String>("app.server.missing").unwrap_err();
    match err {
        EmbedYamlError::PathNotFound { path, code, .. } => {
            assert_eq!(path, "app.server.missing");
            assert_eq!(code, Some(305));
        }
        other => panic!("Expected PathNotFound, got {:?}", other),
    }
}

#[test]
fn test_get_keys_on_non_map() {
    let config = YamlConfig::from_str(APP_CONFIG).unwrap();
    let err = config.get_keys("app.features").unwrap_err();
    assert!(matches!(err, EmbedYamlError::TypeError { code: Some(306), .. }));
    assert_eq!(config.get_keys("").unwrap(), vec!["app"]);
}

#[test]
fn test_conversion_error_includes_line() {
    let content = "server:\n  host: localhost\n  port: not-a-number\n";
    let config = YamlConfig::from_str(content).unwrap();

    let err = config.get::<u16>("server.port").unwrap_err();
    match err {
        EmbedYamlError::ScalarConversionError { value, hint, .. } => {
            assert_eq!(value, "not-a-number");
            let hint = hint.expect("hint should carry line info");
            assert!(hint.contains("line 3"), "unexpected hint: {}", hint);
            assert!(hint.contains("port: not-a-number"));
        }
        other => panic!("Expected ScalarConversionError, got {:?}", other),
    }

    let err = config.get::<u16>("server").unwrap_err();
    match err {
        EmbedYamlError::TypeError { message, .. } => assert!(message.contains("(line 1)")),
        other => panic!("Expected TypeError, got {:?}", other),
    }
}

#[test]
fn test_mutation_drops_stale_line_info() {
    let content = "server:\n  host: localhost\n  port: 8080\n";
    let mut config = YamlConfig::from_str(content).unwrap();

    config.root_mut().get_or_insert("server").get_or_insert("port").assign("changed");
    let err = config.get::<u16>("server.port").unwrap_err();
    match err {
        EmbedYamlError::ScalarConversionError { value, hint, .. } => {
            assert_eq!(value, "changed");
            assert!(hint.is_none(), "stale line info: {:?}", hint);
        }
        other => panic!("Expected ScalarConversionError, got {:?}", other),
    }
}

#[test]
fn test_string_enum_validation() {
    let content = "theme:\n  border: rounded\n  invalid: invalid_style\n";
    let config = YamlConfig::from_str(content).expect("Failed to parse config");

    let result = config.get_string_enum("theme.border", &["plain", "rounded", "thick"]);
    assert_eq!(result.unwrap(), "rounded");

    let result = config.get_string_enum("theme.border", &["PLAIN", "ROUNDED"]);
    assert_eq!(result.unwrap(), "rounded");

    let result = config.get_string_enum("theme.invalid", &["plain", "rounded", "thick"]);
    match result.unwrap_err() {
        EmbedYamlError::ValidationError { message, line, hint, code, .. } => {
            assert!(message.contains("invalid_style"));
            assert_eq!(line, 3);
            assert!(hint.unwrap().contains("plain, rounded, thick"));
            assert_eq!(code, Some(451));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_get_validated() {
    let config = YamlConfig::from_str(APP_CONFIG).unwrap();

    let port: u16 = config
        .get_validated("app.server.port", |p| *p >= 1024, "a port of 1024 or above")
        .unwrap();
    assert_eq!(port, 8080);

    let err = config
        .get_validated("app.max_connections", |n: &u32| *n <= 10, "at most 10")
        .unwrap_err();
    assert!(matches!(err, EmbedYamlError::ValidationError { code: Some(450), .. }));
}

#[test]
fn test_from_file_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "name: demo\nitems:\n- a\n- b\n").unwrap();

    let mut config = YamlConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config.source_path(), Some(path.as_path()));
    assert_eq!(config.get::<Vec<String>>("items").unwrap(), vec!["a", "b"]);

    config.root_mut().get_or_insert("items").append("c");
    config.root_mut().get_or_insert("owner").assign("ops");

    let out = dir.path().join("saved.yaml");
    config.save(&out).expect("Failed to save config");
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "name: demo\nitems:\n- a\n- b\n- c\nowner: ops\n"
    );

    let reloaded = YamlConfig::from_file(&out).unwrap();
    assert_eq!(reloaded.root(), config.root());
}

#[test]
fn test_from_file_missing() {
    let err = YamlConfig::from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, EmbedYamlError::FileError { code: Some(301), .. }));
}

#[test]
fn test_from_file_with_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let primary = dir.path().join("primary.yaml");
    let fallback = dir.path().join("fallback.yaml");
    fs::write(&fallback, "source: fallback\n").unwrap();

    let config = YamlConfig::from_file_with_fallback(&primary, &fallback).unwrap();
    assert_eq!(config.get::<String>("source").unwrap(), "fallback");

    fs::write(&primary, "source: primary\n").unwrap();
    let config = YamlConfig::from_file_with_fallback(&primary, &fallback).unwrap();
    assert_eq!(config.get::<String>("source").unwrap(), "primary");

    // A broken primary is reported instead of silently falling back.
    fs::write(&primary, "a: b: c\n").unwrap();
    let err = YamlConfig::from_file_with_fallback(&primary, &fallback).unwrap_err();
    assert_eq!(err.kind(), crate::ErrorKind::Parse);

    let missing = dir.path().join("missing.yaml");
    let err = YamlConfig::from_file_with_fallback(&missing, &missing).unwrap_err();
    assert!(matches!(err, EmbedYamlError::FileError { code: Some(302), .. }));
}

#[test]
fn test_from_reader_and_root_as() {
    let config = YamlConfig::from_reader("a: 1\nb: 2\n".as_bytes()).unwrap();
    let map: HashMap<String, i64> = config.root_as().unwrap();
    assert_eq!(map["a"], 1);
    assert_eq!(map["b"], 2);
    assert!(config.source_path().is_none());
}

#[test]
fn test_from_node_round_trips_through_text() {
    let mut root = Node::new(crate::NodeKind::Map);
    root.get_or_insert("title").assign("built in code");
    let config = YamlConfig::from_node(root);

    assert_eq!(config.to_yaml_string().unwrap(), "title: built in code\n");
    assert_eq!(config.get::<String>("title").unwrap(), "built in code");
    assert!(config.into_root().is_map());
}

#[test]
fn test_resolve_path_expands_home() {
    let base = Path::new("/base");
    assert_eq!(helpers::resolve_path("/abs/file.yaml", base), PathBuf::from("/abs/file.yaml"));
    assert_eq!(helpers::resolve_path("rel.yaml", base), PathBuf::from("/base/rel.yaml"));
    if let Some(home) = dirs::home_dir() {
        assert_eq!(helpers::resolve_path("~/cfg.yaml", base), home.join("cfg.yaml"));
    }
}

#[test]
fn test_find_config_line() {
    let content = "a:\n  b: 1\nc:\n  b: 2\nlist:\n- name: x\n";
    assert_eq!(helpers::find_config_line("c.b", content), (4, "b: 2".to_string()));
    assert_eq!(helpers::find_config_line("a.b", content), (2, "b: 1".to_string()));
    assert_eq!(helpers::find_config_line("list.0.name", content), (6, "- name: x".to_string()));
    assert_eq!(helpers::find_config_line("zzz", content).0, 0);
}
