use std::io::Write;
use std::path::Path;

use apidoc_config::{AnnotationPolicyKind, ApiDocConfig, ConfigError};
use pretty_assertions::assert_eq;

#[test]
fn loads_every_documented_key() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
output = "build/api.txt"
root_dir = "/work/src"
skip_class_regex = ["\\.internal\\.", "\\$"]
doc_title = "Demo"
window_title = "Demo"
directory = "build/docs"
imports = false

[annotations]
policy = "documented"
allow = ["java.lang.Deprecated"]

[logging]
level = "debug"
json = true
"#,
    )
    .unwrap();

    let config = ApiDocConfig::load_from_path(file.path()).unwrap();

    assert_eq!(config.output.as_deref(), Some(Path::new("build/api.txt")));
    assert_eq!(config.root_dir.as_deref(), Some(Path::new("/work/src")));
    assert_eq!(config.skip_class_regex, vec![r"\.internal\.", r"\$"]);
    assert!(!config.imports);
    assert_eq!(config.annotations.policy, AnnotationPolicyKind::Documented);
    assert_eq!(config.annotations.allow, vec!["java.lang.Deprecated"]);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("apidoc.toml");

    let err = ApiDocConfig::load_from_path(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
    assert!(err.to_string().contains("apidoc.toml"), "{err}");
}

#[test]
fn type_errors_are_reported_as_toml_errors() {
    let err = ApiDocConfig::load_from_str("imports = \"yes\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
}

#[test]
fn unknown_annotation_policy_is_rejected() {
    let err = ApiDocConfig::load_from_str("[annotations]\npolicy = \"everything\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
}
