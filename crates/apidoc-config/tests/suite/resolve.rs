use apidoc_canon::{AnnotationPolicy, ImportMode, DEFAULT_ALLOWED_ANNOTATIONS};
use apidoc_config::{AnnotationPolicyKind, ApiDocConfig};
use pretty_assertions::assert_eq;

fn with_output() -> ApiDocConfig {
    ApiDocConfig {
        output: Some("api.txt".into()),
        ..ApiDocConfig::default()
    }
}

#[test]
fn defaults_shorten_names_and_use_the_builtin_allow_list() {
    let run = with_output().resolve().unwrap();

    assert_eq!(run.output, std::path::PathBuf::from("api.txt"));
    assert_eq!(run.options.imports, ImportMode::Shorten);
    assert_eq!(
        run.options.annotations,
        AnnotationPolicy::allow_list(DEFAULT_ALLOWED_ANNOTATIONS.iter().copied())
    );
    assert!(run.options.skip_classes.is_empty());
    assert_eq!(run.options.root_dir, None);
}

#[test]
fn imports_can_be_disabled() {
    let config = ApiDocConfig {
        imports: false,
        ..with_output()
    };
    assert_eq!(config.resolve().unwrap().options.imports, ImportMode::Qualified);
}

#[test]
fn documented_policy_ignores_the_allow_list() {
    let mut config = with_output();
    config.annotations.policy = AnnotationPolicyKind::Documented;
    config.annotations.allow.clear();

    assert_eq!(
        config.resolve().unwrap().options.annotations,
        AnnotationPolicy::Documented
    );
}

#[test]
fn skip_patterns_use_search_semantics() {
    let config = ApiDocConfig {
        skip_class_regex: vec![r"\.internal\.".to_string(), "Impl$".to_string()],
        ..with_output()
    };
    let options = config.resolve().unwrap().options;

    assert!(options.is_skipped("org.demo.internal.Helper"));
    assert!(options.is_skipped("org.demo.ServiceImpl"));
    assert!(!options.is_skipped("org.demo.Service"));
}

#[test]
fn root_dir_is_carried_through() {
    let config = ApiDocConfig {
        root_dir: Some("/work/src".into()),
        ..with_output()
    };
    assert_eq!(
        config.resolve().unwrap().options.root_dir,
        Some("/work/src".into())
    );
}
