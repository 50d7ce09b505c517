use apidoc_canon::{render_api, CanonOptions};
use apidoc_model::TypeRef;
use pretty_assertions::assert_eq;

use super::fixture::*;

#[test]
fn nested_generics_shorten_and_import_once() {
    let nested = TypeRef::generic(
        "java.util.List",
        vec![TypeRef::generic("java.util.List", vec![string()])],
    );
    let mut ty = class("demo", "Nested");
    ty.members = vec![field("rows", "public", nested, None)];
    let rendered = render_api(&tree(vec![package("demo", vec![ty])]), &CanonOptions::default());

    assert_eq!(
        rendered.text,
        "import java.lang.String;\nimport java.util.List;\n\npackage demo {\n  class Nested {\n    field public List<List<String>> rows;\n  }\n}\n"
    );
}

#[test]
fn first_alias_wins_and_later_conflicts_stay_qualified() {
    let mut ty = class("demo", "Clash");
    ty.members = vec![
        field("first", "public", TypeRef::named("a.Foo"), None),
        field("second", "public", TypeRef::named("b.Foo"), None),
        field("third", "public", TypeRef::named("a.Foo"), None),
    ];
    let rendered = render_api(&tree(vec![package("demo", vec![ty])]), &CanonOptions::default());

    assert_eq!(
        rendered.text,
        "import a.Foo;\n\npackage demo {\n  class Clash {\n    field public Foo first;\n    field public b.Foo second;\n    field public Foo third;\n  }\n}\n"
    );
}

#[test]
fn nested_types_import_their_outermost_class() {
    let mut ty = class("demo", "Cache");
    ty.members = vec![field(
        "entry",
        "public",
        TypeRef::generic("java.util.Map.Entry", vec![string(), int()]),
        None,
    )];
    let rendered = render_api(&tree(vec![package("demo", vec![ty])]), &CanonOptions::default());

    assert!(rendered.text.starts_with("import java.lang.String;\nimport java.util.Map;\n\n"));
    assert!(rendered
        .text
        .contains("    field public Map.Entry<String,int> entry;\n"));
}

#[test]
fn the_alias_table_spans_packages() {
    let mut first = class("org.a", "First");
    first.members = vec![field("foo", "public", TypeRef::named("x.Foo"), None)];
    let mut second = class("org.b", "Second");
    second.members = vec![field("foo", "public", TypeRef::named("y.Foo"), None)];
    let tree = tree(vec![
        package("org.a", vec![first]),
        package("org.b", vec![second]),
    ]);
    let text = render_api(&tree, &CanonOptions::default()).text;

    assert!(text.starts_with("import x.Foo;\n\n"));
    assert!(text.contains("    field public y.Foo foo;\n"));
}

#[test]
fn primitives_and_default_package_names_are_never_imported() {
    let mut ty = class("demo", "Plain");
    ty.members = vec![
        field("count", "public", int(), None),
        field("top", "public", TypeRef::named("TopLevel"), None),
    ];
    let rendered = render_api(&tree(vec![package("demo", vec![ty])]), &CanonOptions::default());

    assert!(rendered.text.starts_with("package demo {\n"));
}
