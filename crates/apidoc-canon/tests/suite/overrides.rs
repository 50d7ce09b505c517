use apidoc_canon::render_api;
use apidoc_model::{SymbolTree, TypeDef, TypeRef};
use pretty_assertions::assert_eq;

use super::fixture::*;

fn render_type(tree: &SymbolTree, name: &str) -> Vec<String> {
    let text = render_api(tree, &qualified()).text;
    let header = format!("  class {name} ");
    let mut block: Vec<String> = text
        .lines()
        .skip_while(|line| !line.starts_with(&header))
        .take_while(|line| *line != "  }")
        .map(str::to_string)
        .collect();
    block.remove(0);
    block
}

fn with_methods(mut ty: TypeDef, methods: Vec<apidoc_model::Member>) -> TypeDef {
    ty.members = methods;
    ty
}

#[test]
fn interface_method_is_suppressed_on_the_implementation() {
    let iface = with_methods(
        interface("demo", "Runner"),
        vec![method("run", "public abstract", void(), vec![])],
    );
    let mut imp = with_methods(
        class("demo", "Impl"),
        vec![
            method("run", "public", void(), vec![]),
            method("stop", "public", void(), vec![]),
        ],
    );
    imp.interfaces.push(TypeRef::named("demo.Runner"));
    let tree = tree(vec![package("demo", vec![iface, imp])]);

    assert_eq!(
        render_type(&tree, "Impl"),
        vec!["    method public void stop();"]
    );
    // The declaring interface still lists it.
    assert!(render_api(&tree, &qualified())
        .text
        .contains("    method public abstract void run();\n"));
}

#[test]
fn interfaces_are_searched_transitively() {
    let base = with_methods(
        interface("demo", "Base"),
        vec![method("close", "public abstract", void(), vec![])],
    );
    let mut middle = interface("demo", "Middle");
    middle.interfaces.push(TypeRef::named("demo.Base"));
    let mut imp = with_methods(
        class("demo", "Impl"),
        vec![method("close", "public", void(), vec![])],
    );
    imp.interfaces.push(TypeRef::named("demo.Middle"));
    let tree = tree(vec![package("demo", vec![base, middle, imp])]);

    assert_eq!(render_type(&tree, "Impl"), Vec::<String>::new());
}

#[test]
fn immediate_superclass_method_is_suppressed() {
    let parent = with_methods(
        class("demo", "Parent"),
        vec![method("draw", "public", void(), vec![int()])],
    );
    let mut child = with_methods(
        class("demo", "Child"),
        vec![
            method("draw", "public", void(), vec![int()]),
            method("draw", "public", void(), vec![string()]),
        ],
    );
    child.super_class = Some(TypeRef::named("demo.Parent"));
    let tree = tree(vec![package("demo", vec![parent, child])]);

    assert_eq!(
        render_type(&tree, "Child"),
        vec!["    method public void draw(java.lang.String);"]
    );
}

#[test]
fn grandparent_declarations_are_not_consulted() {
    let grandparent = with_methods(
        class("demo", "GrandParent"),
        vec![method("draw", "public", void(), vec![])],
    );
    let mut parent = class("demo", "Parent");
    parent.super_class = Some(TypeRef::named("demo.GrandParent"));
    let mut child = with_methods(
        class("demo", "Child"),
        vec![method("draw", "public", void(), vec![])],
    );
    child.super_class = Some(TypeRef::named("demo.Parent"));
    let tree = tree(vec![package("demo", vec![grandparent, parent, child])]);

    assert_eq!(
        render_type(&tree, "Child"),
        vec!["    method public void draw();"]
    );
}

#[test]
fn generic_arguments_do_not_affect_override_detection() {
    let list_of = |arg: TypeRef| TypeRef::generic("java.util.List", vec![arg]);
    let iface = with_methods(
        interface("demo", "Sink"),
        vec![method(
            "accept",
            "public abstract",
            void(),
            vec![list_of(TypeRef::var("T"))],
        )],
    );
    let mut imp = with_methods(
        class("demo", "StringSink"),
        vec![method("accept", "public", void(), vec![list_of(string())])],
    );
    imp.interfaces
        .push(TypeRef::generic("demo.Sink", vec![string()]));
    let tree = tree(vec![package("demo", vec![iface, imp])]);

    assert_eq!(render_type(&tree, "StringSink"), Vec::<String>::new());
}

#[test]
fn fields_and_constructors_are_never_suppressed() {
    let parent = with_methods(
        class("demo", "Parent"),
        vec![
            field("size", "public", int(), None),
            ctor("Parent", "public", vec![]),
        ],
    );
    let mut child = with_methods(
        class("demo", "Child"),
        vec![
            field("size", "public", int(), None),
            ctor("Child", "public", vec![]),
        ],
    );
    child.super_class = Some(TypeRef::named("demo.Parent"));
    let tree = tree(vec![package("demo", vec![parent, child])]);

    assert_eq!(
        render_type(&tree, "Child"),
        vec!["    ctor public Child();", "    field public int size;"]
    );
}

#[test]
fn ancestors_outside_the_tree_are_ignored() {
    let mut imp = with_methods(
        class("demo", "Task"),
        vec![method("run", "public", void(), vec![])],
    );
    imp.interfaces.push(TypeRef::named("java.lang.Runnable"));
    let tree = tree(vec![package("demo", vec![imp])]);

    assert_eq!(
        render_type(&tree, "Task"),
        vec!["    method public void run();"]
    );
}
