//! A class exercising most declaration shapes at once, rendered with the
//! default options.

use apidoc_canon::{render_api, CanonOptions};
use apidoc_model::{
    Annotation, Decl, EnumConstant, Member, Position, SymbolTree, TypeDef, TypeKind, TypeParam,
    TypeRef,
};
use insta::assert_snapshot;

use super::fixture::*;

const PKG: &str = "org.mozilla.test";
const FILE: &str = "/src/org/mozilla/test/TestClass.java";

fn deprecated(mut member: Member) -> Member {
    let annotation = Annotation::new("java.lang.Deprecated");
    match &mut member {
        Member::Constructor(it) => it.decl.annotations.push(annotation),
        Member::Method(it) => it.decl.annotations.push(annotation),
        Member::Field(it) => it.decl.annotations.push(annotation),
        Member::EnumConstant(it) => it.decl.annotations.push(annotation),
        Member::Element(it) => it.decl.annotations.push(annotation),
    }
    member
}

fn nested(kind: TypeKind, name: &str) -> TypeDef {
    let mut ty = match kind {
        TypeKind::Interface => interface(PKG, name),
        _ => class(PKG, name),
    };
    ty.kind = kind;
    ty
}

fn test_class() -> SymbolTree {
    let list_of = |arg: TypeRef| TypeRef::generic("java.util.List", vec![arg]);

    let mut outer = class(PKG, "TestClass");
    outer.position = Some(Position::new(FILE, 10, 1));
    let Member::Method(mut hidden) = method("testHiddenAnnotation", "public", void(), vec![])
    else {
        unreachable!();
    };
    hidden.decl.annotations = vec![Annotation::new("java.lang.SuppressWarnings")];
    outer.members = vec![
        field("testFieldWithValue", "public", string(), Some("\"testValue\"")),
        field(
            "testFinalStaticField",
            "public static final",
            string(),
            Some("\"finalStaticValue\""),
        ),
        field("TEST_COMPOSITE_TYPE", "public static final", list_of(string()), None),
        field("testProtectedField", "protected", int(), None),
        field("testPackageProtectedField", "", int(), None),
        deprecated(field("TEST_DEPRECATED_CONST", "public static final", int(), Some("1"))),
        at(ctor("TestClass", "public", vec![]), FILE, 20, 5),
        ctor("TestClass", "public", vec![string()]),
        ctor("TestClass", "protected", vec![TypeRef::named("boolean")]),
        ctor("TestClass", "", vec![int()]),
        deprecated(ctor("TestClass", "public", vec![TypeRef::named("float")])),
        vararg_method("testVarArgsTwoArgs", "public", vec![int(), int().array(1)]),
        generic_method(
            "testTypeVariableWithMultipleBounds",
            "public",
            vec![TypeParam::new(
                "T",
                vec![
                    TypeRef::named("java.lang.Runnable"),
                    TypeRef::named("java.lang.Cloneable"),
                ],
            )],
            void(),
            vec![TypeRef::var("T")],
        ),
        generic_method(
            "testReturnNestedCompositeType",
            "public",
            vec![TypeParam::new("T", vec![])],
            list_of(list_of(TypeRef::var("T"))),
            vec![],
        ),
        Member::Method(hidden),
        method("testProtectedMethod", "protected", void(), vec![]),
        method("testPackageProtectedMethod", "", void(), vec![]),
    ];

    let mut iface = nested(TypeKind::Interface, "TestClass.TestInterface");
    iface.members = vec![method("testInterfaceMethod", "public abstract", void(), vec![])];

    let mut imp = nested(TypeKind::Class, "TestClass.TestInterfaceImpl");
    imp.interfaces = vec![TypeRef::named("org.mozilla.test.TestClass.TestInterface")];
    imp.members = vec![method("testInterfaceMethod", "public", void(), vec![])];

    let mut extends = nested(TypeKind::Class, "TestClass.TestExtends");
    extends.super_class = Some(TypeRef::named("org.mozilla.test.TestClass.TestInterfaceImpl"));

    let mut old = nested(TypeKind::Class, "TestClass.DeprecatedClass");
    old.annotations = vec![Annotation::new("java.lang.Deprecated")];

    let mut bounded = nested(TypeKind::Class, "TestClass.TestTypeBoundVariable");
    bounded.type_params = vec![TypeParam::new("T", vec![TypeRef::named("java.lang.Runnable")])];
    bounded.members = vec![method(
        "testTypeVariableMethod",
        "public",
        void(),
        vec![TypeRef::var("T")],
    )];

    let mut color = nested(TypeKind::Enum, "TestClass.Color");
    color.super_class = Some(TypeRef::generic(
        "java.lang.Enum",
        vec![TypeRef::named("org.mozilla.test.TestClass.Color")],
    ));
    color.members = ["RED", "GREEN"]
        .into_iter()
        .map(|name| {
            Member::EnumConstant(EnumConstant {
                decl: Decl::new(name, "public static final"),
            })
        })
        .collect();

    tree(vec![package(
        PKG,
        vec![bounded, imp, outer, color, extends, iface, old],
    )])
}

#[test]
fn test_class_api() {
    let options = CanonOptions {
        root_dir: Some("/src".into()),
        ..CanonOptions::default()
    };
    let rendered = render_api(&test_class(), &options);

    assert_snapshot!(rendered.text, @r###"
import java.lang.Cloneable;
import java.lang.Deprecated;
import java.lang.Runnable;
import java.lang.String;
import java.util.List;
import org.mozilla.test.TestClass;

package org.mozilla.test {
  class TestClass {
    ctor public TestClass();
    ctor @Deprecated public TestClass(float);
    ctor public TestClass(String);
    ctor protected TestClass(boolean);
    ctor TestClass(int);
    method public void testHiddenAnnotation();
    method public <T> List<List<T>> testReturnNestedCompositeType();
    method public <T extends Runnable & Cloneable> void testTypeVariableWithMultipleBounds(T);
    method public void testVarArgsTwoArgs(int, int...);
    method protected void testProtectedMethod();
    method void testPackageProtectedMethod();
    field public static final List<String> TEST_COMPOSITE_TYPE;
    field @Deprecated public static final int TEST_DEPRECATED_CONST = 1;
    field public String testFieldWithValue = "testValue";
    field public static final String testFinalStaticField = "finalStaticValue";
    field protected int testProtectedField;
    field int testPackageProtectedField;
  }

  enum TestClass.Color {
    enum_constant public static final TestClass.Color GREEN;
    enum_constant public static final TestClass.Color RED;
  }

  @Deprecated class TestClass.DeprecatedClass {
  }

  class TestClass.TestExtends extends TestClass.TestInterfaceImpl {
  }

  interface TestClass.TestInterface {
    method public abstract void testInterfaceMethod();
  }

  class TestClass.TestInterfaceImpl implements TestClass.TestInterface {
  }

  class TestClass.TestTypeBoundVariable<T extends Runnable> {
    method public void testTypeVariableMethod(T);
  }
}
"###);
}

#[test]
fn test_class_map_lines_up_with_the_text() {
    let options = CanonOptions {
        root_dir: Some("/src".into()),
        ..CanonOptions::default()
    };
    let rendered = render_api(&test_class(), &options);
    let text: Vec<&str> = rendered.text.lines().collect();
    let map: Vec<&str> = rendered.map.lines().collect();

    assert_eq!(text.len(), map.len());
    let header = text
        .iter()
        .position(|line| *line == "  class TestClass {")
        .unwrap();
    assert_eq!(map[header], "org/mozilla/test/TestClass.java:10:1");
    assert_eq!(map[header + 1], "org/mozilla/test/TestClass.java:20:5");
}
