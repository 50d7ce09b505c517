//! Canonical text for type references, annotations and declarations.

use apidoc_model::{
    Annotation, Member, Parameter, SymbolTree, TypeDef, TypeId, TypeKind, TypeParam, TypeRef,
    WildcardBound,
};

use crate::imports::ImportTable;
use crate::options::AnnotationPolicy;
use crate::overrides::walk_hierarchy;

const OBJECT: &str = "java.lang.Object";

/// Renders declarations into single canonical lines.
///
/// Every qualified name goes through the caller's [`ImportTable`], so the
/// same renderer produces shortened or fully-qualified text depending on the
/// table's mode.
pub struct Renderer<'t> {
    tree: &'t SymbolTree,
    policy: &'t AnnotationPolicy,
}

impl<'t> Renderer<'t> {
    pub fn new(tree: &'t SymbolTree, policy: &'t AnnotationPolicy) -> Self {
        Self { tree, policy }
    }

    /// `Base<Arg1,Arg2>[]`, a type variable name, or a wildcard.
    pub fn type_ref(&self, ty: &TypeRef, imports: &mut ImportTable) -> String {
        match ty {
            TypeRef::Named { name, args, dims } => {
                let mut out = imports.alias(name);
                if !args.is_empty() {
                    let args: Vec<String> =
                        args.iter().map(|arg| self.type_ref(arg, imports)).collect();
                    out.push('<');
                    out.push_str(&args.join(","));
                    out.push('>');
                }
                push_dims(&mut out, *dims);
                out
            }
            TypeRef::Var { name, dims } => {
                let mut out = name.clone();
                push_dims(&mut out, *dims);
                out
            }
            TypeRef::Wildcard { bound } => match bound {
                WildcardBound::Unbounded => "?".to_string(),
                WildcardBound::Extends(inner) => {
                    format!("? extends {}", self.type_ref(inner, imports))
                }
                WildcardBound::Super(inner) => format!("? super {}", self.type_ref(inner, imports)),
            },
        }
    }

    /// `T` or `T extends A & B`.
    pub fn type_param(&self, param: &TypeParam, imports: &mut ImportTable) -> String {
        if param.bounds.is_empty() {
            return param.name.clone();
        }
        let bounds: Vec<String> = param
            .bounds
            .iter()
            .map(|bound| self.type_ref(bound, imports))
            .collect();
        format!("{} extends {}", param.name, bounds.join(" & "))
    }

    /// `<T,U extends X> ` including the trailing space, or nothing.
    pub fn type_params(&self, params: &[TypeParam], imports: &mut ImportTable) -> String {
        if params.is_empty() {
            return String::new();
        }
        let params: Vec<String> = params
            .iter()
            .map(|param| self.type_param(param, imports))
            .collect();
        format!("<{}> ", params.join(","))
    }

    /// `@Name(key=value,...)`; parentheses only when values are present.
    pub fn annotation(&self, annotation: &Annotation, imports: &mut ImportTable) -> String {
        let mut out = format!("@{}", imports.alias(&annotation.name));
        if !annotation.values.is_empty() {
            let values: Vec<String> = annotation
                .values
                .iter()
                .map(|pair| format!("{}={}", pair.name, pair.value))
                .collect();
            out.push('(');
            out.push_str(&values.join(","));
            out.push(')');
        }
        out
    }

    /// Retained annotations sorted by name, each followed by a space.
    pub fn member_annotations(
        &self,
        annotations: &[Annotation],
        imports: &mut ImportTable,
    ) -> String {
        let mut sorted: Vec<&Annotation> = annotations.iter().collect();
        sorted.sort_by(|a, b| {
            a.simple_name()
                .cmp(b.simple_name())
                .then_with(|| a.name.cmp(&b.name))
        });
        self.annotation_fragment(sorted, imports)
    }

    fn annotation_fragment<'a>(
        &self,
        annotations: impl IntoIterator<Item = &'a Annotation>,
        imports: &mut ImportTable,
    ) -> String {
        let mut rendered: Vec<String> = Vec::new();
        for annotation in annotations {
            if !self.policy.retains(self.tree, annotation) {
                continue;
            }
            let text = self.annotation(annotation, imports);
            if !rendered.contains(&text) {
                rendered.push(text);
            }
        }

        if rendered.is_empty() {
            return String::new();
        }
        let mut out = rendered.join(" ");
        out.push(' ');
        out
    }

    /// `(A, @B C, int...)`.
    pub fn params(&self, params: &[Parameter], imports: &mut ImportTable) -> String {
        let rendered: Vec<String> = params
            .iter()
            .map(|param| {
                let mut out = self.member_annotations(&param.annotations, imports);
                out.push_str(&self.type_ref(&param.ty, imports));
                out
            })
            .collect();

        let mut out = format!("({}", rendered.join(", "));
        let is_varargs = params.last().is_some_and(|param| param.varargs);
        if is_varargs && out.ends_with("[]") {
            out.truncate(out.len() - 2);
            out.push_str("...");
        }
        out.push(')');
        out
    }

    /// Header line opening a type block, e.g.
    /// `@Deprecated class Foo<T> extends Bar implements Baz {`.
    pub fn type_header(&self, id: TypeId, imports: &mut ImportTable) -> String {
        let tree = self.tree;
        let ty = tree.type_def(id);

        let lineage = walk_hierarchy(tree, id, |ty| ty.super_class.iter().collect());
        let inherited = lineage
            .into_iter()
            .flat_map(|ancestor| tree.type_def(ancestor).annotations.iter());
        let mut line = self.annotation_fragment(inherited, imports);

        line.push_str(match ty.kind {
            TypeKind::Class => "class ",
            TypeKind::Interface => "interface ",
            TypeKind::Enum => "enum ",
            TypeKind::Annotation => "@interface ",
        });
        line.push_str(&ty.name);

        let type_params = self.type_params(&ty.type_params, imports);
        if type_params.is_empty() {
            line.push(' ');
        } else {
            line.push_str(&type_params);
        }

        if let Some(super_class) = &ty.super_class {
            if super_class.base_name() != OBJECT && ty.kind != TypeKind::Enum {
                line.push_str("extends ");
                line.push_str(&self.type_ref(super_class, imports));
                line.push(' ');
            }
        }

        if !ty.interfaces.is_empty() && ty.kind != TypeKind::Annotation {
            let mut interfaces: Vec<&TypeRef> = ty.interfaces.iter().collect();
            interfaces.sort_by(|a, b| {
                self.relative_name(a)
                    .cmp(self.relative_name(b))
                    .then_with(|| a.base_name().cmp(b.base_name()))
            });
            let rendered: Vec<String> = interfaces
                .into_iter()
                .map(|iface| self.type_ref(iface, imports))
                .collect();
            line.push_str("implements ");
            line.push_str(&rendered.join(" "));
            line.push(' ');
        }

        line.push('{');
        line
    }

    /// Name relative to the declaring package (`Outer.Inner`). Types outside
    /// the tree fall back to the suffix starting at the first class segment.
    fn relative_name<'a>(&self, ty: &'a TypeRef) -> &'a str
    where
        't: 'a,
    {
        let tree = self.tree;
        if let Some(id) = tree.resolve_ref(ty) {
            return &tree.type_def(id).name;
        }
        let name = ty.base_name();
        let mut offset = 0;
        for segment in name.split('.') {
            if segment.chars().next().is_some_and(|c| !c.is_lowercase()) {
                return &name[offset..];
            }
            offset += segment.len() + 1;
        }
        name
    }

    /// One member line, e.g. `method public static <T> T f(T...);`.
    pub fn member_line(&self, owner: &TypeDef, member: &Member, imports: &mut ImportTable) -> String {
        let decl = member.decl();

        let mut line = String::from(tag(member));
        line.push(' ');
        line.push_str(&self.member_annotations(&decl.annotations, imports));

        if let Member::Method(method) = member {
            if method.is_default {
                line.push_str("default ");
            }
        }

        let modifiers: Vec<&str> = decl.modifiers.split_whitespace().collect();
        if !modifiers.is_empty() {
            line.push_str(&modifiers.join(" "));
            line.push(' ');
        }

        match member {
            Member::Constructor(ctor) => {
                line.push_str(&self.type_params(&ctor.type_params, imports));
                line.push_str(&decl.name);
                line.push_str(&self.params(&ctor.params, imports));
            }
            Member::Method(method) => {
                line.push_str(&self.type_params(&method.type_params, imports));
                line.push_str(&self.type_ref(&method.return_type, imports));
                line.push(' ');
                line.push_str(&decl.name);
                line.push_str(&self.params(&method.params, imports));
            }
            Member::Field(field) => {
                line.push_str(&self.type_ref(&field.ty, imports));
                line.push(' ');
                line.push_str(&decl.name);
                if let Some(value) = &field.constant_value {
                    line.push_str(" = ");
                    line.push_str(value);
                }
            }
            Member::EnumConstant(_) => {
                line.push_str(&self.type_ref(&owner.as_type_ref(), imports));
                line.push(' ');
                line.push_str(&decl.name);
            }
            Member::Element(element) => {
                line.push_str(&self.type_ref(&element.return_type, imports));
                line.push(' ');
                line.push_str(&decl.name);
                line.push_str("()");
            }
        }

        line.push(';');
        line
    }
}

fn tag(member: &Member) -> &'static str {
    match member {
        Member::Constructor(_) => "ctor",
        Member::Method(_) => "method",
        Member::Field(_) => "field",
        Member::EnumConstant(_) => "enum_constant",
        Member::Element(_) => "element",
    }
}

fn push_dims(out: &mut String, dims: u32) {
    for _ in 0..dims {
        out.push_str("[]");
    }
}
