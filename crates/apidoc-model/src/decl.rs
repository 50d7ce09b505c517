use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A declaration's location in its source file (1-based line and column).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    /// Derives the visibility keyword from javadoc-style modifier text such as
    /// `"public static final"`. No keyword means package-private.
    pub fn from_modifiers(modifiers: &str) -> Self {
        for word in modifiers.split_whitespace() {
            match word {
                "public" => return Visibility::Public,
                "protected" => return Visibility::Protected,
                "private" => return Visibility::Private,
                _ => {}
            }
        }
        Visibility::Package
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildcardBound {
    Unbounded,
    Extends(Box<TypeRef>),
    Super(Box<TypeRef>),
}

/// A use of a type: a named (possibly generic) type, a type variable, or a
/// wildcard type argument.
///
/// Primitive types are `Named` types without a package (`int`, `void`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    Named {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeRef>,
        #[serde(default, skip_serializing_if = "is_zero")]
        dims: u32,
    },
    Var {
        name: String,
        #[serde(default, skip_serializing_if = "is_zero")]
        dims: u32,
    },
    Wildcard {
        bound: WildcardBound,
    },
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args: Vec::new(),
            dims: 0,
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args,
            dims: 0,
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        TypeRef::Var {
            name: name.into(),
            dims: 0,
        }
    }

    pub fn wildcard(bound: WildcardBound) -> Self {
        TypeRef::Wildcard { bound }
    }

    /// Returns the same type with `dims` additional array dimensions.
    ///
    /// Wildcards cannot be array element types and are returned unchanged.
    #[must_use]
    pub fn array(mut self, extra: u32) -> Self {
        match &mut self {
            TypeRef::Named { dims, .. } | TypeRef::Var { dims, .. } => *dims += extra,
            TypeRef::Wildcard { .. } => {}
        }
        self
    }

    pub fn dims(&self) -> u32 {
        match self {
            TypeRef::Named { dims, .. } | TypeRef::Var { dims, .. } => *dims,
            TypeRef::Wildcard { .. } => 0,
        }
    }

    /// Qualified name for named types, the variable name for type variables.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named { name, .. } | TypeRef::Var { name, .. } => name,
            TypeRef::Wildcard { .. } => "?",
        }
    }

    /// Trailing segment of the base name (`java.util.Map.Entry` -> `Entry`).
    pub fn simple_name(&self) -> &str {
        let name = self.base_name();
        name.rsplit('.').next().unwrap_or(name)
    }
}

/// A declared type parameter, `T extends A & B`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bounds: Vec<TypeRef>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>, bounds: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Qualified name of the annotation type.
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<AnnotationValue>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push(AnnotationValue {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Properties shared by every member kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decl {
    pub name: String,
    /// Javadoc-style modifier text, e.g. `"public static final"`.
    #[serde(default)]
    pub modifiers: String,
    /// Explicit visibility; derived from `modifiers` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Decl {
    pub fn new(name: impl Into<String>, modifiers: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: modifiers.into(),
            visibility: None,
            annotations: Vec::new(),
            position: None,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
            .unwrap_or_else(|| Visibility::from_modifiers(&self.modifiers))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Set on a trailing `T...` parameter. Its `ty` already carries the
    /// vararg's array dimension.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub varargs: bool,
}

impl Parameter {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            annotations: Vec::new(),
            varargs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(flatten)]
    pub decl: Decl,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    #[serde(flatten)]
    pub decl: Decl,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
    pub return_type: TypeRef,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(flatten)]
    pub decl: Decl,
    pub ty: TypeRef,
    /// Source text of the compile-time constant, e.g. `"\"x\""` or `1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstant {
    #[serde(flatten)]
    pub decl: Decl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationElement {
    #[serde(flatten)]
    pub decl: Decl,
    pub return_type: TypeRef,
}

/// Every member kind a type can declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    Constructor(Constructor),
    Method(Method),
    Field(Field),
    EnumConstant(EnumConstant),
    Element(AnnotationElement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberKind {
    Constructor,
    Method,
    Element,
    EnumConstant,
    Field,
}

impl MemberKind {
    /// Order in which member groups appear inside a type block.
    pub const EMIT_ORDER: [MemberKind; 5] = [
        MemberKind::Constructor,
        MemberKind::Method,
        MemberKind::Element,
        MemberKind::EnumConstant,
        MemberKind::Field,
    ];
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Constructor(_) => MemberKind::Constructor,
            Member::Method(_) => MemberKind::Method,
            Member::Field(_) => MemberKind::Field,
            Member::EnumConstant(_) => MemberKind::EnumConstant,
            Member::Element(_) => MemberKind::Element,
        }
    }

    pub fn decl(&self) -> &Decl {
        match self {
            Member::Constructor(it) => &it.decl,
            Member::Method(it) => &it.decl,
            Member::Field(it) => &it.decl,
            Member::EnumConstant(it) => &it.decl,
            Member::Element(it) => &it.decl,
        }
    }

    pub fn name(&self) -> &str {
        &self.decl().name
    }

    /// Parameters of executable members; empty for fields and constants.
    pub fn params(&self) -> &[Parameter] {
        match self {
            Member::Constructor(it) => &it.params,
            Member::Method(it) => &it.params,
            Member::Field(_) | Member::EnumConstant(_) | Member::Element(_) => &[],
        }
    }
}

/// A class, interface, enum or annotation type as handed over by the
/// front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Name relative to the package; nested types use `Outer.Inner`.
    pub name: String,
    pub qualified_name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub modifiers: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeDef {
    /// Creates an empty type named `name` inside `package`.
    pub fn new(kind: TypeKind, package: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        let qualified_name = if package.is_empty() {
            name.clone()
        } else {
            format!("{package}.{name}")
        };
        Self {
            name,
            qualified_name,
            kind,
            modifiers: String::new(),
            visibility: None,
            super_class: None,
            interfaces: Vec::new(),
            type_params: Vec::new(),
            annotations: Vec::new(),
            position: None,
            members: Vec::new(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
            .unwrap_or_else(|| Visibility::from_modifiers(&self.modifiers))
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn members_of(&self, kind: MemberKind) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |member| member.kind() == kind)
    }

    /// A reference to this type itself, without type arguments.
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::named(self.qualified_name.clone())
    }
}
