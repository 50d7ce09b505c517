use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::decl::{Member, Position, TypeDef, TypeRef};
use crate::error::{ModelError, Result};

/// Stable index of a type inside a [`SymbolTree`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Interchange form of a package, as serialized by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Classpath context: resolvable for hierarchy walks, never emitted.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

impl PackageDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            external: false,
            types: Vec::new(),
        }
    }
}

/// Root of the interchange document: `{"packages": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTreeDecl {
    #[serde(default)]
    pub packages: Vec<PackageDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub position: Option<Position>,
    pub external: bool,
    types: Vec<TypeId>,
}

impl Package {
    pub fn types(&self) -> &[TypeId] {
        &self.types
    }
}

/// Immutable arena of every package and type the front-end produced.
///
/// Types are addressed by [`TypeId`]; superclass and interface references are
/// resolved lazily by qualified name through [`SymbolTree::resolve_ref`].
#[derive(Debug, Clone, Default)]
pub struct SymbolTree {
    packages: Vec<Package>,
    types: Vec<TypeDef>,
    by_name: HashMap<String, TypeId>,
}

impl SymbolTree {
    /// Builds the arena, validating every type.
    ///
    /// Declarations sharing a package name are merged into one [`Package`]:
    /// it is external only if every declaration is, and it keeps the
    /// earliest of the declared positions, so the result does not depend on
    /// the order the front-end listed them in.
    pub fn new(packages: Vec<PackageDecl>) -> Result<Self> {
        let mut tree = SymbolTree::default();
        let mut package_by_name: HashMap<String, usize> = HashMap::new();

        for decl in packages {
            let package_idx = *package_by_name.entry(decl.name.clone()).or_insert_with(|| {
                tree.packages.push(Package {
                    name: decl.name.clone(),
                    position: None,
                    external: true,
                    types: Vec::new(),
                });
                tree.packages.len() - 1
            });

            let package = &mut tree.packages[package_idx];
            package.external &= decl.external;
            package.position = match (package.position.take(), decl.position) {
                (Some(a), Some(b)) => Some(earliest(a, b)),
                (a, b) => a.or(b),
            };

            for ty in decl.types {
                validate_members(&ty)?;

                let id = TypeId(tree.types.len() as u32);
                if tree.by_name.insert(ty.qualified_name.clone(), id).is_some() {
                    return Err(ModelError::DuplicateType {
                        qualified_name: ty.qualified_name,
                    });
                }
                tree.types.push(ty);
                tree.packages[package_idx].types.push(id);
            }
        }

        tracing::debug!(
            target: "apidoc.model",
            packages = tree.packages.len(),
            types = tree.types.len(),
            "built symbol tree"
        );

        Ok(tree)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let decl: SymbolTreeDecl = serde_json::from_str(text)?;
        Self::new(decl.packages)
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let decl: SymbolTreeDecl = serde_json::from_reader(reader)?;
        Self::new(decl.packages)
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn types(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.types
            .iter()
            .enumerate()
            .map(|(idx, ty)| (TypeId(idx as u32), ty))
    }

    pub fn type_def(&self, id: TypeId) -> &TypeDef {
        &self.types[id.idx()]
    }

    pub fn resolve(&self, qualified_name: &str) -> Option<TypeId> {
        self.by_name.get(qualified_name).copied()
    }

    /// Resolves a named, non-array type reference to a type in the arena.
    pub fn resolve_ref(&self, ty: &TypeRef) -> Option<TypeId> {
        match ty {
            TypeRef::Named { name, dims: 0, .. } => self.resolve(name),
            _ => None,
        }
    }
}

impl std::ops::Index<TypeId> for SymbolTree {
    type Output = TypeDef;

    fn index(&self, id: TypeId) -> &TypeDef {
        self.type_def(id)
    }
}

fn earliest(a: Position, b: Position) -> Position {
    if (&b.file, b.line, b.column) < (&a.file, a.line, a.column) {
        b
    } else {
        a
    }
}

fn validate_members(ty: &TypeDef) -> Result<()> {
    for member in &ty.members {
        let params = match member {
            Member::Constructor(ctor) => &ctor.params,
            Member::Method(method) => &method.params,
            Member::Field(_) | Member::EnumConstant(_) | Member::Element(_) => continue,
        };

        let last = params.len().saturating_sub(1);
        for (idx, param) in params.iter().enumerate() {
            if !param.varargs {
                continue;
            }
            if idx != last {
                return Err(ModelError::VarargNotLast {
                    owner: ty.qualified_name.clone(),
                    member: member.name().to_string(),
                });
            }
            if param.ty.dims() == 0 {
                return Err(ModelError::VarargWithoutArray {
                    owner: ty.qualified_name.clone(),
                    member: member.name().to_string(),
                });
            }
        }
    }
    Ok(())
}
