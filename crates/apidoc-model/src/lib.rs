//! The read-only symbol tree consumed by the API canonicalizer.
//!
//! A front-end (javadoc, a compiler plugin, ...) parses sources and hands the
//! resulting packages, types and members over either directly through
//! [`SymbolTree::new`] or as JSON through [`SymbolTree::from_json_str`].
//! The tree is validated once on construction and never mutated afterwards.

#![forbid(unsafe_code)]

mod decl;
mod error;
mod tree;

pub use crate::decl::{
    Annotation, AnnotationElement, AnnotationValue, Constructor, Decl, EnumConstant, Field,
    Member, MemberKind, Method, Parameter, Position, TypeDef, TypeKind, TypeParam, TypeRef,
    Visibility, WildcardBound,
};
pub use crate::error::{ModelError, Result};
pub use crate::tree::{Package, PackageDecl, SymbolTree, SymbolTreeDecl, TypeId};
