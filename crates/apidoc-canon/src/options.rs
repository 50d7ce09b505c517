use std::collections::BTreeSet;
use std::path::PathBuf;

use apidoc_model::{Annotation, SymbolTree};
use regex::Regex;

use crate::imports::ImportMode;

/// Meta-annotation that marks an annotation type as part of the API surface
/// under [`AnnotationPolicy::Documented`].
pub const DOCUMENTED_MARKER: &str = "java.lang.annotation.Documented";

/// Annotations that are printed when no explicit allow-list is configured.
pub const DEFAULT_ALLOWED_ANNOTATIONS: &[&str] = &[
    "java.lang.Deprecated",
    "android.support.annotation.AnyThread",
    "android.support.annotation.BinderThread",
    "android.support.annotation.MainThread",
    "android.support.annotation.UiThread",
    "android.support.annotation.WorkerThread",
];

/// Decides which annotations are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationPolicy {
    /// Only annotations whose qualified name is listed.
    AllowList(BTreeSet<String>),
    /// Only annotations whose own type, resolved in the symbol tree, carries
    /// [`DOCUMENTED_MARKER`]. Unresolvable annotation types are dropped.
    Documented,
}

impl AnnotationPolicy {
    pub fn allow_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnnotationPolicy::AllowList(names.into_iter().map(Into::into).collect())
    }

    pub fn retains(&self, tree: &SymbolTree, annotation: &Annotation) -> bool {
        match self {
            AnnotationPolicy::AllowList(names) => names.contains(&annotation.name),
            AnnotationPolicy::Documented => tree
                .resolve(&annotation.name)
                .map(|id| {
                    tree[id]
                        .annotations
                        .iter()
                        .any(|meta| meta.name == DOCUMENTED_MARKER)
                })
                .unwrap_or(false),
        }
    }
}

impl Default for AnnotationPolicy {
    fn default() -> Self {
        AnnotationPolicy::allow_list(DEFAULT_ALLOWED_ANNOTATIONS.iter().copied())
    }
}

/// Everything that influences the canonical text besides the tree itself.
#[derive(Debug, Clone, Default)]
pub struct CanonOptions {
    /// A type is skipped when any pattern matches somewhere in its qualified
    /// name.
    pub skip_classes: Vec<Regex>,
    /// Stripped from source paths written to the location map.
    pub root_dir: Option<PathBuf>,
    pub annotations: AnnotationPolicy,
    pub imports: ImportMode,
}

impl CanonOptions {
    pub fn is_skipped(&self, qualified_name: &str) -> bool {
        self.skip_classes
            .iter()
            .any(|pattern| pattern.is_match(qualified_name))
    }
}
