//! Suppression of methods that only restate an ancestor's declaration.

use std::collections::HashSet;

use apidoc_model::{Method, Parameter, SymbolTree, TypeDef, TypeId, TypeRef, WildcardBound};

/// Visits `start` and every type reachable through `next`, each at most once,
/// in breadth-first order.
///
/// `next` names the edges to follow from a type (its superclass, its
/// interfaces, ...). References that do not resolve inside the tree end the
/// walk along that edge.
pub fn walk_hierarchy<'t, F>(tree: &'t SymbolTree, start: TypeId, mut next: F) -> Vec<TypeId>
where
    F: FnMut(&'t TypeDef) -> Vec<&'t TypeRef>,
{
    let mut seen = HashSet::from([start]);
    let mut order = vec![start];
    let mut cursor = 0;

    while let Some(&id) = order.get(cursor) {
        cursor += 1;
        for ty in next(tree.type_def(id)) {
            let Some(parent) = tree.resolve_ref(ty) else {
                continue;
            };
            if seen.insert(parent) {
                order.push(parent);
            }
        }
    }

    order
}

/// Finds the ancestor declaration a method overrides, if any.
///
/// Candidates are the methods of every interface in the transitive closure of
/// the owner's interfaces, plus the methods declared directly on the owner's
/// immediate superclass. Grandparent classes are not consulted.
pub struct OverrideResolver<'t> {
    tree: &'t SymbolTree,
}

impl<'t> OverrideResolver<'t> {
    pub fn new(tree: &'t SymbolTree) -> Self {
        Self { tree }
    }

    pub fn find_overridden(&self, owner: TypeId, method: &Method) -> Option<(TypeId, &'t Method)> {
        let tree = self.tree;
        let signature = erased_params(&method.params);

        self.candidates(owner).into_iter().find_map(|ancestor| {
            tree.type_def(ancestor)
                .methods()
                .find(|candidate| {
                    candidate.decl.name == method.decl.name
                        && erased_params(&candidate.params) == signature
                })
                .map(|candidate| (ancestor, candidate))
        })
    }

    fn candidates(&self, owner: TypeId) -> Vec<TypeId> {
        let owner_def = &self.tree[owner];

        let mut types: Vec<TypeId> = Vec::new();
        for iface in &owner_def.interfaces {
            let Some(iface) = self.tree.resolve_ref(iface) else {
                continue;
            };
            for id in walk_hierarchy(self.tree, iface, |ty| ty.interfaces.iter().collect()) {
                if id != owner && !types.contains(&id) {
                    types.push(id);
                }
            }
        }

        if let Some(parent) = owner_def
            .super_class
            .as_ref()
            .and_then(|ty| self.tree.resolve_ref(ty))
        {
            if parent != owner && !types.contains(&parent) {
                types.push(parent);
            }
        }

        types
    }
}

/// Parenthesized parameter types with type arguments and bounds dropped.
///
/// A vararg parameter erases to its array type, so `f(int...)` and
/// `f(int[])` have the same erased signature.
pub fn erased_params(params: &[Parameter]) -> String {
    let erased: Vec<String> = params.iter().map(|param| erase(&param.ty)).collect();
    format!("({})", erased.join(", "))
}

fn erase(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named { name, dims, .. } | TypeRef::Var { name, dims } => {
            let mut out = name.clone();
            for _ in 0..*dims {
                out.push_str("[]");
            }
            out
        }
        TypeRef::Wildcard { bound } => match bound {
            WildcardBound::Unbounded => "?".to_string(),
            WildcardBound::Extends(inner) | WildcardBound::Super(inner) => erase(inner),
        },
    }
}
