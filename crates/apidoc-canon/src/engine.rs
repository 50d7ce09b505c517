//! Depth-first walk over packages, types and members.

use apidoc_model::{Member, MemberKind, Package, SymbolTree, TypeDef, TypeId, TypeKind};

use crate::options::CanonOptions;
use crate::order::{api_order, sorted};
use crate::overrides::OverrideResolver;
use crate::render::Renderer;
use crate::writer::{ApiWriter, LineSink};

/// Writes the canonical API of a symbol tree into an [`ApiWriter`].
pub struct Canonicalizer<'t> {
    tree: &'t SymbolTree,
    options: &'t CanonOptions,
    renderer: Renderer<'t>,
    overrides: OverrideResolver<'t>,
}

impl<'t> Canonicalizer<'t> {
    pub fn new(tree: &'t SymbolTree, options: &'t CanonOptions) -> Self {
        Self {
            tree,
            options,
            renderer: Renderer::new(tree, &options.annotations),
            overrides: OverrideResolver::new(tree),
        }
    }

    pub fn write_api(&self, writer: &mut ApiWriter) {
        let packages = sorted(self.tree.packages().iter().filter(|pkg| !pkg.external));

        let mut sink = writer.root();
        for (idx, package) in packages.into_iter().enumerate() {
            if idx > 0 {
                sink.new_line();
            }
            self.write_package(package, &mut sink);
        }
    }

    fn write_package(&self, package: &Package, sink: &mut LineSink<'_>) {
        sink.line_at(&format!("package {} {{", package.name), package.position.as_ref());

        let mut types: Vec<(TypeId, &TypeDef)> = package
            .types()
            .iter()
            .map(|&id| (id, self.tree.type_def(id)))
            .collect();
        types.sort_by(|(_, a), (_, b)| api_order(*a, *b));

        {
            let mut inner = sink.indent();
            let mut first = true;
            for (id, ty) in types {
                if self.options.is_skipped(&ty.qualified_name) {
                    tracing::debug!(
                        target: "apidoc.canon",
                        ty = %ty.qualified_name,
                        "skipping excluded type"
                    );
                    continue;
                }
                if !first {
                    inner.new_line();
                }
                first = false;
                self.write_type(id, &mut inner);
            }
        }

        sink.line("}");
    }

    fn write_type(&self, id: TypeId, sink: &mut LineSink<'_>) {
        let ty = self.tree.type_def(id);

        let header = self.renderer.type_header(id, sink.imports());
        sink.line_at(&header, ty.position.as_ref());

        {
            let mut inner = sink.indent();
            for kind in MemberKind::EMIT_ORDER {
                if kind == MemberKind::Element && ty.kind != TypeKind::Annotation {
                    continue;
                }
                for member in sorted(ty.members_of(kind)) {
                    if self.is_suppressed(id, member) {
                        continue;
                    }
                    let line = self.renderer.member_line(ty, member, inner.imports());
                    inner.line_at(&line, member.decl().position.as_ref());
                }
            }
        }

        sink.line("}");
    }

    fn is_suppressed(&self, owner: TypeId, member: &Member) -> bool {
        let Member::Method(method) = member else {
            return false;
        };
        match self.overrides.find_overridden(owner, method) {
            Some((ancestor, _)) => {
                tracing::debug!(
                    target: "apidoc.canon",
                    owner = %self.tree.type_def(owner).qualified_name,
                    method = %method.decl.name,
                    ancestor = %self.tree.type_def(ancestor).qualified_name,
                    "suppressing override"
                );
                true
            }
            None => false,
        }
    }
}
