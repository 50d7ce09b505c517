//! Canonical, diff-friendly text rendering of a Java API surface.
//!
//! The engine walks a [`SymbolTree`] in a total, deterministic order and emits
//! one line per package, type and member, plus a parallel location map that
//! points every line back at its declaration:
//!
//! ```text
//! package demo {
//!   class Demo {
//!     ctor public Demo();
//!     field public java.lang.String value = "x";
//!   }
//! }
//! ```
//!
//! Methods that merely restate an inherited declaration are suppressed, and
//! qualified names are shortened through a per-output import table.

#![forbid(unsafe_code)]

mod engine;
mod error;
mod imports;
mod options;
mod order;
mod overrides;
mod render;
mod sink;
mod writer;

use std::path::Path;

use apidoc_model::SymbolTree;

pub use crate::engine::Canonicalizer;
pub use crate::error::CanonError;
pub use crate::imports::{ImportMode, ImportTable};
pub use crate::options::{
    AnnotationPolicy, CanonOptions, DEFAULT_ALLOWED_ANNOTATIONS, DOCUMENTED_MARKER,
};
pub use crate::order::{api_order, sorted, ApiItem};
pub use crate::overrides::{erased_params, walk_hierarchy, OverrideResolver};
pub use crate::render::Renderer;
pub use crate::sink::{map_path, OutputFiles};
pub use crate::writer::{ApiWriter, LineSink, RenderedApi};

/// Renders the canonical text and location map in memory.
pub fn render_api(tree: &SymbolTree, options: &CanonOptions) -> RenderedApi {
    let mut writer = ApiWriter::new(options.imports, options.root_dir.clone());
    Canonicalizer::new(tree, options).write_api(&mut writer);
    writer.finish()
}

/// Renders the API into `output` and `<output>.map`.
///
/// Both files are staged before the tree is traversed; if either cannot be
/// created nothing is rendered and neither destination is touched.
pub fn write_api(
    tree: &SymbolTree,
    options: &CanonOptions,
    output: &Path,
) -> Result<RenderedApi, CanonError> {
    let files = OutputFiles::create(output)?;
    let rendered = render_api(tree, options);
    files.commit(&rendered)?;

    tracing::info!(
        target: "apidoc.canon",
        output = %output.display(),
        lines = rendered.text.lines().count(),
        "wrote API definition"
    );
    Ok(rendered)
}
