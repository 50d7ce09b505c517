//! Indented line buffer with a parallel per-line location stream.

use std::path::{Component, Path, PathBuf};

use apidoc_model::Position;

use crate::imports::{ImportMode, ImportTable};

const INDENTATION: &str = "  ";

/// Text and location map of one output unit, line-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedApi {
    pub text: String,
    pub map: String,
}

/// Owns the buffers for one output unit: body lines, their locations and the
/// import table that shortens names while the body is produced.
#[derive(Debug)]
pub struct ApiWriter {
    body: String,
    locations: String,
    imports: ImportTable,
    root_dir: Option<PathBuf>,
}

impl ApiWriter {
    pub fn new(mode: ImportMode, root_dir: Option<PathBuf>) -> Self {
        Self {
            body: String::new(),
            locations: String::new(),
            imports: ImportTable::new(mode),
            root_dir,
        }
    }

    /// A view at indentation level zero.
    pub fn root(&mut self) -> LineSink<'_> {
        LineSink {
            writer: self,
            depth: 0,
        }
    }

    fn push(&mut self, depth: usize, text: &str, location: &str) {
        for _ in 0..depth {
            self.body.push_str(INDENTATION);
        }
        self.body.push_str(text);
        self.body.push('\n');
        self.locations.push_str(location);
        self.locations.push('\n');
    }

    fn location(&self, position: &Position) -> String {
        let relative = self
            .root_dir
            .as_deref()
            .and_then(|root| position.file.strip_prefix(root).ok())
            .unwrap_or(&position.file);
        format!(
            "{}:{}:{}",
            portable_path(relative),
            position.line,
            position.column
        )
    }

    /// Prepends the import header and returns both streams. Header lines map
    /// to empty location entries.
    pub fn finish(self) -> RenderedApi {
        let imports = self.imports.imports();

        let mut text = String::new();
        let mut map = String::new();
        for imported in &imports {
            text.push_str("import ");
            text.push_str(imported);
            text.push_str(";\n");
            map.push('\n');
        }
        if !imports.is_empty() {
            text.push('\n');
            map.push('\n');
        }

        text.push_str(&self.body);
        map.push_str(&self.locations);
        RenderedApi { text, map }
    }
}

/// A view into an [`ApiWriter`] at a fixed indentation depth.
///
/// Views share the writer's buffers; [`LineSink::indent`] borrows a deeper
/// view for the duration of a nested block.
#[derive(Debug)]
pub struct LineSink<'w> {
    writer: &'w mut ApiWriter,
    depth: usize,
}

impl LineSink<'_> {
    pub fn indent(&mut self) -> LineSink<'_> {
        LineSink {
            writer: &mut *self.writer,
            depth: self.depth + 1,
        }
    }

    pub fn imports(&mut self) -> &mut ImportTable {
        &mut self.writer.imports
    }

    /// Appends a line without a source location.
    pub fn line(&mut self, text: &str) {
        self.writer.push(self.depth, text, "");
    }

    /// Appends a line tagged with the declaration that produced it.
    pub fn line_at(&mut self, text: &str, position: Option<&Position>) {
        let location = position
            .map(|position| self.writer.location(position))
            .unwrap_or_default();
        self.writer.push(self.depth, text, &location);
    }

    /// Appends an unindented blank line.
    pub fn new_line(&mut self) {
        self.writer.push(0, "", "");
    }
}

fn portable_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        let part = match component {
            Component::RootDir => {
                out.push('/');
                continue;
            }
            Component::Prefix(prefix) => prefix.as_os_str().to_string_lossy(),
            Component::CurDir => continue,
            Component::ParentDir => "..".into(),
            Component::Normal(part) => part.to_string_lossy(),
        };
        if !out.is_empty() && !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(&part);
    }
    out
}
