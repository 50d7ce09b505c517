//! Per-output import aliasing.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Shorten names to their class segment and emit an import header.
    #[default]
    Shorten,
    /// Render every name fully qualified; no import header.
    Qualified,
}

/// Maps a class-name alias (`List`) to the qualified prefix it imports
/// (`java.util.List`).
///
/// An alias is registered at most once; a later, different prefix for the
/// same alias is rendered fully qualified instead of overwriting it.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    mode: ImportMode,
    aliases: BTreeMap<String, String>,
}

impl ImportTable {
    pub fn new(mode: ImportMode) -> Self {
        Self {
            mode,
            aliases: BTreeMap::new(),
        }
    }

    /// Returns the text to print for `path`, registering an import when the
    /// path can be shortened.
    pub fn alias(&mut self, path: &str) -> String {
        if self.mode == ImportMode::Qualified {
            return path.to_string();
        }

        let segments: Vec<&str> = path.split('.').collect();
        // Primitives, type variables and unqualified names: nothing to import.
        let Some(class_idx) = segments.iter().position(|segment| !starts_lowercase(segment))
        else {
            return path.to_string();
        };
        if class_idx == 0 {
            return path.to_string();
        }

        let base = segments[class_idx];
        let imported = segments[..=class_idx].join(".");

        match self.aliases.get(base) {
            Some(existing) if *existing != imported => {
                tracing::debug!(
                    target: "apidoc.canon",
                    alias = base,
                    existing = %existing,
                    conflicting = %imported,
                    "import alias conflict, keeping qualified name"
                );
                return path.to_string();
            }
            Some(_) => {}
            None => {
                self.aliases.insert(base.to_string(), imported);
            }
        }

        segments[class_idx..].join(".")
    }

    /// Imported prefixes, sorted and de-duplicated.
    pub fn imports(&self) -> Vec<&str> {
        let mut imports: Vec<&str> = self.aliases.values().map(String::as_str).collect();
        imports.sort_unstable();
        imports.dedup();
        imports
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn starts_lowercase(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_lowercase)
}
