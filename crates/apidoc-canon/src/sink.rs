//! Atomic, all-or-nothing output of the canonical text and its location map.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::CanonError;
use crate::writer::RenderedApi;

/// Path of the location map that accompanies `output`.
pub fn map_path(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.as_os_str());
    name.push(".map");
    PathBuf::from(name)
}

/// Both destinations, staged as temporary files next to their final paths.
///
/// Creating the staging files is the only fallible step before traversal;
/// the destinations are replaced only by a successful [`OutputFiles::commit`].
/// Dropping an uncommitted value removes the staging files.
#[derive(Debug)]
pub struct OutputFiles {
    text: Staged,
    map: Staged,
}

#[derive(Debug)]
struct Staged {
    dest: PathBuf,
    file: NamedTempFile,
}

impl Staged {
    fn create(dest: PathBuf) -> Result<Self, CanonError> {
        let parent = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file = fs::create_dir_all(&parent)
            .and_then(|()| {
                tempfile::Builder::new()
                    .prefix(".apidoc-")
                    .suffix(".tmp")
                    .tempfile_in(&parent)
            })
            .map_err(|source| CanonError::Create {
                path: dest.clone(),
                source,
            })?;
        Ok(Self { dest, file })
    }

    fn write(&mut self, contents: &str) -> Result<(), CanonError> {
        let file = self.file.as_file_mut();
        file.write_all(contents.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|source| CanonError::Write {
                path: self.dest.clone(),
                source,
            })
    }

    fn persist(self) -> Result<(), CanonError> {
        let Staged { dest, file } = self;
        file.persist(&dest)
            .map(drop)
            .map_err(|err| CanonError::Write {
                path: dest,
                source: err.error,
            })
    }
}

impl OutputFiles {
    pub fn create(output: &Path) -> Result<Self, CanonError> {
        let text = Staged::create(output.to_path_buf())?;
        let map = Staged::create(map_path(output))?;
        Ok(Self { text, map })
    }

    /// Writes both streams, then moves them into place.
    ///
    /// The text file is renamed first; if the map cannot follow, the previous
    /// text file is put back (or the new one removed) so the pair is never
    /// left half-replaced.
    pub fn commit(mut self, rendered: &RenderedApi) -> Result<(), CanonError> {
        self.text.write(&rendered.text)?;
        self.map.write(&rendered.map)?;

        let OutputFiles { text, map } = self;
        let text_dest = text.dest.clone();
        let previous = read_existing(&text_dest)?;

        text.persist()?;
        if let Err(err) = map.persist() {
            restore(&text_dest, previous);
            return Err(err);
        }
        Ok(())
    }
}

fn read_existing(path: &Path) -> Result<Option<Vec<u8>>, CanonError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CanonError::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn restore(path: &Path, previous: Option<Vec<u8>>) {
    let restored = match previous {
        Some(bytes) => fs::write(path, bytes),
        None => fs::remove_file(path),
    };
    if let Err(err) = restored {
        tracing::warn!(
            target: "apidoc.canon",
            path = %path.display(),
            error = %err,
            "failed to roll back output after location map write failed"
        );
    }
}
