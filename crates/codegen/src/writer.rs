use crudgen_core::ScaffoldError;
use std::fs;
use std::path::Path;

/// Policy for emitting onto a path that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnConflict {
    /// Refuse and leave the existing file untouched.
    #[default]
    Fail,
    /// Replace the existing content.
    Overwrite,
    /// Leave the existing file as-is and report it skipped.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    Written,
    Skipped,
}

/// Writes rendered content to disk, creating parent directories on the
/// way. Conflicts are resolved by the configured `OnConflict` policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeWriter {
    pub on_conflict: OnConflict,
}

impl CodeWriter {
    pub fn new(on_conflict: OnConflict) -> Self {
        Self { on_conflict }
    }

    pub fn emit(&self, path: &Path, content: &str) -> Result<Emitted, ScaffoldError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() {
            match self.on_conflict {
                OnConflict::Fail => {
                    return Err(ScaffoldError::FileExists {
                        path: path.to_path_buf(),
                    })
                }
                OnConflict::Skip => return Ok(Emitted::Skipped),
                OnConflict::Overwrite => {
                    // Unchanged content is not rewritten, so re-runs
                    // leave mtimes alone.
                    let existing = fs::read_to_string(path)?;
                    if existing == content {
                        return Ok(Emitted::Skipped);
                    }
                }
            }
        }

        fs::write(path, content)?;
        Ok(Emitted::Written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn emit_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resources/views/posts/index.html");

        let writer = CodeWriter::default();
        assert_eq!(writer.emit(&path, "hello").unwrap(), Emitted::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn emit_fails_on_existing_file_and_preserves_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.rs");
        fs::write(&path, "original").unwrap();

        let writer = CodeWriter::new(OnConflict::Fail);
        let err = writer.emit(&path, "replacement").unwrap_err();
        assert!(matches!(err, ScaffoldError::FileExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn emit_skip_leaves_existing_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.rs");
        fs::write(&path, "original").unwrap();

        let writer = CodeWriter::new(OnConflict::Skip);
        assert_eq!(writer.emit(&path, "replacement").unwrap(), Emitted::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn emit_overwrite_replaces_changed_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.rs");
        fs::write(&path, "original").unwrap();

        let writer = CodeWriter::new(OnConflict::Overwrite);
        assert_eq!(writer.emit(&path, "replacement").unwrap(), Emitted::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
    }

    #[test]
    fn emit_overwrite_skips_identical_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.rs");
        fs::write(&path, "same").unwrap();

        let writer = CodeWriter::new(OnConflict::Overwrite);
        assert_eq!(writer.emit(&path, "same").unwrap(), Emitted::Skipped);
    }
}
