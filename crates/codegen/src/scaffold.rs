use crate::templates::{
    render_template, template_context, CONTROLLER_SKELETON_TEMPLATE, MIGRATION_TEMPLATE,
    MODEL_TEMPLATE,
};
use crate::writer::{CodeWriter, Emitted};
use crudgen_core::{NameForms, ScaffoldError};
use std::path::{Path, PathBuf};

/// A host-framework artifact generator: produces one conventional file
/// at a deterministic path under the project root.
///
/// The orchestrator only depends on this trait, so tests (or a real
/// framework integration) can substitute their own scaffolders.
pub trait Scaffolder {
    /// Where the artifact lands, for a given resource.
    fn target_path(&self, root: &Path, forms: &NameForms) -> PathBuf;

    /// Produces the artifact through `writer`, honoring its conflict
    /// policy.
    fn scaffold(
        &self,
        root: &Path,
        forms: &NameForms,
        writer: &CodeWriter,
    ) -> Result<Emitted, ScaffoldError>;
}

/// Scaffolds `src/models/{singular}.rs`.
#[derive(Debug, Default)]
pub struct ModelScaffolder;

impl Scaffolder for ModelScaffolder {
    fn target_path(&self, root: &Path, forms: &NameForms) -> PathBuf {
        root.join("src/models")
            .join(format!("{}.rs", forms.singular))
    }

    fn scaffold(
        &self,
        root: &Path,
        forms: &NameForms,
        writer: &CodeWriter,
    ) -> Result<Emitted, ScaffoldError> {
        let content = render_template("model", MODEL_TEMPLATE, &template_context(forms))?;
        writer.emit(&self.target_path(root, forms), &content)
    }
}

/// Scaffolds `migrations/{timestamp}_create_{plural}_table.sql`.
///
/// The timestamp is fixed at construction so one generator run maps to
/// exactly one migration path, and tests can pin it.
#[derive(Debug)]
pub struct MigrationScaffolder {
    timestamp: String,
}

impl MigrationScaffolder {
    pub fn new() -> Self {
        Self {
            timestamp: chrono::Utc::now().format("%Y_%m_%d_%H%M%S").to_string(),
        }
    }

    pub fn with_timestamp(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

impl Default for MigrationScaffolder {
    fn default() -> Self {
        Self::new()
    }
}

impl Scaffolder for MigrationScaffolder {
    fn target_path(&self, root: &Path, forms: &NameForms) -> PathBuf {
        root.join("migrations").join(format!(
            "{}_create_{}_table.sql",
            self.timestamp, forms.plural
        ))
    }

    fn scaffold(
        &self,
        root: &Path,
        forms: &NameForms,
        writer: &CodeWriter,
    ) -> Result<Emitted, ScaffoldError> {
        let content = render_template("migration", MIGRATION_TEMPLATE, &template_context(forms))?;
        writer.emit(&self.target_path(root, forms), &content)
    }
}

/// Scaffolds `src/controllers/{singular}_controller.rs` as a resource
/// controller skeleton. The orchestrator overwrites it with the
/// rendered CRUD actions afterwards.
#[derive(Debug, Default)]
pub struct ControllerScaffolder;

impl Scaffolder for ControllerScaffolder {
    fn target_path(&self, root: &Path, forms: &NameForms) -> PathBuf {
        root.join("src/controllers")
            .join(format!("{}_controller.rs", forms.singular))
    }

    fn scaffold(
        &self,
        root: &Path,
        forms: &NameForms,
        writer: &CodeWriter,
    ) -> Result<Emitted, ScaffoldError> {
        let content = render_template(
            "controller_skeleton",
            CONTROLLER_SKELETON_TEMPLATE,
            &template_context(forms),
        )?;
        writer.emit(&self.target_path(root, forms), &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn scaffolders_follow_host_conventions() {
        let forms = NameForms::parse("category").unwrap();
        let root = Path::new("/app");

        assert_eq!(
            ModelScaffolder.target_path(root, &forms),
            Path::new("/app/src/models/category.rs")
        );
        assert_eq!(
            ControllerScaffolder.target_path(root, &forms),
            Path::new("/app/src/controllers/category_controller.rs")
        );
        assert_eq!(
            MigrationScaffolder::with_timestamp("2024_01_01_000000").target_path(root, &forms),
            Path::new("/app/migrations/2024_01_01_000000_create_categories_table.sql")
        );
    }

    #[test]
    fn model_scaffold_writes_rendered_struct() {
        let dir = tempdir().unwrap();
        let forms = NameForms::parse("post").unwrap();
        let writer = CodeWriter::default();

        ModelScaffolder.scaffold(dir.path(), &forms, &writer).unwrap();

        let content =
            fs::read_to_string(dir.path().join("src/models/post.rs")).unwrap();
        assert!(content.contains("pub struct Post {"));
        assert!(content.contains("pub struct CreatePost {}"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn migration_scaffold_creates_table_for_plural() {
        let dir = tempdir().unwrap();
        let forms = NameForms::parse("bus").unwrap();
        let writer = CodeWriter::default();
        let scaffolder = MigrationScaffolder::with_timestamp("2024_01_01_000000");

        scaffolder.scaffold(dir.path(), &forms, &writer).unwrap();

        let content = fs::read_to_string(
            dir.path()
                .join("migrations/2024_01_01_000000_create_buses_table.sql"),
        )
        .unwrap();
        assert!(content.contains("CREATE TABLE buses ("));
    }
}
