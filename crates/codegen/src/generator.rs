use crate::routes::register_resource_route;
use crate::scaffold::{ControllerScaffolder, MigrationScaffolder, ModelScaffolder, Scaffolder};
use crate::templates::{render_controller, render_template, template_context, VIEW_TEMPLATES};
use crate::writer::{CodeWriter, Emitted, OnConflict};
use crudgen_core::{NameForms, ScaffoldError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The three host-framework collaborators the orchestrator drives.
pub struct Scaffolders {
    pub model: Box<dyn Scaffolder>,
    pub migration: Box<dyn Scaffolder>,
    pub controller: Box<dyn Scaffolder>,
}

impl Default for Scaffolders {
    fn default() -> Self {
        Self {
            model: Box::new(ModelScaffolder),
            migration: Box::new(MigrationScaffolder::new()),
            controller: Box::new(ControllerScaffolder),
        }
    }
}

/// Every path a generator run created, modified or skipped.
#[derive(Debug, Default, Serialize)]
pub struct Manifest {
    pub created: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl Manifest {
    fn record(&mut self, path: PathBuf, emitted: Emitted) {
        match emitted {
            Emitted::Written => self.created.push(path),
            Emitted::Skipped => self.skipped.push(path),
        }
    }
}

/// Sequences the full pipeline for one resource: normalize the name,
/// run the host scaffolders, emit the view files, fill the controller
/// in, register the route. Halts on the first error; nothing partial is
/// ever reported as success.
pub struct ResourceGenerator {
    project_root: PathBuf,
    writer: CodeWriter,
    scaffolders: Scaffolders,
    routes_file: PathBuf,
}

impl ResourceGenerator {
    pub fn new(project_root: PathBuf, on_conflict: OnConflict) -> Self {
        Self {
            project_root,
            writer: CodeWriter::new(on_conflict),
            scaffolders: Scaffolders::default(),
            routes_file: PathBuf::from("src/routes/mod.rs"),
        }
    }

    pub fn with_scaffolders(mut self, scaffolders: Scaffolders) -> Self {
        self.scaffolders = scaffolders;
        self
    }

    /// Routes file the resource is registered in, relative to the
    /// project root.
    pub fn with_routes_file(mut self, routes_file: PathBuf) -> Self {
        self.routes_file = routes_file;
        self
    }

    pub fn generate(&self, raw_name: &str) -> Result<Manifest, ScaffoldError> {
        let forms = NameForms::parse(raw_name)?;
        let root = self.project_root.as_path();
        let mut manifest = Manifest::default();

        for scaffolder in [&self.scaffolders.model, &self.scaffolders.migration] {
            let emitted = scaffolder.scaffold(root, &forms, &self.writer)?;
            manifest.record(scaffolder.target_path(root, &forms), emitted);
        }

        let skeleton = self
            .scaffolders
            .controller
            .scaffold(root, &forms, &self.writer)?;
        manifest.record(
            self.scaffolders.controller.target_path(root, &forms),
            skeleton,
        );

        self.emit_views(root, &forms, &mut manifest)?;
        self.fill_controller(root, &forms, skeleton, &mut manifest)?;
        self.register_route(root, &forms, &mut manifest)?;

        Ok(manifest)
    }

    fn emit_views(
        &self,
        root: &Path,
        forms: &NameForms,
        manifest: &mut Manifest,
    ) -> Result<(), ScaffoldError> {
        let context = template_context(forms);
        let views_dir = root.join("resources/views").join(&forms.plural);

        for (view, template) in VIEW_TEMPLATES {
            let path = views_dir.join(format!("{}.html", view));
            let content = render_template(view, template, &context)?;
            let emitted = self.writer.emit(&path, &content)?;
            manifest.record(path, emitted);
        }

        Ok(())
    }

    /// Replaces the scaffolded controller skeleton with the rendered
    /// CRUD actions. A skeleton written this run is ours to replace; a
    /// controller the scaffold step left alone stays under the
    /// configured conflict policy.
    fn fill_controller(
        &self,
        root: &Path,
        forms: &NameForms,
        skeleton: Emitted,
        manifest: &mut Manifest,
    ) -> Result<(), ScaffoldError> {
        let path = self.scaffolders.controller.target_path(root, forms);
        let content = render_controller(forms)?;

        let writer = match skeleton {
            Emitted::Written => CodeWriter::new(OnConflict::Overwrite),
            Emitted::Skipped => self.writer,
        };
        if writer.emit(&path, &content)? == Emitted::Written {
            // The skeleton was already recorded as created; only an
            // update of a pre-existing controller is worth a second
            // manifest entry.
            if !manifest.created.contains(&path) {
                manifest.modified.push(path);
            }
        }

        Ok(())
    }

    fn register_route(
        &self,
        root: &Path,
        forms: &NameForms,
        manifest: &mut Manifest,
    ) -> Result<(), ScaffoldError> {
        let routes_path = root.join(&self.routes_file);
        let import_line = format!("use crate::controllers::{}_controller;", forms.singular);
        let route_line = format!(
            "resource_route!(\"/{}\", {}_controller);",
            forms.plural, forms.singular
        );

        let change = register_resource_route(&routes_path, &import_line, &route_line)?;
        if change.modified() {
            manifest.modified.push(routes_path);
        } else {
            manifest.skipped.push(routes_path);
        }

        Ok(())
    }
}
