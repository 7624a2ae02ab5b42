pub mod generator;
pub mod routes;
pub mod scaffold;
pub mod templates;
pub mod writer;

pub use generator::{Manifest, ResourceGenerator, Scaffolders};
pub use routes::{register_resource_route, RouteChange};
pub use scaffold::{ControllerScaffolder, MigrationScaffolder, ModelScaffolder, Scaffolder};
pub use templates::{render_controller, render_template, template_context};
pub use writer::{CodeWriter, Emitted, OnConflict};
