use clap::{Parser, ValueEnum};
use crudgen_codegen::{OnConflict, ResourceGenerator};
use crudgen_core::ScaffoldError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version = crudgen_core::VERSION)]
#[command(
    about = "Generate CRUD boilerplate for a resource: model, migration, controller, views and a route entry"
)]
struct Cli {
    /// Resource name (singular, lowercase by convention)
    name: String,

    /// Project root to generate into
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// What to do when a target file already exists
    #[arg(long, value_enum, default_value_t = ConflictArg::Fail)]
    on_conflict: ConflictArg,

    /// Routes file the resource is registered in, relative to the root
    #[arg(long, default_value = "src/routes/mod.rs")]
    routes: PathBuf,

    /// Print the manifest as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConflictArg {
    Fail,
    Overwrite,
    Skip,
}

impl From<ConflictArg> for OnConflict {
    fn from(arg: ConflictArg) -> Self {
        match arg {
            ConflictArg::Fail => OnConflict::Fail,
            ConflictArg::Overwrite => OnConflict::Overwrite,
            ConflictArg::Skip => OnConflict::Skip,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ScaffoldError> {
    let generator = ResourceGenerator::new(cli.root, cli.on_conflict.into())
        .with_routes_file(cli.routes);
    let manifest = generator.generate(&cli.name)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    for path in &manifest.created {
        println!("✓ Created {}", path.display());
    }
    for path in &manifest.modified {
        println!("✓ Updated {}", path.display());
    }
    for path in &manifest.skipped {
        println!("- Skipped {} (already up to date)", path.display());
    }

    Ok(())
}
