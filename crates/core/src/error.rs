use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for the scaffolding pipeline.
///
/// Every fallible step surfaces one of these; the orchestrator halts on
/// the first failure and never reports a partial run as success.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {message}")]
    Template { message: String },

    #[error("invalid resource name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("file already exists: {path} (pass --on-conflict overwrite|skip to proceed)")]
    FileExists { path: PathBuf },

    #[error("routes file not found: {path}")]
    RouteFileNotFound { path: PathBuf },

    #[error("malformed routes file {path}: {reason}")]
    MalformedRouteFile { path: PathBuf, reason: String },

    #[error("unresolved placeholder '{marker}' after rendering template '{template}'")]
    UnresolvedPlaceholder { template: String, marker: String },
}
