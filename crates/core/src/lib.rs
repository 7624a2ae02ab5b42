pub mod error;
pub mod name;

pub use error::ScaffoldError;
pub use name::NameForms;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
