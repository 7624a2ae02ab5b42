use crudgen_core::ScaffoldError;
use std::fs;
use std::path::Path;

/// What `register_resource_route` actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteChange {
    pub import_added: bool,
    pub route_added: bool,
}

impl RouteChange {
    pub fn modified(&self) -> bool {
        self.import_added || self.route_added
    }
}

/// Registers one resource in an existing routes file: the import goes
/// immediately after the last `use` line, the route declaration is
/// appended at end-of-file.
///
/// Re-running with the same lines converges: a line that is already
/// present (exact match, ignoring surrounding whitespace) is never
/// inserted twice. The file is only rewritten when something changed,
/// and never touched on error.
pub fn register_resource_route(
    routes_path: &Path,
    import_line: &str,
    route_line: &str,
) -> Result<RouteChange, ScaffoldError> {
    if !routes_path.exists() {
        return Err(ScaffoldError::RouteFileNotFound {
            path: routes_path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(routes_path)?;
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    let has_import = lines.iter().any(|l| l.trim() == import_line.trim());
    let has_route = lines.iter().any(|l| l.trim() == route_line.trim());

    if !has_import {
        let anchor = lines
            .iter()
            .rposition(|l| l.trim_start().starts_with("use "))
            .ok_or_else(|| ScaffoldError::MalformedRouteFile {
                path: routes_path.to_path_buf(),
                reason: "no `use` import line to anchor the controller import on".to_string(),
            })?;
        lines.insert(anchor + 1, import_line.trim().to_string());
    }

    if !has_route {
        lines.push(route_line.trim().to_string());
    }

    let change = RouteChange {
        import_added: !has_import,
        route_added: !has_route,
    };

    if change.modified() {
        fs::write(routes_path, lines.join("\n") + "\n")?;
    }

    Ok(change)
}
