use crudgen_core::{NameForms, ScaffoldError};
use std::collections::HashMap;

/// Substitutes every `{{marker}}` occurrence in `template`, then scans
/// the result for markers that survived. A survivor means the context
/// was incomplete, which is a template bug we refuse to ship.
pub fn render_template(
    name: &str,
    template: &str,
    context: &HashMap<&str, String>,
) -> Result<String, ScaffoldError> {
    let mut result = template.to_string();

    for (key, value) in context {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    let marker_regex = regex::Regex::new(r"\{\{[A-Za-z_]+\}\}")
        .map_err(|e| ScaffoldError::Template {
            message: format!("regex error: {}", e),
        })?;
    if let Some(m) = marker_regex.find(&result) {
        return Err(ScaffoldError::UnresolvedPlaceholder {
            template: name.to_string(),
            marker: m.as_str().to_string(),
        });
    }

    Ok(result)
}

/// Builds the substitution context every template is rendered against.
/// All values derive from one `NameForms`, so the generated artifacts
/// cannot disagree on spelling.
pub fn template_context(forms: &NameForms) -> HashMap<&'static str, String> {
    let mut context = HashMap::new();
    context.insert("name", forms.singular.clone());
    context.insert("plural", forms.plural.clone());
    context.insert("class", forms.class_name.clone());
    context.insert("controller", forms.controller_name.clone());
    context.insert("table", forms.plural.clone());
    context
}

/// Renders the complete resource controller: the shared header plus the
/// seven action bodies from `CONTROLLER_ACTIONS`, in table order.
pub fn render_controller(forms: &NameForms) -> Result<String, ScaffoldError> {
    let context = template_context(forms);

    let mut actions = Vec::with_capacity(CONTROLLER_ACTIONS.len());
    for (action, template) in CONTROLLER_ACTIONS {
        actions.push(render_template(action, template, &context)?);
    }

    let mut controller_context = context;
    controller_context.insert("actions", actions.join("\n"));
    render_template("controller", CONTROLLER_TEMPLATE, &controller_context)
}

pub static MODEL_TEMPLATE: &str = r#"use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct {{class}} {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload accepted by `{{controller}}::store`. Add the resource's
/// fields here; the form is validated against this schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Create{{class}} {}

/// Payload accepted by `{{controller}}::update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update{{class}} {}
"#;

pub static MIGRATION_TEMPLATE: &str = r#"CREATE TABLE {{table}} (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;

/// What the host's controller scaffolder produces before the generator
/// fills the actions in: a resource controller with every action
/// stubbed out.
pub static CONTROLLER_SKELETON_TEMPLATE: &str = r#"use axum::http::StatusCode;

// Resource controller for {{plural}}.

pub async fn index() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

pub async fn create() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

pub async fn store() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

pub async fn show() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

pub async fn edit() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

pub async fn update() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

pub async fn destroy() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
"#;

pub static CONTROLLER_TEMPLATE: &str = r#"use axum::{
    extract::{Form, Path},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::models::{{name}}::{Create{{class}}, Update{{class}}, {{class}}};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index).post(store))
        .route("/new", get(create))
        .route("/:id", get(show).patch(update).delete(destroy))
        .route("/:id/edit", get(edit))
}

fn view(name: &str) -> Result<Html<String>, StatusCode> {
    std::fs::read_to_string(format!("resources/views/{name}.html"))
        .map(Html)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

{{actions}}"#;

/// Per-action body templates, consumed uniformly in table order. Each
/// entry is (action name, template).
pub static CONTROLLER_ACTIONS: &[(&str, &str)] = &[
    ("index", INDEX_ACTION),
    ("create", CREATE_ACTION),
    ("store", STORE_ACTION),
    ("show", SHOW_ACTION),
    ("edit", EDIT_ACTION),
    ("update", UPDATE_ACTION),
    ("destroy", DESTROY_ACTION),
];

static INDEX_ACTION: &str = r#"pub async fn index() -> Result<Html<String>, StatusCode> {
    // TODO: load all {{plural}} and pass them to the view
    view("{{plural}}/index")
}
"#;

static CREATE_ACTION: &str = r#"pub async fn create() -> Result<Html<String>, StatusCode> {
    view("{{plural}}/create")
}
"#;

static STORE_ACTION: &str = r#"pub async fn store(
    Form(payload): Form<Create{{class}}>,
) -> Result<Redirect, StatusCode> {
    // TODO: persist the validated Create{{class}} payload
    let _ = payload;
    Ok(Redirect::to("/{{plural}}"))
}
"#;

static SHOW_ACTION: &str = r#"pub async fn show(Path(id): Path<Uuid>) -> Result<Html<String>, StatusCode> {
    // TODO: look up the {{class}} by id, or return 404
    let _ = id;
    view("{{plural}}/show")
}
"#;

static EDIT_ACTION: &str = r#"pub async fn edit(Path(id): Path<Uuid>) -> Result<Html<String>, StatusCode> {
    // TODO: look up the {{class}} by id, or return 404
    let _ = id;
    view("{{plural}}/edit")
}
"#;

static UPDATE_ACTION: &str = r#"pub async fn update(
    Path(id): Path<Uuid>,
    Form(payload): Form<Update{{class}}>,
) -> Result<Redirect, StatusCode> {
    // TODO: apply the validated Update{{class}} payload, or return 404
    let _ = (id, payload);
    Ok(Redirect::to("/{{plural}}"))
}
"#;

static DESTROY_ACTION: &str = r#"pub async fn destroy(Path(id): Path<Uuid>) -> Result<Redirect, StatusCode> {
    // TODO: delete the {{class}} by id, or return 404
    let _ = id;
    Ok(Redirect::to("/{{plural}}"))
}
"#;

/// View templates, one per read-facing action, keyed by file stem.
pub static VIEW_TEMPLATES: &[(&str, &str)] = &[
    ("index", INDEX_VIEW),
    ("create", CREATE_VIEW),
    ("edit", EDIT_VIEW),
    ("show", SHOW_VIEW),
];

static INDEX_VIEW: &str = r#"<!-- {{plural}}/index generated by crudgen -->
<h1>{{class}} index</h1>
<p>All {{plural}} are listed here.</p>
<a href="/{{plural}}/new">New {{name}}</a>
"#;

static CREATE_VIEW: &str = r#"<!-- {{plural}}/create generated by crudgen -->
<h1>New {{name}}</h1>
<form method="post" action="/{{plural}}">
  <button type="submit">Create {{name}}</button>
</form>
"#;

static EDIT_VIEW: &str = r#"<!-- {{plural}}/edit generated by crudgen -->
<h1>Edit {{name}}</h1>
<form method="post" action="">
  <button type="submit">Update {{name}}</button>
</form>
"#;

static SHOW_VIEW: &str = r#"<!-- {{plural}}/show generated by crudgen -->
<h1>{{class}}</h1>
<a href="/{{plural}}">Back to {{plural}}</a>
"#;
