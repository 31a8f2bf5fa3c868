//! Route registration for the admin editor

use super::{dto::SiteConfigDto, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    response::{Html, Redirect},
    routing::get,
    Extension, Form, Json, Router,
};
use std::sync::Arc;

/// Register the editor routes under the service's editor action path
///
/// - `GET  {action}`: editor document
/// - `POST {action}`: form submission, redirects back to the editor
/// - `GET  {action}/settings`: JSON view of the record
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let action = service.editor_action().to_string();
    if !action.starts_with('/') {
        anyhow::bail!("Editor action must be an absolute path: {}", action);
    }

    let router = router
        .route(&action, get(get_editor_handler).post(submit_editor_handler))
        .route(&format!("{}/settings", action), get(get_settings_handler))
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_editor_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Html<String>, Problem> {
    handlers::get_editor(service).await
}

async fn submit_editor_handler(
    Extension(service): Extension<Arc<Service>>,
    form: Form<Vec<(String, String)>>,
) -> Result<Redirect, Problem> {
    handlers::submit_editor(service, form).await
}

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<SiteConfigDto>, Problem> {
    handlers::get_settings(service).await
}
