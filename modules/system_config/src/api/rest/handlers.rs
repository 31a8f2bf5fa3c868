//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::SiteConfigDto,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use crate::editor::Submission;
use axum::{
    response::{Html, Redirect},
    Form, Json,
};
use std::sync::Arc;

/// Render the configuration editor
pub async fn get_editor(service: Arc<Service>) -> Result<Html<String>, Problem> {
    let view = service.render_editor().map_err(map_domain_error)?;
    Ok(Html(view))
}

/// Save a submitted editor form and return to the editor
pub async fn submit_editor(
    service: Arc<Service>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, Problem> {
    let outcome = service
        .save_submission(Submission::from_pairs(pairs))
        .await
        .map_err(map_domain_error)?;

    tracing::debug!(
        changed = ?outcome.changed_fields,
        cache_invalidated = outcome.cache_invalidated,
        "Editor submission handled"
    );
    Ok(Redirect::to(service.editor_action()))
}

/// Get the current configuration with secrets redacted
pub async fn get_settings(service: Arc<Service>) -> Result<Json<SiteConfigDto>, Problem> {
    let config = service.current().map_err(map_domain_error)?;
    Ok(Json(config.as_ref().into()))
}
