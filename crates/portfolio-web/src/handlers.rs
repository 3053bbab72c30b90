//! Request handlers
//!
//! Projects are addressed by their current position in the list, so the
//! `{id}` in a path is an index and shifts when earlier projects are deleted.

use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use portfolio_core::Error;
use tracing::info;

use crate::error::AppError;
use crate::form::ProjectForm;
use crate::state::AppState;
use crate::views;

type HandlerResult<T> = std::result::Result<T, AppError>;

/// Parse a path id into a list position
pub fn parse_position(raw: &str) -> portfolio_core::Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidProjectId(raw.to_string()))
}

fn redirect_home(status: StatusCode) -> Response {
    (status, [(header::LOCATION, "/")]).into_response()
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let projects = state.projects.list().await;
    Html(views::index(&projects))
}

pub async fn add_project() -> Html<String> {
    Html(views::add_project())
}

pub async fn store_project(
    State(state): State<AppState>,
    multipart: Multipart,
) -> HandlerResult<Response> {
    let form = ProjectForm::from_multipart(multipart).await?;
    let image = form.require_image()?;
    let project = form.to_project()?;

    let image_path = state
        .images
        .save(&form.project_name, &image.file_name, &image.bytes)
        .await?;
    let stored = state.projects.append(project.with_image(image_path)).await;

    info!(position = stored.id, duration = %stored.duration(), "Project stored");
    Ok(redirect_home(StatusCode::MOVED_PERMANENTLY))
}

pub async fn detail_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Html<String>> {
    let project = state.projects.get_at(parse_position(&id)?).await?;
    Ok(Html(views::detail_project(&project)))
}

pub async fn edit_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Html<String>> {
    let project = state.projects.get_at(parse_position(&id)?).await?;
    Ok(Html(views::edit_project(&project)))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> HandlerResult<Response> {
    let position = parse_position(&id)?;
    let form = ProjectForm::from_multipart(multipart).await?;
    let image = form.require_image().map_err(AppError::staged)?;
    let project = form.to_project()?;

    // Fail before touching the disk when the position is already gone
    state.projects.get_at(position).await?;

    let image_path = state
        .images
        .save(&form.project_name, &image.file_name, &image.bytes)
        .await
        .map_err(AppError::staged)?;
    let stored = state
        .projects
        .replace_at(position, project.with_image(image_path))
        .await?;

    info!(position = stored.id, duration = %stored.duration(), "Project updated");
    Ok(redirect_home(StatusCode::MOVED_PERMANENTLY))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Response> {
    let removed = state.projects.remove_at(parse_position(&id)?).await?;
    info!(position = removed.id, name = %removed.name, "Project deleted");
    Ok(redirect_home(StatusCode::FOUND))
}

pub async fn contact() -> Html<String> {
    Html(views::contact())
}
