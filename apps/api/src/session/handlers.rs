use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::models::{
    EducationField, Entry, EntryField, ExperienceField, PersonalField, ScalarField, Section,
};
use crate::render::{print_page, render, FormattedDocument};
use crate::session::SessionView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetStepRequest {
    pub step: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetPersonalFieldRequest {
    pub field: PersonalField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SetScalarFieldRequest {
    pub field: ScalarField,
    pub value: String,
}

/// `{ "section": "experience", "index": 0, "field": "title", "value": "..." }`
#[derive(Debug, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum UpdateEntryRequest {
    Experience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    Education {
        index: usize,
        field: EducationField,
        value: String,
    },
}

impl UpdateEntryRequest {
    fn into_parts(self) -> (EntryField, usize, String) {
        match self {
            UpdateEntryRequest::Experience { index, field, value } => {
                (EntryField::Experience(field), index, value)
            }
            UpdateEntryRequest::Education { index, field, value } => {
                (EntryField::Education(field), index, value)
            }
        }
    }
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let view = state.sessions.create().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.view(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/step
pub async fn handle_set_step(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<SetStepRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .update(id, |store| store.set_step(req.step))
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/step/next
pub async fn handle_next_step(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.update(id, |store| store.next_step()).await?))
}

/// POST /api/v1/sessions/:id/step/back
pub async fn handle_previous_step(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(
        state.sessions.update(id, |store| store.previous_step()).await?,
    ))
}

/// PATCH /api/v1/sessions/:id/personal
pub async fn handle_set_personal_field(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<SetPersonalFieldRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .update(id, |store| store.set_personal_field(req.field, req.value))
        .await?;
    Ok(Json(view))
}

/// PATCH /api/v1/sessions/:id/scalar
pub async fn handle_set_scalar_field(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<SetScalarFieldRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .update(id, |store| store.set_scalar_field(req.field, req.value))
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(entry): AppJson<Entry>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .update(id, |store| store.add_entry(entry))
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/entries/:section
/// Appends the section's blank record, as the form's "add" button does.
pub async fn handle_add_blank_entry(
    State(state): State<AppState>,
    AppPath((id, section)): AppPath<(Uuid, Section)>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .update(id, |store| store.add_entry(section.blank_entry()))
        .await?;
    Ok(Json(view))
}

/// PATCH /api/v1/sessions/:id/entries
pub async fn handle_update_entry(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<UpdateEntryRequest>,
) -> Result<Json<SessionView>, AppError> {
    let (field, index, value) = req.into_parts();
    let view = state
        .sessions
        .update(id, |store| store.update_entry(field, index, value))
        .await?;
    Ok(Json(view))
}

/// DELETE /api/v1/sessions/:id/entries/:section/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    AppPath((id, section, index)): AppPath<(Uuid, Section, usize)>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .update(id, |store| store.remove_entry(section, index))
        .await?;
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<FormattedDocument>, AppError> {
    let preview = state
        .sessions
        .read(id, |session| render(session.store.document()))
        .await?;
    Ok(Json(preview))
}

/// GET /api/v1/sessions/:id/preview/html
pub async fn handle_preview_html(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Html<String>, AppError> {
    let html = state
        .sessions
        .read(id, |session| render(session.store.document()).to_html())
        .await?;
    Ok(Html(html))
}

/// GET /api/v1/sessions/:id/preview/text
pub async fn handle_preview_text(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<String, AppError> {
    state
        .sessions
        .read(id, |session| render(session.store.document()).to_plain_text())
        .await
}

/// GET /api/v1/sessions/:id/print
pub async fn handle_print(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Html<String>, AppError> {
    let page = state
        .sessions
        .read(id, |session| print_page(&render(session.store.document())))
        .await?;
    Ok(Html(page))
}
