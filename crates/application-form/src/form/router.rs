use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::domain::{ApplicationForm, FieldEdit, FormError, Skill, ValidationErrors};
use super::store::{FormStateStore, SubmitOutcome};
use super::view::FormView;
use crate::error::AppError;

/// One form session shared by the HTTP handlers; each request runs under the lock.
pub type SharedForm = Arc<Mutex<FormStateStore>>;

/// Router exposing the in-memory form API over HTTP.
pub fn application_form_router(form: SharedForm) -> Router {
    Router::new()
        .route("/api/v1/application-form", get(snapshot_handler))
        .route(
            "/api/v1/application-form/fields/:field",
            put(set_field_handler),
        )
        .route(
            "/api/v1/application-form/skills/:skill",
            put(toggle_skill_handler),
        )
        .route("/api/v1/application-form/submit", post(submit_handler))
        .with_state(form)
}

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub values: ApplicationForm,
    pub errors: ValidationErrors,
    pub submitted: bool,
    pub view: FormView,
}

impl FormSnapshot {
    pub fn capture(store: &FormStateStore) -> Self {
        Self {
            values: store.values().clone(),
            errors: store.errors().clone(),
            submitted: store.is_submitted(),
            view: FormView::from_store(store),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FieldValueRequest {
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Deserialize)]
pub struct SkillToggleRequest {
    pub selected: bool,
}

fn lock_form(form: &SharedForm) -> MutexGuard<'_, FormStateStore> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Editor text for a JSON value; numbers keep their literal form and null clears the field.
fn editor_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

pub(crate) async fn snapshot_handler(State(form): State<SharedForm>) -> Response {
    let store = lock_form(&form);
    (StatusCode::OK, Json(FormSnapshot::capture(&store))).into_response()
}

pub(crate) async fn set_field_handler(
    State(form): State<SharedForm>,
    Path(field): Path<String>,
    payload: Result<Json<FieldValueRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let text = editor_text(&request.value)
        .ok_or_else(|| FormError::UnsupportedValue(field.clone()))?;
    let edit = FieldEdit::parse(&field, &text)?;

    let mut store = lock_form(&form);
    store.set_field(edit);
    Ok((StatusCode::OK, Json(FormSnapshot::capture(&store))).into_response())
}

pub(crate) async fn toggle_skill_handler(
    State(form): State<SharedForm>,
    Path(skill): Path<String>,
    payload: Result<Json<SkillToggleRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let skill: Skill = skill.parse()?;

    let mut store = lock_form(&form);
    store.toggle_skill(skill, request.selected);
    Ok((StatusCode::OK, Json(FormSnapshot::capture(&store))).into_response())
}

pub(crate) async fn submit_handler(State(form): State<SharedForm>) -> Response {
    let mut store = lock_form(&form);
    match store.submit() {
        SubmitOutcome::Submitted(summary) => {
            let payload = json!({
                "submitted": true,
                "summary": summary,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        SubmitOutcome::Rejected(errors) => {
            let payload = json!({
                "submitted": store.is_submitted(),
                "errors": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
