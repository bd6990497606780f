use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::form::domain::{ApplicationForm, Experience, FieldName, Position, Skill};
use crate::form::router::{application_form_router, SharedForm};
use crate::form::store::FormStateStore;

/// The applicant used throughout: a developer with every required field filled in.
pub(super) fn ada() -> ApplicationForm {
    ApplicationForm {
        full_name: "Ada".to_string(),
        email: "ada@x.com".to_string(),
        phone_number: "5551234".to_string(),
        position: Position::Developer,
        relevant_experience: Experience::new("2"),
        additional_skills: [Skill::JavaScript].into_iter().collect(),
        preferred_interview_time: "2024-01-01T10:00".to_string(),
        ..ApplicationForm::default()
    }
}

pub(super) fn designer() -> ApplicationForm {
    ApplicationForm {
        position: Position::Designer,
        relevant_experience: Experience::new("4"),
        portfolio_url: "https://ada.example/work".to_string(),
        ..ada()
    }
}

pub(super) fn manager() -> ApplicationForm {
    ApplicationForm {
        position: Position::Manager,
        management_experience: "Led a team of six for three years".to_string(),
        relevant_experience: Experience::default(),
        ..ada()
    }
}

pub(super) fn only(field: FieldName) -> Vec<FieldName> {
    vec![field]
}

pub(super) fn shared(values: ApplicationForm) -> SharedForm {
    Arc::new(Mutex::new(FormStateStore::with_values(values)))
}

pub(super) fn router_with(values: ApplicationForm) -> (axum::Router, SharedForm) {
    let form = shared(values);
    (application_form_router(form.clone()), form)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
