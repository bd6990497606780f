//! End-to-end scenarios driven through the public store API and the JSON wire format, the
//! way a presentation layer would use the crate.

use application_form::form::{
    validate, ApplicationForm, FieldEdit, FieldName, FormStateStore, FormView, Position, Skill,
    SubmitOutcome,
};

fn ada_json() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Ada",
        "email": "ada@x.com",
        "phoneNumber": "5551234",
        "position": "Developer",
        "relevantExperience": 2,
        "additionalSkills": ["JavaScript"],
        "preferredInterviewTime": "2024-01-01T10:00"
    })
}

fn load(value: serde_json::Value) -> ApplicationForm {
    serde_json::from_value(value).expect("form json parses")
}

#[test]
fn ada_submits_cleanly() {
    let mut store = FormStateStore::with_values(load(ada_json()));

    let outcome = store.submit();

    match outcome {
        SubmitOutcome::Submitted(summary) => {
            assert_eq!(summary.application().position, Position::Developer);
            assert!(summary.interview_slot().is_some());
        }
        SubmitOutcome::Rejected(errors) => panic!("unexpected errors: {errors:?}"),
    }
    assert!(store.errors().is_empty());
    assert!(store.is_submitted());
}

#[test]
fn ada_with_bad_email_is_rejected_on_email_only() {
    let mut json = ada_json();
    json["email"] = "not-an-email".into();
    let mut store = FormStateStore::with_values(load(json));

    let outcome = store.submit();

    assert!(!outcome.is_submitted());
    let errors: Vec<_> = store.errors().iter().collect();
    assert_eq!(errors, vec![(FieldName::Email, "Email is invalid")]);
    assert!(!store.is_submitted());
}

#[test]
fn missing_keys_default_to_empty_fields() {
    let form = load(serde_json::json!({ "fullName": "Grace" }));

    assert_eq!(form.position, Position::Unselected);
    assert!(form.relevant_experience.is_empty());
    assert!(form.additional_skills.is_empty());
    assert_eq!(validate(&form).len(), 4);
}

#[test]
fn unknown_skill_in_json_is_rejected() {
    let mut json = ada_json();
    json["additionalSkills"] = serde_json::json!(["JavaScript", "Rust"]);

    assert!(serde_json::from_value::<ApplicationForm>(json).is_err());
}

#[test]
fn null_experience_reads_as_empty() {
    let mut json = ada_json();
    json["relevantExperience"] = serde_json::Value::Null;
    let form = load(json);

    assert!(form.relevant_experience.is_empty());
    assert!(validate(&form).contains(FieldName::RelevantExperience));
}

#[test]
fn summary_round_trips_through_json() {
    let mut store = FormStateStore::new();
    store.set_field(FieldEdit::FullName("Lin".to_string()));
    store.set_field(FieldEdit::Email("lin@studio.io".to_string()));
    store.set_field(FieldEdit::PhoneNumber("0123456789".to_string()));
    store.set_field(FieldEdit::Position(Position::Designer));
    store.set_field(FieldEdit::RelevantExperience("6".into()));
    store.set_field(FieldEdit::PortfolioUrl("http://lin.studio".to_string()));
    store.toggle_skill(Skill::Css, true);
    store.toggle_skill(Skill::JavaScript, true);
    store.set_field(FieldEdit::PreferredInterviewTime(
        "2025-03-14T09:30".to_string(),
    ));

    let SubmitOutcome::Submitted(summary) = store.submit() else {
        panic!("designer form should submit");
    };
    let json = summary.to_pretty_json().expect("summary renders");
    let reparsed: ApplicationForm = serde_json::from_str(&json).expect("summary parses");

    assert_eq!(&reparsed, store.values());
    assert!(FormView::from_store(&store)
        .render_text()
        .contains("Friday 14 March 2025 at 09:30"));
}
