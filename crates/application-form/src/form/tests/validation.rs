use super::common::*;
use crate::form::domain::{ApplicationForm, Experience, FieldName, Position};
use crate::form::validation::{
    validate, EMAIL_INVALID, EMAIL_REQUIRED, FULL_NAME_REQUIRED, INTERVIEW_TIME_REQUIRED,
    MANAGEMENT_EXPERIENCE_REQUIRED, PHONE_INVALID, PHONE_REQUIRED, PORTFOLIO_REQUIRED,
    RELEVANT_EXPERIENCE_REQUIRED, SKILLS_REQUIRED,
};

fn failing_fields(form: &ApplicationForm) -> Vec<FieldName> {
    validate(form).fields().collect()
}

#[test]
fn complete_developer_passes() {
    assert!(validate(&ada()).is_empty());
}

#[test]
fn validation_is_deterministic() {
    let mut form = ada();
    form.email = "nope".to_string();
    form.additional_skills.clear();

    let first = validate(&form);
    let second = validate(&form);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn empty_form_reports_every_unconditional_field() {
    let errors = validate(&ApplicationForm::default());

    assert_eq!(errors.get(FieldName::FullName), Some(FULL_NAME_REQUIRED));
    assert_eq!(errors.get(FieldName::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(FieldName::PhoneNumber), Some(PHONE_REQUIRED));
    assert_eq!(errors.get(FieldName::AdditionalSkills), Some(SKILLS_REQUIRED));
    assert_eq!(
        errors.get(FieldName::PreferredInterviewTime),
        Some(INTERVIEW_TIME_REQUIRED)
    );
    assert_eq!(errors.len(), 5);
}

#[test]
fn clearing_one_required_field_reports_only_that_field() {
    let cases: [(FieldName, fn(&mut ApplicationForm)); 5] = [
        (FieldName::FullName, |form| form.full_name.clear()),
        (FieldName::Email, |form| form.email.clear()),
        (FieldName::PhoneNumber, |form| form.phone_number.clear()),
        (FieldName::AdditionalSkills, |form| {
            form.additional_skills.clear()
        }),
        (FieldName::PreferredInterviewTime, |form| {
            form.preferred_interview_time.clear()
        }),
    ];

    for (field, clear) in cases {
        let mut form = ada();
        clear(&mut form);
        assert_eq!(failing_fields(&form), only(field), "clearing {field}");
    }
}

#[test]
fn email_must_look_like_an_address() {
    for email in ["not-an-email", "ada@x", "@x.com", "ada x@y.z"] {
        let mut form = ada();
        form.email = email.to_string();
        let errors = validate(&form);
        if email == "ada x@y.z" {
            assert!(errors.is_empty(), "{email} contains an address-shaped run");
        } else {
            assert_eq!(errors.get(FieldName::Email), Some(EMAIL_INVALID), "{email}");
        }
    }
}

#[test]
fn phone_number_must_be_all_digits() {
    for phone in ["555-1234", "+15551234", "555 1234", "five"] {
        let mut form = ada();
        form.phone_number = phone.to_string();
        assert_eq!(
            validate(&form).get(FieldName::PhoneNumber),
            Some(PHONE_INVALID),
            "{phone}"
        );
    }
}

#[test]
fn phone_number_rejects_non_ascii_digits() {
    let mut form = ada();
    form.phone_number = "٥٥٥".to_string();
    assert_eq!(
        validate(&form).get(FieldName::PhoneNumber),
        Some(PHONE_INVALID)
    );
}

#[test]
fn developer_requires_positive_experience() {
    let mut form = ada();
    form.relevant_experience = Experience::new("0");
    assert_eq!(
        validate(&form).get(FieldName::RelevantExperience),
        Some(RELEVANT_EXPERIENCE_REQUIRED)
    );

    form.relevant_experience = Experience::new("1");
    assert!(validate(&form).is_empty());
}

#[test]
fn experience_rejects_empty_negative_and_non_numeric_text() {
    for raw in ["", "-3", "abc", "NaN", "inf"] {
        let mut form = ada();
        form.relevant_experience = Experience::new(raw);
        assert_eq!(
            failing_fields(&form),
            only(FieldName::RelevantExperience),
            "experience {raw:?}"
        );
    }
}

#[test]
fn fractional_experience_counts() {
    let mut form = ada();
    form.relevant_experience = Experience::new("0.5");
    assert!(validate(&form).is_empty());
}

#[test]
fn designer_requires_experience_and_portfolio_independently() {
    assert!(validate(&designer()).is_empty());

    let mut missing_portfolio = designer();
    missing_portfolio.portfolio_url.clear();
    let errors = validate(&missing_portfolio);
    assert_eq!(errors.get(FieldName::PortfolioUrl), Some(PORTFOLIO_REQUIRED));
    assert_eq!(errors.len(), 1);

    let mut missing_experience = designer();
    missing_experience.relevant_experience = Experience::default();
    assert_eq!(
        failing_fields(&missing_experience),
        only(FieldName::RelevantExperience)
    );

    let mut missing_both = designer();
    missing_both.portfolio_url.clear();
    missing_both.relevant_experience = Experience::default();
    assert_eq!(
        failing_fields(&missing_both),
        vec![FieldName::RelevantExperience, FieldName::PortfolioUrl]
    );
}

#[test]
fn portfolio_url_needs_http_scheme_and_no_whitespace() {
    for url in [
        "ftp://ada.example",
        "ada.example",
        "https://ada.example/my work",
        "http://",
    ] {
        let mut form = designer();
        form.portfolio_url = url.to_string();
        assert_eq!(
            validate(&form).get(FieldName::PortfolioUrl),
            Some(PORTFOLIO_REQUIRED),
            "{url}"
        );
    }

    let mut form = designer();
    form.portfolio_url = "http://ada.example".to_string();
    assert!(validate(&form).is_empty());
}

#[test]
fn manager_only_requires_management_experience() {
    let mut form = manager();
    form.portfolio_url.clear();
    form.relevant_experience = Experience::new("0");
    assert!(validate(&form).is_empty());

    form.management_experience.clear();
    let errors = validate(&form);
    assert_eq!(
        errors.get(FieldName::ManagementExperience),
        Some(MANAGEMENT_EXPERIENCE_REQUIRED)
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn unselected_position_skips_conditional_fields() {
    let mut form = ada();
    form.position = Position::Unselected;
    form.relevant_experience = Experience::default();
    assert!(validate(&form).is_empty());
}

#[test]
fn invalid_email_scenario_reports_only_email() {
    let mut form = ada();
    form.email = "not-an-email".to_string();

    let errors = validate(&form);
    assert_eq!(errors.iter().collect::<Vec<_>>(), vec![(FieldName::Email, EMAIL_INVALID)]);
}
