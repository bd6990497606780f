use std::sync::LazyLock;

use regex::Regex;

use super::domain::{ApplicationForm, FieldName, ValidationErrors};

pub const FULL_NAME_REQUIRED: &str = "Full Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PHONE_REQUIRED: &str = "Phone Number is required";
pub const PHONE_INVALID: &str = "Phone Number is invalid";
pub const RELEVANT_EXPERIENCE_REQUIRED: &str =
    "Relevant Experience is required and must be greater than 0";
pub const PORTFOLIO_REQUIRED: &str = "Valid Portfolio URL is required";
pub const MANAGEMENT_EXPERIENCE_REQUIRED: &str = "Management Experience is required";
pub const SKILLS_REQUIRED: &str = "At least one skill must be selected";
pub const INTERVIEW_TIME_REQUIRED: &str = "Preferred Interview Time is required";

/// Unanchored: any `local@domain.tld` shaped run inside the text passes.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid phone regex"));

static PORTFOLIO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s]+$").expect("Invalid portfolio regex"));

/// Evaluate every rule against the current values.
///
/// Rules are independent; each field appears at most once in the result and a field that
/// passes is absent.
pub fn validate(form: &ApplicationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.full_name.is_empty() {
        errors.insert(FieldName::FullName, FULL_NAME_REQUIRED);
    }

    if form.email.is_empty() {
        errors.insert(FieldName::Email, EMAIL_REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(FieldName::Email, EMAIL_INVALID);
    }

    if form.phone_number.is_empty() {
        errors.insert(FieldName::PhoneNumber, PHONE_REQUIRED);
    } else if !PHONE_PATTERN.is_match(&form.phone_number) {
        errors.insert(FieldName::PhoneNumber, PHONE_INVALID);
    }

    let position = form.position;
    if position.requires_relevant_experience() {
        let positive = form
            .relevant_experience
            .years()
            .is_some_and(|years| years > 0.0);
        if !positive {
            errors.insert(FieldName::RelevantExperience, RELEVANT_EXPERIENCE_REQUIRED);
        }
    }

    if position.requires_portfolio() && !PORTFOLIO_PATTERN.is_match(&form.portfolio_url) {
        errors.insert(FieldName::PortfolioUrl, PORTFOLIO_REQUIRED);
    }

    if position.requires_management_experience() && form.management_experience.is_empty() {
        errors.insert(
            FieldName::ManagementExperience,
            MANAGEMENT_EXPERIENCE_REQUIRED,
        );
    }

    if form.additional_skills.is_empty() {
        errors.insert(FieldName::AdditionalSkills, SKILLS_REQUIRED);
    }

    if form.preferred_interview_time.is_empty() {
        errors.insert(FieldName::PreferredInterviewTime, INTERVIEW_TIME_REQUIRED);
    }

    errors
}
