use std::fmt::Write as _;

use serde::Serialize;

use super::domain::{ApplicationForm, FieldName, Position, Skill};
use super::store::FormStateStore;
use super::summary::SubmissionSummary;

/// Fields displayed for a position, in form order.
pub fn visible_fields(position: Position) -> Vec<FieldName> {
    let mut fields = vec![
        FieldName::FullName,
        FieldName::Email,
        FieldName::PhoneNumber,
        FieldName::Position,
    ];
    if position.requires_relevant_experience() {
        fields.push(FieldName::RelevantExperience);
    }
    if position.requires_portfolio() {
        fields.push(FieldName::PortfolioUrl);
    }
    if position.requires_management_experience() {
        fields.push(FieldName::ManagementExperience);
    }
    fields.push(FieldName::AdditionalSkills);
    fields.push(FieldName::PreferredInterviewTime);
    fields
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRow {
    pub field: FieldName,
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillOption {
    pub skill: Skill,
    pub checked: bool,
}

/// Presentation snapshot of the form: visible rows, skill checkboxes, and the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub rows: Vec<FieldRow>,
    pub skills: Vec<SkillOption>,
    pub submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SubmissionSummary>,
}

impl FormView {
    pub fn from_store(store: &FormStateStore) -> Self {
        let values = store.values();
        let errors = store.errors();

        let rows = visible_fields(values.position)
            .into_iter()
            .map(|field| FieldRow {
                field,
                label: field.label(),
                value: display_value(values, field),
                error: errors.get(field).map(str::to_string),
            })
            .collect();

        let skills = Skill::ordered()
            .into_iter()
            .map(|skill| SkillOption {
                skill,
                checked: values.has_skill(skill),
            })
            .collect();

        Self {
            rows,
            skills,
            submitted: store.is_submitted(),
            summary: store.summary(),
        }
    }

    pub fn row(&self, field: FieldName) -> Option<&FieldRow> {
        self.rows.iter().find(|row| row.field == field)
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::from("Job Application Form\n");

        for row in &self.rows {
            if row.field == FieldName::AdditionalSkills {
                let _ = writeln!(out, "{}:", row.label);
                for option in &self.skills {
                    let mark = if option.checked { 'x' } else { ' ' };
                    let _ = writeln!(out, "  [{mark}] {}", option.skill);
                }
            } else {
                let _ = writeln!(out, "{}: {}", row.label, row.value);
            }
            if let Some(error) = &row.error {
                let _ = writeln!(out, "  ! {error}");
            }
        }

        if let Some(summary) = &self.summary {
            let _ = writeln!(out, "\n{}", summary.headline());
            match summary.to_pretty_json() {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                }
                Err(err) => {
                    let _ = writeln!(out, "summary unavailable: {err}");
                }
            }
        }

        out
    }
}

fn display_value(values: &ApplicationForm, field: FieldName) -> String {
    match field {
        FieldName::FullName => values.full_name.clone(),
        FieldName::Email => values.email.clone(),
        FieldName::PhoneNumber => values.phone_number.clone(),
        FieldName::Position => values.position.label().to_string(),
        FieldName::RelevantExperience => values.relevant_experience.as_str().to_string(),
        FieldName::PortfolioUrl => values.portfolio_url.clone(),
        FieldName::ManagementExperience => values.management_experience.clone(),
        FieldName::AdditionalSkills => values
            .additional_skills
            .iter()
            .map(|skill| skill.label())
            .collect::<Vec<_>>()
            .join(", "),
        FieldName::PreferredInterviewTime => values.preferred_interview_time.clone(),
    }
}
