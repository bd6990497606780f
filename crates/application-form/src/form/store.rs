use tracing::{debug, info};

use super::domain::{ApplicationForm, FieldEdit, Skill, ValidationErrors};
use super::summary::SubmissionSummary;
use super::validation::validate;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(SubmissionSummary),
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Owns the form record for one session along with its error state.
///
/// Conditional fields keep whatever was typed into them when the position changes, and
/// edits made after a successful submit leave the form submitted.
#[derive(Debug, Clone, Default)]
pub struct FormStateStore {
    values: ApplicationForm,
    errors: ValidationErrors,
    submitted: bool,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing record, e.g. one loaded from a file.
    pub fn with_values(values: ApplicationForm) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &ApplicationForm {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_field(&mut self, edit: FieldEdit) {
        debug!(field = %edit.field(), "form field edited");
        edit.apply(&mut self.values);
    }

    pub fn toggle_skill(&mut self, skill: Skill, present: bool) {
        let changed = if present {
            self.values.additional_skills.insert(skill)
        } else {
            self.values.additional_skills.remove(&skill)
        };
        debug!(%skill, present, changed, "skill toggled");
    }

    /// Validate the current values and either mark the form submitted or store the errors.
    ///
    /// The stored error map is replaced on every attempt, so a passing submit clears it.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.values);
        self.errors = errors.clone();

        if errors.is_empty() {
            self.submitted = true;
            info!(position = self.values.position.label(), "application submitted");
            SubmitOutcome::Submitted(SubmissionSummary::new(self.values.clone()))
        } else {
            info!(error_count = errors.len(), "application rejected");
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Summary of the live values once the form has been submitted.
    pub fn summary(&self) -> Option<SubmissionSummary> {
        self.submitted
            .then(|| SubmissionSummary::new(self.values.clone()))
    }
}
