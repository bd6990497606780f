use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::ApplicationForm;

/// Confirmation payload shown after a successful submit. Serializes as the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionSummary {
    application: ApplicationForm,
}

impl SubmissionSummary {
    pub fn new(application: ApplicationForm) -> Self {
        Self { application }
    }

    pub fn application(&self) -> &ApplicationForm {
        &self.application
    }

    pub fn interview_slot(&self) -> Option<NaiveDateTime> {
        self.application.interview_slot()
    }

    /// Two-space indented JSON dump of every field, skills included.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.application)
    }

    pub fn headline(&self) -> String {
        match self.interview_slot() {
            Some(slot) => format!(
                "Form Submitted Successfully! Interview requested for {}",
                slot.format("%A %-d %B %Y at %H:%M")
            ),
            None => "Form Submitted Successfully!".to_string(),
        }
    }
}
