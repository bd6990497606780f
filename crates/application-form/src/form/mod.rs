//! Job application form: the record, its position-aware validation rules, the session
//! store, and the presentation projections built on top of them.

pub mod domain;
pub mod router;
pub mod store;
pub mod summary;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationForm, Experience, FieldEdit, FieldName, FormError, Position, Skill,
    ValidationErrors,
};
pub use router::{application_form_router, FormSnapshot, SharedForm};
pub use store::{FormStateStore, SubmitOutcome};
pub use summary::SubmissionSummary;
pub use validation::validate;
pub use view::{visible_fields, FormView};
