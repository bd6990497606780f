use crate::infra::{load_form_file, parse_assignment, parse_skill};
use application_form::error::AppError;
use application_form::form::{
    ApplicationForm, Experience, FieldEdit, FormStateStore, FormView, Position, Skill,
    SubmitOutcome,
};
use clap::Args;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON file holding the form record (defaults to an empty form)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Overwrite a field before submitting, e.g. --set position=Designer
    #[arg(long, value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub(crate) set: Vec<(String, String)>,
    /// Tick an additional skill (JavaScript, CSS, Python)
    #[arg(long, value_parser = parse_skill)]
    pub(crate) skill: Vec<Skill>,
    /// Print the outcome as JSON instead of the rendered form
    #[arg(long)]
    pub(crate) json: bool,
}

/// Returns whether the form was accepted.
pub(crate) fn run_validate(args: ValidateArgs) -> Result<bool, AppError> {
    let ValidateArgs {
        input,
        set,
        skill,
        json,
    } = args;

    let values = match &input {
        Some(path) => load_form_file(path)?,
        None => ApplicationForm::default(),
    };

    let mut store = FormStateStore::with_values(values);
    for (name, value) in &set {
        store.set_field(FieldEdit::parse(name, value)?);
    }
    for skill in skill {
        store.toggle_skill(skill, true);
    }

    let outcome = store.submit();
    info!(
        input = ?input,
        overrides = set.len(),
        submitted = outcome.is_submitted(),
        "form validated"
    );

    if json {
        let payload = match &outcome {
            SubmitOutcome::Submitted(summary) => json!({ "submitted": true, "summary": summary }),
            SubmitOutcome::Rejected(errors) => json!({ "submitted": false, "errors": errors }),
        };
        match serde_json::to_string_pretty(&payload) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("outcome unavailable: {err}"),
        }
    } else {
        print!("{}", FormView::from_store(&store).render_text());
        if let SubmitOutcome::Rejected(errors) = &outcome {
            println!("\n{} field(s) need attention", errors.len());
        }
    }

    Ok(outcome.is_submitted())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Job application form demo");

    println!("\n1. Developer with every required field");
    let mut store = FormStateStore::new();
    fill_reference_applicant(&mut store);
    report(&mut store);

    println!("\n2. Same applicant with a malformed email");
    store.set_field(FieldEdit::parse("email", "not-an-email")?);
    let mut rejected = FormStateStore::with_values(store.values().clone());
    report(&mut rejected);

    println!("\n3. Switching to Designer without a portfolio");
    let mut designer = FormStateStore::with_values(store.values().clone());
    designer.set_field(FieldEdit::Email("ada@x.com".to_string()));
    designer.set_field(FieldEdit::Position(Position::Designer));
    report(&mut designer);

    println!("\n4. Switching to Manager keeps the hidden designer answers");
    designer.set_field(FieldEdit::PortfolioUrl("https://ada.example".to_string()));
    designer.set_field(FieldEdit::Position(Position::Manager));
    designer.set_field(FieldEdit::ManagementExperience(
        "Led the platform team for two years".to_string(),
    ));
    println!(
        "- hidden portfolio URL still stored: {}",
        designer.values().portfolio_url
    );
    report(&mut designer);

    println!("\n5. Skill toggles are idempotent");
    let mut skills = FormStateStore::new();
    skills.toggle_skill(Skill::Css, true);
    skills.toggle_skill(Skill::Css, true);
    skills.toggle_skill(Skill::Python, false);
    println!(
        "- selected after toggling CSS twice and clearing Python: {:?}",
        skills.values().additional_skills
    );

    Ok(())
}

fn fill_reference_applicant(store: &mut FormStateStore) {
    store.set_field(FieldEdit::FullName("Ada".to_string()));
    store.set_field(FieldEdit::Email("ada@x.com".to_string()));
    store.set_field(FieldEdit::PhoneNumber("5551234".to_string()));
    store.set_field(FieldEdit::Position(Position::Developer));
    store.set_field(FieldEdit::RelevantExperience(Experience::new("2")));
    store.toggle_skill(Skill::JavaScript, true);
    store.set_field(FieldEdit::PreferredInterviewTime(
        "2024-01-01T10:00".to_string(),
    ));
}

fn report(store: &mut FormStateStore) {
    match store.submit() {
        SubmitOutcome::Submitted(summary) => {
            println!("- {}", summary.headline());
        }
        SubmitOutcome::Rejected(errors) => {
            println!("- rejected with {} error(s)", errors.len());
            for (field, message) in errors.iter() {
                println!("  - {field}: {message}");
            }
        }
    }
}
