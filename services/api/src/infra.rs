use application_form::error::AppError;
use application_form::form::{ApplicationForm, Skill};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read a form record from a JSON file. Missing keys default to empty fields.
pub(crate) fn load_form_file(path: &Path) -> Result<ApplicationForm, AppError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| AppError::FormFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a `name=value` override; the value may be empty to clear a field.
pub(crate) fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

pub(crate) fn parse_skill(raw: &str) -> Result<Skill, String> {
    raw.trim().parse().map_err(|err| format!("{err}"))
}
