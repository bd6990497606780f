use crate::cli::ServeArgs;
use crate::infra::{load_form_file, AppState};
use crate::routes::with_form_routes;
use application_form::config::{AppConfig, SessionConfig};
use application_form::error::AppError;
use application_form::form::{ApplicationForm, FormStateStore};
use application_form::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let form = Arc::new(Mutex::new(session_store(&config.session)?));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_form_routes(form)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job application form ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Store for the served session, seeded from the preload file when one is configured.
pub(crate) fn session_store(session: &SessionConfig) -> Result<FormStateStore, AppError> {
    let values = match &session.preload {
        Some(path) => {
            let values = load_form_file(path)?;
            info!(path = %path.display(), "form session preloaded");
            values
        }
        None => ApplicationForm::default(),
    };
    Ok(FormStateStore::with_values(values))
}
