use crate::cli::ServeArgs;
use crate::routes::{with_service_routes, AppState};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use vocational_test::assessment::QuestionCatalog;
use vocational_test::config::AppConfig;
use vocational_test::error::AppError;
use vocational_test::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.catalog.take() {
        config.catalog.path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(QuestionCatalog::load(config.catalog.path.as_deref())?);
    let catalog_source = config
        .catalog
        .path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    info!(
        questions = catalog.len(),
        areas = catalog.areas().len(),
        source = %catalog_source,
        "question catalog loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_service_routes(catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "vocational test scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
