use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::{cors_layer, with_service_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_predictor::config::AppConfig;
use career_predictor::error::AppError;
use career_predictor::prediction::{CareerCatalog, CareerPredictor};
use career_predictor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let predictor = Arc::new(CareerPredictor::new(CareerCatalog));

    let app = with_service_routes(predictor)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors_layer());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career prediction service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
