use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use citynorm::cities::CityNormalizer;
use citynorm::config::AppConfig;
use citynorm::error::AppError;
use citynorm::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    // One normalizer for the lifetime of the process; handlers share it.
    let normalizer = Arc::new(CityNormalizer::new());
    for collision in normalizer.collisions() {
        warn!(
            alias = %collision.alias,
            kept = %collision.kept,
            discarded = %collision.discarded,
            "alias registered under more than one city; last mapping wins"
        );
    }

    let app = with_operational_routes(normalizer.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        aliases = normalizer.len(),
        "city name normalization service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
