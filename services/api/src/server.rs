use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_placement_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use placement_eligibility::config::AppConfig;
use placement_eligibility::error::AppError;
use placement_eligibility::placement::{CompanyCatalog, PlacementService};
use placement_eligibility::telemetry;
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
    if let Some(companies) = args.companies.take() {
        config.dataset.companies_csv = companies;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = CompanyCatalog::load_or_empty(&config.dataset.companies_csv);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: catalog.clone(),
    };

    let service = Arc::new(PlacementService::new(catalog));

    let app = with_placement_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "placement eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
