use metrics_exporter_prometheus::PrometheusHandle;
use placement_eligibility::config::AppConfig;
use placement_eligibility::error::AppError;
use placement_eligibility::placement::{CompanyCatalog, MAX_CGPA, MIN_CGPA};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: CompanyCatalog,
}

/// Resolves the company CSV path, letting a CLI flag win over configuration.
pub(crate) fn companies_path(overridden: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match overridden {
        Some(path) => Ok(path),
        None => Ok(AppConfig::load()?.dataset.companies_csv),
    }
}

pub(crate) fn parse_cgpa(raw: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a CGPA ({err})"))?;

    if !(MIN_CGPA..=MAX_CGPA).contains(&value) {
        return Err(format!("CGPA {value} must be between {MIN_CGPA} and {MAX_CGPA}"));
    }

    Ok(value)
}
