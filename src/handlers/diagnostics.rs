// GET /test handler

use crate::config::AppConfig;
use crate::models::DiagnosticsReport;
use crate::store::Persistence;
use std::convert::Infallible;
use std::sync::Arc;

/// Number of collection names included in the report
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Error text is cut to this many characters
pub const MAX_ERROR_CHARS: usize = 50;

pub async fn diagnostics_handler(
    persistence: Persistence,
    config: Arc<AppConfig>,
) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&build_report(&persistence, &config).await))
}

/// Probe the document store and describe what was found. Never fails.
pub async fn build_report(persistence: &Persistence, config: &AppConfig) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database: "⚠️  Available but not initialized".to_string(),
        database_url: set_flag(config.database_url.is_some()),
        database_name: set_flag(config.database_name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if !persistence.is_configured() {
        return report;
    }

    report.database = "✅ Available".to_string();
    report.connection_status = "Connected".to_string();

    match persistence.list_collections().await {
        Ok(collections) => {
            report.collections = collections.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
            report.database = "✅ Connected & Working".to_string();
        }
        Err(err) => {
            tracing::warn!("Diagnostics could not list collections: {}", err);
            report.database = format!("⚠️  Connected but Error: {}", truncate(&err.to_string()));
        }
    }

    report
}

fn set_flag(set: bool) -> String {
    let flag = if set { "✅ Set" } else { "❌ Not Set" };
    flag.to_string()
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_CHARS).collect()
}
