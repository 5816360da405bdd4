use std::sync::Arc;

use axum::{Json, extract::State};
use mergington::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use mergington::log;

use crate::error::ApiError;
use crate::services::ActivityService;

fn human_readable_uptime(uptime: chrono::TimeDelta) -> String {
    let uptime_seconds = uptime.num_seconds();
    let days = uptime.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> UptimeInfo {
    let uptime = chrono::Utc::now().signed_duration_since(started_at);
    UptimeInfo {
        seconds: uptime.num_seconds(),
        human: human_readable_uptime(uptime),
    }
}

pub async fn get(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let catalog = state.activities.list().await?;
    let participant_count: usize = catalog.values().map(|a| a.participants.len()).sum();

    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at),
        services: ServiceInfo {
            activities: "up".to_string(),
            activity_count: catalog.len(),
            participant_count,
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Ok(Json(health_response))
}
