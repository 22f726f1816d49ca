use std::sync::Arc;

use axum::{Json, extract::State};
use mergington::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use mergington::log;

fn uptime_seconds(started_at: chrono::DateTime<chrono::Utc>) -> i64 {
    (chrono::Utc::now() - started_at).num_seconds()
}

fn format_uptime(uptime_seconds: i64) -> String {
    let days = uptime_seconds / 86400;
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

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> (i64, String) {
    let seconds = uptime_seconds(started_at);
    let human = format_uptime(seconds);
    (seconds, human)
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let (seconds, human) = service_uptime(state.started_at);

    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: UptimeInfo { seconds, human },
        services: ServiceInfo {
            activities: "up".to_string(),
            activity_count: state.activities.activity_count(),
            participant_count: state.activities.participant_count(),
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}
