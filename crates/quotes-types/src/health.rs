//! Health check payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body returned by the liveness and readiness checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self::now("healthy")
    }

    pub fn ready() -> Self {
        Self::now("ready")
    }

    fn now(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
        }
    }
}
