use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A citizen-submitted issue report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
    /// True when the attached photo (if any) passed analysis without
    /// requiring manual review.
    pub is_verified: bool,
    pub is_spam: bool,
    pub created_at: DateTime<Utc>,
}

/// Creation payload handed to the report store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReport {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub photo_url: Option<String>,
    pub is_verified: bool,
    pub is_spam: bool,
}
