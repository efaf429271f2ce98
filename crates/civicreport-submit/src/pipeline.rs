//! Submission pipeline: check fields → analyze → validate → upload → create.
//!
//! Photo rejection is an expected, user-correctable outcome and comes back
//! as [`SubmissionOutcome::PhotoRejected`]; only backend failures surface
//! as errors.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use civicreport_analysis::{log_photo_analysis, PhotoAnalyzer, PhotoSource, PhotoValidator};
use civicreport_core::{AppError, NewReport};

use crate::traits::{PhotoStorage, ReportStore};

/// One submission attempt from a reporter.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Serialize)]
pub enum SubmissionOutcome {
    Created {
        report_id: Uuid,
        photo_url: Option<String>,
        /// True when the report starts out verified (auto-approved photo,
        /// or no photo attached).
        verified: bool,
        flagged_for_review: bool,
    },
    /// The attached photo failed the hard gate. Nothing was uploaded or
    /// stored; the reasons are suitable for showing to the reporter.
    PhotoRejected { reasons: Vec<String> },
}

/// Run one report submission end to end.
pub async fn submit_report(
    request: SubmissionRequest,
    photo: Option<&dyn PhotoSource>,
    analyzer: &PhotoAnalyzer,
    validator: &PhotoValidator,
    storage: Arc<dyn PhotoStorage>,
    reports: Arc<dyn ReportStore>,
) -> Result<SubmissionOutcome, AppError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Title is required".to_string()));
    }
    let (latitude, longitude) = match (request.latitude, request.longitude) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(AppError::InvalidInput(
                "Location (latitude and longitude) is required".to_string(),
            ));
        }
    };

    let mut photo_url = None;
    let mut verified = true;
    let mut flagged_for_review = false;

    if let Some(source) = photo {
        let analysis = analyzer.analyze(source).await;
        log_photo_analysis(&analysis);

        let validation = validator.validate(analysis);
        if !validation.is_valid {
            tracing::info!(
                file = %validation.analysis.file_name,
                reasons = %validation.reasons.join(", "),
                "Photo rejected by hard gate"
            );
            return Ok(SubmissionOutcome::PhotoRejected {
                reasons: validation.reasons,
            });
        }
        verified = validation.should_auto_approve;
        flagged_for_review = validation.flagged_for_review;

        let data = source
            .read_bytes()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read photo data: {}", e)))?;
        let url = storage
            .upload(source.file_name(), source.content_type(), data)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        photo_url = Some(url);
    }

    let report_id = reports
        .create_report(NewReport {
            title: title.to_string(),
            category: request.category,
            description: request
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            latitude,
            longitude,
            address: request.address,
            photo_url: photo_url.clone(),
            is_verified: verified,
            is_spam: false,
        })
        .await
        .map_err(|e| AppError::ReportStore(e.to_string()))?;

    tracing::info!(
        report_id = %report_id,
        verified,
        flagged_for_review,
        has_photo = photo_url.is_some(),
        "Report created"
    );

    Ok(SubmissionOutcome::Created {
        report_id,
        photo_url,
        verified,
        flagged_for_review,
    })
}
