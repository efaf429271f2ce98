//! Operator-facing diagnostic trace for photo analyses.
//!
//! Observability only: nothing in the decision contract depends on this
//! output, and callers must not parse it.

use civicreport_core::PhotoAnalysis;

/// Emit a structured trace of one completed analysis.
pub fn log_photo_analysis(analysis: &PhotoAnalysis) {
    tracing::info!(
        file = %analysis.file_name,
        size_kib = %format!("{:.1}", analysis.file_size_kib()),
        content_type = %analysis.file_type,
        is_jpeg = analysis.is_jpeg,
        is_png = analysis.is_png,
        has_gps = analysis.has_gps_data,
        has_camera_metadata = analysis.has_camera_metadata,
        suspicion_score = analysis.suspicion_score,
        auto_approve = analysis.auto_approve,
        flags = %analysis.suspicion_reasons.join(", "),
        "Photo analysis complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_log_does_not_panic() {
        let analysis = PhotoAnalysis {
            file_name: "Screenshot_1920x1080.png".to_string(),
            file_size: 200 * 1024,
            file_type: "image/png".to_string(),
            last_modified: Utc::now(),
            is_jpeg: false,
            is_png: true,
            has_camera_metadata: false,
            has_gps_data: false,
            suspicion_score: 100,
            suspicion_reasons: vec!["PNG format (could be screenshot)".to_string()],
            auto_approve: false,
        };
        log_photo_analysis(&analysis);
    }
}
