use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Analysis record for one uploaded photo.
///
/// Built once per file by the analyzer and never mutated afterwards.
/// `is_jpeg` / `is_png` come from the file's header bytes, not from the
/// client-declared MIME type or the filename extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoAnalysis {
    pub file_name: String,
    pub file_size: u64,
    /// Client-declared MIME type. Untrusted; recorded for diagnostics only.
    pub file_type: String,
    pub last_modified: DateTime<Utc>,
    pub is_jpeg: bool,
    pub is_png: bool,
    pub has_camera_metadata: bool,
    pub has_gps_data: bool,
    /// 0-100, higher = more suspicious.
    pub suspicion_score: u8,
    pub suspicion_reasons: Vec<String>,
    pub auto_approve: bool,
}

impl PhotoAnalysis {
    /// True when the header bytes matched a supported format.
    pub fn has_known_format(&self) -> bool {
        self.is_jpeg || self.is_png
    }

    pub fn file_size_kib(&self) -> f64 {
        self.file_size as f64 / 1024.0
    }
}

/// Final verdict for one submission attempt.
///
/// When `is_valid` holds, exactly one of `should_auto_approve` and
/// `flagged_for_review` is true. `reasons` carries hard-gate failures when
/// invalid, the suspicion reasons when flagged, and is empty when
/// auto-approved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub should_auto_approve: bool,
    pub flagged_for_review: bool,
    pub reasons: Vec<String>,
    pub analysis: PhotoAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis() -> PhotoAnalysis {
        PhotoAnalysis {
            file_name: "photo.jpg".to_string(),
            file_size: 120 * 1024,
            file_type: "image/jpeg".to_string(),
            last_modified: Utc::now(),
            is_jpeg: true,
            is_png: false,
            has_camera_metadata: true,
            has_gps_data: true,
            suspicion_score: 0,
            suspicion_reasons: vec![],
            auto_approve: true,
        }
    }

    #[test]
    fn test_analysis_serialization_roundtrip() {
        let analysis = sample_analysis();
        let json = serde_json::to_string(&analysis).unwrap();
        let deserialized: PhotoAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.file_name, analysis.file_name);
        assert_eq!(deserialized.suspicion_score, analysis.suspicion_score);
        assert_eq!(deserialized.auto_approve, analysis.auto_approve);
    }

    #[test]
    fn test_known_format() {
        let mut analysis = sample_analysis();
        assert!(analysis.has_known_format());
        analysis.is_jpeg = false;
        assert!(!analysis.has_known_format());
        analysis.is_png = true;
        assert!(analysis.has_known_format());
    }

    #[test]
    fn test_file_size_kib() {
        let analysis = sample_analysis();
        assert!((analysis.file_size_kib() - 120.0).abs() < f64::EPSILON);
    }
}
