//! Photo validator
//!
//! Applies the hard acceptance gate (non-empty, size ceiling, supported
//! format) on top of an analysis record and composes the final
//! accept / flag-for-review / reject verdict. Pure: no I/O, always returns.

use civicreport_core::constants::MAX_PHOTO_SIZE_BYTES;
use civicreport_core::{PhotoAnalysis, ValidationResult};

/// Hard-gate validator for report photos.
pub struct PhotoValidator {
    max_size_bytes: u64,
}

impl PhotoValidator {
    pub fn new(max_size_bytes: u64) -> Self {
        Self { max_size_bytes }
    }

    /// Compose the verdict for one analyzed photo.
    ///
    /// The hard gate looks only at size and format; the suspicion score
    /// decides auto-approval versus review for photos that pass it. All
    /// applicable hard-gate failures are reported, not just the first.
    pub fn validate(&self, analysis: PhotoAnalysis) -> ValidationResult {
        let is_valid = analysis.file_size > 0
            && analysis.file_size < self.max_size_bytes
            && analysis.has_known_format();

        let should_auto_approve = is_valid && analysis.auto_approve;
        let flagged_for_review = is_valid && !analysis.auto_approve;

        let mut reasons = Vec::new();
        if !is_valid {
            if analysis.file_size == 0 {
                reasons.push("File is empty".to_string());
            }
            if analysis.file_size >= self.max_size_bytes {
                reasons.push("File too large (max 10MB)".to_string());
            }
            if !analysis.has_known_format() {
                reasons.push("Only JPEG and PNG files allowed".to_string());
            }
        }

        if flagged_for_review {
            reasons.extend(analysis.suspicion_reasons.iter().cloned());
        }

        ValidationResult {
            is_valid,
            should_auto_approve,
            flagged_for_review,
            reasons,
            analysis,
        }
    }
}

impl Default for PhotoValidator {
    fn default() -> Self {
        Self::new(MAX_PHOTO_SIZE_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn analysis(file_size: u64, is_jpeg: bool, is_png: bool, score: u8) -> PhotoAnalysis {
        PhotoAnalysis {
            file_name: "photo.jpg".to_string(),
            file_size,
            file_type: "image/jpeg".to_string(),
            last_modified: Utc::now(),
            is_jpeg,
            is_png,
            has_camera_metadata: true,
            has_gps_data: true,
            suspicion_score: score,
            suspicion_reasons: vec![],
            auto_approve: score < 30,
        }
    }

    #[test]
    fn test_clean_jpeg_auto_approves() {
        let result = PhotoValidator::default().validate(analysis(200 * 1024, true, false, 10));
        assert!(result.is_valid);
        assert!(result.should_auto_approve);
        assert!(!result.flagged_for_review);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_suspicious_photo_flagged_with_reasons() {
        let mut a = analysis(200 * 1024, false, true, 100);
        a.suspicion_reasons = vec![
            "PNG format (could be screenshot)".to_string(),
            "Missing camera metadata".to_string(),
        ];
        let result = PhotoValidator::default().validate(a);
        assert!(result.is_valid);
        assert!(!result.should_auto_approve);
        assert!(result.flagged_for_review);
        assert_eq!(
            result.reasons,
            vec![
                "PNG format (could be screenshot)",
                "Missing camera metadata",
            ]
        );
    }

    #[test]
    fn test_empty_file_rejected() {
        let result = PhotoValidator::default().validate(analysis(0, true, false, 10));
        assert!(!result.is_valid);
        assert!(!result.should_auto_approve);
        assert!(!result.flagged_for_review);
        assert!(result.reasons.iter().any(|r| r == "File is empty"));
    }

    #[test]
    fn test_oversized_file_rejected_despite_low_suspicion() {
        let result =
            PhotoValidator::default().validate(analysis(12 * 1024 * 1024, true, false, 10));
        assert!(!result.is_valid);
        assert_eq!(result.reasons, vec!["File too large (max 10MB)"]);
    }

    #[test]
    fn test_exactly_at_ceiling_rejected_with_reason() {
        let result =
            PhotoValidator::default().validate(analysis(10 * 1024 * 1024, true, false, 10));
        assert!(!result.is_valid);
        assert!(result
            .reasons
            .iter()
            .any(|r| r == "File too large (max 10MB)"));
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let result = PhotoValidator::default().validate(analysis(200 * 1024, false, false, 50));
        assert!(!result.is_valid);
        assert_eq!(result.reasons, vec!["Only JPEG and PNG files allowed"]);
        // Suspicion reasons never leak into a hard-gate rejection.
        assert!(!result.flagged_for_review);
    }

    #[test]
    fn test_all_hard_gate_failures_reported_together() {
        // Empty AND unsupported format at once.
        let result = PhotoValidator::default().validate(analysis(0, false, false, 50));
        assert!(!result.is_valid);
        assert_eq!(
            result.reasons,
            vec!["File is empty", "Only JPEG and PNG files allowed"]
        );
    }

    #[test]
    fn test_valid_verdicts_are_mutually_exclusive() {
        for score in [0u8, 29, 30, 100] {
            let result = PhotoValidator::default().validate(analysis(200 * 1024, true, false, score));
            assert!(result.is_valid);
            assert_ne!(result.should_auto_approve, result.flagged_for_review);
        }
    }

    #[test]
    fn test_custom_ceiling() {
        let validator = PhotoValidator::new(1024 * 1024);
        let result = validator.validate(analysis(2 * 1024 * 1024, true, false, 10));
        assert!(!result.is_valid);
    }
}
