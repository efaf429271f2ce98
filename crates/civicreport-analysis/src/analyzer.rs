//! Photo analyzer
//!
//! Builds a [`PhotoAnalysis`] from an uploaded file: format sniffing from
//! header bytes, camera/GPS flags from EXIF tags (JPEG only), and a
//! weighted 0-100 suspicion score estimating how likely the upload is a
//! screenshot or otherwise not an original on-site photograph.
//!
//! The analyzer never fails: an unreadable byte stream yields a
//! maximum-suspicion record, and a malformed EXIF block is treated as
//! "no tags found".

use std::collections::HashMap;
use std::sync::Arc;

use civicreport_core::constants::{AUTO_APPROVE_THRESHOLD, LARGE_PHOTO_BYTES, SMALL_PHOTO_BYTES};
use civicreport_core::PhotoAnalysis;

use crate::source::PhotoSource;
use crate::tags::{
    TagReader, TAG_DATE_TIME, TAG_GPS_LATITUDE, TAG_GPS_LONGITUDE, TAG_MAKE, TAG_MODEL,
    TAG_SOFTWARE,
};

const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];
const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

/// Filename fragments typical of screenshots, stock images, and re-downloads.
const SUSPICIOUS_NAME_FRAGMENTS: &[&str] =
    &["screenshot", "screen shot", "image", "picture", "download"];

/// Common screen dimensions embedded in generated filenames. "375x" is
/// scored here but deliberately absent from the reported subset; keep the
/// two lists out of sync.
const GENERIC_DIMENSION_FRAGMENTS: &[&str] = &["400x800", "1080x", "1920x", "375x"];
const REPORTED_DIMENSION_FRAGMENTS: &[&str] = &["400x800", "1080x", "1920x"];

/// Photo spam-suspicion analyzer.
pub struct PhotoAnalyzer {
    tag_reader: Arc<dyn TagReader>,
    auto_approve_threshold: u8,
}

impl PhotoAnalyzer {
    pub fn new(tag_reader: Arc<dyn TagReader>) -> Self {
        Self {
            tag_reader,
            auto_approve_threshold: AUTO_APPROVE_THRESHOLD,
        }
    }

    pub fn with_threshold(tag_reader: Arc<dyn TagReader>, auto_approve_threshold: u8) -> Self {
        Self {
            tag_reader,
            auto_approve_threshold,
        }
    }

    /// Analyze one uploaded photo. Infallible by contract: any internal
    /// failure is reflected in the returned record instead of propagated.
    pub async fn analyze(&self, source: &dyn PhotoSource) -> PhotoAnalysis {
        let mut analysis = PhotoAnalysis {
            file_name: source.file_name().to_string(),
            file_size: source.declared_size(),
            file_type: source.content_type().to_string(),
            last_modified: source.last_modified(),
            is_jpeg: false,
            is_png: false,
            has_camera_metadata: false,
            has_gps_data: false,
            suspicion_score: 0,
            suspicion_reasons: Vec::new(),
            auto_approve: false,
        };

        let data = match source.read_bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(file = %analysis.file_name, error = %e, "Error reading photo data");
                analysis.suspicion_score = 100;
                analysis
                    .suspicion_reasons
                    .push("Error reading file data".to_string());
                return analysis;
            }
        };

        // Format from header bytes, independent of the declared MIME type
        // or filename extension. The signatures are disjoint.
        analysis.is_jpeg = data.len() >= 2 && data[..2] == JPEG_MAGIC;
        analysis.is_png = data.len() >= 4 && data[..4] == PNG_MAGIC;

        // EXIF is only consulted for JPEGs; PNG metadata is not read, which
        // feeds the format bias in the scoring below.
        if analysis.is_jpeg {
            match self.tag_reader.extract_tags(&data) {
                Ok(tags) => {
                    analysis.has_camera_metadata = has_camera_tags(&tags);
                    analysis.has_gps_data = has_gps_tags(&tags);
                    if analysis.has_gps_data {
                        tracing::debug!(
                            file = %analysis.file_name,
                            latitude = tags.get(TAG_GPS_LATITUDE).map(String::as_str),
                            longitude = tags.get(TAG_GPS_LONGITUDE).map(String::as_str),
                            "GPS coordinates found in photo metadata"
                        );
                    }
                }
                Err(e) => {
                    // Parse failure is absorbed here: both flags stay false,
                    // scoring proceeds on the normal path.
                    tracing::debug!(file = %analysis.file_name, error = %e, "Error reading EXIF data");
                }
            }
        }

        analysis.suspicion_score = suspicion_score(&analysis);
        analysis.suspicion_reasons = suspicion_reasons(&analysis);
        analysis.auto_approve = analysis.suspicion_score < self.auto_approve_threshold;

        analysis
    }
}

impl Default for PhotoAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(crate::tags::ExifTagReader))
    }
}

fn non_empty(tags: &HashMap<String, String>, name: &str) -> bool {
    tags.get(name).is_some_and(|v| !v.is_empty())
}

fn has_camera_tags(tags: &HashMap<String, String>) -> bool {
    non_empty(tags, TAG_MAKE)
        || non_empty(tags, TAG_MODEL)
        || non_empty(tags, TAG_DATE_TIME)
        || non_empty(tags, TAG_SOFTWARE)
}

fn has_gps_tags(tags: &HashMap<String, String>) -> bool {
    non_empty(tags, TAG_GPS_LATITUDE) && non_empty(tags, TAG_GPS_LONGITUDE)
}

/// Weighted suspicion score, clamped to 100. All contributions are
/// independent; a PNG takes both the PNG and the not-JPEG penalty.
fn suspicion_score(analysis: &PhotoAnalysis) -> u8 {
    let mut score: u32 = 0;

    // Format factors. PNGs are more likely to be screenshots.
    if analysis.is_png {
        score += 20;
    }
    if !analysis.is_jpeg {
        score += 10;
    }

    // Metadata factors
    if !analysis.has_camera_metadata {
        score += 25;
    }
    if !analysis.has_gps_data {
        score += 15;
    }

    // Filename factors
    let file_name = analysis.file_name.to_lowercase();
    if SUSPICIOUS_NAME_FRAGMENTS
        .iter()
        .any(|fragment| file_name.contains(fragment))
    {
        score += 30;
    }
    if GENERIC_DIMENSION_FRAGMENTS
        .iter()
        .any(|dim| file_name.contains(dim))
    {
        score += 25;
    }

    // File size factors
    if analysis.file_size < SMALL_PHOTO_BYTES {
        score += 10;
    }
    if analysis.file_size > LARGE_PHOTO_BYTES {
        score += 5;
    }

    score.min(100) as u8
}

/// Human-readable contributors, in a fixed check order:
/// format → camera metadata → GPS → screenshot name → generic dimensions
/// → small size. The reported set is narrower than the scored set.
fn suspicion_reasons(analysis: &PhotoAnalysis) -> Vec<String> {
    let mut reasons = Vec::new();

    if analysis.is_png {
        reasons.push("PNG format (could be screenshot)".to_string());
    }
    if !analysis.has_camera_metadata {
        reasons.push("Missing camera metadata".to_string());
    }
    if !analysis.has_gps_data {
        reasons.push("No GPS coordinates".to_string());
    }

    let file_name = analysis.file_name.to_lowercase();
    if file_name.contains("screenshot") || file_name.contains("screen shot") {
        reasons.push("Filename suggests screenshot".to_string());
    }
    if REPORTED_DIMENSION_FRAGMENTS
        .iter()
        .any(|dim| file_name.contains(dim))
    {
        reasons.push("Generic screen dimensions in filename".to_string());
    }

    if analysis.file_size < SMALL_PHOTO_BYTES {
        reasons.push("Very small file size".to_string());
    }

    reasons
}
