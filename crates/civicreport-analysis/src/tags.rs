//! Metadata tag reader abstraction
//!
//! Wraps the EXIF library behind a narrow trait so the analyzer can be
//! tested with fake tag sources instead of real image fixtures. The mapping
//! is tag name → human-readable description, which is all the suspicion
//! heuristics look at.

use std::collections::HashMap;
use std::io::Cursor;

use exif::{In, Reader};
use thiserror::Error;

/// Camera-identifying tags checked by the analyzer.
pub const TAG_MAKE: &str = "Make";
pub const TAG_MODEL: &str = "Model";
pub const TAG_DATE_TIME: &str = "DateTime";
pub const TAG_SOFTWARE: &str = "Software";

/// Both GPS tags must be present for a photo to count as geotagged.
pub const TAG_GPS_LATITUDE: &str = "GPSLatitude";
pub const TAG_GPS_LONGITUDE: &str = "GPSLongitude";

#[derive(Debug, Error)]
pub enum TagError {
    #[error("Failed to decode metadata: {0}")]
    Decode(String),
}

/// Extracts embedded metadata tags from raw image bytes.
pub trait TagReader: Send + Sync {
    /// Return a tag-name → description mapping for the given bytes.
    ///
    /// Fails with [`TagError::Decode`] on malformed input; callers treat
    /// that the same as "no tags found".
    fn extract_tags(&self, data: &[u8]) -> Result<HashMap<String, String>, TagError>;
}

/// [`TagReader`] backed by the `kamadak-exif` parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifTagReader;

impl TagReader for ExifTagReader {
    fn extract_tags(&self, data: &[u8]) -> Result<HashMap<String, String>, TagError> {
        let exif = Reader::new()
            .read_from_container(&mut Cursor::new(data))
            .map_err(|e| TagError::Decode(e.to_string()))?;

        let mut tags = HashMap::new();
        for field in exif.fields() {
            // Skip thumbnail-IFD duplicates; the primary image is what
            // the heuristics care about.
            if field.ifd_num != In::PRIMARY {
                continue;
            }
            tags.entry(field.tag.to_string())
                .or_insert_with(|| field.display_value().to_string());
        }
        Ok(tags)
    }
}
