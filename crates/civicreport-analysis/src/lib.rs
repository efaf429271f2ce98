//! Civicreport Analysis Library
//!
//! Photo spam-suspicion analysis for report submissions: header-byte format
//! sniffing, EXIF-derived camera/GPS flags, a weighted suspicion score, and
//! the hard-gate validator that turns an analysis into an
//! accept / flag-for-review / reject verdict.

pub mod analyzer;
pub mod diagnostics;
pub mod source;
pub mod tags;
pub mod validator;

// Re-export commonly used types
pub use analyzer::PhotoAnalyzer;
pub use diagnostics::log_photo_analysis;
pub use source::{InMemoryPhoto, PhotoSource};
pub use tags::{ExifTagReader, TagError, TagReader};
pub use validator::PhotoValidator;
