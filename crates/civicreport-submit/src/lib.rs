//! Civicreport Submit Library
//!
//! The report submission pipeline: field checks, photo analysis and
//! validation, photo upload, and report creation. The storage and report
//! store backends are collaborator traits; this crate never talks to a
//! real object store or database.

pub mod pipeline;
pub mod traits;

pub use pipeline::{submit_report, SubmissionOutcome, SubmissionRequest};
pub use traits::{PhotoStorage, ReportStore, ReportStoreError, StorageError};
