//! Collaborator traits for the submission pipeline.
//!
//! Object storage and the reports database are external systems; the
//! pipeline only depends on these narrow seams so it can run against any
//! backend, including the in-memory fakes used in tests.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

use civicreport_core::NewReport;

/// Photo object storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Report store errors
#[derive(Debug, Error)]
pub enum ReportStoreError {
    #[error("Report creation failed: {0}")]
    CreateFailed(String),

    #[error("Report store backend error: {0}")]
    Backend(String),
}

/// Object storage for report photos.
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Upload photo bytes and return the publicly accessible URL.
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<String, StorageError>;
}

/// Persistence for created reports.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Create a report and return its id.
    async fn create_report(&self, report: NewReport) -> Result<Uuid, ReportStoreError>;
}
