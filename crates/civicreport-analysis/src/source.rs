//! Photo source abstraction
//!
//! The analyzer never touches a browser `File` object or the filesystem
//! directly; it consumes this narrow capability trait so it can be driven
//! from an upload handler, a CLI, or a test fake.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// One uploaded file as the analyzer sees it: a few declared attributes
/// plus the ability to read the complete byte content once.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Original client-supplied file name.
    fn file_name(&self) -> &str;

    /// Declared size in bytes. Untrusted; the validator enforces the ceiling.
    fn declared_size(&self) -> u64;

    /// Client-declared MIME type. Untrusted.
    fn content_type(&self) -> &str;

    fn last_modified(&self) -> DateTime<Utc>;

    /// Read the full byte content into memory. Called at most once per
    /// analysis; a failure here is absorbed by the analyzer as maximum
    /// suspicion rather than propagated.
    async fn read_bytes(&self) -> anyhow::Result<Bytes>;
}

/// A photo held entirely in memory. The common case for form uploads, and
/// the fixture type for tests.
#[derive(Debug, Clone)]
pub struct InMemoryPhoto {
    file_name: String,
    content_type: String,
    last_modified: DateTime<Utc>,
    data: Bytes,
}

impl InMemoryPhoto {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        last_modified: DateTime<Utc>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            last_modified,
            data: data.into(),
        }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

#[async_trait]
impl PhotoSource for InMemoryPhoto {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn declared_size(&self) -> u64 {
        self.data.len() as u64
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    async fn read_bytes(&self) -> anyhow::Result<Bytes> {
        Ok(self.data.clone())
    }
}
