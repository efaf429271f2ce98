//! Shared limits and thresholds for photo handling.

/// Hard ceiling on accepted photo uploads (10 MB).
pub const MAX_PHOTO_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Suspicion score below which a photo is approved without manual review.
pub const AUTO_APPROVE_THRESHOLD: u8 = 30;

/// Files under this size are unusually small for a phone camera photo.
pub const SMALL_PHOTO_BYTES: u64 = 50 * 1024;

/// Files over this size are unusually large for a single report photo.
pub const LARGE_PHOTO_BYTES: u64 = 5 * 1024 * 1024;
