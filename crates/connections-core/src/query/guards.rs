//! Shared guardrails for caller-supplied resolution parameters.

use crate::errors::{ConnectionsError, ConnectionsResult};

pub const MIN_MIN_OVERLAP_DAYS: i64 = 1;
pub const MAX_MIN_OVERLAP_DAYS: i64 = 36_600;
pub const MAX_WORKERS: usize = 64;
pub const MAX_TARGETS_PER_BATCH: usize = 10_000;

pub fn clamp_workers(value: usize) -> usize {
    value.clamp(1, MAX_WORKERS)
}

/// Reject thresholds outside `MIN_MIN_OVERLAP_DAYS..=MAX_MIN_OVERLAP_DAYS`.
pub fn validate_min_overlap_days(min_days: i64) -> ConnectionsResult<i64> {
    if (MIN_MIN_OVERLAP_DAYS..=MAX_MIN_OVERLAP_DAYS).contains(&min_days) {
        Ok(min_days)
    } else {
        Err(ConnectionsError::InvalidArgument(format!(
            "min_overlap_days must be between {MIN_MIN_OVERLAP_DAYS} and \
             {MAX_MIN_OVERLAP_DAYS}, got {min_days}"
        )))
    }
}

pub fn validate_batch_size(targets: usize) -> ConnectionsResult<usize> {
    if targets <= MAX_TARGETS_PER_BATCH {
        Ok(targets)
    } else {
        Err(ConnectionsError::InvalidArgument(format!(
            "at most {MAX_TARGETS_PER_BATCH} targets per batch, got {targets}"
        )))
    }
}
