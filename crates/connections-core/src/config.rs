//! Resolver configuration with environment overrides.

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::{ConnectionsError, ConnectionsResult};
use crate::models::DEFAULT_MIN_OVERLAP_DAYS;
use crate::query::guards::{clamp_workers, validate_min_overlap_days};

pub const MIN_OVERLAP_DAYS_ENV: &str = "CONNECTIONS_MIN_OVERLAP_DAYS";
pub const WORKERS_ENV: &str = "CONNECTIONS_WORKERS";

const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub min_overlap_days: i64,
    pub workers: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_overlap_days: DEFAULT_MIN_OVERLAP_DAYS,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl ResolverConfig {
    /// Read overrides from the environment; unset variables keep the defaults.
    pub fn from_env() -> ConnectionsResult<Self> {
        let defaults = Self::default();
        Self {
            min_overlap_days: parse_var(MIN_OVERLAP_DAYS_ENV)?
                .unwrap_or(defaults.min_overlap_days),
            workers: parse_var(WORKERS_ENV)?.unwrap_or(defaults.workers),
        }
        .validated()
    }

    /// Apply explicit overrides, e.g. from command-line flags.
    pub fn with_overrides(
        self,
        min_overlap_days: Option<i64>,
        workers: Option<usize>,
    ) -> ConnectionsResult<Self> {
        Self {
            min_overlap_days: min_overlap_days.unwrap_or(self.min_overlap_days),
            workers: workers.unwrap_or(self.workers),
        }
        .validated()
    }

    fn validated(self) -> ConnectionsResult<Self> {
        Ok(Self {
            min_overlap_days: validate_min_overlap_days(self.min_overlap_days)?,
            workers: clamp_workers(self.workers),
        })
    }
}

fn parse_var<T>(key: &str) -> ConnectionsResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConnectionsError::Config(format!("invalid {key}={raw:?}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e @ env::VarError::NotUnicode(_)) => {
            Err(ConnectionsError::Config(format!("invalid {key}: {e}")))
        }
    }
}
