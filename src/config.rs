// Copyright (c) 2025 - Cowboy AI, Inc.
//! Validation limits
//!
//! Numeric bounds and the managed-disks sentinel used by the field
//! constraints and by the error messages built from their violations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of agents in a pool
pub const MIN_AGENT_COUNT: i64 = 1;

/// Maximum number of agents in a pool
pub const MAX_AGENT_COUNT: i64 = 100;

/// Minimum OS disk size in GB
pub const MIN_DISK_SIZE_GB: i64 = 0;

/// Maximum OS disk size in GB
pub const MAX_DISK_SIZE_GB: i64 = 1023;

/// Storage profile whose disks are lifecycle-managed by the platform
pub const MANAGED_DISKS: &str = "ManagedDisks";

/// Errors raised while loading [`ValidationLimits`]
///
/// Kept apart from [`ValidationError`](crate::errors::ValidationError):
/// these surface at startup, never as the result of validating a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be an integer, got '{value}'")]
    InvalidInteger { key: String, value: String },

    #[error("{name} range [{min}, {max}] is empty")]
    EmptyRange {
        name: &'static str,
        min: i64,
        max: i64,
    },
}

/// Bounds applied while validating a cluster specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationLimits {
    pub min_agent_count: i64,
    pub max_agent_count: i64,
    pub min_disk_size_gb: i64,
    pub max_disk_size_gb: i64,
    /// The only non-empty storage profile accepted
    pub managed_disks: String,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_agent_count: MIN_AGENT_COUNT,
            max_agent_count: MAX_AGENT_COUNT,
            min_disk_size_gb: MIN_DISK_SIZE_GB,
            max_disk_size_gb: MAX_DISK_SIZE_GB,
            managed_disks: MANAGED_DISKS.to_string(),
        }
    }
}

impl ValidationLimits {
    /// Load limits from environment variables, falling back to the defaults
    ///
    /// Recognized variables:
    /// - `CLUSTER_MIN_AGENT_COUNT`
    /// - `CLUSTER_MAX_AGENT_COUNT`
    /// - `CLUSTER_MIN_DISK_SIZE_GB`
    /// - `CLUSTER_MAX_DISK_SIZE_GB`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load limits through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, default: i64| -> Result<i64, ConfigError> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ConfigError::InvalidInteger {
                        key: key.to_string(),
                        value: raw,
                    }),
                None => Ok(default),
            }
        };

        let limits = Self {
            min_agent_count: read("CLUSTER_MIN_AGENT_COUNT", defaults.min_agent_count)?,
            max_agent_count: read("CLUSTER_MAX_AGENT_COUNT", defaults.max_agent_count)?,
            min_disk_size_gb: read("CLUSTER_MIN_DISK_SIZE_GB", defaults.min_disk_size_gb)?,
            max_disk_size_gb: read("CLUSTER_MAX_DISK_SIZE_GB", defaults.max_disk_size_gb)?,
            managed_disks: defaults.managed_disks,
        };
        limits.check()?;
        Ok(limits)
    }

    /// Reject inverted ranges
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.min_agent_count > self.max_agent_count {
            return Err(ConfigError::EmptyRange {
                name: "agent count",
                min: self.min_agent_count,
                max: self.max_agent_count,
            });
        }
        if self.min_disk_size_gb > self.max_disk_size_gb {
            return Err(ConfigError::EmptyRange {
                name: "disk size",
                min: self.min_disk_size_gb,
                max: self.max_disk_size_gb,
            });
        }
        Ok(())
    }
}
