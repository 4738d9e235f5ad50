// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Specification Validator
//!
//! Validates a JSON cluster specification before it is handed to
//! provisioning. The document may be a bare properties object or wrapped as
//! `{ "properties": { ... } }`.
//!
//! Run with: cargo run --bin validate-cluster -- cluster.json
//!
//! Limits can be overridden through `CLUSTER_MIN_AGENT_COUNT`,
//! `CLUSTER_MAX_AGENT_COUNT`, `CLUSTER_MIN_DISK_SIZE_GB` and
//! `CLUSTER_MAX_DISK_SIZE_GB`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use cim_cluster_validation::{parse_document, ClusterProperties, ProfileValidator, ValidationLimits};
use tracing::{error, info};

const USAGE: &str = "usage: validate-cluster <cluster.json>";

fn load(path: &Path) -> Result<ClusterProperties> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_document(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Validate the document at `path`, writing `OK` or the failure message
///
/// Returns whether validation passed.
fn run(path: Option<PathBuf>, limits: ValidationLimits, out: &mut dyn Write) -> Result<bool> {
    let Some(path) = path else {
        bail!(USAGE);
    };

    info!(
        "Limits: agents [{}, {}], disk [{}, {}] GB",
        limits.min_agent_count, limits.max_agent_count, limits.min_disk_size_gb, limits.max_disk_size_gb
    );

    let properties = load(&path)?;
    let validator = ProfileValidator::new(limits);

    match validator.validate(&properties) {
        Ok(()) => {
            writeln!(out, "OK")?;
            Ok(true)
        }
        Err(e) => {
            error!("Validation failed for {}", path.display());
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let limits = ValidationLimits::from_env().context("Invalid validation limits")?;
    let path = std::env::args_os().nth(1).map(PathBuf::from);

    if run(path, limits, &mut std::io::stdout().lock())? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
