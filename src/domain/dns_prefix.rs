// Copyright (c) 2025 - Cowboy AI, Inc.
//! DNS Prefix Validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ValidationError, ValidationResult};

static DNS_PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9-]{1,43}[A-Za-z0-9]$").expect("dns prefix pattern is valid")
});

/// Validate the cluster DNS prefix
///
/// # Rules
/// - 3 to 45 characters
/// - Letters, digits and hyphens only
/// - Starts with a letter, ends with a letter or digit
pub fn validate_dns_prefix(prefix: &str) -> ValidationResult {
    if !DNS_PREFIX_PATTERN.is_match(prefix) {
        return Err(ValidationError::InvalidDnsPrefix {
            prefix: prefix.to_string(),
            length: prefix.len(),
        });
    }
    Ok(())
}
