// Copyright (c) 2025 - Cowboy AI, Inc.
//! VNET Subnet Resource Identifiers
//!
//! A custom subnet is referenced by its full resource ID:
//!
//! ```text
//! /subscriptions/<sub>/resourceGroups/<rg>/providers/Microsoft.Network/virtualNetworks/<vnet>/subnets/<subnet>
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

static SUBNET_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^/subscriptions/([^/]*)/resourceGroups/([^/]*)/providers/Microsoft\.Network/virtualNetworks/([^/]*)/subnets/([^/]*)$",
    )
    .expect("subnet id pattern is valid")
});

/// Components of a subnet resource ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecomposedNetworkId {
    pub subscription_id: String,
    pub resource_group: String,
    pub network_name: String,
    pub subnet_name: String,
}

/// Splits a subnet resource ID into its components
pub trait SubnetIdDecomposer {
    fn decompose(&self, id: &str) -> ValidationResult<DecomposedNetworkId>;
}

/// Decomposer for Azure-style subnet resource IDs
#[derive(Debug, Clone, Copy, Default)]
pub struct AzureSubnetIdDecomposer;

impl SubnetIdDecomposer for AzureSubnetIdDecomposer {
    fn decompose(&self, id: &str) -> ValidationResult<DecomposedNetworkId> {
        let captures = SUBNET_ID_PATTERN
            .captures(id)
            .ok_or_else(|| ValidationError::MalformedSubnetId(id.to_string()))?;

        let part = |i: usize| {
            captures
                .get(i)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Ok(DecomposedNetworkId {
            subscription_id: part(1),
            resource_group: part(2),
            network_name: part(3),
            subnet_name: part(4),
        })
    }
}
