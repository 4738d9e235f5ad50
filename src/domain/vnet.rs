// Copyright (c) 2025 - Cowboy AI, Inc.
//! VNET Consistency Across Agent Pools
//!
//! Either no pool attaches to a custom subnet, or every pool does. When every
//! pool does, each subnet ID is decomposed and the subscriptions, resource
//! groups and network names are tallied.
//!
//! The tallies are not yet asserted to be singletons: pools that reference
//! different subscriptions, resource groups or networks are still accepted.

use std::collections::HashMap;

use tracing::trace;

use crate::errors::{ValidationError, ValidationResult};

use super::properties::AgentPoolProfile;
use super::subnet_id::SubnetIdDecomposer;

/// Occurrence counts gathered from the custom subnets of all pools
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct VnetUsage {
    /// Pools declaring a custom subnet
    pub custom_vnet_count: usize,
    /// Flag copied from the last pool seen with a custom subnet
    pub is_custom_vnet: bool,
    pub subscriptions: HashMap<String, usize>,
    pub resource_groups: HashMap<String, usize>,
    pub networks: HashMap<String, usize>,
}

/// Classify pools and, for all-custom collections, tally subnet components
///
/// Fails on a mixed custom/default collection, or with the decomposer's
/// error on the first subnet ID that cannot be decomposed.
pub(crate) fn summarize_vnet_usage<D>(
    profiles: &[AgentPoolProfile],
    decomposer: &D,
) -> ValidationResult<VnetUsage>
where
    D: SubnetIdDecomposer + ?Sized,
{
    let mut usage = VnetUsage::default();

    for profile in profiles {
        if profile.is_custom_vnet() {
            usage.custom_vnet_count += 1;
            usage.is_custom_vnet = profile.is_custom_vnet();
        }
    }

    if !(usage.custom_vnet_count == 0 || usage.custom_vnet_count == profiles.len()) {
        return Err(ValidationError::MixedVnetConfiguration);
    }

    if usage.is_custom_vnet {
        for profile in profiles {
            let id = profile.vnet_subnet_id.as_deref().unwrap_or_default();
            let parts = decomposer.decompose(id)?;

            *usage.subscriptions.entry(parts.subscription_id).or_insert(0) += 1;
            *usage.resource_groups.entry(parts.resource_group).or_insert(0) += 1;
            *usage.networks.entry(parts.network_name).or_insert(0) += 1;
        }
    }

    trace!(
        custom_vnet_count = usage.custom_vnet_count,
        subscriptions = usage.subscriptions.len(),
        resource_groups = usage.resource_groups.len(),
        networks = usage.networks.len(),
        "VNET usage summarized"
    );

    Ok(usage)
}

/// Validate VNET consistency across all pools
pub fn validate_vnet<D>(profiles: &[AgentPoolProfile], decomposer: &D) -> ValidationResult
where
    D: SubnetIdDecomposer + ?Sized,
{
    // TODO: reject pools spread over more than one subscription, resource
    // group or network once the single-VNET policy is settled.
    summarize_vnet_usage(profiles, decomposer).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subnet_id::AzureSubnetIdDecomposer;

    fn subnet_id(sub: &str, rg: &str, vnet: &str, subnet: &str) -> String {
        format!(
            "/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Network/virtualNetworks/{vnet}/subnets/{subnet}"
        )
    }

    fn pool(name: &str) -> AgentPoolProfile {
        AgentPoolProfile::new(name, "Standard_D2_v2", 1)
    }

    #[test]
    fn test_no_custom_vnet_accepted() {
        let pools = vec![pool("a"), pool("b"), pool("c")];
        let usage = summarize_vnet_usage(&pools, &AzureSubnetIdDecomposer).unwrap();
        assert_eq!(usage.custom_vnet_count, 0);
        assert!(!usage.is_custom_vnet);
        assert!(usage.subscriptions.is_empty());
    }

    #[test]
    fn test_all_custom_vnet_counts_components() {
        let pools = vec![
            pool("a").with_vnet_subnet_id(subnet_id("sub", "rg", "vnet", "s1")),
            pool("b").with_vnet_subnet_id(subnet_id("sub", "rg", "vnet", "s2")),
        ];
        let usage = summarize_vnet_usage(&pools, &AzureSubnetIdDecomposer).unwrap();
        assert_eq!(usage.custom_vnet_count, 2);
        assert!(usage.is_custom_vnet);
        assert_eq!(usage.subscriptions.get("sub"), Some(&2));
        assert_eq!(usage.resource_groups.get("rg"), Some(&2));
        assert_eq!(usage.networks.get("vnet"), Some(&2));
    }

    #[test]
    fn test_mixed_vnet_rejected() {
        let pools = vec![
            pool("a"),
            pool("b").with_vnet_subnet_id(subnet_id("sub", "rg", "vnet", "s1")),
            pool("c"),
        ];
        assert_eq!(
            validate_vnet(&pools, &AzureSubnetIdDecomposer),
            Err(ValidationError::MixedVnetConfiguration)
        );
    }

    #[test]
    fn test_empty_subnet_id_counts_as_default() {
        let pools = vec![pool("a").with_vnet_subnet_id(""), pool("b")];
        assert!(validate_vnet(&pools, &AzureSubnetIdDecomposer).is_ok());
    }

    #[test]
    fn test_malformed_subnet_id_propagated() {
        let pools = vec![
            pool("a").with_vnet_subnet_id(subnet_id("sub", "rg", "vnet", "s1")),
            pool("b").with_vnet_subnet_id("garbage"),
        ];
        assert_eq!(
            validate_vnet(&pools, &AzureSubnetIdDecomposer),
            Err(ValidationError::MalformedSubnetId("garbage".to_string()))
        );
    }

    // Known gap: disagreement across pools is tallied but not rejected.
    #[test]
    fn test_disagreeing_networks_currently_accepted() {
        let pools = vec![
            pool("a").with_vnet_subnet_id(subnet_id("sub1", "rg1", "vnet1", "s")),
            pool("b").with_vnet_subnet_id(subnet_id("sub2", "rg2", "vnet2", "s")),
        ];
        let usage = summarize_vnet_usage(&pools, &AzureSubnetIdDecomposer).unwrap();
        assert_eq!(usage.subscriptions.len(), 2);
        assert_eq!(usage.resource_groups.len(), 2);
        assert_eq!(usage.networks.len(), 2);
        assert!(validate_vnet(&pools, &AzureSubnetIdDecomposer).is_ok());
    }
}
