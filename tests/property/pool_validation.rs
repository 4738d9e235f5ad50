// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Pool Validation

use std::collections::HashSet;

use cim_cluster_validation::domain::{
    validate_pool_name, validate_unique_pool_names, validate_vnet,
};
use cim_cluster_validation::{AgentPoolProfile, AzureSubnetIdDecomposer, ValidationError};
use proptest::prelude::*;

use crate::fixtures::{pool, subnet_id};

// ============================================================================
// Strategies
// ============================================================================

fn valid_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,11}"
}

fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(valid_name(), 1..12).prop_map(|set| set.into_iter().collect())
}

fn pools_from(names: &[String]) -> Vec<AgentPoolProfile> {
    names.iter().map(|n| pool(n)).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: every name matching the policy is accepted
    #[test]
    fn prop_valid_names_accepted(name in valid_name()) {
        prop_assert!(validate_pool_name(&name).is_ok());
    }

    /// Property: names longer than 12 characters are rejected
    #[test]
    fn prop_long_names_rejected(name in "[a-z][a-z0-9]{12,30}") {
        prop_assert_eq!(
            validate_pool_name(&name),
            Err(ValidationError::InvalidPoolName(name.clone()))
        );
    }

    /// Property: names not starting with a lowercase letter are rejected
    #[test]
    fn prop_bad_leading_char_rejected(name in "[A-Z0-9_-][a-z0-9]{0,11}") {
        prop_assert!(validate_pool_name(&name).is_err());
    }

    /// Property: any character outside a-z0-9 is rejected, and the error names the input
    #[test]
    fn prop_bad_charset_rejected(
        prefix in "[a-z][a-z0-9]{0,4}",
        bad in "[A-Z_.\\- ]",
        suffix in "[a-z0-9]{0,4}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        let err = validate_pool_name(&name).unwrap_err();
        prop_assert!(err.to_string().contains(&name));
    }

    /// Property: pairwise distinct names always pass the uniqueness check
    #[test]
    fn prop_distinct_names_accepted(names in distinct_names()) {
        prop_assert!(validate_unique_pool_names(&pools_from(&names)).is_ok());
    }

    /// Property: the first duplicate by position is the one reported
    #[test]
    fn prop_first_duplicate_reported(
        names in distinct_names(),
        pick in any::<prop::sample::Index>(),
        insert_at in any::<prop::sample::Index>(),
    ) {
        let duplicate = names[pick.index(names.len())].clone();
        let mut with_dup = names.clone();
        let position = insert_at.index(with_dup.len() + 1);
        with_dup.insert(position, duplicate);

        let mut seen = HashSet::new();
        let expected = with_dup
            .iter()
            .find(|n| !seen.insert(n.as_str()))
            .cloned()
            .unwrap();

        prop_assert_eq!(
            validate_unique_pool_names(&pools_from(&with_dup)),
            Err(ValidationError::DuplicatePoolName(expected))
        );
    }

    /// Property: VNET validation passes iff none or all pools are custom
    #[test]
    fn prop_vnet_all_or_nothing(mask in prop::collection::vec(any::<bool>(), 1..8)) {
        let pools: Vec<AgentPoolProfile> = mask
            .iter()
            .enumerate()
            .map(|(i, custom)| {
                let p = pool(&format!("pool{i}"));
                if *custom {
                    p.with_vnet_subnet_id(subnet_id("sub", "rg", "vnet", &format!("s{i}")))
                } else {
                    p
                }
            })
            .collect();

        let custom = mask.iter().filter(|c| **c).count();
        let result = validate_vnet(&pools, &AzureSubnetIdDecomposer);
        if custom == 0 || custom == mask.len() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(ValidationError::MixedVnetConfiguration));
        }
    }
}
