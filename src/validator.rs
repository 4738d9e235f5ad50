// Copyright (c) 2025 - Cowboy AI, Inc.
//! Profile Validator
//!
//! Runs every check over one [`ClusterProperties`] tree in a fixed order and
//! returns the first failure unchanged:
//!
//! 1. Field constraints (classified)
//! 2. DNS prefix
//! 3. Unique pool names
//! 4. Pool name policy, pool by pool
//! 5. Linux profile, when present
//! 6. VNET consistency

use tracing::{debug, instrument};

use crate::config::ValidationLimits;
use crate::constraints::{classify, FieldConstraintEngine, StructuralConstraints};
use crate::domain::{
    validate_dns_prefix, validate_unique_pool_names, validate_vnet, AzureSubnetIdDecomposer,
    ClusterProperties, SubnetIdDecomposer,
};
use crate::errors::ValidationResult;

/// Validator for complete cluster specifications
///
/// Holds no per-call state; build one at startup and share it freely.
#[derive(Debug, Clone)]
pub struct ProfileValidator<E = StructuralConstraints, D = AzureSubnetIdDecomposer> {
    limits: ValidationLimits,
    engine: E,
    decomposer: D,
}

impl ProfileValidator {
    /// Create a validator with the built-in collaborators
    pub fn new(limits: ValidationLimits) -> Self {
        Self {
            engine: StructuralConstraints::new(limits.clone()),
            decomposer: AzureSubnetIdDecomposer,
            limits,
        }
    }
}

impl Default for ProfileValidator {
    fn default() -> Self {
        Self::new(ValidationLimits::default())
    }
}

impl<E, D> ProfileValidator<E, D>
where
    E: FieldConstraintEngine,
    D: SubnetIdDecomposer,
{
    /// Create a validator with a custom constraint engine and decomposer
    pub fn with_collaborators(limits: ValidationLimits, engine: E, decomposer: D) -> Self {
        Self {
            limits,
            engine,
            decomposer,
        }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validate a cluster specification, stopping at the first failure
    #[instrument(level = "debug", skip_all, fields(dns_prefix = %properties.dns_prefix, pools = properties.agent_pool_profiles.len()))]
    pub fn validate(&self, properties: &ClusterProperties) -> ValidationResult {
        if let Err(violations) = self.engine.validate_struct(properties) {
            debug!(count = violations.len(), "field constraints failed");
            return Err(classify(&violations, &self.limits));
        }

        debug!("checking DNS prefix");
        validate_dns_prefix(&properties.dns_prefix)?;

        debug!("checking pool name uniqueness");
        validate_unique_pool_names(&properties.agent_pool_profiles)?;

        for profile in &properties.agent_pool_profiles {
            profile.validate()?;
        }

        // absent when the profile is generated by the service
        if let Some(linux) = &properties.linux_profile {
            debug!("checking linux profile");
            linux.validate()?;
        }

        debug!("checking VNET consistency");
        validate_vnet(&properties.agent_pool_profiles, &self.decomposer)
    }
}

impl ClusterProperties {
    /// Validate with the default limits and collaborators
    pub fn validate(&self) -> ValidationResult {
        ProfileValidator::default().validate(self)
    }
}
