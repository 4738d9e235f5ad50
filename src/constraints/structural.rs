// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hand-written structural constraints for cluster specifications

use crate::config::ValidationLimits;
use crate::domain::{AgentPoolProfile, ClusterProperties};

use super::{ConstraintViolation, ConstraintViolations, FieldConstraintEngine, ViolationValue};

const ROOT: &str = "Properties";

/// Field constraint engine walking the tree in declaration order
///
/// Stateless apart from the limits it was built with, so one instance can
/// serve any number of validation calls.
#[derive(Debug, Clone, Default)]
pub struct StructuralConstraints {
    limits: ValidationLimits,
}

impl StructuralConstraints {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    fn check_pool(&self, index: usize, pool: &AgentPoolProfile, out: &mut Vec<ConstraintViolation>) {
        let ns = |field: &str| format!("{ROOT}.AgentPoolProfiles[{index}].{field}");

        required_str(ns("Name"), &pool.name, out);

        // zero is both "unset" and below the minimum
        if pool.count == 0 {
            out.push(ConstraintViolation::new(ns("Count"), "required", ViolationValue::Int(0)));
        } else {
            range(ns("Count"), pool.count, self.limits.min_agent_count, self.limits.max_agent_count, out);
        }

        required_str(ns("VMSize"), &pool.vm_size, out);

        if let Some(size) = pool.os_disk_size_gb {
            range(ns("OSDiskSizeGB"), size, self.limits.min_disk_size_gb, self.limits.max_disk_size_gb, out);
        }

        if !pool.storage_profile.is_empty() && pool.storage_profile != self.limits.managed_disks {
            out.push(ConstraintViolation::new(
                ns("StorageProfile"),
                "eq",
                ViolationValue::Str(pool.storage_profile.clone()),
            ));
        }
    }
}

impl FieldConstraintEngine for StructuralConstraints {
    fn validate_struct(&self, properties: &ClusterProperties) -> Result<(), ConstraintViolations> {
        let mut out = Vec::new();

        required_str(format!("{ROOT}.DNSPrefix"), &properties.dns_prefix, &mut out);

        if properties.agent_pool_profiles.is_empty() {
            out.push(ConstraintViolation::new(
                format!("{ROOT}.AgentPoolProfiles"),
                "required",
                ViolationValue::Null,
            ));
        }
        for (index, pool) in properties.agent_pool_profiles.iter().enumerate() {
            self.check_pool(index, pool, &mut out);
        }

        if let Some(linux) = &properties.linux_profile {
            required_str(format!("{ROOT}.LinuxProfile.AdminUsername"), &linux.admin_username, &mut out);
        }

        if let Some(windows) = &properties.windows_profile {
            required_str(format!("{ROOT}.WindowsProfile.AdminUsername"), &windows.admin_username, &mut out);
            required_str(format!("{ROOT}.WindowsProfile.AdminPassword"), &windows.admin_password, &mut out);
        }

        match &properties.service_principal_profile {
            Some(sp) => {
                required_str(format!("{ROOT}.ServicePrincipalProfile.ClientID"), &sp.client_id, &mut out);
                required_str(format!("{ROOT}.ServicePrincipalProfile.Secret"), &sp.secret, &mut out);
            }
            None => out.push(ConstraintViolation::new(
                format!("{ROOT}.ServicePrincipalProfile"),
                "required",
                ViolationValue::Null,
            )),
        }

        match ConstraintViolations::from_vec(out) {
            Some(violations) => Err(violations),
            None => Ok(()),
        }
    }
}

fn required_str(namespace: String, value: &str, out: &mut Vec<ConstraintViolation>) {
    if value.is_empty() {
        out.push(ConstraintViolation::new(namespace, "required", ViolationValue::Str(String::new())));
    }
}

fn range(namespace: String, value: i64, min: i64, max: i64, out: &mut Vec<ConstraintViolation>) {
    if value < min {
        out.push(ConstraintViolation::new(namespace, "min", ViolationValue::Int(value)));
    } else if value > max {
        out.push(ConstraintViolation::new(namespace, "max", ViolationValue::Int(value)));
    }
}
