// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Specification Model
//!
//! The configuration tree handed to the validator after an upstream loader
//! has parsed the user template. Nothing here is mutated during validation.

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

use super::pool_name::validate_pool_name;

/// Root of a cluster specification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,

    #[serde(default)]
    pub dns_prefix: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,

    #[serde(default)]
    pub agent_pool_profiles: Vec<AgentPoolProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux_profile: Option<LinuxProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_profile: Option<WindowsProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_principal_profile: Option<ServicePrincipalProfile>,
}

/// One homogeneous group of worker nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPoolProfile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub count: i64,

    #[serde(default)]
    pub vm_size: String,

    #[serde(
        default,
        rename = "osDiskSizeGB",
        skip_serializing_if = "Option::is_none"
    )]
    pub os_disk_size_gb: Option<i64>,

    #[serde(default)]
    pub storage_profile: String,

    /// Operator-supplied subnet; empty or absent means the default network
    #[serde(
        default,
        rename = "vnetSubnetID",
        skip_serializing_if = "Option::is_none"
    )]
    pub vnet_subnet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pods: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
}

impl AgentPoolProfile {
    /// Create a pool with the given name, VM size and agent count
    pub fn new(name: impl Into<String>, vm_size: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            vm_size: vm_size.into(),
            count,
            ..Default::default()
        }
    }

    /// Attach the pool to a custom VNET subnet
    pub fn with_vnet_subnet_id(mut self, id: impl Into<String>) -> Self {
        self.vnet_subnet_id = Some(id.into());
        self
    }

    /// Whether the pool declares a custom subnet
    pub fn is_custom_vnet(&self) -> bool {
        self.vnet_subnet_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    /// Check the pool name against the naming policy
    ///
    /// Field-level constraints are covered by the structural pass over the
    /// whole [`ClusterProperties`], so only the name is checked here.
    pub fn validate(&self) -> ValidationResult {
        validate_pool_name(&self.name)
    }
}

/// Linux administrator access
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinuxProfile {
    #[serde(default)]
    pub admin_username: String,

    #[serde(default)]
    pub ssh: SshConfiguration,
}

impl LinuxProfile {
    /// The first SSH public key must carry key data
    pub fn validate(&self) -> ValidationResult {
        let first = self
            .ssh
            .public_keys
            .first()
            .ok_or(ValidationError::NoSshPublicKeys)?;
        if first.key_data.is_empty() {
            return Err(ValidationError::EmptySshKeyData);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshConfiguration {
    #[serde(default)]
    pub public_keys: Vec<PublicKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKey {
    #[serde(default)]
    pub key_data: String,
}

/// Identity used by the cluster to manage cloud resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePrincipalProfile {
    #[serde(default, rename = "clientId")]
    pub client_id: String,

    #[serde(default)]
    pub secret: String,
}

/// Windows administrator credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsProfile {
    #[serde(default)]
    pub admin_username: String,

    #[serde(default)]
    pub admin_password: String,
}
