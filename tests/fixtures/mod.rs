// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-cluster-validation
//!
//! Deterministic cluster specifications shared by the integration tests.

#![allow(dead_code)]

use cim_cluster_validation::{
    AgentPoolProfile, ClusterProperties, LinuxProfile, PublicKey, ServicePrincipalProfile,
    SshConfiguration,
};

pub const DNS_PREFIX: &str = "mycluster";
pub const VM_SIZE: &str = "Standard_D2_v2";
pub const SSH_KEY: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQC fixture@example";

/// Build a subnet resource ID from its components
pub fn subnet_id(subscription: &str, resource_group: &str, vnet: &str, subnet: &str) -> String {
    format!(
        "/subscriptions/{subscription}/resourceGroups/{resource_group}/providers/Microsoft.Network/virtualNetworks/{vnet}/subnets/{subnet}"
    )
}

pub fn pool(name: &str) -> AgentPoolProfile {
    AgentPoolProfile::new(name, VM_SIZE, 3)
}

pub fn linux_profile() -> LinuxProfile {
    LinuxProfile {
        admin_username: "azureuser".to_string(),
        ssh: SshConfiguration {
            public_keys: vec![PublicKey {
                key_data: SSH_KEY.to_string(),
            }],
        },
    }
}

/// A specification that passes every check
pub fn cluster(pools: Vec<AgentPoolProfile>) -> ClusterProperties {
    ClusterProperties {
        dns_prefix: DNS_PREFIX.to_string(),
        agent_pool_profiles: pools,
        linux_profile: Some(linux_profile()),
        service_principal_profile: Some(ServicePrincipalProfile {
            client_id: "00000000-0000-0000-0000-000000000001".to_string(),
            secret: "fixture-secret".to_string(),
        }),
        ..Default::default()
    }
}
