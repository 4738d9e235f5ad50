// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Specification Domain
//!
//! The configuration tree and the pure validation functions layered on it.
//!
//! # Validators
//!
//! - [`validate_pool_name`] - pool naming policy
//! - [`validate_unique_pool_names`] - distinct names across pools
//! - [`validate_dns_prefix`] - cluster DNS prefix syntax
//! - [`validate_vnet`] - all-or-nothing custom VNET adoption
//!
//! All functions are pure: no I/O, no mutation of the tree.

pub mod dns_prefix;
pub mod pool_name;
pub mod properties;
pub mod subnet_id;
pub mod vnet;

pub use dns_prefix::validate_dns_prefix;
pub use pool_name::{validate_pool_name, validate_unique_pool_names};
pub use properties::{
    AgentPoolProfile, ClusterProperties, LinuxProfile, PublicKey, ServicePrincipalProfile,
    SshConfiguration, WindowsProfile,
};
pub use subnet_id::{AzureSubnetIdDecomposer, DecomposedNetworkId, SubnetIdDecomposer};
pub use vnet::validate_vnet;
