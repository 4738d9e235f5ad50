// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster specification validation for the Composable Information Machine
//!
//! Rejects malformed or mutually inconsistent agent pool configuration
//! before it reaches a provisioning pipeline. Validation is synchronous and
//! pure; the first problem found is returned as the only diagnostic.
//!
//! ```rust
//! use cim_cluster_validation::{AgentPoolProfile, ClusterProperties, ServicePrincipalProfile};
//!
//! let properties = ClusterProperties {
//!     dns_prefix: "mycluster".into(),
//!     agent_pool_profiles: vec![AgentPoolProfile::new("pool1", "Standard_D2_v2", 3)],
//!     service_principal_profile: Some(ServicePrincipalProfile {
//!         client_id: "client".into(),
//!         secret: "secret".into(),
//!     }),
//!     ..Default::default()
//! };
//! assert!(properties.validate().is_ok());
//! ```

pub mod config;
pub mod constraints;
pub mod document;
pub mod domain;
pub mod errors;
pub mod validator;

// Re-export commonly used types
pub use config::{
    ConfigError, ValidationLimits, MANAGED_DISKS, MAX_AGENT_COUNT, MAX_DISK_SIZE_GB, MIN_AGENT_COUNT,
    MIN_DISK_SIZE_GB,
};
pub use constraints::{
    ConstraintViolation, ConstraintViolations, FieldConstraintEngine, StructuralConstraints,
    ViolationValue,
};
pub use document::{parse_document, DocumentError};
pub use domain::{
    AgentPoolProfile, AzureSubnetIdDecomposer, ClusterProperties, DecomposedNetworkId,
    LinuxProfile, PublicKey, ServicePrincipalProfile, SshConfiguration, SubnetIdDecomposer,
    WindowsProfile,
};
pub use errors::{ValidationError, ValidationResult};
pub use validator::ProfileValidator;
