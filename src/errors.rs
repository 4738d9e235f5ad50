// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for cluster specification validation

use thiserror::Error;

/// Errors that can occur while validating a cluster specification
///
/// The `Display` output of every variant is the message surfaced to the
/// operator verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required scalar field absent
    #[error("missing {0}")]
    MissingField(String),

    /// Pool count outside the configured bounds
    #[error("AgentPoolProfile count needs to be in the range [{min},{max}]")]
    CountOutOfRange { min: i64, max: i64 },

    /// OS disk size outside the configured bounds
    #[error("Invalid os disk size of {value} specified.  The range of valid values are [{min}, {max}]")]
    DiskSizeOutOfRange { value: i64, min: i64, max: i64 },

    /// Storage profile that is not the managed-disks sentinel
    #[error("Unknown storageProfile '{value}'. Must specify {expected}")]
    UnknownStorageProfile { value: String, expected: String },

    /// Constraint violation without a friendly message yet
    #[error("Namespace {namespace} is not caught, {violations}")]
    UnclassifiedViolation {
        namespace: String,
        violations: String,
    },

    /// Pool name fails the naming policy
    #[error("pool name '{0}' is invalid. A pool name must start with a lowercase letter, have max length of 12, and only have characters a-z0-9")]
    InvalidPoolName(String),

    /// Pool name used by more than one pool
    #[error("profile name '{0}' already exists, profile names must be unique across pools")]
    DuplicatePoolName(String),

    /// Some pools use a custom VNET subnet and others do not
    #[error("Multiple VNET Subnet configurations specified.  Each agent pool profile must all specify a custom VNET Subnet, or none at all")]
    MixedVnetConfiguration,

    /// Subnet identifier could not be split into its components
    #[error("Unable to parse vnetSubnetID. Please use a vnetSubnetID with format /subscriptions/SUB_ID/resourceGroups/RG_NAME/providers/Microsoft.Network/virtualNetworks/VNET_NAME/subnets/SUBNET_NAME: '{0}'")]
    MalformedSubnetId(String),

    /// DNS prefix fails the syntax policy
    #[error("DNSPrefix '{prefix}' is invalid. The DNSPrefix must contain between 3 and 45 characters and can contain only letters, numbers, and hyphens.  It must start with a letter and must end with a letter or a number. (length was {length})")]
    InvalidDnsPrefix { prefix: String, length: usize },

    /// Linux profile carries no SSH public keys
    #[error("LinuxProfile.SSH.PublicKeys must contain at least one public key")]
    NoSshPublicKeys,

    /// First SSH public key has no key data
    #[error("KeyData in LinuxProfile.SSH.PublicKeys cannot be empty string")]
    EmptySshKeyData,
}

/// Result type for validation operations
pub type ValidationResult<T = ()> = Result<T, ValidationError>;
