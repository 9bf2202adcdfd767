// Copyright 2023 The RocketMQ Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tools and Admin operation specific errors
//!
//! This module contains error types specific to RocketMQ admin tools and CLI operations.

use thiserror::Error;

/// Tools-specific errors for admin operations
#[derive(Debug, Error)]
pub enum ToolsError {
    // ============================================================================
    // Cluster Management Errors
    // ============================================================================
    /// Cluster not found
    #[error("Cluster '{cluster}' not found")]
    ClusterNotFound { cluster: String },

    /// Invalid cluster information returned by the name server
    #[error("Invalid cluster configuration: {reason}")]
    ClusterInvalid { reason: String },

    // ============================================================================
    // NameServer Management Errors
    // ============================================================================
    /// NameServer unreachable
    #[error("NameServer '{addr}' is unreachable")]
    NameServerUnreachable { addr: String },

    /// NameServer configuration invalid
    #[error("Invalid NameServer configuration: {reason}")]
    NameServerConfigInvalid { reason: String },

    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// Input validation failed
    #[error("Validation failed for '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    // ============================================================================
    // Operation Errors
    // ============================================================================
    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ToolsError {
    /// Create a cluster not found error
    #[inline]
    pub fn cluster_not_found(cluster: impl Into<String>) -> Self {
        Self::ClusterNotFound {
            cluster: cluster.into(),
        }
    }

    #[inline]
    pub fn cluster_invalid(reason: impl Into<String>) -> Self {
        Self::ClusterInvalid { reason: reason.into() }
    }

    /// Create a nameserver unreachable error
    #[inline]
    pub fn nameserver_unreachable(addr: impl Into<String>) -> Self {
        Self::NameServerUnreachable { addr: addr.into() }
    }

    /// Create a nameserver config invalid error
    #[inline]
    pub fn nameserver_config_invalid(reason: impl Into<String>) -> Self {
        Self::NameServerConfigInvalid { reason: reason.into() }
    }

    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_management_errors() {
        let err = ToolsError::cluster_not_found("TestCluster");
        assert_eq!(err.to_string(), "Cluster 'TestCluster' not found");

        let err = ToolsError::cluster_invalid("missing brokerAddrTable");
        assert_eq!(err.to_string(), "Invalid cluster configuration: missing brokerAddrTable");
    }

    #[test]
    fn test_nameserver_management_errors() {
        let err = ToolsError::nameserver_unreachable("127.0.0.1:9876");
        assert_eq!(err.to_string(), "NameServer '127.0.0.1:9876' is unreachable");

        let err = ToolsError::nameserver_config_invalid("missing nameserver");
        assert_eq!(err.to_string(), "Invalid NameServer configuration: missing nameserver");
    }

    #[test]
    fn test_validation_errors() {
        let err = ToolsError::validation_error("brokerAddr", "must not be empty");
        assert_eq!(err.to_string(), "Validation failed for 'brokerAddr': must not be empty");
    }

    #[test]
    fn test_operation_errors() {
        let err = ToolsError::internal("unexpected error");
        assert!(err.to_string().contains("Internal error: unexpected error"));
    }
}
