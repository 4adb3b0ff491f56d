// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Inventory of CIDR blocks already in use in a cloud account.
//!
//! The allocator only needs a flattened, possibly-imperfect list of CIDR
//! strings; this crate defines the trait providing that list and an
//! aggregation over the two places blocks live in practice: virtual
//! network ranges and cluster/service subnets.

#![deny(clippy::all, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use thiserror::Error;

/// A failed request against the backing API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("api request failed: {0}")]
pub struct ApiError(pub String);

/// The errors produced when collecting the used-block list, tagged with
/// the inventory category that failed.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to list virtual network ranges")]
    VirtualNetworks(#[source] ApiError),
    #[error("failed to list cluster subnets")]
    Clusters(#[source] ApiError),
}

/// Provider of the CIDR blocks currently in use.
///
/// Entries are raw strings straight from the backing inventory; callers
/// must expect (and tolerate) malformed ones. No ordering or uniqueness
/// is guaranteed.
pub trait BlockInventory {
    /// Fetch all network ranges currently in use.
    ///
    /// # Errors
    /// Fails if a backing inventory category cannot be queried.
    fn list_used_blocks(&self) -> Result<Vec<String>, InventoryError>;
}

pub mod cloud;
#[cfg(any(test, feature = "testing"))]
pub mod fixtures;
