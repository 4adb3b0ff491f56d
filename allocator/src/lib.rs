// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! First-fit allocation of non-overlapping IPv4 subnets.
//!
//! Given a base network, a prefix length and the inventory of blocks
//! already in use, [`allocate_block`] returns the lowest-addressed subnet
//! of the requested size that collides with nothing in the inventory.
//! The allocator holds no state and reserves nothing: callers that need
//! the block must create the backing resource promptly and let the
//! provider reject duplicates, since two concurrent callers can observe
//! the same free block.

#![deny(clippy::all, clippy::pedantic)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use inventory::InventoryError;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Shortest prefix length accepted (widest subnet, /8).
pub const MIN_PREFIX_LEN: u8 = 8;
/// Longest prefix length accepted; anything smaller than a /30 is
/// impractical for cloud subnets.
pub const MAX_PREFIX_LEN: u8 = 30;
/// Number of candidate subnets probed before giving up. A /16 base carved
/// into /24s is covered exactly; smaller subnets may leave free space
/// beyond the window.
pub const PROBE_BUDGET: usize = 256;

#[derive(Debug, Error)]
pub enum AllocError {
    #[error("invalid base network: {0}")]
    InvalidBaseNetwork(String),
    #[error("prefix length must be between 8 and 30, got {0}")]
    PrefixLenOutOfRange(u8),
    #[error("failed to get existing CIDR blocks")]
    Inventory(#[from] InventoryError),
    #[error("no available /{prefix_len} block found within base network {base}")]
    Exhausted { base: Ipv4Addr, prefix_len: u8 },
}

pub mod first_fit;

pub use first_fit::allocate_block;
