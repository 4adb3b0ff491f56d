// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! IPv4 block arithmetic for subnet allocation.
//!
//! This crate holds the pure leaves of the allocator: subnet sizing,
//! aligned candidate stepping within a base network, and the overlap test
//! between two blocks. Blocks are [`ipnet::Ipv4Net`] values normalized to
//! their network address.

#![deny(clippy::all, clippy::pedantic)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("prefix length {0} is invalid for IPv4")]
    InvalidLength(u8),
}

pub mod block;
#[cfg(test)]
mod block_test;

pub use block::{
    Candidates, MAX_LEN_IPV4, block_size, candidates, overlaps, overlaps_any, parse_used_block,
};
