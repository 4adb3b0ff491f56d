// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The first-fit probe over candidate subnets.

use crate::{AllocError, MAX_PREFIX_LEN, MIN_PREFIX_LEN, PROBE_BUDGET};
use cidr::{candidates, overlaps_any, parse_used_block};
use inventory::BlockInventory;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;
use tracing::debug;

/// Return a free subnet of the requested size within a base network.
///
/// `base_network` is a dotted-decimal IPv4 address without a prefix
/// (e.g. `"10.0.0.0"`); `prefix_len` is the desired subnet mask length.
/// Candidates are probed in subnet-sized steps starting at the base
/// address, and the first one that overlaps nothing in the inventory
/// snapshot wins. Given the same snapshot the result is deterministic.
///
/// Malformed inventory entries are skipped rather than failing the whole
/// allocation; one bad record must not block everything.
///
/// # Errors
/// - [`AllocError::PrefixLenOutOfRange`] unless `8 <= prefix_len <= 30`.
/// - [`AllocError::InvalidBaseNetwork`] if the base is not an IPv4 address.
/// - [`AllocError::Inventory`] if the used-block fetch fails.
/// - [`AllocError::Exhausted`] if every probed candidate collides.
pub fn allocate_block(
    base_network: &str,
    prefix_len: u8,
    inventory: &impl BlockInventory,
) -> Result<Ipv4Net, AllocError> {
    if !(MIN_PREFIX_LEN..=MAX_PREFIX_LEN).contains(&prefix_len) {
        return Err(AllocError::PrefixLenOutOfRange(prefix_len));
    }
    // Ipv4Addr::from_str rejects IPv6 along with everything else malformed.
    let base: Ipv4Addr = base_network
        .parse()
        .map_err(|_| AllocError::InvalidBaseNetwork(base_network.to_string()))?;

    let used = inventory.list_used_blocks()?;
    let existing: Vec<Ipv4Net> = used
        .iter()
        .filter_map(|entry| {
            let parsed = parse_used_block(entry);
            if parsed.is_none() {
                debug!("skipping unparseable used block {entry:?}");
            }
            parsed
        })
        .collect();

    // prefix_len was range-checked above; candidates() cannot fail on it
    let probe = candidates(base, prefix_len)
        .map_err(|_| AllocError::PrefixLenOutOfRange(prefix_len))?;
    for candidate in probe.take(PROBE_BUDGET) {
        if !overlaps_any(&candidate, &existing) {
            debug!(
                "allocated {candidate} against {} existing blocks",
                existing.len()
            );
            return Ok(candidate);
        }
    }
    Err(AllocError::Exhausted { base, prefix_len })
}
