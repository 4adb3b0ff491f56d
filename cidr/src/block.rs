// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Block arithmetic over the 32-bit IPv4 address space.

use crate::BlockError;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Maximum IPv4 prefix length.
pub const MAX_LEN_IPV4: u8 = 32;

/// Number of addresses covered by a block of the given prefix length, or
/// `None` if the length is not a valid IPv4 prefix length.
#[must_use]
pub fn block_size(prefix_len: u8) -> Option<u64> {
    if prefix_len > MAX_LEN_IPV4 {
        return None;
    }
    Some(1u64 << (32 - u32::from(prefix_len)))
}

/// Iterator over same-sized candidate blocks, stepping from a base address
/// in block-sized increments.
///
/// The iterator ends when the next step would run past `255.255.255.255`;
/// candidates never wrap around to the bottom of the address space.
#[derive(Debug, Clone)]
pub struct Candidates {
    next: Option<u32>,
    step: u64,
    prefix_len: u8,
}

impl Iterator for Candidates {
    type Item = Ipv4Net;

    fn next(&mut self) -> Option<Ipv4Net> {
        let base = self.next?;
        self.next = u32::try_from(u64::from(base) + self.step).ok();
        // The length was validated in candidates(); new() cannot fail here.
        Ipv4Net::new(Ipv4Addr::from(base), self.prefix_len).ok()
    }
}

/// Candidate blocks of the given prefix length starting at `base`.
///
/// The first candidate starts exactly at `base`; no alignment of the base
/// address itself is performed.
///
/// # Errors
/// Fails if `prefix_len` exceeds the IPv4 maximum of 32.
pub fn candidates(base: Ipv4Addr, prefix_len: u8) -> Result<Candidates, BlockError> {
    let step = block_size(prefix_len).ok_or(BlockError::InvalidLength(prefix_len))?;
    Ok(Candidates {
        next: Some(u32::from(base)),
        step,
        prefix_len,
    })
}

/// Tell whether two blocks overlap.
///
/// Two blocks overlap iff either one's base address falls within the other.
/// For valid CIDR blocks (power-of-two sized, base-aligned) this is an
/// exact test: any two such blocks that share an address have one
/// containing the other's base.
#[must_use]
pub fn overlaps(a: &Ipv4Net, b: &Ipv4Net) -> bool {
    a.contains(&b.network()) || b.contains(&a.network())
}

/// Tell whether `candidate` overlaps any block in `existing`.
#[must_use]
pub fn overlaps_any(candidate: &Ipv4Net, existing: &[Ipv4Net]) -> bool {
    existing.iter().any(|net| overlaps(candidate, net))
}

/// Leniently parse an inventory entry into a normalized block.
///
/// Returns `None` for anything that is not an IPv4 CIDR (including IPv6
/// entries); host bits are masked away so that `10.0.1.5/24` yields
/// `10.0.1.0/24`.
#[must_use]
pub fn parse_used_block(entry: &str) -> Option<Ipv4Net> {
    entry.parse::<Ipv4Net>().ok().map(|net| net.trunc())
}
