// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use crate::block::{MAX_LEN_IPV4, block_size, candidates, overlaps, overlaps_any, parse_used_block};
use crate::BlockError;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

fn net(s: &str) -> Ipv4Net {
    parse_used_block(s).unwrap()
}

fn nets(cidrs: &[&str]) -> Vec<Ipv4Net> {
    cidrs.iter().map(|s| net(s)).collect()
}

#[test]
fn test_block_size() {
    assert_eq!(block_size(32), Some(1));
    assert_eq!(block_size(30), Some(4));
    assert_eq!(block_size(24), Some(256));
    assert_eq!(block_size(16), Some(65536));
    assert_eq!(block_size(8), Some(1 << 24));
    assert_eq!(block_size(0), Some(1 << 32));
    assert_eq!(block_size(33), None);
}

#[test]
fn test_overlaps() {
    let cases = [
        ("10.0.0.0/24", "10.0.1.0/24", false),
        ("10.0.1.0/24", "10.0.1.0/24", true),
        ("10.0.0.0/16", "10.0.1.0/24", true),
        ("10.0.1.0/28", "10.0.1.0/24", true),
    ];
    for (a, b, expected) in cases {
        assert_eq!(overlaps(&net(a), &net(b)), expected, "{a} vs {b}");
        assert_eq!(overlaps(&net(b), &net(a)), expected, "{b} vs {a}");
    }
}

#[test]
fn test_overlaps_any() {
    let existing = nets(&["10.0.1.0/24", "10.0.2.0/24"]);
    assert!(!overlaps_any(&net("10.0.0.0/24"), &existing));
    assert!(overlaps_any(&net("10.0.1.0/24"), &existing));
    // Candidate covering an existing block
    assert!(overlaps_any(&net("10.0.0.0/16"), &existing));
    // Candidate covered by an existing block
    assert!(overlaps_any(&net("10.0.1.0/28"), &existing));
    assert!(!overlaps_any(&net("10.0.0.0/24"), &[]));
}

#[test]
fn test_candidates_step() {
    let base: Ipv4Addr = "10.0.0.0".parse().unwrap();
    let first: Vec<String> = candidates(base, 24)
        .unwrap()
        .take(3)
        .map(|c| c.to_string())
        .collect();
    assert_eq!(first, ["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24"]);

    let first: Vec<String> = candidates(base, 16)
        .unwrap()
        .take(3)
        .map(|c| c.to_string())
        .collect();
    assert_eq!(first, ["10.0.0.0/16", "10.1.0.0/16", "10.2.0.0/16"]);
}

#[test]
fn test_candidates_start_at_base() {
    // The base address is used as-is, without alignment to the step size.
    let base: Ipv4Addr = "10.0.0.128".parse().unwrap();
    let first = candidates(base, 24).unwrap().next().unwrap();
    assert_eq!(first.to_string(), "10.0.0.128/24");
}

#[test]
fn test_candidates_stop_at_address_space_end() {
    let base: Ipv4Addr = "255.255.254.0".parse().unwrap();
    let tail: Vec<String> = candidates(base, 24)
        .unwrap()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(tail, ["255.255.254.0/24", "255.255.255.0/24"]);

    let base: Ipv4Addr = "255.255.255.255".parse().unwrap();
    let tail: Vec<String> = candidates(base, 32)
        .unwrap()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(tail, ["255.255.255.255/32"]);
}

#[test]
fn test_candidates_invalid_length() {
    let base: Ipv4Addr = "10.0.0.0".parse().unwrap();
    assert_eq!(
        candidates(base, 33).unwrap_err(),
        BlockError::InvalidLength(33)
    );
}

#[test]
fn test_parse_used_block() {
    assert_eq!(net("10.0.0.0/24").to_string(), "10.0.0.0/24");
    // Host bits are masked away
    assert_eq!(parse_used_block("10.0.1.5/24").unwrap().to_string(), "10.0.1.0/24");
    assert_eq!(parse_used_block("not-a-cidr"), None);
    assert_eq!(parse_used_block("10.0.0.0"), None);
    assert_eq!(parse_used_block("10.300.0.0/24"), None);
    assert_eq!(parse_used_block("2001:db8::/64"), None);
    assert_eq!(parse_used_block(""), None);
}

fn overlap_contract((a_bits, a_len, b_bits, b_len): &(u32, u8, u32, u8)) {
    let a_len = a_len % (MAX_LEN_IPV4 + 1);
    let b_len = b_len % (MAX_LEN_IPV4 + 1);
    let a = Ipv4Net::new(Ipv4Addr::from(*a_bits), a_len).unwrap().trunc();
    let b = Ipv4Net::new(Ipv4Addr::from(*b_bits), b_len).unwrap().trunc();

    // Reflexive and symmetric
    assert!(overlaps(&a, &a));
    assert_eq!(overlaps(&a, &b), overlaps(&b, &a));

    // For aligned blocks the heuristic agrees with interval intersection
    let a_range = u32::from(a.network())..=u32::from(a.broadcast());
    let b_range = u32::from(b.network())..=u32::from(b.broadcast());
    let intersects = a_range.start() <= b_range.end() && b_range.start() <= a_range.end();
    assert_eq!(overlaps(&a, &b), intersects);
}

#[test]
fn overlap_heuristic_contract() {
    bolero::check!()
        .with_type::<(u32, u8, u32, u8)>()
        .for_each(overlap_contract);
}

fn candidate_contract((base_bits, len): &(u32, u8)) {
    let len = len % (MAX_LEN_IPV4 + 1);
    let blocks: Vec<Ipv4Net> = candidates(Ipv4Addr::from(*base_bits), len)
        .unwrap()
        .take(8)
        .collect();
    assert!(!blocks.is_empty());
    // Successive candidates from one probe never overlap each other
    for (i, a) in blocks.iter().enumerate() {
        for b in &blocks[i + 1..] {
            assert!(!overlaps(a, b), "{a} overlaps {b}");
        }
    }
}

#[test]
fn candidate_disjointness_contract() {
    bolero::check!()
        .with_type::<(u32, u8)>()
        .for_each(candidate_contract);
}
