//! Shared fixture: the 15-node test graph with one 10-step path `x`.
#![allow(dead_code)]

use spodgi::{MemoryGraph, StoreConfig, VgStore};

pub const BASE: &str = "http://example.org/vg/";

pub const TINY_GFA: &str = "\
H\tVN:Z:1.0
S\t1\tCAAATAAG
S\t2\tA
S\t3\tG
S\t4\tT
S\t5\tC
S\t6\tTTG
S\t7\tA
S\t8\tG
S\t9\tAAATTTTCTGGAGTTCTAT
S\t10\tA
S\t11\tT
S\t12\tATAT
S\t13\tA
S\t14\tT
S\t15\tCCAACTCTCTG
P\tx\t1+,3+,5+,6+,8+,9+,11+,12+,14+,15+\t*
L\t1\t+\t2\t+\t0M
L\t1\t+\t3\t+\t0M
L\t2\t+\t4\t+\t0M
L\t2\t+\t5\t+\t0M
L\t3\t+\t4\t+\t0M
L\t3\t+\t5\t+\t0M
L\t4\t+\t6\t+\t0M
L\t5\t+\t6\t+\t0M
L\t6\t+\t7\t+\t0M
L\t6\t+\t8\t+\t0M
L\t7\t+\t9\t+\t0M
L\t8\t+\t9\t+\t0M
L\t9\t+\t10\t+\t0M
L\t9\t+\t11\t+\t0M
L\t10\t+\t12\t+\t0M
L\t11\t+\t12\t+\t0M
L\t12\t+\t13\t+\t0M
L\t12\t+\t14\t+\t0M
L\t13\t+\t15\t+\t0M
L\t14\t+\t15\t+\t0M
";

/// Begin positions of the ten steps of `x`; the path ends at 51.
pub const X_POSITIONS: [u64; 10] = [1, 9, 10, 11, 14, 15, 34, 35, 39, 40];

pub fn tiny_graph() -> MemoryGraph {
    MemoryGraph::from_gfa(TINY_GFA.as_bytes()).unwrap()
}

pub fn tiny_store() -> VgStore<MemoryGraph> {
    VgStore::open(tiny_graph(), StoreConfig::default()).unwrap()
}

pub fn node(id: u64) -> String {
    format!("{BASE}node/{id}")
}

pub fn step(rank: u64) -> String {
    format!("{BASE}path/x/step/{rank}")
}
