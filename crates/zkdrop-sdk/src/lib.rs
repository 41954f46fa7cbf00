//! File-based workflows around the ZKDROP contract and its off-chain registry.

pub mod commands;
pub mod common;
pub mod registry;
pub mod signing_key;
