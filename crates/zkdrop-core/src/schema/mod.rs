//! Serialized schema/data contracts.

/// Airdrop configuration schema types.
pub mod config;
/// Off-chain registry snapshot schema types.
pub mod registry;
/// Persisted contract state schema types.
pub mod state;
/// Signed mint and claim reward voucher schema types.
pub mod voucher;
/// Membership and nullifier witness schema types.
pub mod witness;
