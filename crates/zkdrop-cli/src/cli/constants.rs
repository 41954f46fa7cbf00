//! Shared constants for CLI.

// -------------------------
// Environment variables
// -------------------------

// Contract
pub const ZKDROP_CONFIG_FILE: &str = "ZKDROP_CONFIG_FILE";
pub const ZKDROP_STATE_FILE: &str = "ZKDROP_STATE_FILE";
pub const ZKDROP_ADMIN_IDENTITY: &str = "ZKDROP_ADMIN_IDENTITY";
pub const ZKDROP_ADMIN_KEY_FILE: &str = "ZKDROP_ADMIN_KEY_FILE";
pub const ZKDROP_TOKEN_SYMBOL: &str = "ZKDROP_TOKEN_SYMBOL";
pub const ZKDROP_CONTRACT_ID: &str = "ZKDROP_CONTRACT_ID";
pub const ZKDROP_CLAIM_REWARD: &str = "ZKDROP_CLAIM_REWARD";
pub const ZKDROP_GATED_UPDATES: &str = "ZKDROP_GATED_UPDATES";
pub const ZKDROP_COMMITMENT_ROOT: &str = "ZKDROP_COMMITMENT_ROOT";
pub const ZKDROP_IDENTIFIER: &str = "ZKDROP_IDENTIFIER";

// Registry
pub const ZKDROP_REGISTRY_FILE: &str = "ZKDROP_REGISTRY_FILE";
pub const ZKDROP_IDENTITIES_FILE: &str = "ZKDROP_IDENTITIES_FILE";

// Key
pub const ZKDROP_KEY_OUT: &str = "ZKDROP_KEY_OUT";
pub const ZKDROP_IDENTITY_OUT: &str = "ZKDROP_IDENTITY_OUT";

// Claim
pub const ZKDROP_IDENTITY: &str = "ZKDROP_IDENTITY";
pub const ZKDROP_CLAIM_OUT: &str = "ZKDROP_CLAIM_OUT";
pub const ZKDROP_CLAIM_IN: &str = "ZKDROP_CLAIM_IN";
pub const ZKDROP_VOUCHER_FILE: &str = "ZKDROP_VOUCHER_FILE";
pub const ZKDROP_VOUCHER_CLAIM_REWARD: &str = "ZKDROP_VOUCHER_CLAIM_REWARD";

// Token
pub const ZKDROP_RECIPIENT: &str = "ZKDROP_RECIPIENT";
pub const ZKDROP_SENDER: &str = "ZKDROP_SENDER";
pub const ZKDROP_AMOUNT: &str = "ZKDROP_AMOUNT";
pub const ZKDROP_ACCOUNT: &str = "ZKDROP_ACCOUNT";

// -------------------------
// Default values
// -------------------------

// File paths
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_STATE_FILE: &str = "state.json";
pub const DEFAULT_REGISTRY_FILE: &str = "registry.json";
pub const DEFAULT_IDENTITIES_FILE: &str = "identities.json";
pub const DEFAULT_KEY_FILE: &str = "signing.key";
pub const DEFAULT_CLAIM_FILE: &str = "claim-prepared.json";
pub const DEFAULT_VOUCHER_FILE: &str = "voucher.json";
