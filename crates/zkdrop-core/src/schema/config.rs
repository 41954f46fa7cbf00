use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::serde_as;

use crate::base::IdentityKey;

/// Token symbol used when none is configured.
pub const DEFAULT_TOKEN_SYMBOL: &str = "BLDRNR";

/// Configuration of a deployed airdrop contract.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct AirdropConfiguration {
    /// Symbol of the airdropped token.
    pub token_symbol: String,
    /// Contract identifier. Every admin signature is bound to it.
    #[serde_as(as = "Hex")]
    #[schemars(with = "String")]
    pub contract_id: [u8; 32],
    /// Admin verification key authorizing mints and claim rewards.
    pub admin_key: IdentityKey,
    /// Reward minted to an identity on a successful claim.
    /// When absent, a claim only consumes the nullifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_reward: Option<u64>,
    /// Require an admin signature for commitment and identifier updates.
    #[serde(default)]
    pub admin_gated_updates: bool,
}

impl AirdropConfiguration {
    /// Create a new airdrop configuration with ungated administrative updates.
    #[must_use]
    pub const fn new(
        token_symbol: String,
        contract_id: [u8; 32],
        admin_key: IdentityKey,
        claim_reward: Option<u64>,
    ) -> Self {
        Self {
            token_symbol,
            contract_id,
            admin_key,
            claim_reward,
            admin_gated_updates: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let json = format!(
            r#"{{"token_symbol":"BLDRNR","contract_id":"{}","admin_key":"{}"}}"#,
            "01".repeat(32),
            "02".repeat(32)
        );
        let config: AirdropConfiguration = serde_json::from_str(&json).expect("should parse");
        assert_eq!(config.claim_reward, None);
        assert!(!config.admin_gated_updates);
        assert_eq!(config.contract_id, [1_u8; 32]);
        assert_eq!(config.admin_key, IdentityKey::new([2_u8; 32]));
    }

    #[test]
    fn absent_reward_is_not_serialized() {
        let config = AirdropConfiguration::new(
            DEFAULT_TOKEN_SYMBOL.to_owned(),
            [0_u8; 32],
            IdentityKey::default(),
            None,
        );
        let json = serde_json::to_string(&config).expect("should serialize");
        assert!(!json.contains("claim_reward"));
    }
}
