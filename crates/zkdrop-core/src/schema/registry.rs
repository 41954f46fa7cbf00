use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::base::{FieldRepr, IdentityKey};

/// Off-chain registry contents from which the full trees are rebuilt.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct RegistrySnapshot {
    /// Registered identities; the vector index is the membership leaf position.
    pub identities: Vec<IdentityKey>,
    /// Claim keys already flagged in the nullifier map.
    #[serde(default)]
    pub claimed: Vec<FieldRepr>,
}
