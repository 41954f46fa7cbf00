//! Off-chain registry: the full membership tree and nullifier map.
//!
//! The contract only stores roots. The registry operator keeps the full
//! structures, hands out witnesses, and records every accepted claim so the local
//! nullifier map follows the on-chain root.

use std::path::Path;

use tracing::info;
use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::registry::RegistrySnapshot;
use zkdrop_core::schema::witness::PreparedClaim;
use zkdrop_tree::{Account, ClaimFlag, FieldNode, MembershipTree, NullifierMap, TreeError};

use crate::common::{read_json, write_json};

/// Full off-chain trees.
#[derive(Debug, Clone)]
pub struct Registry {
    identities: Vec<IdentityKey>,
    tree: MembershipTree,
    nullifiers: NullifierMap,
}

impl Registry {
    /// Register `identities`, in order, with nothing claimed.
    ///
    /// # Errors
    /// Returns an error on duplicates or more identities than the tree holds.
    pub fn build(identities: Vec<IdentityKey>) -> Result<Self, TreeError> {
        let tree = MembershipTree::from_identities(&identities)?;
        Ok(Self {
            identities,
            tree,
            nullifiers: NullifierMap::new(),
        })
    }

    /// Rebuild from a snapshot.
    ///
    /// # Errors
    /// Returns an error if the snapshot holds duplicate identities or malformed
    /// claim keys.
    pub fn from_snapshot(snapshot: &RegistrySnapshot) -> Result<Self, TreeError> {
        let mut registry = Self::build(snapshot.identities.clone())?;
        registry.nullifiers = NullifierMap::from_claimed_keys(&snapshot.claimed)?;
        Ok(registry)
    }

    /// Serializable form.
    #[must_use]
    pub fn to_snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            identities: self.identities.clone(),
            claimed: self.nullifiers.claimed_keys(),
        }
    }

    /// Registered identities in leaf order.
    #[must_use]
    pub fn identities(&self) -> &[IdentityKey] {
        &self.identities
    }

    /// Root to commit on-chain.
    #[must_use]
    pub fn membership_root(&self) -> FieldNode {
        self.tree.root()
    }

    /// Root of the local nullifier map.
    #[must_use]
    pub fn nullifier_root(&self) -> FieldNode {
        self.nullifiers.root()
    }

    /// Local view of `identity`'s claim flag.
    #[must_use]
    pub fn claim_flag(&self, identity: IdentityKey) -> ClaimFlag {
        self.nullifiers.get(Account::new(identity).claim_key())
    }

    /// Witnesses `identity` needs to claim against the current roots.
    ///
    /// # Errors
    /// Returns an error if `identity` is not registered.
    pub fn prepare_claim(&self, identity: IdentityKey) -> Result<PreparedClaim, TreeError> {
        let account = Account::new(identity);
        let membership = self.tree.witness_for(&identity)?;
        let nullifier = self.nullifiers.witness(account.claim_key())?;
        Ok(PreparedClaim {
            identity,
            membership_root: self.membership_root().to_repr(),
            membership: membership.to_data(),
            nullifier_root: self.nullifier_root().to_repr(),
            nullifier: nullifier.to_data(),
        })
    }

    /// Record an accepted claim.
    pub fn record_claim(&mut self, identity: IdentityKey) {
        self.nullifiers
            .set(Account::new(identity).claim_key(), ClaimFlag::Claimed);
    }

    /// Load a registry file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not describe a valid
    /// registry.
    pub async fn load(path: &Path) -> eyre::Result<Self> {
        let snapshot: RegistrySnapshot = read_json(path, "registry").await?;
        let registry = Self::from_snapshot(&snapshot)?;
        info!(
            file = ?path,
            identities = registry.identities.len(),
            claimed = snapshot.claimed.len(),
            "Registry loaded"
        );
        Ok(registry)
    }

    /// Save to a registry file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, path: &Path) -> eyre::Result<()> {
        write_json(path, &self.to_snapshot()).await?;
        info!(file = ?path, "Registry saved");
        Ok(())
    }
}
