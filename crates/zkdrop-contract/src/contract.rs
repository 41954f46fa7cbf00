//! Contract methods and their admin authorization checks.

use zkdrop_core::schema::config::AirdropConfiguration;
use zkdrop_core::schema::voucher::SIGNATURE_SIZE;

use crate::auth::{AuthMessage, verify_message};
use crate::error::ContractError;

/// Contract methods bound to a deployment's configuration.
///
/// Methods never touch the state directly: they read and stage writes through
/// the [`Transaction`](crate::Transaction) they are given.
#[derive(Debug, Clone, Copy)]
pub struct AirdropContract<'c> {
    config: &'c AirdropConfiguration,
}

impl<'c> AirdropContract<'c> {
    /// Bind the contract methods to `config`.
    #[must_use]
    pub const fn new(config: &'c AirdropConfiguration) -> Self {
        Self { config }
    }

    /// Deployment configuration.
    #[must_use]
    pub const fn config(&self) -> &'c AirdropConfiguration {
        self.config
    }

    pub(crate) fn authorize(
        &self,
        message: &AuthMessage,
        signature: &[u8; SIGNATURE_SIZE],
    ) -> Result<(), ContractError> {
        verify_message(
            &self.config.admin_key,
            &self.config.contract_id,
            message,
            signature,
        )
    }

    /// Check an administrative update. Ungated deployments accept any caller.
    pub(crate) fn authorize_update(
        &self,
        message: &AuthMessage,
        signature: Option<&[u8; SIGNATURE_SIZE]>,
    ) -> Result<(), ContractError> {
        if !self.config.admin_gated_updates {
            return Ok(());
        }
        let signature = signature.ok_or(ContractError::SignatureInvalid)?;
        self.authorize(message, signature)
    }
}
