//! Error types for the poly wrapper contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not the {role}")]
    Unauthorized { role: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u64 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Native funds not accepted")]
    FundsNotAccepted,

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Wrapper is paused")]
    Paused,

    // ========================================================================
    // External Call Errors
    // ========================================================================

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },
}

impl ContractError {
    pub fn unauthorized(role: &str) -> Self {
        ContractError::Unauthorized {
            role: role.to_string(),
        }
    }
}
