//! Execute handlers for the poly wrapper contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `outgoing` - Lock and SpeedUp handlers for outgoing transfers
//! - `fees` - Fee extraction by the fee collector
//! - `config` - Fee collector and lock proxy management
//! - `admin` - Ownership transfer, pause and unpause

mod admin;
mod config;
mod fees;
mod outgoing;

pub use admin::*;
pub use config::*;
pub use fees::*;
pub use outgoing::*;
