//! Common - Shared Interface Types for the Poly Wrapper
//!
//! This package holds the message types the wrapper uses to talk to the
//! external lock proxy, so that a lock proxy implementation can depend on
//! the same definitions.

pub mod lock_proxy;

pub use lock_proxy::LockProxyExecuteMsg;
