//! Error types for the transformation core
//!
//! The core distinguishes fatal input-contract violations (surfaced here)
//! from recoverable per-container conditions, which travel as
//! [`Diagnostic`](crate::generate::Diagnostic) values instead.

use thiserror::Error;

/// Errors raised while constructing declaration records.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A slot arrived with an empty identity. The discovery collaborator
    /// guarantees non-empty identities, so this is a caller contract
    /// violation and aborts construction rather than emitting a malformed
    /// declaration.
    #[error("slot identity must not be empty")]
    EmptyIdentity,
}
