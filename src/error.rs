//! Error taxonomy for the O-SRP core.

use thiserror::Error;

/// Errors that can occur anywhere in the O-SRP protocol engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OSrpError {
    /// Malformed hex, non-hex characters, or the wrong argument kind passed to `H`.
    #[error("bad input: {0}")]
    BadInput(String),

    /// Client ephemeral `A` reduces to 0 mod N.
    #[error("invalid client ephemeral (A mod N == 0)")]
    InvalidClientEphemeral,

    /// Server ephemeral `B` reduces to 0 mod N.
    #[error("invalid server ephemeral (B mod N == 0)")]
    InvalidServerEphemeral,

    /// Server-side client proof (M) did not match; the server MUST NOT emit its own proof.
    #[error("client proof verification failed")]
    BadClientProof,

    /// Client-side server proof (P) did not match; the client MUST discard the derived key.
    #[error("server proof verification failed")]
    BadServerProof,

    /// The per-username OPRF rate limiter rejected the request.
    #[error("rate limited")]
    RateLimited,

    /// `mod_inverse` is undefined because gcd(self, m) != 1.
    #[error("no modular inverse exists")]
    NoInverse,

    /// Malformed OPRF request bytes.
    #[error("bad OPRF request")]
    BadRequest,

    /// Malformed OPRF response bytes, or client-side proof verification failure in the OPRF layer.
    #[error("bad OPRF response")]
    BadResponse,

    /// The underlying VOPRF primitive rejected an invalid group element or key.
    #[error("OPRF cryptographic error: {0}")]
    CryptoError(String),
}

/// Result alias used throughout the crate.
pub type OSrpResult<T> = Result<T, OSrpError>;
