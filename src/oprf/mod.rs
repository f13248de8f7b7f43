//! OPRF client/server wrappers (C5, C6) layered on the `voprf` crate's
//! base-mode VOPRF over P-256/SHA-256 (C4, treated as an external black box
//! per spec.md §1).

mod client;
mod server;

pub use client::{BlindState, OprfClient, OprfInput};
pub use server::OprfServer;

/// The fixed VOPRF ciphersuite: P-256 group, SHA-256 hash-to-curve.
pub(crate) type CipherSuite = p256::NistP256;

/// Scalar length, in bytes, of the P-256 group — the length of an OPRF
/// server private key (spec.md §3).
pub const OPRF_KEY_BYTES: usize = 32;
