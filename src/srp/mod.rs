//! SRP-6a client/server roles (C7, C8), augmented with OPRF-derived
//! private verifiers per spec.md §4.5/§4.6.

pub mod client;
pub mod server;

pub use client::{ClientEphemeral, ClientSession, SrpClient};
pub use server::{ServerEphemeral, ServerSession, SrpServer, SrpServerConfig};

use subtle::ConstantTimeEq;

/// Constant-time comparison of two hex-encoded proof values. Both proofs
/// are fixed-width (64 hex chars, one SHA-256 digest), so a length
/// mismatch is itself a non-secret-dependent signal and is checked first.
pub(crate) fn constant_time_hex_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
