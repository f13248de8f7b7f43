//! Persisted user record shape (spec.md §3, §6).
//!
//! Storage itself is out of scope for this crate — only the shape of
//! what a caller's database row looks like after registration.

use serde::{Deserialize, Serialize};

/// A server-side user record: created at registration, read during
/// login, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// The (intentionally public) username, also used to key rate limiting.
    pub username: String,
    /// Salt, hex-encoded (64 chars for a 32-byte salt).
    pub salt: String,
    /// Public verifier `v = g^x mod N`, hex-encoded (up to 768 chars for
    /// the 3072-bit group).
    pub verifier: String,
}
