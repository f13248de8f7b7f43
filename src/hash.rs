//! Variadic hash `H` absorbing strings and [`BigInt`]s in canonical byte form.
//!
//! The interop-critical rule (spec.md §4.2, §9): a `BigInt` argument is
//! absorbed as the ASCII bytes of its *hex encoding*, not as raw binary.
//! This matches the reference implementation's observable digests and
//! MUST be preserved byte-for-byte — it is a wire contract, not an
//! implementation detail.

use sha2::{Digest, Sha256};

use crate::bigint::BigInt;

/// One argument to [`h`].
pub enum HashArg {
    /// Absorbed as its raw bytes (strings are absorbed as their UTF-8 bytes).
    Bytes(Vec<u8>),
    /// Absorbed as the ASCII bytes of its even-length hex encoding.
    Int(BigInt),
}

impl From<&str> for HashArg {
    fn from(s: &str) -> Self {
        HashArg::Bytes(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for HashArg {
    fn from(b: &[u8]) -> Self {
        HashArg::Bytes(b.to_vec())
    }
}

impl From<BigInt> for HashArg {
    fn from(n: BigInt) -> Self {
        HashArg::Int(n)
    }
}

impl From<&BigInt> for HashArg {
    fn from(n: &BigInt) -> Self {
        HashArg::Int(n.clone())
    }
}

/// `H(a1, a2, ...) -> BigInt`. Absorption order matters. Digest bytes are
/// interpreted as a big-endian integer with `hex_width = 2 * digest_len`.
pub fn h(args: &[HashArg]) -> BigInt {
    let mut hasher = Sha256::new();
    for arg in args {
        match arg {
            HashArg::Bytes(b) => hasher.update(b),
            HashArg::Int(n) => hasher.update(hex_digits_for_absorption(n).as_bytes()),
        }
    }
    let digest = hasher.finalize();
    BigInt::from_bytes_with_hex_width(&digest, digest.len() * 2)
}

fn hex_digits_for_absorption(n: &BigInt) -> String {
    let mut hex = n.to_hex();
    if hex.len() % 2 != 0 {
        hex.insert(0, '0');
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_width_is_32_bytes() {
        let a = h(&[HashArg::from("hello"), HashArg::from(BigInt::from_u64(42))]);
        let b = h(&[HashArg::from("hello"), HashArg::from(BigInt::from_u64(42))]);
        assert_eq!(a.to_hex(), b.to_hex());
        assert_eq!(a.to_hex().len(), 64);
    }

    #[test]
    fn argument_order_matters() {
        let a = h(&[HashArg::from("a"), HashArg::from("b")]);
        let b = h(&[HashArg::from("b"), HashArg::from("a")]);
        assert_ne!(a.to_hex(), b.to_hex());
    }

    #[test]
    fn bigint_absorbed_as_hex_string_bytes() {
        // H(BigInt) must equal SHA-256 of the ASCII hex digits, not the raw bytes.
        let n = BigInt::from_hex("ff").unwrap();
        let via_h = h(&[HashArg::from(&n)]);

        let mut hasher = Sha256::new();
        hasher.update(b"ff");
        let expected = hasher.finalize();

        assert_eq!(via_h.to_bytes(), expected.to_vec());
    }
}
