//! Process-wide, immutable SRP group parameters (RFC 5054, 3072-bit group).
//!
//! Constructed once behind a [`once_cell::sync::Lazy`] static and never
//! mutated afterward — group parameters are fixed at compile time and are
//! not a runtime configuration option (spec.md §6): changing them breaks
//! interop with any existing verifier store.

use once_cell::sync::Lazy;

use crate::bigint::BigInt;
use crate::hash::{h, HashArg};

/// RFC 5054 3072-bit safe prime `N`, as a hex string.
const N_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E08",
    "8A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B",
    "302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9",
    "A637ED6B0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE6",
    "49286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8",
    "FD24CF5F83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E772C",
    "180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718",
    "3995497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33170D",
    "04507A33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7D",
    "B3970F85A6E1E4C7ABF5AE8CDB0933D71E8C94E04A25619DCEE3D226",
    "1AD2EE6BF12FFA06D98A0864D87602733EC86A64521F2B18177B200C",
    "BBE117577A615D6C770988C0BAD946E208E24FA074E5AB3143DB5BFC",
    "E0FD108E4B82D120A93AD2CAFFFFFFFFFFFFFFFF",
);

/// SHA-256 output width in bytes, fixed by the group/hash pairing.
pub const HASH_OUTPUT_BYTES: usize = 32;

/// The process-wide SRP group.
pub struct Params {
    /// The 3072-bit safe prime.
    pub n: BigInt,
    /// The generator, fixed to 5 per RFC 5054.
    pub g: BigInt,
    /// The SRP-6a multiplier, `k = H(N, g)`.
    pub k: BigInt,
    /// Hash output width, in bytes.
    pub hash_output_bytes: usize,
}

impl Params {
    fn new() -> Self {
        let n = BigInt::from_hex(N_HEX).expect("N_HEX is a fixed, valid hex literal");
        let g = BigInt::from_u64(5);
        let k = h(&[HashArg::from(&n), HashArg::from(&g)]);
        Self {
            n,
            g,
            k,
            hash_output_bytes: HASH_OUTPUT_BYTES,
        }
    }
}

/// The process-wide, lazily-initialized SRP group parameters.
pub static PARAMS: Lazy<Params> = Lazy::new(Params::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_is_3072_bits() {
        assert_eq!(PARAMS.n.to_hex().len(), 3072 / 4);
    }

    #[test]
    fn g_is_five() {
        assert!(PARAMS.g.eq(&BigInt::from_u64(5)));
    }

    #[test]
    fn k_is_deterministic_and_nonzero() {
        assert!(!PARAMS.k.is_zero());
        let recomputed = h(&[HashArg::from(&PARAMS.n), HashArg::from(&PARAMS.g)]);
        assert!(PARAMS.k.eq(&recomputed));
    }
}
