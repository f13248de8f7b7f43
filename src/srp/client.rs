//! SRPClient (C7): salt/verifier derivation, ephemeral generation,
//! session-key and client-proof computation, server-proof verification.

use crate::bigint::BigInt;
use crate::error::{OSrpError, OSrpResult};
use crate::hash::{h, HashArg};
use crate::oprf::{BlindState, OprfClient, OprfInput};
use crate::params::{HASH_OUTPUT_BYTES, PARAMS};

use super::constant_time_hex_eq;

/// Per-login client ephemeral secret/public pair. `a` MUST NOT be reused
/// across login attempts.
pub struct ClientEphemeral {
    pub secret: BigInt,
    pub public: BigInt,
}

impl Drop for ClientEphemeral {
    fn drop(&mut self) {
        // BigUint is heap-backed; this overwrite is best-effort and does not
        // guarantee the prior allocation is scrubbed, but it does prevent
        // the live value from being read back through this handle.
        self.secret = BigInt::zero();
    }
}

/// `K`/`M` produced by [`SrpClient::derive_session`].
pub struct ClientSession {
    pub key_hex: String,
    pub proof_hex: String,
}

/// Stateless client-role entry points.
pub struct SrpClient;

impl SrpClient {
    /// `random(hash_output_bytes).to_hex()`.
    pub fn generate_salt() -> String {
        BigInt::random(HASH_OUTPUT_BYTES).to_hex()
    }

    /// `sk = H(salt_bigint, H(username, ":", password))`.
    pub fn derive_private_key(salt_hex: &str, username: &str, password: &str) -> OSrpResult<String> {
        let salt = BigInt::from_hex(salt_hex)?;
        let inner = h(&[
            HashArg::from(username),
            HashArg::from(":"),
            HashArg::from(password),
        ]);
        let sk = h(&[HashArg::from(&salt), HashArg::from(&inner)]);
        Ok(sk.to_hex())
    }

    /// `v' = g^sk mod N`, returned as its raw big-endian byte encoding.
    pub fn derive_private_verifier(sk_hex: &str) -> OSrpResult<Vec<u8>> {
        let sk = BigInt::from_hex(sk_hex)?;
        let v_prime = PARAMS.g.mod_pow(&sk, &PARAMS.n);
        Ok(v_prime.to_bytes())
    }

    /// Delegates to [`OprfClient::blind`].
    pub fn blind_eval_oprf_input(v_prime_bytes: &[u8]) -> OSrpResult<(BlindState, Vec<u8>)> {
        OprfClient::blind(&OprfInput::Bytes(v_prime_bytes.to_vec()))
    }

    /// Delegates to [`OprfClient::finalize`]; returns lowercase hex.
    pub fn finalize_oprf(state: BlindState, response_bytes: &[u8]) -> OSrpResult<String> {
        let output = OprfClient::finalize(state, response_bytes)?;
        Ok(hex::encode(output))
    }

    /// Concatenates `parts` (no separator), reinterprets the concatenation
    /// as a single hex-encoded integer, and hashes that integer.
    ///
    /// This is a deliberate interop constraint, not an oversight: two
    /// different output tuples could in principle concatenate to the same
    /// string if one part has a leading-zero byte. Callers who want to
    /// avoid that ambiguity should use
    /// [`SrpClient::derive_verifier_hash_length_prefixed`] instead.
    pub fn derive_verifier_hash(parts: &[&str]) -> OSrpResult<String> {
        let concatenated: String = parts.concat();
        let n = BigInt::from_hex(&concatenated)?;
        Ok(h(&[HashArg::from(&n)]).to_hex())
    }

    /// Unambiguous sibling of [`SrpClient::derive_verifier_hash`]: each part
    /// is hashed as a 4-byte big-endian length prefix followed by its
    /// decoded bytes, so no concatenation can collide across different
    /// part boundaries. Opt-in only; never used by the default path.
    pub fn derive_verifier_hash_length_prefixed(parts: &[&str]) -> OSrpResult<String> {
        let mut args = Vec::with_capacity(parts.len());
        for part in parts {
            let bytes = hex::decode(part)
                .map_err(|_| OSrpError::BadInput(format!("not valid hex: {part}")))?;
            let mut framed = (bytes.len() as u32).to_be_bytes().to_vec();
            framed.extend_from_slice(&bytes);
            args.push(HashArg::Bytes(framed));
        }
        Ok(h(&args).to_hex())
    }

    /// `v = g^x mod N`.
    pub fn derive_public_verifier(x_hex: &str) -> OSrpResult<String> {
        let x = BigInt::from_hex(x_hex)?;
        Ok(PARAMS.g.mod_pow(&x, &PARAMS.n).to_hex())
    }

    /// `a = random(hash_output_bytes)`; `A = g^a mod N`.
    pub fn generate_ephemeral() -> ClientEphemeral {
        let secret = BigInt::random(HASH_OUTPUT_BYTES);
        let public = PARAMS.g.mod_pow(&secret, &PARAMS.n);
        ClientEphemeral { secret, public }
    }

    /// Derives the shared session key and client proof.
    pub fn derive_session(
        a_hex: &str,
        b_hex: &str,
        salt_hex: &str,
        username: &str,
        x_hex: &str,
    ) -> OSrpResult<ClientSession> {
        let n = &PARAMS.n;
        let g = &PARAMS.g;
        let k = &PARAMS.k;

        let a = BigInt::from_hex(a_hex)?;
        let b = BigInt::from_hex(b_hex)?;
        if b.modulus(n).is_zero() {
            return Err(OSrpError::InvalidServerEphemeral);
        }
        let salt = BigInt::from_hex(salt_hex)?;
        let x = BigInt::from_hex(x_hex)?;

        let big_a = g.mod_pow(&a, n);
        let u = h(&[HashArg::from(&big_a), HashArg::from(&b)]);

        // S = ((B + N - (k * g^x mod N)) mod N)^(a + u*x) mod N
        let k_gx = k.mul(&g.mod_pow(&x, n)).modulus(n);
        let base = b.add(n).sub(&k_gx).modulus(n);
        let exponent = a.add(&u.mul(&x));
        let s = base.mod_pow(&exponent, n);
        let key = h(&[HashArg::from(&s)]);

        let m = session_proof(n, g, username, &salt, &big_a, &b, &key);

        Ok(ClientSession {
            key_hex: key.to_hex(),
            proof_hex: m.to_hex(),
        })
    }

    /// `expected = H(A, M, K)`; fails with `BadServerProof` if it does not
    /// match `server_proof_hex`.
    pub fn verify_session(
        a_hex: &str,
        session: &ClientSession,
        server_proof_hex: &str,
    ) -> OSrpResult<()> {
        let big_a = BigInt::from_hex(a_hex)?;
        let m = BigInt::from_hex(&session.proof_hex)?;
        let key = BigInt::from_hex(&session.key_hex)?;
        let expected = h(&[HashArg::from(&big_a), HashArg::from(&m), HashArg::from(&key)]);

        if constant_time_hex_eq(&expected.to_hex(), server_proof_hex) {
            Ok(())
        } else {
            Err(OSrpError::BadServerProof)
        }
    }
}

/// `M = H( H(N) xor H(g), H(username), salt, A, B, K )`. Shared verbatim
/// between client and server so both sides compute the identical value.
pub(super) fn session_proof(
    n: &BigInt,
    g: &BigInt,
    username: &str,
    salt: &BigInt,
    big_a: &BigInt,
    big_b: &BigInt,
    key: &BigInt,
) -> BigInt {
    let hn_xor_hg = h(&[HashArg::from(n)]).xor(&h(&[HashArg::from(g)]));
    let h_username = h(&[HashArg::from(username)]);
    h(&[
        HashArg::from(&hn_xor_hg),
        HashArg::from(&h_username),
        HashArg::from(salt),
        HashArg::from(big_a),
        HashArg::from(big_b),
        HashArg::from(key),
    ])
}
