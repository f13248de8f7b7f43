//! SRPServer (C8): verifier storage hook, ephemeral generation,
//! session-key and server-proof computation, client-proof verification;
//! owns the OPRF server role and the rate limiter.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::bigint::BigInt;
use crate::error::{OSrpError, OSrpResult};
use crate::hash::{h, HashArg};
use crate::oprf::OprfServer;
use crate::params::PARAMS;
use crate::rate_limiter::RateLimiter;

use super::client::session_proof;
use super::constant_time_hex_eq;

/// Per-login server ephemeral secret/public pair. `b` MUST NOT be reused
/// across login attempts.
pub struct ServerEphemeral {
    pub secret: BigInt,
    pub public: BigInt,
}

impl Drop for ServerEphemeral {
    fn drop(&mut self) {
        // See the matching note on `ClientEphemeral::drop`: best-effort only.
        self.secret = BigInt::zero();
    }
}

/// `K`/`P` produced by [`SrpServer::derive_session`].
pub struct ServerSession {
    pub key_hex: String,
    pub proof_hex: String,
}

/// Recognized construction options (spec.md §6).
pub struct SrpServerConfig {
    /// Sliding-window length, in milliseconds, for per-username OPRF evaluations.
    pub rate_window_ms: u64,
    /// Maximum successful OPRF evaluations per username per window.
    pub rate_max_requests: usize,
    /// Externally managed OPRF key; a fresh one is generated if absent.
    pub oprf_private_key: Option<Vec<u8>>,
}

/// Owns the rate limiter and the OPRF server's private key; safe to share
/// across concurrently served sessions.
pub struct SrpServer {
    rate_limiter: RateLimiter,
    oprf_server: OprfServer,
}

impl SrpServer {
    /// Generates a fresh OPRF private key unless `config.oprf_private_key`
    /// injects one.
    pub fn new(config: SrpServerConfig) -> OSrpResult<Self> {
        let oprf_server = match config.oprf_private_key {
            Some(key_bytes) => OprfServer::from_key_bytes(&key_bytes)?,
            None => OprfServer::new()?,
        };
        Ok(Self {
            rate_limiter: RateLimiter::new(config.rate_window_ms, config.rate_max_requests),
            oprf_server,
        })
    }

    /// The OPRF private key, exposed read-only for operator backup.
    pub fn oprf_private_key_bytes(&self) -> &[u8] {
        self.oprf_server.private_key_bytes()
    }

    /// Rate-limits, then deserializes, blind-evaluates, and re-serializes
    /// an OPRF request on behalf of `username`.
    #[tracing::instrument(level = "debug", skip(self, serialized_request))]
    pub fn perform_oprf_eval(
        &self,
        username: &str,
        serialized_request: &[u8],
    ) -> OSrpResult<Vec<u8>> {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the Unix epoch")
            .as_millis() as u64;
        self.rate_limiter.check_and_record(username, now_ms)?;

        let request = self.oprf_server.deserialize_request(serialized_request)?;
        let evaluation = self.oprf_server.blind_evaluate(&request)?;
        Ok(OprfServer::serialize_response(&evaluation))
    }

    /// `b = random(hash_output_bytes)`; `B = (k*v + g^b mod N) mod N`.
    /// Rejects `v == 0`.
    pub fn generate_ephemeral(v_hex: &str) -> OSrpResult<ServerEphemeral> {
        let n = &PARAMS.n;
        let g = &PARAMS.g;
        let k = &PARAMS.k;

        let v = BigInt::from_hex(v_hex)?;
        if v.is_zero() {
            return Err(OSrpError::BadInput("verifier must be non-zero".to_string()));
        }
        let secret = BigInt::random(crate::params::HASH_OUTPUT_BYTES);
        let public = k.mul(&v).add(&g.mod_pow(&secret, n)).modulus(n);
        Ok(ServerEphemeral { secret, public })
    }

    /// Derives the shared session key, verifies the client proof, and (only
    /// on success) produces the server proof.
    pub fn derive_session(
        b_hex: &str,
        a_hex: &str,
        salt_hex: &str,
        username: &str,
        v_hex: &str,
        client_proof_hex: &str,
    ) -> OSrpResult<ServerSession> {
        let n = &PARAMS.n;
        let g = &PARAMS.g;
        let k = &PARAMS.k;

        let big_a = BigInt::from_hex(a_hex)?;
        if big_a.modulus(n).is_zero() {
            return Err(OSrpError::InvalidClientEphemeral);
        }
        let b = BigInt::from_hex(b_hex)?;
        let v = BigInt::from_hex(v_hex)?;
        let salt = BigInt::from_hex(salt_hex)?;

        // The server MUST recompute B from its stored ephemeral secret
        // rather than trust a transmitted value.
        let big_b = k.mul(&v).add(&g.mod_pow(&b, n)).modulus(n);
        let u = h(&[HashArg::from(&big_a), HashArg::from(&big_b)]);

        // S = (A * v^u)^b mod N
        let s = big_a.mul(&v.mod_pow(&u, n)).mod_pow(&b, n);
        let key = h(&[HashArg::from(&s)]);

        let expected_client_proof = session_proof(n, g, username, &salt, &big_a, &big_b, &key);

        if !constant_time_hex_eq(&expected_client_proof.to_hex(), client_proof_hex) {
            return Err(OSrpError::BadClientProof);
        }

        let server_proof = h(&[
            HashArg::from(&big_a),
            HashArg::from(&expected_client_proof),
            HashArg::from(&key),
        ]);

        Ok(ServerSession {
            key_hex: key.to_hex(),
            proof_hex: server_proof.to_hex(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SrpServerConfig {
        SrpServerConfig {
            rate_window_ms: 60_000,
            rate_max_requests: 3,
            oprf_private_key: None,
        }
    }

    #[test]
    fn rejects_zero_verifier() {
        let result = SrpServer::generate_ephemeral(&BigInt::zero().to_hex());
        assert_eq!(
            result.err(),
            Some(OSrpError::BadInput("verifier must be non-zero".to_string()))
        );
    }

    #[test]
    fn rejects_zero_client_ephemeral() {
        let v = BigInt::from_u64(42).to_hex();
        let ephemeral = SrpServer::generate_ephemeral(&v).unwrap();
        let result = SrpServer::derive_session(
            &ephemeral.secret.to_hex(),
            &BigInt::zero().to_hex(),
            &"01".repeat(32),
            "alice",
            &v,
            &"00".repeat(32),
        );
        assert_eq!(result.err(), Some(OSrpError::InvalidClientEphemeral));
    }

    #[test]
    fn oprf_key_can_be_injected() {
        let mut cfg = config();
        cfg.oprf_private_key = Some(vec![7u8; 32]);
        let server = SrpServer::new(cfg).unwrap();
        assert_eq!(server.oprf_private_key_bytes(), vec![7u8; 32].as_slice());
    }

    #[test]
    fn rate_limit_saturates_after_max_requests() {
        let server = SrpServer::new(config()).unwrap();
        // Empty bytes fail OPRF deserialization, but the rate limiter still
        // records each attempt before that point is reached.
        for _ in 0..3 {
            assert_eq!(
                server.perform_oprf_eval("alice", &[]),
                Err(OSrpError::BadRequest)
            );
        }
        assert_eq!(
            server.perform_oprf_eval("alice", &[]),
            Err(OSrpError::RateLimited)
        );
    }
}
