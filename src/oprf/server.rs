//! OPRFServer wrapper (C5): holds the server's OPRF private key,
//! deserializes a request, blind-evaluates it, serializes the response.

use rand::RngCore;
use voprf::{BlindedElement, EvaluationElement, OprfServer as VoprfOprfServer};

use super::{CipherSuite, OPRF_KEY_BYTES};
use crate::error::{OSrpError, OSrpResult};

/// Wraps a VOPRF server instance bound to suite P256-SHA256 and a private
/// key. No internal mutable state beyond the key; safe to call
/// concurrently, matching the underlying `voprf` primitive.
pub struct OprfServer {
    inner: VoprfOprfServer<CipherSuite>,
    private_key_bytes: Vec<u8>,
}

impl OprfServer {
    /// Generates a fresh, uniformly random private key.
    pub fn new() -> OSrpResult<Self> {
        let mut key_bytes = vec![0u8; OPRF_KEY_BYTES];
        rand::rngs::OsRng.fill_bytes(&mut key_bytes);
        Self::from_key_bytes(&key_bytes)
    }

    /// Constructs a server bound to an externally managed key (spec.md §6,
    /// `oprf_private_key` configuration option).
    pub fn from_key_bytes(key_bytes: &[u8]) -> OSrpResult<Self> {
        let inner = VoprfOprfServer::<CipherSuite>::new_with_key(key_bytes)
            .map_err(|e| OSrpError::CryptoError(e.to_string()))?;
        Ok(Self {
            inner,
            private_key_bytes: key_bytes.to_vec(),
        })
    }

    /// The private key, exposed read-only for operator backup (spec.md §4.6).
    /// Rotating this key invalidates every verifier derived with the old one.
    pub fn private_key_bytes(&self) -> &[u8] {
        &self.private_key_bytes
    }

    /// Deserializes a blinded request. Fails with
    /// [`OSrpError::BadRequest`] on malformed input.
    pub fn deserialize_request(&self, bytes: &[u8]) -> OSrpResult<BlindedElement<CipherSuite>> {
        BlindedElement::<CipherSuite>::deserialize(bytes).map_err(|_| OSrpError::BadRequest)
    }

    /// Runs the suite's blind evaluation.
    #[tracing::instrument(level = "debug", skip(self, request))]
    pub fn blind_evaluate(
        &self,
        request: &BlindedElement<CipherSuite>,
    ) -> OSrpResult<EvaluationElement<CipherSuite>> {
        Ok(self.inner.evaluate(request))
    }

    /// Serializes an evaluation for transport back to the client.
    pub fn serialize_response(evaluation: &EvaluationElement<CipherSuite>) -> Vec<u8> {
        evaluation.serialize().to_vec()
    }
}
