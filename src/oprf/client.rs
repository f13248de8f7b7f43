//! OPRFClient wrapper (C6): blinds an input, preserves blind state across
//! the round trip, finalizes a server response into a PRF output.

use voprf::{EvaluationElement, OprfClient as VoprfOprfClient};
use zeroize::Zeroize;

use super::CipherSuite;
use crate::error::{OSrpError, OSrpResult};

/// Input to [`OprfClient::blind`].
///
/// `Str` reproduces the reference implementation's hex auto-detection
/// quirk (spec.md §4.4, §9): a string matching `^[0-9a-fA-F]+$` is decoded
/// as hex rather than treated as UTF-8. This is ambiguous for short
/// alphanumeric passphrases — callers who need determinism MUST use
/// `Bytes` directly, which [`crate::srp::SrpClient`] already does for the
/// private verifier.
pub enum OprfInput {
    /// Raw bytes, absorbed exactly as given.
    Bytes(Vec<u8>),
    /// A string, auto-detected as hex or UTF-8.
    Str(String),
}

impl OprfInput {
    fn canonicalize(&self) -> Vec<u8> {
        match self {
            OprfInput::Bytes(b) => b.clone(),
            OprfInput::Str(s) => {
                let looks_like_hex = !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit());
                if looks_like_hex && s.len() % 2 == 0 {
                    match hex::decode(s) {
                        Ok(bytes) => bytes,
                        Err(_) => s.as_bytes().to_vec(),
                    }
                } else {
                    s.as_bytes().to_vec()
                }
            }
        }
    }
}

/// Opaque, single-round client blind state. MUST NOT be persisted or
/// serialized off-process; consumed exactly once by [`OprfClient::finalize`].
pub struct BlindState {
    inner: VoprfOprfClient<CipherSuite>,
    input: Vec<u8>,
}

impl Drop for BlindState {
    fn drop(&mut self) {
        self.input.zeroize();
    }
}

/// Stateless client-role entry points.
pub struct OprfClient;

impl OprfClient {
    /// Blinds `input`, returning the state to preserve for [`OprfClient::finalize`]
    /// alongside the serialized request to send to the OPRF server.
    pub fn blind(input: &OprfInput) -> OSrpResult<(BlindState, Vec<u8>)> {
        let input_bytes = input.canonicalize();
        let mut rng = rand::rngs::OsRng;
        let blind_result = VoprfOprfClient::<CipherSuite>::blind(&input_bytes, &mut rng)
            .map_err(|e| OSrpError::CryptoError(e.to_string()))?;
        let request_bytes = blind_result.message.serialize().to_vec();
        Ok((
            BlindState {
                inner: blind_result.state,
                input: input_bytes,
            },
            request_bytes,
        ))
    }

    /// Consumes `state` and a serialized server response, producing the
    /// PRF output bytes. Fails with [`OSrpError::BadResponse`] on
    /// malformed input or proof failure.
    pub fn finalize(state: BlindState, response_bytes: &[u8]) -> OSrpResult<Vec<u8>> {
        let evaluation = EvaluationElement::<CipherSuite>::deserialize(response_bytes)
            .map_err(|_| OSrpError::BadResponse)?;
        let output = state
            .inner
            .finalize(&state.input, &evaluation)
            .map_err(|_| OSrpError::BadResponse)?;
        Ok(output.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_looking_string_is_decoded_as_hex() {
        let hex_like = OprfInput::Str("deadbeef".to_string());
        assert_eq!(hex_like.canonicalize(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn non_hex_string_is_utf8() {
        let not_hex = OprfInput::Str("hunter2!".to_string());
        assert_eq!(not_hex.canonicalize(), b"hunter2!".to_vec());
    }

    #[test]
    fn raw_bytes_bypass_autodetection() {
        let raw = OprfInput::Bytes(vec![0xde, 0xad]);
        assert_eq!(raw.canonicalize(), vec![0xde, 0xad]);
    }

    #[test]
    fn finalize_rejects_malformed_response() {
        let (state, _request) = OprfClient::blind(&OprfInput::Bytes(b"hello".to_vec())).unwrap();
        assert!(matches!(
            OprfClient::finalize(state, &[0u8; 3]),
            Err(OSrpError::BadResponse)
        ));
    }
}
