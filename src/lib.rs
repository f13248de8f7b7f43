//! O-SRP Core Library
//!
//! Cryptographic protocol engine for Oblivious SRP: SRP-6a augmented with
//! rate-limited OPRF evaluations so that offline dictionary attacks against
//! a compromised verifier store require live interaction with every
//! participating OPRF server.
//!
//! Network transport, message framing, and persistent storage are the
//! caller's responsibility; this crate only implements the protocol math,
//! its data bindings, and its failure semantics.
//!
//! # Example (conceptual, single OPRF server)
//! ```ignore
//! let salt = SrpClient::generate_salt();
//! let sk = SrpClient::derive_private_key(&salt, "alice", "hunter2")?;
//! let v_prime = SrpClient::derive_private_verifier(&sk)?;
//! let (state, request) = SrpClient::blind_eval_oprf_input(&v_prime)?;
//! let response = server.perform_oprf_eval("alice", &request)?;
//! let oprf_output = SrpClient::finalize_oprf(state, &response)?;
//! let x = SrpClient::derive_verifier_hash(&[&hex::encode(&v_prime), &oprf_output])?;
//! let v = SrpClient::derive_public_verifier(&x)?;
//! // store UserRecord { username, salt, verifier: v } server-side
//! ```

pub mod bigint;
pub mod error;
pub mod hash;
pub mod oprf;
pub mod params;
pub mod rate_limiter;
pub mod record;
pub mod srp;

pub use bigint::BigInt;
pub use error::{OSrpError, OSrpResult};
pub use hash::{h, HashArg};
pub use oprf::{BlindState, OprfClient, OprfInput, OprfServer, OPRF_KEY_BYTES};
pub use params::{Params, HASH_OUTPUT_BYTES, PARAMS};
pub use rate_limiter::RateLimiter;
pub use record::UserRecord;
pub use srp::{
    ClientEphemeral, ClientSession, ServerEphemeral, ServerSession, SrpClient, SrpServer,
    SrpServerConfig,
};
