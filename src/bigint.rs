//! Arbitrary-precision non-negative integer with modular arithmetic and
//! the hex/byte I/O conventions the SRP and OPRF layers rely on.
//!
//! `BigInt` wraps [`num_bigint::BigUint`] and additionally tracks the
//! number of hex digits (`hex_width`) the value was parsed from, so that
//! re-encoding round-trips byte-for-byte with the reference protocol's
//! wire format (leading zeros in a salt or verifier are significant).

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;
use std::cmp::Ordering;

use crate::error::{OSrpError, OSrpResult};

/// Non-negative arbitrary-precision integer, optionally remembering the
/// hex width it was parsed from.
#[derive(Clone, Debug)]
pub struct BigInt {
    value: BigUint,
    hex_width: Option<usize>,
}

impl BigInt {
    /// Parses `s` as case-insensitive hex. Records `hex_width = s.len()`.
    ///
    /// `from_hex("")` yields `ZERO` with `hex_width = Some(0)`, per the
    /// documented edge case.
    pub fn from_hex(s: &str) -> OSrpResult<Self> {
        if s.is_empty() {
            return Ok(Self {
                value: BigUint::zero(),
                hex_width: Some(0),
            });
        }
        let value = BigUint::parse_bytes(s.as_bytes(), 16)
            .ok_or_else(|| OSrpError::BadInput(format!("not a valid hex string: {s}")))?;
        Ok(Self {
            value,
            hex_width: Some(s.len()),
        })
    }

    /// Builds a `BigInt` from a native `u64`. `hex_width` is left unset.
    pub fn from_u64(n: u64) -> Self {
        Self {
            value: BigUint::from(n),
            hex_width: None,
        }
    }

    /// Builds a `BigInt` from raw big-endian bytes. `hex_width` is left unset.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            value: BigUint::from_bytes_be(bytes),
            hex_width: None,
        }
    }

    /// Builds a `BigInt` from raw big-endian bytes with an explicit `hex_width`.
    /// Used by [`crate::hash`] to stamp digest outputs with `2 * digest_len`.
    pub fn from_bytes_with_hex_width(bytes: &[u8], hex_width: usize) -> Self {
        Self {
            value: BigUint::from_bytes_be(bytes),
            hex_width: Some(hex_width),
        }
    }

    /// Uniformly random `n_bytes`-byte value drawn from the OS CSPRNG.
    /// `hex_width = Some(2 * n_bytes)`.
    pub fn random(n_bytes: usize) -> Self {
        let mut bytes = vec![0u8; n_bytes];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self {
            value: BigUint::from_bytes_be(&bytes),
            hex_width: Some(2 * n_bytes),
        }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Self {
            value: BigUint::zero(),
            hex_width: None,
        }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self {
            value: BigUint::one(),
            hex_width: None,
        }
    }

    /// Hex encoding. Left-pads with `0` to `hex_width` when set; otherwise minimal.
    pub fn to_hex(&self) -> String {
        let raw = self.value.to_str_radix(16);
        match self.hex_width {
            Some(width) if raw.len() < width => {
                let mut padded = "0".repeat(width - raw.len());
                padded.push_str(&raw);
                padded
            }
            _ => raw,
        }
    }

    /// Big-endian byte encoding: minimal even-length hex, then raw bytes.
    /// Ignores `hex_width` — this is the canonical wire representation.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut hex = self.value.to_str_radix(16);
        if hex.len() % 2 != 0 {
            hex.insert(0, '0');
        }
        hex::decode(&hex).expect("radix-16 digits are always valid hex")
    }

    /// True if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// `self + other`. Preserves `other`'s... no, the left-hand operand's
    /// `hex_width` where the result still fits within it.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
            hex_width: self.width_if_fits(&self.value + &other.value),
        }
    }

    /// `self - other`. Callers MUST ensure `self >= other` (SRP call sites
    /// compensate modulo N before subtracting; see [`crate::srp`]).
    pub fn sub(&self, other: &Self) -> Self {
        let value = &self.value - &other.value;
        Self {
            hex_width: self.width_if_fits(value.clone()),
            value,
        }
    }

    /// `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
            hex_width: None,
        }
    }

    /// `self / other`, floor division.
    pub fn div(&self, other: &Self) -> Self {
        Self {
            value: &self.value / &other.value,
            hex_width: None,
        }
    }

    /// `self mod other`.
    pub fn modulus(&self, other: &Self) -> Self {
        Self {
            value: &self.value % &other.value,
            hex_width: None,
        }
    }

    /// `self^exp mod m`, by square-and-multiply. `exp = 0` yields `1 mod m`.
    pub fn mod_pow(&self, exp: &Self, m: &Self) -> Self {
        Self {
            value: self.value.modpow(&exp.value, &m.value),
            hex_width: None,
        }
    }

    /// `self^(m-2) mod m` via Fermat's little theorem. Only correct when
    /// `m` is prime; callers MUST ensure this (see `spec.md` §9). Fails
    /// with [`OSrpError::NoInverse`] when `gcd(self, m) != 1`.
    pub fn mod_inverse(&self, m: &Self) -> OSrpResult<Self> {
        if self.value.gcd(&m.value) != BigUint::one() {
            return Err(OSrpError::NoInverse);
        }
        let two = BigUint::from(2u8);
        let exponent = &m.value - &two;
        Ok(Self {
            value: self.value.modpow(&exponent, &m.value),
            hex_width: None,
        })
    }

    /// Bitwise XOR, interpreting both operands as non-negative integers.
    pub fn xor(&self, other: &Self) -> Self {
        Self {
            value: &self.value ^ &other.value,
            hex_width: None,
        }
    }

    /// Value equality (ignores `hex_width`).
    pub fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }

    /// `self < other`.
    pub fn lt(&self, other: &Self) -> bool {
        self.value < other.value
    }

    /// `self > other`.
    pub fn gt(&self, other: &Self) -> bool {
        self.value > other.value
    }

    fn width_if_fits(&self, result: BigUint) -> Option<usize> {
        match self.hex_width {
            Some(width) if result.to_str_radix(16).len() <= width => Some(width),
            _ => None,
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        BigInt::eq(self, other)
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.value.cmp(&other.value))
    }
}
