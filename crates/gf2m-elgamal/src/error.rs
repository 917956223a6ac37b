//! Error type for key generation, signing and verification.

use gf2m_field::FieldError;
use thiserror::Error;

/// Errors raised by the signature layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// `value` shares a factor with `modulus`, so it has no inverse.
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    InvalidInverse {
        /// Value that was inverted.
        value: u64,
        /// Modulus of the ring.
        modulus: u64,
    },

    /// Private exponent outside `1..=p-2`.
    #[error("private exponent {value} is outside 1..={max}")]
    InvalidPrivateKey {
        /// Rejected exponent.
        value: u64,
        /// Largest valid exponent.
        max: u64,
    },

    /// Per-message secret outside `1..=p-2`.
    #[error("nonce {value} is outside 1..={max}")]
    InvalidNonce {
        /// Rejected nonce.
        value: u64,
        /// Largest valid nonce.
        max: u64,
    },

    /// A key was issued for a different field than the one in use.
    #[error("key belongs to field with modulus {key}, but the table has modulus {table}")]
    ParameterMismatch {
        /// Modulus recorded in the key.
        key: u64,
        /// Modulus of the active table.
        table: u64,
    },

    /// Field arithmetic failed.
    #[error(transparent)]
    Field(#[from] FieldError),
}
