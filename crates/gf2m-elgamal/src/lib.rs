//! ElGamal digital signatures over GF(2^m).
//!
//! Key generation, signing and verification are composed from the
//! table-driven field arithmetic in `gf2m-field` and integer arithmetic
//! modulo `p - 1`. Secrets are supplied by the caller, either directly or
//! through a [`SecretSource`] wrapping an RNG.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod arith;
mod digest;
mod error;
mod keys;
mod scheme;
mod secrets;
mod signature;

pub use crate::digest::{MessageDigest, PairSumDigest, Sha256Digest};
pub use crate::error::SignatureError;
pub use crate::keys::{KeyPair, PrivateKey, PublicKey};
pub use crate::scheme::ElGamal;
pub use crate::secrets::SecretSource;
pub use crate::signature::Signature;
