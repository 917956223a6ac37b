//! ElGamal signatures over the multiplicative group of GF(2^m).
//!
//! With modulus `p = 2^m`, generator `α` and private exponent `a`:
//! - key generation publishes `y = α^a`;
//! - signing with a nonce `k` coprime to `p - 1` yields
//!   `r = α^k`, `s = k^-1 (h(m) - a r) mod (p - 1)`;
//! - verification accepts iff `y^r r^s = α^h(m)`.
//!
//! Every field product goes through the shared [`LogTable`].

use gf2m_field::{Element, LogTable};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use crate::arith::mod_inverse;
use crate::digest::{MessageDigest, Sha256Digest};
use crate::error::SignatureError;
use crate::keys::{KeyPair, PrivateKey, PublicKey};
use crate::secrets::SecretSource;
use crate::signature::Signature;

/// Signer and verifier bound to one field table and one digest.
///
/// Holds no state between calls; the table is borrowed, so any number of
/// instances may share it.
#[derive(Clone, Debug)]
pub struct ElGamal<'t, D = Sha256Digest> {
    table: &'t LogTable,
    digest: D,
}

impl<'t> ElGamal<'t, Sha256Digest> {
    /// Creates a scheme over `table` using SHA-256 digests.
    pub fn new(table: &'t LogTable) -> Self {
        Self::with_digest(table, Sha256Digest)
    }
}

impl<'t, D: MessageDigest> ElGamal<'t, D> {
    /// Creates a scheme over `table` with a custom digest.
    pub fn with_digest(table: &'t LogTable, digest: D) -> Self {
        Self { table, digest }
    }

    /// The underlying table.
    pub fn table(&self) -> &'t LogTable {
        self.table
    }

    /// Signature modulus `p`.
    pub fn modulus(&self) -> u64 {
        self.table.params().modulus()
    }

    /// Digest of `message` reduced modulo `p - 1`.
    pub fn hash(&self, message: &[u8]) -> u64 {
        self.digest.digest(message) % (self.modulus() - 1)
    }

    /// Derives the key pair for private exponent `a` (`1 <= a <= p - 2`).
    pub fn keygen(&self, private_exponent: u64) -> Result<KeyPair, SignatureError> {
        let private = PrivateKey::new(private_exponent, self.table.params())?;
        let generator = self.table.generator();
        let y = self.table.pow(generator, private.exponent())?;
        debug!(y, "generated key pair");
        Ok(KeyPair {
            public: PublicKey {
                params: *self.table.params(),
                generator,
                y,
            },
            private,
        })
    }

    /// Draws a private exponent from `source` and derives its key pair.
    pub fn keygen_with<R: RngCore + CryptoRng>(
        &self,
        source: &mut SecretSource<R>,
    ) -> Result<KeyPair, SignatureError> {
        let exponent = source.private_exponent(self.table.params());
        self.keygen(exponent)
    }

    /// Signs `message` with the per-message secret `nonce`.
    ///
    /// The nonce must lie in `1..=p-2` and be coprime to `p - 1`; a nonce that
    /// is not coprime aborts with [`SignatureError::InvalidInverse`]. Reusing a
    /// nonce across messages reveals the private key.
    pub fn sign(
        &self,
        private: &PrivateKey,
        message: &[u8],
        nonce: u64,
    ) -> Result<Signature, SignatureError> {
        let p = self.modulus();
        let group = p - 1;
        let max = p - 2;
        let a = private.exponent();
        if !(1..=max).contains(&a) {
            return Err(SignatureError::InvalidPrivateKey { value: a, max });
        }
        if !(1..=max).contains(&nonce) {
            return Err(SignatureError::InvalidNonce { value: nonce, max });
        }

        let r = self.table.pow(self.table.generator(), nonce)?;
        let inv_k = mod_inverse(nonce, group)?;
        let h = self.hash(message);

        let exponent = i128::from(h) - i128::from(a) * i128::from(r);
        let s = (i128::from(inv_k) * exponent).rem_euclid(i128::from(group)) as u64;
        debug!(r, s, "signed message");
        Ok(Signature { r, s })
    }

    /// Signs `message` with a fresh nonce drawn from `source`.
    pub fn sign_with<R: RngCore + CryptoRng>(
        &self,
        private: &PrivateKey,
        message: &[u8],
        source: &mut SecretSource<R>,
    ) -> Result<Signature, SignatureError> {
        let nonce = source.nonce(self.table.params());
        self.sign(private, message, nonce)
    }

    /// Checks `signature` on `message` against `public`.
    ///
    /// Returns `Ok(false)` for a rejected signature, including one whose `r`
    /// falls outside `1..=p-1`. Errors are reserved for keys that do not
    /// belong to this field.
    pub fn verify(
        &self,
        public: &PublicKey,
        message: &[u8],
        signature: &Signature,
    ) -> Result<bool, SignatureError> {
        let p = self.modulus();
        let r: Element = signature.r;
        if !(1..p).contains(&u64::from(r)) {
            debug!(r, "rejected signature: r out of range");
            return Ok(false);
        }

        if public.params != *self.table.params() {
            return Err(SignatureError::ParameterMismatch {
                key: public.modulus(),
                table: p,
            });
        }

        let yr = self.table.pow(public.y, u64::from(r))?;
        let rs = self.table.pow(r, signature.s)?;
        let v1 = self.table.mul(yr, rs)?;
        let v2 = self.table.pow(public.generator, self.hash(message))?;
        trace!(yr, rs, v1, v2, "verification values");

        let accepted = v1 == v2;
        debug!(accepted, "verified signature");
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf2m_field::{FieldError, FieldParams};

    fn default_table() -> LogTable {
        LogTable::build(FieldParams::default()).unwrap()
    }

    #[test]
    fn keygen_matches_reference_value() {
        let table = default_table();
        let scheme = ElGamal::new(&table);
        let pair = scheme.keygen(12345).unwrap();
        assert_eq!(pair.public.y, 50307);
        assert_eq!(pair.public.generator, 2);
        assert_eq!(pair.public.modulus(), 65536);
    }

    #[test]
    fn sign_matches_hand_computation() {
        let table = default_table();
        let scheme = ElGamal::new(&table);
        let pair = scheme.keygen(12345).unwrap();
        let message = b"The quick brown fox jumps over the lazy dog";
        let sig = scheme.sign(&pair.private, message, 11).unwrap();
        assert_eq!(sig.r, 2048);
        assert_eq!(scheme.hash(message), 23496);
        assert_eq!(sig.s, 51066);
        assert!(scheme.verify(&pair.public, message, &sig).unwrap());
    }

    #[test]
    fn nonce_not_coprime_aborts_signing() {
        let table = default_table();
        let scheme = ElGamal::new(&table);
        let pair = scheme.keygen(12345).unwrap();
        assert_eq!(
            scheme.sign(&pair.private, b"msg", 15),
            Err(SignatureError::InvalidInverse {
                value: 15,
                modulus: 65535
            })
        );
    }

    #[test]
    fn nonce_out_of_range_is_rejected() {
        let table = default_table();
        let scheme = ElGamal::new(&table);
        let pair = scheme.keygen(12345).unwrap();
        for nonce in [0, 65535, 70000] {
            assert!(matches!(
                scheme.sign(&pair.private, b"msg", nonce),
                Err(SignatureError::InvalidNonce { .. })
            ));
        }
    }

    #[test]
    fn private_key_for_larger_field_is_rejected() {
        let big = default_table();
        let small = LogTable::build(FieldParams::new(0b10011).unwrap()).unwrap();
        let private = ElGamal::new(&big).keygen(1000).unwrap().private;
        assert!(matches!(
            ElGamal::new(&small).sign(&private, b"msg", 1),
            Err(SignatureError::InvalidPrivateKey { .. })
        ));
    }

    #[test]
    fn out_of_range_r_is_rejected_without_error() {
        let table = default_table();
        let scheme = ElGamal::new(&table);
        let pair = scheme.keygen(12345).unwrap();
        for r in [0u32, 65536, u32::MAX] {
            let sig = Signature { r, s: 1 };
            assert!(!scheme.verify(&pair.public, b"msg", &sig).unwrap());
        }
    }

    #[test]
    fn foreign_public_key_is_an_error() {
        let table = default_table();
        let small = LogTable::build(FieldParams::new(0b10011).unwrap()).unwrap();
        let foreign = ElGamal::new(&small).keygen(3).unwrap().public;
        let sig = Signature { r: 2, s: 1 };
        assert_eq!(
            ElGamal::new(&table).verify(&foreign, b"msg", &sig),
            Err(SignatureError::ParameterMismatch {
                key: 16,
                table: 65536
            })
        );
    }

    #[test]
    fn malformed_r_is_rejected_before_key_checks() {
        let table = default_table();
        let small = LogTable::build(FieldParams::new(0b10011).unwrap()).unwrap();
        let foreign = ElGamal::new(&small).keygen(3).unwrap().public;
        for r in [0u32, 65536] {
            let sig = Signature { r, s: 1 };
            assert_eq!(ElGamal::new(&table).verify(&foreign, b"msg", &sig), Ok(false));
        }
    }

    #[test]
    fn public_value_outside_field_is_an_error() {
        let table = default_table();
        let scheme = ElGamal::new(&table);
        let mut public = scheme.keygen(12345).unwrap().public;
        public.y = 0;
        let sig = Signature { r: 2, s: 1 };
        assert_eq!(
            scheme.verify(&public, b"msg", &sig),
            Err(SignatureError::Field(FieldError::ElementNotFound { element: 0 }))
        );
    }
}
