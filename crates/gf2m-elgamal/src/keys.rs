//! Key material.

use core::fmt;

use gf2m_field::{Element, FieldParams};
use serde::{Deserialize, Serialize};

use crate::error::SignatureError;

/// Public key `(p, α, y)`. The field parameters carry `p = 2^m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// Field the key lives in.
    pub params: FieldParams,
    /// Generator `α`.
    pub generator: Element,
    /// `y = α^a`.
    pub y: Element,
}

impl PublicKey {
    /// Signature modulus `p`.
    pub fn modulus(&self) -> u64 {
        self.params.modulus()
    }

    /// Serializes the public key with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a public key with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Private exponent `a` with `1 <= a <= p - 2`.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    exponent: u64,
}

impl PrivateKey {
    /// Validates `exponent` against the field's modulus.
    pub fn new(exponent: u64, params: &FieldParams) -> Result<Self, SignatureError> {
        let max = params.modulus() - 2;
        if !(1..=max).contains(&exponent) {
            return Err(SignatureError::InvalidPrivateKey {
                value: exponent,
                max,
            });
        }
        Ok(Self { exponent })
    }

    /// The secret exponent `a`.
    pub fn exponent(&self) -> u64 {
        self.exponent
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// Public and private halves produced by key generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    /// Shareable half.
    pub public: PublicKey,
    /// Secret half, required for signing.
    pub private: PrivateKey,
}

impl KeyPair {
    /// Serializes the key pair with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a key pair with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_exponent_bounds() {
        let params = FieldParams::default();
        assert!(PrivateKey::new(1, &params).is_ok());
        assert!(PrivateKey::new(65534, &params).is_ok());
        assert_eq!(
            PrivateKey::new(0, &params),
            Err(SignatureError::InvalidPrivateKey {
                value: 0,
                max: 65534
            })
        );
        assert!(PrivateKey::new(65535, &params).is_err());
    }

    #[test]
    fn debug_hides_private_exponent() {
        let key = PrivateKey::new(12345, &FieldParams::default()).unwrap();
        assert!(!format!("{key:?}").contains("12345"));
    }

    #[test]
    fn serialize_roundtrip() {
        let params = FieldParams::default();
        let pair = KeyPair {
            public: PublicKey {
                params,
                generator: 2,
                y: 50307,
            },
            private: PrivateKey::new(12345, &params).unwrap(),
        };
        let bytes = pair.to_bytes().expect("serialize");
        let decoded = KeyPair::from_bytes(&bytes).expect("deserialize");
        assert_eq!(decoded, pair);
        assert_eq!(decoded.private.exponent(), 12345);
    }

    #[test]
    fn deserialize_revalidates_field_parameters() {
        let mut bytes = KeyPair {
            public: PublicKey {
                params: FieldParams::default(),
                generator: 2,
                y: 1,
            },
            private: PrivateKey::new(1, &FieldParams::default()).unwrap(),
        }
        .to_bytes()
        .unwrap();
        // Field parameters serialize first as a little-endian u64; make the
        // polynomial even so it fails validation.
        bytes[0] &= !1;
        assert!(KeyPair::from_bytes(&bytes).is_err());
    }
}
