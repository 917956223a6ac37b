//! Signature values.

use core::fmt;

use gf2m_field::Element;
use serde::{Deserialize, Serialize};

/// Signature `(r, s)`: `r = α^k` is a field element, `s` lies in `[0, p-2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// Commitment `α^k`.
    pub r: Element,
    /// Response `k^-1 (h(m) - a r) mod (p - 1)`.
    pub s: u64,
}

impl Signature {
    /// Serializes the signature with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a signature with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_fixed_width() {
        let sig = Signature { r: 2048, s: 7 };
        let bytes = sig.to_bytes().unwrap();
        assert_eq!(bytes.len(), 12);
        assert_eq!(Signature::from_bytes(&bytes).unwrap(), sig);
        assert!(Signature::from_bytes(&bytes[..4]).is_err());
        assert_eq!(sig.to_string(), "(2048, 7)");
    }
}
