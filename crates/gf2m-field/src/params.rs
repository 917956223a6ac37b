//! Field parameters for GF(2^m).

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::poly::{degree, Poly};

/// Smallest supported extension degree.
pub const MIN_DEGREE: u32 = 2;
/// Largest supported extension degree. Bounds the table at 2^24 entries.
pub const MAX_DEGREE: u32 = 24;

/// x^16 + x^13 + x^11 + x^6 + 1, a primitive polynomial for GF(2^16).
pub const DEFAULT_DEFINING_POLY: Poly = 0b1_0010_1000_0100_0001;

/// Base `q`, extension degree `m`, and the defining polynomial of GF(q^m).
///
/// The base is always 2. The degree is derived from the defining polynomial,
/// so the serialized form is the polynomial alone and is re-validated on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct FieldParams {
    degree: u32,
    defining_poly: Poly,
}

impl FieldParams {
    /// Validates `defining_poly` and derives the extension degree from it.
    pub fn new(defining_poly: Poly) -> Result<Self, FieldError> {
        let degree = degree(defining_poly).ok_or_else(|| FieldError::InvalidParameters {
            reason: "defining polynomial is zero".into(),
        })?;
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
            return Err(FieldError::InvalidParameters {
                reason: format!(
                    "degree {degree} is outside the supported range {MIN_DEGREE}..={MAX_DEGREE}"
                ),
            });
        }
        if defining_poly & 1 == 0 {
            return Err(FieldError::InvalidParameters {
                reason: format!("{defining_poly:#b} is divisible by x"),
            });
        }
        Ok(Self {
            degree,
            defining_poly,
        })
    }

    /// Parses a defining polynomial written as `0b…`, `0x…` or decimal.
    /// Underscores are ignored.
    pub fn parse(text: &str) -> Result<Self, FieldError> {
        let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();
        let (digits, radix) = if let Some(rest) = cleaned
            .strip_prefix("0b")
            .or_else(|| cleaned.strip_prefix("0B"))
        {
            (rest, 2)
        } else if let Some(rest) = cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"))
        {
            (rest, 16)
        } else {
            (cleaned.as_str(), 10)
        };
        let value =
            u64::from_str_radix(digits, radix).map_err(|err| FieldError::InvalidParameters {
                reason: format!("cannot parse {text:?} as a polynomial: {err}"),
            })?;
        Self::new(value)
    }

    /// Base of the field. Always 2.
    #[inline]
    pub const fn base(&self) -> u64 {
        2
    }

    /// Extension degree `m`.
    #[inline]
    pub const fn degree(&self) -> u32 {
        self.degree
    }

    /// Defining polynomial as a bit pattern.
    #[inline]
    pub const fn defining_poly(&self) -> Poly {
        self.defining_poly
    }

    /// Number of field elements, `2^m`. This is the signature modulus `p`.
    #[inline]
    pub const fn field_size(&self) -> u64 {
        1u64 << self.degree
    }

    /// Signature modulus `p = q^m`.
    #[inline]
    pub const fn modulus(&self) -> u64 {
        self.field_size()
    }

    /// Order of the multiplicative group, `q^m - (q - 1) = 2^m - 1`.
    #[inline]
    pub const fn order(&self) -> u64 {
        self.field_size() - 1
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            degree: 16,
            defining_poly: DEFAULT_DEFINING_POLY,
        }
    }
}

impl TryFrom<u64> for FieldParams {
    type Error = FieldError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldParams> for u64 {
    fn from(params: FieldParams) -> Self {
        params.defining_poly
    }
}

impl fmt::Display for FieldParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{}) mod {:#b}", self.degree, self.defining_poly)
    }
}
