//! Discrete-log (exp/log) table for GF(2^m) and table-based multiplication.

use core::fmt;
use std::time::Instant;

use tracing::debug;

use crate::error::FieldError;
use crate::params::FieldParams;
use crate::poly::{self, Poly};

/// Field element: a binary polynomial of degree below `m`.
pub type Element = u32;

/// The generator `α = x`.
pub const GENERATOR: Element = 0b10;
/// The multiplicative identity.
pub const IDENTITY: Element = 1;

const ABSENT: u32 = u32::MAX;

/// Bijection between exponents `0..order` and the nonzero field elements.
///
/// `exp[i]` holds `α^i`; `log[e]` holds the exponent of element `e`. Built
/// once per parameter set and read-only afterwards, so a single table can be
/// shared by reference (or behind an `Arc`) between concurrent callers.
#[derive(Clone, PartialEq, Eq)]
pub struct LogTable {
    params: FieldParams,
    exp: Vec<Element>,
    log: Vec<u32>,
}

impl LogTable {
    /// Builds and validates the table for `params`.
    ///
    /// Powers `α^0 … α^(m-1)` are the monomials `x^i`; `α^m` is the defining
    /// polynomial with its leading term stripped. Each later power doubles its
    /// predecessor and folds any bit `s` back in by substituting `α^s`.
    ///
    /// Fails with [`FieldError::TableInconsistent`] when the powers of `α` do
    /// not enumerate every nonzero element exactly once, or when `α^order`
    /// does not close back to 1. Either means the defining polynomial is not
    /// primitive.
    pub fn build(params: FieldParams) -> Result<Self, FieldError> {
        let started = Instant::now();
        let degree = params.degree() as usize;
        let order = params.order() as usize;
        let basis = poly::rem(params.defining_poly(), 1 << degree) as Element;

        let mut exp: Vec<Element> = Vec::with_capacity(order);
        for i in 0..order {
            let element = if i < degree {
                1 << i
            } else if i == degree {
                basis
            } else {
                reduce_against_table(&exp, poly::mul(2, Poly::from(exp[i - 1])))
            };
            exp.push(element);
        }

        let mut log = vec![ABSENT; params.field_size() as usize];
        for (i, &element) in exp.iter().enumerate() {
            if element == 0 || u64::from(element) >= params.field_size() {
                return Err(FieldError::TableInconsistent {
                    reason: format!("α^{i} = {element:#x} is not a nonzero element of {params}"),
                });
            }
            let slot = &mut log[element as usize];
            if *slot != ABSENT {
                return Err(FieldError::TableInconsistent {
                    reason: format!(
                        "α^{i} repeats α^{} = {element:#x}; {params} is not primitive",
                        *slot
                    ),
                });
            }
            *slot = i as u32;
        }

        let closure = exp
            .last()
            .map(|&last| reduce_against_table(&exp, poly::mul(2, Poly::from(last))))
            .unwrap_or(IDENTITY);
        if closure != IDENTITY {
            return Err(FieldError::TableInconsistent {
                reason: format!("α^{order} reduces to {closure:#x} instead of 1"),
            });
        }

        debug!(
            degree = params.degree(),
            order,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built discrete-log table"
        );

        Ok(Self { params, exp, log })
    }

    /// Parameters the table was built for.
    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Group order, `2^m - 1`.
    #[inline]
    pub fn order(&self) -> u64 {
        self.params.order()
    }

    /// Number of entries (equal to the order).
    #[inline]
    pub fn len(&self) -> usize {
        self.exp.len()
    }

    /// Always false for a validated table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    /// The generator `α`.
    #[inline]
    pub const fn generator(&self) -> Element {
        GENERATOR
    }

    /// The identity element.
    #[inline]
    pub const fn identity(&self) -> Element {
        IDENTITY
    }

    /// Returns `α^exponent`, reducing the exponent modulo the order.
    #[inline]
    pub fn element_at(&self, exponent: u64) -> Element {
        self.exp[(exponent % self.order()) as usize]
    }

    /// Returns the exponent `i` with `α^i = element`.
    pub fn exponent_of(&self, element: Element) -> Result<u32, FieldError> {
        match self.log.get(element as usize) {
            Some(&exponent) if exponent != ABSENT => Ok(exponent),
            _ => Err(FieldError::ElementNotFound { element }),
        }
    }

    /// Returns true if `element` is a nonzero element of the field.
    #[inline]
    pub fn contains(&self, element: Element) -> bool {
        self.exponent_of(element).is_ok()
    }

    /// Multiplies two elements by adding their exponents modulo the order.
    pub fn mul(&self, a: Element, b: Element) -> Result<Element, FieldError> {
        let sum = u64::from(self.exponent_of(a)?) + u64::from(self.exponent_of(b)?);
        Ok(self.element_at(sum))
    }

    /// Multiplicative inverse of `a`.
    pub fn inverse(&self, a: Element) -> Result<Element, FieldError> {
        let exponent = u64::from(self.exponent_of(a)?);
        Ok(self.element_at(self.order() - exponent))
    }

    /// Iterates `(exponent, element)` pairs in exponent order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Element)> + '_ {
        self.exp.iter().enumerate().map(|(i, &e)| (i as u32, e))
    }
}

impl fmt::Debug for LogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogTable")
            .field("params", &self.params)
            .field("len", &self.exp.len())
            .finish()
    }
}

/// Folds every set bit `s` of `pol` into the sum of `table[s mod len]`.
///
/// While the table holds at least `degree_index(pol)` entries, `table[s]` is
/// `x^s` already reduced, so this is reduction modulo the defining polynomial.
fn reduce_against_table(table: &[Element], pol: Poly) -> Element {
    let len = table.len();
    let mut result = 0;
    let mut bits = pol;
    while bits != 0 {
        let s = bits.trailing_zeros() as usize;
        result ^= table[s % len];
        bits &= bits - 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_DEFINING_POLY;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn default_table() -> LogTable {
        LogTable::build(FieldParams::default()).expect("default polynomial is primitive")
    }

    #[test]
    fn leading_entries_are_monomials_then_basis() {
        let table = default_table();
        assert_eq!(table.len(), 65535);
        for i in 0..16u64 {
            assert_eq!(table.element_at(i), 1 << i);
        }
        assert_eq!(table.element_at(16), 0b0010_1000_0100_0001);
        assert_eq!(table.element_at(17), 0b0101_0000_1000_0010);
        assert_eq!(table.element_at(65535), IDENTITY);
    }

    #[test]
    fn matches_direct_polynomial_reduction() {
        let table = default_table();
        let mut direct: Poly = 1;
        for (exponent, element) in table.iter() {
            assert_eq!(
                Poly::from(element),
                direct,
                "table diverges from x^{exponent} mod P"
            );
            direct = poly::mul_mod(direct, 2, DEFAULT_DEFINING_POLY);
        }
        assert_eq!(direct, 1);
    }

    #[test]
    fn every_nonzero_element_round_trips() {
        let table = default_table();
        for element in 1..=65535u32 {
            let exponent = table.exponent_of(element).expect("nonzero element present");
            assert_eq!(table.element_at(u64::from(exponent)), element);
        }
    }

    #[test]
    fn zero_and_wide_values_are_not_elements() {
        let table = default_table();
        assert_eq!(
            table.exponent_of(0),
            Err(FieldError::ElementNotFound { element: 0 })
        );
        assert!(table.exponent_of(1 << 16).is_err());
        assert!(table.mul(0, 5).is_err());
        assert!(!table.contains(u32::MAX));
    }

    #[test]
    fn table_mul_matches_direct_mul() {
        let table = default_table();
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..512 {
            let a = (rng.next_u32() & 0xffff).max(1);
            let b = (rng.next_u32() & 0xffff).max(1);
            let expected = poly::mul_mod(a.into(), b.into(), DEFAULT_DEFINING_POLY);
            assert_eq!(u64::from(table.mul(a, b).unwrap()), expected);
            assert_eq!(table.mul(a, b), table.mul(b, a));
        }
    }

    #[test]
    fn inverse_multiplies_to_identity() {
        let table = default_table();
        for a in [1u32, 2, 3, 0x2841, 0xffff] {
            let inv = table.inverse(a).unwrap();
            assert_eq!(table.mul(a, inv).unwrap(), IDENTITY);
        }
    }

    #[test]
    fn small_primitive_fields_build() {
        for pol in [0b111u64, 0b1011, 0b10011, 0x11d] {
            let params = FieldParams::new(pol).unwrap();
            let table = LogTable::build(params).unwrap();
            assert_eq!(table.len() as u64, params.order());
        }
    }

    #[test]
    fn non_primitive_polynomials_are_rejected() {
        // x^4+x^3+x^2+x+1 is irreducible with ord(x) = 5; the AES modulus has
        // ord(x) = 51; x^4+1 = (x+1)^4 is reducible.
        for pol in [0b11111u64, 0x11b, 0b10001] {
            let params = FieldParams::new(pol).unwrap();
            assert!(
                matches!(
                    LogTable::build(params),
                    Err(FieldError::TableInconsistent { .. })
                ),
                "{pol:#b} should be rejected"
            );
        }
    }

    #[test]
    fn debug_output_is_compact() {
        let table = LogTable::build(FieldParams::new(0b1011).unwrap()).unwrap();
        let rendered = format!("{table:?}");
        assert!(rendered.contains("len: 7"));
    }
}
