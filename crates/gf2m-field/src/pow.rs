//! Square-and-multiply exponentiation on top of the table multiplier.

use crate::error::FieldError;
use crate::poly::degree_index;
use crate::table::{Element, LogTable, IDENTITY};

impl LogTable {
    /// Computes `base^exponent`.
    ///
    /// Scans `exponent` from its most significant bit down: the leading one
    /// seeds the accumulator with `base`, then every following bit squares the
    /// accumulator and, when set, multiplies in `base`. All products go
    /// through [`LogTable::mul`]. `base^0` is the identity.
    pub fn pow(&self, base: Element, exponent: u64) -> Result<Element, FieldError> {
        self.exponent_of(base)?;
        if exponent == 0 {
            return Ok(IDENTITY);
        }
        let mut acc = base;
        for bit in (0..degree_index(exponent) - 1).rev() {
            acc = self.mul(acc, acc)?;
            if (exponent >> bit) & 1 == 1 {
                acc = self.mul(acc, base)?;
            }
        }
        Ok(acc)
    }

    /// Checks that `α^order` is the identity.
    pub fn check_order(&self) -> Result<(), FieldError> {
        let order = self.order();
        let closure = self.pow(self.generator(), order)?;
        if closure != IDENTITY {
            return Err(FieldError::TableInconsistent {
                reason: format!("α^{order} = {closure:#x}, expected 1"),
            });
        }
        Ok(())
    }
}
