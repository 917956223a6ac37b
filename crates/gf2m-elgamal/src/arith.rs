//! Integer arithmetic modulo the group order.

use crate::error::SignatureError;

/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
pub fn egcd(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i128, 0i128);
    let (mut old_y, mut y) = (0i128, 1i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }
    (old_r, old_x, old_y)
}

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns `t` in `[0, n)` with `z * t ≡ 1 (mod n)`.
///
/// Fails with [`SignatureError::InvalidInverse`] when `gcd(z, n) != 1` or the
/// modulus is below 2.
pub fn mod_inverse(z: u64, n: u64) -> Result<u64, SignatureError> {
    let invalid = SignatureError::InvalidInverse {
        value: z,
        modulus: n,
    };
    if n < 2 {
        return Err(invalid);
    }
    let modulus = i128::from(n);
    let (g, x, _) = egcd(i128::from(z) % modulus, modulus);
    if g != 1 {
        return Err(invalid);
    }
    Ok(x.rem_euclid(modulus) as u64)
}
