//! Binary polynomial arithmetic over GF(2).
//!
//! A polynomial is packed into a `u64`: bit `i` is the coefficient of `x^i`.
//! Addition and subtraction coincide and are plain XOR, so every operation
//! here is built from shifts and XORs only.

/// Packed binary polynomial.
pub type Poly = u64;

/// Returns the bit length of `x`: the smallest `b` with `2^b > x`.
///
/// This is the polynomial's degree plus one, and `0` for the zero polynomial.
#[inline]
pub const fn degree_index(x: Poly) -> u32 {
    u64::BITS - x.leading_zeros()
}

/// Returns the degree of `x`, or `None` for the zero polynomial.
#[inline]
pub const fn degree(x: Poly) -> Option<u32> {
    match degree_index(x) {
        0 => None,
        bits => Some(bits - 1),
    }
}

/// Carry-less product of `a` and `b`. No reduction is applied.
///
/// The set bits of the smaller operand select shifted copies of the larger
/// one. The product must fit in 64 bits.
pub fn mul(a: Poly, b: Poly) -> Poly {
    let (small, large) = if a > b { (b, a) } else { (a, b) };
    debug_assert!(
        degree_index(small) + degree_index(large) <= u64::BITS + 1,
        "carry-less product overflows 64 bits"
    );
    let mut product = 0;
    let mut bits = small;
    while bits != 0 {
        let shift = bits.trailing_zeros();
        product ^= large << shift;
        bits &= bits - 1;
    }
    product
}

/// Remainder of `a` divided by `b` over GF(2).
///
/// Long division with XOR: while `a` is at least as long as `b`, cancel its
/// leading term with a shifted copy of `b`.
///
/// # Panics
/// Panics if `b` is the zero polynomial.
pub fn rem(mut a: Poly, b: Poly) -> Poly {
    assert!(b != 0, "polynomial division by zero");
    let divisor_bits = degree_index(b);
    while degree_index(a) >= divisor_bits {
        a ^= b << (degree_index(a) - divisor_bits);
    }
    a
}

/// Direct field product: `rem(mul(a, b), modulus)`.
///
/// Used as the reference multiplier the discrete-log table is checked against.
pub fn mul_mod(a: Poly, b: Poly, modulus: Poly) -> Poly {
    rem(mul(a, b), modulus)
}
