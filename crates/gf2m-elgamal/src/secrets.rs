//! Random selection of private exponents and nonces.

use gf2m_field::FieldParams;
use rand::{CryptoRng, Rng, RngCore};

use crate::arith::gcd;

/// Draws signing secrets from a caller-provided RNG.
pub struct SecretSource<R: RngCore + CryptoRng> {
    rng: R,
}

impl<R: RngCore + CryptoRng> SecretSource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform private exponent in `1..=p-2`.
    pub fn private_exponent(&mut self, params: &FieldParams) -> u64 {
        self.rng.gen_range(1..=params.modulus() - 2)
    }

    /// Uniform nonce in `1..=p-2` coprime to `p - 1`, by rejection sampling.
    pub fn nonce(&mut self, params: &FieldParams) -> u64 {
        let group = params.modulus() - 1;
        loop {
            let candidate = self.rng.gen_range(1..=params.modulus() - 2);
            if gcd(candidate, group) == 1 {
                return candidate;
            }
        }
    }

    /// Returns the wrapped RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}
