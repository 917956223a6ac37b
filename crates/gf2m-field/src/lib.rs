//! Table-driven arithmetic in GF(2^m).
//!
//! This crate provides:
//! - Binary polynomial arithmetic on packed `u64` bit patterns.
//! - Validated field parameters (base 2, degree, defining polynomial).
//! - A discrete-log table mapping exponents of `α = x` to field elements,
//!   with a dense reverse index for constant-time lookups.
//! - Table-based multiplication, inversion and square-and-multiply
//!   exponentiation.
//!
//! Tables are immutable once built and may be shared freely between threads.
//! Nothing here is constant-time; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod params;
pub mod poly;
mod pow;
mod table;

pub use crate::error::FieldError;
pub use crate::params::{FieldParams, DEFAULT_DEFINING_POLY, MAX_DEGREE, MIN_DEGREE};
pub use crate::poly::Poly;
pub use crate::table::{Element, LogTable, GENERATOR, IDENTITY};
