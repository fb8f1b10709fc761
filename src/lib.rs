#![no_std]

// Enables the standard library for tests or when the `std` feature is on,
// so 'cargo test' works and `std::error::Error` resolves under `std`.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod transform;
pub mod types;

mod dif;

pub use common::{Direction, FftError};
pub use transform::{forward, inverse, transform, MAX_LOG_N, MIN_LOG_N};
pub use types::{ComplexFixed, Fixed};
