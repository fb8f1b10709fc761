// src/transform.rs

use crate::common::{Direction, FftError};
use crate::dif::radix_2_dif_fft_core;
use crate::types::Fixed;

/// Smallest supported transform length, as a base-2 logarithm (N = 4).
pub const MIN_LOG_N: u32 = 2;
/// Largest supported transform length, as a base-2 logarithm (N = 16384).
pub const MAX_LOG_N: u32 = 14;

/// In-place radix-2 FFT over two parallel component slices.
///
/// `real` and `imag` jointly hold N complex samples and are overwritten
/// with the transform result in natural order. `log_n` is the base-2
/// logarithm of N; the slice lengths must match it exactly.
///
/// `Direction::Forward` scales the result by `1/N`; `Direction::Inverse`
/// applies no scaling. The asymmetry mirrors the reference convention, so
/// `inverse(forward(x))` reproduces `x` up to fixed-point rounding.
///
/// All parameters are checked before the first write: on error the buffers
/// are returned untouched.
pub fn transform<const FRAC: u32>(
    real: &mut [Fixed<FRAC>],
    imag: &mut [Fixed<FRAC>],
    log_n: u32,
    direction: Direction,
) -> Result<(), FftError> {
    if real.len() != imag.len() {
        return Err(FftError::SizeMismatch);
    }
    if !(MIN_LOG_N..=MAX_LOG_N).contains(&log_n) {
        return Err(FftError::UnsupportedLength);
    }

    let n = real.len();
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    if n != 1usize << log_n {
        return Err(FftError::LengthMismatch);
    }

    #[cfg(feature = "verbose-logging")]
    log::trace!("radix-2 dif fft: n={}, log_n={}, {:?}", n, log_n, direction);

    radix_2_dif_fft_core(real, imag, log_n, direction);

    if direction == Direction::Forward {
        for value in real.iter_mut() {
            *value = value.scale_pow2(log_n);
        }
        for value in imag.iter_mut() {
            *value = value.scale_pow2(log_n);
        }
    }

    Ok(())
}

/// Forward transform (signal to spectrum), scaled by `1/N`.
pub fn forward<const FRAC: u32>(
    real: &mut [Fixed<FRAC>],
    imag: &mut [Fixed<FRAC>],
    log_n: u32,
) -> Result<(), FftError> {
    transform(real, imag, log_n, Direction::Forward)
}

/// Inverse transform (spectrum to signal), unscaled.
pub fn inverse<const FRAC: u32>(
    real: &mut [Fixed<FRAC>],
    imag: &mut [Fixed<FRAC>],
    log_n: u32,
) -> Result<(), FftError> {
    transform(real, imag, log_n, Direction::Inverse)
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
