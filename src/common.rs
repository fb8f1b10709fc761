// src/common.rs

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    SizeMismatch,
    NotPowerOfTwo,
    UnsupportedLength,
    LengthMismatch,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Real and imaginary buffer sizes differ"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FftError::UnsupportedLength => write!(f, "Size must be between 4 and 16384 samples"),
            FftError::LengthMismatch => {
                write!(f, "Buffer size does not match the declared log2 length")
            }
        }
    }
}

/// Transform direction. `Forward` maps a signal to its spectrum and scales
/// the result by `1/N`; `Inverse` maps a spectrum back to a signal without
/// any scaling.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Inverse,
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
