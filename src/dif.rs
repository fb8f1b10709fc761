// src/dif.rs

use crate::common::Direction;
use crate::types::{ComplexFixed, Fixed};

/// Fractional bits of the rotation coefficients (Q12).
pub(crate) const TWIDDLE_FRAC: u32 = 12;

const fn rot(re: i32, im: i32) -> ComplexFixed<TWIDDLE_FRAC> {
    ComplexFixed::new(Fixed::from_bits(re), Fixed::from_bits(im))
}

/// Base rotations `cos(pi/2^k) - i*sin(pi/2^k)` for `k = 0..14`, rounded to
/// Q12. Entry `k` seeds the angle recurrence of one butterfly stage; the
/// per-butterfly twiddle factors are generated by repeated complex
/// multiplication instead of a full lookup table.
pub(crate) const ROTATIONS: [ComplexFixed<TWIDDLE_FRAC>; 14] = [
    rot(-4096, 0),
    rot(0, -4096),
    rot(2896, -2896),
    rot(3784, -1567),
    rot(4017, -799),
    rot(4076, -401),
    rot(4091, -201),
    rot(4095, -101),
    rot(4096, -50),
    rot(4096, -25),
    rot(4096, -13),
    rot(4096, -6),
    rot(4096, -3),
    rot(4096, -2),
];

/// Radix-2 Decimation-in-Frequency FFT core over split real/imaginary
/// slices.
///
/// Runs the `log_n` butterfly stages followed by the bit-reversal
/// reordering. Validation and the forward `1/N` scaling live in the public
/// wrapper; both slices must already have length `1 << log_n`.
pub(crate) fn radix_2_dif_fft_core<const FRAC: u32>(
    real: &mut [Fixed<FRAC>],
    imag: &mut [Fixed<FRAC>],
    log_n: u32,
    direction: Direction,
) {
    let n = real.len();

    // 1. Butterfly stages, widest block first
    let mut block = n;
    for stage in 1..=log_n {
        let mut w = ROTATIONS[(log_n - stage) as usize];
        // The conjugate flips the rotation direction, which is the only
        // difference between the forward and inverse butterfly networks.
        if direction == Direction::Inverse {
            w = w.conj();
        }

        let half = block >> 1;
        let mut u: ComplexFixed<TWIDDLE_FRAC> =
            ComplexFixed::new(Fixed::from_int(1), Fixed::zero());

        for j in 0..half {
            let mut i = j;
            while i < n {
                let io = i + half;
                let a = ComplexFixed::new(real[i], imag[i]);
                let b = ComplexFixed::new(real[io], imag[io]);

                // Sum branch stays unrotated; the difference branch is
                // rotated by the current twiddle factor.
                let p = a + b;
                let q = (a - b) * u;

                real[i] = p.re;
                imag[i] = p.im;
                real[io] = q.re;
                imag[io] = q.im;

                i += block;
            }
            u = u * w;
        }

        block = half;
    }

    // 2. Bit-reverse permutation back to natural order
    bit_reverse_permute(real, imag);
}

/// In-place bit-reversed reordering of both component slices, using an
/// incrementing bit-reversed counter with carry propagation from the top
/// mask `n/2`. O(n) work, O(1) extra storage.
pub(crate) fn bit_reverse_permute<const FRAC: u32>(
    real: &mut [Fixed<FRAC>],
    imag: &mut [Fixed<FRAC>],
) {
    let n = real.len();
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        if i < j {
            real.swap(i, j);
            imag.swap(i, j);
        }
    }
}

#[cfg(test)]
#[path = "dif_tests.rs"]
mod tests;
