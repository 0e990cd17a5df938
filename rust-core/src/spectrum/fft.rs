//! Radix-2 decimation-in-time FFT
//!
//! Recursive Cooley-Tukey transform over a strided view of one complex
//! buffer. The even/odd split is expressed through the stride, so no
//! separate bit-reversal pass is needed.

use crate::error::FilterError;
use num_complex::Complex64;
use std::f64::consts::PI;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// A strided view into a complex buffer: element `i` lives at
/// `offset + i * step`, for `i` in `0..size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stride {
    offset: usize,
    step: usize,
    size: usize,
}

impl Stride {
    /// View covering a whole buffer of `size` elements
    fn whole(size: usize) -> Self {
        Self {
            offset: 0,
            step: 1,
            size,
        }
    }

    /// Buffer index of logical element `i`
    #[inline]
    fn index(&self, i: usize) -> usize {
        self.offset + i * self.step
    }

    /// Even-indexed half of this view
    fn evens(&self) -> Self {
        Self {
            offset: self.offset,
            step: self.step * 2,
            size: self.size / 2,
        }
    }

    /// Odd-indexed half of this view
    fn odds(&self) -> Self {
        Self {
            offset: self.offset + self.step,
            step: self.step * 2,
            size: self.size / 2,
        }
    }
}

/// Transform the elements addressed by `view` in place
///
/// `view.size` must be a power of two and every addressed index must be
/// inside `buffer`.
fn transform_recursive(buffer: &mut [Complex64], view: Stride) {
    if view.size == 1 {
        return;
    }

    let evens = view.evens();
    let odds = view.odds();
    transform_recursive(buffer, evens);
    transform_recursive(buffer, odds);

    // Combine into a scratch buffer first, the butterflies read both halves
    let half = view.size / 2;
    let mut combined = vec![ZERO; view.size];
    for i in 0..half {
        let twiddle = Complex64::from_polar(1.0, -2.0 * PI * i as f64 / view.size as f64);
        let p = buffer[evens.index(i)];
        let q = twiddle * buffer[odds.index(i)];
        combined[i] = p + q;
        combined[i + half] = p - q;
    }

    for (i, value) in combined.into_iter().enumerate() {
        buffer[view.index(i)] = value;
    }
}

/// Length a transform of `len` samples is padded to
///
/// The next power of two at or above `len` (`len` itself when it already
/// is one).
pub fn padded_len(len: usize) -> usize {
    len.next_power_of_two()
}

/// Swap the real and imaginary part of every element
pub fn flip_all(buffer: &mut [Complex64]) {
    for value in buffer.iter_mut() {
        *value = Complex64::new(value.im, value.re);
    }
}

/// Forward transform of a buffer whose length is a power of two
///
/// # Errors
/// `FilterError::Length` if the buffer length is not a power of two
pub fn transform_in_place(buffer: &mut [Complex64]) -> Result<(), FilterError> {
    if !buffer.len().is_power_of_two() {
        return Err(FilterError::Length(buffer.len()));
    }

    transform_recursive(buffer, Stride::whole(buffer.len()));
    Ok(())
}

/// Forward FFT of a real signal
///
/// The signal is zero-padded at the end up to `padded_len(samples.len())`.
/// The padded length is not recorded, callers that need the original
/// length back must truncate after the inverse transform.
///
/// # Arguments
/// * `samples` - Real input signal, should not be empty
///
/// # Returns
/// Complex spectrum with a power-of-two length
pub fn forward_transform(samples: &[f64]) -> Vec<Complex64> {
    let size = padded_len(samples.len());

    let mut buffer = Vec::with_capacity(size);
    buffer.extend(samples.iter().map(|&s| Complex64::new(s, 0.0)));
    buffer.resize(size, ZERO);

    transform_recursive(&mut buffer, Stride::whole(size));
    buffer
}

/// Inverse FFT back to a real signal
///
/// Uses the swap trick: flipping real/imaginary parts before and after a
/// forward transform conjugates its input and output, which turns it into
/// an inverse transform up to the 1/N scale.
///
/// # Arguments
/// * `spectrum` - Complex spectrum, consumed and transformed in place
///
/// # Returns
/// The real part of every element; residual imaginary parts are dropped
///
/// # Errors
/// `FilterError::Length` if the spectrum length is not a power of two
pub fn inverse_transform(mut spectrum: Vec<Complex64>) -> Result<Vec<f64>, FilterError> {
    let size = spectrum.len();
    if !size.is_power_of_two() {
        return Err(FilterError::Length(size));
    }

    flip_all(&mut spectrum);
    transform_recursive(&mut spectrum, Stride::whole(size));

    let n = size as f64;
    for value in spectrum.iter_mut() {
        *value /= n;
    }

    flip_all(&mut spectrum);

    Ok(spectrum.into_iter().map(|c| c.re).collect())
}

/// Direct O(N^2) DFT, the reference the FFT is checked against
pub fn dft_naive(input: &[Complex64]) -> Vec<Complex64> {
    let size = input.len();

    (0..size)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(n, &x)| {
                    // Reduce k*n first so the angle stays small
                    let phase = -2.0 * PI * ((k * n) % size) as f64 / size as f64;
                    x * Complex64::from_polar(1.0, phase)
                })
                .sum()
        })
        .collect()
}
