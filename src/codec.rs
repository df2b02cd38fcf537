//! Conversions between the provider's packed split-complex bins and the two
//! public spectrum layouts.
//!
//! Bin 0 of the packed layout holds DC in its real slot and Nyquist in its
//! imaginary slot. Both public layouts keep that pairing as-is:
//!
//! - magnitude/phase: `magnitude[0] = hypot(dc, nyquist)` and
//!   `phase[0] = atan2(nyquist, dc)`, i.e. bin 0 is treated like any other
//!   bin, which makes the polar round trip exact up to rounding;
//! - interleaved: `[dc, nyquist, re1, im1, re2, im2, ...]`.
//!
//! All functions expect slices already validated by the caller.

use libm::{atan2f, cosf, sinf, sqrtf};

/// Packed split bins to magnitude/phase.
pub fn split_to_polar(re: &[f32], im: &[f32], magnitude: &mut [f32], phase: &mut [f32]) {
    debug_assert!(re.len() == im.len() && re.len() == magnitude.len());
    debug_assert_eq!(magnitude.len(), phase.len());
    for (((&r, &i), mag), ph) in re
        .iter()
        .zip(im.iter())
        .zip(magnitude.iter_mut())
        .zip(phase.iter_mut())
    {
        *mag = sqrtf(r * r + i * i);
        *ph = atan2f(i, r);
    }
}

/// Magnitude/phase back to packed split bins.
pub fn polar_to_split(magnitude: &[f32], phase: &[f32], re: &mut [f32], im: &mut [f32]) {
    debug_assert!(magnitude.len() == phase.len() && magnitude.len() == re.len());
    debug_assert_eq!(re.len(), im.len());
    for (((&mag, &ph), r), i) in magnitude
        .iter()
        .zip(phase.iter())
        .zip(re.iter_mut())
        .zip(im.iter_mut())
    {
        *r = mag * cosf(ph);
        *i = mag * sinf(ph);
    }
}

/// Packed split bins to `[re0, im0, re1, im1, ...]`.
pub fn interleave(re: &[f32], im: &[f32], out: &mut [f32]) {
    debug_assert_eq!(re.len(), im.len());
    debug_assert_eq!(out.len(), 2 * re.len());
    for ((pair, &r), &i) in out.chunks_exact_mut(2).zip(re.iter()).zip(im.iter()) {
        pair[0] = r;
        pair[1] = i;
    }
}

/// `[re0, im0, re1, im1, ...]` to packed split bins.
pub fn deinterleave(input: &[f32], re: &mut [f32], im: &mut [f32]) {
    debug_assert_eq!(re.len(), im.len());
    debug_assert_eq!(input.len(), 2 * re.len());
    for ((pair, r), i) in input.chunks_exact(2).zip(re.iter_mut()).zip(im.iter_mut()) {
        *r = pair[0];
        *i = pair[1];
    }
}

/// Multiply two interleaved spectra bin by bin, accumulating into `acc`.
///
/// DC and Nyquist share slot 0 but are independent real values, so they are
/// multiplied separately; every other bin is a full complex product.
pub fn multiply_interleaved(acc: &mut [f32], other: &[f32]) {
    debug_assert_eq!(acc.len(), other.len());
    if acc.len() < 2 {
        return;
    }
    acc[0] *= other[0];
    acc[1] *= other[1];
    for (a, b) in acc[2..].chunks_exact_mut(2).zip(other[2..].chunks_exact(2)) {
        let (ar, ai) = (a[0], a[1]);
        let (br, bi) = (b[0], b[1]);
        a[0] = ar * br - ai * bi;
        a[1] = ar * bi + ai * br;
    }
}
