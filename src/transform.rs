//! Forward and inverse entry points on [`FftConfig`].
//!
//! Forward transforms produce the unnormalised spectrum. Inverse transforms
//! divide the provider's factor of `N` back out, so
//! `inverse(forward(x)) == x` up to rounding for either layout.

use crate::codec;
use crate::config::FftConfig;
use crate::error::{try_zeroed, FftError};
use crate::provider::TransformProvider;

impl<P: TransformProvider<f32>> FftConfig<P> {
    /// Real forward transform into magnitude/phase.
    ///
    /// `input` must hold `len()` samples; `magnitude` and `phase` must each
    /// hold `half_len()` values.
    pub fn forward(
        &mut self,
        input: &[f32],
        magnitude: &mut [f32],
        phase: &mut [f32],
    ) -> Result<(), FftError> {
        let (len, half) = (self.len(), self.half_len());
        let state = self.state_mut()?;
        if input.len() != len || magnitude.len() != half || phase.len() != half {
            return Err(FftError::LengthMismatch);
        }
        state
            .provider
            .forward(input, &mut state.scratch_re, &mut state.scratch_im)?;
        codec::split_to_polar(&state.scratch_re, &state.scratch_im, magnitude, phase);
        Ok(())
    }

    /// Real forward transform into the interleaved layout
    /// `[dc, nyquist, re1, im1, ...]` of `len()` values.
    pub fn forward_interleaved(&mut self, input: &[f32], out: &mut [f32]) -> Result<(), FftError> {
        let len = self.len();
        let state = self.state_mut()?;
        if input.len() != len || out.len() != len {
            return Err(FftError::LengthMismatch);
        }
        state
            .provider
            .forward(input, &mut state.scratch_re, &mut state.scratch_im)?;
        codec::interleave(&state.scratch_re, &state.scratch_im, out);
        Ok(())
    }

    /// Inverse transform from magnitude/phase back to `len()` samples.
    pub fn inverse(
        &mut self,
        magnitude: &[f32],
        phase: &[f32],
        out: &mut [f32],
    ) -> Result<(), FftError> {
        let (len, half) = (self.len(), self.half_len());
        let state = self.state_mut()?;
        if out.len() != len || magnitude.len() != half || phase.len() != half {
            return Err(FftError::LengthMismatch);
        }
        codec::polar_to_split(magnitude, phase, &mut state.scratch_re, &mut state.scratch_im);
        state
            .provider
            .inverse(&state.scratch_re, &state.scratch_im, out)?;
        normalize(out, len);
        Ok(())
    }

    /// Inverse transform from the interleaved layout written by
    /// [`FftConfig::forward_interleaved`].
    pub fn inverse_interleaved(&mut self, input: &[f32], out: &mut [f32]) -> Result<(), FftError> {
        let len = self.len();
        let state = self.state_mut()?;
        if input.len() != len || out.len() != len {
            return Err(FftError::LengthMismatch);
        }
        codec::deinterleave(input, &mut state.scratch_re, &mut state.scratch_im);
        state
            .provider
            .inverse(&state.scratch_re, &state.scratch_im, out)?;
        normalize(out, len);
        Ok(())
    }

    /// Zero-pad `kernel` to `len()` and write its interleaved spectrum into
    /// `spectrum`, ready for [`FftConfig::filter_convolve`].
    pub fn transform_kernel(&mut self, kernel: &[f32], spectrum: &mut [f32]) -> Result<(), FftError> {
        if !self.is_initialized() {
            return Err(FftError::NullConfig);
        }
        if kernel.is_empty() {
            return Err(FftError::InvalidLength);
        }
        let len = self.len();
        if kernel.len() > len || spectrum.len() != len {
            return Err(FftError::LengthMismatch);
        }
        let mut padded: alloc::vec::Vec<f32> = try_zeroed(len)?;
        padded[..kernel.len()].copy_from_slice(kernel);
        self.forward_interleaved(&padded, spectrum)
    }
}

fn normalize(out: &mut [f32], len: usize) {
    let scale = 1.0 / len as f32;
    for x in out.iter_mut() {
        *x *= scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn signal(n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| libm::sinf(0.3 * i as f32) + 0.5 * libm::cosf(1.7 * i as f32))
            .collect()
    }

    #[test]
    fn polar_roundtrip() {
        for &n in &[2usize, 4, 8, 256] {
            let x = signal(n);
            let mut config = FftConfig::new(n).unwrap();
            let mut mag = vec![0.0; n / 2];
            let mut phase = vec![0.0; n / 2];
            config.forward(&x, &mut mag, &mut phase).unwrap();
            let mut y = vec![0.0; n];
            config.inverse(&mag, &phase, &mut y).unwrap();
            for (a, b) in x.iter().zip(y.iter()) {
                assert!((a - b).abs() < 1e-4, "n={} {} vs {}", n, a, b);
            }
        }
    }

    #[test]
    fn interleaved_roundtrip() {
        let n = 64;
        let x = signal(n);
        let mut config = FftConfig::new(n).unwrap();
        let mut spec = vec![0.0; n];
        config.forward_interleaved(&x, &mut spec).unwrap();
        let mut y = vec![0.0; n];
        config.inverse_interleaved(&spec, &mut y).unwrap();
        for (a, b) in x.iter().zip(y.iter()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn impulse_has_flat_magnitude() {
        let mut x = [0.0f32; 8];
        x[0] = 1.0;
        let mut config = FftConfig::new(8).unwrap();
        let mut mag = [0.0f32; 4];
        let mut phase = [0.0f32; 4];
        config.forward(&x, &mut mag, &mut phase).unwrap();
        // bin 0 folds DC and Nyquist: hypot(1, 1)
        assert!((mag[0] - core::f32::consts::SQRT_2).abs() < 1e-6);
        for &m in &mag[1..] {
            assert!((m - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn dc_and_nyquist_share_slot_zero() {
        let x = [1.0f32, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        let mut config = FftConfig::new(8).unwrap();
        let mut spec = [0.0f32; 8];
        config.forward_interleaved(&x, &mut spec).unwrap();
        assert!(spec[0].abs() < 1e-6);
        assert!((spec[1] - 8.0).abs() < 1e-5);
        assert!(spec[2..].iter().all(|v| v.abs() < 1e-5));
    }

    #[test]
    fn length_mismatch_is_reported() {
        let mut config = FftConfig::new(8).unwrap();
        let mut mag = [0.0f32; 4];
        let mut phase = [0.0f32; 3];
        assert_eq!(
            config.forward(&[0.0; 8], &mut mag, &mut phase),
            Err(FftError::LengthMismatch)
        );
        let mut out = [0.0f32; 8];
        assert_eq!(
            config.inverse_interleaved(&[0.0; 6], &mut out),
            Err(FftError::LengthMismatch)
        );
    }

    #[test]
    fn released_config_rejects_transforms() {
        let mut config = FftConfig::new(4).unwrap();
        config.release().unwrap();
        let mut out = [0.0f32; 4];
        assert_eq!(
            config.forward_interleaved(&[1.0, 2.0, 3.0, 4.0], &mut out),
            Err(FftError::NullConfig)
        );
        assert_eq!(
            config.transform_kernel(&[1.0], &mut out),
            Err(FftError::NullConfig)
        );
    }

    #[test]
    fn transform_kernel_pads_with_zeros() {
        let mut config = FftConfig::new(8).unwrap();
        let mut from_kernel = [0.0f32; 8];
        config.transform_kernel(&[1.0, 0.5], &mut from_kernel).unwrap();
        let mut from_padded = [0.0f32; 8];
        config
            .forward_interleaved(&[1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], &mut from_padded)
            .unwrap();
        assert_eq!(from_kernel, from_padded);
        assert_eq!(
            config.transform_kernel(&[0.0; 9], &mut from_kernel),
            Err(FftError::LengthMismatch)
        );
    }
}
