//! FFT-based linear convolution.
//!
//! Both inputs are zero-padded to a power of two at least `L1 + L2 - 1` long,
//! so the circular product computed by the transform equals the linear
//! convolution and the first `L1 + L2 - 1` output samples are exact.
//! Spectra are kept in the interleaved layout to avoid the rounding a
//! magnitude/phase detour would add.
//!
//! [`filter_convolve`] and [`FilterKernel`] accept a kernel that was
//! transformed ahead of time, so a fixed filter pays for its forward
//! transform once.

use alloc::vec::Vec;

use crate::codec;
use crate::config::FftConfig;
use crate::error::{try_zeroed, FftError};
use crate::provider::{TransformProvider, MIN_LEN};

/// Number of samples in the linear convolution of lengths `l1` and `l2`.
///
/// # Errors
/// [`FftError::InvalidLength`] if either length is zero or the sum overflows.
pub fn output_len(l1: usize, l2: usize) -> Result<usize, FftError> {
    if l1 == 0 || l2 == 0 {
        return Err(FftError::InvalidLength);
    }
    l1.checked_add(l2 - 1).ok_or(FftError::InvalidLength)
}

/// Smallest power-of-two transform length that holds the linear convolution
/// of lengths `l1` and `l2` without wraparound.
pub fn padded_len(l1: usize, l2: usize) -> Result<usize, FftError> {
    output_len(l1, l2)?
        .checked_next_power_of_two()
        .map(|n| n.max(MIN_LEN))
        .ok_or(FftError::InvalidLength)
}

/// Linearly convolve `in1` with `in2` into `dest`.
///
/// A transient [`FftConfig`] of [`padded_len`] samples is created and dropped
/// within the call, so concurrent calls from different threads are
/// independent.
///
/// # Errors
/// - [`FftError::InvalidLength`] if either input is empty.
/// - [`FftError::LengthMismatch`] if `dest.len() != in1.len() + in2.len() - 1`.
/// - [`FftError::Allocation`] if the transient buffers cannot be reserved.
///
/// # Example
/// ```
/// let mut dest = [0.0f32; 5];
/// audiofft::convolve(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5], &mut dest).unwrap();
/// assert!((dest[2] - 2.5).abs() < 1e-5);
/// ```
pub fn convolve(in1: &[f32], in2: &[f32], dest: &mut [f32]) -> Result<(), FftError> {
    let n = padded_len(in1.len(), in2.len())?;
    if dest.len() != output_len(in1.len(), in2.len())? {
        return Err(FftError::LengthMismatch);
    }
    #[cfg(feature = "verbose-logging")]
    log::debug!(
        "convolve: l1={} l2={} fft_len={}",
        in1.len(),
        in2.len(),
        n
    );
    let mut config = FftConfig::new(n)?;
    config.convolve(in1, in2, dest)
}

/// Allocating wrapper around [`convolve`].
pub fn convolve_vec(in1: &[f32], in2: &[f32]) -> Result<Vec<f32>, FftError> {
    let mut dest: Vec<f32> = try_zeroed(output_len(in1.len(), in2.len())?)?;
    convolve(in1, in2, &mut dest)?;
    Ok(dest)
}

/// Convolve `in1` with a kernel of `kernel_len` samples whose interleaved
/// spectrum is `kernel_spectrum`.
///
/// The spectrum length fixes the transform length; it must be a power of two
/// no shorter than `in1.len() + kernel_len - 1`.
///
/// # Errors
/// - [`FftError::InvalidLength`] if `in1` is empty or `kernel_len` is zero.
/// - [`FftError::LengthMismatch`] if the spectrum length is not a usable
///   transform length, is too short for the result, or `dest` has the wrong
///   length.
pub fn filter_convolve(
    in1: &[f32],
    kernel_spectrum: &[f32],
    kernel_len: usize,
    dest: &mut [f32],
) -> Result<(), FftError> {
    output_len(in1.len(), kernel_len)?;
    let n = kernel_spectrum.len();
    if n < MIN_LEN || !n.is_power_of_two() {
        return Err(FftError::LengthMismatch);
    }
    let mut config = FftConfig::new(n)?;
    config.filter_convolve(in1, kernel_spectrum, kernel_len, dest)
}

impl<P: TransformProvider<f32>> FftConfig<P> {
    /// Linear convolution using this config's transform length, which must
    /// be at least `in1.len() + in2.len() - 1`.
    pub fn convolve(&mut self, in1: &[f32], in2: &[f32], dest: &mut [f32]) -> Result<(), FftError> {
        if !self.is_initialized() {
            return Err(FftError::NullConfig);
        }
        let out_len = output_len(in1.len(), in2.len())?;
        let n = self.len();
        if out_len > n || dest.len() != out_len {
            return Err(FftError::LengthMismatch);
        }
        let mut padded: Vec<f32> = try_zeroed(n)?;
        let mut spectrum: Vec<f32> = try_zeroed(n)?;
        let mut other: Vec<f32> = try_zeroed(n)?;

        padded[..in1.len()].copy_from_slice(in1);
        self.forward_interleaved(&padded, &mut spectrum)?;
        padded.fill(0.0);
        padded[..in2.len()].copy_from_slice(in2);
        self.forward_interleaved(&padded, &mut other)?;

        codec::multiply_interleaved(&mut spectrum, &other);
        self.inverse_interleaved(&spectrum, &mut padded)?;
        dest.copy_from_slice(&padded[..out_len]);
        Ok(())
    }

    /// Convolution against a kernel spectrum produced at this config's
    /// length (see [`FftConfig::transform_kernel`]).
    pub fn filter_convolve(
        &mut self,
        in1: &[f32],
        kernel_spectrum: &[f32],
        kernel_len: usize,
        dest: &mut [f32],
    ) -> Result<(), FftError> {
        if !self.is_initialized() {
            return Err(FftError::NullConfig);
        }
        let out_len = output_len(in1.len(), kernel_len)?;
        let n = self.len();
        if kernel_spectrum.len() != n || kernel_len > n || out_len > n || dest.len() != out_len {
            return Err(FftError::LengthMismatch);
        }
        let mut padded: Vec<f32> = try_zeroed(n)?;
        let mut spectrum: Vec<f32> = try_zeroed(n)?;

        padded[..in1.len()].copy_from_slice(in1);
        self.forward_interleaved(&padded, &mut spectrum)?;
        codec::multiply_interleaved(&mut spectrum, kernel_spectrum);
        self.inverse_interleaved(&spectrum, &mut padded)?;
        dest.copy_from_slice(&padded[..out_len]);
        Ok(())
    }
}

/// A filter kernel transformed once and applied to many signals.
///
/// The kernel is sized for signals of up to `max_signal_len` samples. The
/// stored spectrum is never mutated, so one kernel can be shared between
/// threads that each run their own transforms.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterKernel {
    spectrum: Vec<f32>,
    kernel_len: usize,
    max_signal_len: usize,
}

impl FilterKernel {
    /// Transform `kernel` at the padded length for `max_signal_len`-sample
    /// signals.
    pub fn new(kernel: &[f32], max_signal_len: usize) -> Result<Self, FftError> {
        let n = padded_len(max_signal_len, kernel.len())?;
        let mut config = FftConfig::new(n)?;
        let mut spectrum: Vec<f32> = try_zeroed(n)?;
        config.transform_kernel(kernel, &mut spectrum)?;
        Ok(Self {
            spectrum,
            kernel_len: kernel.len(),
            max_signal_len,
        })
    }

    /// Transform length the kernel was prepared for.
    pub fn fft_len(&self) -> usize {
        self.spectrum.len()
    }

    /// Number of taps in the original time-domain kernel.
    pub fn kernel_len(&self) -> usize {
        self.kernel_len
    }

    /// Longest signal [`FilterKernel::apply`] accepts without wraparound.
    pub fn max_signal_len(&self) -> usize {
        self.max_signal_len
    }

    /// Interleaved kernel spectrum.
    pub fn spectrum(&self) -> &[f32] {
        &self.spectrum
    }

    /// Length of the result of filtering a `signal_len`-sample signal.
    pub fn output_len(&self, signal_len: usize) -> Result<usize, FftError> {
        output_len(signal_len, self.kernel_len)
    }

    /// Filter `signal` into `dest` using a transient config.
    pub fn apply(&self, signal: &[f32], dest: &mut [f32]) -> Result<(), FftError> {
        filter_convolve(signal, &self.spectrum, self.kernel_len, dest)
    }

    /// Filter `signal` into `dest` with a caller-owned config of
    /// [`FilterKernel::fft_len`] samples, avoiding per-call planning.
    pub fn apply_with<P: TransformProvider<f32>>(
        &self,
        config: &mut FftConfig<P>,
        signal: &[f32],
        dest: &mut [f32],
    ) -> Result<(), FftError> {
        config.filter_convolve(signal, &self.spectrum, self.kernel_len, dest)
    }
}
