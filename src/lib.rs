//! # audiofft - real FFT and fast convolution for audio buffers
//!
//! A small transform engine for single-precision audio: it turns time-domain
//! sample buffers into spectra and back, and uses that transform to compute
//! linear convolution in `O(n log n)`.
//!
//! ## Features
//!
//! - **Reusable configs**: an [`FftConfig`] is planned once per power-of-two
//!   length and reused for every transform of that length.
//! - **Two spectrum layouts**: magnitude/phase (`N/2` bins each) and
//!   interleaved real/imaginary (`N` values). DC and Nyquist are packed into
//!   bin 0, see [`codec`].
//! - **Fast convolution**: [`convolve`] for two signals, [`filter_convolve`]
//!   and [`FilterKernel`] for a kernel transformed ahead of time.
//! - **Pluggable provider**: any [`TransformProvider`] can back a config; the
//!   built-in [`Radix2Provider`] works for `f32` and `f64`.
//! - **`no_std` + `alloc`**: allocation failures surface as
//!   [`FftError::Allocation`] instead of aborting.
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for [`FftError`]
//! - `verbose-logging`: emit `log` records when configs are planned and
//!   convolutions are sized
//!
//! ## Example
//!
//! ```
//! use audiofft::FftConfig;
//!
//! let mut config = FftConfig::new(8).unwrap();
//! let input = [0.0f32, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
//! let mut mag = [0.0f32; 4];
//! let mut phase = [0.0f32; 4];
//! config.forward(&input, &mut mag, &mut phase).unwrap();
//!
//! let mut output = [0.0f32; 8];
//! config.inverse(&mag, &phase, &mut output).unwrap();
//! for (a, b) in input.iter().zip(output.iter()) {
//!     assert!((a - b).abs() < 1e-5);
//! }
//! ```
//!
//! ## Threading
//!
//! A config's scratch is mutated on every call, so each thread needs its own
//! config. [`convolve`] and [`filter_convolve`] create their configs per call
//! and can run concurrently; a [`FilterKernel`] is read-only and may be
//! shared.
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Minimal float trait and complex types used by the transform provider.
pub mod num;

/// Error type shared by all operations.
pub mod error;

/// Power-of-two real transform providers and twiddle planning.
pub mod provider;

/// Spectrum layout conversions.
pub mod codec;

/// Transform configuration lifecycle.
pub mod config;

/// Forward and inverse transforms on [`FftConfig`].
pub mod transform;

/// FFT-based linear convolution.
pub mod convolve;

pub use config::FftConfig;
pub use convolve::{convolve, convolve_vec, filter_convolve, padded_len, FilterKernel};
pub use error::FftError;
pub use num::{Complex, Complex32, Complex64, Float};
pub use provider::{FftPlanner, Radix2Provider, TransformProvider};
