//! Reusable transform context bound to one power-of-two length.
//!
//! An [`FftConfig`] owns its provider state and the split scratch buffers
//! used while a transform runs. It is either initialised or released; every
//! operation on a released config fails with [`FftError::NullConfig`].
//! Dropping a config releases it as well, so explicit teardown is optional.
//!
//! Scratch is mutated by every call, hence all operations take `&mut self`.
//! Give each thread its own config; independent configs share nothing except
//! read-only twiddle tables handed out by a [`FftPlanner`].

use alloc::vec::Vec;

use crate::error::{try_zeroed, FftError};
use crate::provider::{FftPlanner, Radix2Provider, TransformProvider, MIN_LEN};

/// Provider state plus scratch, present only while the config is live.
pub(crate) struct ConfigState<P> {
    pub(crate) provider: P,
    pub(crate) scratch_re: Vec<f32>,
    pub(crate) scratch_im: Vec<f32>,
}

/// Transform configuration for real `f32` buffers of a fixed length.
pub struct FftConfig<P: TransformProvider<f32> = Radix2Provider<f32>> {
    len: usize,
    half_len: usize,
    state: Option<ConfigState<P>>,
}

fn validate_len(len: usize) -> Result<(), FftError> {
    if len < MIN_LEN || !len.is_power_of_two() {
        return Err(FftError::InvalidLength);
    }
    Ok(())
}

impl FftConfig {
    /// Create a config for `len` samples using the built-in radix-2 provider.
    ///
    /// # Errors
    /// [`FftError::InvalidLength`] unless `len` is a power of two `>= 2`;
    /// [`FftError::Allocation`] if provider tables or scratch cannot be
    /// reserved.
    pub fn new(len: usize) -> Result<Self, FftError> {
        Self::with_provider(Radix2Provider::new(len)?)
    }

    /// Like [`FftConfig::new`] but reuses twiddle tables cached in `planner`.
    pub fn with_planner(planner: &mut FftPlanner<f32>, len: usize) -> Result<Self, FftError> {
        Self::with_provider(Radix2Provider::with_planner(planner, len)?)
    }
}

#[allow(clippy::len_without_is_empty)]
impl<P: TransformProvider<f32>> FftConfig<P> {
    /// Wrap a custom provider. Its length must be a power of two `>= 2`.
    pub fn with_provider(provider: P) -> Result<Self, FftError> {
        let len = provider.len();
        validate_len(len)?;
        let half_len = len / 2;
        let state = ConfigState {
            provider,
            scratch_re: try_zeroed(half_len)?,
            scratch_im: try_zeroed(half_len)?,
        };
        #[cfg(feature = "verbose-logging")]
        log::debug!("fft config initialised: len={} half_len={}", len, half_len);
        Ok(Self {
            len,
            half_len,
            state: Some(state),
        })
    }

    /// Transform length `N`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of packed bins, `N / 2`.
    pub fn half_len(&self) -> usize {
        self.half_len
    }

    /// `false` once [`FftConfig::release`] or [`FftConfig::free`] has run.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Release provider state and scratch.
    ///
    /// # Errors
    /// [`FftError::NullConfig`] if the config was already released.
    pub fn release(&mut self) -> Result<(), FftError> {
        match self.state.take() {
            Some(_) => {
                #[cfg(feature = "verbose-logging")]
                log::debug!("fft config released: len={}", self.len);
                Ok(())
            }
            None => Err(FftError::NullConfig),
        }
    }

    /// Consuming form of [`FftConfig::release`].
    pub fn free(mut self) -> Result<(), FftError> {
        self.release()
    }

    pub(crate) fn state_mut(&mut self) -> Result<&mut ConfigState<P>, FftError> {
        self.state.as_mut().ok_or(FftError::NullConfig)
    }
}
