//! Error type shared by every fallible operation in the crate.

use core::fmt;

/// Errors reported by configuration, transform and convolution calls.
///
/// Every variant is recoverable: the caller inspects the value and decides
/// whether to retry with different arguments. Output buffers are left
/// unspecified when an error is returned and should be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// A transform length was not a power of two (or below 2), or a
    /// convolution input was empty.
    InvalidLength,
    /// Memory for provider state, scratch or padding could not be reserved.
    Allocation,
    /// The configuration has already been released.
    NullConfig,
    /// A buffer length disagrees with the configuration length, or a
    /// pre-transformed kernel cannot hold the requested convolution.
    LengthMismatch,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidLength => {
                write!(f, "length must be a non-zero power of two of at least 2")
            }
            FftError::Allocation => write!(f, "failed to allocate transform buffers"),
            FftError::NullConfig => write!(f, "configuration has been released"),
            FftError::LengthMismatch => {
                write!(f, "buffer length does not match the transform length")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Allocate a zero-filled vector, reporting exhaustion as [`FftError::Allocation`].
pub(crate) fn try_zeroed<T: Clone + Default>(
    len: usize,
) -> Result<alloc::vec::Vec<T>, FftError> {
    let mut buf = alloc::vec::Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| FftError::Allocation)?;
    buf.resize(len, T::default());
    Ok(buf)
}
