//! Power-of-two real transform provider.
//!
//! A [`TransformProvider`] turns `N` real samples into `N/2` packed complex
//! bins and back. The packing follows the usual split-real convention:
//!
//! | index | `re`              | `im`              |
//! |-------|-------------------|-------------------|
//! | 0     | DC bin            | Nyquist bin       |
//! | k > 0 | `Re X[k]`         | `Im X[k]`         |
//!
//! Forward transforms are unnormalised DFTs. Inverse transforms return the
//! input scaled by `N`; dividing that factor out is left to the caller.
//!
//! [`Radix2Provider`] implements the contract with a half-length Stockham
//! complex FFT (the real input is packed as `z[i] = x[2i] + i*x[2i+1]`) and a
//! twiddled split pass that separates the even/odd spectra. Twiddle tables are
//! cached by [`FftPlanner`] so configs of the same length can share them.

use alloc::collections::VecDeque;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::{try_zeroed, FftError};
use crate::num::{Complex, Float, SplitComplex};

/// Smallest supported real transform length.
pub const MIN_LEN: usize = 2;

/// Maximum number of cached tables of each kind retained by a planner.
pub const MAX_CACHE_ENTRIES: usize = 64;

/// Capability to compute real forward and inverse transforms of one fixed
/// power-of-two length.
pub trait TransformProvider<T: Float> {
    /// Real transform length `N`.
    fn len(&self) -> usize;

    /// Forward transform of `input` (length `N`) into packed bins `re`/`im`
    /// (each length `N/2`).
    fn forward(&mut self, input: &[T], re: &mut [T], im: &mut [T]) -> Result<(), FftError>;

    /// Inverse transform of packed bins into `output`, scaled by `N`.
    fn inverse(&mut self, re: &[T], im: &[T], output: &mut [T]) -> Result<(), FftError>;
}

/// `exp(-i * turns * pi * k / m)`. The ratio `k / m` is formed in `f64` so
/// lengths beyond the exact integer range of `T` still plan.
fn twiddle<T: Float>(k: usize, m: usize, turns: f64) -> Complex<T> {
    let theta = -turns * core::f64::consts::PI * (k as f64 / m as f64);
    Complex::expi(T::from_f64(theta))
}

/// Twiddles for a complex FFT of size `m`: `exp(-2πi k / m)` for `k < m/2`.
fn build_stage_table<T: Float>(m: usize) -> Result<Vec<Complex<T>>, FftError> {
    let half = m / 2;
    let mut table = Vec::new();
    table
        .try_reserve_exact(half)
        .map_err(|_| FftError::Allocation)?;
    table.extend((0..half).map(|k| twiddle(k, m, 2.0)));
    Ok(table)
}

/// Split-pass twiddles for a real transform of length `2m`: `exp(-πi k / m)`
/// for `k < m`.
fn build_post_table<T: Float>(m: usize) -> Result<Vec<Complex<T>>, FftError> {
    if m == 0 {
        return Err(FftError::InvalidLength);
    }
    let mut table = Vec::new();
    table.try_reserve_exact(m).map_err(|_| FftError::Allocation)?;
    table.extend((0..m).map(|k| twiddle(k, m, 1.0)));
    Ok(table)
}

/// Fetch `key` from an LRU-bounded table cache, building it on a miss.
fn cached_table<T: Float>(
    cache: &mut HashMap<usize, Arc<[Complex<T>]>>,
    order: &mut VecDeque<usize>,
    key: usize,
    build: fn(usize) -> Result<Vec<Complex<T>>, FftError>,
) -> Result<Arc<[Complex<T>]>, FftError> {
    let table = match cache.get(&key) {
        Some(table) => Arc::clone(table),
        None => {
            let table: Arc<[Complex<T>]> = Arc::from(build(key)?);
            if cache.len() == MAX_CACHE_ENTRIES {
                if let Some(old) = order.pop_front() {
                    cache.remove(&old);
                }
            }
            cache.insert(key, Arc::clone(&table));
            table
        }
    };
    order.retain(|&x| x != key);
    order.push_back(key);
    Ok(table)
}

/// Planner that caches twiddle tables by half transform length.
///
/// Tables are evicted in least-recently-used order once more than
/// [`MAX_CACHE_ENTRIES`] of a kind are retained.
pub struct FftPlanner<T: Float> {
    /// Complex-FFT stage twiddles keyed by complex length `m`.
    stage_cache: HashMap<usize, Arc<[Complex<T>]>>,
    stage_order: VecDeque<usize>,
    /// Real split-pass twiddles keyed by complex length `m`.
    post_cache: HashMap<usize, Arc<[Complex<T>]>>,
    post_order: VecDeque<usize>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            stage_cache: HashMap::new(),
            stage_order: VecDeque::new(),
            post_cache: HashMap::new(),
            post_order: VecDeque::new(),
        }
    }

    /// Stage twiddles for a complex FFT of length `m`.
    pub fn stage_twiddles(&mut self, m: usize) -> Result<Arc<[Complex<T>]>, FftError> {
        cached_table(
            &mut self.stage_cache,
            &mut self.stage_order,
            m,
            build_stage_table::<T>,
        )
    }

    /// Split-pass twiddles for a real transform of length `2 * m`.
    pub fn post_twiddles(&mut self, m: usize) -> Result<Arc<[Complex<T>]>, FftError> {
        cached_table(
            &mut self.post_cache,
            &mut self.post_order,
            m,
            build_post_table::<T>,
        )
    }

    /// Number of entries currently stored in the stage twiddle cache.
    pub fn cache_len(&self) -> usize {
        self.stage_cache.len()
    }
}

/// In-place Stockham autosort FFT over `data`, ping-ponging through `scratch`.
///
/// `data.len()` must be a power of two and equal `scratch.len()`; `twiddles`
/// must come from [`FftPlanner::stage_twiddles`] for the same length.
fn stockham<T: Float>(data: &mut [Complex<T>], scratch: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let n = data.len();
    debug_assert_eq!(n, scratch.len());
    if n < 2 {
        return;
    }
    let mut result_in_data = true;
    // n1 = number of groups, n2 = size of each group in this pass.
    let mut n1 = 1usize;
    let mut n2 = n;
    while n1 < n {
        n2 >>= 1;
        let (src, dst): (&[Complex<T>], &mut [Complex<T>]) = if result_in_data {
            (&*data, &mut *scratch)
        } else {
            (&*scratch, &mut *data)
        };
        for k in 0..n1 {
            // exp(-2πi * k / (2*n1))
            let w = twiddles[k * n2];
            let even = 2 * k * n2;
            let odd = even + n2;
            for j in 0..n2 {
                let u = src[even + j];
                let v = src[odd + j] * w;
                dst[k * n2 + j] = u + v;
                dst[(k + n1) * n2 + j] = u - v;
            }
        }
        result_in_data = !result_in_data;
        n1 <<= 1;
    }
    if !result_in_data {
        data.copy_from_slice(scratch);
    }
}

/// Radix-2 real transform provider for one fixed length.
pub struct Radix2Provider<T: Float> {
    len: usize,
    stage_twiddles: Arc<[Complex<T>]>,
    post_twiddles: Arc<[Complex<T>]>,
    work: Vec<Complex<T>>,
    pong: Vec<Complex<T>>,
}

impl<T: Float> Radix2Provider<T> {
    /// Plan a provider with freshly built twiddle tables.
    pub fn new(len: usize) -> Result<Self, FftError> {
        let mut planner = FftPlanner::new();
        Self::with_planner(&mut planner, len)
    }

    /// Plan a provider reusing tables cached in `planner`.
    pub fn with_planner(planner: &mut FftPlanner<T>, len: usize) -> Result<Self, FftError> {
        if len < MIN_LEN || !len.is_power_of_two() {
            return Err(FftError::InvalidLength);
        }
        let m = len / 2;
        let stage_twiddles = planner.stage_twiddles(m)?;
        let post_twiddles = planner.post_twiddles(m)?;
        #[cfg(feature = "verbose-logging")]
        log::trace!("radix-2 provider planned: len={} half={}", len, m);
        Ok(Self {
            len,
            stage_twiddles,
            post_twiddles,
            work: try_zeroed(m)?,
            pong: try_zeroed(m)?,
        })
    }
}

impl<T: Float> TransformProvider<T> for Radix2Provider<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn forward(&mut self, input: &[T], re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        let m = self.len / 2;
        if input.len() != self.len || re.len() != m || im.len() != m {
            return Err(FftError::LengthMismatch);
        }
        for (i, z) in self.work.iter_mut().enumerate() {
            *z = Complex::new(input[2 * i], input[2 * i + 1]);
        }
        stockham(&mut self.work, &mut self.pong, &self.stage_twiddles);

        let z = &self.work;
        let mut out = SplitComplex::new(re, im);
        out.set(0, Complex::new(z[0].re + z[0].im, z[0].re - z[0].im));
        for k in 1..m {
            let a = z[k];
            let b = z[m - k].conj();
            let t = self.post_twiddles[k] * (a - b);
            out.set(k, ((a + b) - t.mul_i()).scale(T::HALF));
        }
        Ok(())
    }

    fn inverse(&mut self, re: &[T], im: &[T], output: &mut [T]) -> Result<(), FftError> {
        let m = self.len / 2;
        if output.len() != self.len || re.len() != m || im.len() != m {
            return Err(FftError::LengthMismatch);
        }
        // Merge the even/odd spectra back into z, conjugated for the inverse pass.
        self.work[0] = Complex::new(re[0] + im[0], -(re[0] - im[0]));
        for k in 1..m {
            let a = Complex::new(re[k], im[k]);
            let b = Complex::new(re[m - k], -im[m - k]);
            let t = self.post_twiddles[k].conj() * (a - b);
            self.work[k] = ((a + b) + t.mul_i()).conj();
        }
        stockham(&mut self.work, &mut self.pong, &self.stage_twiddles);
        for (i, z) in self.work.iter().enumerate() {
            output[2 * i] = z.re;
            output[2 * i + 1] = -z.im;
        }
        Ok(())
    }
}
