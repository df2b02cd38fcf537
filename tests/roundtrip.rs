// Test intent: forward then inverse reproduces the input for both spectrum layouts.
use audiofft::FftConfig;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Relative tolerance per sample, scaled by peak amplitude and log2(N).
const REL_TOL: f32 = 2e-6;

fn tolerance(x: &[f32]) -> f32 {
    let peak = x.iter().fold(0.0f32, |m, v| m.max(v.abs())).max(1.0);
    let stages = (x.len() as f32).log2().max(1.0);
    REL_TOL * peak * stages * 4.0
}

fn random_signal(rng: &mut StdRng, n: usize, amp: f32) -> Vec<f32> {
    (0..n).map(|_| rng.gen_range(-amp..amp)).collect()
}

#[test]
fn polar_roundtrip_across_sizes() {
    let mut rng = StdRng::seed_from_u64(7);
    for exp in 1..=12 {
        let n = 1usize << exp;
        let x = random_signal(&mut rng, n, 1.0);
        let mut config = FftConfig::new(n).unwrap();
        let mut mag = vec![0.0; n / 2];
        let mut phase = vec![0.0; n / 2];
        config.forward(&x, &mut mag, &mut phase).unwrap();
        assert!(mag.iter().all(|&m| m >= 0.0));
        let mut y = vec![0.0; n];
        config.inverse(&mag, &phase, &mut y).unwrap();
        let tol = tolerance(&x);
        for (a, b) in x.iter().zip(y.iter()) {
            assert!((a - b).abs() < tol, "n={} {} vs {} (tol {})", n, a, b, tol);
        }
    }
}

#[test]
fn interleaved_roundtrip_large_amplitude() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1024;
    let x = random_signal(&mut rng, n, 1000.0);
    let mut config = FftConfig::new(n).unwrap();
    let mut spec = vec![0.0; n];
    config.forward_interleaved(&x, &mut spec).unwrap();
    let mut y = vec![0.0; n];
    config.inverse_interleaved(&spec, &mut y).unwrap();
    let tol = tolerance(&x);
    for (a, b) in x.iter().zip(y.iter()) {
        assert!((a - b).abs() < tol, "{} vs {}", a, b);
    }
}

#[test]
fn config_is_reusable() {
    let mut config = FftConfig::new(16).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let x = random_signal(&mut rng, 16, 2.0);
        let mut spec = [0.0f32; 16];
        let mut y = [0.0f32; 16];
        config.forward_interleaved(&x, &mut spec).unwrap();
        config.inverse_interleaved(&spec, &mut y).unwrap();
        for (a, b) in x.iter().zip(y.iter()) {
            assert!((a - b).abs() < 1e-5);
        }
    }
}

#[test]
fn cosine_peaks_in_its_bin() {
    let n = 64;
    let bin = 5;
    let x: Vec<f32> = (0..n)
        .map(|i| (2.0 * std::f32::consts::PI * bin as f32 * i as f32 / n as f32).cos())
        .collect();
    let mut config = FftConfig::new(n).unwrap();
    let mut mag = vec![0.0; n / 2];
    let mut phase = vec![0.0; n / 2];
    config.forward(&x, &mut mag, &mut phase).unwrap();
    let peak = mag
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .unwrap()
        .0;
    assert_eq!(peak, bin);
    assert!((mag[bin] - n as f32 / 2.0).abs() < 1e-3);
    assert!(phase[bin].abs() < 1e-3);
}

proptest! {
    #[test]
    fn prop_polar_roundtrip(
        exp in 1usize..=10,
        ref signal in proptest::collection::vec(-100.0f32..100.0, 1024),
    ) {
        let n = 1usize << exp;
        let x = &signal[..n];
        let mut config = FftConfig::new(n).unwrap();
        let mut mag = vec![0.0; n / 2];
        let mut phase = vec![0.0; n / 2];
        config.forward(x, &mut mag, &mut phase).unwrap();
        let mut y = vec![0.0; n];
        config.inverse(&mag, &phase, &mut y).unwrap();
        let tol = tolerance(x);
        for (a, b) in x.iter().zip(y.iter()) {
            prop_assert!((a - b).abs() < tol, "{} vs {} (tol {})", a, b, tol);
        }
    }

    #[test]
    fn prop_interleaved_roundtrip(
        exp in 1usize..=10,
        ref signal in proptest::collection::vec(-100.0f32..100.0, 1024),
    ) {
        let n = 1usize << exp;
        let x = &signal[..n];
        let mut config = FftConfig::new(n).unwrap();
        let mut spec = vec![0.0; n];
        config.forward_interleaved(x, &mut spec).unwrap();
        let mut y = vec![0.0; n];
        config.inverse_interleaved(&spec, &mut y).unwrap();
        let tol = tolerance(x);
        for (a, b) in x.iter().zip(y.iter()) {
            prop_assert!((a - b).abs() < tol, "{} vs {} (tol {})", a, b, tol);
        }
    }
}
