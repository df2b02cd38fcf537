//! Basic usage example for audiofft
//!
//! Walks through planning a config, both spectrum layouts, and FFT
//! convolution of two short signals.

use audiofft::{convolve_vec, FftConfig};

fn main() -> Result<(), audiofft::FftError> {
    println!("=== audiofft Basic Usage Example ===\n");

    // 1. Magnitude/phase spectrum
    println!("1. Forward transform (magnitude/phase)");
    let n = 16;
    let signal: Vec<f32> = (0..n)
        .map(|i| (2.0 * std::f32::consts::PI * 3.0 * i as f32 / n as f32).sin())
        .collect();
    let mut config = FftConfig::new(n)?;
    let mut magnitude = vec![0.0; config.half_len()];
    let mut phase = vec![0.0; config.half_len()];
    config.forward(&signal, &mut magnitude, &mut phase)?;
    println!(
        "   Magnitude: {:?}",
        magnitude.iter().map(|m| format!("{:.2}", m)).collect::<Vec<_>>()
    );

    let mut restored = vec![0.0; n];
    config.inverse(&magnitude, &phase, &mut restored)?;
    let max_err = signal
        .iter()
        .zip(restored.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    println!("   Round-trip max error: {:.2e}", max_err);
    println!();

    // 2. Interleaved spectrum, reusing the same config
    println!("2. Forward transform (interleaved)");
    let ramp: Vec<f32> = (0..n).map(|i| i as f32).collect();
    let mut spectrum = vec![0.0; n];
    config.forward_interleaved(&ramp, &mut spectrum)?;
    println!("   DC: {:.2}  Nyquist: {:.2}", spectrum[0], spectrum[1]);
    println!(
        "   Bins: {:?}",
        spectrum[2..]
            .chunks_exact(2)
            .map(|c| format!("{:.2}{:+.2}i", c[0], c[1]))
            .collect::<Vec<_>>()
    );
    config.free()?;
    println!();

    // 3. Convolution
    println!("3. FFT convolution");
    let a = [1.0f32, 2.0, 3.0];
    let b = [0.0f32, 1.0, 0.5];
    let out = convolve_vec(&a, &b)?;
    println!("   {:?} * {:?}", a, b);
    println!(
        "   = {:?}",
        out.iter().map(|x| format!("{:.2}", x)).collect::<Vec<_>>()
    );
    println!();

    println!("=== Example completed successfully! ===");
    Ok(())
}
