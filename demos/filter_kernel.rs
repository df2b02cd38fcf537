//! Filter a stream of audio blocks with a kernel transformed once.
//!
//! Each block is convolved with a 5-tap moving average; the tail of every
//! result is carried into the next block (overlap-add).

use audiofft::{FftConfig, FilterKernel};

const BLOCK: usize = 64;

fn main() -> Result<(), audiofft::FftError> {
    let taps = [0.2f32; 5];
    let kernel = FilterKernel::new(&taps, BLOCK)?;
    let mut config = FftConfig::new(kernel.fft_len())?;
    println!(
        "kernel: {} taps, fft length {}",
        kernel.kernel_len(),
        kernel.fft_len()
    );

    let input: Vec<f32> = (0..BLOCK * 4)
        .map(|i| {
            let t = i as f32 / 48_000.0;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin()
                + 0.3 * (2.0 * std::f32::consts::PI * 15_000.0 * t).sin()
        })
        .collect();

    let mut output = vec![0.0f32; input.len() + taps.len() - 1];
    let mut block_out = vec![0.0f32; kernel.output_len(BLOCK)?];
    for (i, block) in input.chunks(BLOCK).enumerate() {
        let out = &mut block_out[..kernel.output_len(block.len())?];
        kernel.apply_with(&mut config, block, out)?;
        let start = i * BLOCK;
        for (dst, src) in output[start..start + out.len()].iter_mut().zip(out.iter()) {
            *dst += *src;
        }
    }

    let rms = |x: &[f32]| (x.iter().map(|v| v * v).sum::<f32>() / x.len() as f32).sqrt();
    println!("input rms:  {:.4}", rms(&input));
    println!("output rms: {:.4}", rms(&output[..input.len()]));
    Ok(())
}
