//! Demonstrates enabling verbose logging for audiofft.
use audiofft::{convolve_vec, FftConfig};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let signal = vec![1.0, 2.0, 3.0, 4.0];
    let kernel = vec![0.5, 0.5];
    let out = convolve_vec(&signal, &kernel).unwrap();
    log::info!("filtered: {:?}", out);

    let config = FftConfig::new(8).unwrap();
    config.free().unwrap();
}
