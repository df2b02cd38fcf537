use std::env;
use std::process::Command;

use anyhow::{bail, Result};

/// Features every task enables.
const BASE_FEATURES: &[&str] = &["std"];

/// Options derived from the environment used to configure cargo commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
    pub rustflags: Option<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }
}

/// Read `AUDIOFFT_FEATURES` and `AUDIOFFT_NATIVE` from the environment.
pub fn detect_config() -> BuildConfig {
    let extra = env::var("AUDIOFFT_FEATURES").unwrap_or_default();
    let native = env::var("AUDIOFFT_NATIVE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    compute_config(&extra, native)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(extra: &str, native: bool) -> BuildConfig {
    let mut features: Vec<String> = BASE_FEATURES.iter().map(|f| f.to_string()).collect();
    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }
    let rustflags = native.then(|| "-C target-cpu=native".to_string());
    BuildConfig {
        features,
        rustflags,
    }
}

fn cargo_with_features(subcommand: &str, cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg(subcommand);
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("build", cfg)
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("test", cfg)
}

/// Build the crate without `std` to catch accidental std usage.
pub fn no_std_check_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--lib", "--no-default-features"]);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    if let Some(rf) = &cfg.rustflags {
        cmd.env("RUSTFLAGS", rf);
    }
    cmd.args(["bench", "--manifest-path", "audiofft-bench/Cargo.toml"]);
    cmd
}

/// Run each command in order, stopping at the first failure.
pub fn run_all(commands: impl IntoIterator<Item = Command>) -> Result<()> {
    for mut cmd in commands {
        let status = cmd.status()?;
        if !status.success() {
            bail!("{:?} failed with {}", cmd.get_program(), status);
        }
    }
    Ok(())
}
