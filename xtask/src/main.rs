use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for audiofft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    /// Format, lint, then check the `no_std` build
    Analyze,
    /// Run the criterion suite in audiofft-bench
    Bench,
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    match cli.command {
        Commands::Build => run_all([build_command(&cfg)]),
        Commands::Test => run_all([test_command(&cfg)]),
        Commands::Clippy => run_all([clippy_command()]),
        Commands::Fmt => run_all([fmt_command()]),
        Commands::Analyze => run_all([fmt_command(), clippy_command(), no_std_check_command()]),
        Commands::Bench => run_all([bench_command(&cfg)]),
    }
}
