use anyhow::Result;
use clap::Parser;

use exectimer::{run_demo, DemoConfig, GenConfig};

#[derive(Parser)]
#[command(name = "exectimer", about = "Time string concatenation of random test data")]
struct Cli {
    /// Number of test strings
    #[arg(short = 'n', long, default_value = "10000")]
    count: usize,

    /// Shortest test string
    #[arg(long, default_value = "1")]
    min_len: usize,

    /// Longest test string
    #[arg(long, default_value = "2000")]
    max_len: usize,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Digits after the decimal point in reported times
    #[arg(short = 'p', long, default_value = "6")]
    precision: usize,

    /// Skip the buffer copy timing
    #[arg(long)]
    no_copy: bool,

    /// Verbose progress output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = DemoConfig {
        gen: GenConfig {
            count: cli.count,
            min_len: cli.min_len,
            max_len: cli.max_len,
            seed: cli.seed,
        },
        precision: cli.precision,
        copy_buffer: !cli.no_copy,
    };

    eprintln!("String Builder test...");
    if cli.verbose {
        eprintln!(
            "  {} strings, lengths {}..={}, seed {}",
            config.gen.count,
            config.gen.min_len,
            config.gen.max_len,
            config.gen.seed.map_or_else(|| "random".to_string(), |s| s.to_string()),
        );
    }

    let summary = run_demo(&config, &mut std::io::stderr().lock())?;

    if cli.verbose {
        eprintln!(
            "Done. Joined {} strings into {} bytes",
            summary.n_strings, summary.concat_len
        );
    }

    Ok(())
}
