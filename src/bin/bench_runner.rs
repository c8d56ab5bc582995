//! Command-line benchmark runner for the indexed min-heap.
//!
//! Drives a seeded workload of decrease-key, extract-min, and insert
//! operations over a range of heap sizes and writes one CSV row per size
//! with merged cost counters and phase timings.
//!
//! ```bash
//! cargo run --release --bin bench_runner -- \
//!     --sizes 100,1000,10000 --seed 42 --ops 10000 --dec-ratio 0.5
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use indexed_minheap::workload::{self, WorkloadConfig, CSV_HEADER};

#[derive(Parser)]
#[command(name = "bench_runner", about = "Indexed min-heap workload benchmark", version)]
struct Cli {
    /// Comma-separated heap sizes to benchmark
    #[arg(long, value_delimiter = ',', default_value = "100,1000,10000")]
    sizes: Vec<usize>,

    /// Seed for the workload PRNG
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Operations to run against each heap
    #[arg(long, default_value_t = 10_000)]
    ops: usize,

    /// Fraction of operations that attempt a decrease-key
    #[arg(long = "dec-ratio", default_value_t = 0.5)]
    dec_ratio: f64,

    /// Output CSV path
    #[arg(long, default_value = "results.csv")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = WorkloadConfig {
        sizes: cli.sizes,
        seed: cli.seed,
        ops: cli.ops,
        dec_ratio: cli.dec_ratio,
    };

    let file = File::create(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{CSV_HEADER}")?;

    for row in workload::run(&config) {
        writeln!(writer, "{}", row.to_csv())?;
        println!(
            "completed n={}: extracts={}, decreases={}, inserts={}",
            row.n, row.extracts, row.decreases, row.inserts
        );
    }
    writer.flush()?;

    println!("results written to {}", cli.out.display());
    Ok(())
}
