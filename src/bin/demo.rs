//! Builds a list of multiples of 42 and prints it by index.
//!
//! Log verbosity follows `RUST_LOG`.

use clap::Parser;
use sentinel_list::List;
use tracing_subscriber::EnvFilter;

/// Fill a list with `i * 42` for `i` in `0..count` and print it.
#[derive(Debug, Parser)]
#[command(name = "demo")]
struct Args {
    /// Number of elements to emplace.
    #[arg(default_value_t = 10)]
    count: usize,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    tracing::info!(count = args.count, "building list");

    let mut list: List<usize> = List::new();
    for i in 0..args.count {
        list.emplace_back(i * 42);
    }
    tracing::debug!(len = list.len(), "list built");

    println!("Size: {}", list.len());
    for i in 0..list.len() {
        println!("list[{}] = {}", i, list[i]);
    }
}
