//! Writes a Merkle membership circuit input for a freshly generated tree.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zkbench_input::{run, Config};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
