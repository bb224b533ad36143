//! Circuit input generation for the Merkle membership benchmark.
//!
//! Builds a synthetic tree, derives the path for one leaf, self-checks it and
//! writes the witness JSON the circuit compiler's witness generator reads.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use zkbench_merkle::{build_synthetic, CircuitInput, HashEngine, MerkleTree, DEFAULT_LEVELS};

/// Command-line options for `merkle-input`.
#[derive(Parser, Debug, Clone)]
#[command(name = "merkle-input", about = "Generate Merkle membership circuit inputs")]
pub struct Config {
    /// Tree depth; the tree holds 2^(levels-1) random leaves
    #[arg(short, long, default_value_t = DEFAULT_LEVELS)]
    pub levels: usize,

    /// Leaf to prove membership of (random when omitted)
    #[arg(short, long)]
    pub index: Option<usize>,

    /// Seed for reproducible leaves and index
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output file [default: inputs/input_merkle_proof_<levels>.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

impl Config {
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from("inputs").join(format!("input_merkle_proof_{}.json", self.levels))
        })
    }
}

/// Result of one generation run.
#[derive(Debug)]
pub struct Generated {
    pub tree: MerkleTree,
    pub index: usize,
    pub input: CircuitInput,
}

/// Build the tree and derive the circuit input for one leaf.
pub fn generate(config: &Config, engine: &HashEngine) -> Result<Generated> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = Instant::now();
    let tree = build_synthetic(config.levels, engine, &mut rng)
        .with_context(|| format!("failed to build tree with {} levels", config.levels))?;
    info!(elapsed = ?start.elapsed(), leaves = tree.leaf_count(), "tree generation");

    let index = match config.index {
        Some(index) => index,
        None => rng.gen_range(0..tree.leaf_count()),
    };

    let start = Instant::now();
    let input = CircuitInput::from_tree(&tree, index)
        .with_context(|| format!("failed to derive path for leaf {}", index))?;
    info!(elapsed = ?start.elapsed(), "proof generation");

    if !input.verify(engine)? {
        bail!("derived path for leaf {} does not reproduce the root", index);
    }

    Ok(Generated { tree, index, input })
}

/// Generate and emit the circuit input.
pub fn run(config: &Config) -> Result<Generated> {
    let engine = HashEngine::init()?;
    let generated = generate(config, &engine)?;
    let json = generated.input.to_json_pretty()?;

    if config.stdout {
        println!("{}", json);
    } else {
        let path = config.output_path();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "circuit input saved");
    }

    info!(root = %generated.input.root, "merkle root");
    info!(leaf = %generated.input.leaf, index = generated.index, "test element");

    Ok(generated)
}
