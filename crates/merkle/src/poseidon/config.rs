//! Poseidon configuration for BN254.
//!
//! Uses standard parameters for 128-bit security.

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::poseidon::PoseidonConfig;
use ark_ff::MontFp;

use crate::error::TreeError;

/// Number of full rounds (beginning + end)
const FULL_ROUNDS: usize = 8;

/// Number of partial rounds
const PARTIAL_ROUNDS: usize = 57;

/// S-box exponent
const ALPHA: u64 = 5;

const RATE: usize = 2;
const CAPACITY: usize = 1;

/// Build the Poseidon configuration for the BN254 scalar field.
///
/// Parameters:
/// - Rate: 2 (one absorb per child node)
/// - Capacity: 1
/// - Full rounds: 8 (4 at start, 4 at end)
/// - Partial rounds: 57
/// - Alpha: 5 (x^5 S-box)
pub fn poseidon_config() -> PoseidonConfig<Fr> {
    let mds = vec![
        vec![
            MontFp!("7511745149465107256748700652201246547602992235352608707588321460060273774987"),
            MontFp!("10370080108974718697676803824769673834027675643658433702224577712625900127200"),
            MontFp!("19705173408229649878903981084052839426532978878058043055305024233888854471533"),
        ],
        vec![
            MontFp!("18732019378264290557468133440468564866454307626475683536618613112504878618481"),
            MontFp!("20870176810702568768751421378473869562658540583882454726129544628203806653987"),
            MontFp!("7266061498423634438932006217945904744987532209093972706694887950396501989428"),
        ],
        vec![
            MontFp!("9131299761947733513298312097611845208338517739621853568979632113419485819303"),
            MontFp!("10595341252162738537912664445405114076324478519622938027420701542910180337937"),
            MontFp!("11597556804922396090267472882856054602429588299176362916247939723151043581408"),
        ],
    ];

    PoseidonConfig {
        full_rounds: FULL_ROUNDS,
        partial_rounds: PARTIAL_ROUNDS,
        alpha: ALPHA,
        ark: round_constants(FULL_ROUNDS + PARTIAL_ROUNDS, RATE + CAPACITY),
        mds,
        rate: RATE,
        capacity: CAPACITY,
    }
}

/// Deterministic round constants seeded from "POSEIDON".
fn round_constants(num_rounds: usize, width: usize) -> Vec<Vec<Fr>> {
    let mut state = Fr::from(0x504f534549444f4eu64);

    (0..num_rounds)
        .map(|_| {
            (0..width)
                .map(|_| {
                    state = state * state + Fr::from(7u64);
                    state
                })
                .collect()
        })
        .collect()
}

/// Check that a configuration has the shape the sponge permutation indexes into.
pub fn validate_config(config: &PoseidonConfig<Fr>) -> Result<(), TreeError> {
    let width = config.rate + config.capacity;

    if config.rate == 0 || config.capacity == 0 {
        return Err(TreeError::Initialization(format!(
            "rate {} and capacity {} must both be positive",
            config.rate, config.capacity
        )));
    }
    if config.full_rounds % 2 != 0 {
        return Err(TreeError::Initialization(format!(
            "full rounds must be even, got {}",
            config.full_rounds
        )));
    }
    if config.mds.len() != width || config.mds.iter().any(|row| row.len() != width) {
        return Err(TreeError::Initialization(format!(
            "MDS matrix must be {}x{}",
            width, width
        )));
    }
    let rounds = config.full_rounds + config.partial_rounds;
    if config.ark.len() != rounds || config.ark.iter().any(|row| row.len() != width) {
        return Err(TreeError::Initialization(format!(
            "expected {} rows of {} round constants",
            rounds, width
        )));
    }

    Ok(())
}
