//! Native Poseidon compression with parameters built once per process.

use std::sync::Arc;

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::poseidon::{PoseidonConfig, PoseidonSponge};
use ark_crypto_primitives::sponge::CryptographicSponge;
use num_bigint::BigUint;
use tracing::debug;

use super::config::{poseidon_config, validate_config};
use super::TwoToOneHash;
use crate::error::TreeError;
use crate::field::field_element_from_biguint;

/// Poseidon two-to-one hash engine.
///
/// Construct it once with [`HashEngine::init`] and lend it to every tree
/// build. Clones share the same parameters.
#[derive(Clone)]
pub struct HashEngine {
    config: Arc<PoseidonConfig<Fr>>,
}

impl HashEngine {
    /// Build and validate the Poseidon round constants and MDS matrix.
    pub fn init() -> Result<Self, TreeError> {
        Self::with_config(poseidon_config())
    }

    /// Use caller-supplied parameters, rejecting malformed ones.
    pub fn with_config(config: PoseidonConfig<Fr>) -> Result<Self, TreeError> {
        validate_config(&config)?;
        debug!(
            full_rounds = config.full_rounds,
            partial_rounds = config.partial_rounds,
            width = config.rate + config.capacity,
            "poseidon hash engine initialized"
        );
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// The parameters this engine hashes with.
    pub fn config(&self) -> &PoseidonConfig<Fr> {
        &self.config
    }

    /// Compress two untyped integers, rejecting values outside the field.
    pub fn compress_integers(&self, left: &BigUint, right: &BigUint) -> Result<Fr, TreeError> {
        let left = field_element_from_biguint(left)?;
        let right = field_element_from_biguint(right)?;
        Ok(self.compress(&left, &right))
    }
}

impl TwoToOneHash for HashEngine {
    fn compress(&self, left: &Fr, right: &Fr) -> Fr {
        let mut sponge = PoseidonSponge::<Fr>::new(self.config.as_ref());
        sponge.absorb(left);
        sponge.absorb(right);
        sponge.squeeze_field_elements::<Fr>(1)[0]
    }
}

impl std::fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashEngine")
            .field("full_rounds", &self.config.full_rounds)
            .field("partial_rounds", &self.config.partial_rounds)
            .field("rate", &self.config.rate)
            .finish()
    }
}
