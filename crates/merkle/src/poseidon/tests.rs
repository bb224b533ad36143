//! Behavioural tests for the Poseidon engine as a tree compression function.

use super::*;
use ark_bn254::Fr;

#[test]
fn test_order_matters() {
    let engine = HashEngine::init().unwrap();
    let a = Fr::from(10u64);
    let b = Fr::from(20u64);

    assert_ne!(engine.compress(&a, &b), engine.compress(&b, &a));
}

#[test]
fn test_different_inputs_different_outputs() {
    let engine = HashEngine::init().unwrap();
    let h1 = engine.compress(&Fr::from(1u64), &Fr::from(2u64));
    let h2 = engine.compress(&Fr::from(1u64), &Fr::from(3u64));
    let h3 = engine.compress(&Fr::from(2u64), &Fr::from(2u64));

    assert_ne!(h1, h2);
    assert_ne!(h1, h3);
    assert_ne!(h2, h3);
}

#[test]
fn test_self_pair_is_not_identity() {
    let engine = HashEngine::init().unwrap();
    let x = Fr::from(77u64);
    assert_ne!(engine.compress(&x, &x), x);
}

#[test]
fn test_independent_engines_agree() {
    let first = HashEngine::init().unwrap();
    let second = HashEngine::init().unwrap();
    let a = Fr::from(999u64);
    let b = Fr::from(888u64);

    assert_eq!(first.compress(&a, &b), second.compress(&a, &b));
}

#[test]
fn test_zero_inputs_hash_to_nonzero() {
    let engine = HashEngine::init().unwrap();
    let zero = Fr::from(0u64);
    assert_ne!(engine.compress(&zero, &zero), zero);
}
