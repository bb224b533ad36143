//! Conversions between BN254 scalar field elements and decimal integers.
//!
//! The circuit witness generator reads every value as a base-10 string, so
//! values crossing that boundary are checked against the modulus instead of
//! being reduced.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use num_traits::Num;

use crate::error::TreeError;

/// Node and leaf value type.
pub type FieldElement = Fr;

/// The scalar field modulus as an arbitrary-precision integer.
pub fn field_modulus() -> BigUint {
    BigUint::from_bytes_le(&Fr::MODULUS.to_bytes_le())
}

/// Convert an integer to a field element, rejecting values `>= modulus`.
pub fn field_element_from_biguint(value: &BigUint) -> Result<Fr, TreeError> {
    if *value >= field_modulus() {
        return Err(TreeError::InvalidFieldElement(format!(
            "{} is not below the field modulus",
            value
        )));
    }
    Ok(Fr::from_le_bytes_mod_order(&value.to_bytes_le()))
}

/// Parse a base-10 string of a non-negative integer below the modulus.
pub fn parse_field_element(s: &str) -> Result<Fr, TreeError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TreeError::InvalidFieldElement(format!(
            "{:?} is not a decimal integer",
            s
        )));
    }
    let value = BigUint::from_str_radix(s, 10)
        .map_err(|e| TreeError::InvalidFieldElement(e.to_string()))?;
    field_element_from_biguint(&value)
}

/// Canonical base-10 representation of a field element.
pub fn field_element_to_decimal(f: &Fr) -> String {
    BigUint::from_bytes_le(&f.into_bigint().to_bytes_le()).to_string()
}
