//! Poseidon hashing and field encoding helpers.

use ff::PrimeField as _;
use halo2_gadgets::poseidon::primitives::{self as poseidon, ConstantLength, P128Pow5T3};
use pasta_curves::pallas;
use zkdrop_core::base::FieldRepr;

use crate::core::TreeError;

/// Hash two field elements with Poseidon (`P128Pow5T3`, width 3, rate 2).
#[must_use]
pub fn hash_pair(left: pallas::Base, right: pallas::Base) -> pallas::Base {
    poseidon::Hash::<_, P128Pow5T3, ConstantLength<2>, 3, 2>::init().hash([left, right])
}

/// Decode a canonical field element.
///
/// # Errors
/// Returns [`TreeError::NonCanonicalField`] if the bytes are not a canonical encoding.
pub fn field_from_repr(repr: FieldRepr, what: &'static str) -> Result<pallas::Base, TreeError> {
    Option::from(pallas::Base::from_repr(repr.to_bytes())).ok_or(TreeError::NonCanonicalField(what))
}

/// Encode a field element.
#[must_use]
pub fn field_to_repr(value: pallas::Base) -> FieldRepr {
    FieldRepr::new(value.to_repr())
}

#[cfg(test)]
mod tests {
    use ff::Field as _;

    use super::*;

    #[test]
    fn hash_is_order_sensitive() {
        let a = pallas::Base::from(1_u64);
        let b = pallas::Base::from(2_u64);
        assert_ne!(hash_pair(a, b), hash_pair(b, a));
        assert_eq!(hash_pair(a, b), hash_pair(a, b));
    }

    #[test]
    fn repr_roundtrip_and_canonicity() {
        let value = pallas::Base::from(42_u64);
        assert_eq!(field_from_repr(field_to_repr(value), "test"), Ok(value));
        assert_eq!(field_to_repr(pallas::Base::ZERO), FieldRepr::ZERO);

        // 2^256 - 1 is above the modulus.
        assert_eq!(
            field_from_repr(FieldRepr::new([0xff; 32]), "test"),
            Err(TreeError::NonCanonicalField("test"))
        );
    }
}
