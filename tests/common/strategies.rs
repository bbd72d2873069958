use proptest::prelude::*;

/// Strategy for generating input sequences, including empty ones
pub fn items_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1_000, 0..64)
}

/// Strategy for generating valid batch widths
pub fn batch_size_strategy() -> impl Strategy<Value = usize> {
    1usize..=20
}

/// Strategy for generating a set of item values that should fail
pub fn failure_modulus_strategy() -> impl Strategy<Value = u32> {
    2u32..7
}
