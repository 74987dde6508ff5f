use crate::felt::Felt252;

/// A two-felt cryptographic hash, used by the simulation as an opaque
/// deterministic primitive.
pub trait FeltHasher {
    /// Hashes the pair `(x, y)` into a single felt.
    fn hash(&self, x: &Felt252, y: &Felt252) -> Felt252;
}

/// The Pedersen hash over the STARK curve.
#[derive(Clone, Copy, Debug, Default)]
pub struct PedersenHasher;
impl FeltHasher for PedersenHasher {
    fn hash(&self, x: &Felt252, y: &Felt252) -> Felt252 {
        starknet_crypto::pedersen_hash(x, y)
    }
}
