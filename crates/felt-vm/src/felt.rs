// Module providing the felt value type and its arithmetic.
pub use starknet_types_core::felt::Felt as Felt252;

#[cfg(test)]
#[path = "felt_test.rs"]
mod test;

/// A binary operator over felts.
///
/// All three operations are total: the result wraps modulo the field prime.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FeltOperator {
    Add,
    Sub,
    Mul,
}
impl FeltOperator {
    /// Applies the operator to the given operands.
    pub fn apply(self, lhs: Felt252, rhs: Felt252) -> Felt252 {
        match self {
            FeltOperator::Add => lhs + rhs,
            FeltOperator::Sub => lhs - rhs,
            FeltOperator::Mul => lhs * rhs,
        }
    }
}
