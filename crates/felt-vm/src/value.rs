use crate::felt::Felt252;

/// The logical value of an expression during simulation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// A field element.
    Felt(Felt252),
    /// A growable array of felts.
    Array(Vec<Felt252>),
    /// An optional value, consumed only through exhaustive matching.
    Option(Option<Box<Value>>),
    /// The unit value, yielded by effect-only operations.
    Unit,
}
impl From<Felt252> for Value {
    fn from(value: Felt252) -> Self {
        Self::Felt(value)
    }
}
