// Module providing the gas metering primitives.

#[cfg(test)]
#[path = "gas_test.rs"]
mod test;

/// Represents the different categories of metered steps.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum CostTokenType {
    /// A single generic computation step.
    Step,
    /// One invocation of the pedersen hash function.
    Pedersen,
}
impl CostTokenType {
    pub fn iter() -> std::slice::Iter<'static, Self> {
        [CostTokenType::Step, CostTokenType::Pedersen].iter()
    }

    /// Returns the name of the token type, in snake_case.
    pub fn name(&self) -> &'static str {
        match self {
            CostTokenType::Step => "step",
            CostTokenType::Pedersen => "pedersen",
        }
    }
}

/// Returns the fixed gas cost of a single step of the given category.
pub fn token_gas_cost(token_type: CostTokenType) -> u64 {
    match token_type {
        CostTokenType::Step => 1,
        CostTokenType::Pedersen => 4130,
    }
}

/// Tracks the remaining gas budget of a single invocation.
///
/// The budget never underflows: a consumption the budget does not cover
/// leaves the meter unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GasMeter {
    remaining: u64,
}
impl GasMeter {
    /// Creates a meter holding the given initial budget.
    pub fn new(available_gas: u64) -> Self {
        Self { remaining: available_gas }
    }

    /// The gas left in the budget.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Attempts to consume `amount` gas, returning `None` on a shortfall.
    pub fn try_consume(&mut self, amount: u64) -> Option<()> {
        self.remaining = self.remaining.checked_sub(amount)?;
        Some(())
    }

    /// Attempts to consume the cost of one step of the given category.
    pub fn try_consume_token(&mut self, token_type: CostTokenType) -> Option<()> {
        self.try_consume(token_gas_cost(token_type))
    }

    /// Returns unused gas to the budget.
    pub fn refund(&mut self, amount: u64) {
        self.remaining += amount;
    }
}
