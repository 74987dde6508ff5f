use itertools::izip;
use thiserror::Error;

use self::core::VariableState;
use crate::felt::Felt252;
use crate::gas::GasMeter;
use crate::hash::FeltHasher;
use crate::ids::{FunctionId, VarId};
use crate::program::Program;
use crate::program_registry::{ProgramRegistry, ProgramRegistryError};
use crate::storage::StorageSlots;
use crate::value::Value;

pub mod core;

/// Error occurring while simulating a function body.
///
/// These are defects of the supplied expression tree. Aborts raised by the
/// evaluated body itself are not errors - they surface as
/// [`RunResultValue::Panic`].
#[derive(Error, Debug, Eq, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    ProgramRegistryError(#[from] Box<ProgramRegistryError>),
    #[error(
        "unexpected number of arguments to function `{function_id}`: expected {expected}, \
         actual {actual}"
    )]
    FunctionArgumentCountMismatch { function_id: FunctionId, expected: usize, actual: usize },
    #[error("variable `{0}` is not bound at its use site")]
    MissingVariable(VarId),
    #[error("expected a value of a different kind")]
    WrongArgType,
}

/// The full result of a run.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct RunResult {
    /// The gas remaining when the run ended.
    pub gas_counter: u64,
    /// The value the run ended with.
    pub value: RunResultValue,
}

/// The ran function return value.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum RunResultValue {
    /// Run ended successfully, returning its result value.
    Success(Value),
    /// Run panicked, returning the carried error data.
    Panic(Vec<Felt252>),
}

/// The panic payload surfaced when the gas budget is exhausted.
pub fn out_of_gas_payload() -> Vec<Felt252> {
    vec![Felt252::ONE]
}

/// Runs a function from the program with the given inputs.
///
/// The run owns its gas meter, created from `available_gas`, and borrows the
/// instance `storage` and the `hasher`; both are threaded unchanged through
/// every nested call of the run.
pub fn run(
    program: &Program,
    function_id: &FunctionId,
    inputs: Vec<Value>,
    available_gas: u64,
    storage: &mut StorageSlots,
    hasher: &dyn FeltHasher,
) -> Result<RunResult, SimulationError> {
    let registry = ProgramRegistry::new(program)?;
    let mut context = SimulationContext {
        registry: &registry,
        hasher,
        gas: GasMeter::new(available_gas),
        storage,
    };
    let value = match context.simulate_function(function_id, inputs) {
        Ok(value) => RunResultValue::Success(value),
        Err(Unwind::Panic(payload)) => RunResultValue::Panic(payload),
        Err(Unwind::Error(error)) => return Err(error),
    };
    Ok(RunResult { gas_counter: context.gas.remaining(), value })
}

/// An unwinding event inside a simulation: an abort raised by the evaluated
/// body, or a defect of the supplied tree. Either way the whole invocation
/// unwinds - nothing catches it on the way out.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Unwind {
    /// The body aborted, carrying its data payload.
    Panic(Vec<Felt252>),
    /// The tree was malformed.
    Error(SimulationError),
}
impl From<SimulationError> for Unwind {
    fn from(error: SimulationError) -> Self {
        Unwind::Error(error)
    }
}
impl From<Box<ProgramRegistryError>> for Unwind {
    fn from(error: Box<ProgramRegistryError>) -> Self {
        Unwind::Error(error.into())
    }
}

/// Helper object for running the simulation, carrying the shared mutable
/// context - the gas meter and the instance storage - through every nested
/// call. The context is never copied or forked.
struct SimulationContext<'a> {
    registry: &'a ProgramRegistry<'a>,
    hasher: &'a dyn FeltHasher,
    gas: GasMeter,
    storage: &'a mut StorageSlots,
}
impl SimulationContext<'_> {
    /// Simulates the run of a function, even recursively.
    ///
    /// Arguments are bound positionally in a frame-local variable state; the
    /// gas and storage context stays shared with the caller.
    fn simulate_function(
        &mut self,
        function_id: &FunctionId,
        inputs: Vec<Value>,
    ) -> Result<Value, Unwind> {
        let function = self.registry.get_function(function_id)?;
        if function.params.len() != inputs.len() {
            return Err(SimulationError::FunctionArgumentCountMismatch {
                function_id: function.id.clone(),
                expected: function.params.len(),
                actual: inputs.len(),
            }
            .into());
        }
        let mut state: VariableState = izip!(function.params.iter(), inputs)
            .map(|(param, input)| (param.clone(), input))
            .collect();
        core::eval(self, &function.body, &mut state)
    }
}
