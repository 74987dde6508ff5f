use felt_vm_utils::ordered_hash_map::{Entry, OrderedHashMap};
use thiserror::Error;

use crate::ids::FunctionId;
use crate::program::{Function, Program};

#[cfg(test)]
#[path = "program_registry_test.rs"]
mod test;

/// Errors encountered in the program registry.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ProgramRegistryError {
    #[error("used the same function id twice: `{0}`")]
    FunctionIdAlreadyExists(FunctionId),
    #[error("could not find the requested function: `{0}`")]
    MissingFunction(FunctionId),
}

/// Registry mapping the function ids of a program to their declarations.
pub struct ProgramRegistry<'a> {
    /// Mapping ids to the corresponding function declaration from the program.
    functions: OrderedHashMap<FunctionId, &'a Function>,
}
impl<'a> ProgramRegistry<'a> {
    /// Creates a registry for the program.
    pub fn new(program: &'a Program) -> Result<Self, Box<ProgramRegistryError>> {
        let mut functions = OrderedHashMap::default();
        for function in &program.funcs {
            match functions.entry(function.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(Box::new(ProgramRegistryError::FunctionIdAlreadyExists(
                        function.id.clone(),
                    )));
                }
                Entry::Vacant(entry) => entry.insert(function),
            };
        }
        Ok(Self { functions })
    }

    /// Gets a function from the registered program.
    pub fn get_function(&self, id: &FunctionId) -> Result<&'a Function, Box<ProgramRegistryError>> {
        self.functions
            .get(id)
            .copied()
            .ok_or_else(|| Box::new(ProgramRegistryError::MissingFunction(id.clone())))
    }
}
