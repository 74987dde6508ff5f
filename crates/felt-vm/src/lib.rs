//! A minimal execution substrate for a felt arithmetic contract language:
//! a gas-metered evaluator over function bodies with recursive calls, felt
//! arrays, optional values and per-instance storage slots.
//!
//! A front end (a compiler or a test harness) builds the [`program::Expr`]
//! form and invokes [`simulation::run`]; everything around that - parsing,
//! type checking, module resolution - is an external collaborator.

pub mod felt;
pub mod gas;
pub mod hash;
pub mod ids;
pub mod program;
pub mod program_registry;
pub mod simulation;
pub mod storage;
pub mod value;
