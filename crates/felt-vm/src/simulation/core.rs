use felt_vm_utils::ordered_hash_map::OrderedHashMap;

use super::{out_of_gas_payload, SimulationContext, SimulationError, Unwind};
use crate::felt::Felt252;
use crate::ids::VarId;
use crate::program::Expr;
use crate::value::Value;

/// The variables bound within one call frame.
pub type VariableState = OrderedHashMap<VarId, Value>;

/// Simulates the reduction of a single expression against the frame `state`.
///
/// Sub-expressions are reduced depth-first, left to right. An unwind - an
/// abort raised by the body or a malformed tree - propagates immediately:
/// no expression after the unwind point is reached, so none of its effects
/// occur.
pub(super) fn eval(
    context: &mut SimulationContext<'_>,
    expr: &Expr,
    state: &mut VariableState,
) -> Result<Value, Unwind> {
    match expr {
        Expr::Literal(value) => Ok(Value::Felt(*value)),
        Expr::Var(var) => state
            .get(var)
            .cloned()
            .ok_or_else(|| SimulationError::MissingVariable(var.clone()).into()),
        Expr::BinOp { op, lhs, rhs } => {
            let lhs = eval_felt(context, lhs, state)?;
            let rhs = eval_felt(context, rhs, state)?;
            Ok(Value::Felt(op.apply(lhs, rhs)))
        }
        Expr::Let { var, value, body } => {
            let value = eval(context, value, state)?;
            let shadowed = state.insert(var.clone(), value);
            let result = eval(context, body, state);
            restore(state, var, shadowed);
            result
        }
        Expr::Seq(exprs) => {
            let mut result = Value::Unit;
            for expr in exprs {
                result = eval(context, expr, state)?;
            }
            Ok(result)
        }
        Expr::IfZero { cond, zero, nonzero } => {
            if eval_felt(context, cond, state)? == Felt252::ZERO {
                eval(context, zero, state)
            } else {
                eval(context, nonzero, state)
            }
        }
        Expr::Call { function, args } => {
            let mut inputs = Vec::with_capacity(args.len());
            for arg in args {
                inputs.push(eval(context, arg, state)?);
            }
            context.simulate_function(function, inputs)
        }
        Expr::GasCheck(token_type) => match context.gas.try_consume_token(*token_type) {
            Some(()) => Ok(Value::Unit),
            None => Err(Unwind::Panic(out_of_gas_payload())),
        },
        Expr::Hash { lhs, rhs } => {
            let lhs = eval_felt(context, lhs, state)?;
            let rhs = eval_felt(context, rhs, state)?;
            Ok(Value::Felt(context.hasher.hash(&lhs, &rhs)))
        }
        Expr::StorageRead { slot } => Ok(Value::Felt(context.storage.read(slot))),
        Expr::StorageWrite { slot, value } => {
            let value = eval_felt(context, value, state)?;
            context.storage.write(slot.clone(), value);
            Ok(Value::Unit)
        }
        Expr::ArrayNew => Ok(Value::Array(vec![])),
        Expr::ArrayAppend { array, value } => {
            let mut array = eval_array(context, array, state)?;
            let value = eval_felt(context, value, state)?;
            array.push(value);
            Ok(Value::Array(array))
        }
        Expr::ArrayGet { array, index } => {
            let array = eval_array(context, array, state)?;
            let index = eval_felt(context, index, state)?;
            Ok(Value::Option(
                array_get(&array, &index).map(|element| Box::new(Value::Felt(element))),
            ))
        }
        Expr::ArrayLen { array } => {
            let array = eval_array(context, array, state)?;
            Ok(Value::Felt(Felt252::from(array.len() as u64)))
        }
        Expr::OptionSome(inner) => {
            let value = eval(context, inner, state)?;
            Ok(Value::Option(Some(Box::new(value))))
        }
        Expr::OptionNone => Ok(Value::Option(None)),
        Expr::Match { scrutinee, some_var, some, none } => {
            match eval_option(context, scrutinee, state)? {
                Some(value) => {
                    let shadowed = state.insert(some_var.clone(), *value);
                    let result = eval(context, some, state);
                    restore(state, some_var, shadowed);
                    result
                }
                None => eval(context, none, state),
            }
        }
        Expr::Panic(payload) => {
            let payload = eval_array(context, payload, state)?;
            Err(Unwind::Panic(payload))
        }
    }
}

/// Reduces an expression expected to yield a felt.
fn eval_felt(
    context: &mut SimulationContext<'_>,
    expr: &Expr,
    state: &mut VariableState,
) -> Result<Felt252, Unwind> {
    match eval(context, expr, state)? {
        Value::Felt(value) => Ok(value),
        _ => Err(SimulationError::WrongArgType.into()),
    }
}

/// Reduces an expression expected to yield a felt array.
fn eval_array(
    context: &mut SimulationContext<'_>,
    expr: &Expr,
    state: &mut VariableState,
) -> Result<Vec<Felt252>, Unwind> {
    match eval(context, expr, state)? {
        Value::Array(array) => Ok(array),
        _ => Err(SimulationError::WrongArgType.into()),
    }
}

/// Reduces an expression expected to yield an optional value.
fn eval_option(
    context: &mut SimulationContext<'_>,
    expr: &Expr,
    state: &mut VariableState,
) -> Result<Option<Box<Value>>, Unwind> {
    match eval(context, expr, state)? {
        Value::Option(value) => Ok(value),
        _ => Err(SimulationError::WrongArgType.into()),
    }
}

/// Bounds-checked array access. An index beyond `usize` is out of range.
fn array_get(array: &[Felt252], index: &Felt252) -> Option<Felt252> {
    let index = usize::try_from(index.to_biguint()).ok()?;
    array.get(index).copied()
}

/// Closes a binding scope: puts a shadowed binding back, or removes the
/// scope-local one, so sibling expressions cannot observe it.
fn restore(state: &mut VariableState, var: &VarId, shadowed: Option<Value>) {
    match shadowed {
        Some(value) => {
            state.insert(var.clone(), value);
        }
        None => {
            state.swap_remove(var);
        }
    }
}
