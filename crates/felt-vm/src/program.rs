use crate::felt::{Felt252, FeltOperator};
use crate::gas::CostTokenType;
use crate::ids::{FunctionId, SlotId, VarId};

/// A full program: the functions a front end built for one contract instance.
#[derive(Clone, Debug)]
pub struct Program {
    /// Descriptions of the functions - ids, parameters and bodies.
    pub funcs: Vec<Function>,
}
impl Program {
    /// Finds the first function whose name ends with `name_suffix`.
    pub fn find_function(&self, name_suffix: &str) -> Option<&Function> {
        self.funcs.iter().find(|function| function.id.0.ends_with(name_suffix))
    }
}

/// Descriptor of a function.
#[derive(Clone, Debug)]
pub struct Function {
    /// The name of the function.
    pub id: FunctionId,
    /// The parameters, bound positionally to the call arguments.
    pub params: Vec<VarId>,
    /// The body reduced by an invocation.
    pub body: Expr,
}

/// An expression of a function body.
///
/// Sub-expressions are reduced depth-first, left to right; all effects - gas
/// consumption and storage writes - occur in exactly that order.
#[derive(Clone, Debug)]
pub enum Expr {
    /// A felt literal.
    Literal(Felt252),
    /// A read of a bound variable.
    Var(VarId),
    /// A felt binary operation.
    BinOp { op: FeltOperator, lhs: Box<Expr>, rhs: Box<Expr> },
    /// Binds the value of `value` to `var` within `body`.
    Let { var: VarId, value: Box<Expr>, body: Box<Expr> },
    /// Evaluates the expressions in order, yielding the value of the last
    /// one, or unit when empty.
    Seq(Vec<Expr>),
    /// Branches on a felt condition: `zero` when the condition is zero,
    /// `nonzero` otherwise. Only the selected branch is evaluated.
    IfZero { cond: Box<Expr>, zero: Box<Expr>, nonzero: Box<Expr> },
    /// Calls a function. The callee shares the caller's gas and storage
    /// context - there is no isolation and no independent budget.
    Call { function: FunctionId, args: Vec<Expr> },
    /// Consumes the cost of one step of the given category, aborting the
    /// whole invocation with the out-of-gas payload when the budget does not
    /// cover it.
    GasCheck(CostTokenType),
    /// Applies the injected two-felt hash.
    Hash { lhs: Box<Expr>, rhs: Box<Expr> },
    /// Reads a storage slot; a slot that was never written reads as zero.
    StorageRead { slot: SlotId },
    /// Writes a storage slot, yielding unit.
    StorageWrite { slot: SlotId, value: Box<Expr> },
    /// Creates a new, empty felt array.
    ArrayNew,
    /// Appends a felt to an array, yielding the grown array.
    ArrayAppend { array: Box<Expr>, value: Box<Expr> },
    /// Bounds-checked array access: `Some(element)` when the index is within
    /// bounds, `None` otherwise. Never aborts on its own.
    ArrayGet { array: Box<Expr>, index: Box<Expr> },
    /// The length of an array, as a felt.
    ArrayLen { array: Box<Expr> },
    /// Wraps a value in the present optional variant.
    OptionSome(Box<Expr>),
    /// The absent optional value.
    OptionNone,
    /// Exhaustive match over an optional value. Both arms are required at
    /// construction; `some_var` is bound to the payload within the `some`
    /// arm. Only the selected arm is evaluated.
    Match { scrutinee: Box<Expr>, some_var: VarId, some: Box<Expr>, none: Box<Expr> },
    /// Aborts the invocation, carrying an array payload.
    Panic(Box<Expr>),
}
