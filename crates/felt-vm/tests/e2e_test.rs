use assert_matches::assert_matches;
use felt_vm::felt::{Felt252, FeltOperator};
use felt_vm::gas::{token_gas_cost, CostTokenType};
use felt_vm::hash::{FeltHasher, PedersenHasher};
use felt_vm::program::{Expr, Function, Program};
use felt_vm::simulation::{out_of_gas_payload, run, RunResultValue};
use felt_vm::storage::StorageSlots;
use felt_vm::value::Value;
use felt_vm_utils::extract_matches;
use pretty_assertions::assert_eq;
use test_log::test;

/// A cheap, deterministic stand-in for the hash primitive.
struct TestHasher;
impl FeltHasher for TestHasher {
    fn hash(&self, x: &Felt252, y: &Felt252) -> Felt252 {
        Felt252::THREE * *x + *y
    }
}

/// The fixed-point definition the recursive program must agree with:
/// `hash_chain(0) = 0`, `hash_chain(n) = H(hash_chain(n - 1), n)`.
fn reference_hash_chain(hasher: &impl FeltHasher, n: u64) -> Felt252 {
    if n == 0 {
        Felt252::ZERO
    } else {
        hasher.hash(&reference_hash_chain(hasher, n - 1), &Felt252::from(n))
    }
}

/// The cost of one full recursive step: the generic check and the hash check.
fn step_cost() -> u64 {
    token_gas_cost(CostTokenType::Step) + token_gas_cost(CostTokenType::Pedersen)
}

/// The program under test: the recursive hash chain, and a contract entry
/// point combining a storage slot with an internal helper call.
fn build_program() -> Program {
    let n = || Box::new(Expr::Var("n".into()));
    let hash_chain = Function {
        id: "hash_chain".into(),
        params: vec!["n".into()],
        body: Expr::IfZero {
            cond: n(),
            zero: Box::new(Expr::Literal(Felt252::ZERO)),
            nonzero: Box::new(Expr::Seq(vec![
                Expr::GasCheck(CostTokenType::Step),
                Expr::GasCheck(CostTokenType::Pedersen),
                Expr::Hash {
                    lhs: Box::new(Expr::Call {
                        function: "hash_chain".into(),
                        args: vec![Expr::BinOp {
                            op: FeltOperator::Sub,
                            lhs: n(),
                            rhs: Box::new(Expr::Literal(Felt252::ONE)),
                        }],
                    }),
                    rhs: n(),
                },
            ])),
        },
    };
    let get_value = Function {
        id: "test_contract::get_value".into(),
        params: vec![],
        body: Expr::BinOp {
            op: FeltOperator::Add,
            lhs: Box::new(Expr::StorageRead { slot: "my_storage_var".into() }),
            rhs: Box::new(Expr::Call {
                function: "test_contract::internal_helper".into(),
                args: vec![],
            }),
        },
    };
    let internal_helper = Function {
        id: "test_contract::internal_helper".into(),
        params: vec![],
        body: Expr::Literal(Felt252::ONE),
    };
    Program { funcs: vec![hash_chain, get_value, internal_helper] }
}

fn run_hash_chain(n: u64, available_gas: u64) -> (u64, RunResultValue) {
    let program = build_program();
    let result = run(
        &program,
        &"hash_chain".into(),
        vec![Felt252::from(n).into()],
        available_gas,
        &mut StorageSlots::default(),
        &TestHasher,
    )
    .expect("Function run failed.");
    (result.gas_counter, result.value)
}

#[test]
fn hash_chain_matches_the_reference_definition() {
    for n in 0..=50 {
        let (_, value) = run_hash_chain(n, u64::MAX);
        assert_eq!(
            value,
            RunResultValue::Success(Value::Felt(reference_hash_chain(&TestHasher, n))),
            "mismatch at n = {n}"
        );
    }
}

#[test]
fn hash_chain_with_an_exact_budget_succeeds() {
    let (gas_counter, value) = run_hash_chain(3, 3 * step_cost());
    assert_eq!(value, RunResultValue::Success(Value::Felt(reference_hash_chain(&TestHasher, 3))));
    assert_eq!(gas_counter, 0);
}

#[test]
fn hash_chain_one_unit_short_aborts() {
    let (gas_counter, value) = run_hash_chain(3, 3 * step_cost() - 1);
    // The abort payload convention is the single-element array `[1]`,
    // preserved byte for byte; no partial hash result is observable.
    let payload = extract_matches!(value, RunResultValue::Panic);
    assert_eq!(payload, out_of_gas_payload());
    assert_eq!(payload, vec![Felt252::ONE]);
    // The run stops exactly at the failed pedersen check of the third step.
    assert_eq!(gas_counter, token_gas_cost(CostTokenType::Pedersen) - 1);
}

#[test]
fn insufficient_budgets_never_produce_a_partial_result() {
    for available_gas in 0..3 * step_cost() {
        let (_, value) = run_hash_chain(3, available_gas);
        assert_eq!(
            value,
            RunResultValue::Panic(out_of_gas_payload()),
            "expected an abort under budget {available_gas}"
        );
    }
}

#[test]
fn entry_point_combines_storage_with_the_helper_result() {
    let program = build_program();
    let function = program.find_function("get_value").expect("Failed finding the function");
    let mut storage = StorageSlots::default();
    storage.write("my_storage_var".into(), Felt252::from(5));
    let before = storage.clone();

    let result = run(&program, &function.id, vec![], u64::MAX, &mut storage, &TestHasher)
        .expect("Function run failed.");
    assert_eq!(result.value, RunResultValue::Success(Value::Felt(Felt252::from(6))));
    // The entry point only reads its slot; the combined value is not written
    // back, so storage is unchanged.
    assert_eq!(storage, before);
}

#[test]
fn reruns_are_deterministic() {
    let program = build_program();
    let mut first_storage = StorageSlots::default();
    first_storage.write("seed".into(), Felt252::from(42));
    let mut second_storage = first_storage.clone();

    let available_gas = 7 * step_cost();
    let first = run(
        &program,
        &"hash_chain".into(),
        vec![Felt252::from(7).into()],
        available_gas,
        &mut first_storage,
        &TestHasher,
    )
    .expect("Function run failed.");
    let second = run(
        &program,
        &"hash_chain".into(),
        vec![Felt252::from(7).into()],
        available_gas,
        &mut second_storage,
        &TestHasher,
    )
    .expect("Function run failed.");
    assert_eq!(first, second);
    assert_eq!(first_storage, second_storage);
}

#[test]
fn pedersen_chain_composes_the_real_primitive() {
    let program = build_program();
    let result = run(
        &program,
        &"hash_chain".into(),
        vec![Felt252::TWO.into()],
        u64::MAX,
        &mut StorageSlots::default(),
        &PedersenHasher,
    )
    .expect("Function run failed.");
    let hasher = PedersenHasher;
    let expected = hasher.hash(&hasher.hash(&Felt252::ZERO, &Felt252::ONE), &Felt252::TWO);
    assert_eq!(result.value, RunResultValue::Success(Value::Felt(expected)));
}

#[test]
fn pedersen_matches_the_published_test_vector() {
    let x = Felt252::from_hex("0x3d937c035c878245caf64531a5756109c53068da139362728feb561405371cb")
        .unwrap();
    let y = Felt252::from_hex("0x208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a")
        .unwrap();
    let expected =
        Felt252::from_hex("0x30e480bed5fe53fa909cc0f8c4d99b8f9f2c016be4c41e13a4848797979c662")
            .unwrap();
    assert_eq!(PedersenHasher.hash(&x, &y), expected);
}

#[test]
fn unknown_entry_point_suffix_is_not_found() {
    assert_matches!(build_program().find_function("withdraw"), None);
}
