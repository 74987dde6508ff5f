/// Macro to try to evaluate an expression as a pattern and extract its fields.
/// # Examples:
/// ```
/// use felt_vm_utils::try_extract_matches;
///
/// #[derive(Debug)]
/// enum Outcome {
///     Value(u64),
///     Aborted(Vec<u64>),
/// }
/// let outcome = Outcome::Value(7);
/// if let Some(value) = try_extract_matches!(outcome, Outcome::Value) {
///     assert_eq!(value, 7);
/// }
/// ```
#[macro_export]
macro_rules! try_extract_matches {
    ($e:expr, $variant:path) => {
        if let $variant(x) = $e { Some(x) } else { None }
    };
}

/// Macro to verify an expression matches a pattern and extract its fields,
/// panicking on any other variant.
/// # Examples:
/// ```
/// use felt_vm_utils::extract_matches;
///
/// #[derive(Debug)]
/// enum Outcome {
///     Value(u64),
///     Aborted(Vec<u64>),
/// }
/// let outcome = Outcome::Value(7);
/// let value = extract_matches!(outcome, Outcome::Value);
/// assert_eq!(value, 7);
///
/// // Would panic with 'Variant extract failed: `Aborted([1])` is not of variant
/// // `Outcome::Value`: Expected a plain value!'
/// // let _value = extract_matches!(Outcome::Aborted(vec![1]), Outcome::Value, "Expected a plain value!");
/// ```
#[macro_export]
macro_rules! extract_matches {
    ($e:expr, $variant:path) => {
        match $e {
            $variant(x) => x,
            ref e => {
                panic!("Variant extract failed: `{:?}` is not of variant `{}`", e, stringify!($variant))
            }
        }
    };
    ( $e:expr , $variant:path , $($arg:tt)* ) => {
        match $e {
            $variant(x) => x,
            ref e => panic!("Variant extract failed: `{:?}` is not of variant `{}`: {}",
                e, stringify!($variant), format_args!($($arg)*))
        }
    };
}
