//! Various utility macros

/// Assert that an expression tree evaluates to the given value
#[macro_export]
macro_rules! evaluates_to (
    ($tree:expr, $value:expr) => {{
        let tree = &$tree;
        let value: f64 = $value;
        let result = tree.evaluate();

        info!("{} evaluated to {}", tree, result);
        assert_eq!(result, value, "{} should evaluate to {}", tree, value)
    }}
);
