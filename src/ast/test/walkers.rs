//! Tests for the walker-based analyses

use super::*;
use crate::ast::visit::Visitor;
use pretty_assertions::assert_eq;

#[test]
fn variables_in_first_seen_order() {
    let tree = add(
        multiply(variable("b"), variable("a")),
        divide(variable("b"), sqrt(variable("c"))),
    );
    assert_eq!(tree.variables(), vec!["b", "a", "c"]);
    assert!(number(3.0).variables().is_empty());
}

#[test]
fn counts_and_depth() {
    let tree = sample_tree();
    // abs, *, var, sqrt, -, 32, 16
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.depth(), 5);

    assert_eq!(number(1.0).node_count(), 1);
    assert_eq!(variable("x").depth(), 1);
}

#[test]
fn rename_in_place() {
    crate::test::setup();

    let mut tree = add(variable("x"), multiply(variable("x"), variable("y")));
    assert_eq!(tree.rename_variable("x", "z"), 2);
    assert_eq!(tree, add(variable("z"), multiply(variable("z"), variable("y"))));

    assert_eq!(tree.rename_variable("missing", "w"), 0);
    assert_eq!(tree.variables(), vec!["z", "y"]);
}

#[test]
fn rename_root_variable() {
    let mut tree = variable("x");
    assert_eq!(tree.rename_variable("x", "y"), 1);
    assert_eq!(tree, variable("y"));
}

#[test]
fn walker_visits_left_before_right() {
    #[derive(Default)]
    struct Order(Vec<f64>);

    impl<'node> Visitor<'node> for Order {
        fn visit_number(&mut self, number: &'node Number) {
            self.0.push(number.value());
        }
    }

    let tree = subtract(
        add(number(1.0), number(2.0)),
        abs(divide(number(3.0), number(4.0))),
    );
    let mut order = Order::default();
    order.visit_expression(&tree);
    assert_eq!(order.0, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn walker_can_skip_subtrees() {
    /// Counts numbers, but not inside function calls
    #[derive(Default)]
    struct OutsideCalls(usize);

    impl<'node> Visitor<'node> for OutsideCalls {
        fn visit_number(&mut self, _number: &'node Number) {
            self.0 += 1;
        }

        fn visit_function_call(&mut self, _call: &'node FunctionCall) {}
    }

    let mut counter = OutsideCalls::default();
    counter.visit_expression(&sample_tree());
    assert_eq!(counter.0, 0);

    let mut counter = OutsideCalls::default();
    counter.visit_expression(&add(number(1.0), sqrt(number(2.0))));
    assert_eq!(counter.0, 1);
}
