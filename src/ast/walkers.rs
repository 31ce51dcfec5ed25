//! Small analyses built on the walkers in `visit`

use super::visit::{MutVisitor, Visitor};
use super::{BinaryOperation, Expression, ExpressionKind, FunctionCall, Variable};
use fxhash::FxHashSet;

/// Collects distinct variable names in the order they are first seen
#[derive(Default)]
struct VariableCollector<'node> {
    seen: FxHashSet<&'node str>,
    names: Vec<&'node str>,
}

impl<'node> Visitor<'node> for VariableCollector<'node> {
    fn visit_variable(&mut self, variable: &'node Variable) {
        if self.seen.insert(variable.name()) {
            self.names.push(variable.name());
        }
    }
}

/// Counts nodes and tracks the deepest point reached
#[derive(Default)]
struct TreeStats {
    nodes: usize,
    current_depth: usize,
    max_depth: usize,
}

impl<'node> Visitor<'node> for TreeStats {
    fn visit_expression(&mut self, expression: &'node Expression) {
        self.nodes += 1;
        self.current_depth += 1;
        if self.current_depth > self.max_depth {
            self.max_depth = self.current_depth;
        }

        self.super_expression(expression);

        self.current_depth -= 1;
    }
}

/// Replaces variables with a given name by variables with another name
struct VariableRenamer<'a> {
    from: &'a str,
    to: &'a str,
    renamed: usize,
}

impl<'a, 'node> MutVisitor<'node> for VariableRenamer<'a> {
    fn visit_expression(&mut self, expression: &'node mut Expression) {
        let matches = match expression.kind() {
            ExpressionKind::Variable(v) => v.name() == self.from,
            _ => false,
        };

        if matches {
            *expression = Variable::new(self.to).into();
            self.renamed += 1;
        } else {
            self.super_expression(expression);
        }
    }

    fn visit_binary_operation(&mut self, binop: &'node mut BinaryOperation) {
        trace!("Renaming below {:?}", binop.operator());
        self.super_binary_operation(binop);
    }

    fn visit_function_call(&mut self, call: &'node mut FunctionCall) {
        trace!("Renaming below {}", call.name());
        self.super_function_call(call);
    }
}

impl Expression {
    /// All the distinct variable names used in this tree, in the order they
    /// first appear (left to right)
    pub fn variables(&self) -> Vec<&str> {
        let mut collector = VariableCollector::default();
        collector.visit_expression(self);
        collector.names
    }

    /// Number of nodes in this tree, including this one
    pub fn node_count(&self) -> usize {
        let mut stats = TreeStats::default();
        stats.visit_expression(self);
        stats.nodes
    }

    /// Length of the longest path from this node down to a leaf, counted in
    /// nodes. A lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut stats = TreeStats::default();
        stats.visit_expression(self);
        stats.max_depth
    }

    /// Rename every variable called `from` to `to`, in place. Returns the
    /// number of variable nodes that were renamed.
    pub fn rename_variable(&mut self, from: &str, to: &str) -> usize {
        let mut renamer = VariableRenamer {
            from,
            to,
            renamed: 0,
        };
        renamer.visit_expression(self);
        debug!("Renamed {} occurrences of {:?} to {:?}", renamer.renamed, from, to);
        renamer.renamed
    }
}
