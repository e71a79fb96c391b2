//! Call-tree → IR lowering.
//!
//! [`sexpr`] turns one application into one IR node:
//! 1. operator symbols resolve to canonical codes (`-` and `~` depend on
//!    arity)
//! 2. `for`, `if` and `while` are built directly into statements
//! 3. every other application takes expressions only
//! 4. user callees become `FunctionCall`s, builtins dispatch on their code
//! 5. foldable codes accept n arguments and fold left into binary nodes
//!
//! Arity is checked here and nowhere else.

use golf_ir::build::{
    assignment, block, for_range, function_call, if_statement, int, list, op, program, variants,
    while_loop,
};
use golf_ir::{Node, NodeKind, OpArity, OpCode};

use crate::error::{ArityRange, LoweringError};
use crate::tree::CallTree;
use crate::types::{annotate, lower_type};

/// Operator symbols with one fixed canonical name.
///
/// `-` and `~` are resolved by arity in [`canonical_op`].
const SYMBOL_TABLE: &[(&str, &str)] = &[
    ("+", "add"),
    ("*", "mul"),
    ("^", "pow"),
    ("&", "bit_and"),
    ("|", "bit_or"),
    ("==", "eq"),
    ("!=", "neq"),
    ("<=", "leq"),
    ("<", "lt"),
    (">=", "geq"),
    (">", "gt"),
    ("<-", "assign"),
    ("#", "cardinality"),
    ("..", "concat"),
];

/// Resolve an operator symbol to its canonical name.
///
/// Names that are not symbols pass through unchanged.
pub fn canonical_op(symbol: &str, arity: usize) -> &str {
    match symbol {
        "-" if arity < 2 => "neg",
        "-" => "sub",
        "~" if arity < 2 => "bit_not",
        "~" => "bit_xor",
        _ => SYMBOL_TABLE
            .iter()
            .find(|(sym, _)| *sym == symbol)
            .map_or(symbol, |(_, name)| name),
    }
}

/// Argument checks for one application, reporting against its canonical name.
struct Application<'a> {
    op: &'a str,
    args: &'a [Node],
}

impl Application<'_> {
    fn expect_arity(&self, expected: ArityRange) -> Result<(), LoweringError> {
        if expected.contains(self.args.len()) {
            Ok(())
        } else {
            Err(LoweringError::Arity {
                op: self.op.to_string(),
                expected,
                actual: self.args.len(),
            })
        }
    }

    fn expect_expr(&self, index: usize) -> Result<(), LoweringError> {
        match self.args.get(index).map(Node::kind) {
            Some(NodeKind::Block(_)) => Err(LoweringError::UnexpectedBlock {
                op: self.op.to_string(),
                position: index + 1,
            }),
            _ => Ok(()),
        }
    }

    fn expect_exprs(&self) -> Result<(), LoweringError> {
        (0..self.args.len()).try_for_each(|index| self.expect_expr(index))
    }

    fn expect_block(&self, index: usize) -> Result<(), LoweringError> {
        match self.args.get(index) {
            Some(arg) if matches!(arg.kind(), NodeKind::Block(_)) => Ok(()),
            Some(arg) => Err(LoweringError::ExpectedBlock {
                op: self.op.to_string(),
                position: index + 1,
                found: arg.kind_name(),
            }),
            None => Ok(()),
        }
    }

    fn expect_identifier(&self, index: usize) -> Result<(), LoweringError> {
        match self.args.get(index) {
            Some(arg) if matches!(arg.kind(), NodeKind::Identifier { .. }) => Ok(()),
            Some(arg) => Err(LoweringError::ExpectedIdentifier {
                op: self.op.to_string(),
                position: index + 1,
                found: arg.kind_name(),
            }),
            None => Ok(()),
        }
    }
}

/// Lower one application `(callee args...)` whose arguments are already IR.
pub fn sexpr(callee: &Node, args: Vec<Node>) -> Result<Node, LoweringError> {
    let NodeKind::Identifier { name, builtin } = callee.kind() else {
        return Err(LoweringError::ExpectedIdentifier {
            op: "application".to_string(),
            position: 0,
            found: callee.kind_name(),
        });
    };
    let opname = canonical_op(name, args.len());
    let app = Application { op: opname, args: &args };

    match opname {
        "for" => {
            app.expect_arity(ArityRange::between(4, 5))?;
            app.expect_identifier(0)?;
            for index in 1..args.len() - 1 {
                app.expect_expr(index)?;
            }
            app.expect_block(args.len() - 1)?;
            let mut args = args;
            let Some(body) = args.pop() else {
                unreachable!("arity checked above");
            };
            let increment = if args.len() == 4 { args.pop() } else { None };
            let mut args = args.into_iter();
            let (Some(variable), Some(low), Some(high)) = (args.next(), args.next(), args.next())
            else {
                unreachable!("arity checked above");
            };
            return Ok(for_range(
                variable,
                low,
                high,
                increment.unwrap_or_else(|| int(1)),
                body,
            ));
        }
        "if" => {
            app.expect_arity(ArityRange::between(2, 3))?;
            app.expect_expr(0)?;
            app.expect_block(1)?;
            app.expect_block(2)?;
            let mut args = args.into_iter();
            let (Some(condition), Some(consequent)) = (args.next(), args.next()) else {
                unreachable!("arity checked above");
            };
            return Ok(if_statement(condition, consequent, args.next()));
        }
        "while" => {
            app.expect_arity(ArityRange::exactly(2))?;
            app.expect_expr(0)?;
            app.expect_block(1)?;
            let mut args = args.into_iter();
            let (Some(condition), Some(body)) = (args.next(), args.next()) else {
                unreachable!("arity checked above");
            };
            return Ok(while_loop(condition, body));
        }
        _ => {}
    }

    app.expect_exprs()?;
    if !builtin {
        return Ok(function_call(callee.clone(), args));
    }

    match opname {
        "assign" => {
            app.expect_arity(ArityRange::exactly(2))?;
            app.expect_identifier(0)?;
            let mut args = args.into_iter();
            let (Some(variable), Some(value)) = (args.next(), args.next()) else {
                unreachable!("arity checked above");
            };
            return Ok(assignment(variable, value));
        }
        "list" => return Ok(list(args)),
        _ => {}
    }

    let Some(code) = OpCode::from_name(opname) else {
        return Err(LoweringError::UnknownBuiltin(opname.to_string()));
    };
    match code.arity() {
        OpArity::Foldable => {
            app.expect_arity(ArityRange::at_least(2))?;
            Ok(compose(code, args))
        }
        OpArity::Fixed(n) => {
            app.expect_arity(ArityRange::exactly(n))?;
            Ok(op(code, args))
        }
    }
}

/// Left-fold `args` into nested binary applications:
/// `f(a, b, c, d) → f(f(f(a, b), c), d)`.
///
/// Callers guarantee at least two arguments.
pub fn compose(code: OpCode, args: Vec<Node>) -> Node {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return op(code, Vec::new());
    };
    args.fold(first, |acc, next| op(code, vec![acc, next]))
}

/// Lower a raw call-tree bottom-up.
pub fn lower_tree(tree: &CallTree) -> Result<Node, LoweringError> {
    golf_ir::stack::ensure_sufficient_stack(|| match tree {
        CallTree::Leaf(node) => Ok(lower_leaf(node)),
        CallTree::Call { callee, args } => {
            let args = args.iter().map(lower_tree).collect::<Result<Vec<_>, _>>()?;
            sexpr(callee, args)
        }
        CallTree::Block(children) => Ok(block(lower_all(children)?)),
        CallTree::Variants(groups) => {
            let alternatives = groups
                .iter()
                .map(|group| {
                    let mut children = lower_all(group)?;
                    Ok(if children.len() == 1 {
                        children.remove(0)
                    } else {
                        block(children)
                    })
                })
                .collect::<Result<Vec<_>, LoweringError>>()?;
            Ok(variants(alternatives))
        }
        CallTree::Annotated { expr, ty } => {
            let node = lower_tree(expr)?;
            Ok(annotate(node, Some(lower_type(ty)?)))
        }
    })
}

/// A bare nullary builtin such as `true` or `argv` is the operation itself.
fn lower_leaf(node: &Node) -> Node {
    if let NodeKind::Identifier {
        name,
        builtin: true,
    } = node.kind()
    {
        if let Some(code) = OpCode::from_name(name) {
            if code.arity() == OpArity::Fixed(0) {
                return op(code, Vec::new());
            }
        }
    }
    node.clone()
}

fn lower_all(trees: &[CallTree]) -> Result<Vec<Node>, LoweringError> {
    trees.iter().map(lower_tree).collect()
}

/// Lower top-level statements into a `Program`.
#[tracing::instrument(level = "debug", skip_all, fields(statements = trees.len()))]
pub fn lower_program(trees: &[CallTree]) -> Result<Node, LoweringError> {
    let statements = lower_all(trees)?;
    Ok(program(block(statements)))
}
