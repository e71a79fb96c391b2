//! Python emitter.
//!
//! A compound statement whose body holds only simple statements keeps the
//! body on its own line after the colon (`while c:a=1;b=2`). Any other body
//! goes on following lines, one space of indentation per level.

use golf_emit::precedence::{binding, wrap};
use golf_emit::{
    adjust_index, emit_integer_literal, emit_text_literal, tokens, EmitError, Emitter,
    OperandSide, PrecedenceTable, QuotingScheme, TokenTree,
};
use golf_ir::build::{int_value, is_int_literal};
use golf_ir::stack::ensure_sufficient_stack;
use golf_ir::{Node, NodeKind, OpCode};
use num_bigint::Sign;

const TARGET: &str = "Python";

const QUOTING: &[QuotingScheme] = &[
    QuotingScheme {
        open: "\"",
        close: "\"",
        escapes: &[('\\', "\\\\"), ('"', "\\\""), ('\n', "\\n"), ('\r', "\\r")],
    },
    QuotingScheme {
        open: "'",
        close: "'",
        escapes: &[('\\', "\\\\"), ('\'', "\\'"), ('\n', "\\n"), ('\r', "\\r")],
    },
];

pub struct PythonEmitter {
    precedence: PrecedenceTable,
}

impl PythonEmitter {
    pub fn new(precedence: PrecedenceTable) -> Self {
        PythonEmitter { precedence }
    }
}

impl Emitter for PythonEmitter {
    fn emit_program(&self, program: &Node) -> Result<TokenTree, EmitError> {
        let NodeKind::Program { body } = program.kind() else {
            return Err(EmitError::unsupported(TARGET, program, "not a program"));
        };
        let emitted = statements(body)
            .into_iter()
            .map(|statement| self.statement(&statement, 0))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TokenTree::join(emitted, "\n"))
    }
}

/// Statements of a body, with nested blocks spliced in.
fn statements(body: &Node) -> Vec<Node> {
    match body.kind() {
        NodeKind::Block(children) => children.iter().flat_map(statements).collect(),
        _ => vec![body.clone()],
    }
}

fn is_compound(node: &Node) -> bool {
    matches!(
        node.kind(),
        NodeKind::IfStatement { .. }
            | NodeKind::WhileLoop { .. }
            | NodeKind::ForRange { .. }
            | NodeKind::ForEach { .. }
            | NodeKind::ForEachKey { .. }
            | NodeKind::ForEachPair { .. }
            | NodeKind::ForCLike { .. }
    )
}

fn indent(depth: usize) -> TokenTree {
    TokenTree::text(" ".repeat(depth))
}

fn is_negative_literal(node: &Node) -> bool {
    matches!(node.kind(), NodeKind::IntegerLiteral(value) if value.sign() == Sign::Minus)
}

fn grouped(tokens: TokenTree) -> TokenTree {
    tokens!["(", tokens, ")"]
}

impl PythonEmitter {
    /// The part of a compound statement after its colon.
    /// An empty suite still needs an expression after the colon.
    fn body(&self, body: &Node, depth: usize) -> Result<TokenTree, EmitError> {
        let statements = statements(body);
        if statements.iter().any(is_compound) {
            let mut lines = Vec::with_capacity(statements.len() * 3);
            for statement in &statements {
                lines.push(TokenTree::text("\n"));
                lines.push(indent(depth + 1));
                lines.push(self.statement(statement, depth + 1)?);
            }
            Ok(TokenTree::Seq(lines))
        } else if statements.is_empty() {
            Ok(TokenTree::text("0"))
        } else {
            let emitted = statements
                .iter()
                .map(|statement| self.statement(statement, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TokenTree::join(emitted, ";"))
        }
    }

    fn list(&self, items: &[Node]) -> Result<TokenTree, EmitError> {
        let emitted = items
            .iter()
            .map(|item| self.expr(item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TokenTree::join(emitted, ","))
    }

    fn range_arguments(
        &self,
        low: &Node,
        high: &Node,
        increment: &Node,
        inclusive: bool,
    ) -> Result<TokenTree, EmitError> {
        let high = if inclusive {
            match int_value(increment).map(|step| step.sign()) {
                Some(Sign::Plus) => adjust_index(high, false, true).into_node(&self.precedence),
                Some(Sign::Minus) => adjust_index(high, true, false).into_node(&self.precedence),
                _ => {
                    return Err(EmitError::unsupported(
                        TARGET,
                        increment,
                        "inclusive range with a step of unknown sign",
                    ))
                }
            }
        } else {
            high.clone()
        };
        let mut args = Vec::with_capacity(3);
        if !is_int_literal(low, 0) || !is_int_literal(increment, 1) {
            args.push(self.expr(low)?);
        }
        args.push(self.expr(&high)?);
        if !is_int_literal(increment, 1) {
            args.push(self.expr(increment)?);
        }
        Ok(TokenTree::join(args, ","))
    }

    fn statement(&self, node: &Node, depth: usize) -> Result<TokenTree, EmitError> {
        ensure_sufficient_stack(|| match node.kind() {
            NodeKind::Assignment { variable, value } => {
                Ok(tokens![self.expr(variable)?, "=", self.expr(value)?])
            }
            NodeKind::WhileLoop { condition, body } => Ok(tokens![
                "while",
                self.expr(condition)?,
                ":",
                self.body(body, depth)?
            ]),
            NodeKind::ForRange {
                variable,
                low,
                high,
                increment,
                body,
                inclusive,
            } => Ok(tokens![
                "for",
                self.expr(variable)?,
                "in",
                "range(",
                self.range_arguments(low, high, increment, *inclusive)?,
                "):",
                self.body(body, depth)?
            ]),
            NodeKind::ForEach {
                variable,
                collection,
                body,
            } => Ok(tokens![
                "for",
                self.expr(variable)?,
                "in",
                self.expr(collection)?,
                ":",
                self.body(body, depth)?
            ]),
            NodeKind::ForEachKey {
                variable,
                table,
                body,
            } => Ok(tokens![
                "for",
                self.expr(variable)?,
                "in",
                self.expr(table)?,
                ":",
                self.body(body, depth)?
            ]),
            NodeKind::ForEachPair {
                key,
                value,
                table,
                body,
            } => Ok(tokens![
                "for",
                self.expr(key)?,
                ",",
                self.expr(value)?,
                "in",
                self.receiver(table)?,
                ".items():",
                self.body(body, depth)?
            ]),
            NodeKind::IfStatement {
                condition,
                consequent,
                alternate,
            } => {
                let alternate = match alternate {
                    Some(alternate) => tokens![
                        "\n",
                        indent(depth),
                        "else:",
                        self.body(alternate, depth)?
                    ],
                    None => TokenTree::empty(),
                };
                Ok(tokens![
                    "if",
                    self.expr(condition)?,
                    ":",
                    self.body(consequent, depth)?,
                    alternate
                ])
            }
            NodeKind::ImportStatement { name, modules } => Ok(tokens![
                name.to_string(),
                TokenTree::join(
                    modules.iter().map(|module| TokenTree::text(module.to_string())),
                    ","
                )
            ]),
            NodeKind::ForCLike { .. } => Err(EmitError::unsupported(
                TARGET,
                node,
                "no C-style for loop",
            )),
            _ => self.expr(node),
        })
    }

    fn operand(&self, child: &Node, parent: &Node, side: OperandSide) -> Result<TokenTree, EmitError> {
        let tokens = self.expr(child)?;
        // `-2**2` is `-(2**2)`.
        if side == OperandSide::Left
            && is_negative_literal(child)
            && matches!(parent.kind(), NodeKind::BinaryOp { op: OpCode::Pow, .. })
        {
            return Ok(grouped(tokens));
        }
        Ok(wrap(tokens, child, parent, side))
    }

    /// Operands of a conditional expression, which binds looser than
    /// every operator.
    fn conditional_operand(&self, node: &Node) -> Result<TokenTree, EmitError> {
        let tokens = self.expr(node)?;
        Ok(match node.kind() {
            NodeKind::ConditionalOp { .. } => grouped(tokens),
            _ => tokens,
        })
    }

    /// Receivers of `.` and `[]`; `1.x` would read as a float.
    fn receiver(&self, node: &Node) -> Result<TokenTree, EmitError> {
        let tokens = self.expr(node)?;
        Ok(
            if binding(node).is_some() || matches!(node.kind(), NodeKind::IntegerLiteral(_)) {
                grouped(tokens)
            } else {
                tokens
            },
        )
    }

    fn expr(&self, node: &Node) -> Result<TokenTree, EmitError> {
        ensure_sufficient_stack(|| match node.kind() {
            NodeKind::Identifier { name, .. } => Ok(TokenTree::text(name.to_string())),
            NodeKind::IntegerLiteral(value) => Ok(TokenTree::text(emit_integer_literal(value))),
            NodeKind::TextLiteral(value) => emit_text_literal(value, QUOTING)
                .map(TokenTree::text)
                .ok_or_else(|| EmitError::unsupported(TARGET, node, "no quoting scheme")),
            NodeKind::FunctionCall { ident, args } => {
                Ok(tokens![self.expr(ident)?, "(", self.list(args)?, ")"])
            }
            NodeKind::MethodCall {
                object,
                ident,
                args,
            } => Ok(tokens![
                self.receiver(object)?,
                ".",
                self.expr(ident)?,
                "(",
                self.list(args)?,
                ")"
            ]),
            NodeKind::BinaryOp {
                name, left, right, ..
            } => Ok(tokens![
                self.operand(left, node, OperandSide::Left)?,
                name.to_string(),
                self.operand(right, node, OperandSide::Right)?
            ]),
            NodeKind::UnaryOp { name, arg, .. } => Ok(tokens![
                name.to_string(),
                self.operand(arg, node, OperandSide::Prefix)?
            ]),
            NodeKind::ConditionalOp {
                condition,
                consequent,
                alternate,
            } => Ok(tokens![
                self.conditional_operand(consequent)?,
                "if",
                self.conditional_operand(condition)?,
                "else",
                self.conditional_operand(alternate)?
            ]),
            NodeKind::ListConstructor(items) => Ok(tokens!["[", self.list(items)?, "]"]),
            NodeKind::IndexCall {
                collection,
                index,
                one_indexed,
            } => {
                let index = adjust_index(index, *one_indexed, false).into_node(&self.precedence);
                Ok(tokens![
                    self.receiver(collection)?,
                    "[",
                    self.expr(&index)?,
                    "]"
                ])
            }
            NodeKind::RangeIndexCall {
                collection,
                low,
                high,
                step,
                one_indexed,
            } => {
                // A one-based inclusive range ends where the zero-based
                // half-open one does, so only `low` moves.
                let low = adjust_index(low, *one_indexed, false).into_node(&self.precedence);
                let low = if is_int_literal(&low, 0) {
                    TokenTree::empty()
                } else {
                    self.expr(&low)?
                };
                let step = if is_int_literal(step, 1) {
                    TokenTree::empty()
                } else {
                    tokens![":", self.expr(step)?]
                };
                Ok(tokens![
                    self.receiver(collection)?,
                    "[",
                    low,
                    ":",
                    self.expr(high)?,
                    step,
                    "]"
                ])
            }
            NodeKind::Variants(_) => Err(EmitError::UnresolvedVariants { target: TARGET }),
            NodeKind::Operation { op, .. } => Err(EmitError::unsupported(
                TARGET,
                node,
                format!("`{op}` has no Python spelling"),
            )),
            NodeKind::Program { .. }
            | NodeKind::Block(_)
            | NodeKind::Assignment { .. }
            | NodeKind::IfStatement { .. }
            | NodeKind::WhileLoop { .. }
            | NodeKind::ForRange { .. }
            | NodeKind::ForEach { .. }
            | NodeKind::ForEachKey { .. }
            | NodeKind::ForEachPair { .. }
            | NodeKind::ForCLike { .. }
            | NodeKind::ImportStatement { .. } => {
                Err(EmitError::unsupported(TARGET, node, "statement used as an expression"))
            }
        })
    }
}
