//! Lua emitter.

use golf_emit::precedence::{binding, wrap};
use golf_emit::{
    adjust_index, emit_text_literal, tokens, EmitError, Emitter, IntegerRange, OperandSide,
    PrecedenceTable, QuotingScheme, TokenTree,
};
use golf_ir::build::is_int_literal;
use golf_ir::stack::ensure_sufficient_stack;
use golf_ir::{Node, NodeKind, OpCode};
use num_bigint::Sign;

const TARGET: &str = "Lua";

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

pub struct LuaEmitter {
    precedence: PrecedenceTable,
    integers: IntegerRange,
}

impl LuaEmitter {
    /// `precedence` spells the offsets added when converting indices.
    pub fn new(precedence: PrecedenceTable) -> Self {
        LuaEmitter {
            precedence,
            integers: IntegerRange::i64(TARGET),
        }
    }
}

impl Emitter for LuaEmitter {
    fn emit_program(&self, program: &Node) -> Result<TokenTree, EmitError> {
        match program.kind() {
            NodeKind::Program { body } => self.block(body),
            _ => Err(EmitError::unsupported(TARGET, program, "not a program")),
        }
    }
}

/// Statements of a body, which may be a single statement.
fn statements(body: &Node) -> &[Node] {
    match body.kind() {
        NodeKind::Block(children) => children,
        _ => std::slice::from_ref(body),
    }
}

fn is_negative_literal(node: &Node) -> bool {
    matches!(node.kind(), NodeKind::IntegerLiteral(value) if value.sign() == Sign::Minus)
}

/// Receivers of `:` and `[]` that Lua only accepts parenthesized.
fn needs_grouping(node: &Node) -> bool {
    binding(node).is_some()
        || matches!(
            node.kind(),
            NodeKind::IntegerLiteral(_) | NodeKind::TextLiteral(_) | NodeKind::ListConstructor(_)
        )
}

fn grouped(tokens: TokenTree) -> TokenTree {
    tokens!["(", tokens, ")"]
}

impl LuaEmitter {
    fn block(&self, body: &Node) -> Result<TokenTree, EmitError> {
        let emitted = statements(body)
            .iter()
            .map(|statement| self.statement(statement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TokenTree::join(emitted, "\n"))
    }

    fn list(&self, items: &[Node]) -> Result<TokenTree, EmitError> {
        let emitted = items
            .iter()
            .map(|item| self.expr(item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TokenTree::join(emitted, ","))
    }

    /// Call arguments; a lone text literal needs no parentheses.
    fn arguments(&self, args: &[Node]) -> Result<TokenTree, EmitError> {
        if let [arg] = args {
            if let NodeKind::TextLiteral(_) = arg.kind() {
                return self.expr(arg);
            }
        }
        Ok(tokens!["(", self.list(args)?, ")"])
    }

    fn statement(&self, node: &Node) -> Result<TokenTree, EmitError> {
        ensure_sufficient_stack(|| match node.kind() {
            NodeKind::Block(_) => self.block(node),
            NodeKind::Assignment { variable, value } => {
                Ok(tokens![self.expr(variable)?, "=", self.expr(value)?])
            }
            NodeKind::WhileLoop { condition, body } => Ok(tokens![
                "while",
                self.expr(condition)?,
                "do",
                self.block(body)?,
                "end"
            ]),
            NodeKind::ForRange {
                inclusive: false, ..
            } => Err(EmitError::unsupported(
                TARGET,
                node,
                "numeric for loops include their upper bound",
            )),
            NodeKind::ForRange {
                variable,
                low,
                high,
                increment,
                body,
                inclusive: true,
            } => {
                let step = if is_int_literal(increment, 1) {
                    TokenTree::empty()
                } else {
                    tokens![",", self.expr(increment)?]
                };
                Ok(tokens![
                    "for",
                    self.expr(variable)?,
                    "=",
                    self.expr(low)?,
                    ",",
                    self.expr(high)?,
                    step,
                    "do",
                    self.block(body)?,
                    "end"
                ])
            }
            NodeKind::ForEach {
                variable,
                collection,
                body,
            } => Ok(tokens![
                "for",
                "_,",
                self.expr(variable)?,
                "in",
                "ipairs(",
                self.expr(collection)?,
                ")do",
                self.block(body)?,
                "end"
            ]),
            NodeKind::ForEachKey {
                variable,
                table,
                body,
            } => Ok(tokens![
                "for",
                self.expr(variable)?,
                "in",
                "pairs(",
                self.expr(table)?,
                ")do",
                self.block(body)?,
                "end"
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
                "pairs(",
                self.expr(table)?,
                ")do",
                self.block(body)?,
                "end"
            ]),
            NodeKind::IfStatement {
                condition,
                consequent,
                alternate,
            } => {
                let alternate = match alternate {
                    Some(alternate) => tokens!["else", self.block(alternate)?],
                    None => TokenTree::empty(),
                };
                Ok(tokens![
                    "if",
                    self.expr(condition)?,
                    "then",
                    self.block(consequent)?,
                    alternate,
                    "end"
                ])
            }
            NodeKind::ForCLike { .. } | NodeKind::ImportStatement { .. } => {
                Err(EmitError::unsupported(TARGET, node, "no Lua equivalent"))
            }
            NodeKind::FunctionCall { .. } | NodeKind::MethodCall { .. } => self.expr(node),
            NodeKind::Variants(_) => Err(EmitError::UnresolvedVariants { target: TARGET }),
            _ => Err(EmitError::unsupported(
                TARGET,
                node,
                "only calls can stand as statements",
            )),
        })
    }

    /// `child` as an operand of `parent`, parenthesized where needed.
    fn operand(&self, child: &Node, parent: &Node, side: OperandSide) -> Result<TokenTree, EmitError> {
        let tokens = self.expr(child)?;
        // `-2^2` is `-(2^2)`.
        if side == OperandSide::Left
            && is_negative_literal(child)
            && matches!(parent.kind(), NodeKind::BinaryOp { op: OpCode::Pow, .. })
        {
            return Ok(grouped(tokens));
        }
        Ok(wrap(tokens, child, parent, side))
    }

    fn receiver(&self, node: &Node) -> Result<TokenTree, EmitError> {
        let tokens = self.expr(node)?;
        Ok(if needs_grouping(node) {
            grouped(tokens)
        } else {
            tokens
        })
    }

    fn expr(&self, node: &Node) -> Result<TokenTree, EmitError> {
        self.integers.check_type(node)?;
        ensure_sufficient_stack(|| match node.kind() {
            NodeKind::Identifier { name, .. } => Ok(TokenTree::text(name.to_string())),
            NodeKind::IntegerLiteral(value) => Ok(TokenTree::text(self.integers.emit(value)?)),
            NodeKind::TextLiteral(value) => emit_text_literal(value, QUOTING)
                .map(TokenTree::text)
                .ok_or_else(|| EmitError::unsupported(TARGET, node, "no quoting scheme")),
            NodeKind::FunctionCall { ident, args } => {
                Ok(tokens![self.expr(ident)?, self.arguments(args)?])
            }
            NodeKind::MethodCall {
                object,
                ident,
                args,
            } => Ok(tokens![
                self.receiver(object)?,
                ":",
                self.expr(ident)?,
                self.arguments(args)?
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
            NodeKind::ListConstructor(items) => Ok(tokens!["{", self.list(items)?, "}"]),
            NodeKind::IndexCall {
                collection,
                index,
                one_indexed,
            } => {
                let index = adjust_index(index, *one_indexed, true).into_node(&self.precedence);
                Ok(tokens![
                    self.receiver(collection)?,
                    "[",
                    self.expr(&index)?,
                    "]"
                ])
            }
            NodeKind::Variants(_) => Err(EmitError::UnresolvedVariants { target: TARGET }),
            NodeKind::Operation { op, .. } => Err(EmitError::unsupported(
                TARGET,
                node,
                format!("`{op}` has no Lua spelling"),
            )),
            NodeKind::ConditionalOp { .. } | NodeKind::RangeIndexCall { .. } => {
                Err(EmitError::unsupported(TARGET, node, "no Lua equivalent"))
            }
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
