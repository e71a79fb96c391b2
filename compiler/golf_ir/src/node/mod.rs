//! IR Nodes
//!
//! A closed tagged union of node kinds. Every node carries an optional
//! static [`ValueType`]; `None` means "not yet inferred".
//!
//! # Design Notes
//!
//! - Nodes are immutable. [`Node`] is an `Arc` handle, so cloning is a
//!   reference-count bump and a rewrite builds a new parent that shares
//!   every untouched child.
//! - Equality and hashing are structural, so nodes can key pure-function
//!   caches directly.
//! - Every consumer matches `NodeKind` exhaustively; adding a kind is a
//!   compile error everywhere it needs handling.

mod traverse;

pub use traverse::Children;

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;

use crate::op::{Assoc, OpCode};
use crate::types::ValueType;

/// Identifier and operator spellings.
pub type Name = Arc<str>;

/// Shared handle to an immutable IR node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Node(Arc<NodeData>);

#[derive(Eq, PartialEq, Hash)]
struct NodeData {
    kind: NodeKind,
    ty: Option<ValueType>,
}

/// Node variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// Root of a compilation; `body` is always a `Block`.
    Program { body: Node },

    /// Statements executed in order.
    Block(Vec<Node>),

    /// Observably equivalent alternatives. Exactly one survives emission.
    Variants(Vec<Node>),

    /// A name. `builtin` names refer to target builtins and are never renamed.
    Identifier { name: Name, builtin: bool },

    IntegerLiteral(BigInt),

    TextLiteral(String),

    Assignment { variable: Node, value: Node },

    FunctionCall { ident: Node, args: Vec<Node> },

    MethodCall {
        object: Node,
        ident: Node,
        args: Vec<Node>,
    },

    /// A language-neutral operation, not yet lowered to target syntax.
    Operation { op: OpCode, args: Vec<Node> },

    /// An operation lowered to a concrete infix operator.
    BinaryOp {
        op: OpCode,
        name: Name,
        precedence: u8,
        assoc: Assoc,
        left: Node,
        right: Node,
    },

    /// An operation lowered to a concrete prefix operator.
    UnaryOp {
        op: OpCode,
        name: Name,
        precedence: u8,
        arg: Node,
    },

    ConditionalOp {
        condition: Node,
        consequent: Node,
        alternate: Node,
    },

    ListConstructor(Vec<Node>),

    /// `collection[index]`. `one_indexed` is the convention of `index`, not
    /// of any target.
    IndexCall {
        collection: Node,
        index: Node,
        one_indexed: bool,
    },

    /// `collection[low:high:step]`.
    RangeIndexCall {
        collection: Node,
        low: Node,
        high: Node,
        step: Node,
        one_indexed: bool,
    },

    IfStatement {
        condition: Node,
        consequent: Node,
        alternate: Option<Node>,
    },

    WhileLoop { condition: Node, body: Node },

    /// Counted loop. `low` defaults to 0 and `increment` to 1; `inclusive`
    /// loops also visit `high`.
    ForRange {
        variable: Node,
        low: Node,
        high: Node,
        increment: Node,
        body: Node,
        inclusive: bool,
    },

    ForEach {
        variable: Node,
        collection: Node,
        body: Node,
    },

    ForEachKey {
        variable: Node,
        table: Node,
        body: Node,
    },

    ForEachPair {
        key: Node,
        value: Node,
        table: Node,
        body: Node,
    },

    /// `for (init; condition; append) body`
    ForCLike {
        init: Node,
        condition: Node,
        append: Node,
        body: Node,
    },

    ImportStatement { name: Name, modules: Vec<Name> },
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node(Arc::new(NodeData { kind, ty: None }))
    }

    pub fn with_kind_and_type(kind: NodeKind, ty: Option<ValueType>) -> Self {
        Node(Arc::new(NodeData { kind, ty }))
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.0.kind
    }

    /// The explicitly attached type, if any.
    #[inline]
    pub fn annotated_type(&self) -> Option<&ValueType> {
        self.0.ty.as_ref()
    }

    /// The attached type, falling back to what a literal obviously is.
    pub fn value_type(&self) -> Option<ValueType> {
        if let Some(ty) = &self.0.ty {
            return Some(ty.clone());
        }
        match self.kind() {
            NodeKind::IntegerLiteral(value) => Some(ValueType::int_exact(value)),
            NodeKind::TextLiteral(_) => Some(ValueType::Text),
            _ => None,
        }
    }

    /// A copy of this node carrying `ty`.
    pub fn with_type(&self, ty: ValueType) -> Node {
        Node::with_kind_and_type(self.kind().clone(), Some(ty))
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Node, b: &Node) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Short kind name for diagnostics and logs.
    pub fn kind_name(&self) -> &'static str {
        match self.kind() {
            NodeKind::Program { .. } => "Program",
            NodeKind::Block(_) => "Block",
            NodeKind::Variants(_) => "Variants",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::IntegerLiteral(_) => "IntegerLiteral",
            NodeKind::TextLiteral(_) => "TextLiteral",
            NodeKind::Assignment { .. } => "Assignment",
            NodeKind::FunctionCall { .. } => "FunctionCall",
            NodeKind::MethodCall { .. } => "MethodCall",
            NodeKind::Operation { .. } => "Operation",
            NodeKind::BinaryOp { .. } => "BinaryOp",
            NodeKind::UnaryOp { .. } => "UnaryOp",
            NodeKind::ConditionalOp { .. } => "ConditionalOp",
            NodeKind::ListConstructor(_) => "ListConstructor",
            NodeKind::IndexCall { .. } => "IndexCall",
            NodeKind::RangeIndexCall { .. } => "RangeIndexCall",
            NodeKind::IfStatement { .. } => "IfStatement",
            NodeKind::WhileLoop { .. } => "WhileLoop",
            NodeKind::ForRange { .. } => "ForRange",
            NodeKind::ForEach { .. } => "ForEach",
            NodeKind::ForEachKey { .. } => "ForEachKey",
            NodeKind::ForEachPair { .. } => "ForEachPair",
            NodeKind::ForCLike { .. } => "ForCLike",
            NodeKind::ImportStatement { .. } => "ImportStatement",
        }
    }

    /// A one-line description naming the node, for error messages.
    pub fn describe(&self) -> String {
        match self.kind() {
            NodeKind::Operation { op, .. } => format!("Operation `{op}`"),
            NodeKind::Identifier { name, .. } => format!("Identifier `{name}`"),
            NodeKind::BinaryOp { name, .. } | NodeKind::UnaryOp { name, .. } => {
                format!("{} `{name}`", self.kind_name())
            }
            _ => self.kind_name().to_string(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.ty {
            Some(ty) => write!(f, "{:?}: {ty}", self.0.kind),
            None => write!(f, "{:?}", self.0.kind),
        }
    }
}
