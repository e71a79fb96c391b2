//! Generic child access and structural rebuilding.
//!
//! Every node kind exposes its children in one fixed order. Rewriting
//! engines walk `children()`, transform some of them, and hand the result
//! back to `with_children()`, which rebuilds the same kind around the new
//! children. Paths are sequences of child indices in that same order.

use smallvec::SmallVec;

use super::{Node, NodeKind};
use crate::stack::ensure_sufficient_stack;

/// Children of one node, in traversal order.
pub type Children = SmallVec<[Node; 4]>;

impl Node {
    /// This node's children, in traversal order.
    pub fn children(&self) -> Children {
        let mut out = Children::new();
        match self.kind() {
            NodeKind::Identifier { .. }
            | NodeKind::IntegerLiteral(_)
            | NodeKind::TextLiteral(_)
            | NodeKind::ImportStatement { .. } => {}
            NodeKind::Program { body } => out.push(body.clone()),
            NodeKind::Block(items) | NodeKind::Variants(items) | NodeKind::ListConstructor(items) => {
                out.extend(items.iter().cloned());
            }
            NodeKind::Operation { args, .. } => out.extend(args.iter().cloned()),
            NodeKind::Assignment { variable, value } => {
                out.push(variable.clone());
                out.push(value.clone());
            }
            NodeKind::FunctionCall { ident, args } => {
                out.push(ident.clone());
                out.extend(args.iter().cloned());
            }
            NodeKind::MethodCall {
                object,
                ident,
                args,
            } => {
                out.push(object.clone());
                out.push(ident.clone());
                out.extend(args.iter().cloned());
            }
            NodeKind::BinaryOp { left, right, .. } => {
                out.push(left.clone());
                out.push(right.clone());
            }
            NodeKind::UnaryOp { arg, .. } => out.push(arg.clone()),
            NodeKind::ConditionalOp {
                condition,
                consequent,
                alternate,
            } => {
                out.push(condition.clone());
                out.push(consequent.clone());
                out.push(alternate.clone());
            }
            NodeKind::IndexCall {
                collection, index, ..
            } => {
                out.push(collection.clone());
                out.push(index.clone());
            }
            NodeKind::RangeIndexCall {
                collection,
                low,
                high,
                step,
                ..
            } => {
                out.push(collection.clone());
                out.push(low.clone());
                out.push(high.clone());
                out.push(step.clone());
            }
            NodeKind::IfStatement {
                condition,
                consequent,
                alternate,
            } => {
                out.push(condition.clone());
                out.push(consequent.clone());
                if let Some(alternate) = alternate {
                    out.push(alternate.clone());
                }
            }
            NodeKind::WhileLoop { condition, body } => {
                out.push(condition.clone());
                out.push(body.clone());
            }
            NodeKind::ForRange {
                variable,
                low,
                high,
                increment,
                body,
                ..
            } => {
                out.push(variable.clone());
                out.push(low.clone());
                out.push(high.clone());
                out.push(increment.clone());
                out.push(body.clone());
            }
            NodeKind::ForEach {
                variable,
                collection,
                body,
            } => {
                out.push(variable.clone());
                out.push(collection.clone());
                out.push(body.clone());
            }
            NodeKind::ForEachKey {
                variable,
                table,
                body,
            } => {
                out.push(variable.clone());
                out.push(table.clone());
                out.push(body.clone());
            }
            NodeKind::ForEachPair {
                key,
                value,
                table,
                body,
            } => {
                out.push(key.clone());
                out.push(value.clone());
                out.push(table.clone());
                out.push(body.clone());
            }
            NodeKind::ForCLike {
                init,
                condition,
                append,
                body,
            } => {
                out.push(init.clone());
                out.push(condition.clone());
                out.push(append.clone());
                out.push(body.clone());
            }
        }
        out
    }

    /// Rebuild this node around new children, keeping kind, attributes and
    /// type.
    ///
    /// `children` must come in the order `children()` yields them. Missing
    /// trailing children keep their old value.
    pub fn with_children(&self, children: impl IntoIterator<Item = Node>) -> Node {
        let mut new = children.into_iter();
        let mut next = |old: &Node| new.next().unwrap_or_else(|| old.clone());
        let kind = match self.kind() {
            NodeKind::Identifier { .. }
            | NodeKind::IntegerLiteral(_)
            | NodeKind::TextLiteral(_)
            | NodeKind::ImportStatement { .. } => return self.clone(),
            NodeKind::Program { body } => NodeKind::Program { body: next(body) },
            NodeKind::Block(items) => NodeKind::Block(items.iter().map(&mut next).collect()),
            NodeKind::Variants(items) => NodeKind::Variants(items.iter().map(&mut next).collect()),
            NodeKind::ListConstructor(items) => {
                NodeKind::ListConstructor(items.iter().map(&mut next).collect())
            }
            NodeKind::Operation { op, args } => NodeKind::Operation {
                op: *op,
                args: args.iter().map(&mut next).collect(),
            },
            NodeKind::Assignment { variable, value } => NodeKind::Assignment {
                variable: next(variable),
                value: next(value),
            },
            NodeKind::FunctionCall { ident, args } => NodeKind::FunctionCall {
                ident: next(ident),
                args: args.iter().map(&mut next).collect(),
            },
            NodeKind::MethodCall {
                object,
                ident,
                args,
            } => NodeKind::MethodCall {
                object: next(object),
                ident: next(ident),
                args: args.iter().map(&mut next).collect(),
            },
            NodeKind::BinaryOp {
                op,
                name,
                precedence,
                assoc,
                left,
                right,
            } => NodeKind::BinaryOp {
                op: *op,
                name: name.clone(),
                precedence: *precedence,
                assoc: *assoc,
                left: next(left),
                right: next(right),
            },
            NodeKind::UnaryOp {
                op,
                name,
                precedence,
                arg,
            } => NodeKind::UnaryOp {
                op: *op,
                name: name.clone(),
                precedence: *precedence,
                arg: next(arg),
            },
            NodeKind::ConditionalOp {
                condition,
                consequent,
                alternate,
            } => NodeKind::ConditionalOp {
                condition: next(condition),
                consequent: next(consequent),
                alternate: next(alternate),
            },
            NodeKind::IndexCall {
                collection,
                index,
                one_indexed,
            } => NodeKind::IndexCall {
                collection: next(collection),
                index: next(index),
                one_indexed: *one_indexed,
            },
            NodeKind::RangeIndexCall {
                collection,
                low,
                high,
                step,
                one_indexed,
            } => NodeKind::RangeIndexCall {
                collection: next(collection),
                low: next(low),
                high: next(high),
                step: next(step),
                one_indexed: *one_indexed,
            },
            NodeKind::IfStatement {
                condition,
                consequent,
                alternate,
            } => NodeKind::IfStatement {
                condition: next(condition),
                consequent: next(consequent),
                alternate: alternate.as_ref().map(&mut next),
            },
            NodeKind::WhileLoop { condition, body } => NodeKind::WhileLoop {
                condition: next(condition),
                body: next(body),
            },
            NodeKind::ForRange {
                variable,
                low,
                high,
                increment,
                body,
                inclusive,
            } => NodeKind::ForRange {
                variable: next(variable),
                low: next(low),
                high: next(high),
                increment: next(increment),
                body: next(body),
                inclusive: *inclusive,
            },
            NodeKind::ForEach {
                variable,
                collection,
                body,
            } => NodeKind::ForEach {
                variable: next(variable),
                collection: next(collection),
                body: next(body),
            },
            NodeKind::ForEachKey {
                variable,
                table,
                body,
            } => NodeKind::ForEachKey {
                variable: next(variable),
                table: next(table),
                body: next(body),
            },
            NodeKind::ForEachPair {
                key,
                value,
                table,
                body,
            } => NodeKind::ForEachPair {
                key: next(key),
                value: next(value),
                table: next(table),
                body: next(body),
            },
            NodeKind::ForCLike {
                init,
                condition,
                append,
                body,
            } => NodeKind::ForCLike {
                init: next(init),
                condition: next(condition),
                append: next(append),
                body: next(body),
            },
        };
        Node::with_kind_and_type(kind, self.annotated_type().cloned())
    }

    /// Apply `f` to every child. Returns `None` when `f` declined for all of
    /// them, so unchanged parents are never reallocated.
    pub fn map_children(&self, mut f: impl FnMut(&Node) -> Option<Node>) -> Option<Node> {
        let old = self.children();
        let mut changed = false;
        let new: Children = old
            .iter()
            .map(|child| match f(child) {
                Some(replacement) => {
                    changed = true;
                    replacement
                }
                None => child.clone(),
            })
            .collect();
        changed.then(|| self.with_children(new))
    }

    /// The `index`-th child in [`Node::children`] order.
    pub fn child_at(&self, index: usize) -> Option<Node> {
        self.children().into_iter().nth(index)
    }

    /// The node at `path`, if the path exists.
    pub fn at_path(&self, path: &[usize]) -> Option<Node> {
        let mut current = self.clone();
        for &index in path {
            current = current.child_at(index)?;
        }
        Some(current)
    }

    /// A copy of this tree with the node at `path` replaced.
    ///
    /// Returns `None` when the path does not exist.
    pub fn replace_at(&self, path: &[usize], replacement: Node) -> Option<Node> {
        let Some((&first, rest)) = path.split_first() else {
            return Some(replacement);
        };
        let mut children = self.children();
        let child = children.get(first)?.clone();
        let new_child = ensure_sufficient_stack(|| child.replace_at(rest, replacement))?;
        children[first] = new_child;
        Some(self.with_children(children))
    }

    /// Path of the first node (pre-order) satisfying `pred`.
    pub fn find_path(&self, pred: &impl Fn(&Node) -> bool) -> Option<Vec<usize>> {
        if pred(self) {
            return Some(Vec::new());
        }
        for (index, child) in self.children().iter().enumerate() {
            if let Some(mut path) = ensure_sufficient_stack(|| child.find_path(pred)) {
                path.insert(0, index);
                return Some(path);
            }
        }
        None
    }

    /// Whether any node in this tree (including itself) is a `Variants`.
    pub fn contains_variants(&self) -> bool {
        self.find_path(&|node| matches!(node.kind(), NodeKind::Variants(_)))
            .is_some()
    }

    /// Replace every `Variants` node with its first alternative.
    pub fn first_variants(&self) -> Node {
        ensure_sufficient_stack(|| {
            if let NodeKind::Variants(alternatives) = self.kind() {
                if let Some(first) = alternatives.first() {
                    return first.first_variants();
                }
            }
            self.map_children(|child| {
                child
                    .contains_variants()
                    .then(|| child.first_variants())
            })
            .unwrap_or_else(|| self.clone())
        })
    }

    /// Total number of nodes in this tree.
    pub fn size(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| ensure_sufficient_stack(|| child.size()))
            .sum::<usize>()
    }
}
