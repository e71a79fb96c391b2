//! Output plugins.

use golf_ir::build::{block, op, text};
use golf_ir::{Node, NodeKind, OpCode};

use crate::engine::{Plugin, VisitContext};
use crate::ops::{MapOps, OpTable};

/// Rewrites the program's last statement between `print` and `println`.
///
/// Trailing whitespace of the output is not significant, so the last print
/// may use whichever form the target spells shorter: `to_println` selects
/// `print → println`, otherwise `println → print`.
pub struct GolfLastPrint {
    from: OpCode,
    to: OpCode,
}

pub fn golf_last_print(to_println: bool) -> GolfLastPrint {
    if to_println {
        GolfLastPrint {
            from: OpCode::Print,
            to: OpCode::Println,
        }
    } else {
        GolfLastPrint {
            from: OpCode::Println,
            to: OpCode::Print,
        }
    }
}

impl Plugin for GolfLastPrint {
    fn name(&self) -> &str {
        "golf_last_print"
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        let NodeKind::Program { body } = node.kind() else {
            return None;
        };
        let NodeKind::Block(statements) = body.kind() else {
            return None;
        };
        let (last, rest) = statements.split_last()?;
        let NodeKind::Operation { op: code, args } = last.kind() else {
            return None;
        };
        if *code != self.from {
            return None;
        }
        let mut statements = rest.to_vec();
        statements.push(op(self.to, args.clone()));
        Some(node.with_children([block(statements)]))
    }
}

fn println_as_print(args: &[Node]) -> Node {
    let mut parts = args.to_vec();
    parts.push(text("\n"));
    op(OpCode::Print, vec![op(OpCode::Concat, parts)])
}

/// `println(x)` → `print(x .. "\n")`, for targets without a line printer.
pub fn println_to_print() -> MapOps {
    let table: OpTable = vec![(OpCode::Println, println_as_print)];
    MapOps::new("println_to_print", table)
}

#[cfg(test)]
mod tests;
