//! A minimal target for exercising search without a real language.

use golf_emit::{tokens, EmitError, Emitter, JoinPolicy, TokenTree};
use golf_ir::{Node, NodeKind};
use golf_plugins::{EmitStage, FinalEmitStage, GolfStage, Lowered, Plugin};

use crate::language::Language;

/// Emits operations as `name(arg,arg)` and statements joined by `;`.
struct CallEmitter;

fn emit(node: &Node) -> Result<TokenTree, EmitError> {
    Ok(match node.kind() {
        NodeKind::Program { body } => emit(body)?,
        NodeKind::Block(statements) => {
            TokenTree::join(statements.iter().map(emit).collect::<Result<Vec<_>, _>>()?, ";")
        }
        NodeKind::IntegerLiteral(value) => TokenTree::text(value.to_string()),
        NodeKind::TextLiteral(value) => TokenTree::text(format!("{value:?}")),
        NodeKind::Identifier { name, .. } => TokenTree::text(name.to_string()),
        NodeKind::Operation { op, args } => tokens![
            op.as_str(),
            "(",
            TokenTree::join(args.iter().map(emit).collect::<Result<Vec<_>, _>>()?, ","),
            ")",
        ],
        NodeKind::Variants(_) => return Err(EmitError::UnresolvedVariants { target: "calls" }),
        _ => return Err(EmitError::unsupported("calls", node, "not a call")),
    })
}

impl Emitter for CallEmitter {
    fn emit_program(&self, program: &Node) -> Result<TokenTree, EmitError> {
        emit(program)
    }
}

/// Rejects every program.
struct NothingEmitter;

impl Emitter for NothingEmitter {
    fn emit_program(&self, program: &Node) -> Result<TokenTree, EmitError> {
        Err(EmitError::unsupported("nothing", program, "emits nothing"))
    }
}

pub fn calls_language(name: &'static str, emit_plugins: Vec<Box<dyn Plugin>>) -> Language {
    Language {
        name,
        extension: "calls",
        emit: EmitStage::new(emit_plugins),
        final_emit: FinalEmitStage::new(Vec::new()),
        emitter: Box::new(CallEmitter),
        join: JoinPolicy::default(),
    }
}

pub fn failing_language() -> Language {
    Language {
        name: "nothing",
        extension: "none",
        emit: EmitStage::new(Vec::new()),
        final_emit: FinalEmitStage::new(Vec::new()),
        emitter: Box::new(NothingEmitter),
        join: JoinPolicy::default(),
    }
}

pub fn lowered(program: &Node) -> Lowered {
    let golfed = GolfStage::new(Vec::new()).run(program).unwrap();
    EmitStage::new(Vec::new()).run(&golfed).unwrap()
}
