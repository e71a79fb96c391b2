//! GolfScript.
//!
//! Everything is postfix, so operator tiers only decide spellings; the
//! emitter never parenthesizes. Comparisons GolfScript lacks are negations
//! of the ones it has.

mod emit;

use golf_emit::{JoinPolicy, PrecedenceTable, Tier};
use golf_ir::build::{builtin_call, index_call, int, op, range_index_call};
use golf_ir::{Assoc, Node, OpCode};
use golf_plugins::idents::RenameIdents;
use golf_plugins::ops::{map_precedence_ops, use_index_calls, MapOps, OpTable};
use golf_plugins::{EmitStage, FinalEmitStage};
use golf_search::Language;

pub use emit::GolfScriptEmitter;

/// Builtin words that a renamed variable would shadow. `n` is used by
/// `puts` itself.
const RESERVED: &[&str] = &[
    "n", "p", "if", "do", "or", "and", "xor", "not", "abs", "zip", "base", "rand", "puts", "print",
    "while", "until",
];

/// A minus before a digit would read as a negative literal.
const GLUED: &[(char, char)] = &[
    ('-', '0'),
    ('-', '1'),
    ('-', '2'),
    ('-', '3'),
    ('-', '4'),
    ('-', '5'),
    ('-', '6'),
    ('-', '7'),
    ('-', '8'),
    ('-', '9'),
];

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn precedence() -> PrecedenceTable {
    PrecedenceTable::new([
        Tier::Binary(
            Assoc::Left,
            vec![
                (OpCode::Add, "+"),
                (OpCode::Sub, "-"),
                (OpCode::Mul, "*"),
                (OpCode::Div, "/"),
                (OpCode::Mod, "%"),
                (OpCode::Pow, "?"),
                (OpCode::BitAnd, "&"),
                (OpCode::BitOr, "|"),
                (OpCode::BitXor, "^"),
                (OpCode::Lt, "<"),
                (OpCode::Gt, ">"),
                (OpCode::Eq, "="),
                (OpCode::And, "and"),
                (OpCode::Or, "or"),
                (OpCode::Concat, "+"),
                (OpCode::Repeat, "*"),
            ],
        ),
        Tier::Prefix(vec![
            (OpCode::Not, "!"),
            (OpCode::BitNot, "~"),
            (OpCode::IntToText, "`"),
            (OpCode::TextToInt, "~"),
            (OpCode::TextLength, ","),
            (OpCode::ListLength, ","),
        ]),
    ])
}

fn negate(args: &[Node]) -> Node {
    op(OpCode::Mul, vec![args[0].clone(), int(-1)])
}

fn not_greater(args: &[Node]) -> Node {
    op(OpCode::Not, vec![op(OpCode::Gt, args.to_vec())])
}

fn not_less(args: &[Node]) -> Node {
    op(OpCode::Not, vec![op(OpCode::Lt, args.to_vec())])
}

fn not_equal(args: &[Node]) -> Node {
    op(OpCode::Not, vec![op(OpCode::Eq, args.to_vec())])
}

fn text_get_byte(args: &[Node]) -> Node {
    index_call(args[0].clone(), args[1].clone(), false)
}

fn text_get_byte_slice(args: &[Node]) -> Node {
    range_index_call(args[0].clone(), args[1].clone(), args[2].clone(), int(1), false)
}

fn rewrites() -> OpTable {
    vec![
        (OpCode::Neg, negate),
        (OpCode::Leq, not_greater),
        (OpCode::Geq, not_less),
        (OpCode::Neq, not_equal),
        (OpCode::TextGetByte, text_get_byte),
        (OpCode::TextGetByteSlice, text_get_byte_slice),
    ]
}

fn print(args: &[Node]) -> Node {
    builtin_call("print", args.to_vec())
}

fn puts(args: &[Node]) -> Node {
    builtin_call("puts", args.to_vec())
}

fn one(_: &[Node]) -> Node {
    int(1)
}

fn zero(_: &[Node]) -> Node {
    int(0)
}

fn abs(args: &[Node]) -> Node {
    builtin_call("abs", args.to_vec())
}

fn builtin_ops() -> OpTable {
    vec![
        (OpCode::Print, print),
        (OpCode::Println, puts),
        (OpCode::True, one),
        (OpCode::False, zero),
        (OpCode::Abs, abs),
    ]
}

pub fn golfscript() -> Language {
    Language {
        name: "GolfScript",
        extension: "gs",
        emit: EmitStage::new(vec![
            Box::new(MapOps::new("golfscript_rewrites", rewrites())),
            Box::new(use_index_calls(false)),
        ]),
        final_emit: FinalEmitStage::new(vec![
            Box::new(MapOps::new("golfscript_builtins", builtin_ops())),
            Box::new(map_precedence_ops(precedence())),
            Box::new(RenameIdents::with_reserved(RESERVED)),
        ]),
        emitter: Box::new(GolfScriptEmitter),
        join: JoinPolicy {
            is_word,
            glued: GLUED,
        },
    }
}
