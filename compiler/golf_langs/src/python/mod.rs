//! Python 3.
//!
//! Zero-based like the IR, so index expressions pass through unshifted.
//! Text bytes are read as `ord(s[i])`; printing without a newline needs
//! the `end=""` keyword argument.

mod emit;

use golf_emit::{JoinPolicy, PrecedenceTable, Tier};
use golf_ir::build::{builtin, builtin_call, index_call, int, method_call, range_index_call};
use golf_ir::{Assoc, Node, OpCode};
use golf_plugins::idents::RenameIdents;
use golf_plugins::ops::{map_precedence_ops, use_index_calls, MapOps, OpTable};
use golf_plugins::{EmitStage, FinalEmitStage};
use golf_search::Language;

pub use emit::PythonEmitter;

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

pub fn precedence() -> PrecedenceTable {
    PrecedenceTable::new([
        Tier::Binary(Assoc::Left, vec![(OpCode::Or, "or")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::And, "and")]),
        Tier::Prefix(vec![(OpCode::Not, "not")]),
        // Comparisons chain, so two in a row always need grouping.
        Tier::Binary(
            Assoc::None,
            vec![
                (OpCode::Lt, "<"),
                (OpCode::Leq, "<="),
                (OpCode::Eq, "=="),
                (OpCode::Neq, "!="),
                (OpCode::Geq, ">="),
                (OpCode::Gt, ">"),
            ],
        ),
        Tier::Binary(Assoc::Left, vec![(OpCode::BitOr, "|")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::BitXor, "^")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::BitAnd, "&")]),
        Tier::Binary(
            Assoc::Left,
            vec![(OpCode::BitShiftLeft, "<<"), (OpCode::BitShiftRight, ">>")],
        ),
        Tier::Binary(
            Assoc::Left,
            vec![(OpCode::Add, "+"), (OpCode::Sub, "-"), (OpCode::Concat, "+")],
        ),
        Tier::Binary(
            Assoc::Left,
            vec![
                (OpCode::Mul, "*"),
                (OpCode::Div, "//"),
                (OpCode::Mod, "%"),
                (OpCode::Repeat, "*"),
            ],
        ),
        Tier::Prefix(vec![(OpCode::Neg, "-"), (OpCode::BitNot, "~")]),
        Tier::Binary(Assoc::Right, vec![(OpCode::Pow, "**")]),
    ])
}

/// `ord(s[i])`
fn text_get_byte(args: &[Node]) -> Node {
    builtin_call("ord", vec![index_call(args[0].clone(), args[1].clone(), false)])
}

/// `s[low:high]`
fn text_get_byte_slice(args: &[Node]) -> Node {
    range_index_call(args[0].clone(), args[1].clone(), args[2].clone(), int(1), false)
}

fn access_ops() -> OpTable {
    vec![
        (OpCode::TextGetByte, text_get_byte),
        (OpCode::TextGetByteSlice, text_get_byte_slice),
    ]
}

fn python_true(_: &[Node]) -> Node {
    builtin("True")
}

fn python_false(_: &[Node]) -> Node {
    builtin("False")
}

fn str_call(args: &[Node]) -> Node {
    builtin_call("str", args.to_vec())
}

fn int_call(args: &[Node]) -> Node {
    builtin_call("int", args.to_vec())
}

fn len_call(args: &[Node]) -> Node {
    builtin_call("len", args.to_vec())
}

fn print_without_newline(args: &[Node]) -> Node {
    let mut args = args.to_vec();
    args.push(builtin("end=\"\""));
    builtin_call("print", args)
}

fn print(args: &[Node]) -> Node {
    builtin_call("print", args.to_vec())
}

fn min_call(args: &[Node]) -> Node {
    builtin_call("min", args.to_vec())
}

fn max_call(args: &[Node]) -> Node {
    builtin_call("max", args.to_vec())
}

fn abs_call(args: &[Node]) -> Node {
    builtin_call("abs", args.to_vec())
}

fn chr_call(args: &[Node]) -> Node {
    builtin_call("chr", args.to_vec())
}

fn append(args: &[Node]) -> Node {
    method_call(args[0].clone(), "append", vec![args[1].clone()])
}

fn builtin_ops() -> OpTable {
    vec![
        (OpCode::True, python_true),
        (OpCode::False, python_false),
        (OpCode::IntToText, str_call),
        (OpCode::TextToInt, int_call),
        (OpCode::TextLength, len_call),
        (OpCode::ListLength, len_call),
        (OpCode::Print, print_without_newline),
        (OpCode::Println, print),
        (OpCode::Min, min_call),
        (OpCode::Max, max_call),
        (OpCode::Abs, abs_call),
        (OpCode::ByteToText, chr_call),
        (OpCode::ListPush, append),
    ]
}

pub fn python() -> Language {
    Language {
        name: "Python",
        extension: "py",
        emit: EmitStage::new(vec![
            Box::new(MapOps::new("python_access", access_ops())),
            Box::new(use_index_calls(false)),
        ]),
        final_emit: FinalEmitStage::new(vec![
            Box::new(MapOps::new("python_builtins", builtin_ops())),
            Box::new(map_precedence_ops(precedence())),
            Box::new(RenameIdents::with_reserved(KEYWORDS)),
        ]),
        emitter: Box::new(PythonEmitter::new(precedence())),
        join: JoinPolicy::default(),
    }
}
