//! Lua 5.4.
//!
//! The emit stage turns collection access into one-based index expressions
//! and counted loops into inclusive ones. The final-emit stage maps the
//! remaining operations onto Lua builtins and operators, then renames
//! identifiers.

mod emit;

use golf_emit::{JoinPolicy, PrecedenceTable, Tier};
use golf_ir::build::{builtin, builtin_call, method_call, op};
use golf_ir::{Assoc, Node, OpCode, ValueType};
use golf_plugins::idents::RenameIdents;
use golf_plugins::loops::for_range_to_inclusive;
use golf_plugins::ops::{add1, map_precedence_ops, use_index_calls, MapOps, OpTable};
use golf_plugins::{EmitStage, FinalEmitStage};
use golf_search::Language;

pub use emit::LuaEmitter;

const KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// `--` starts a comment and a digit before `..` reads as a malformed
/// number.
const GLUED: &[(char, char)] = &[
    ('-', '-'),
    ('0', '.'),
    ('1', '.'),
    ('2', '.'),
    ('3', '.'),
    ('4', '.'),
    ('5', '.'),
    ('6', '.'),
    ('7', '.'),
    ('8', '.'),
    ('9', '.'),
];

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn precedence() -> PrecedenceTable {
    PrecedenceTable::new([
        Tier::Binary(Assoc::Left, vec![(OpCode::Or, "or")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::And, "and")]),
        Tier::Binary(
            Assoc::Left,
            vec![
                (OpCode::Lt, "<"),
                (OpCode::Leq, "<="),
                (OpCode::Eq, "=="),
                (OpCode::Neq, "~="),
                (OpCode::Geq, ">="),
                (OpCode::Gt, ">"),
            ],
        ),
        Tier::Binary(Assoc::Left, vec![(OpCode::BitOr, "|")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::BitXor, "~")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::BitAnd, "&")]),
        Tier::Binary(
            Assoc::Left,
            vec![(OpCode::BitShiftLeft, "<<"), (OpCode::BitShiftRight, ">>")],
        ),
        Tier::Binary(Assoc::Right, vec![(OpCode::Concat, "..")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::Add, "+"), (OpCode::Sub, "-")]),
        Tier::Binary(
            Assoc::Left,
            vec![(OpCode::Mul, "*"), (OpCode::Div, "//"), (OpCode::Mod, "%")],
        ),
        Tier::Prefix(vec![
            (OpCode::Not, "not"),
            (OpCode::Neg, "-"),
            (OpCode::ListLength, "#"),
            (OpCode::TextLength, "#"),
            (OpCode::BitNot, "~"),
            (OpCode::TextToInt, "- -"),
        ]),
        Tier::Binary(Assoc::Right, vec![(OpCode::Pow, "^")]),
    ])
}

fn argv_get(args: &[Node]) -> Node {
    let arg = builtin("arg").with_type(ValueType::list(ValueType::Text));
    op(OpCode::ListGet, vec![arg, args[0].clone()])
}

/// `s:byte(i + 1)`
fn text_get_byte(args: &[Node]) -> Node {
    method_call(args[0].clone(), "byte", vec![add1(&args[1])])
}

/// `s:sub(low + 1, high)`: the half-open zero-based range as an inclusive
/// one-based one.
fn text_get_byte_slice(args: &[Node]) -> Node {
    method_call(args[0].clone(), "sub", vec![add1(&args[1]), args[2].clone()])
}

fn access_ops() -> OpTable {
    vec![
        (OpCode::ArgvGet, argv_get),
        (OpCode::TextGetByte, text_get_byte),
        (OpCode::TextGetByteSlice, text_get_byte_slice),
    ]
}

fn lua_true(_: &[Node]) -> Node {
    builtin("true")
}

fn lua_false(_: &[Node]) -> Node {
    builtin("false")
}

fn tostring(args: &[Node]) -> Node {
    builtin_call("tostring", args.to_vec())
}

fn rep(args: &[Node]) -> Node {
    method_call(args[0].clone(), "rep", vec![args[1].clone()])
}

fn io_write(args: &[Node]) -> Node {
    builtin_call("io.write", args.to_vec())
}

fn print(args: &[Node]) -> Node {
    builtin_call("print", args.to_vec())
}

fn math_min(args: &[Node]) -> Node {
    builtin_call("math.min", args.to_vec())
}

fn math_max(args: &[Node]) -> Node {
    builtin_call("math.max", args.to_vec())
}

fn math_abs(args: &[Node]) -> Node {
    builtin_call("math.abs", args.to_vec())
}

fn arg(_: &[Node]) -> Node {
    builtin("arg")
}

fn string_char(args: &[Node]) -> Node {
    builtin_call("string.char", args.to_vec())
}

fn table_insert(args: &[Node]) -> Node {
    builtin_call("table.insert", args.to_vec())
}

fn builtin_ops() -> OpTable {
    vec![
        (OpCode::True, lua_true),
        (OpCode::False, lua_false),
        (OpCode::IntToText, tostring),
        (OpCode::Repeat, rep),
        (OpCode::Print, io_write),
        (OpCode::Println, print),
        (OpCode::Min, math_min),
        (OpCode::Max, math_max),
        (OpCode::Abs, math_abs),
        (OpCode::Argv, arg),
        (OpCode::ByteToText, string_char),
        (OpCode::ListPush, table_insert),
    ]
}

pub fn lua() -> Language {
    Language {
        name: "Lua",
        extension: "lua",
        emit: EmitStage::new(vec![
            Box::new(for_range_to_inclusive()),
            Box::new(MapOps::new("lua_access", access_ops())),
            Box::new(use_index_calls(true)),
        ]),
        final_emit: FinalEmitStage::new(vec![
            Box::new(MapOps::new("lua_builtins", builtin_ops())),
            Box::new(map_precedence_ops(precedence())),
            Box::new(RenameIdents::with_reserved(KEYWORDS)),
        ]),
        emitter: Box::new(LuaEmitter::new(precedence())),
        join: JoinPolicy {
            is_word,
            glued: GLUED,
        },
    }
}
