//! Lexer for the call-tree surface syntax, built on logos.
//!
//! `;` starts a line comment. `#` is not a comment: it spells `cardinality`.

use std::ops::Range;

use logos::Logos;
use num_bigint::BigInt;

use crate::error::ReadError;

#[derive(Logos, Clone, Eq, PartialEq, Debug)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r";[^\n]*")]
pub enum Token {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("/")]
    Slash,
    #[token(":")]
    Colon,
    /// Range separator in types, `concat` as a callee.
    #[token("..")]
    DotDot,

    #[token("∞")]
    Infinity,
    #[token("-∞")]
    NegInfinity,

    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<BigInt>().ok())]
    Int(BigInt),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| unescape(lex.slice()))]
    Text(String),

    /// `$name`, a user identifier. The payload excludes the `$`.
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Var(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),

    #[regex(r"[-+*^&|~=!<>#%]+", |lex| lex.slice().to_string())]
    OpSym(String),
}

impl Token {
    /// Source-like spelling for error messages.
    pub fn spelling(&self) -> String {
        match self {
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),
            Token::Slash => "/".to_string(),
            Token::Colon => ":".to_string(),
            Token::DotDot => "..".to_string(),
            Token::Infinity => "∞".to_string(),
            Token::NegInfinity => "-∞".to_string(),
            Token::Int(value) => value.to_string(),
            Token::Text(value) => format!("{value:?}"),
            Token::Var(name) => format!("${name}"),
            Token::Name(name) | Token::OpSym(name) => name.clone(),
        }
    }
}

/// A token with its byte span.
pub type Spanned = (Token, Range<usize>);

/// Lex all of `source`, failing on the first unrecognized input.
pub fn lex(source: &str) -> Result<Vec<Spanned>, ReadError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(ReadError::InvalidToken {
                    text: lexer.slice().to_string(),
                    offset: span.start,
                })
            }
        }
    }
    Ok(tokens)
}

/// Strip the quotes of a text literal and process escapes.
fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('0') => result.push('\0'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<Token> {
        lex(source)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn lex_application() {
        assert_eq!(
            kinds(r#"(println "a\"b") ; trailing"#),
            vec![
                Token::LParen,
                Token::Name("println".to_string()),
                Token::Text("a\"b".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn lex_negative_int_and_operators() {
        assert_eq!(
            kinds("(- -5 $x) (<- $y #)"),
            vec![
                Token::LParen,
                Token::OpSym("-".to_string()),
                Token::Int(BigInt::from(-5)),
                Token::Var("x".to_string()),
                Token::RParen,
                Token::LParen,
                Token::OpSym("<-".to_string()),
                Token::Var("y".to_string()),
                Token::OpSym("#".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn lex_ranges() {
        assert_eq!(
            kinds("-∞..-3"),
            vec![
                Token::NegInfinity,
                Token::DotDot,
                Token::Int(BigInt::from(-3)),
            ]
        );
        assert_eq!(
            kinds("0..oo"),
            vec![
                Token::Int(BigInt::from(0)),
                Token::DotDot,
                Token::Name("oo".to_string()),
            ]
        );
    }

    #[test]
    fn lex_rejects_unknown_input() {
        assert_eq!(
            lex("(print @)"),
            Err(ReadError::InvalidToken {
                text: "@".to_string(),
                offset: 7,
            })
        );
    }
}
