//! Surface reader.
//!
//! Turns source text into raw [`CallTree`]s:
//!
//! ```text
//! program := expr*
//! expr    := atom (':' type)?
//! atom    := INT | TEXT | '$'NAME | NAME | OPSYM
//!          | '(' callee expr* ')'
//!          | '{' expr* ('/' expr*)* '}'
//! type    := NAME | '(' NAME typearg* ')' | bound '..' bound
//! bound   := INT | '-oo' | 'oo' | '-∞' | '∞'
//! ```
//!
//! `$name` is a user identifier; a bare name is a builtin. A brace group with
//! one alternative is a block, several make a `Variants`.

mod lexer;

use golf_ir::build::{builtin, ident, int, text};
use golf_ir::Node;

use crate::error::ReadError;
use crate::tree::{CallTree, RangeBound, TypeTree};

pub use lexer::Token;
use lexer::{lex, Spanned};

/// Read a whole program.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn read(source: &str) -> Result<Vec<CallTree>, ReadError> {
    let tokens = lex(source)?;
    let mut reader = Reader {
        tokens,
        pos: 0,
        end: source.len(),
    };
    let mut program = Vec::new();
    while !reader.at_end() {
        program.push(reader.expr()?);
    }
    tracing::debug!(statements = program.len(), "read program");
    Ok(program)
}

/// Accept exactly one parse out of `results`.
///
/// No result means the input stopped early; more than one means the input
/// is ambiguous. Frontends that can produce several parses report through
/// this.
pub fn select_parse<T>(results: Vec<T>) -> Result<T, ReadError> {
    let parses = results.len();
    let mut results = results.into_iter();
    match (results.next(), parses) {
        (Some(only), 1) => Ok(only),
        (None, _) => Err(ReadError::UnexpectedEnd),
        (Some(_), _) => Err(ReadError::Ambiguous { parses }),
    }
}

struct Reader {
    tokens: Vec<Spanned>,
    pos: usize,
    end: usize,
}

impl Reader {
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(token, _)| token)
    }

    fn next(&mut self) -> Result<Token, ReadError> {
        let (token, _) = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ReadError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.end, |(_, span)| span.start)
    }

    /// Error for the token at the cursor.
    fn unexpected(&self) -> ReadError {
        match self.peek() {
            Some(token) => ReadError::UnexpectedToken {
                found: token.spelling(),
                offset: self.offset(),
            },
            None => ReadError::UnexpectedEnd,
        }
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ReadError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expr(&mut self) -> Result<CallTree, ReadError> {
        let atom = golf_ir::stack::ensure_sufficient_stack(|| self.atom())?;
        if self.eat(&Token::Colon) {
            let ty = self.ty()?;
            return Ok(CallTree::Annotated {
                expr: Box::new(atom),
                ty,
            });
        }
        Ok(atom)
    }

    fn atom(&mut self) -> Result<CallTree, ReadError> {
        let Some(token) = self.peek().cloned() else {
            return Err(ReadError::UnexpectedEnd);
        };
        match token {
            Token::LParen => {
                self.pos += 1;
                let callee = self.callee()?;
                let mut args = Vec::new();
                while !self.eat(&Token::RParen) {
                    if self.at_end() {
                        return Err(ReadError::UnexpectedEnd);
                    }
                    args.push(self.expr()?);
                }
                Ok(CallTree::Call { callee, args })
            }
            Token::LBrace => {
                self.pos += 1;
                let mut groups = vec![Vec::new()];
                loop {
                    match self.peek() {
                        None => return Err(ReadError::UnexpectedEnd),
                        Some(Token::RBrace) => {
                            self.pos += 1;
                            break;
                        }
                        Some(Token::Slash) => {
                            self.pos += 1;
                            groups.push(Vec::new());
                        }
                        Some(_) => {
                            let expr = self.expr()?;
                            if let Some(group) = groups.last_mut() {
                                group.push(expr);
                            }
                        }
                    }
                }
                if groups.len() == 1 {
                    Ok(CallTree::Block(groups.remove(0)))
                } else {
                    Ok(CallTree::Variants(groups))
                }
            }
            Token::Int(value) => {
                self.pos += 1;
                Ok(CallTree::Leaf(int(value)))
            }
            Token::Text(value) => {
                self.pos += 1;
                Ok(CallTree::Leaf(text(value)))
            }
            Token::Var(_) | Token::Name(_) | Token::OpSym(_) | Token::DotDot => {
                Ok(CallTree::Leaf(self.callee()?))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn callee(&mut self) -> Result<Node, ReadError> {
        let node = match self.peek() {
            Some(Token::Var(name)) => ident(name),
            Some(Token::Name(name) | Token::OpSym(name)) => builtin(name),
            Some(Token::DotDot) => builtin(".."),
            _ => return Err(self.unexpected()),
        };
        self.pos += 1;
        Ok(node)
    }

    fn ty(&mut self) -> Result<TypeTree, ReadError> {
        if self.starts_range() {
            return self.range();
        }
        match self.next()? {
            Token::Name(callee) => Ok(TypeTree::Apply {
                callee,
                args: Vec::new(),
            }),
            Token::LParen => {
                let Token::Name(callee) = self.next()? else {
                    self.pos -= 1;
                    return Err(self.unexpected());
                };
                let mut args = Vec::new();
                while !self.eat(&Token::RParen) {
                    if self.at_end() {
                        return Err(ReadError::UnexpectedEnd);
                    }
                    args.push(self.type_arg()?);
                }
                Ok(TypeTree::Apply { callee, args })
            }
            _ => {
                self.pos -= 1;
                Err(self.unexpected())
            }
        }
    }

    /// A type argument: a type, or a bare number (such as an array length).
    fn type_arg(&mut self) -> Result<TypeTree, ReadError> {
        match self.peek() {
            Some(Token::Int(value)) if self.peek_at(1) != Some(&Token::DotDot) => {
                let value = value.clone();
                self.pos += 1;
                Ok(TypeTree::Number(value))
            }
            _ => golf_ir::stack::ensure_sufficient_stack(|| self.ty()),
        }
    }

    fn starts_range(&self) -> bool {
        match self.peek() {
            Some(Token::Int(_)) => self.peek_at(1) == Some(&Token::DotDot),
            Some(Token::NegInfinity) => true,
            Some(Token::OpSym(sym)) => {
                sym == "-" && matches!(self.peek_at(1), Some(Token::Name(name)) if name == "oo")
            }
            _ => false,
        }
    }

    fn range(&mut self) -> Result<TypeTree, ReadError> {
        let low = match self.next()? {
            Token::Int(value) => RangeBound::Finite(value),
            Token::NegInfinity => RangeBound::Infinite,
            // `-` `oo`
            Token::OpSym(_) => {
                self.pos += 1;
                RangeBound::Infinite
            }
            _ => {
                self.pos -= 1;
                return Err(self.unexpected());
            }
        };
        self.expect(&Token::DotDot)?;
        let high = match self.next()? {
            Token::Int(value) => RangeBound::Finite(value),
            Token::Infinity => RangeBound::Infinite,
            Token::Name(name) if name == "oo" => RangeBound::Infinite,
            _ => {
                self.pos -= 1;
                return Err(self.unexpected());
            }
        };
        Ok(TypeTree::Range { low, high })
    }
}
