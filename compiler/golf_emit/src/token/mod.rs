//! Token trees.
//!
//! Emitters produce a nested tree of text fragments instead of a string so
//! that spacing is decided once, at flatten time, from the fragments that
//! actually end up adjacent.

use std::fmt;

/// A text fragment or an ordered group of subtrees.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenTree {
    Text(String),
    Seq(Vec<TokenTree>),
}

/// Build a [`TokenTree::Seq`] from anything convertible to a tree.
#[macro_export]
macro_rules! tokens {
    ($($item:expr),* $(,)?) => {
        $crate::TokenTree::Seq(vec![$($crate::TokenTree::from($item)),*])
    };
}

impl TokenTree {
    pub fn text(value: impl Into<String>) -> Self {
        TokenTree::Text(value.into())
    }

    pub fn seq(items: impl IntoIterator<Item = TokenTree>) -> Self {
        TokenTree::Seq(items.into_iter().collect())
    }

    pub fn empty() -> Self {
        TokenTree::Seq(Vec::new())
    }

    /// `items` with `separator` between each pair.
    pub fn join(items: impl IntoIterator<Item = TokenTree>, separator: &str) -> Self {
        let mut joined = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                joined.push(TokenTree::text(separator));
            }
            joined.push(item);
        }
        TokenTree::Seq(joined)
    }

    /// Non-empty text fragments in depth-first order.
    pub fn fragments(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fragments(&mut out);
        out
    }

    fn collect_fragments<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TokenTree::Text(text) if !text.is_empty() => out.push(text),
            TokenTree::Text(_) => {}
            TokenTree::Seq(items) => {
                for item in items {
                    item.collect_fragments(out);
                }
            }
        }
    }

    /// Concatenate fragments, inserting one space wherever `policy` says
    /// two neighbours would otherwise merge.
    pub fn flatten(&self, policy: &JoinPolicy) -> String {
        let mut out = String::new();
        for fragment in self.fragments() {
            if let (Some(prev), Some(next)) = (out.chars().next_back(), fragment.chars().next()) {
                if policy.needs_space(prev, next) {
                    out.push(' ');
                }
            }
            out.push_str(fragment);
        }
        out
    }
}

impl From<&str> for TokenTree {
    fn from(value: &str) -> Self {
        TokenTree::Text(value.to_string())
    }
}

impl From<String> for TokenTree {
    fn from(value: String) -> Self {
        TokenTree::Text(value)
    }
}

impl From<Vec<TokenTree>> for TokenTree {
    fn from(items: Vec<TokenTree>) -> Self {
        TokenTree::Seq(items)
    }
}

impl fmt::Debug for TokenTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenTree::Text(text) => write!(f, "{text:?}"),
            TokenTree::Seq(items) => f.debug_list().entries(items).finish(),
        }
    }
}

/// When two adjacent fragments need a space between them.
///
/// Two word characters always do (`local x`, `1 2`). `glued` lists further
/// character pairs that the target would lex as one token, such as `-` `-`
/// starting a Lua comment.
#[derive(Copy, Clone, Debug)]
pub struct JoinPolicy {
    pub is_word: fn(char) -> bool,
    pub glued: &'static [(char, char)],
}

impl JoinPolicy {
    pub fn needs_space(&self, prev: char, next: char) -> bool {
        ((self.is_word)(prev) && (self.is_word)(next)) || self.glued.contains(&(prev, next))
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Default for JoinPolicy {
    fn default() -> Self {
        JoinPolicy {
            is_word: is_identifier_char,
            glued: &[],
        }
    }
}

#[cfg(test)]
mod tests;
