//! Identifier renaming.
//!
//! User identifiers get the shortest free names, in order of first
//! appearance. Builtin identifiers are never renamed, and no user
//! identifier is renamed onto a builtin's name or a reserved word.

use golf_ir::stack::ensure_sufficient_stack;
use golf_ir::{Name, Node, NodeKind};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::{Plugin, VisitContext};

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub struct RenameIdents {
    reserved: &'static [&'static str],
}

/// Rename with no reserved words beyond the builtins used by the program.
pub fn rename_idents() -> RenameIdents {
    RenameIdents { reserved: &[] }
}

impl RenameIdents {
    /// Also avoid `reserved`, for targets whose short builtins are not
    /// spelled as builtin identifiers in the tree.
    pub fn with_reserved(reserved: &'static [&'static str]) -> Self {
        RenameIdents { reserved }
    }
}

/// Candidate names, shortest first: `a`..`Z`, then `aa`, `ab`, ...
fn candidate_names() -> impl Iterator<Item = String> {
    let singles = LETTERS.chars().map(String::from);
    let pairs = LETTERS
        .chars()
        .flat_map(|first| LETTERS.chars().map(move |second| format!("{first}{second}")));
    singles.chain(pairs)
}

#[derive(Default)]
struct Usage {
    /// User names in order of first appearance.
    user: Vec<Name>,
    seen: FxHashSet<Name>,
    builtin: FxHashSet<Name>,
}

fn collect(node: &Node, usage: &mut Usage) {
    if let NodeKind::Identifier { name, builtin } = node.kind() {
        if *builtin {
            usage.builtin.insert(name.clone());
        } else if usage.seen.insert(name.clone()) {
            usage.user.push(name.clone());
        }
    }
    for child in node.children() {
        ensure_sufficient_stack(|| collect(&child, usage));
    }
}

fn rename(node: &Node, mapping: &FxHashMap<Name, Name>) -> Node {
    ensure_sufficient_stack(|| {
        if let NodeKind::Identifier {
            name,
            builtin: false,
        } = node.kind()
        {
            if let Some(new_name) = mapping.get(name) {
                return Node::with_kind_and_type(
                    NodeKind::Identifier {
                        name: new_name.clone(),
                        builtin: false,
                    },
                    node.annotated_type().cloned(),
                );
            }
        }
        node.map_children(|child| Some(rename(child, mapping)))
            .unwrap_or_else(|| node.clone())
    })
}

impl Plugin for RenameIdents {
    fn name(&self) -> &str {
        "rename_idents"
    }

    fn visit(&self, node: &Node, ctx: &VisitContext<'_>) -> Option<Node> {
        if !ctx.is_root() || !matches!(node.kind(), NodeKind::Program { .. }) {
            return None;
        }
        let mut usage = Usage::default();
        collect(node, &mut usage);

        let mut names = candidate_names().filter(|candidate| {
            !self.reserved.contains(&candidate.as_str())
                && !usage.builtin.contains(candidate.as_str())
        });
        let mut mapping = FxHashMap::default();
        let mut identity = true;
        for old in &usage.user {
            let new: Name = Name::from(names.next()?.as_str());
            identity &= *old == new;
            mapping.insert(old.clone(), new);
        }
        if identity {
            return None;
        }
        tracing::debug!(renamed = mapping.len(), "renaming identifiers");
        Some(rename(node, &mapping))
    }
}

#[cfg(test)]
mod tests;
