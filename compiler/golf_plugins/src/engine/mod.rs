//! Fixpoint rewrite engine.
//!
//! One pass over a tree visits every node twice:
//! 1. pre-order: the first plugin that proposes a different node wins
//! 2. the node's children are visited, rebuilding the node only if one
//!    of them changed
//! 3. post-order: the plugins get a second chance at the rebuilt node
//!
//! Passes repeat until one makes no change. [`MAX_PASSES`] bounds the loop
//! so a pair of plugins undoing each other fails the stage instead of
//! hanging.

mod stage;

use golf_ir::stack::ensure_sufficient_stack;
use golf_ir::Node;

use crate::error::StageError;

pub use stage::{EmitStage, FinalEmitStage, Finalized, GolfStage, Golfed, Lowered};

/// Upper bound on passes per stage run.
pub const MAX_PASSES: usize = 256;

/// A semantics-preserving tree rewrite.
pub trait Plugin: Send + Sync {
    /// Stable name, used in logs and errors.
    fn name(&self) -> &str;

    /// A replacement for `node`, or `None` to decline.
    fn visit(&self, node: &Node, ctx: &VisitContext<'_>) -> Option<Node>;
}

/// Read-only view of where a visited node sits.
#[derive(Copy, Clone, Debug)]
pub struct VisitContext<'a> {
    /// Root first, parent last.
    ancestors: &'a [Node],
}

impl<'a> VisitContext<'a> {
    pub fn new(ancestors: &'a [Node]) -> Self {
        VisitContext { ancestors }
    }

    pub fn parent(&self) -> Option<&'a Node> {
        self.ancestors.last()
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a Node> {
        self.ancestors.iter().rev()
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }
}

/// Mutable state of one pass.
struct Pass<'p> {
    plugins: &'p [Box<dyn Plugin>],
    ancestors: Vec<Node>,
    changes: usize,
    last_plugin: Option<&'p str>,
}

impl<'p> Pass<'p> {
    fn apply(&mut self, node: &Node) -> Option<Node> {
        let ctx = VisitContext::new(&self.ancestors);
        for plugin in self.plugins {
            if let Some(replacement) = plugin.visit(node, &ctx) {
                // A proposal equal to the input is a decline.
                if replacement != *node {
                    tracing::trace!(
                        plugin = plugin.name(),
                        from = %node.describe(),
                        to = %replacement.describe(),
                        "rewrite"
                    );
                    self.changes += 1;
                    self.last_plugin = Some(plugin.name());
                    return Some(replacement);
                }
            }
        }
        None
    }

    fn visit(&mut self, node: &Node) -> Node {
        ensure_sufficient_stack(|| {
            let mut current = self.apply(node).unwrap_or_else(|| node.clone());

            self.ancestors.push(current.clone());
            let rebuilt = current.map_children(|child| {
                let visited = self.visit(child);
                (!Node::ptr_eq(&visited, child)).then_some(visited)
            });
            self.ancestors.pop();
            if let Some(rebuilt) = rebuilt {
                current = rebuilt;
            }

            self.apply(&current).unwrap_or(current)
        })
    }
}

/// Run `plugins` over `program` until a pass changes nothing.
pub fn run_to_fixpoint(
    stage: &'static str,
    plugins: &[Box<dyn Plugin>],
    program: &Node,
) -> Result<Node, StageError> {
    if plugins.is_empty() {
        return Ok(program.clone());
    }
    let mut current = program.clone();
    let mut last_plugin = String::new();
    for pass_index in 0..MAX_PASSES {
        let mut pass = Pass {
            plugins,
            ancestors: Vec::new(),
            changes: 0,
            last_plugin: None,
        };
        current = pass.visit(&current);
        if pass.changes == 0 {
            tracing::debug!(stage, passes = pass_index + 1, "fixpoint reached");
            return Ok(current);
        }
        tracing::trace!(stage, pass = pass_index, changes = pass.changes, "pass done");
        if let Some(name) = pass.last_plugin {
            last_plugin = name.to_string();
        }
    }
    tracing::warn!(stage, plugin = %last_plugin, "no fixpoint");
    Err(StageError::NoFixpoint {
        stage,
        passes: MAX_PASSES,
        plugin: last_plugin,
    })
}

#[cfg(test)]
mod tests;
