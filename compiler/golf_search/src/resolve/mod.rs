//! Variant resolution.
//!
//! Resolution is greedy and works from the inside out. An innermost
//! `Variants` (one whose alternatives hold no further `Variants`) is
//! replaced by its cheapest alternative, measured in the context of the
//! whole program with every other unresolved `Variants` provisionally at
//! its first alternative. This repeats until none remain.
//!
//! Each choice is optimal given the ones before it, not globally: two
//! `Variants` whose best picks depend on each other may resolve to a
//! longer program than the best combination.

use golf_emit::EmitError;
use golf_ir::{Node, NodeKind};
use golf_plugins::Lowered;
use rustc_hash::FxHashMap;

use crate::error::TargetError;
use crate::language::{Candidate, Language};
use crate::select::shortest;

/// Renders trees for one target, caching by structural equality.
struct Measurer<'l> {
    language: &'l Language,
    cache: FxHashMap<Node, Result<Candidate, TargetError>>,
}

impl<'l> Measurer<'l> {
    fn new(language: &'l Language) -> Self {
        Measurer {
            language,
            cache: FxHashMap::default(),
        }
    }

    fn measure(&mut self, program: &Lowered) -> Result<Candidate, TargetError> {
        if let Some(cached) = self.cache.get(program.program()) {
            return cached.clone();
        }
        let result = self.language.render(program);
        self.cache
            .insert(program.program().clone(), result.clone());
        result
    }
}

fn is_innermost_variants(node: &Node) -> bool {
    match node.kind() {
        NodeKind::Variants(alternatives) => alternatives
            .iter()
            .all(|alternative| !alternative.contains_variants()),
        _ => false,
    }
}

/// Resolve every `Variants` in `program` and emit the result.
#[tracing::instrument(level = "debug", skip_all, fields(language = language.name))]
pub fn resolve(language: &Language, program: &Lowered) -> Result<Candidate, TargetError> {
    let mut measurer = Measurer::new(language);
    let mut current = program.clone();

    while let Some(path) = current.program().find_path(&is_innermost_variants) {
        let count = match current.program().at_path(&path).map(|node| node.kind().clone()) {
            Some(NodeKind::Variants(alternatives)) => alternatives.len(),
            _ => break,
        };

        let mut measured = Vec::with_capacity(count);
        let mut first_error = None;
        for index in 0..count {
            let Some(substituted) = current.choose(&path, index) else {
                continue;
            };
            match measurer.measure(&substituted.with_first_variants()) {
                Ok(candidate) => measured.push((index, substituted, candidate.length)),
                Err(error) => {
                    tracing::trace!(alternative = index, %error, "alternative failed");
                    first_error.get_or_insert(error);
                }
            }
        }

        let Some((index, chosen, length)) = shortest(measured, |(_, _, length)| *length) else {
            return Err(first_error.unwrap_or_else(|| {
                EmitError::UnresolvedVariants {
                    target: language.name,
                }
                .into()
            }));
        };
        tracing::debug!(alternative = index, of = count, length, "variant chosen");
        current = chosen;
    }

    measurer.measure(&current)
}
