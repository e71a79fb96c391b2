//! Target pipelines and selection.

use golf_plugins::Golfed;
use rayon::prelude::*;

use crate::error::TargetError;
use crate::language::{Candidate, Language};
use crate::resolve::resolve;

/// The item with the smallest `len`; the earliest one on ties.
pub fn shortest<T>(items: impl IntoIterator<Item = T>, len: impl Fn(&T) -> usize) -> Option<T> {
    items.into_iter().min_by_key(|item| len(item))
}

/// Emit stage, then variant resolution, for one target.
#[tracing::instrument(level = "debug", skip_all, fields(language = language.name))]
pub fn compile_for(language: &Language, program: &Golfed) -> Result<Candidate, TargetError> {
    let lowered = language.emit.run(program)?;
    resolve(language, &lowered)
}

/// The result of compiling for one target.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TargetOutcome {
    pub language: &'static str,
    pub result: Result<Candidate, TargetError>,
}

/// Outcomes for every requested target, in declaration order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CompilationReport {
    pub outcomes: Vec<TargetOutcome>,
}

impl CompilationReport {
    /// The shortest successful program; the first-declared target on ties.
    pub fn best(&self) -> Option<(&'static str, &Candidate)> {
        shortest(self.successes(), |(_, candidate)| candidate.length)
    }

    pub fn successes(&self) -> impl Iterator<Item = (&'static str, &Candidate)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.result {
            Ok(candidate) => Some((outcome.language, candidate)),
            Err(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &TargetError)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.result {
            Ok(_) => None,
            Err(error) => Some((outcome.language, error)),
        })
    }
}

fn outcome(language: &Language, program: &Golfed) -> TargetOutcome {
    let result = compile_for(language, program);
    match &result {
        Ok(candidate) => {
            tracing::debug!(language = language.name, length = candidate.length, "compiled");
        }
        Err(error) => tracing::warn!(language = language.name, %error, "target failed"),
    }
    TargetOutcome {
        language: language.name,
        result,
    }
}

/// Compile `program` for every language.
///
/// With `parallel`, targets run on the rayon pool. The report lists
/// outcomes in the order of `languages` either way, so both modes pick the
/// same winner.
#[tracing::instrument(level = "debug", skip_all, fields(targets = languages.len(), parallel = parallel))]
pub fn compile_all(languages: &[Language], program: &Golfed, parallel: bool) -> CompilationReport {
    let outcomes = if parallel {
        languages
            .par_iter()
            .map(|language| outcome(language, program))
            .collect()
    } else {
        languages
            .iter()
            .map(|language| outcome(language, program))
            .collect()
    };
    CompilationReport { outcomes }
}

#[cfg(test)]
mod tests;
