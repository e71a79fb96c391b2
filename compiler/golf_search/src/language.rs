//! Target descriptors.

use std::fmt;

use golf_emit::{Emitter, JoinPolicy};
use golf_plugins::{EmitStage, FinalEmitStage, Lowered};

use crate::error::TargetError;

/// One target language: its pipeline configuration and its emitter.
///
/// Plugin lists, operator tables and quoting rules all live inside these
/// values; nothing about a target is registered globally.
pub struct Language {
    pub name: &'static str,
    /// File extension without the dot, also accepted as a target name.
    pub extension: &'static str,
    pub emit: EmitStage,
    pub final_emit: FinalEmitStage,
    pub emitter: Box<dyn Emitter>,
    pub join: JoinPolicy,
}

/// An emitted program and its length in bytes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Candidate {
    pub text: String,
    pub length: usize,
}

impl Candidate {
    pub fn new(text: String) -> Self {
        Candidate {
            length: text.len(),
            text,
        }
    }
}

impl Language {
    /// Whether `key` names this target, by name (any case) or extension.
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key) || self.extension.eq_ignore_ascii_case(key)
    }

    /// Run final-emit, emit tokens and flatten them.
    ///
    /// `program` must be free of `Variants`; the emitter rejects any it
    /// meets.
    pub fn render(&self, program: &Lowered) -> Result<Candidate, TargetError> {
        let finalized = self.final_emit.run(program)?;
        let tokens = self.emitter.emit_program(finalized.program())?;
        Ok(Candidate::new(tokens.flatten(&self.join)))
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("name", &self.name)
            .field("extension", &self.extension)
            .field("emit", &self.emit)
            .field("final_emit", &self.final_emit)
            .finish_non_exhaustive()
    }
}
