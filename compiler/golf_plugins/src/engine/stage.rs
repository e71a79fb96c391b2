//! Typed stages.
//!
//! Each stage owns its plugin list and offers one operation, `run`, which
//! always runs to fixpoint. Stage outputs are wrapped so the next stage can
//! only be fed what the previous one produced.

use std::fmt;

use golf_ir::{Node, NodeKind};

use super::{run_to_fixpoint, Plugin};
use crate::error::StageError;

macro_rules! program_wrapper {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub struct $name(Node);

        impl $name {
            pub fn program(&self) -> &Node {
                &self.0
            }

            pub fn into_program(self) -> Node {
                self.0
            }

            /// This tree with the `Variants` at `path` replaced by its
            /// `alternative`-th alternative.
            ///
            /// `None` if `path` does not lead to a `Variants` or the
            /// alternative does not exist.
            pub fn choose(&self, path: &[usize], alternative: usize) -> Option<Self> {
                let chosen = match self.0.at_path(path)?.kind() {
                    NodeKind::Variants(alternatives) => alternatives.get(alternative)?.clone(),
                    _ => return None,
                };
                self.0.replace_at(path, chosen).map($name)
            }

            /// This tree with every `Variants` at its first alternative.
            pub fn with_first_variants(&self) -> Self {
                $name(self.0.first_variants())
            }
        }
    };
}

program_wrapper! {
    /// Output of the target-independent golf stage.
    Golfed
}

program_wrapper! {
    /// Output of a target's emit stage; may still contain `Variants`.
    Lowered
}

program_wrapper! {
    /// Output of a target's final-emit stage, ready for its emitter.
    Finalized
}

/// Shared body of the three stages.
struct Plugins(Vec<Box<dyn Plugin>>);

impl Plugins {
    fn names(&self) -> Vec<&str> {
        self.0.iter().map(|plugin| plugin.name()).collect()
    }
}

impl fmt::Debug for Plugins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Target-independent golfing.
#[derive(Debug)]
pub struct GolfStage(Plugins);

/// Target-specific lowering, run once per target.
#[derive(Debug)]
pub struct EmitStage(Plugins);

/// Target-specific last touches, run for every measured candidate.
#[derive(Debug)]
pub struct FinalEmitStage(Plugins);

impl GolfStage {
    pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
        GolfStage(Plugins(plugins))
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.0.names()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(stage = "golf"))]
    pub fn run(&self, program: &Node) -> Result<Golfed, StageError> {
        run_to_fixpoint("golf", &self.0 .0, program).map(Golfed)
    }
}

impl EmitStage {
    pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
        EmitStage(Plugins(plugins))
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.0.names()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(stage = "emit"))]
    pub fn run(&self, program: &Golfed) -> Result<Lowered, StageError> {
        run_to_fixpoint("emit", &self.0 .0, program.program()).map(Lowered)
    }
}

impl FinalEmitStage {
    pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
        FinalEmitStage(Plugins(plugins))
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.0.names()
    }

    #[tracing::instrument(level = "trace", skip_all, fields(stage = "final_emit"))]
    pub fn run(&self, program: &Lowered) -> Result<Finalized, StageError> {
        run_to_fixpoint("final_emit", &self.0 .0, program.program()).map(Finalized)
    }
}
