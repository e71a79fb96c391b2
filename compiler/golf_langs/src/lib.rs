//! Golf Langs - concrete targets
//!
//! Each target is a [`Language`] value: two plugin lists, an emitter and a
//! join policy. Operator tables and builtin mappings are plain data next to
//! the target that uses them.
//!
//! | Target | Indexing | Style |
//! |---|---|---|
//! | GolfScript | zero-based | postfix, stack-based |
//! | Lua | one-based | statements, keyword blocks |
//! | Python | zero-based | statements, indentation |

pub mod golfscript;
pub mod lua;
pub mod python;

use golf_plugins::alternatives::{equality_to_inequality, flip_binary_ops};
use golf_plugins::loops::shift_range_one_up;
use golf_plugins::print::golf_last_print;
use golf_plugins::static_eval::eval_static_expr;
use golf_plugins::GolfStage;
use golf_search::Language;

/// Every target, in the order reports list them.
pub fn languages() -> Vec<Language> {
    vec![golfscript::golfscript(), lua::lua(), python::python()]
}

/// The target named `key`, by name (any case) or file extension.
pub fn find_lang(key: &str) -> Option<Language> {
    languages().into_iter().find(|language| language.matches(key))
}

/// Target-independent golfing shared by every target.
///
/// Output is compared with trailing whitespace stripped, so the last print
/// may as well end the line. Folding runs before the plugins that offer
/// alternatives, so literal operations never get wrapped.
pub fn golf_stage() -> GolfStage {
    GolfStage::new(vec![
        Box::new(eval_static_expr()),
        Box::new(golf_last_print(true)),
        Box::new(flip_binary_ops()),
        Box::new(equality_to_inequality()),
        Box::new(shift_range_one_up()),
    ])
}

#[cfg(test)]
mod tests;
