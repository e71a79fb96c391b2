//! Stack growth for recursive tree walks.
//!
//! Golfed programs are shallow, but generated inputs (left-folded chains of
//! hundreds of `add`s) are not. Every recursive walk over `Node`s goes
//! through [`ensure_sufficient_stack`].

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is nearly exhausted.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}
