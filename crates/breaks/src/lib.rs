//! Optimal line breaking over a sequence of layout atoms.
//!
//! The search considers every feasible breakpoint and keeps a set of active
//! breakpoints from which the next line may start. Each candidate line is
//! scored by its adjustment ratio, penalty cost and fitness-class transitions;
//! the cheapest chain of breakpoints over the whole paragraph wins.
//!
//! Breakpoints live in an arena and refer to their predecessor by index, so
//! pruning the active set never invalidates a chain.

pub mod error;
pub mod item;
pub mod params;
pub mod search;

pub use error::BreakError;
pub use item::{fitness_class, is_feasible_breakpoint, is_forced_break};
pub use params::{BreakParams, OverflowPolicy};
pub use search::{Breaks, CandidateKey, LineBreaker, LineSpan, adjustment_ratio};

use typeset_core::{Atom, Length};

/// Compute break positions for `atoms` using the given demerit weights.
///
/// Line `n` targets `line_lengths[n]`; the last length repeats for later lines.
/// The result is strictly increasing and never contains position 0.
///
/// The atoms are searched as given. Callers must close the paragraph with a
/// forced break (or use [`LineBreaker::closed`]); otherwise the paragraph start
/// keeps zero demerits and wins, leaving everything on one line.
///
/// # Errors
/// Returns `BreakError::NoLineLengths` if `atoms` is non-empty but no line
/// length was supplied.
pub fn compute_breaks(
    atoms: &[Atom],
    line_lengths: &[Length],
    tolerance: f64,
    fitness_demerit: f64,
    flagged_demerit: f64,
) -> Result<Vec<usize>, BreakError> {
    let params = BreakParams {
        tolerance,
        fitness_demerit,
        flagged_demerit,
        ..BreakParams::default()
    };
    LineBreaker::new(atoms, params).compute_breaks(line_lengths)
}
