use thiserror::Error;

/// Failures of the breakpoint search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakError {
    #[error("no line lengths supplied for a non-empty atom sequence")]
    NoLineLengths,

    #[error("no feasible break found at position {position}")]
    NoFeasibleBreak { position: usize },
}
