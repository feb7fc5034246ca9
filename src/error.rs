//! This module contains the error and result definitions used in this crate.

/// An enumeration of the errors that may occur when parsing an 81-character
/// grid line into a [CandidateGrid](crate::CandidateGrid).
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the line does not consist of exactly 81 characters.
    /// Contains the number of characters that were actually provided.
    WrongLength(usize),

    /// Indicates that the line contains a character which is neither a digit
    /// from 1 to 9 nor the placeholder `'.'`. Contains the position of the
    /// offending character within the line as well as the character itself.
    InvalidCharacter(usize, char)
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

/// Signals that a board state is inconsistent, that is, some cell has no
/// remaining candidate digits. This is an expected outcome of propagation on
/// a wrong guess and is handled inside the search, where it prunes the
/// current branch. It is never surfaced to external callers.
#[derive(Debug, Eq, PartialEq)]
pub struct Contradiction;

/// Indicates that no assignment of digits consistent with all units exists
/// for the given puzzle. This is returned to the external caller once the
/// root search has exhausted every branch.
#[derive(Debug, Eq, PartialEq)]
pub struct Unsolvable;

/// An enumeration of all the ways solving a grid line can fail, as returned
/// by [solve_line](crate::solver::solve_line).
#[derive(Debug, Eq, PartialEq)]
pub enum SolveError {

    /// The input line was rejected before any solving began. See
    /// [GridParseError] for the specializations.
    MalformedInput(GridParseError),

    /// The line parsed, but the puzzle has no solution.
    Unsolvable
}

impl From<GridParseError> for SolveError {
    fn from(error: GridParseError) -> SolveError {
        SolveError::MalformedInput(error)
    }
}

impl From<Unsolvable> for SolveError {
    fn from(_: Unsolvable) -> SolveError {
        SolveError::Unsolvable
    }
}
