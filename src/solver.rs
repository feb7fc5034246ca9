//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver], which interleaves the propagation
//! rules from the [propagate] module with a depth-first search over the
//! remaining candidates.

pub mod propagate;

use crate::{CELL_COUNT, CandidateGrid, Sudoku};
use crate::error::{Contradiction, SolveError, Unsolvable};
use crate::solver::propagate::Propagator;
use crate::topology::Topology;
use crate::trace::AssignmentLog;
use crate::util::DigitSet;

/// Syntactic sugar for `Result<CandidateGrid, Unsolvable>`, the outcome of
/// a solve: either a fully determined, consistent board or the statement
/// that no such board exists for the input.
pub type SolveResult = Result<CandidateGrid, Unsolvable>;

/// A trait for structs which have the ability to solve Sudoku, that is, to
/// find a fully determined board consistent with the puzzle's topology and
/// givens, or to establish that none exists.
pub trait Solver {

    /// Solves the provided Sudoku. Returns the solved board, or
    /// [Unsolvable] if every assignment of digits violates some unit.
    fn solve(&self, sudoku: &Sudoku) -> SolveResult;
}

// A branch determines at least the guessed cell, so the depth of a
// legitimate search never exceeds the cell count.
const MAX_SEARCH_DEPTH: usize = CELL_COUNT;

/// Finds the undetermined cell with the fewest remaining candidates and
/// returns its flat index. Ties are broken towards the lowest index. If the
/// board is fully determined, `None` is returned.
fn find_fewest_candidates(grid: &CandidateGrid) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for cell in 0..CELL_COUNT {
        let len = grid.candidates(cell).len();

        if len > 1 {
            match best {
                Some((best_len, _)) if best_len <= len => {},
                _ => best = Some((len, cell))
            }
        }
    }

    best.map(|(_, cell)| cell)
}

fn search(propagator: &Propagator<'_>, grid: CandidateGrid,
        log: &mut AssignmentLog, depth: usize) -> Option<CandidateGrid> {
    if depth > MAX_SEARCH_DEPTH {
        return None;
    }

    let grid = match propagator.reduce(grid, log) {
        Ok(grid) => grid,
        Err(Contradiction) => return None
    };

    if grid.is_solved() {
        return Some(grid);
    }

    let cell = find_fewest_candidates(&grid)?;

    for digit in grid.candidates(cell).iter() {
        let mut branch = grid.clone();
        branch.set_candidates(cell, DigitSet::singleton(digit));
        log.record(&branch);

        if let Some(solution) = search(propagator, branch, log, depth + 1) {
            return Some(solution);
        }
    }

    None
}

/// A [Solver] which runs the [Propagator] to a fixed point and, whenever
/// propagation stalls on an undetermined board, guesses on the cell with
/// the fewest remaining candidates and recurses depth-first into each
/// guess. Every branch operates on its own clone of the board, so failed
/// branches leave no trace on their siblings, and the first fully
/// determined board found is returned.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Solves the provided Sudoku like [Solver::solve], additionally
    /// returning the [AssignmentLog] that records a board snapshot for
    /// every cell determined along the way. The log is returned in both the
    /// solved and the unsolvable case.
    pub fn solve_with_log(&self, sudoku: &Sudoku)
            -> (SolveResult, AssignmentLog) {
        let mut log = AssignmentLog::new();
        let propagator = Propagator::new(sudoku.topology());
        let result = search(&propagator, sudoku.grid().clone(), &mut log, 0)
            .ok_or(Unsolvable);

        (result, log)
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, sudoku: &Sudoku) -> SolveResult {
        self.solve_with_log(sudoku).0
    }
}

/// Parses the given 81-character line and solves it under the given
/// topology in one call.
///
/// # Errors
///
/// * `SolveError::MalformedInput` if the line does not parse. No solving is
/// attempted in that case.
/// * `SolveError::Unsolvable` if the line parses but the puzzle has no
/// solution.
pub fn solve_line(line: &str, topology: Topology)
        -> Result<CandidateGrid, SolveError> {
    let sudoku = Sudoku::parse(line, topology)?;
    Ok(BacktrackingSolver.solve(&sudoku)?)
}
