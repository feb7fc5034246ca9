// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a Sudoku solving engine that interleaves
//! constraint propagation with depth-first backtracking search. It supports
//! the following key features:
//!
//! * Parsing 81-character puzzle lines and printing candidate grids
//! * Classic rules (rows, columns, and boxes as units) as well as the
//! diagonal variant, where the two main diagonals are additional units
//! * The propagation rules elimination, only-choice, and naked twins
//! * A complete backtracking search on top of propagation, so every
//! solvable puzzle is solved and every unsolvable one is recognized
//! * A replayable log of board snapshots, one for every cell the solver
//! determines, for consumption by external visualization tools
//!
//! # Parsing and printing grids
//!
//! A puzzle is written as one line of 81 characters in row-major order,
//! where each character is a digit from 1 to 9 or the placeholder `'.'` for
//! an empty cell. Parsing yields a [CandidateGrid], which tracks the set of
//! digits that can still go into each cell.
//!
//! ```
//! use sudoku_deduce::CandidateGrid;
//!
//! let grid = CandidateGrid::parse(
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..")
//!     .unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving Sudoku
//!
//! A [Sudoku] pairs a grid with a [Topology](topology::Topology), which
//! defines the units the solution has to respect. The
//! [BacktrackingSolver](solver::BacktrackingSolver) first exhausts the
//! propagation rules and only guesses where logic alone stalls, so easy
//! puzzles are solved without any search at all.
//!
//! ```
//! use sudoku_deduce::Sudoku;
//! use sudoku_deduce::solver::{BacktrackingSolver, Solver};
//! use sudoku_deduce::topology::Topology;
//!
//! let sudoku = Sudoku::parse(
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
//!     Topology::classic()).unwrap();
//! let solution = BacktrackingSolver.solve(&sudoku).unwrap();
//!
//! assert_eq!(
//!     "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
//!     solution.to_line());
//! ```
//!
//! # Watching the solver work
//!
//! [BacktrackingSolver::solve_with_log](solver::BacktrackingSolver::solve_with_log)
//! additionally returns an [AssignmentLog](trace::AssignmentLog) holding a
//! board snapshot for every cell that became determined, which an external
//! tool can replay. The example below solves the diagonal variant.
//!
//! ```
//! use sudoku_deduce::Sudoku;
//! use sudoku_deduce::solver::BacktrackingSolver;
//! use sudoku_deduce::topology::Topology;
//!
//! let sudoku = Sudoku::parse(
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3",
//!     Topology::with_diagonals()).unwrap();
//! let (result, log) = BacktrackingSolver.solve_with_log(&sudoku);
//! let solution = result.unwrap();
//!
//! assert!(sudoku.is_solved_by(&solution));
//! assert_eq!(Some(&solution), log.snapshots().last());
//! ```

pub mod error;
pub mod solver;
pub mod topology;
pub mod trace;
pub mod util;

#[cfg(test)]
mod fix_tests;

use crate::error::{GridParseError, GridParseResult};
use crate::topology::Topology;
use crate::util::DigitSet;

use serde::{Serialize, Serializer};

use std::fmt::{self, Display, Formatter};

/// The number of cells along one axis of the grid.
pub const SIZE: usize = 9;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The number of cells along one axis of a box.
pub(crate) const BOX_SIZE: usize = 3;

/// The placeholder character denoting an empty cell in a puzzle line.
pub const PLACEHOLDER: char = '.';

/// Computes the flat index of the cell in the given column (x-coordinate)
/// and row (y-coordinate). Cells are numbered left-to-right, top-to-bottom,
/// where rows are together. Both coordinates must be in the range
/// `[0, SIZE[`.
pub fn index(column: usize, row: usize) -> usize {
    debug_assert!(column < SIZE && row < SIZE);
    row * SIZE + column
}

/// A grid of candidate sets, one for each of the 81 cells, in
/// left-to-right, top-to-bottom order. This is the board state the solver
/// operates on: a cell is *determined* once its candidate set holds exactly
/// one digit, and the grid is solved once every cell is determined.
///
/// Cloning is a flat copy of 81 [DigitSet]s, which makes it cheap enough
/// for the solver to clone the grid on every guess.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateGrid {
    cells: [DigitSet; CELL_COUNT]
}

fn separator_line(width: usize) -> String {
    let segment = "-".repeat(width * BOX_SIZE);
    format!("{}+{}+{}", segment, segment, segment)
}

impl Display for CandidateGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width =
            1 + self.cells.iter().map(DigitSet::len).max().unwrap_or(0);
        let separator = separator_line(width);

        for row in 0..SIZE {
            for column in 0..SIZE {
                let candidates = self.cells[index(column, row)];
                write!(f, "{:^width$}", candidates.to_string(),
                    width = width)?;

                if column % BOX_SIZE == BOX_SIZE - 1 && column != SIZE - 1 {
                    f.write_str("|")?;
                }
            }

            if row != SIZE - 1 {
                f.write_str("\n")?;

                if row % BOX_SIZE == BOX_SIZE - 1 {
                    f.write_str(separator.as_str())?;
                    f.write_str("\n")?;
                }
            }
        }

        Ok(())
    }
}

impl Serialize for CandidateGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.collect_seq(self.cells.iter())
    }
}

impl CandidateGrid {

    /// Creates a new grid in which every cell still admits every digit from
    /// 1 to 9.
    pub fn unconstrained() -> CandidateGrid {
        CandidateGrid {
            cells: [DigitSet::all(); CELL_COUNT]
        }
    }

    /// Parses a line of exactly 81 characters in row-major order, where
    /// each character is either a digit from 1 to 9 or the placeholder
    /// `'.'`. A given digit yields a cell determined to that digit, the
    /// placeholder yields a cell that admits all digits.
    ///
    /// As an example, the first row of the line
    /// `"4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......"`
    /// contains a 4 in the first cell, an 8 in the seventh and a 5 in the
    /// last one.
    ///
    /// # Errors
    ///
    /// * `GridParseError::WrongLength` if the line does not contain exactly
    /// 81 characters.
    /// * `GridParseError::InvalidCharacter` if some character is neither a
    /// digit from 1 to 9 nor the placeholder.
    pub fn parse(line: &str) -> GridParseResult<CandidateGrid> {
        let length = line.chars().count();

        if length != CELL_COUNT {
            return Err(GridParseError::WrongLength(length));
        }

        let mut grid = CandidateGrid::unconstrained();

        for (cell, character) in line.chars().enumerate() {
            match character {
                PLACEHOLDER => {},
                '1'..='9' =>
                    grid.cells[cell] =
                        DigitSet::singleton(character as u8 - b'0'),
                _ => return Err(
                    GridParseError::InvalidCharacter(cell, character))
            }
        }

        Ok(grid)
    }

    /// Gets the candidate set of the cell with the given flat index. The
    /// index must be in the range `[0, CELL_COUNT[`.
    pub fn candidates(&self, cell: usize) -> DigitSet {
        self.cells[cell]
    }

    pub(crate) fn set_candidates(&mut self, cell: usize,
            candidates: DigitSet) {
        self.cells[cell] = candidates;
    }

    /// If the cell with the given flat index is determined, its digit is
    /// returned, and `None` otherwise.
    pub fn solved_digit(&self, cell: usize) -> Option<u8> {
        self.cells[cell].only()
    }

    /// Returns the number of determined cells, that is, cells whose
    /// candidate set holds exactly one digit.
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|candidates| candidates.len() == 1).count()
    }

    /// Indicates whether every cell of this grid is determined.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|candidates| candidates.len() == 1)
    }

    /// Gets a read-only view of the candidate sets of all cells in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[DigitSet] {
        &self.cells
    }

    /// Converts this grid into a line of 81 characters in the format
    /// accepted by [CandidateGrid::parse]: determined cells are written as
    /// their digit, all other cells as the placeholder `'.'`.
    pub fn to_line(&self) -> String {
        self.cells.iter()
            .map(|candidates| match candidates.only() {
                Some(digit) => (b'0' + digit) as char,
                None => PLACEHOLDER
            })
            .collect()
    }
}

/// A Sudoku represents a grid of candidate sets together with the
/// [Topology] that defines the units a solution has to respect. There is no
/// guarantee that the Sudoku is solvable; the
/// [BacktrackingSolver](crate::solver::BacktrackingSolver) finds out.
#[derive(Clone, Debug)]
pub struct Sudoku {
    grid: CandidateGrid,
    topology: Topology
}

impl Sudoku {

    /// Creates a new Sudoku from the given grid, which may already contain
    /// determined cells, and topology.
    pub fn new(grid: CandidateGrid, topology: Topology) -> Sudoku {
        Sudoku {
            grid,
            topology
        }
    }

    /// Parses the line into a [CandidateGrid] using [CandidateGrid::parse]
    /// and wraps the result in a Sudoku with the given topology. Note that
    /// it is not checked whether the givens are consistent - it is
    /// perfectly legal to parse an unsolvable Sudoku.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [CandidateGrid::parse] for further
    /// information.
    pub fn parse(line: &str, topology: Topology) -> GridParseResult<Sudoku> {
        Ok(Sudoku::new(CandidateGrid::parse(line)?, topology))
    }

    /// Gets a reference to the [CandidateGrid] of this Sudoku.
    pub fn grid(&self) -> &CandidateGrid {
        &self.grid
    }

    /// Gets a reference to the [Topology] of this Sudoku.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Indicates whether the given grid is a valid solution to this puzzle.
    /// That is the case if every cell determined in this Sudoku keeps its
    /// digit in `solution`, and `solution` is fully determined and valid
    /// under this Sudoku's topology.
    pub fn is_solved_by(&self, solution: &CandidateGrid) -> bool {
        let givens_kept = (0..CELL_COUNT).all(|cell|
            match self.grid.solved_digit(cell) {
                Some(digit) => solution.solved_digit(cell) == Some(digit),
                None => true
            });

        givens_kept && self.topology.is_valid_solution(solution)
    }
}
