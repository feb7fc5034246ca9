//! This module defines the unit and peer structure of the board, that is,
//! which groups of cells must jointly contain each digit exactly once.
//!
//! A [Topology] is built once, up front, by closed-form construction over
//! the fixed 9×9 grid and is immutable afterwards. All other components
//! share it by reference. The classic rules yield 27 units (9 rows, 9
//! columns, 9 boxes); the diagonal variant adds the two main diagonals for
//! a total of 29.

use crate::{BOX_SIZE, CELL_COUNT, CandidateGrid, SIZE, index};
use crate::util::DigitSet;

/// A group of 9 cells, given by their flat indices, that must collectively
/// contain each digit from 1 to 9 exactly once.
pub type Unit = [usize; SIZE];

/// The fixed cell-to-unit and cell-to-peer structure of a Sudoku board. Two
/// cells are peers if they share at least one unit; a cell is never its own
/// peer, and the peer relation is symmetric.
#[derive(Clone, Debug)]
pub struct Topology {
    units: Vec<Unit>,
    cell_units: Vec<Vec<usize>>,
    peers: Vec<Vec<usize>>
}

fn row_units() -> Vec<Unit> {
    let mut units = Vec::new();

    for row in 0..SIZE {
        let mut unit = [0; SIZE];

        for (column, slot) in unit.iter_mut().enumerate() {
            *slot = index(column, row);
        }

        units.push(unit);
    }

    units
}

fn column_units() -> Vec<Unit> {
    let mut units = Vec::new();

    for column in 0..SIZE {
        let mut unit = [0; SIZE];

        for (row, slot) in unit.iter_mut().enumerate() {
            *slot = index(column, row);
        }

        units.push(unit);
    }

    units
}

fn box_units() -> Vec<Unit> {
    let mut units = Vec::new();

    for base_row in (0..SIZE).step_by(BOX_SIZE) {
        for base_column in (0..SIZE).step_by(BOX_SIZE) {
            let mut unit = [0; SIZE];

            for (offset, slot) in unit.iter_mut().enumerate() {
                let row = base_row + offset / BOX_SIZE;
                let column = base_column + offset % BOX_SIZE;
                *slot = index(column, row);
            }

            units.push(unit);
        }
    }

    units
}

fn diagonal_units() -> Vec<Unit> {
    let mut main_diagonal = [0; SIZE];
    let mut anti_diagonal = [0; SIZE];

    for row in 0..SIZE {
        main_diagonal[row] = index(row, row);
        anti_diagonal[row] = index(SIZE - 1 - row, row);
    }

    vec![
        main_diagonal,
        anti_diagonal
    ]
}

impl Topology {

    fn new(diagonals: bool) -> Topology {
        let mut units = row_units();
        units.append(&mut column_units());
        units.append(&mut box_units());

        if diagonals {
            units.append(&mut diagonal_units());
        }

        let mut cell_units = vec![Vec::new(); CELL_COUNT];

        for (unit_index, unit) in units.iter().enumerate() {
            for &cell in unit {
                cell_units[cell].push(unit_index);
            }
        }

        let mut peers = Vec::with_capacity(CELL_COUNT);

        for cell in 0..CELL_COUNT {
            let mut cell_peers: Vec<usize> = Vec::new();

            for &unit_index in &cell_units[cell] {
                for &other in &units[unit_index] {
                    if other != cell && !cell_peers.contains(&other) {
                        cell_peers.push(other);
                    }
                }
            }

            peers.push(cell_peers);
        }

        Topology {
            units,
            cell_units,
            peers
        }
    }

    /// Creates the topology of classic Sudoku rules: 9 rows, 9 columns, and
    /// 9 boxes, for a total of 27 units.
    pub fn classic() -> Topology {
        Topology::new(false)
    }

    /// Creates the topology of diagonal Sudoku: the 27 classic units plus
    /// the two main diagonals ( ╲ and ╱ ), for a total of 29 units.
    pub fn with_diagonals() -> Topology {
        Topology::new(true)
    }

    /// Gets a slice of all units of this topology.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Gets the indices into [Topology::units] of all units that contain the
    /// cell with the given flat index.
    pub fn units_of(&self, cell: usize) -> &[usize] {
        &self.cell_units[cell]
    }

    /// Gets the flat indices of all peers of the cell with the given flat
    /// index, that is, all other cells that share at least one unit with it.
    pub fn peers(&self, cell: usize) -> &[usize] {
        &self.peers[cell]
    }

    /// Indicates whether the given grid is a valid, fully determined
    /// solution under this topology. That is the case if every cell holds
    /// exactly one candidate and the 9 cells of every unit carry pairwise
    /// distinct digits, which together cover all of 1 to 9.
    pub fn is_valid_solution(&self, grid: &CandidateGrid) -> bool {
        self.units.iter().all(|unit| {
            let mut seen = DigitSet::empty();

            for &cell in unit {
                match grid.candidates(cell).only() {
                    Some(digit) if seen.insert(digit) => {},
                    _ => return false
                }
            }

            true
        })
    }
}
