//! This module contains the [Propagator], which shrinks the candidate sets
//! of a board by logical reasoning until no further progress is possible.
//!
//! Three rules are applied, always in the same order: elimination (a
//! determined cell's digit cannot appear in any of its peers), only-choice
//! (a digit that fits just one cell of a unit must go there), and naked
//! twins (two cells of a unit sharing the same two-candidate set claim
//! those two digits for themselves). The rules feed each other within one
//! pass, and passes repeat until a pass determines no new cell.

use crate::{CELL_COUNT, CandidateGrid};
use crate::error::Contradiction;
use crate::topology::Topology;
use crate::trace::AssignmentLog;
use crate::util::{DigitSet, MAX_DIGIT, MIN_DIGIT};

/// Replaces the candidate set of `cell` with `remaining`. Fails with
/// [Contradiction] if `remaining` is empty, and records a snapshot in `log`
/// if the cell thereby becomes determined. All rules funnel their updates
/// through this function.
fn narrow(grid: &mut CandidateGrid, cell: usize, remaining: DigitSet,
        log: &mut AssignmentLog) -> Result<(), Contradiction> {
    if remaining == grid.candidates(cell) {
        return Ok(());
    }

    if remaining.is_empty() {
        return Err(Contradiction);
    }

    grid.set_candidates(cell, remaining);

    if remaining.len() == 1 {
        log.record(grid);
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum Placement {
    Nowhere,
    One(usize),
    Multiple
}

impl Placement {
    fn extend(self, cell: usize) -> Placement {
        match self {
            Placement::Nowhere => Placement::One(cell),
            _ => Placement::Multiple
        }
    }
}

/// Applies the propagation rules to a board until a fixed point or a
/// [Contradiction] is reached. A propagator borrows the [Topology] that
/// defines the units and peers it reasons over; the board state itself is
/// passed through [Propagator::reduce] by value.
pub struct Propagator<'a> {
    topology: &'a Topology
}

impl<'a> Propagator<'a> {

    /// Creates a new propagator that reasons over the units and peers of
    /// the given topology.
    pub fn new(topology: &'a Topology) -> Propagator<'a> {
        Propagator {
            topology
        }
    }

    /// Repeatedly applies elimination, only-choice, and naked twins to the
    /// given board until one full pass determines no new cell, then returns
    /// the reduced board. Every cell that becomes determined along the way
    /// is recorded in `log`.
    ///
    /// # Errors
    ///
    /// If any rule empties some cell's candidate set, `Contradiction` is
    /// returned immediately and no further rules run. This signals that the
    /// board (or the guess that led to it) is inconsistent.
    pub fn reduce(&self, mut grid: CandidateGrid, log: &mut AssignmentLog)
            -> Result<CandidateGrid, Contradiction> {
        loop {
            let solved_before = grid.solved_count();

            self.eliminate(&mut grid, log)?;
            self.only_choice(&mut grid, log)?;
            self.naked_twins(&mut grid, log)?;

            if grid.solved_count() == solved_before {
                return Ok(grid);
            }
        }
    }

    /// For every determined cell, removes its digit from the candidate sets
    /// of all its peers.
    fn eliminate(&self, grid: &mut CandidateGrid, log: &mut AssignmentLog)
            -> Result<(), Contradiction> {
        for cell in 0..CELL_COUNT {
            let digit = match grid.solved_digit(cell) {
                Some(digit) => digit,
                None => continue
            };

            for &peer in self.topology.peers(cell) {
                let remaining =
                    grid.candidates(peer) - DigitSet::singleton(digit);
                narrow(grid, peer, remaining, log)?;
            }
        }

        Ok(())
    }

    /// For every unit and every digit, if exactly one cell of the unit
    /// still admits the digit, that cell is determined to hold it.
    fn only_choice(&self, grid: &mut CandidateGrid, log: &mut AssignmentLog)
            -> Result<(), Contradiction> {
        for unit in self.topology.units() {
            let mut placements =
                [Placement::Nowhere; (MAX_DIGIT - MIN_DIGIT + 1) as usize];

            for &cell in unit {
                for digit in grid.candidates(cell).iter() {
                    let slot = &mut placements[(digit - MIN_DIGIT) as usize];
                    *slot = slot.extend(cell);
                }
            }

            for (offset, placement) in placements.iter().enumerate() {
                if let Placement::One(cell) = *placement {
                    // A cell that is already determined is left alone, even
                    // if a second digit ends up with this cell as its only
                    // home. The resulting homeless digit surfaces as a
                    // contradiction through elimination.
                    if grid.candidates(cell).len() > 1 {
                        let digit = offset as u8 + MIN_DIGIT;
                        narrow(grid, cell, DigitSet::singleton(digit), log)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// For every unit, finds pairs of distinct cells holding the same
    /// two-candidate set and removes both digits from every other cell of
    /// the unit. Sets shared by three or more cells of a unit are not
    /// twins and license no elimination.
    fn naked_twins(&self, grid: &mut CandidateGrid, log: &mut AssignmentLog)
            -> Result<(), Contradiction> {
        for unit in self.topology.units() {
            let mut pair_counts: Vec<(DigitSet, usize)> = Vec::new();

            for &cell in unit {
                let candidates = grid.candidates(cell);

                if candidates.len() != 2 {
                    continue;
                }

                match pair_counts.iter_mut()
                        .find(|(pair, _)| *pair == candidates) {
                    Some((_, count)) => *count += 1,
                    None => pair_counts.push((candidates, 1))
                }
            }

            for &(pair, count) in &pair_counts {
                if count != 2 {
                    continue;
                }

                for &cell in unit {
                    let candidates = grid.candidates(cell);

                    if candidates == pair {
                        continue;
                    }

                    narrow(grid, cell, candidates - pair, log)?;
                }
            }
        }

        Ok(())
    }
}
