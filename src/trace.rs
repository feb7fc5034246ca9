//! This module contains the [AssignmentLog], an ordered record of board
//! snapshots taken whenever a cell becomes determined during solving.
//!
//! The log exists for external consumers, such as a tool that visualizes
//! the sequence of deductions the solver made. Solving itself never depends
//! on the log being read, and a solve call always returns a fresh log, so
//! repeated calls do not observe each other's history.

use crate::CandidateGrid;

use serde::Serialize;

/// An append-only sequence of full-board snapshots. One snapshot is recorded
/// at the moment a cell transitions to exactly one candidate, whether that
/// happens through propagation or through a search guess. Snapshots from
/// abandoned search branches remain in the log, so a replay shows the
/// complete path the solver took, including dead ends.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AssignmentLog {
    snapshots: Vec<CandidateGrid>
}

impl AssignmentLog {

    /// Creates a new, empty `AssignmentLog`.
    pub fn new() -> AssignmentLog {
        AssignmentLog {
            snapshots: Vec::new()
        }
    }

    pub(crate) fn record(&mut self, grid: &CandidateGrid) {
        self.snapshots.push(grid.clone());
    }

    /// Gets the recorded snapshots in the order they were taken.
    pub fn snapshots(&self) -> &[CandidateGrid] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Indicates whether no snapshot has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
