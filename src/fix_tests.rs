use crate::{CandidateGrid, Sudoku};
use crate::error::Unsolvable;
use crate::solver::{BacktrackingSolver, Solver};
use crate::solver::propagate::Propagator;
use crate::topology::Topology;
use crate::trace::AssignmentLog;

// An easy classic puzzle that falls to propagation alone.
const EASY_CLASSIC: &str =
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
const EASY_CLASSIC_SOLUTION: &str =
    "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

// A 17-clue classic puzzle on which the propagation rules stall early, so
// the solver has to search.
const HARD_CLASSIC: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

// A diagonal-variant puzzle; without the diagonal units it would be
// hopelessly underconstrained.
const DIAGONAL: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

fn test_solves_correctly(puzzle: &str, solution: &str, topology: Topology) {
    let sudoku = Sudoku::parse(puzzle, topology).unwrap();
    let solved = BacktrackingSolver.solve(&sudoku)
        .expect("solvable sudoku reported unsolvable");

    assert_eq!(solution, solved.to_line(), "Solver gave wrong grid.");
}

#[test]
fn propagation_alone_solves_easy_classic() {
    let topology = Topology::classic();
    let propagator = Propagator::new(&topology);
    let mut log = AssignmentLog::new();
    let grid = CandidateGrid::parse(EASY_CLASSIC).unwrap();

    let reduced = propagator.reduce(grid, &mut log).unwrap();

    assert!(reduced.is_solved());
    assert_eq!(EASY_CLASSIC_SOLUTION, reduced.to_line());
}

#[test]
fn backtracking_solves_easy_classic() {
    test_solves_correctly(EASY_CLASSIC, EASY_CLASSIC_SOLUTION,
        Topology::classic());
}

// This Sudoku is taken from the World Puzzle Federation Sudoku GP 2020
// Round 5 Puzzle 5
// Puzzle: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound5.pdf
// Solution: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound5_SB.pdf

#[test]
fn backtracking_solves_gp_classic() {
    let puzzle =
        ".5.3...7.\
         1...2.8..\
         .2.4.9...\
         ..31..7.6\
         .4..6..5.\
         5.6..34..\
         ...8.2.3.\
         ..7.9...2\
         .6...1.8.";
    let solution =
        "654318279\
         139726845\
         728459163\
         893145726\
         241967358\
         576283491\
         915872634\
         387694512\
         462531987";

    test_solves_correctly(puzzle, solution, Topology::classic());
}

#[test]
fn propagation_stalls_on_hard_classic() {
    let topology = Topology::classic();
    let propagator = Propagator::new(&topology);
    let mut log = AssignmentLog::new();
    let grid = CandidateGrid::parse(HARD_CLASSIC).unwrap();

    let reduced = propagator.reduce(grid, &mut log).unwrap();

    assert!(!reduced.is_solved());
}

#[test]
fn backtracking_solves_hard_classic() {
    let sudoku = Sudoku::parse(HARD_CLASSIC, Topology::classic()).unwrap();
    let solution = BacktrackingSolver.solve(&sudoku).unwrap();

    assert!(sudoku.is_solved_by(&solution));
}

#[test]
fn backtracking_solves_diagonal_sudoku() {
    let sudoku = Sudoku::parse(DIAGONAL, Topology::with_diagonals()).unwrap();
    let solution = BacktrackingSolver.solve(&sudoku).unwrap();

    assert!(sudoku.is_solved_by(&solution));
    assert!(sudoku.topology().is_valid_solution(&solution));
}

#[test]
fn duplicate_givens_in_a_row_are_unsolvable() {
    let mut line = String::from("11");
    line.push_str(&".".repeat(79));
    let sudoku = Sudoku::parse(&line, Topology::classic()).unwrap();

    assert_eq!(Err(Unsolvable), BacktrackingSolver.solve(&sudoku));
}

#[test]
fn duplicate_givens_on_a_diagonal_are_unsolvable() {
    // A 3 in the top-left and the bottom-right corner only clashes once the
    // diagonal units are in play.
    let mut line = String::from("3");
    line.push_str(&".".repeat(79));
    line.push('3');

    let classic = Sudoku::parse(&line, Topology::classic()).unwrap();
    assert!(BacktrackingSolver.solve(&classic).is_ok());

    let diagonal = Sudoku::parse(&line, Topology::with_diagonals()).unwrap();
    assert_eq!(Err(Unsolvable), BacktrackingSolver.solve(&diagonal));
}

#[test]
fn log_ends_with_the_returned_solution() {
    let sudoku = Sudoku::parse(DIAGONAL, Topology::with_diagonals()).unwrap();
    let (result, log) = BacktrackingSolver.solve_with_log(&sudoku);
    let solution = result.unwrap();

    assert!(!log.is_empty());
    assert_eq!(Some(&solution), log.snapshots().last());
}

#[test]
fn solving_twice_yields_identical_logs() {
    let sudoku = Sudoku::parse(EASY_CLASSIC, Topology::classic()).unwrap();
    let (first_result, first_log) = BacktrackingSolver.solve_with_log(&sudoku);
    let (second_result, second_log) =
        BacktrackingSolver.solve_with_log(&sudoku);

    assert_eq!(first_result, second_result);
    assert_eq!(first_log.snapshots(), second_log.snapshots());
}
