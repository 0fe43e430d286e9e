use sudoku_logic::{CandidateGrid, Cell, Digit, House, SolveError, Sudoku};

// Project Euler no. 96, grid 1. Fully determined by propagation alone.
const EASY: &str = "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
const EASY_SOLUTION: &str =
    "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

// Norvig's hard puzzle. Propagation stalls, search has to finish it.
const HARD: &str = "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
const HARD_SOLUTION: &str =
    "417369825632158947958724316825437169791586432346912758289643571573291684164875293";

// EASY's solution with an unavoidable rectangle of 8/6 cleared:
// cells (0,1), (0,6), (1,1) and (1,6) can be completed in two ways.
const AMBIGUOUS: &str =
    "4.3921.579.7345.21251876493548132976729564138136798245372689514814253769695417382";
const AMBIGUOUS_SOLUTIONS: [&str; 2] = [
    "463921857987345621251876493548132976729564138136798245372689514814253769695417382",
    "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
];

// HARD with an extra clue that kills the solution without tripping up
// the initial propagation pass.
const UNSOLVABLE: &str =
    "49....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

fn sudoku(line: &str) -> Sudoku {
    Sudoku::from_str_line(line).unwrap_or_else(|err| panic!("{}", err))
}

#[test]
fn easy_puzzle_simplifies_completely() {
    let mut grid = CandidateGrid::from(&sudoku(EASY));
    grid.simplify().unwrap();

    assert!(grid.is_solved());
    assert_eq!(grid.to_sudoku(), sudoku(EASY_SOLUTION));
    assert!(grid.to_sudoku().to_str_line().starts_with("483921657"));
}

#[test]
fn simplify_is_idempotent() {
    for line in &[EASY, HARD] {
        let mut grid = CandidateGrid::from(&sudoku(line));
        grid.simplify().unwrap();

        let simplified = grid;
        grid.simplify().unwrap();
        assert_eq!(simplified, grid);
    }
}

#[test]
fn propagation_upholds_peer_uniqueness() {
    let mut grid = CandidateGrid::from(&sudoku(HARD));
    grid.simplify().unwrap();

    for house in House::all() {
        for digit in Digit::all() {
            let n_solved_with_digit = house
                .cells()
                .into_iter()
                .filter(|&cell| grid.candidates(cell) == digit.as_set())
                .count();
            assert!(n_solved_with_digit <= 1);
        }
    }
}

#[test]
fn solved_grid_is_left_untouched_by_search() {
    let mut grid = CandidateGrid::from(&sudoku(EASY));
    grid.simplify().unwrap();
    assert!(grid.is_solved());

    let solved = grid;
    grid.full_solve().unwrap();
    assert_eq!(solved, grid);
}

#[test]
fn hard_puzzle_requires_search() {
    let mut grid = CandidateGrid::from(&sudoku(HARD));
    grid.simplify().unwrap();
    assert!(!grid.is_solved());

    grid.full_solve().unwrap();
    assert_eq!(grid.to_sudoku(), sudoku(HARD_SOLUTION));
}

#[test]
fn solve_easy_and_hard() {
    let solution = sudoku(EASY).solve().unwrap();
    assert!(solution.is_solved());
    assert_eq!(solution.to_str_line(), EASY_SOLUTION);

    let solution = sudoku(HARD).solve().unwrap();
    assert!(solution.is_solved());
    assert_eq!(solution.to_str_line(), HARD_SOLUTION);
}

#[test]
fn ambiguous_puzzle_reports_both_solutions() {
    match sudoku(AMBIGUOUS).solve() {
        Err(SolveError::MultipleSolutions(mut solutions)) => {
            solutions.sort();
            assert_eq!(solutions.len(), 2);
            for (solution, expected) in solutions.iter().zip(AMBIGUOUS_SOLUTIONS.iter()) {
                assert!(solution.is_solved());
                assert_eq!(&solution.to_str_line(), expected);
            }
        }
        other => panic!("expected multiple solutions, got {:?}", other),
    }
}

#[test]
fn empty_grid_is_underdetermined() {
    let empty = Sudoku::from_bytes([0; 81]).unwrap();
    match empty.solve() {
        Err(SolveError::MultipleSolutions(solutions)) => {
            assert!(solutions.len() >= 2);
            assert!(solutions.iter().all(Sudoku::is_solved));
        }
        other => panic!("expected multiple solutions, got {:?}", other),
    }
}

#[test]
fn unsolvable_puzzle_survives_simplify_but_not_search() {
    let mut grid = CandidateGrid::from(&sudoku(UNSOLVABLE));
    grid.simplify().unwrap();
    assert!(!grid.is_solved());

    assert_eq!(grid.full_solve(), Err(SolveError::Unsolvable));
    assert_eq!(sudoku(UNSOLVABLE).solve(), Err(SolveError::Unsolvable));
}

#[test]
fn duplicate_clue_fails_before_any_guessing() {
    let mut line = "55".to_string();
    line.push_str(&".".repeat(79));

    let mut grid = CandidateGrid::from(&sudoku(&line));
    assert_eq!(grid.simplify(), Err(SolveError::Unsolvable));
}

#[test]
fn assign_is_monotonic() {
    let mut grid = CandidateGrid::from(&sudoku(HARD));
    grid.simplify().unwrap();

    let cell = Cell::all()
        .find(|&cell| grid.candidates(cell).len() > 1)
        .unwrap();
    let digit = grid.candidates(cell).into_iter().next().unwrap();

    // the assignment itself may fail (it's a guess), but never silently
    if grid.assign(cell, digit).is_ok() {
        assert_eq!(grid.candidates(cell), digit.as_set());
        for peer in cell.neighbors() {
            assert!(grid.candidates(peer) != digit.as_set());
            if !grid.candidates(peer).contains(digit) {
                continue;
            }
            panic!("peer {:?} kept the assigned digit", peer);
        }
    }
}

#[test]
fn line_parsing_is_strict() {
    use sudoku_logic::parse_errors::LineParseError;

    assert_eq!(
        Sudoku::from_str_line(&".".repeat(80)),
        Err(LineParseError::NotEnoughCells(80))
    );
    assert_eq!(
        Sudoku::from_str_line(&".".repeat(82)),
        Err(LineParseError::TooManyCells)
    );

    let mut bad = ".".repeat(81);
    bad.replace_range(13..14, "x");
    match Sudoku::from_str_line(&bad) {
        Err(LineParseError::InvalidEntry(entry)) => {
            assert_eq!(entry.cell, 13);
            assert_eq!(entry.ch, 'x');
            assert_eq!(entry.row(), 1);
            assert_eq!(entry.col(), 4);
            assert_eq!(entry.block(), 1);
        }
        other => panic!("expected invalid entry, got {:?}", other),
    }
}

#[test]
fn line_format_roundtrip() {
    for line in &[EASY, HARD, EASY_SOLUTION] {
        let line = line.replace('0', ".");
        assert_eq!(sudoku(&line).to_str_line(), line);
    }
}

#[test]
fn from_bytes_rejects_out_of_range() {
    let mut bytes = [0; 81];
    bytes[17] = 10;
    assert!(Sudoku::from_bytes(bytes).is_err());
}

#[test]
fn candidate_grid_display_shows_candidates() {
    let mut grid = CandidateGrid::from(&sudoku(HARD));
    grid.simplify().unwrap();

    let rendered = format!("{}", grid);
    // solved and unsolved cells side by side: single digits and candidate runs
    assert!(rendered.contains('│'));
    assert!(rendered.lines().count() > 9);
}
