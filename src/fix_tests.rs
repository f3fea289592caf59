use crate::{Digit, Grid};
use crate::generator::SOLVED_REFERENCE;
use crate::solver::{Solution, Solver, Uniqueness};

const EXAMPLE: &str =
    "..3......4......2..8.12...6.........2...6...7...8.7.31.1.64.9..6.5..8...9.83...4.";

fn assert_valid_solution(solution: &Grid) {
    assert!(solution.is_full());

    for row in 0..9 {
        let mut digits: Vec<u8> = (0..9)
            .filter_map(|col| solution.get(row, col).unwrap())
            .map(Digit::get)
            .collect();
        digits.sort();

        assert_eq!((1..=9).collect::<Vec<_>>(), digits,
            "row {} does not contain all digits", row);
    }

    for col in 0..9 {
        let mut digits: Vec<u8> = (0..9)
            .filter_map(|row| solution.get(row, col).unwrap())
            .map(Digit::get)
            .collect();
        digits.sort();

        assert_eq!((1..=9).collect::<Vec<_>>(), digits,
            "column {} does not contain all digits", col);
    }

    for block in 0..9 {
        let base_row = 3 * (block / 3);
        let base_col = 3 * (block % 3);
        let mut digits: Vec<u8> = (0..9)
            .filter_map(|i| solution
                .get(base_row + i / 3, base_col + i % 3).unwrap())
            .map(Digit::get)
            .collect();
        digits.sort();

        assert_eq!((1..=9).collect::<Vec<_>>(), digits,
            "box {} does not contain all digits", block);
    }
}

#[test]
fn example_puzzle_solution_is_a_valid_sudoku() {
    let solver = Solver::new(EXAMPLE);

    if let Solution::Unique(solution) = solver.solve() {
        assert_valid_solution(&solution);
    }
    else {
        panic!("example puzzle not uniquely solvable");
    }
}

#[test]
fn completed_reference_yields_itself() {
    // positions 0 and 1 of the reference already hold 1 and 2, so filling
    // them back in reproduces the complete reference grid
    let mut representation = String::from("12");
    representation.push_str(&SOLVED_REFERENCE[2..]);
    let solver = Solver::new(representation.as_str());

    assert_eq!(SOLVED_REFERENCE, solver.grid().to_representation('.'));
    assert_eq!(Uniqueness::Unique, solver.uniqueness());

    let solutions: Vec<Grid> = solver.solutions().collect();

    assert_eq!(1, solutions.len());
    assert_eq!(SOLVED_REFERENCE, solutions[0].to_representation('.'));
}

#[test]
fn reference_without_two_clues_is_restored_exactly() {
    let mut representation = String::from("..");
    representation.push_str(&SOLVED_REFERENCE[2..]);
    let solver = Solver::new(representation.as_str());

    assert_eq!(79, solver.clue_count());

    if let Solution::Unique(solution) = solver.solve() {
        assert_eq!(SOLVED_REFERENCE, solution.to_representation('.'));
    }
    else {
        panic!("grid with 79 clues of a solved grid not unique");
    }
}

#[test]
fn single_clue_grid_is_ambiguous() {
    let mut grid = Grid::empty();
    grid.set(4, 4, Digit::new(5).unwrap()).unwrap();
    let solver = Solver::from_grid(grid);

    assert_eq!(Uniqueness::Multiple, solver.uniqueness());

    let mut solutions = solver.solutions();
    let first = solutions.next().unwrap();
    let second = solutions.next().unwrap();

    assert_ne!(first, second);
    assert_valid_solution(&first);
    assert_valid_solution(&second);
}

#[test]
fn sixteen_clues_cannot_be_proper() {
    // a proper sudoku needs at least 17 clues, so the first 16 clues of
    // the example puzzle must leave it ambiguous
    let mut representation = String::new();
    let mut clues = 0;

    for c in EXAMPLE.chars() {
        if c != '.' && clues < 16 {
            representation.push(c);
            clues += 1;
        }
        else {
            representation.push('.');
        }
    }

    let solver = Solver::new(representation.as_str());

    assert_eq!(16, solver.clue_count());
    assert_eq!(Uniqueness::Multiple, solver.uniqueness());
}

#[test]
fn solutions_of_ambiguous_grid_all_match_clues() {
    let mut representation = String::from(EXAMPLE);
    representation.replace_range(2..3, ".");
    let solver = Solver::new(representation.as_str());

    for solution in solver.solutions() {
        assert_valid_solution(&solution);

        for row in 0..9 {
            for col in 0..9 {
                if let Some(digit) = solver.grid().get(row, col).unwrap() {
                    assert_eq!(Some(digit),
                        solution.get(row, col).unwrap());
                }
            }
        }
    }
}

#[test]
fn strict_and_lenient_parsing_agree_on_valid_input() {
    let parsed = Grid::parse(EXAMPLE).unwrap();

    assert_eq!(Grid::from_representation(EXAMPLE), parsed);
    assert_eq!(Solver::from_grid(parsed).uniqueness(),
        Solver::new(EXAMPLE).uniqueness());
}
