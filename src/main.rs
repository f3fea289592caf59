use sudoku_dlx::generator::Generator;
use sudoku_dlx::solver::{Solver, Uniqueness};

use std::env;
use std::fmt::Write;

const SOLUTION_PRINT_LIMIT: usize = 8;

/// Renders the given solver's grid, its clue count and its solutions,
/// capped at [SOLUTION_PRINT_LIMIT] if there are many.
fn solution_report(solver: &Solver) -> String {
    let mut report = solver.grid().to_labelled_string();
    writeln!(report, "clues: {}", solver.clue_count()).unwrap();

    match solver.uniqueness() {
        Uniqueness::Unsolvable => writeln!(report, "no solution").unwrap(),
        Uniqueness::Unique => {
            writeln!(report, "unique solution:").unwrap();

            for solution in solver.solutions() {
                report.push_str(solution.to_labelled_string().as_str());
                writeln!(report, "{}", solution.to_representation('.'))
                    .unwrap();
            }
        },
        Uniqueness::Multiple => {
            let solutions: Vec<_> = solver.solutions()
                .take(SOLUTION_PRINT_LIMIT + 1)
                .collect();

            if solutions.len() > SOLUTION_PRINT_LIMIT {
                writeln!(report, "multiple solutions, showing the first {}:",
                    SOLUTION_PRINT_LIMIT).unwrap();
            }
            else {
                writeln!(report, "{} solutions:", solutions.len()).unwrap();
            }

            for solution in solutions.iter().take(SOLUTION_PRINT_LIMIT) {
                report.push_str(solution.to_labelled_string().as_str());
            }
        }
    }

    report
}

/// Renders a generated puzzle: the grid with its clue count and compact
/// representation, followed by its unique solution.
fn puzzle_report(puzzle: &Solver) -> String {
    let mut report = puzzle.grid().to_labelled_string();
    writeln!(report, "clues: {}", puzzle.clue_count()).unwrap();
    writeln!(report, "{}", puzzle.grid().to_representation('.')).unwrap();
    writeln!(report, "unique solution:").unwrap();

    for solution in puzzle.solutions() {
        report.push_str(solution.to_labelled_string().as_str());
        writeln!(report, "{}", solution.to_representation('.')).unwrap();
    }

    report
}

fn main() {
    match env::args().nth(1) {
        Some(representation) =>
            print!("{}",
                solution_report(&Solver::new(representation.as_str()))),
        None => {
            let mut generator = Generator::new_default();

            print!("{}", puzzle_report(&generator.generate()));
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use sudoku_dlx::solver::Solution;

    const EXAMPLE: &str =
        "..3......4......2..8.12...6.........2...6...7...8.7.31.1.64.9..6.5..8...9.83...4.";

    #[test]
    fn solution_report_prints_the_unique_solution() {
        let solver = Solver::new(EXAMPLE);
        let report = solution_report(&solver);

        if let Solution::Unique(solution) = solver.solve() {
            assert!(report.contains("clues: 25"));
            assert!(report.contains("unique solution:"));
            assert!(report.contains(solution.to_representation('.')
                .as_str()));
        }
        else {
            panic!("example puzzle not uniquely solvable");
        }
    }

    #[test]
    fn solution_report_lists_small_solution_sets() {
        let mut ambiguous = String::from(EXAMPLE);
        ambiguous.replace_range(2..3, ".");
        let report = solution_report(&Solver::new(ambiguous.as_str()));

        assert!(report.contains("6 solutions:"));
    }

    #[test]
    fn solution_report_caps_vast_solution_sets() {
        let report = solution_report(&Solver::new(".".repeat(81).as_str()));

        assert!(report.contains("multiple solutions, showing the first 8:"));
    }

    #[test]
    fn solution_report_names_unsolvable_grids() {
        let mut clashing = String::from("11");
        clashing.push_str(".".repeat(79).as_str());
        let report = solution_report(&Solver::new(clashing.as_str()));

        assert!(report.contains("no solution"));
    }

    #[test]
    fn puzzle_report_prints_puzzle_and_solution() {
        let puzzle = Solver::new(EXAMPLE);
        let report = puzzle_report(&puzzle);

        if let Solution::Unique(solution) = puzzle.solve() {
            assert!(report.contains(EXAMPLE));
            assert!(report.contains("clues: 25"));
            assert!(report.contains("unique solution:"));
            assert!(report.contains(solution.to_representation('.')
                .as_str()));
        }
        else {
            panic!("example puzzle not uniquely solvable");
        }
    }
}
