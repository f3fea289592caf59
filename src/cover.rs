//! This module defines the encoding of a Sudoku grid as an exact-cover
//! problem.
//!
//! Every hypothetical placement of a digit into a cell is a [Candidate]; a
//! 9x9 grid has `9 * 9 * 9 = 729` of them. Every rule a solved grid must
//! obey is a [Constraint]; there are `4 * 81 = 324`: each cell holds exactly
//! one digit, and each row, column and box contains each digit exactly once.
//! A solved grid is a choice of 81 candidates that satisfies every
//! constraint exactly once, which makes solving an exact-cover search (see
//! the [dlx](crate::dlx) module for the engine).
//!
//! The encoding is pure arithmetic. [candidates] and [constraints] expose
//! the canonical tables, which are computed once and shared;
//! [constraint_indices] maps a candidate to the four constraints it
//! satisfies and [candidate_index] locates a candidate in the canonical
//! table by its coordinates. The table orders are fixed and documented,
//! since positions in them serve as row and column indices of the search
//! matrix.

use crate::Digit;

use once_cell::sync::Lazy;

use std::fmt::{self, Display, Formatter};

/// The width and height of one box of the grid, in cells.
pub const BOX_SIZE: usize = 3;

/// The width and height of the entire grid, in cells.
pub const GRID_SIZE: usize = BOX_SIZE * BOX_SIZE;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The total number of [Candidate]s, i.e. of (cell, digit) pairs.
pub const CANDIDATE_COUNT: usize = CELL_COUNT * GRID_SIZE;

/// The total number of [Constraint]s: four kinds of 81 instances each.
pub const CONSTRAINT_COUNT: usize = 4 * CELL_COUNT;

/// A hypothetical placement of a digit into a cell of the grid. Candidates
/// are ordered by row, then column, then digit, which is also the order in
/// which [candidates] enumerates them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Candidate {

    /// The row of the cell this placement fills, in the range `[0, 9[`.
    pub row: usize,

    /// The column of the cell this placement fills, in the range `[0, 9[`.
    pub col: usize,

    /// The digit this placement puts into the cell.
    pub digit: Digit
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}={}", self.row, self.col, self.digit)
    }
}

/// One constraint of the exact-cover formulation of the Sudoku rules. Each
/// constraint must be satisfied by exactly one chosen candidate.
///
/// The `Display` implementation renders the compact labels `R2C3` (cell),
/// `R2#5` (row-digit), `C3#5` (column-digit) and `B4#5` (box-digit), where
/// rows, columns and boxes are counted from zero and boxes are numbered in
/// row-major order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Constraint {

    /// The cell at the given coordinates contains exactly one digit.
    Cell {

        /// The row of the constrained cell, in the range `[0, 9[`.
        row: usize,

        /// The column of the constrained cell, in the range `[0, 9[`.
        col: usize
    },

    /// The given row contains the given digit exactly once.
    RowValue {

        /// The constrained row, in the range `[0, 9[`.
        row: usize,

        /// The digit that must appear exactly once in the row.
        value: Digit
    },

    /// The given column contains the given digit exactly once.
    ColumnValue {

        /// The constrained column, in the range `[0, 9[`.
        col: usize,

        /// The digit that must appear exactly once in the column.
        value: Digit
    },

    /// The given box contains the given digit exactly once.
    BoxValue {

        /// The constrained box, numbered row-major in the range `[0, 9[`.
        block: usize,

        /// The digit that must appear exactly once in the box.
        value: Digit
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Cell { row, col } =>
                write!(f, "R{}C{}", row, col),
            Constraint::RowValue { row, value } =>
                write!(f, "R{}#{}", row, value),
            Constraint::ColumnValue { col, value } =>
                write!(f, "C{}#{}", col, value),
            Constraint::BoxValue { block, value } =>
                write!(f, "B{}#{}", block, value)
        }
    }
}

static CANDIDATES: Lazy<Vec<Candidate>> = Lazy::new(|| {
    let mut candidates = Vec::with_capacity(CANDIDATE_COUNT);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            for digit in Digit::all() {
                candidates.push(Candidate {
                    row,
                    col,
                    digit
                });
            }
        }
    }

    candidates
});

static CONSTRAINTS: Lazy<Vec<Constraint>> = Lazy::new(|| {
    let mut constraints = Vec::with_capacity(CONSTRAINT_COUNT);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            constraints.push(Constraint::Cell {
                row,
                col
            });
        }
    }

    for row in 0..GRID_SIZE {
        for value in Digit::all() {
            constraints.push(Constraint::RowValue {
                row,
                value
            });
        }
    }

    for col in 0..GRID_SIZE {
        for value in Digit::all() {
            constraints.push(Constraint::ColumnValue {
                col,
                value
            });
        }
    }

    for block in 0..GRID_SIZE {
        for value in Digit::all() {
            constraints.push(Constraint::BoxValue {
                block,
                value
            });
        }
    }

    constraints
});

/// The canonical table of all 729 candidates, ordered by row, then column,
/// then digit. The table is computed once; every call yields the same
/// slice, so indices into it are stable for the lifetime of the program.
pub fn candidates() -> &'static [Candidate] {
    CANDIDATES.as_slice()
}

/// The canonical table of all 324 constraints: the 81 cell constraints
/// first, followed by the row-digit, column-digit and box-digit groups,
/// each in its natural order. The table is computed once; every call yields
/// the same slice.
pub fn constraints() -> &'static [Constraint] {
    CONSTRAINTS.as_slice()
}

/// Computes the position of the candidate with the given coordinates in the
/// canonical [candidates] table.
///
/// # Arguments
///
/// * `row`: The row of the candidate's cell. Must be in the range `[0, 9[`.
/// * `col`: The column of the candidate's cell. Must be in the range
/// `[0, 9[`.
/// * `digit`: The digit the candidate places.
pub fn candidate_index(row: usize, col: usize, digit: Digit) -> usize {
    GRID_SIZE * GRID_SIZE * row + GRID_SIZE * col + digit.index()
}

/// Computes the indices of the four constraints the given candidate
/// satisfies, as positions in the canonical [constraints] table: its cell
/// constraint followed by the row-digit, column-digit and box-digit
/// constraints of its digit. The four indices are always distinct and name
/// one constraint of each kind.
///
/// # Arguments
///
/// * `candidate`: The candidate whose constraint coverage is computed. Its
/// coordinates must be in the range `[0, 9[`.
pub fn constraint_indices(candidate: Candidate) -> [usize; 4] {
    let row = candidate.row;
    let col = candidate.col;
    let digit = candidate.digit.index();
    let block = BOX_SIZE * (row / BOX_SIZE) + col / BOX_SIZE;

    [
        GRID_SIZE * row + col,
        CELL_COUNT + GRID_SIZE * row + digit,
        2 * CELL_COUNT + GRID_SIZE * col + digit,
        3 * CELL_COUNT + GRID_SIZE * block + digit
    ]
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn candidate_table_is_complete_and_sorted() {
        let candidates = candidates();

        assert_eq!(CANDIDATE_COUNT, candidates.len());

        let mut sorted = candidates.to_vec();
        sorted.sort();

        assert_eq!(sorted.as_slice(), candidates);
    }

    #[test]
    fn candidate_index_locates_candidates_in_table() {
        for (index, candidate) in candidates().iter().enumerate() {
            assert_eq!(index,
                candidate_index(candidate.row, candidate.col,
                    candidate.digit));
        }
    }

    #[test]
    fn table_references_are_stable() {
        assert!(std::ptr::eq(candidates(), candidates()));
        assert!(std::ptr::eq(constraints(), constraints()));
    }

    #[test]
    fn constraint_table_groups_by_kind() {
        let constraints = constraints();

        assert_eq!(CONSTRAINT_COUNT, constraints.len());

        for (index, constraint) in constraints.iter().enumerate() {
            let expected_kind_start = match constraint {
                Constraint::Cell { .. } => 0,
                Constraint::RowValue { .. } => CELL_COUNT,
                Constraint::ColumnValue { .. } => 2 * CELL_COUNT,
                Constraint::BoxValue { .. } => 3 * CELL_COUNT
            };

            assert!(index >= expected_kind_start);
            assert!(index < expected_kind_start + CELL_COUNT);
        }
    }

    #[test]
    fn constraint_indices_agree_with_table() {
        for &candidate in candidates() {
            let [cell, row_value, column_value, box_value] =
                constraint_indices(candidate);
            let block = BOX_SIZE * (candidate.row / BOX_SIZE)
                + candidate.col / BOX_SIZE;
            let constraints = constraints();

            assert_eq!(Constraint::Cell {
                row: candidate.row,
                col: candidate.col
            }, constraints[cell]);
            assert_eq!(Constraint::RowValue {
                row: candidate.row,
                value: candidate.digit
            }, constraints[row_value]);
            assert_eq!(Constraint::ColumnValue {
                col: candidate.col,
                value: candidate.digit
            }, constraints[column_value]);
            assert_eq!(Constraint::BoxValue {
                block,
                value: candidate.digit
            }, constraints[box_value]);
        }
    }

    #[test]
    fn every_constraint_is_coverable_by_nine_candidates() {
        let mut coverage = [0usize; CONSTRAINT_COUNT];

        for &candidate in candidates() {
            for index in constraint_indices(candidate) {
                coverage[index] += 1;
            }
        }

        for (index, &count) in coverage.iter().enumerate() {
            assert_eq!(9, count, "constraint {} coverable by {} candidates",
                constraints()[index], count);
        }
    }

    #[test]
    fn constraint_labels_follow_compact_format() {
        let constraints = constraints();

        assert_eq!("R0C0", constraints[0].to_string());
        assert_eq!("R8C8", constraints[80].to_string());
        assert_eq!("R0#1", constraints[81].to_string());
        assert_eq!("R8#9", constraints[161].to_string());
        assert_eq!("C0#1", constraints[162].to_string());
        assert_eq!("B0#1", constraints[243].to_string());
        assert_eq!("B8#9", constraints[323].to_string());
    }

    #[test]
    fn candidate_label_names_cell_and_digit() {
        let candidate = Candidate {
            row: 2,
            col: 3,
            digit: Digit::new(5).unwrap()
        };

        assert_eq!("R2C3=5", candidate.to_string());
    }
}
