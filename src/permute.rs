//! This module contains the symmetry [Permutation] that maps Sudoku grids
//! to structurally equivalent Sudoku grids.
//!
//! The Sudoku rules are invariant under certain rearrangements: the three
//! bands (rows of boxes) can be reordered, the three rows inside each band
//! can be reordered, the same holds for stacks (columns of boxes) and the
//! columns inside them, and the nine digits can be relabeled by an
//! arbitrary bijection. Each of these maps rows onto rows, columns onto
//! columns and boxes onto boxes, so a grid and its image always have the
//! same number of solutions: solved grids stay solved, proper puzzles stay
//! proper, contradictions stay contradictions.
//!
//! [Permutation::random] draws all five parts independently and uniformly.
//! The [generator](crate::generator) uses this to turn a single fixed
//! solved grid into unpredictable ones.
//!
//! # Example
//!
//! ```
//! use sudoku_dlx::Grid;
//! use sudoku_dlx::permute::Permutation;
//!
//! let grid = Grid::from_representation(
//!     "..3......4......2..8.12...6.........2...6...7...8.7.31.1.64.9..6.5..8...9.83...4.");
//! let permutation = Permutation::random(&mut rand::thread_rng());
//! let permuted = permutation.apply(&grid);
//!
//! assert_eq!(grid.count_clues(), permuted.count_clues());
//! assert_eq!(grid, Permutation::identity().apply(&grid));
//! ```

use crate::{Digit, Grid};
use crate::cover::{BOX_SIZE, GRID_SIZE};

use rand::Rng;

use std::array;

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..len.saturating_sub(1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

fn random_lines(rng: &mut impl Rng) -> [usize; BOX_SIZE] {
    let lines = shuffle(rng, 0..BOX_SIZE);
    array::from_fn(|i| lines[i])
}

fn digit_array(digits: Vec<Digit>) -> [Digit; GRID_SIZE] {
    array::from_fn(|i| digits[i])
}

/// A symmetry of the Sudoku rules: a permutation of the three bands, of the
/// rows inside each band, of the three stacks, of the columns inside each
/// stack, and a relabeling of the nine digits. Applying it to a grid
/// preserves the number of solutions (see the [module](self) docs).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Permutation {
    row_bands: [usize; BOX_SIZE],
    rows_in_bands: [[usize; BOX_SIZE]; BOX_SIZE],
    col_stacks: [usize; BOX_SIZE],
    cols_in_stacks: [[usize; BOX_SIZE]; BOX_SIZE],
    digits: [Digit; GRID_SIZE]
}

impl Permutation {

    /// The permutation that maps every grid to itself.
    pub fn identity() -> Permutation {
        Permutation {
            row_bands: [0, 1, 2],
            rows_in_bands: [[0, 1, 2]; BOX_SIZE],
            col_stacks: [0, 1, 2],
            cols_in_stacks: [[0, 1, 2]; BOX_SIZE],
            digits: digit_array(Digit::all().collect())
        }
    }

    /// Draws a permutation uniformly at random: the band order, the three
    /// row orders, the stack order, the three column orders and the digit
    /// relabeling are all independent and each uniform over its possible
    /// values.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator that decides the permutation.
    pub fn random(rng: &mut impl Rng) -> Permutation {
        Permutation {
            row_bands: random_lines(rng),
            rows_in_bands: [
                random_lines(rng),
                random_lines(rng),
                random_lines(rng)
            ],
            col_stacks: random_lines(rng),
            cols_in_stacks: [
                random_lines(rng),
                random_lines(rng),
                random_lines(rng)
            ],
            digits: digit_array(shuffle(rng, Digit::all()))
        }
    }

    fn target_row(&self, row: usize) -> usize {
        let band = row / BOX_SIZE;
        BOX_SIZE * self.row_bands[band]
            + self.rows_in_bands[band][row % BOX_SIZE]
    }

    fn target_col(&self, col: usize) -> usize {
        let stack = col / BOX_SIZE;
        BOX_SIZE * self.col_stacks[stack]
            + self.cols_in_stacks[stack][col % BOX_SIZE]
    }

    /// Applies this permutation to the given grid and returns the
    /// rearranged and relabeled grid. Empty cells stay empty, so the number
    /// of clues is preserved along with the number of solutions.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to rearrange. It is not modified.
    pub fn apply(&self, grid: &Grid) -> Grid {
        let mut result = Grid::empty();

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if let Some(digit) = grid.get(row, col).unwrap() {
                    result.set(self.target_row(row), self.target_col(col),
                        self.digits[digit.index()]).unwrap();
                }
            }
        }

        result
    }
}
