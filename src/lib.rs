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

//! This crate implements a Sudoku engine built on the exact-cover view of
//! the puzzle: every way of placing a digit into a cell is one of 729
//! [candidates](cover::Candidate), every rule a solved grid must obey is one
//! of 324 [constraints](cover::Constraint), and a solution is a choice of 81
//! candidates that satisfies every constraint exactly once. A dancing-links
//! search enumerates such choices lazily. The crate supports the following
//! key features:
//!
//! * Parsing and printing Sudoku grids
//! * Enumerating all solutions of a grid, lazily and restartably
//! * Classifying a grid as unsolvable, uniquely solvable or ambiguous while
//! computing at most two solutions
//! * Generating random proper puzzles, i.e. puzzles with exactly one
//! solution
//! * Permuting grids by the symmetries of the Sudoku rules
//! * A reusable, Sudoku-agnostic exact-cover engine in the [dlx] module
//!
//! # Parsing and printing Sudoku
//!
//! A grid is written as one character per cell in row-major order, digits
//! for clues and '.' for empty cells. [Grid::parse] validates such a
//! representation, [Grid::from_representation] accepts it leniently and
//! [Grid::to_representation] writes it back out.
//!
//! ```
//! use sudoku_dlx::Grid;
//!
//! let representation =
//!     "..3......4......2..8.12...6.........2...6...7...8.7.31.1.64.9..6.5..8...9.83...4.";
//! let grid = Grid::parse(representation).unwrap();
//!
//! println!("{}", grid);
//! assert_eq!(representation, grid.to_representation('.'));
//! ```
//!
//! # Solving Sudoku
//!
//! A [Solver](solver::Solver) wraps a grid and answers questions about its
//! solutions. [Solver::solve](solver::Solver::solve) classifies the grid and
//! hands out the solution if it is unique, while
//! [Solver::solutions](solver::Solver::solutions) enumerates all solutions
//! lazily.
//!
//! ```
//! use sudoku_dlx::solver::{Solution, Solver};
//!
//! let solver = Solver::new(
//!     "..3......4......2..8.12...6.........2...6...7...8.7.31.1.64.9..6.5..8...9.83...4.");
//!
//! if let Solution::Unique(solution) = solver.solve() {
//!     assert!(solution.is_full());
//! }
//! else {
//!     panic!("example puzzle has no unique solution");
//! }
//! ```
//!
//! # Generating Sudoku
//!
//! A [Generator](generator::Generator) produces random solved grids and,
//! together with a [Reducer](generator::Reducer), random proper puzzles.
//! Both are driven by a caller-supplied random number generator, so seeded
//! generation is reproducible.
//!
//! ```
//! use sudoku_dlx::generator::Generator;
//! use sudoku_dlx::solver::Uniqueness;
//!
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate();
//!
//! assert_eq!(Uniqueness::Unique, puzzle.uniqueness());
//! ```
//!
//! # Permuting Sudoku
//!
//! A [Permutation](permute::Permutation) rearranges a grid by symmetries of
//! the rules: reordering bands, rows, stacks and columns and relabeling
//! digits. The number of solutions of a grid is invariant under these maps.
//!
//! ```
//! use sudoku_dlx::generator::Generator;
//! use sudoku_dlx::permute::Permutation;
//!
//! let mut generator = Generator::new_default();
//! let solved = generator.generate_solved();
//! let permuted = Permutation::random(&mut rand::thread_rng()).apply(&solved);
//!
//! assert!(permuted.is_full());
//! ```

pub mod cover;
pub mod dlx;
pub mod error;
pub mod generator;
pub mod permute;
pub mod solver;

#[cfg(test)]
mod fix_tests;


use crate::cover::{BOX_SIZE, CELL_COUNT, GRID_SIZE};
use crate::error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{self, Unexpected};

use std::fmt::{self, Display, Formatter};
use std::num::NonZeroU8;
use std::str::FromStr;

/// One Sudoku digit, i.e. an integer in the range `[1, 9]`. The range is
/// guaranteed by construction, so wherever a `Digit` is handed around, no
/// further validation is necessary. An empty cell is not a digit; it is
/// represented by an `Option<Digit>` being `None`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Digit(NonZeroU8);

impl Digit {

    /// Creates a new digit with the given value, or `None` if the value is
    /// outside the range `[1, 9]`.
    pub fn new(value: u8) -> Option<Digit> {
        if (1..=9).contains(&value) {
            NonZeroU8::new(value).map(Digit)
        }
        else {
            None
        }
    }

    /// Creates a new digit from its character form, or `None` if the
    /// character is not a digit from '1' to '9'.
    pub fn from_char(c: char) -> Option<Digit> {
        c.to_digit(10).and_then(|value| Digit::new(value as u8))
    }

    /// An iterator over all nine digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (1..=9).filter_map(Digit::new)
    }

    /// The value of this digit as an integer in the range `[1, 9]`.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// The zero-based index of this digit, i.e. its value minus one, in the
    /// range `[0, 9[`. This is the form in which digits index into tables.
    pub fn index(self) -> usize {
        self.0.get() as usize - 1
    }

    /// The character form of this digit, i.e. a character from '1' to '9'.
    pub fn to_char(self) -> char {
        (b'0' + self.get()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

pub(crate) fn index(row: usize, col: usize) -> SudokuResult<usize> {
    if row < GRID_SIZE && col < GRID_SIZE {
        Ok(GRID_SIZE * row + col)
    }
    else {
        Err(SudokuError::OutOfBounds)
    }
}

/// A 9x9 Sudoku grid: 81 cells in row-major order, each either empty or
/// holding a [Digit]. The grid itself attaches no rules to its content; it
/// may hold any combination of digits, valid or not. Rules enter through
/// the [solver](crate::solver), which decides how many ways there are to
/// complete a grid.
///
/// `Grid` implements `Display` for a human-readable rendition using
/// box-drawing characters, and (de)serialization through its compact
/// 81-character representation, which is also understood by [Grid::parse]
/// and [Grid::from_representation].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: [Option<Digit>; CELL_COUNT]
}

impl Grid {

    /// Creates a new, empty grid.
    pub fn empty() -> Grid {
        Grid {
            cells: [None; CELL_COUNT]
        }
    }

    pub(crate) fn from_cell_array(cells: [Option<Digit>; CELL_COUNT]) -> Grid {
        Grid {
            cells
        }
    }

    /// Creates a grid from the given textual representation, which contains
    /// one character per cell in row-major order. A character from '1' to
    /// '9' fills its cell with that digit, any other character leaves the
    /// cell empty. If the representation does not contain exactly 81
    /// characters, an entirely empty grid is returned. No error is raised in
    /// any case; see [Grid::parse] for a validating alternative.
    ///
    /// # Arguments
    ///
    /// * `representation`: One character per cell, in row-major order.
    pub fn from_representation(representation: &str) -> Grid {
        let tokens: Vec<char> = representation.chars().collect();

        if tokens.len() != CELL_COUNT {
            return Grid::empty();
        }

        let mut grid = Grid::empty();

        for (i, &token) in tokens.iter().enumerate() {
            grid.cells[i] = Digit::from_char(token);
        }

        grid
    }

    /// Creates a grid from a slice of optional digits in row-major order.
    /// Like [Grid::from_representation], this is lenient: if the slice does
    /// not contain exactly 81 entries, an entirely empty grid is returned.
    ///
    /// # Arguments
    ///
    /// * `cells`: The content of the cells, in row-major order.
    pub fn from_cells(cells: &[Option<Digit>]) -> Grid {
        let mut grid = Grid::empty();

        if cells.len() == CELL_COUNT {
            grid.cells.copy_from_slice(cells);
        }

        grid
    }

    /// Parses the given textual representation, which must contain exactly
    /// 81 characters, each either a digit from '1' to '9' or the blank
    /// marker '.'. This is the validating counterpart to
    /// [Grid::from_representation]; its output format is produced by
    /// [Grid::to_representation] with '.' as the blank glyph.
    ///
    /// # Arguments
    ///
    /// * `representation`: One character per cell, in row-major order, '.'
    /// for empty cells.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::WrongLength` If the representation does not
    /// contain exactly 81 characters.
    /// * `SudokuParseError::InvalidCharacter` If the representation contains
    /// a character that is neither a digit from '1' to '9' nor '.'.
    pub fn parse(representation: &str) -> SudokuParseResult<Grid> {
        let tokens: Vec<char> = representation.chars().collect();

        if tokens.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongLength);
        }

        let mut grid = Grid::empty();

        for (i, &token) in tokens.iter().enumerate() {
            if let Some(digit) = Digit::from_char(token) {
                grid.cells[i] = Some(digit);
            }
            else if token != '.' {
                return Err(SudokuParseError::InvalidCharacter);
            }
        }

        Ok(grid)
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    /// * `col`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If `row` or `col` are not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, row: usize, col: usize) -> SudokuResult<Option<Digit>> {
        Ok(self.cells[index(row, col)?])
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. Any previous content is overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `col`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell.
    ///
    /// # Errors
    ///
    /// If `row` or `col` are not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn set(&mut self, row: usize, col: usize, digit: Digit)
            -> SudokuResult<()> {
        self.cells[index(row, col)?] = Some(digit);
        Ok(())
    }

    /// Clears the cell at the specified position, leaving it empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    /// * `col`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If `row` or `col` are not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn clear(&mut self, row: usize, col: usize) -> SudokuResult<()> {
        self.cells[index(row, col)?] = None;
        Ok(())
    }

    /// The raw content of all 81 cells, in row-major order.
    pub fn cells(&self) -> &[Option<Digit>] {
        &self.cells
    }

    /// Counts the cells which are filled with a digit.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether every cell of this grid is filled with a digit.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Serializes this grid into its textual representation: one character
    /// per cell in row-major order, filled cells as their digit and empty
    /// cells as the given blank glyph. As long as `blank` is not a digit
    /// from '1' to '9', the output losslessly round-trips through
    /// [Grid::from_representation].
    ///
    /// # Arguments
    ///
    /// * `blank`: The character that represents an empty cell, commonly '.'.
    pub fn to_representation(&self, blank: char) -> String {
        self.cells.iter()
            .map(|cell| match cell {
                Some(digit) => digit.to_char(),
                None => blank
            })
            .collect()
    }

    /// Renders this grid like its `Display` implementation, but with the
    /// column labels 1 to 9 above the grid and the row labels 'A' to 'J'
    /// (skipping 'I') to its left. Empty cells are marked with '·' instead
    /// of being left blank. The result ends with a newline.
    pub fn to_labelled_string(&self) -> String {
        let mut result = String::from("  ");

        for x in 0..GRID_SIZE {
            result.push_str("  ");
            result.push((b'1' + x as u8) as char);

            if x + 1 < GRID_SIZE {
                result.push(' ');
            }
        }

        result.push('\n');

        for y in 0..GRID_SIZE {
            result.push_str("  ");

            if y == 0 {
                result.push_str(top_row().as_str());
            }
            else if y % BOX_SIZE == 0 {
                result.push_str(thick_separator_line().as_str());
            }
            else {
                result.push_str(thin_separator_line().as_str());
            }

            result.push(ROW_LABELS[y]);
            result.push(' ');
            result.push_str(labelled_content_row(self, y).as_str());
        }

        result.push_str("  ");
        result.push_str(bottom_row().as_str());
        result.push('\n');
        result
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::empty()
    }
}

impl FromStr for Grid {
    type Err = SudokuParseError;

    fn from_str(s: &str) -> SudokuParseResult<Grid> {
        Grid::parse(s)
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S)
            -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_representation('.').as_str())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D)
            -> Result<Grid, D::Error> {
        let representation = String::deserialize(deserializer)?;

        Grid::parse(representation.as_str()).map_err(|_|
            de::Error::invalid_value(Unexpected::Str(representation.as_str()),
                &"81 cells in row-major order, '1' to '9' or '.' each"))
    }
}

/// The labels attached to the rows by [Grid::to_labelled_string]. 'I' is
/// skipped to avoid confusion with '1'.
const ROW_LABELS: [char; GRID_SIZE] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J'];

fn to_char(cell: Option<Digit>) -> char {
    if let Some(digit) = cell {
        digit.to_char()
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..GRID_SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get(y, x).unwrap()), ' ', '║', true)
}

fn labelled_content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│',
        |x| match grid.get(y, x).unwrap() {
            Some(digit) => digit.to_char(),
            None => '·'
        }, ' ', '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..GRID_SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}
