//! This module contains the error and result definitions used throughout
//! this crate.

/// An enumeration of the errors that may occur when accessing the cells of a
/// [Grid](../struct.Grid.html) by coordinates.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the coordinates (row and column) of a cell lie outside
    /// the grid. This is the case if one of them is greater than or equal
    /// to 9.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](../struct.Grid.html) from its textual representation with the
/// validating parser. The lenient constructors never raise these, as they
/// substitute an empty grid or cell for malformed input.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the representation does not contain exactly one
    /// character per cell, i.e. 81 in total.
    WrongLength,

    /// Indicates that the representation contains a character which is
    /// neither a digit from '1' to '9' nor the blank marker '.'.
    InvalidCharacter
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
