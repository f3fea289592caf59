//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver],
//! which wraps a [Grid] and answers the questions one can ask about its
//! completions: [Solver::solutions] lazily enumerates all of them,
//! [Solver::uniqueness] classifies their number as zero, one or more while
//! computing at most two, and [Solver::solve] additionally hands out the
//! completed grid when it is unique.
//!
//! Internally, a solver translates its grid into an exact-cover instance
//! over the canonical [candidate](crate::cover::Candidate) and
//! [constraint](crate::cover::Constraint) tables, pins the rows of its
//! clues and lets the [dlx](crate::dlx) engine enumerate the covers. Every
//! enumeration builds a fresh instance, so the solver itself stays
//! immutable and shareable.

use crate::{Grid, index};
use crate::cover::{self, Candidate};
use crate::dlx::{
    Column,
    ColumnSelector,
    Covers,
    Dlx,
    SmallestColumnSelector
};

use serde::{Deserialize, Serialize};

/// An enumeration of the different ways a grid can be solvable, as computed
/// by [Solver::solve]. This is the companion of [Uniqueness] which carries
/// the solution grid in the unique case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the grid is not solvable at all.
    Impossible,

    /// Indicates that the grid has a unique solution, which is wrapped in
    /// this instance.
    Unique(Grid),

    /// Indicates that the grid has more than one solution.
    Ambiguous
}

/// The classification of a grid by its number of completions, as computed
/// by [Solver::uniqueness]. A puzzle whose classification is
/// [Uniqueness::Unique] is called proper.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Uniqueness {

    /// The grid has no completion at all. Structurally contradictory clue
    /// sets, such as two equal digits in one row, fall under this variant
    /// as well: they are not detected as malformed, they merely admit no
    /// completion.
    Unsolvable,

    /// The grid has exactly one completion.
    Unique,

    /// The grid has two or more completions. How many more is not
    /// determined.
    Multiple
}

impl Uniqueness {

    /// Classifies a sequence of solutions by pulling at most two elements
    /// from it: [Uniqueness::Unsolvable] if the sequence is empty,
    /// [Uniqueness::Unique] if it contains exactly one element and
    /// [Uniqueness::Multiple] as soon as a second element appears. A third
    /// element is never requested, which bounds the cost of classification
    /// no matter how many solutions exist.
    ///
    /// # Arguments
    ///
    /// * `solutions`: A sequence of solutions, usually
    /// [Solver::solutions]. It may be infinite.
    pub fn classify<I: IntoIterator>(solutions: I) -> Uniqueness {
        let mut solutions = solutions.into_iter();

        match (solutions.next(), solutions.next()) {
            (None, _) => Uniqueness::Unsolvable,
            (Some(_), None) => Uniqueness::Unique,
            (Some(_), Some(_)) => Uniqueness::Multiple
        }
    }
}

/// A solver for a single Sudoku [Grid]. The solver owns its grid and never
/// mutates it, so all of its operations take `&self` and a changed grid
/// means a new solver. Construction is cheap; the exact-cover translation
/// happens anew on each enumeration.
///
/// Serialization represents a solver by the 81-character representation of
/// its grid, and deserialization rebuilds the derived state from it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "Grid")]
#[serde(into = "Grid")]
pub struct Solver {
    grid: Grid,
    clues: usize,
    complete: bool
}

impl Solver {

    /// Creates a solver from the textual representation of a grid, with the
    /// leniency of [Grid::from_representation]: characters '1' to '9' are
    /// clues, any other character is an empty cell, and a representation
    /// whose length is not exactly 81 yields an entirely empty grid.
    ///
    /// # Arguments
    ///
    /// * `representation`: One character per cell, in row-major order.
    pub fn new(representation: &str) -> Solver {
        Solver::from_grid(Grid::from_representation(representation))
    }

    /// Creates a solver for the given grid. The grid may contain any digit
    /// combination; a contradictory one is classified as
    /// [Uniqueness::Unsolvable] rather than rejected.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to solve.
    pub fn from_grid(grid: Grid) -> Solver {
        let clues = grid.count_clues();

        Solver {
            clues,
            complete: clues == cover::CELL_COUNT,
            grid
        }
    }

    /// The grid this solver answers questions about.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of clues, i.e. filled cells, of the grid.
    pub fn clue_count(&self) -> usize {
        self.clues
    }

    /// Indicates whether the grid is already complete, i.e. all 81 cells
    /// are filled.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    fn exact_cover(&self) -> Dlx<Candidate> {
        let columns = cover::constraints().iter()
            .map(|constraint| Column::primary(constraint.to_string()));
        let mut dlx = Dlx::new(columns);
        let mut handles = Vec::with_capacity(cover::CANDIDATE_COUNT);

        for &candidate in cover::candidates() {
            let coverage = cover::constraint_indices(candidate);
            // the canonical tables are consistent, so appending cannot fail
            handles.push(dlx.append_row(&coverage, candidate).unwrap());
        }

        for (i, cell) in self.grid.cells().iter().enumerate() {
            if let Some(digit) = *cell {
                let row = i / cover::GRID_SIZE;
                let col = i % cover::GRID_SIZE;
                let handle = handles[cover::candidate_index(row, col, digit)];
                // a contradictory clue leaves the instance infeasible,
                // which the search reports as zero covers
                dlx.pin_row(handle).unwrap();
            }
        }

        dlx
    }

    /// Lazily enumerates every solution of the grid, i.e. every full grid
    /// that matches all clues and satisfies the Sudoku rules, branching on
    /// the scarcest constraint first ([SmallestColumnSelector]). See
    /// [Solver::solutions_with] to substitute another policy.
    ///
    /// Every call builds its own private search state, so an iterator may
    /// be dropped after any number of steps without affecting this solver
    /// or later enumerations, which restart from the beginning. For a fixed
    /// policy the order of solutions is deterministic.
    ///
    /// A complete grid yields exactly one solution, namely itself, without
    /// consulting the search engine. Its consistency with the Sudoku rules
    /// is not re-validated in that case.
    pub fn solutions(&self) -> Solutions<SmallestColumnSelector> {
        self.solutions_with(SmallestColumnSelector)
    }

    /// Lazily enumerates every solution of the grid like
    /// [Solver::solutions], but branches on the constraints chosen by the
    /// given selector.
    ///
    /// # Arguments
    ///
    /// * `selector`: The policy that picks the constraint to branch on at
    /// each depth of the search.
    pub fn solutions_with<S: ColumnSelector>(&self, selector: S)
            -> Solutions<S> {
        if self.complete {
            Solutions {
                state: State::Complete(Some(self.grid.clone()))
            }
        }
        else {
            Solutions {
                state: State::Search(self.exact_cover().solve(selector))
            }
        }
    }

    /// Classifies the number of solutions of the grid, computing at most
    /// two of them regardless of how under-constrained the grid is. See
    /// [Uniqueness::classify] for the exact bound.
    pub fn uniqueness(&self) -> Uniqueness {
        Uniqueness::classify(self.solutions())
    }

    /// Classifies the grid like [Solver::uniqueness] and, if the solution
    /// is unique, wraps it in [Solution::Unique]. Like the classification,
    /// this computes at most two solutions.
    pub fn solve(&self) -> Solution {
        let mut solutions = self.solutions();

        match solutions.next() {
            None => Solution::Impossible,
            Some(solution) =>
                if solutions.next().is_some() {
                    Solution::Ambiguous
                }
                else {
                    Solution::Unique(solution)
                }
        }
    }
}

impl From<Grid> for Solver {
    fn from(grid: Grid) -> Solver {
        Solver::from_grid(grid)
    }
}

impl From<Solver> for Grid {
    fn from(solver: Solver) -> Grid {
        solver.grid
    }
}

enum State<S: ColumnSelector> {
    Complete(Option<Grid>),
    Search(Covers<Candidate, S>)
}

/// The lazy iterator over all solutions of a solver's grid, as returned by
/// [Solver::solutions] and [Solver::solutions_with]. See there for the
/// enumeration guarantees.
pub struct Solutions<S: ColumnSelector = SmallestColumnSelector> {
    state: State<S>
}

impl<S: ColumnSelector> Iterator for Solutions<S> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        match &mut self.state {
            State::Complete(grid) => grid.take(),
            State::Search(covers) => {
                let cover = covers.next()?;
                let mut cells = [None; cover::CELL_COUNT];

                for row in cover {
                    let candidate = *covers.meta(row);
                    // a cover assigns each cell exactly once, with
                    // coordinates that are in bounds by construction
                    cells[index(candidate.row, candidate.col).unwrap()] =
                        Some(candidate.digit);
                }

                Some(Grid::from_cell_array(cells))
            }
        }
    }
}
