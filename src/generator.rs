//! This module contains logic for generating random Sudoku.
//!
//! Generation of puzzles is done in two steps, mirrored by the two types of
//! this module: a [Generator] first produces a random solved grid by
//! applying a random symmetry [Permutation] to a fixed solved reference
//! grid, and a [Reducer] then removes clues from it as long as the puzzle
//! keeps exactly one solution. The result is always a proper puzzle. The
//! reducer makes a single greedy pass in random order; it does not search
//! for a puzzle with the fewest possible clues.

use crate::Grid;
use crate::cover::{Candidate, GRID_SIZE};
use crate::permute::Permutation;
use crate::solver::{Solver, Uniqueness};

use rand::Rng;
use rand::rngs::ThreadRng;

use rand_distr::Normal;

use std::f64::consts;

/// One fixed solved grid. Random solved grids are produced as symmetry
/// permutations of this one.
pub(crate) const SOLVED_REFERENCE: &str =
    "126459783453786129789123456897231564231564897564897231312645978645978312978312645";

/// A generator randomly generates full (completely solved) Sudoku grids,
/// and proper puzzles derived from them. It uses a random number generator
/// to decide the content. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate random
    /// grids.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random grids.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator that decides the generated
    /// grids. Seeding it makes generation reproducible.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Generates a random solved grid by applying a random symmetry
    /// permutation to a fixed solved reference grid. The result is always
    /// full and valid, i.e. it has exactly one completion, namely itself.
    pub fn generate_solved(&mut self) -> Grid {
        let reference = Grid::from_representation(SOLVED_REFERENCE);
        Permutation::random(&mut self.rng).apply(&reference)
    }

    /// Generates a random proper puzzle: a random solved grid from which a
    /// [Reducer] pass has removed clues while the solution stayed unique.
    /// The returned solver wraps the puzzle; its unique solution is the
    /// solved grid the reduction started from. The clue count varies and is
    /// not guaranteed to be minimal.
    pub fn generate(&mut self) -> Solver {
        let mut solver = Solver::from_grid(self.generate_solved());
        let mut reducer = Reducer::new(&mut self.rng);
        reducer.reduce(&mut solver);
        solver
    }
}

/// A trait for types which can prioritize the order in which clue removals
/// are attempted when reducing a puzzle. Note that there is some random
/// element to the ordering (see [ReductionPrioritizer::rough_priority] for
/// details on the mathematics). The trait is blanket-implemented for all
/// closures of the shape `Fn(&Candidate) -> f64`.
pub trait ReductionPrioritizer {

    /// Determines the approximate priority of removing the given clue,
    /// viewed as the [Candidate] placement that currently fills its cell.
    /// Lower numbers indicate removals that are attempted earlier. When
    /// ordering two removals, each of these scores is added to a normally
    /// distributed random number with a standard deviation of
    /// `1 / sqrt(2)`; the removal with the lower sum comes first.
    ///
    /// For simple prioritization where some removals are attempted strictly
    /// before others, separate the scores by differences of at least 10 to
    /// make the probability of overlap negligible. If all scores are equal,
    /// the order is uniformly random.
    ///
    /// This method must _always_ return finite numbers or infinities, never
    /// NaN, as the jittered scores need to be totally ordered.
    ///
    /// # Arguments
    ///
    /// * `removal`: The clue whose removal shall be prioritized.
    fn rough_priority(&mut self, removal: &Candidate) -> f64;
}

struct EqualPrioritizer;

impl ReductionPrioritizer for EqualPrioritizer {
    fn rough_priority(&mut self, _: &Candidate) -> f64 {
        0.0
    }
}

impl<F: Fn(&Candidate) -> f64> ReductionPrioritizer for F {
    fn rough_priority(&mut self, removal: &Candidate) -> f64 {
        self(removal)
    }
}

fn prioritize(removal: &Candidate, prioritizer: &mut impl ReductionPrioritizer,
        rng: &mut impl Rng) -> f64 {
    let distr = Normal::new(0.0, consts::FRAC_1_SQRT_2).unwrap();
    prioritizer.rough_priority(removal) + rng.sample(distr)
}

fn clues(grid: &Grid) -> impl Iterator<Item = Candidate> + '_ {
    (0..GRID_SIZE).flat_map(move |row| (0..GRID_SIZE)
        .filter_map(move |col| grid.get(row, col).unwrap()
            .map(|digit| Candidate {
                row,
                col,
                digit
            })))
}

/// A reducer removes clues from the grid of a [Solver] as long as the
/// puzzle keeps exactly one solution, verified through
/// [Solver::uniqueness] after each tentative removal. A random number
/// generator decides the order in which removals are attempted.
///
/// For most cases, sensible defaults are provided by
/// [Reducer::new_default].
pub struct Reducer<R: Rng> {
    rng: R
}

impl Reducer<ThreadRng> {

    /// Creates a new reducer that uses a [ThreadRng] to decide the order of
    /// removals.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng())
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer that uses the given random number generator to
    /// decide the order of removals.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator that decides the order in which
    /// removals are attempted. Seeding it makes reduction reproducible.
    pub fn new(rng: R) -> Reducer<R> {
        Reducer {
            rng
        }
    }

    /// Reduces the given solver's grid as much as one greedy pass can:
    /// every clue is visited exactly once, in uniformly random order, and
    /// tentatively removed. The removal is kept if the puzzle still has
    /// exactly one solution and reverted otherwise. If the input has
    /// exactly one solution, which a full grid trivially does, the result
    /// is a proper puzzle.
    ///
    /// # Arguments
    ///
    /// * `solver`: The solver whose grid is reduced in place.
    pub fn reduce(&mut self, solver: &mut Solver) {
        self.reduce_with_priority(solver, EqualPrioritizer)
    }

    /// Reduces the given solver's grid like [Reducer::reduce], but the
    /// order in which removals are attempted is controlled by the given
    /// [ReductionPrioritizer]. Removals with lower (jittered) priority are
    /// attempted first.
    ///
    /// # Arguments
    ///
    /// * `solver`: The solver whose grid is reduced in place.
    /// * `prioritizer`: Determines the rough order of removal attempts.
    pub fn reduce_with_priority<P>(&mut self, solver: &mut Solver,
        mut prioritizer: P)
    where
        P: ReductionPrioritizer
    {
        let mut removals = clues(solver.grid())
            .map(|removal|
                (prioritize(&removal, &mut prioritizer, &mut self.rng),
                    removal))
            .collect::<Vec<_>>();
        removals.sort_by(|(p1, _), (p2, _)| p1.partial_cmp(p2).unwrap());

        for (_, removal) in removals {
            let mut reduced = solver.grid().clone();
            reduced.clear(removal.row, removal.col).unwrap();
            let reduced = Solver::from_grid(reduced);

            if reduced.uniqueness() == Uniqueness::Unique {
                *solver = reduced;
            }
        }
    }
}
