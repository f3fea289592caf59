//! This module contains a generic exact-cover search engine based on the
//! dancing-links formulation of Knuth's Algorithm X.
//!
//! An exact-cover problem is stated over a set of columns (the constraints)
//! and a set of rows (the possible choices), where each row covers some of
//! the columns. A cover is a selection of rows that covers every primary
//! column exactly once and every secondary column at most once. [Dlx] holds
//! the problem as a torus of doubly linked nodes: covering a column unlinks
//! it and every row touching it with a constant number of pointer splices
//! per link, and uncovering performs the same splices in exact reverse
//! order, which is what makes backtracking cheap.
//!
//! The engine knows nothing about Sudoku. Rows carry caller-chosen metadata
//! which [Covers::meta] translates reported row handles back into, and the
//! column to branch on at each depth is chosen by a [ColumnSelector].
//! [SmallestColumnSelector] implements the usual fewest-remaining-rows
//! heuristic; other policies, such as randomized tie-breaking, can be
//! supplied as closures.
//!
//! Searching is lazy: [Dlx::solve] consumes the instance and returns the
//! [Covers] iterator, which carries the complete search state and computes
//! the next cover only when asked. It can be dropped at any point.
//!
//! # Example
//!
//! ```
//! use sudoku_dlx::dlx::{Column, Dlx, SmallestColumnSelector};
//!
//! let mut dlx: Dlx<&str> = Dlx::new(vec![
//!     Column::primary("A"),
//!     Column::primary("B"),
//!     Column::primary("C")
//! ]);
//! dlx.append_row(&[0, 1], "ab").unwrap();
//! dlx.append_row(&[2], "c").unwrap();
//! dlx.append_row(&[0, 1, 2], "abc").unwrap();
//!
//! let mut covers = dlx.solve(SmallestColumnSelector);
//! let first = covers.next().unwrap();
//! let mut rows: Vec<&str> =
//!     first.iter().map(|&row| *covers.meta(row)).collect();
//! rows.sort();
//!
//! assert_eq!(vec!["ab", "c"], rows);
//! // the only other cover is the single row "abc"
//! assert_eq!(1, covers.count());
//! ```

/// An enumeration of the errors that may occur when assembling a [Dlx]
/// instance.
#[derive(Debug, Eq, PartialEq)]
pub enum DlxError {

    /// Indicates that a coverage set names a column index for which the
    /// instance has no column.
    ColumnOutOfBounds,

    /// Indicates that a row handle does not belong to the instance it was
    /// used on.
    RowOutOfBounds
}

/// Syntactic sugar for `Result<V, DlxError>`.
pub type DlxResult<V> = Result<V, DlxError>;

/// A descriptor for one column of an exact-cover instance, given to
/// [Dlx::new]. A column is either primary, meaning every cover must contain
/// exactly one row covering it, or secondary, meaning at most one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Column {
    label: String,
    primary: bool
}

impl Column {

    /// Creates a descriptor for a primary column, which must be covered by
    /// exactly one row of every cover.
    ///
    /// # Arguments
    ///
    /// * `label`: A human-readable name for the column, used in diagnostics.
    pub fn primary(label: impl Into<String>) -> Column {
        Column {
            label: label.into(),
            primary: true
        }
    }

    /// Creates a descriptor for a secondary column, which may be covered by
    /// at most one row of every cover, but may also remain uncovered.
    ///
    /// # Arguments
    ///
    /// * `label`: A human-readable name for the column, used in diagnostics.
    pub fn secondary(label: impl Into<String>) -> Column {
        Column {
            label: label.into(),
            primary: false
        }
    }

    /// The human-readable label of this column.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Indicates whether this column is primary.
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

/// A handle to one row of a [Dlx] instance, as returned by
/// [Dlx::append_row]. Handles are dense and sequential: the first appended
/// row receives index 0, the second index 1 and so on.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RowHandle(usize);

impl RowHandle {

    /// The index of this row in append order.
    pub fn index(self) -> usize {
        self.0
    }
}

// Node 0 is the root of the column header ring, nodes 1..=column_count are
// the headers, and all later nodes belong to rows. Headers of secondary
// columns are not linked into the ring, which keeps them invisible to
// column selection.
#[derive(Clone, Copy)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    column: usize,
    row: usize
}

const ROOT: usize = 0;
const NO_ROW: usize = usize::MAX;

struct RowEntry<M> {
    meta: M,
    first_node: Option<usize>
}

/// An exact-cover instance: a fixed set of columns and a growing set of
/// rows, each covering some of the columns. See the
/// [module documentation](self) for the problem statement and an example.
///
/// The type parameter `M` is the metadata attached to each row.
pub struct Dlx<M> {
    nodes: Vec<Node>,
    sizes: Vec<usize>,
    covered: Vec<bool>,
    columns: Vec<Column>,
    rows: Vec<RowEntry<M>>,
    pinned: Vec<RowHandle>,
    infeasible: bool
}

impl<M> Dlx<M> {

    /// Creates a new instance over the given columns, with no rows. The
    /// column indices used in coverage sets and selectors follow the order
    /// of `columns`.
    ///
    /// # Arguments
    ///
    /// * `columns`: The descriptors of all columns of the instance.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Dlx<M> {
        let columns: Vec<Column> = columns.into_iter().collect();
        let mut nodes = Vec::with_capacity(columns.len() + 1);

        nodes.push(Node {
            left: ROOT,
            right: ROOT,
            up: ROOT,
            down: ROOT,
            column: usize::MAX,
            row: NO_ROW
        });

        for (column, descriptor) in columns.iter().enumerate() {
            let header = column + 1;

            nodes.push(Node {
                left: header,
                right: header,
                up: header,
                down: header,
                column,
                row: NO_ROW
            });

            if descriptor.primary {
                let last = nodes[ROOT].left;
                nodes[header].left = last;
                nodes[header].right = ROOT;
                nodes[last].right = header;
                nodes[ROOT].left = header;
            }
        }

        Dlx {
            nodes,
            sizes: vec![0; columns.len()],
            covered: vec![false; columns.len()],
            columns,
            rows: Vec::new(),
            pinned: Vec::new(),
            infeasible: false
        }
    }

    fn header(&self, column: usize) -> usize {
        column + 1
    }

    /// The number of columns of this instance.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The number of rows appended to this instance so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The descriptor of the column with the given index.
    ///
    /// # Arguments
    ///
    /// * `index`: The index of the column, following the order given to
    /// [Dlx::new].
    ///
    /// # Errors
    ///
    /// If there is no column with that index. In that case,
    /// `DlxError::ColumnOutOfBounds` is returned.
    pub fn column(&self, index: usize) -> DlxResult<&Column> {
        self.columns.get(index).ok_or(DlxError::ColumnOutOfBounds)
    }

    /// The metadata attached to the row with the given handle.
    ///
    /// # Arguments
    ///
    /// * `row`: A handle obtained from [Dlx::append_row] on this instance.
    ///
    /// # Errors
    ///
    /// If the handle does not belong to this instance. In that case,
    /// `DlxError::RowOutOfBounds` is returned.
    pub fn row_meta(&self, row: RowHandle) -> DlxResult<&M> {
        self.rows.get(row.0)
            .map(|entry| &entry.meta)
            .ok_or(DlxError::RowOutOfBounds)
    }

    /// Appends a row covering the columns named by `coverage` and returns
    /// its handle. Handles are assigned sequentially in append order, so
    /// the caller can also predict them. A column index must not repeat
    /// within one coverage set.
    ///
    /// # Arguments
    ///
    /// * `coverage`: The indices of the columns the new row covers.
    /// * `meta`: Caller-chosen metadata identifying the row, retrievable
    /// through [Dlx::row_meta] and [Covers::meta].
    ///
    /// # Errors
    ///
    /// If a coverage index is not a valid column index. In that case,
    /// `DlxError::ColumnOutOfBounds` is returned and the instance is
    /// unchanged.
    pub fn append_row(&mut self, coverage: &[usize], meta: M)
            -> DlxResult<RowHandle> {
        if coverage.iter().any(|&column| column >= self.columns.len()) {
            return Err(DlxError::ColumnOutOfBounds);
        }

        let handle = RowHandle(self.rows.len());
        let mut first_node: Option<usize> = None;

        for &column in coverage {
            let header = self.header(column);
            let node = self.nodes.len();
            let up = self.nodes[header].up;

            // insert at the bottom of the column, keeping the vertical
            // order equal to the append order
            self.nodes.push(Node {
                left: node,
                right: node,
                up,
                down: header,
                column,
                row: handle.0
            });
            self.nodes[up].down = node;
            self.nodes[header].up = node;
            self.sizes[column] += 1;

            if let Some(first) = first_node {
                let last = self.nodes[first].left;
                self.nodes[node].left = last;
                self.nodes[node].right = first;
                self.nodes[last].right = node;
                self.nodes[first].left = node;
            }
            else {
                first_node = Some(node);
            }
        }

        self.rows.push(RowEntry {
            meta,
            first_node
        });

        Ok(handle)
    }

    /// Forces the row with the given handle into every cover reported by
    /// [Dlx::solve]: all of its columns are covered up front, which removes
    /// every conflicting row from the search. This is how the clues of a
    /// puzzle are fixed before solving.
    ///
    /// Returns `true` if the row was pinned. If the row conflicts with a
    /// previously pinned row, i.e. one of its columns is already covered,
    /// the instance admits no cover at all: `false` is returned and the
    /// instance becomes infeasible, so [Dlx::solve] reports zero covers.
    ///
    /// # Arguments
    ///
    /// * `row`: A handle obtained from [Dlx::append_row] on this instance.
    ///
    /// # Errors
    ///
    /// If the handle does not belong to this instance. In that case,
    /// `DlxError::RowOutOfBounds` is returned.
    pub fn pin_row(&mut self, row: RowHandle) -> DlxResult<bool> {
        let first_node = self.rows.get(row.0)
            .ok_or(DlxError::RowOutOfBounds)?
            .first_node;
        let first = match first_node {
            Some(first) => first,
            None => {
                // a row covering no column constrains nothing
                self.pinned.push(row);
                return Ok(true);
            }
        };

        let mut node = first;

        loop {
            if self.covered[self.nodes[node].column] {
                self.infeasible = true;
                return Ok(false);
            }

            node = self.nodes[node].right;

            if node == first {
                break;
            }
        }

        // covering never touches the horizontal links of the row itself,
        // so this walk stays valid while the structure shrinks
        let mut node = first;

        loop {
            self.cover(self.nodes[node].column);
            node = self.nodes[node].right;

            if node == first {
                break;
            }
        }

        self.pinned.push(row);
        Ok(true)
    }

    /// Starts the search, consuming this instance, and returns a lazy
    /// iterator over all covers. Each cover is reported as the set of
    /// handles of its rows, pinned rows included. For a fixed selector the
    /// enumeration order is deterministic, following the append order of
    /// rows within each chosen column.
    ///
    /// # Arguments
    ///
    /// * `selector`: The policy that picks the column to branch on at each
    /// depth, e.g. [SmallestColumnSelector].
    pub fn solve<S: ColumnSelector>(self, selector: S) -> Covers<M, S> {
        let done = self.infeasible;

        Covers {
            dlx: self,
            selector,
            stack: Vec::new(),
            started: false,
            done
        }
    }

    fn is_fully_covered(&self) -> bool {
        self.nodes[ROOT].right == ROOT
    }

    fn active_columns(&self) -> ActiveColumns<'_> {
        ActiveColumns {
            nodes: &self.nodes,
            sizes: &self.sizes,
            next: self.nodes[ROOT].right
        }
    }

    // membership in the header ring, i.e. in what active_columns offers
    fn is_active(&self, column: usize) -> bool {
        column < self.columns.len() && self.columns[column].primary
            && !self.covered[column]
    }

    fn cover(&mut self, column: usize) {
        let header = self.header(column);
        let left = self.nodes[header].left;
        let right = self.nodes[header].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.covered[column] = true;

        let mut row_node = self.nodes[header].down;

        while row_node != header {
            let mut node = self.nodes[row_node].right;

            while node != row_node {
                let up = self.nodes[node].up;
                let down = self.nodes[node].down;
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[self.nodes[node].column] -= 1;
                node = self.nodes[node].right;
            }

            row_node = self.nodes[row_node].down;
        }
    }

    // exact mirror of cover: same splices, reverse order
    fn uncover(&mut self, column: usize) {
        let header = self.header(column);
        let mut row_node = self.nodes[header].up;

        while row_node != header {
            let mut node = self.nodes[row_node].left;

            while node != row_node {
                let up = self.nodes[node].up;
                let down = self.nodes[node].down;
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                self.sizes[self.nodes[node].column] += 1;
                node = self.nodes[node].left;
            }

            row_node = self.nodes[row_node].up;
        }

        self.covered[column] = false;
        let left = self.nodes[header].left;
        let right = self.nodes[header].right;
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }

    fn cover_siblings(&mut self, node: usize) {
        let mut sibling = self.nodes[node].right;

        while sibling != node {
            self.cover(self.nodes[sibling].column);
            sibling = self.nodes[sibling].right;
        }
    }

    fn uncover_siblings(&mut self, node: usize) {
        let mut sibling = self.nodes[node].left;

        while sibling != node {
            self.uncover(self.nodes[sibling].column);
            sibling = self.nodes[sibling].left;
        }
    }
}

/// An iterator over the currently active columns of a [Dlx] instance,
/// handed to [ColumnSelector::select]. Each element is a pair of the
/// column's index and the number of rows that can still cover it. Only
/// primary columns that are not yet covered appear.
pub struct ActiveColumns<'a> {
    nodes: &'a [Node],
    sizes: &'a [usize],
    next: usize
}

impl<'a> Iterator for ActiveColumns<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.next == ROOT {
            return None;
        }

        let column = self.nodes[self.next].column;
        self.next = self.nodes[self.next].right;
        Some((column, self.sizes[column]))
    }
}

/// A policy that chooses the column on which an exact-cover search branches
/// next. The search covers the chosen column and tries every row covering
/// it in turn, so the choice steers the shape, but never the completeness,
/// of the enumeration.
///
/// The trait is blanket-implemented for closures of the shape
/// `FnMut(ActiveColumns) -> Option<usize>`.
pub trait ColumnSelector {

    /// Chooses one of the active columns, given an iterator over their
    /// indices and remaining row counts. `columns` is never empty.
    /// Returning a column index not contained in `columns`, or `None`,
    /// makes the search treat the state as a dead end and backtrack; for
    /// complete enumeration a selector must therefore always return one of
    /// the offered columns.
    fn select(&mut self, columns: ActiveColumns<'_>) -> Option<usize>;
}

impl<F> ColumnSelector for F
where
    F: FnMut(ActiveColumns<'_>) -> Option<usize>
{
    fn select(&mut self, columns: ActiveColumns<'_>) -> Option<usize> {
        self(columns)
    }
}

/// The default [ColumnSelector]: it chooses the first active column with
/// the fewest remaining rows. Branching on a scarcest column keeps the
/// search tree narrow and detects dead ends (columns with no remaining
/// rows) immediately.
#[derive(Clone, Copy, Debug)]
pub struct SmallestColumnSelector;

impl ColumnSelector for SmallestColumnSelector {
    fn select(&mut self, columns: ActiveColumns<'_>) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;

        for (column, size) in columns {
            match best {
                Some((_, best_size)) if size >= best_size => {},
                _ => best = Some((column, size))
            }
        }

        best.map(|(column, _)| column)
    }
}

struct Frame {
    column: usize,
    node: usize
}

/// The lazy iterator over all covers of a [Dlx] instance, as returned by
/// [Dlx::solve]. Each element is the set of handles of the rows forming one
/// cover, in no particular order. The iterator owns the search state, so it
/// can be dropped mid-enumeration without further obligations.
pub struct Covers<M, S: ColumnSelector> {
    dlx: Dlx<M>,
    selector: S,
    stack: Vec<Frame>,
    started: bool,
    done: bool
}

impl<M, S: ColumnSelector> Covers<M, S> {

    /// The metadata of the row with the given handle, as attached by
    /// [Dlx::append_row] to the instance this iterator was created from.
    ///
    /// # Arguments
    ///
    /// * `row`: A row handle, usually taken from a reported cover.
    ///
    /// # Panics
    ///
    /// If the handle does not belong to the solved instance. Handles taken
    /// from covers reported by this iterator are always valid.
    pub fn meta(&self, row: RowHandle) -> &M {
        &self.dlx.rows[row.0].meta
    }

    fn current_cover(&self) -> Vec<RowHandle> {
        let mut cover = self.dlx.pinned.clone();
        cover.extend(self.stack.iter()
            .map(|frame| RowHandle(self.dlx.nodes[frame.node].row)));
        cover
    }
}

impl<M, S: ColumnSelector> Iterator for Covers<M, S> {
    type Item = Vec<RowHandle>;

    fn next(&mut self) -> Option<Vec<RowHandle>> {
        if self.done {
            return None;
        }

        // On the first call the search descends from the initial state.
        // Later calls resume by advancing the deepest choice, which first
        // undoes the cover reported last.
        let mut descend = !self.started;
        self.started = true;

        loop {
            if descend {
                if self.dlx.is_fully_covered() {
                    return Some(self.current_cover());
                }

                match self.selector.select(self.dlx.active_columns()) {
                    Some(column) if self.dlx.is_active(column) => {
                        self.dlx.cover(column);
                        self.stack.push(Frame {
                            column,
                            node: self.dlx.header(column)
                        });
                        descend = false;
                    },
                    // None and answers outside the active columns are
                    // dead ends
                    _ => descend = false
                }
            }
            else {
                let frame = match self.stack.pop() {
                    Some(frame) => frame,
                    None => {
                        self.done = true;
                        return None;
                    }
                };
                let header = self.dlx.header(frame.column);

                if frame.node != header {
                    self.dlx.uncover_siblings(frame.node);
                }

                let next = self.dlx.nodes[frame.node].down;

                if next == header {
                    self.dlx.uncover(frame.column);
                }
                else {
                    self.stack.push(Frame {
                        column: frame.column,
                        node: next
                    });
                    self.dlx.cover_siblings(next);
                    descend = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn columns(count: usize) -> Vec<Column> {
        (0..count)
            .map(|index| Column::primary(format!("col {}", index)))
            .collect()
    }

    fn cover_names<S>(dlx: Dlx<&'static str>, selector: S)
            -> Vec<Vec<&'static str>>
    where
        S: ColumnSelector
    {
        let mut covers = dlx.solve(selector);
        let mut names = Vec::new();

        while let Some(cover) = covers.next() {
            let mut cover: Vec<&str> = cover.into_iter()
                .map(|row| *covers.meta(row))
                .collect();
            cover.sort();
            names.push(cover);
        }

        names
    }

    #[test]
    fn empty_instance_has_single_empty_cover() {
        let dlx: Dlx<()> = Dlx::new(Vec::new());
        let covers: Vec<_> = dlx.solve(SmallestColumnSelector).collect();

        assert_eq!(vec![Vec::<RowHandle>::new()], covers);
    }

    #[test]
    fn uncoverable_column_yields_no_cover() {
        let mut dlx = Dlx::new(columns(2));
        dlx.append_row(&[0], "left only").unwrap();

        let covers: Vec<_> = dlx.solve(SmallestColumnSelector).collect();

        assert!(covers.is_empty());
    }

    #[test]
    fn single_cover_is_found() {
        let mut dlx = Dlx::new(columns(3));
        dlx.append_row(&[0, 1], "ab").unwrap();
        dlx.append_row(&[1, 2], "bc").unwrap();
        dlx.append_row(&[2], "c").unwrap();

        assert_eq!(vec![vec!["ab", "c"]],
            cover_names(dlx, SmallestColumnSelector));
    }

    #[test]
    fn knuth_example_has_unique_cover() {
        let mut dlx = Dlx::new(columns(7));
        dlx.append_row(&[2, 4, 5], "row 1").unwrap();
        dlx.append_row(&[0, 3, 6], "row 2").unwrap();
        dlx.append_row(&[1, 2, 5], "row 3").unwrap();
        dlx.append_row(&[0, 3], "row 4").unwrap();
        dlx.append_row(&[1, 6], "row 5").unwrap();
        dlx.append_row(&[3, 4, 6], "row 6").unwrap();

        assert_eq!(vec![vec!["row 1", "row 4", "row 5"]],
            cover_names(dlx, SmallestColumnSelector));
    }

    #[test]
    fn all_covers_are_enumerated() {
        let mut dlx = Dlx::new(columns(2));
        dlx.append_row(&[0], "a0").unwrap();
        dlx.append_row(&[1], "a1").unwrap();
        dlx.append_row(&[0, 1], "b").unwrap();

        let mut names = cover_names(dlx, SmallestColumnSelector);
        names.sort();

        assert_eq!(vec![vec!["a0", "a1"], vec!["b"]], names);
    }

    #[test]
    fn pinning_restricts_covers() {
        let mut dlx = Dlx::new(columns(2));
        let a0 = dlx.append_row(&[0], "a0").unwrap();
        dlx.append_row(&[1], "a1").unwrap();
        dlx.append_row(&[0, 1], "b").unwrap();

        assert_eq!(Ok(true), dlx.pin_row(a0));

        let covers: Vec<_> = dlx.solve(SmallestColumnSelector).collect();

        assert_eq!(1, covers.len());
        assert_eq!(2, covers[0].len());
        assert!(covers[0].contains(&a0));
    }

    #[test]
    fn conflicting_pin_makes_instance_infeasible() {
        let mut dlx = Dlx::new(columns(2));
        let a = dlx.append_row(&[0, 1], "a").unwrap();
        let b = dlx.append_row(&[0], "b").unwrap();

        assert_eq!(Ok(true), dlx.pin_row(a));
        assert_eq!(Ok(false), dlx.pin_row(b));

        let covers: Vec<_> = dlx.solve(SmallestColumnSelector).collect();

        assert!(covers.is_empty());
    }

    #[test]
    fn pins_covering_everything_yield_one_cover() {
        let mut dlx = Dlx::new(columns(2));
        let a = dlx.append_row(&[0], "a").unwrap();
        let b = dlx.append_row(&[1], "b").unwrap();

        assert_eq!(Ok(true), dlx.pin_row(a));
        assert_eq!(Ok(true), dlx.pin_row(b));

        let covers: Vec<_> = dlx.solve(SmallestColumnSelector).collect();

        assert_eq!(1, covers.len());
        assert!(covers[0].contains(&a));
        assert!(covers[0].contains(&b));
    }

    #[test]
    fn secondary_column_may_stay_uncovered() {
        let mut dlx = Dlx::new(vec![
            Column::primary("p"),
            Column::secondary("s")
        ]);
        let p = dlx.append_row(&[0], "p").unwrap();

        let covers: Vec<_> = dlx.solve(SmallestColumnSelector).collect();

        assert_eq!(vec![vec![p]], covers);
    }

    #[test]
    fn secondary_column_covered_at_most_once() {
        let mut dlx = Dlx::new(vec![
            Column::primary("p"),
            Column::primary("q"),
            Column::secondary("s")
        ]);
        dlx.append_row(&[0, 2], "ps").unwrap();
        dlx.append_row(&[1, 2], "qs").unwrap();
        dlx.append_row(&[1], "q").unwrap();

        assert_eq!(vec![vec!["ps", "q"]],
            cover_names(dlx, SmallestColumnSelector));
    }

    #[test]
    fn enumeration_is_deterministic() {
        let build = || {
            let mut dlx = Dlx::new(columns(4));
            dlx.append_row(&[0, 1], "a").unwrap();
            dlx.append_row(&[2, 3], "b").unwrap();
            dlx.append_row(&[0, 2], "c").unwrap();
            dlx.append_row(&[1, 3], "d").unwrap();
            dlx.append_row(&[0, 1, 2, 3], "e").unwrap();
            dlx
        };

        let first: Vec<_> = build().solve(SmallestColumnSelector).collect();
        let second: Vec<_> = build().solve(SmallestColumnSelector).collect();

        assert_eq!(first, second);
        assert_eq!(3, first.len());
    }

    #[test]
    fn closure_serves_as_selector() {
        let mut dlx = Dlx::new(columns(2));
        let a = dlx.append_row(&[0], "a").unwrap();
        let b = dlx.append_row(&[1], "b").unwrap();

        // branch on the highest active column index instead of the
        // scarcest column
        let covers: Vec<_> = dlx
            .solve(|columns: ActiveColumns<'_>|
                columns.map(|(column, _)| column).max())
            .collect();

        assert_eq!(1, covers.len());
        let mut cover = covers.into_iter().next().unwrap();
        cover.sort();
        assert_eq!(vec![a, b], cover);
    }

    #[test]
    fn selector_answers_outside_the_active_columns_are_dead_ends() {
        let build = || {
            let mut dlx = Dlx::new(vec![
                Column::primary("p"),
                Column::secondary("s")
            ]);
            dlx.append_row(&[0, 1], "ps").unwrap();
            dlx
        };

        // neither an out-of-range index nor a secondary column is offered,
        // so both answers must end the search without a cover
        assert_eq!(0, build().solve(|_: ActiveColumns<'_>| Some(7)).count());
        assert_eq!(0, build().solve(|_: ActiveColumns<'_>| Some(1)).count());
    }

    #[test]
    fn selector_repeating_a_covered_column_is_a_dead_end() {
        let mut dlx = Dlx::new(columns(2));
        dlx.append_row(&[0], "a").unwrap();
        dlx.append_row(&[1], "b").unwrap();

        // column 0 is covered after the first branch, so insisting on it
        // leaves only backtracking
        let covers: Vec<_> = dlx
            .solve(|_: ActiveColumns<'_>| Some(0))
            .collect();

        assert!(covers.is_empty());
    }

    #[test]
    fn smallest_column_selector_prefers_first_minimum() {
        let mut dlx: Dlx<()> = Dlx::new(columns(3));
        dlx.append_row(&[0], ()).unwrap();
        dlx.append_row(&[0], ()).unwrap();
        dlx.append_row(&[1], ()).unwrap();
        dlx.append_row(&[2], ()).unwrap();

        let selected = SmallestColumnSelector
            .select(dlx.active_columns());

        assert_eq!(Some(1), selected);
    }

    #[test]
    fn out_of_bounds_coverage_is_rejected() {
        let mut dlx = Dlx::new(columns(2));

        assert_eq!(Err(DlxError::ColumnOutOfBounds),
            dlx.append_row(&[2], "beyond"));
        assert_eq!(0, dlx.row_count());
    }

    #[test]
    fn foreign_row_handle_is_rejected() {
        let mut dlx = Dlx::new(columns(1));
        dlx.append_row(&[0], "only").unwrap();

        assert_eq!(Err(DlxError::RowOutOfBounds),
            dlx.row_meta(RowHandle(1)));
        assert_eq!(Err(DlxError::RowOutOfBounds),
            dlx.pin_row(RowHandle(7)));
    }

    #[test]
    fn column_accessors_report_descriptors() {
        let dlx: Dlx<()> = Dlx::new(vec![
            Column::primary("first"),
            Column::secondary("second")
        ]);

        assert_eq!(2, dlx.column_count());
        assert_eq!("first", dlx.column(0).unwrap().label());
        assert!(dlx.column(0).unwrap().is_primary());
        assert!(!dlx.column(1).unwrap().is_primary());
        assert_eq!(Err(DlxError::ColumnOutOfBounds), dlx.column(2));
    }

    #[test]
    fn row_metadata_is_retrievable_before_solving() {
        let mut dlx = Dlx::new(columns(2));
        let row = dlx.append_row(&[0, 1], "payload").unwrap();

        assert_eq!(Ok(&"payload"), dlx.row_meta(row));
        assert_eq!(0, row.index());
    }
}
