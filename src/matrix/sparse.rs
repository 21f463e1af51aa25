//! Default-valued sparse matrix backed by an ordered, doubly-linked node arena

use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::ops::Index;

use tracing::{debug, trace, warn};

use crate::error::{Result, SparseMatrixError};
use crate::matrix::config::PrintConfig;
use crate::matrix::element::{Node, NodeId};

/// A sparse matrix that stores only explicitly assigned cells
///
/// Every cell that was never assigned reads as the matrix's default value.
/// Stored cells are kept in a single sequence ordered row-major by
/// `(row, col)`, so iteration never has to sort.
///
/// Rows and columns are 1-based: valid cells are `1..=rows` × `1..=cols`.
///
/// The sequence is a doubly-linked list whose nodes live in an arena owned by
/// the matrix. Nodes are never removed individually, so splicing a new node in
/// only rewires the links of its two neighbours.
pub struct SparseMatrix<T> {
    /// Number of rows, fixed at construction
    rows: usize,

    /// Number of columns, fixed at construction
    cols: usize,

    /// Value returned for every unassigned cell
    default: T,

    /// Node arena, in allocation order (not sequence order)
    nodes: Vec<Node<T>>,

    /// First node in sequence order
    head: Option<NodeId>,

    /// Last node in sequence order
    tail: Option<NodeId>,
}

impl<T> SparseMatrix<T> {
    /// Creates an empty `rows` × `cols` matrix
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize, default: T) -> Self {
        assert!(rows > 0, "matrix must have at least one row");
        assert!(cols > 0, "matrix must have at least one column");

        debug!(rows, cols, "creating sparse matrix");

        Self {
            rows,
            cols,
            default,
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Number of stored cells
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The value reported for unassigned cells
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Replaces the default value
    ///
    /// Stored cells are not revalidated: a stored value may end up equal to
    /// the new default, and it stays stored.
    pub fn set_default(&mut self, value: T) {
        self.default = value;
    }

    /// Returns the value at `(row, col)`, or the default if the cell is unassigned
    ///
    /// Lookup never stores anything, so `size()` is unaffected.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> &T {
        self.check_bounds(row, col);

        match self.find(row, col) {
            Some(id) => self.nodes[id].element.value(),
            None => &self.default,
        }
    }

    /// Whether `(row, col)` holds a stored element
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the matrix.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.check_bounds(row, col);
        self.find(row, col).is_some()
    }

    /// Renders dimensions, default and a sample of stored elements
    pub fn dump(&self, config: &PrintConfig) -> String
    where
        T: fmt::Debug,
    {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_dump(&mut out, config);
        out
    }

    pub(crate) fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node<T>] {
        &mut self.nodes
    }

    /// Stores `value` at `(row, col)` after reserving room for a new node
    ///
    /// Bounds are checked, the default is not: copy paths reproduce a source
    /// sequence verbatim, even values that have since come to equal the
    /// default. If the reservation fails nothing has been relinked yet.
    pub(crate) fn try_store(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col);

        if let Err(source) = self.nodes.try_reserve(1) {
            warn!(row, col, "allocation failed while inserting cell");
            return Err(SparseMatrixError::Allocation { row, col, source });
        }

        self.link(row, col, value);
        Ok(())
    }

    /// Infallible counterpart of [`try_store`](Self::try_store)
    pub(crate) fn store(&mut self, row: usize, col: usize, value: T) {
        self.check_bounds(row, col);
        self.nodes.reserve(1);
        self.link(row, col, value);
    }

    /// Swaps the entire state of two matrices
    pub(crate) fn swap_state(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            (1..=self.rows).contains(&row),
            "row {} out of bounds (rows = {})",
            row,
            self.rows
        );
        assert!(
            (1..=self.cols).contains(&col),
            "column {} out of bounds (cols = {})",
            col,
            self.cols
        );
    }

    fn find(&self, row: usize, col: usize) -> Option<NodeId> {
        let mut current = self.head;

        while let Some(id) = current {
            let node = &self.nodes[id];
            match node.element.cmp_position(row, col) {
                Ordering::Less => current = node.next,
                Ordering::Equal => return Some(id),
                // Sequence is sorted, nothing further can match
                Ordering::Greater => return None,
            }
        }

        None
    }

    /// Links a cell into the sequence, updating in place if the position exists
    ///
    /// Capacity for one more node must already be reserved.
    fn link(&mut self, row: usize, col: usize, value: T) {
        // Appends past the tail skip the scan, which keeps in-order copies linear
        let mut current = match self.tail {
            Some(tail) if self.nodes[tail].element.cmp_position(row, col) == Ordering::Less => None,
            _ => self.head,
        };

        while let Some(id) = current {
            match self.nodes[id].element.cmp_position(row, col) {
                Ordering::Less => current = self.nodes[id].next,
                Ordering::Equal => {
                    trace!(row, col, "updating stored cell");
                    self.nodes[id].element.set_value(value);
                    return;
                }
                Ordering::Greater => {
                    self.splice_before(id, Node::detached(row, col, value));
                    return;
                }
            }
        }

        self.push_back(Node::detached(row, col, value));
    }

    fn splice_before(&mut self, next: NodeId, mut node: Node<T>) {
        let id = self.nodes.len();
        let prev = self.nodes[next].prev;

        node.prev = prev;
        node.next = Some(next);
        self.nodes.push(node);
        self.nodes[next].prev = Some(id);

        match prev {
            Some(prev) => {
                trace!(id, "inserting cell in the middle");
                self.nodes[prev].next = Some(id);
            }
            None => {
                trace!(id, "inserting cell at head");
                self.head = Some(id);
            }
        }
    }

    fn push_back(&mut self, mut node: Node<T>) {
        let id = self.nodes.len();

        node.prev = self.tail;
        node.next = None;
        self.nodes.push(node);

        match self.tail {
            Some(tail) => {
                trace!(id, "appending cell at tail");
                self.nodes[tail].next = Some(id);
            }
            None => {
                trace!(id, "inserting first cell");
                self.head = Some(id);
            }
        }
        self.tail = Some(id);
    }

    fn write_dump(&self, out: &mut impl fmt::Write, config: &PrintConfig) -> fmt::Result
    where
        T: fmt::Debug,
    {
        writeln!(out, "SparseMatrix {{")?;
        writeln!(out, "  dimensions: {} × {}", self.rows, self.cols)?;
        writeln!(out, "  size: {}", self.size())?;
        if config.show_default {
            writeln!(out, "  default: {:?}", self.default)?;
        }

        if !self.is_empty() {
            write!(out, "  elements: ")?;
            for element in self.iter().take(config.max_elements) {
                write!(out, "({}, {}) = {:?} ", element.row(), element.col(), element.value())?;
            }
            if self.size() > config.max_elements {
                write!(out, "... ({} more)", self.size() - config.max_elements)?;
            }
            writeln!(out)?;
        }

        write!(out, "}}")
    }
}

impl<T: PartialEq> SparseMatrix<T> {
    /// Stores `value` at `(row, col)`
    ///
    /// If the cell already holds a value it is overwritten and `size()` does
    /// not change; otherwise a new element is spliced into sequence order.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the matrix or if `value` equals the
    /// current default.
    pub fn add(&mut self, row: usize, col: usize, value: T) {
        self.check_insert(row, col, &value);
        self.store(row, col, value);
    }

    /// Like [`add`](Self::add), but reports allocation failure instead of aborting
    ///
    /// On error the matrix is left exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics on the same contract violations as [`add`](Self::add).
    pub fn try_add(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_insert(row, col, &value);
        self.try_store(row, col, value)
    }

    fn check_insert(&self, row: usize, col: usize, value: &T) {
        self.check_bounds(row, col);
        assert!(
            *value != self.default,
            "cannot store the default value at ({}, {})",
            row,
            col
        );
    }
}

impl<T> Index<(usize, usize)> for SparseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

impl<T> Drop for SparseMatrix<T> {
    fn drop(&mut self) {
        debug!(
            rows = self.rows,
            cols = self.cols,
            size = self.nodes.len(),
            "dropping sparse matrix"
        );
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dump(f, &PrintConfig::default())
    }
}
