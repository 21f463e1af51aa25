//! Stored elements and the internal storage nodes that link them

use std::cmp::Ordering;

/// A stored cell of a [`SparseMatrix`](crate::SparseMatrix)
///
/// The position is fixed when the element is created. Only the value can be
/// changed afterwards, through a mutable borrow handed out by
/// [`IterMut`](crate::matrix::IterMut) or [`CursorMut`](crate::matrix::CursorMut).
#[derive(Debug, Clone, PartialEq)]
pub struct Element<T> {
    row: usize,
    col: usize,
    value: T,
}

impl<T> Element<T> {
    pub(crate) fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Row of this element (1-based)
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of this element (1-based)
    pub fn col(&self) -> usize {
        self.col
    }

    /// Position as a `(row, col)` pair
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the value, returning the old one
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Row-major comparison of this element's position against `(row, col)`
    pub(crate) fn cmp_position(&self, row: usize, col: usize) -> Ordering {
        (self.row, self.col).cmp(&(row, col))
    }
}

/// Index of a node inside the owning matrix's arena
pub(crate) type NodeId = usize;

/// Arena slot wrapping one element and its links in the ordered sequence
///
/// Nodes are only ever appended to the arena, so a `NodeId` stays valid for
/// the lifetime of the matrix that created it.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) element: Element<T>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn detached(row: usize, col: usize, value: T) -> Self {
        Self {
            element: Element::new(row, col, value),
            prev: None,
            next: None,
        }
    }
}
