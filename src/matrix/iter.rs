//! Forward iteration over the stored elements of a [`SparseMatrix`]
//!
//! Two flavours are provided:
//!
//! - [`Iter`] and [`IterMut`] are ordinary Rust iterators, also reachable
//!   through `for element in &matrix` / `&mut matrix`.
//! - [`Cursor`] and [`CursorMut`] are begin/end style cursors that compare by
//!   node identity. A `CursorMut` converts into a `Cursor`, never the reverse.
//!
//! Both walk the sequence in row-major order. Positions are read-only through
//! either flavour; only values can be written through the mutable ones.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::matrix::element::{Element, Node, NodeId};
use crate::matrix::SparseMatrix;

/// Iterator over `&Element<T>` in sequence order
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    next: Option<NodeId>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Element<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.next?];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over `&mut Element<T>` in sequence order
pub struct IterMut<'a, T> {
    nodes: *mut Node<T>,
    next: Option<NodeId>,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut Element<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        // SAFETY: `nodes` comes from a slice mutably borrowed for 'a and `id`
        // is a link inside it. The sequence is acyclic and visits each node
        // once, so no two returned references alias.
        let node = unsafe { &mut *self.nodes.add(id) };
        self.next = node.next;
        self.remaining -= 1;
        Some(&mut node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Read-only cursor into the sequence of a matrix
///
/// The end cursor holds no node and compares equal to every other end cursor.
pub struct Cursor<'a, T> {
    nodes: &'a [Node<T>],
    current: Option<NodeId>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    /// Element under the cursor, `None` at the end
    pub fn get(&self) -> Option<&'a Element<T>> {
        let nodes = self.nodes;
        self.current.map(|id| &nodes[id].element)
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves to the next element (pre-increment). Stays put at the end.
    pub fn move_next(&mut self) -> &mut Self {
        if let Some(id) = self.current {
            self.current = self.nodes[id].next;
        }
        self
    }

    /// Moves to the next element and returns the cursor's previous position
    /// (post-increment)
    pub fn advance(&mut self) -> Self {
        let previous = *self;
        self.move_next();
        previous
    }
}

/// Cursor that can also write the value of the element under it
pub struct CursorMut<'a, T> {
    nodes: &'a mut [Node<T>],
    current: Option<NodeId>,
}

impl<'a, T> CursorMut<'a, T> {
    pub fn get(&self) -> Option<&Element<T>> {
        self.current.map(|id| &self.nodes[id].element)
    }

    pub fn get_mut(&mut self) -> Option<&mut Element<T>> {
        match self.current {
            Some(id) => Some(&mut self.nodes[id].element),
            None => None,
        }
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves to the next element (pre-increment). Stays put at the end.
    pub fn move_next(&mut self) -> &mut Self {
        if let Some(id) = self.current {
            self.current = self.nodes[id].next;
        }
        self
    }

    /// Read-only view of this cursor at the same position
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            nodes: &*self.nodes,
            current: self.current,
        }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor {
            nodes: cursor.nodes,
            current: cursor.current,
        }
    }
}

/// Node identity: the same node of the same arena, or both at the end
fn same_node<T>(a: &[Node<T>], a_id: Option<NodeId>, b: &[Node<T>], b_id: Option<NodeId>) -> bool {
    match (a_id, b_id) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y && std::ptr::eq(a.as_ptr(), b.as_ptr()),
        _ => false,
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_node(&*self.nodes, self.current, &*other.nodes, other.current)
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialEq<CursorMut<'_, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        same_node(&*self.nodes, self.current, &*other.nodes, other.current)
    }
}

impl<T> PartialEq<Cursor<'_, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        same_node(&*self.nodes, self.current, &*other.nodes, other.current)
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_node(&*self.nodes, self.current, &*other.nodes, other.current)
    }
}

impl<T> SparseMatrix<T> {
    /// Iterates stored elements in row-major order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
            next: self.head(),
            remaining: self.size(),
        }
    }

    /// Iterates stored elements in row-major order, allowing their values to change
    ///
    /// Writing a value equal to the default through this iterator is allowed
    /// and keeps the element stored.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let next = self.head();
        let remaining = self.size();
        IterMut {
            nodes: self.nodes_mut().as_mut_ptr(),
            next,
            remaining,
            _marker: PhantomData,
        }
    }

    /// Positions of the stored elements, in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().map(Element::position)
    }

    /// Cursor at the first stored element
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor {
            nodes: self.nodes(),
            current: self.head(),
        }
    }

    /// Cursor one past the last stored element
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor {
            nodes: self.nodes(),
            current: None,
        }
    }

    /// Mutable cursor at the first stored element
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.head();
        CursorMut {
            nodes: self.nodes_mut(),
            current,
        }
    }
}

impl<'a, T> IntoIterator for &'a SparseMatrix<T> {
    type Item = &'a Element<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SparseMatrix<T> {
    type Item = &'a mut Element<T>;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseMatrix<i32> {
        let mut m = SparseMatrix::new(3, 2, 999);
        m.add(2, 2, 5);
        m.add(1, 2, 2);
        m.add(3, 1, 7);
        m
    }

    #[test]
    fn test_iter_order_and_len() {
        let m = sample();
        let iter = m.iter();
        assert_eq!(iter.len(), 3);

        let positions: Vec<_> = m.positions().collect();
        assert_eq!(positions, vec![(1, 2), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_iter_mut_updates_values() {
        let mut m = sample();
        for element in &mut m {
            *element.value_mut() += 100;
        }

        let values: Vec<_> = m.iter().map(|e| *e.value()).collect();
        assert_eq!(values, vec![102, 105, 107]);
        assert_eq!(m.size(), 3);
    }

    #[test]
    fn test_cursor_walk_matches_iter() {
        let m = sample();
        let mut cursor = m.begin();
        let end = m.end();
        let mut seen = Vec::new();

        while cursor != end {
            seen.push(cursor.get().map(Element::position));
            cursor.move_next();
        }

        assert_eq!(seen, vec![Some((1, 2)), Some((2, 2)), Some((3, 1))]);
        assert!(cursor.is_end());
        assert!(cursor.get().is_none());

        // Moving past the end is a no-op
        cursor.move_next();
        assert!(cursor.is_end());
    }

    #[test]
    fn test_post_increment_returns_previous() {
        let m = sample();
        let mut cursor = m.begin();

        let previous = cursor.advance();

        assert!(previous == m.begin());
        assert_eq!(cursor.get().map(Element::position), Some((2, 2)));
    }

    #[test]
    fn test_empty_matrix_begin_is_end() {
        let m: SparseMatrix<u8> = SparseMatrix::new(2, 2, 0);
        assert!(m.begin() == m.end());
        assert_eq!(m.iter().count(), 0);
    }
}
