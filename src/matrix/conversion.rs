//! Copying, assignment and element-type conversion between sparse matrices
//!
//! Every path builds a brand new node sequence by walking the source in order
//! and storing each element through the regular insertion routine. Nothing is
//! shared between source and destination. The fallible variants drop the
//! partially built matrix before returning the error, so a failed copy leaves
//! no trace.
//!
//! Copies reproduce the source sequence verbatim: an element whose value has
//! come to equal the default (see [`SparseMatrix::set_default`]) is copied as
//! a stored element.

use num_traits::AsPrimitive;
use tracing::debug;

use crate::error::Result;
use crate::matrix::SparseMatrix;

impl<T> SparseMatrix<T> {
    /// Builds a matrix of the same shape whose default and stored values are
    /// `f` applied to those of `other`
    pub fn try_map_from<Q, F>(other: &SparseMatrix<Q>, mut f: F) -> Result<Self>
    where
        F: FnMut(&Q) -> T,
    {
        let mut matrix = SparseMatrix::new(other.rows(), other.cols(), f(other.default_value()));

        for element in other.iter() {
            // On error `matrix` is dropped here, releasing every node built so far
            matrix.try_store(element.row(), element.col(), f(element.value()))?;
        }

        debug!(size = matrix.size(), "copied sparse matrix");
        Ok(matrix)
    }

    fn map_from<Q, F>(other: &SparseMatrix<Q>, mut f: F) -> Self
    where
        F: FnMut(&Q) -> T,
    {
        let mut matrix = SparseMatrix::new(other.rows(), other.cols(), f(other.default_value()));

        for element in other.iter() {
            matrix.store(element.row(), element.col(), f(element.value()));
        }

        debug!(size = matrix.size(), "copied sparse matrix");
        matrix
    }

    /// Converts a matrix of another element type through `From`
    ///
    /// ```
    /// use sparsemat::SparseMatrix;
    ///
    /// let mut ints = SparseMatrix::new(2, 2, 0i32);
    /// ints.add(1, 2, 7);
    ///
    /// let floats = SparseMatrix::<f64>::try_convert_from(&ints).unwrap();
    /// assert_eq!(floats[(1, 2)], 7.0);
    /// assert_eq!(*floats.default_value(), 0.0);
    /// ```
    pub fn try_convert_from<Q>(other: &SparseMatrix<Q>) -> Result<Self>
    where
        Q: Clone,
        T: From<Q>,
    {
        Self::try_map_from(other, |value| T::from(value.clone()))
    }

    /// Converts a numeric matrix with `as`-cast semantics, including narrowing
    /// conversions such as `f64` to `i32`
    pub fn try_cast_from<Q>(other: &SparseMatrix<Q>) -> Result<Self>
    where
        Q: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Self::try_map_from(other, |value| value.as_())
    }

    /// Infallible counterpart of [`try_cast_from`](Self::try_cast_from)
    pub fn cast_from<Q>(other: &SparseMatrix<Q>) -> Self
    where
        Q: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Self::map_from(other, |value| value.as_())
    }
}

impl<T: Clone> SparseMatrix<T> {
    /// Deep copy that reports allocation failure instead of aborting
    pub fn try_clone(&self) -> Result<Self> {
        Self::try_map_from(self, T::clone)
    }

    /// Replaces this matrix's entire state (shape, default and elements) with
    /// a copy of `other`
    ///
    /// The copy is built before anything is swapped in, so on error `self` is
    /// unchanged.
    pub fn assign_from(&mut self, other: &Self) -> Result<()> {
        let mut copy = other.try_clone()?;
        self.swap_state(&mut copy);
        Ok(())
    }
}

impl<T: Clone> Clone for SparseMatrix<T> {
    fn clone(&self) -> Self {
        Self::map_from(self, T::clone)
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_state(&mut copy);
    }
}

impl<T, Q> From<&SparseMatrix<Q>> for SparseMatrix<T>
where
    Q: Clone,
    T: From<Q>,
{
    fn from(other: &SparseMatrix<Q>) -> Self {
        Self::map_from(other, |value| T::from(value.clone()))
    }
}
