//! Lazy sequences with deterministic resource release.
//!
//! Every enumeration in this crate returns a [`ScopedIter`], which is an
//! iterator that can be closed before exhaustion. Closing drops the underlying
//! iterator state immediately, and closing the result of a combinator such as
//! [`ScopedIter::chain`] or [`ScopedIter::flat_map`] also drops every wrapped
//! sequence. A closed sequence keeps returning [`None`].

//-----------------------------------------------------------------------------

/// A lazy sequence that can be closed early.
///
/// # Examples
///
/// ```
/// use vg_rdf::ScopedIter;
///
/// let mut iter = ScopedIter::from_vec(vec![1, 2, 3]);
/// assert_eq!(iter.next(), Some(1));
/// iter.close();
/// assert_eq!(iter.next(), None);
/// ```
pub struct ScopedIter<'a, T> {
    inner: Option<Box<dyn Iterator<Item = T> + 'a>>,
}

impl<'a, T: 'a> ScopedIter<'a, T> {
    /// Wraps the given iterator.
    pub fn new<I: Iterator<Item = T> + 'a>(iter: I) -> Self {
        ScopedIter { inner: Some(Box::new(iter)) }
    }

    /// Returns an empty sequence.
    pub fn empty() -> Self {
        ScopedIter { inner: None }
    }

    /// Returns a sequence with a single item.
    pub fn once(item: T) -> Self {
        Self::new(std::iter::once(item))
    }

    /// Returns a sequence over the items of the vector.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::new(items.into_iter())
    }

    /// Releases the underlying iterator state.
    ///
    /// Subsequent calls to [`Iterator::next`] return [`None`], and closing
    /// again has no effect.
    pub fn close(&mut self) {
        self.inner = None;
    }

    /// Returns `true` if the sequence has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Transforms each item with the given function.
    pub fn map<U: 'a, F: FnMut(T) -> U + 'a>(self, f: F) -> ScopedIter<'a, U> {
        match self.inner {
            Some(iter) => ScopedIter::new(iter.map(f)),
            None => ScopedIter::empty(),
        }
    }

    /// Keeps the items accepted by the predicate.
    pub fn filter<F: FnMut(&T) -> bool + 'a>(self, f: F) -> ScopedIter<'a, T> {
        match self.inner {
            Some(iter) => ScopedIter::new(iter.filter(f)),
            None => ScopedIter::empty(),
        }
    }

    /// Maps each item to a sequence and flattens the result.
    ///
    /// Closing the returned sequence drops the outer iterator as well as the
    /// inner sequence that is currently open.
    pub fn flat_map<U: 'a, F: FnMut(T) -> ScopedIter<'a, U> + 'a>(self, f: F) -> ScopedIter<'a, U> {
        match self.inner {
            Some(iter) => ScopedIter::new(iter.flat_map(f)),
            None => ScopedIter::empty(),
        }
    }

    /// Appends another sequence after this one.
    pub fn chain(self, other: ScopedIter<'a, T>) -> ScopedIter<'a, T> {
        match (self.inner, other.inner) {
            (Some(a), Some(b)) => ScopedIter::new(a.chain(b)),
            (Some(a), None) => ScopedIter { inner: Some(a) },
            (None, Some(b)) => ScopedIter { inner: Some(b) },
            (None, None) => ScopedIter::empty(),
        }
    }

    /// Exhausts the sequence into a vector.
    pub fn collect_vec(self) -> Vec<T> {
        match self.inner {
            Some(iter) => iter.collect(),
            None => Vec::new(),
        }
    }
}

impl<'a, T> Iterator for ScopedIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.inner.as_mut() {
            Some(iter) => {
                let item = iter.next();
                if item.is_none() {
                    self.inner = None;
                }
                item
            }
            None => None,
        }
    }
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
