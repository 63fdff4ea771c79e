//! Sequence capability.
//!
//! The renderer only needs a length and indexed access. [`Input`] adds the
//! two things a plain reference cannot say: that the sequence is absent,
//! or that the value handed over was not a sequence at all.

use std::collections::VecDeque;

/// An ordered, finite, indexable collection, read-only while rendering.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`. Callers only ask for `index < self.len()`.
    fn at(&self, index: usize) -> &Self::Item;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> &S::Item {
        (**self).at(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> &S::Item {
        (**self).at(index)
    }
}

/// What the renderer was handed.
pub enum Input<'a, S: ?Sized> {
    /// No sequence at all (distinct from a sequence of length zero).
    Nil,
    /// A sequence, possibly empty.
    Present(&'a S),
    /// A value that is not an ordered collection.
    NotASequence,
}

impl<S: ?Sized> Clone for Input<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Input<'_, S> {}

impl<'a, S: ?Sized> From<&'a S> for Input<'a, S> {
    fn from(seq: &'a S) -> Self {
        Input::Present(seq)
    }
}

impl<'a, S: ?Sized> From<Option<&'a S>> for Input<'a, S> {
    fn from(seq: Option<&'a S>) -> Self {
        seq.map_or(Input::Nil, Input::Present)
    }
}
