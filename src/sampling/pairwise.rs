use std::iter::FusedIterator;

/// An iterator over the adjacent pairs of an iterator.
/// Yields `(x[0], x[1])`, `(x[1], x[2])`, and so on, so an input of length `L` yields
/// `L - 1` pairs, and an input with less than two elements yields none.
#[derive(Clone, Debug)]
pub struct Pairwise<I: Iterator> {
    /// The remaining elements.
    iter: I,
    /// The element yielded as the second half of the last pair.
    prev: Option<I::Item>,
}

/// Iterates over the adjacent pairs of an iterable.
pub fn pairwise<T: IntoIterator>(iterable: T) -> Pairwise<T::IntoIter>
where
    T::Item: Clone,
{
    let mut iter = iterable.into_iter();
    let prev = iter.next();
    Pairwise { iter, prev }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self.iter.next() {
            Some(next) => next,
            None => {
                self.prev = None;
                return None;
            }
        };
        let prev = self.prev.replace(next.clone())?;
        Some((prev, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.prev.is_none() {
            return (0, Some(0));
        }
        self.iter.size_hint()
    }
}

impl<I> ExactSizeIterator for Pairwise<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> FusedIterator for Pairwise<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}
