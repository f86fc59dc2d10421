//! Extension trait providing the itertools-flavored combinators as methods.
//!
//! Every method delegates to the free function of the same name after
//! boxing `self`, so `from_iter(..).takewhile_seq(..).pairwise_seq()` reads
//! the way a combinator chain is usually written.

use futures_core::Stream;
use futures_util::stream::StreamExt;
use std::future::Future;
use std::ops::Add;

use crate::error::SeqResult;
use crate::groupby::groupby;
use crate::seq::{
    accumulate, accumulate_with, chain, compress, cycle, dropwhile, filterfalse,
    filterfalse_default, fold, islice, materialize, materialize_into, pairwise, reduce, starmap,
    takewhile, zip_longest, zip_with, LazySeq, Splat,
};
use crate::tee::tee;
use crate::truthy::Truthy;

/// Extension trait mirroring the free combinator functions as `*_seq` methods
pub trait LazySeqExt: Stream + Sized + Unpin + Send + 'static {
    /// Yield this sequence fully, then `other`
    fn chain_seq<S>(self, other: S) -> LazySeq<Self::Item>
    where
        S: Stream<Item = Self::Item> + Send + 'static,
        Self::Item: Send + 'static,
    {
        chain(vec![self.boxed(), other.boxed()])
    }

    /// Slice by logical position; fails at call time if `step` is zero
    fn islice_seq(
        self,
        start: usize,
        stop: Option<usize>,
        step: usize,
    ) -> SeqResult<LazySeq<Self::Item>>
    where
        Self::Item: Send + 'static,
    {
        islice(self.boxed(), start, stop, step)
    }

    /// Keep elements whose paired selector is truthy
    fn compress_seq<S>(self, selectors: S) -> LazySeq<Self::Item>
    where
        S: Stream + Send + 'static,
        S::Item: Truthy + Send + 'static,
        Self::Item: Send + 'static,
    {
        compress(self.boxed(), selectors.boxed())
    }

    /// Yield the elements for which the predicate is false
    fn filterfalse_seq<F>(self, predicate: F) -> LazySeq<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool + Send + 'static,
        Self::Item: Send + 'static,
    {
        filterfalse(self.boxed(), predicate)
    }

    /// Keep the inherently falsy elements
    fn filterfalse_default_seq(self) -> LazySeq<Self::Item>
    where
        Self::Item: Truthy + Send + 'static,
    {
        filterfalse_default(self.boxed())
    }

    /// Yield elements until the predicate first fails
    fn takewhile_seq<F>(self, predicate: F) -> LazySeq<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool + Send + 'static,
        Self::Item: Send + 'static,
    {
        takewhile(self.boxed(), predicate)
    }

    /// Discard elements while the predicate holds, then yield the rest
    fn dropwhile_seq<F>(self, predicate: F) -> LazySeq<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool + Send + 'static,
        Self::Item: Send + 'static,
    {
        dropwhile(self.boxed(), predicate)
    }

    /// Running sum
    fn accumulate_seq(self) -> LazySeq<Self::Item>
    where
        Self::Item: Add<Output = Self::Item> + Clone + Send + 'static,
    {
        accumulate(self.boxed())
    }

    /// Running fold with an explicit combining function
    fn accumulate_with_seq<F>(self, f: F) -> LazySeq<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item + Send + 'static,
        Self::Item: Clone + Send + 'static,
    {
        accumulate_with(self.boxed(), f)
    }

    /// Consecutive overlapping pairs
    fn pairwise_seq(self) -> LazySeq<(Self::Item, Self::Item)>
    where
        Self::Item: Clone + Send + 'static,
    {
        pairwise(self.boxed())
    }

    /// Map a function over tuples, spreading each into its arguments
    fn starmap_seq<F>(self, f: F) -> LazySeq<<Self::Item as Splat<F>>::Output>
    where
        Self::Item: Splat<F> + Send + 'static,
        <Self::Item as Splat<F>>::Output: Send + 'static,
        F: Send + 'static,
    {
        starmap(self.boxed(), f)
    }

    /// Combine with another sequence element-by-element, shortest wins
    fn zip_with_seq<S, B, O, F>(self, other: S, f: F) -> LazySeq<O>
    where
        S: Stream<Item = B> + Send + 'static,
        F: FnMut(Self::Item, B) -> O + Send + 'static,
        Self::Item: Send + 'static,
        B: Send + 'static,
        O: Send + 'static,
    {
        zip_with(self.boxed(), other.boxed(), f)
    }

    /// Zip with another sequence into rows, padding the shorter with `fill`
    fn zip_longest_seq<S>(self, other: S, fill: Self::Item) -> LazySeq<Vec<Self::Item>>
    where
        S: Stream<Item = Self::Item> + Send + 'static,
        Self::Item: Clone + Send + 'static,
    {
        zip_longest(fill, vec![self.boxed(), other.boxed()])
    }

    /// Cycle through this sequence indefinitely
    fn cycle_seq(self) -> LazySeq<Self::Item>
    where
        Self::Item: Clone + Send + 'static,
    {
        cycle(self.boxed())
    }

    /// Fan out into `n` independent branches
    fn tee_seq(self, n: usize) -> Vec<LazySeq<Self::Item>>
    where
        Self::Item: Clone + Send + 'static,
    {
        tee(self.boxed(), n)
    }

    /// Group consecutive elements that share a key
    fn groupby_seq<K, F>(self, keyf: F) -> LazySeq<(K, LazySeq<Self::Item>)>
    where
        K: PartialEq + Clone + Send + 'static,
        F: FnMut(&Self::Item) -> K + Send + 'static,
        Self::Item: Send + 'static,
    {
        groupby(self.boxed(), keyf)
    }

    /// Drain into a `Vec`; never returns on unbounded input
    fn materialize_seq(self) -> impl Future<Output = Vec<Self::Item>>
    where
        Self::Item: Send + 'static,
    {
        materialize(self.boxed())
    }

    /// Drain into any `Default + Extend` container
    fn materialize_into_seq<B>(self) -> impl Future<Output = B>
    where
        B: Default + Extend<Self::Item>,
        Self::Item: Send + 'static,
    {
        materialize_into(self.boxed())
    }

    /// Accumulate into a single value starting from `init`
    fn fold_seq<A, F>(self, init: A, f: F) -> impl Future<Output = A>
    where
        F: FnMut(A, Self::Item) -> A,
        Self::Item: Send + 'static,
    {
        fold(self.boxed(), init, f)
    }

    /// Combine all elements with a binary operation; empty input is an error
    fn reduce_seq<F>(self, f: F) -> impl Future<Output = SeqResult<Self::Item>>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
        Self::Item: Send + 'static,
    {
        reduce(self.boxed(), f)
    }
}

impl<S> LazySeqExt for S where S: Stream + Sized + Unpin + Send + 'static {}
