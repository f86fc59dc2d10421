//! LazySeq - lazy, pull-based sequence composition
//!
//! This module provides the core sequence type together with the
//! Python-itertools-flavored combinator set: source adapters, finite
//! combinators, infinite generators, and the materializers that drain a
//! lazy sequence back into concrete storage.

use async_stream::stream;
use futures::future::join;
use futures_util::pin_mut;
use futures_util::stream::{self, StreamExt};
use std::ops::Add;

use crate::error::{SeqError, SeqResult};
use crate::truthy::Truthy;

/// A boxed, heap-allocated lazy sequence over elements of type `O`.
///
/// A `LazySeq` is single-pass: it is driven by whoever currently owns it,
/// and passing it into a combinator transfers that drive-ownership. Every
/// sequence produced by this crate keeps reporting exhaustion once it has
/// finished; none of them error or restart on a pull past the end.
pub type LazySeq<O> = futures_util::stream::BoxStream<'static, O>;

// ================================
// Source Adapters
// ================================

/// Emit a single element as a lazy sequence
pub fn emit<O>(item: O) -> LazySeq<O>
where
    O: Send + 'static,
{
    stream::once(futures_util::future::ready(item)).boxed()
}

/// Create an empty lazy sequence that completes immediately
pub fn empty<O>() -> LazySeq<O>
where
    O: Send + 'static,
{
    stream::empty().boxed()
}

/// Adapt a finite ordered collection into a lazy sequence
///
/// Elements are yielded in the collection's original order; the sequence
/// terminates after the last one.
pub fn from_iter<I, O>(iter: I) -> LazySeq<O>
where
    I: IntoIterator<Item = O> + Send + 'static,
    <I as IntoIterator>::IntoIter: Send,
    O: Send + 'static,
{
    stream::iter(iter).boxed()
}

/// Generate a lazy sequence from a seed value and a step function
///
/// The function produces an element and the next state; the sequence ends
/// when it returns `None`.
pub fn unfold<S, O, F>(init: S, mut f: F) -> LazySeq<O>
where
    S: Send + 'static,
    O: Send + 'static,
    F: FnMut(S) -> Option<(O, S)> + Send + 'static,
{
    stream! {
        let mut state = init;
        while let Some((item, next_state)) = f(state) {
            yield item;
            state = next_state;
        }
    }
    .boxed()
}

// ================================
// Infinite Generators
// ================================

/// Unbounded arithmetic progression: `start`, `start + step`, ...
///
/// Produced incrementally with O(1) state, so it composes safely with
/// [`islice`], which is also the only safe way to bound it.
///
/// # Examples
/// ```
/// use lazyseq::seq::*;
///
/// # async fn example() {
/// let result = materialize(islice(count(0, 1), 0, Some(5), 1).unwrap()).await;
/// assert_eq!(result, vec![0, 1, 2, 3, 4]);
/// # }
/// ```
pub fn count<O>(start: O, step: O) -> LazySeq<O>
where
    O: Add<Output = O> + Clone + Send + 'static,
{
    stream! {
        let mut current = start;
        loop {
            let next = current.clone() + step.clone();
            yield std::mem::replace(&mut current, next);
        }
    }
    .boxed()
}

/// Repeat a value indefinitely
pub fn repeat<O>(item: O) -> LazySeq<O>
where
    O: Clone + Send + 'static,
{
    stream::repeat(item).boxed()
}

/// Repeat a value exactly `times` times
pub fn repeat_n<O>(item: O, times: usize) -> LazySeq<O>
where
    O: Clone + Send + 'static,
{
    stream! {
        for _ in 0..times {
            yield item.clone();
        }
    }
    .boxed()
}

/// Cycle through a sequence indefinitely
///
/// The first pass buffers every element as it is pulled, since the source
/// is single-pass and may not be re-creatable; once the source is exhausted
/// the buffer is replayed forever. An empty source produces an
/// immediately-exhausted sequence, never an infinite loop.
pub fn cycle<O>(s: LazySeq<O>) -> LazySeq<O>
where
    O: Clone + Send + 'static,
{
    stream! {
        let mut seen: Vec<O> = Vec::new();
        pin_mut!(s);
        while let Some(item) = s.next().await {
            seen.push(item.clone());
            yield item;
        }
        if !seen.is_empty() {
            log::trace!("cycle: source exhausted, replaying {} buffered elements", seen.len());
            loop {
                for i in 0..seen.len() {
                    yield seen[i].clone();
                }
            }
        }
    }
    .boxed()
}

// ================================
// Finite Combinators
// ================================

/// Concatenate sequences, yielding each one fully before touching the next
///
/// Lazy in both dimensions: no sequence is pulled until its predecessor is
/// exhausted.
///
/// # Examples
/// ```
/// use lazyseq::seq::*;
///
/// # async fn example() {
/// let joined = chain(vec![from_iter(vec![1, 2]), from_iter(vec![3])]);
/// assert_eq!(materialize(joined).await, vec![1, 2, 3]);
/// # }
/// ```
pub fn chain<O>(seqs: Vec<LazySeq<O>>) -> LazySeq<O>
where
    O: Send + 'static,
{
    stream! {
        for s in seqs {
            pin_mut!(s);
            while let Some(item) = s.next().await {
                yield item;
            }
        }
    }
    .boxed()
}

/// Slice a sequence by logical position
///
/// Discards the first `start` elements, then yields every `step`-th element
/// until the logical position reaches `stop` (exclusive) or the source is
/// exhausted, whichever comes first. `stop = None` means unbounded, leaving
/// source exhaustion as the only terminator. A `step` of zero is a
/// configuration error and fails here, at call time, not at the first pull.
pub fn islice<O>(
    s: LazySeq<O>,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> SeqResult<LazySeq<O>>
where
    O: Send + 'static,
{
    if step < 1 {
        return Err(SeqError::ZeroStep);
    }
    Ok(stream! {
        pin_mut!(s);
        let mut position = 0usize;
        let mut next_yield = start;
        loop {
            if let Some(limit) = stop {
                if next_yield >= limit {
                    break;
                }
            }
            match s.next().await {
                Some(item) => {
                    if position == next_yield {
                        yield item;
                        next_yield += step;
                    }
                    position += 1;
                }
                None => break,
            }
        }
    }
    .boxed())
}

/// Keep the data elements whose paired selector is truthy
///
/// Pulls one element from each input per step and stops as soon as either
/// is exhausted; the shorter input wins and nothing is padded.
pub fn compress<O, S>(data: LazySeq<O>, selectors: LazySeq<S>) -> LazySeq<O>
where
    O: Send + 'static,
    S: Truthy + Send + 'static,
{
    stream! {
        pin_mut!(data);
        pin_mut!(selectors);
        loop {
            match join(data.next(), selectors.next()).await {
                (Some(item), Some(selector)) => {
                    if selector.truthy() {
                        yield item;
                    }
                }
                _ => break,
            }
        }
    }
    .boxed()
}

/// Yield the elements for which the predicate is false
pub fn filterfalse<O, F>(s: LazySeq<O>, mut predicate: F) -> LazySeq<O>
where
    O: Send + 'static,
    F: FnMut(&O) -> bool + Send + 'static,
{
    stream! {
        pin_mut!(s);
        while let Some(item) = s.next().await {
            if !predicate(&item) {
                yield item;
            }
        }
    }
    .boxed()
}

/// The null-predicate form of [`filterfalse`]
///
/// Tests the inherent truthiness of each element and keeps the falsy ones:
/// numeric zero, empty text, `false`, and `None`.
pub fn filterfalse_default<O>(s: LazySeq<O>) -> LazySeq<O>
where
    O: Truthy + Send + 'static,
{
    filterfalse(s, |item| item.truthy())
}

/// Yield elements until the predicate first fails, then stop permanently
///
/// Later elements for which the predicate would hold are never reached.
pub fn takewhile<O, F>(s: LazySeq<O>, mut predicate: F) -> LazySeq<O>
where
    O: Send + 'static,
    F: FnMut(&O) -> bool + Send + 'static,
{
    stream! {
        pin_mut!(s);
        while let Some(item) = s.next().await {
            if predicate(&item) {
                yield item;
            } else {
                break;
            }
        }
    }
    .boxed()
}

/// Discard elements while the predicate holds, then yield the rest
///
/// The first element failing the predicate is yielded too, and the
/// predicate is never consulted again afterwards.
pub fn dropwhile<O, F>(s: LazySeq<O>, mut predicate: F) -> LazySeq<O>
where
    O: Send + 'static,
    F: FnMut(&O) -> bool + Send + 'static,
{
    stream! {
        pin_mut!(s);
        let mut found_false = false;
        while let Some(item) = s.next().await {
            if !found_false && predicate(&item) {
                continue;
            }
            found_false = true;
            yield item;
        }
    }
    .boxed()
}

/// Running fold with an explicit combining function
///
/// The first output equals the first input unchanged; each subsequent
/// output is `f(previous_output, next_input)`. Empty sources produce an
/// empty sequence.
pub fn accumulate_with<O, F>(s: LazySeq<O>, mut f: F) -> LazySeq<O>
where
    O: Clone + Send + 'static,
    F: FnMut(O, O) -> O + Send + 'static,
{
    stream! {
        pin_mut!(s);
        if let Some(first) = s.next().await {
            let mut acc = first;
            yield acc.clone();
            while let Some(item) = s.next().await {
                acc = f(acc, item);
                yield acc.clone();
            }
        }
    }
    .boxed()
}

/// Running sum: [`accumulate_with`] specialised to addition
pub fn accumulate<O>(s: LazySeq<O>) -> LazySeq<O>
where
    O: Add<Output = O> + Clone + Send + 'static,
{
    accumulate_with(s, |acc, item| acc + item)
}

/// Yield consecutive overlapping pairs
///
/// A sequence of length `n` produces `n - 1` pairs; sequences shorter than
/// two elements produce nothing.
pub fn pairwise<O>(s: LazySeq<O>) -> LazySeq<(O, O)>
where
    O: Clone + Send + 'static,
{
    stream! {
        pin_mut!(s);
        if let Some(first) = s.next().await {
            let mut prev = first;
            while let Some(item) = s.next().await {
                yield (std::mem::replace(&mut prev, item.clone()), item);
            }
        }
    }
    .boxed()
}

/// Spreads the elements of a tuple into a function's argument positions.
///
/// This is the seam [`starmap`] maps through; it is implemented for 2-, 3-
/// and 4-tuples.
pub trait Splat<F> {
    type Output;
    fn splat(self, f: &mut F) -> Self::Output;
}

impl<A, B, U, F> Splat<F> for (A, B)
where
    F: FnMut(A, B) -> U,
{
    type Output = U;
    fn splat(self, f: &mut F) -> U {
        f(self.0, self.1)
    }
}

impl<A, B, C, U, F> Splat<F> for (A, B, C)
where
    F: FnMut(A, B, C) -> U,
{
    type Output = U;
    fn splat(self, f: &mut F) -> U {
        f(self.0, self.1, self.2)
    }
}

impl<A, B, C, D, U, F> Splat<F> for (A, B, C, D)
where
    F: FnMut(A, B, C, D) -> U,
{
    type Output = U;
    fn splat(self, f: &mut F) -> U {
        f(self.0, self.1, self.2, self.3)
    }
}

/// Map a function over a sequence of tuples, spreading each tuple into the
/// function's arguments
pub fn starmap<T, F>(s: LazySeq<T>, mut f: F) -> LazySeq<T::Output>
where
    T: Splat<F> + Send + 'static,
    T::Output: Send + 'static,
    F: Send + 'static,
{
    stream! {
        pin_mut!(s);
        while let Some(tuple) = s.next().await {
            yield tuple.splat(&mut f);
        }
    }
    .boxed()
}

/// Combine two sequences element-by-element with a function, stopping as
/// soon as either input is exhausted
pub fn zip_with<A, B, O, F>(s1: LazySeq<A>, s2: LazySeq<B>, mut f: F) -> LazySeq<O>
where
    A: Send + 'static,
    B: Send + 'static,
    O: Send + 'static,
    F: FnMut(A, B) -> O + Send + 'static,
{
    stream! {
        pin_mut!(s1);
        pin_mut!(s2);
        loop {
            match join(s1.next(), s2.next()).await {
                (Some(a), Some(b)) => yield f(a, b),
                _ => break,
            }
        }
    }
    .boxed()
}

/// Zip sequences into rows, padding exhausted inputs with `fill`
///
/// One element is pulled from every still-live input per row. Once an input
/// is exhausted its slot carries `fill` in all subsequent rows; the output
/// ends only when every input is exhausted.
///
/// # Examples
/// ```
/// use lazyseq::seq::*;
///
/// # async fn example() {
/// let rows = zip_longest("-", vec![from_iter(vec!["1", "2", "3"]), from_iter(vec!["a", "b"])]);
/// assert_eq!(
///     materialize(rows).await,
///     vec![vec!["1", "a"], vec!["2", "b"], vec!["3", "-"]],
/// );
/// # }
/// ```
pub fn zip_longest<O>(fill: O, seqs: Vec<LazySeq<O>>) -> LazySeq<Vec<O>>
where
    O: Clone + Send + 'static,
{
    stream! {
        let mut slots: Vec<Option<LazySeq<O>>> = seqs.into_iter().map(Some).collect();
        if !slots.is_empty() {
            loop {
                let mut row = Vec::with_capacity(slots.len());
                let mut live = 0usize;
                for slot in slots.iter_mut() {
                    match slot {
                        Some(s) => match s.next().await {
                            Some(item) => {
                                live += 1;
                                row.push(item);
                            }
                            None => {
                                *slot = None;
                                row.push(fill.clone());
                            }
                        },
                        None => row.push(fill.clone()),
                    }
                }
                if live == 0 {
                    break;
                }
                yield row;
            }
        }
    }
    .boxed()
}

// ================================
// Materializers
// ================================

/// Drain a sequence fully into a `Vec`, in pull order
///
/// Calling this on an unbounded sequence never returns; bound infinite
/// generators with [`islice`] first.
pub async fn materialize<O>(s: LazySeq<O>) -> Vec<O> {
    s.collect::<Vec<_>>().await
}

/// Drain a sequence into any container a collaborator supplies
///
/// The same caller hazard as [`materialize`] applies to unbounded input.
pub async fn materialize_into<O, B>(s: LazySeq<O>) -> B
where
    B: Default + Extend<O>,
{
    s.collect::<B>().await
}

/// Accumulate a sequence into a single value starting from `init`
pub async fn fold<O, A, F>(s: LazySeq<O>, init: A, mut f: F) -> A
where
    F: FnMut(A, O) -> A,
{
    pin_mut!(s);
    let mut acc = init;
    while let Some(item) = s.next().await {
        acc = f(acc, item);
    }
    acc
}

/// Combine all elements with a binary operation, seeded by the first element
///
/// An empty sequence is an error here: there is no first element to seed
/// the reduction with.
pub async fn reduce<O, F>(s: LazySeq<O>, mut f: F) -> SeqResult<O>
where
    F: FnMut(O, O) -> O,
{
    pin_mut!(s);
    let mut acc = match s.next().await {
        Some(first) => first,
        None => return Err(SeqError::EmptyInput),
    };
    while let Some(item) = s.next().await {
        acc = f(acc, item);
    }
    Ok(acc)
}
