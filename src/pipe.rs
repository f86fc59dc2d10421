use crate::seq::LazySeq;
use async_stream::stream;
use futures_util::stream::StreamExt;
use std::sync::Arc;

/// A Pipe represents a reusable lazy-sequence transformation from one
/// element type to another. It's a function from LazySeq\[I\] to LazySeq\[O\].
pub struct Pipe<I, O> {
    f: Arc<dyn Fn(LazySeq<I>) -> LazySeq<O> + Send + Sync + 'static>,
}

impl<I, O> Clone for Pipe<I, O> {
    fn clone(&self) -> Self {
        Pipe {
            f: Arc::clone(&self.f),
        }
    }
}

impl<I, O> Pipe<I, O> {
    /// Create a new pipe from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(LazySeq<I>) -> LazySeq<O> + Send + Sync + 'static,
    {
        Pipe { f: Arc::new(f) }
    }

    /// Apply this pipe to a lazy sequence
    pub fn apply(&self, input: LazySeq<I>) -> LazySeq<O> {
        (self.f)(input)
    }
}

/// Create a pipe that applies the given function to each element
pub fn map<I, O, F>(f: F) -> Pipe<I, O>
where
    F: Fn(I) -> O + Send + Sync + Clone + 'static,
    I: Send + 'static,
    O: Send + 'static,
{
    Pipe::new(move |input| {
        let f = f.clone();
        input.map(move |i| f(i)).boxed()
    })
}

/// Create a pipe that keeps the elements failing the predicate
pub fn filterfalse<I, F>(predicate: F) -> Pipe<I, I>
where
    F: Fn(&I) -> bool + Send + Sync + Clone + 'static,
    I: Send + 'static,
{
    Pipe::new(move |input| {
        let predicate = predicate.clone();
        stream! {
            let mut s = input;
            while let Some(item) = s.next().await {
                if !predicate(&item) {
                    yield item;
                }
            }
        }
        .boxed()
    })
}

/// Create a pipe that yields elements until the predicate first fails
pub fn takewhile<I, F>(predicate: F) -> Pipe<I, I>
where
    F: Fn(&I) -> bool + Send + Sync + Clone + 'static,
    I: Send + 'static,
{
    Pipe::new(move |input| {
        let predicate = predicate.clone();
        crate::seq::takewhile(input, move |item| predicate(item))
    })
}

/// Compose two pipes together
pub fn compose<I, M, O>(p1: Pipe<I, M>, p2: Pipe<M, O>) -> Pipe<I, O>
where
    I: Send + 'static,
    M: Send + 'static,
    O: Send + 'static,
{
    Pipe::new(move |input| {
        let p1 = p1.clone();
        let p2 = p2.clone();
        p2.apply(p1.apply(input))
    })
}

/// Identity pipe that doesn't transform the sequence
pub fn identity<I>() -> Pipe<I, I>
where
    I: Send + 'static,
{
    Pipe::new(|input| input)
}

/// Extension trait for pipes
pub trait PipeExt<I, O> {
    /// Compose this pipe with another pipe
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: Send + 'static;
}

impl<I, O> PipeExt<I, O> for Pipe<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: Send + 'static,
    {
        compose(self, other)
    }
}
