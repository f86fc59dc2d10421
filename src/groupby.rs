//! groupby - consecutive-run grouping with lazy inner sequences.
//!
//! Groups **consecutive** runs of equal key only; callers wanting a global
//! grouping must pre-sort. Detecting the end of a run takes exactly one
//! element of lookahead, held in a cursor shared between the outer
//! sequence and the currently open group. Advancing the outer sequence
//! bumps an epoch counter, which invalidates the open group and silently
//! discards whatever of it was left unread. Group boundaries are defined
//! by outer-advance, not by the caller closing the inner sequence.

use std::sync::Arc;

use async_stream::stream;
use futures_util::stream::StreamExt;
use tokio::sync::Mutex;

use crate::seq::LazySeq;

/// Lookahead cursor shared between the outer sequence and its groups.
struct GroupCursor<O, K, F> {
    source: LazySeq<O>,
    keyf: F,
    /// One element of lookahead, paired with its computed key.
    current: Option<(K, O)>,
    /// Key of the group currently handed out.
    target: Option<K>,
    /// Bumped on every outer advance; a group whose epoch is stale is dead.
    epoch: u64,
    primed: bool,
}

impl<O, K, F> GroupCursor<O, K, F>
where
    F: FnMut(&O) -> K,
{
    async fn advance(&mut self) {
        self.current = match self.source.next().await {
            Some(item) => {
                let key = (self.keyf)(&item);
                Some((key, item))
            }
            None => None,
        };
    }
}

/// Group consecutive elements that share a key into `(key, group)` pairs
///
/// Each group is itself a lazy sequence, valid only until the outer
/// sequence is advanced again. Errors raised by the key function propagate
/// unmodified at the exact pull that invoked it.
///
/// # Examples
/// ```
/// use lazyseq::groupby::groupby;
/// use lazyseq::seq::*;
/// use futures_util::stream::StreamExt;
///
/// # async fn example() {
/// let words = from_iter(vec!["aaa", "aab", "bba", "bbb", "ccc"]);
/// let mut outer = groupby(words, |w| w.as_bytes()[0]);
/// let mut keys = Vec::new();
/// while let Some((key, group)) = outer.next().await {
///     keys.push((key as char, materialize(group).await));
/// }
/// assert_eq!(
///     keys,
///     vec![
///         ('a', vec!["aaa", "aab"]),
///         ('b', vec!["bba", "bbb"]),
///         ('c', vec!["ccc"]),
///     ],
/// );
/// # }
/// ```
pub fn groupby<O, K, F>(s: LazySeq<O>, keyf: F) -> LazySeq<(K, LazySeq<O>)>
where
    O: Send + 'static,
    K: PartialEq + Clone + Send + 'static,
    F: FnMut(&O) -> K + Send + 'static,
{
    let cursor = Arc::new(Mutex::new(GroupCursor {
        source: s,
        keyf,
        current: None,
        target: None,
        epoch: 0,
        primed: false,
    }));
    stream! {
        loop {
            let opened = {
                let mut state = cursor.lock().await;
                state.epoch += 1;
                if !state.primed {
                    state.primed = true;
                    state.advance().await;
                }
                // skip whatever remains of the previous group
                while matches!(
                    (&state.current, &state.target),
                    (Some((key, _)), Some(target)) if key == target
                ) {
                    state.advance().await;
                }
                match &state.current {
                    Some((key, _)) => {
                        let key = key.clone();
                        state.target = Some(key.clone());
                        Some((key, state.epoch))
                    }
                    None => None,
                }
            };
            match opened {
                Some((key, epoch)) => {
                    log::trace!("groupby: opening group at epoch {}", epoch);
                    yield (key.clone(), group(Arc::clone(&cursor), key, epoch));
                }
                None => break,
            }
        }
    }
    .boxed()
}

/// One group: yields elements while the shared lookahead still matches the
/// group key and the epoch recorded at creation is still current.
fn group<O, K, F>(cursor: Arc<Mutex<GroupCursor<O, K, F>>>, key: K, epoch: u64) -> LazySeq<O>
where
    O: Send + 'static,
    K: PartialEq + Clone + Send + 'static,
    F: FnMut(&O) -> K + Send + 'static,
{
    stream! {
        loop {
            let item = {
                let mut state = cursor.lock().await;
                let on_key = matches!(&state.current, Some((current, _)) if *current == key);
                if state.epoch != epoch || !on_key {
                    None
                } else {
                    let (_, item) = state.current.take().unwrap();
                    state.advance().await;
                    Some(item)
                }
            };
            match item {
                Some(item) => yield item,
                None => break,
            }
        }
    }
    .boxed()
}
