//! tee - fan one lazy sequence out into independent branches.
//!
//! One shared cursor over the source plus one queue per branch. An element
//! pulled from the source is pushed into every branch's queue before being
//! handed to the branch that requested it, and leaves a queue only when
//! that branch consumes it; memory held is therefore bounded by the gap
//! between the fastest and the slowest branch.

use std::collections::VecDeque;
use std::sync::Arc;

use async_stream::stream;
use futures_util::stream::StreamExt;
use tokio::sync::Mutex;

use crate::seq::LazySeq;

/// Shared cursor and per-branch queues behind one `tee` call.
struct TeeShared<O> {
    source: LazySeq<O>,
    queues: Vec<VecDeque<O>>,
    exhausted: bool,
}

/// Fan `s` out into `n` independent lazy sequences
///
/// Branches may be consumed at different rates and in any interleaving,
/// without re-reading the source and without the source being restartable:
/// fully draining one branch before touching another still lets the second
/// reproduce the source in full. `n = 0` returns no branches and does not
/// advance the source at all; `n = 1` returns a single branch equivalent
/// to the source.
///
/// Everything is cooperative and single-threaded: whichever branch is
/// currently behind drives the shared cursor forward.
pub fn tee<O>(s: LazySeq<O>, n: usize) -> Vec<LazySeq<O>>
where
    O: Clone + Send + 'static,
{
    if n == 0 {
        return Vec::new();
    }
    log::trace!("tee: fanning out into {} branches", n);
    let shared = Arc::new(Mutex::new(TeeShared {
        source: s,
        queues: (0..n).map(|_| VecDeque::new()).collect(),
        exhausted: false,
    }));
    (0..n).map(|index| branch(Arc::clone(&shared), index)).collect()
}

fn branch<O>(shared: Arc<Mutex<TeeShared<O>>>, index: usize) -> LazySeq<O>
where
    O: Clone + Send + 'static,
{
    stream! {
        loop {
            let item = {
                let mut state = shared.lock().await;
                match state.queues[index].pop_front() {
                    Some(item) => Some(item),
                    None if state.exhausted => None,
                    None => match state.source.next().await {
                        Some(item) => {
                            // enqueue for every branch first, then take our own copy
                            for queue in state.queues.iter_mut() {
                                queue.push_back(item.clone());
                            }
                            state.queues[index].pop_front()
                        }
                        None => {
                            log::trace!("tee: source exhausted");
                            state.exhausted = true;
                            None
                        }
                    },
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
