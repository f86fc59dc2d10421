use futures_util::stream::StreamExt;
use lazyseq::groupby::groupby;
use lazyseq::seq::*;
use tokio::runtime::Runtime;

#[test]
fn test_groupby_consecutive_runs() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let words = from_iter(vec!["aaa", "aab", "bba", "bbb", "ccc"]);
        let mut outer = groupby(words, |w| w.as_bytes()[0] as char);
        let mut result = Vec::new();
        while let Some((key, group)) = outer.next().await {
            result.push((key, materialize(group).await));
        }
        assert_eq!(
            result,
            vec![
                ('a', vec!["aaa", "aab"]),
                ('b', vec!["bba", "bbb"]),
                ('c', vec!["ccc"]),
            ],
        );
    });
}

#[test]
fn test_groupby_is_not_a_global_grouping() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let seq = from_iter(vec![1, 1, 2, 2, 3, 3, 2, 1]);
        let mut outer = groupby(seq, |&x| x % 2);
        let mut result = Vec::new();
        while let Some((key, group)) = outer.next().await {
            result.push((key, materialize(group).await));
        }
        assert_eq!(
            result,
            vec![
                (1, vec![1, 1]),
                (0, vec![2, 2]),
                (1, vec![3, 3]),
                (0, vec![2]),
                (1, vec![1]),
            ],
        );
    });
}

#[test]
fn test_groupby_advancing_outer_skips_undrained_group() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let seq = from_iter(vec!["a1", "a2", "a3", "b1", "c1"]);
        let mut outer = groupby(seq, |w| w.as_bytes()[0]);
        // never touch the inner groups; keys must still come out right
        let mut keys = Vec::new();
        while let Some((key, _group)) = outer.next().await {
            keys.push(key as char);
        }
        assert_eq!(keys, vec!['a', 'b', 'c']);
    });
}

#[test]
fn test_groupby_partially_drained_group_remainder_is_discarded() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let seq = from_iter(vec![1, 1, 1, 2, 2]);
        let mut outer = groupby(seq, |&x| x);
        let (key, mut group) = outer.next().await.unwrap();
        assert_eq!(key, 1);
        assert_eq!(group.next().await, Some(1));
        // advance the outer with two 1s still unread; they are skipped
        let (key, group) = outer.next().await.unwrap();
        assert_eq!(key, 2);
        assert_eq!(materialize(group).await, vec![2, 2]);
    });
}

#[test]
fn test_groupby_stale_inner_reports_exhaustion() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let seq = from_iter(vec![1, 1, 2, 2]);
        let mut outer = groupby(seq, |&x| x);
        let (_, mut first_group) = outer.next().await.unwrap();
        assert_eq!(first_group.next().await, Some(1));
        let _ = outer.next().await.unwrap();
        // the epoch moved on; the old group is dead, not an error
        assert_eq!(first_group.next().await, None);
        assert_eq!(first_group.next().await, None);
    });
}

#[test]
fn test_groupby_empty_source() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let mut outer = groupby(empty::<i32>(), |&x| x);
        assert!(outer.next().await.is_none());
    });
}

#[test]
fn test_groupby_single_run() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let mut outer = groupby(from_iter(vec![4, 4, 4]), |&x| x);
        let (key, group) = outer.next().await.unwrap();
        assert_eq!(key, 4);
        assert_eq!(materialize(group).await, vec![4, 4, 4]);
        assert!(outer.next().await.is_none());
    });
}

#[test]
fn test_groupby_key_function_sees_every_element_once() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let calls_probe = calls.clone();
        let seq = from_iter(vec![1, 1, 2]);
        let mut outer = groupby(seq, move |&x| {
            calls_probe.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            x
        });
        while let Some((_, group)) = outer.next().await {
            let _ = materialize(group).await;
        }
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 3);
    });
}
