use lazyseq::seq::*;
use lazyseq::LazySeqExt;
use std::collections::BTreeSet;
use tokio::runtime::Runtime;

#[test]
fn test_chain_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = from_iter(vec![1, 2])
            .chain_seq(from_iter(vec![3, 4]))
            .materialize_seq()
            .await;
        assert_eq!(result, vec![1, 2, 3, 4]);
    });
}

#[test]
fn test_islice_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = count(0, 1)
            .islice_seq(2, Some(9), 2)
            .unwrap()
            .materialize_seq()
            .await;
        assert_eq!(result, vec![2, 4, 6, 8]);
    });
}

#[test]
fn test_compress_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = from_iter(vec!["a", "b", "c"])
            .compress_seq(from_iter(vec![1, 0, 1]))
            .materialize_seq()
            .await;
        assert_eq!(result, vec!["a", "c"]);
    });
}

#[test]
fn test_filterfalse_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = from_iter(0..6)
            .filterfalse_seq(|x| x % 2 == 0)
            .materialize_seq()
            .await;
        assert_eq!(result, vec![1, 3, 5]);
    });
}

#[test]
fn test_filterfalse_default_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = from_iter(vec![0, 1, 0, 2])
            .filterfalse_default_seq()
            .materialize_seq()
            .await;
        assert_eq!(result, vec![0, 0]);
    });
}

#[test]
fn test_takewhile_dropwhile_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let taken = from_iter(vec![1, 2, 9, 1])
            .takewhile_seq(|&x| x < 5)
            .materialize_seq()
            .await;
        assert_eq!(taken, vec![1, 2]);

        let dropped = from_iter(vec![1, 2, 9, 1])
            .dropwhile_seq(|&x| x < 5)
            .materialize_seq()
            .await;
        assert_eq!(dropped, vec![9, 1]);
    });
}

#[test]
fn test_accumulate_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = from_iter(vec![1, 2, 3]).accumulate_seq().materialize_seq().await;
        assert_eq!(result, vec![1, 3, 6]);
    });
}

#[test]
fn test_pairwise_then_starmap_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        // differences between consecutive elements
        let result = from_iter(vec![1, 4, 9, 16])
            .pairwise_seq()
            .starmap_seq(|a: i32, b: i32| b - a)
            .materialize_seq()
            .await;
        assert_eq!(result, vec![3, 5, 7]);
    });
}

#[test]
fn test_zip_with_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = from_iter(vec![1, 2, 3])
            .zip_with_seq(count(0, 10), |a, b| a + b)
            .materialize_seq()
            .await;
        assert_eq!(result, vec![1, 12, 23]);
    });
}

#[test]
fn test_zip_longest_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = from_iter(vec![1, 2, 3])
            .zip_longest_seq(from_iter(vec![9]), 0)
            .materialize_seq()
            .await;
        assert_eq!(result, vec![vec![1, 9], vec![2, 0], vec![3, 0]]);
    });
}

#[test]
fn test_cycle_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = from_iter(vec![1, 2])
            .cycle_seq()
            .islice_seq(0, Some(5), 1)
            .unwrap()
            .materialize_seq()
            .await;
        assert_eq!(result, vec![1, 2, 1, 2, 1]);
    });
}

#[test]
fn test_tee_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let mut branches = from_iter(vec![1, 2, 3]).tee_seq(2);
        let b = branches.pop().unwrap();
        let a = branches.pop().unwrap();
        assert_eq!(materialize(a).await, vec![1, 2, 3]);
        assert_eq!(materialize(b).await, vec![1, 2, 3]);
    });
}

#[test]
fn test_groupby_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        use futures_util::stream::StreamExt;
        let mut outer = from_iter(vec![1, 1, 2]).groupby_seq(|&x| x);
        let mut keys = Vec::new();
        while let Some((key, group)) = outer.next().await {
            keys.push((key, materialize(group).await));
        }
        assert_eq!(keys, vec![(1, vec![1, 1]), (2, vec![2])]);
    });
}

#[test]
fn test_materialize_into_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let set: BTreeSet<i32> = from_iter(vec![2, 1, 2]).materialize_into_seq().await;
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    });
}

#[test]
fn test_fold_and_reduce_seq() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        assert_eq!(from_iter(vec![1, 2, 3]).fold_seq(0, |a, b| a + b).await, 6);
        assert_eq!(from_iter(vec![1, 2, 3]).reduce_seq(|a, b| a * b).await, Ok(6));
    });
}

#[test]
fn test_long_method_chain() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        // a representative composition: bound an infinite source, drop the
        // warm-up, keep odds, running-sum the rest
        let result = count(0i64, 1)
            .dropwhile_seq(|&x| x < 3)
            .filterfalse_seq(|&x| x % 2 == 0)
            .islice_seq(0, Some(4), 1)
            .unwrap()
            .accumulate_seq()
            .materialize_seq()
            .await;
        assert_eq!(result, vec![3, 8, 15, 24]);
    });
}
