//! Combinatorial generators over materialized pools.
//!
//! All four generators require random access to their pool, so they take a
//! `Vec` rather than a lazy sequence; a single-pass or infinite source has
//! no way to satisfy them. Enumeration is by index tuple, in lexicographic
//! order: permutations use pairwise-distinct indices, combinations strictly
//! increasing ones, combinations_with_replacement non-decreasing ones, and
//! product one independent index per pool with the rightmost varying
//! fastest. An `r` larger than the pool degrades to an empty sequence,
//! never an error.

use async_stream::stream;
use futures_util::stream::StreamExt;

use crate::seq::LazySeq;

fn row<O: Clone>(pool: &[O], indices: &[usize]) -> Vec<O> {
    indices.iter().map(|&i| pool[i].clone()).collect()
}

/// Cartesian product of the pools, rightmost pool varying fastest
///
/// With zero pools the product is a single empty row; with any empty pool
/// it is empty.
pub fn product<O>(pools: Vec<Vec<O>>) -> LazySeq<Vec<O>>
where
    O: Clone + Send + 'static,
{
    stream! {
        let mut exhausted = pools.iter().any(|pool| pool.is_empty());
        let mut indices = vec![0usize; pools.len()];
        while !exhausted {
            yield indices
                .iter()
                .zip(&pools)
                .map(|(&i, pool)| pool[i].clone())
                .collect();
            // odometer advance
            let mut position = pools.len();
            loop {
                if position == 0 {
                    exhausted = true;
                    break;
                }
                position -= 1;
                indices[position] += 1;
                if indices[position] < pools[position].len() {
                    break;
                }
                indices[position] = 0;
            }
        }
    }
    .boxed()
}

/// All `r`-length arrangements of pairwise-distinct pool elements
///
/// `r = None` means full-length permutations. Output order is the
/// lexicographic order of the index tuples; the count is `n!/(n-r)!`.
pub fn permutations<O>(pool: Vec<O>, r: Option<usize>) -> LazySeq<Vec<O>>
where
    O: Clone + Send + 'static,
{
    stream! {
        let n = pool.len();
        let r = r.unwrap_or(n);
        if r <= n {
            let mut indices: Vec<usize> = (0..n).collect();
            let mut cycles: Vec<usize> = ((n - r + 1)..=n).rev().collect();
            yield row(&pool, &indices[..r]);
            let mut exhausted = false;
            while !exhausted {
                exhausted = true;
                for position in (0..r).rev() {
                    cycles[position] -= 1;
                    if cycles[position] == 0 {
                        indices[position..].rotate_left(1);
                        cycles[position] = n - position;
                    } else {
                        indices.swap(position, n - cycles[position]);
                        yield row(&pool, &indices[..r]);
                        exhausted = false;
                        break;
                    }
                }
            }
        }
    }
    .boxed()
}

/// All `r`-length selections with strictly increasing index tuples
///
/// The count is `nCr`; the first row is the first `r` pool elements and
/// the last row is the final `r`.
pub fn combinations<O>(pool: Vec<O>, r: usize) -> LazySeq<Vec<O>>
where
    O: Clone + Send + 'static,
{
    stream! {
        let n = pool.len();
        if r <= n {
            let mut indices: Vec<usize> = (0..r).collect();
            yield row(&pool, &indices);
            let mut exhausted = false;
            while !exhausted {
                // rightmost index that can still be bumped
                let mut position = r;
                let mut found = false;
                while position > 0 {
                    position -= 1;
                    if indices[position] != position + n - r {
                        found = true;
                        break;
                    }
                }
                if !found {
                    exhausted = true;
                } else {
                    indices[position] += 1;
                    for after in (position + 1)..r {
                        indices[after] = indices[after - 1] + 1;
                    }
                    yield row(&pool, &indices);
                }
            }
        }
    }
    .boxed()
}

/// All `r`-length selections with non-decreasing index tuples
///
/// The count is `C(n + r - 1, r)`.
pub fn combinations_with_replacement<O>(pool: Vec<O>, r: usize) -> LazySeq<Vec<O>>
where
    O: Clone + Send + 'static,
{
    stream! {
        let n = pool.len();
        if n > 0 || r == 0 {
            let mut indices = vec![0usize; r];
            yield row(&pool, &indices);
            let mut exhausted = false;
            while !exhausted {
                let mut position = r;
                let mut found = false;
                while position > 0 {
                    position -= 1;
                    if indices[position] != n - 1 {
                        found = true;
                        break;
                    }
                }
                if !found {
                    exhausted = true;
                } else {
                    let value = indices[position] + 1;
                    for after in position..r {
                        indices[after] = value;
                    }
                    yield row(&pool, &indices);
                }
            }
        }
    }
    .boxed()
}
