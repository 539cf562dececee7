use crate::TUNED_PARAMS;

/// Stable sort of `data` into ascending order under the strict weak order `less`.
///
/// Elements for which neither `less(a, b)` nor `less(b, a)` holds keep
/// their input order. The order is computed on indices and applied at the
/// end, so `data` still holds every element if `less` panics.
pub(crate) fn sort_by_less<T, F>(data: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    if is_sorted_by_less(data, less) {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = order.clone();
    merge_sort_recursive(data, &mut scratch, &mut order, 0, len, less);
    apply_permutation(data, &mut order);
}

/// Leaves `dst[left..right]` sorted; `src` holds the same indices on entry and is clobbered.
fn merge_sort_recursive<T, F>(
    data: &[T],
    src: &mut [usize],
    dst: &mut [usize],
    left: usize,
    right: usize,
    less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    let len = right - left;
    if len <= TUNED_PARAMS.insertion_threshold.max(1) {
        dst[left..right].copy_from_slice(&src[left..right]);
        binary_insertion_sort(&mut dst[left..right], &mut |&a: &usize, &b: &usize| {
            less(&data[a], &data[b])
        });
        return;
    }

    let mid = left + (len >> 1);

    merge_sort_recursive(data, dst, src, left, mid, less);
    merge_sort_recursive(data, dst, src, mid, right, less);

    if !less(&data[src[mid]], &data[src[mid - 1]]) {
        dst[left..right].copy_from_slice(&src[left..right]);
        return;
    }

    merge_ranges(data, src, dst, left, mid, right, less);
}

/// Merges `src[left..mid]` and `src[mid..right]` into `dst`, preferring the left run on ties.
fn merge_ranges<T, F>(
    data: &[T],
    src: &[usize],
    dst: &mut [usize],
    left: usize,
    mid: usize,
    right: usize,
    less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        if less(&data[src[j]], &data[src[i]]) {
            dst[k] = src[j];
            j += 1;
        } else {
            dst[k] = src[i];
            i += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..(k + (mid - i))].copy_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..(k + (right - j))].copy_from_slice(&src[j..right]);
    }
}

/// Moves `data[order[k]]` to position `k` by following permutation cycles.
fn apply_permutation<T>(data: &mut [T], order: &mut [usize]) {
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }
        let mut pos = start;
        loop {
            let from = order[pos];
            order[pos] = pos;
            if from == start {
                break;
            }
            data.swap(pos, from);
            pos = from;
        }
    }
}

/// Inserts each element after every earlier element it does not sort before.
pub(crate) fn binary_insertion_sort<T, F>(data: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let mut left = 0usize;
        let mut right = i;
        while left < right {
            let mid = left + ((right - left) >> 1);
            if less(&data[i], &data[mid]) {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        data[left..=i].rotate_right(1);
    }
}

#[inline]
pub(crate) fn is_sorted_by_less<T, F>(data: &[T], less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    data.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn by_key(a: &(u32, usize), b: &(u32, usize)) -> bool {
        a.0 < b.0
    }

    fn assert_stable_like_std(data: &[(u32, usize)]) {
        let mut actual = data.to_vec();
        sort_by_less(&mut actual, &mut by_key);

        let mut expected = data.to_vec();
        expected.sort_by_key(|&(key, _)| key);

        assert_eq!(actual, expected, "input_len={}", data.len());
    }

    fn tagged(keys: &[u32]) -> Vec<(u32, usize)> {
        keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect()
    }

    #[test]
    fn edge_cases() {
        let cases: [&[u32]; 7] = [
            &[],
            &[42],
            &[1, 2, 3, 4, 5, 6],
            &[6, 5, 4, 3, 2, 1],
            &[7; 128],
            &[0, 1, u32::MAX, 0, u32::MAX - 1, 2],
            &[5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in cases {
            assert_stable_like_std(&tagged(case));
        }
    }

    #[test]
    fn insertion_sort_is_stable() {
        let mut data = tagged(&[3, 1, 3, 2, 1, 3, 2]);
        binary_insertion_sort(&mut data, &mut by_key);
        assert_eq!(
            data,
            vec![(1, 1), (1, 4), (2, 3), (2, 6), (3, 0), (3, 2), (3, 5)]
        );
    }

    #[test]
    fn sorted_check() {
        let mut less = |a: &i32, b: &i32| a < b;
        assert!(is_sorted_by_less(&[] as &[i32], &mut less));
        assert!(is_sorted_by_less(&[1, 1, 2, 3], &mut less));
        assert!(!is_sorted_by_less(&[1, 3, 2], &mut less));
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 23, 24, 25, 63, 64, 127, 128, 511, 2048] {
            let keys: Vec<u32> = (0..size).map(|_| rng.random::<u32>()).collect();
            assert_stable_like_std(&tagged(&keys));
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let keys: Vec<u32> = (0..size).map(|_| rng.random_range(0..16)).collect();
            assert_stable_like_std(&tagged(&keys));
        }
    }

    #[test]
    fn permutation_is_applied_in_place() {
        let mut data = vec!['a', 'b', 'c', 'd', 'e'];
        let mut order = vec![3, 0, 4, 1, 2];
        apply_permutation(&mut data, &mut order);
        assert_eq!(data, vec!['d', 'a', 'e', 'b', 'c']);
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn panicking_less_keeps_every_element() {
        let mut data: Vec<u32> = (0..200).rev().collect();
        let mut calls = 0usize;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            sort_by_less(&mut data, &mut |a: &u32, b: &u32| {
                calls += 1;
                if calls == 400 {
                    panic!("comparator failure");
                }
                a < b
            });
        }));

        assert!(result.is_err());
        assert_eq!(data, (0..200).rev().collect::<Vec<u32>>());
    }

    #[test]
    fn owns_non_clone_elements() {
        let mut data: Vec<Box<i32>> = [9, 4, 7, 1, 8].into_iter().map(Box::new).collect();
        sort_by_less(&mut data, &mut |a: &Box<i32>, b: &Box<i32>| **a < **b);
        let values: Vec<i32> = data.into_iter().map(|b| *b).collect();
        assert_eq!(values, vec![1, 4, 7, 8, 9]);
    }
}
