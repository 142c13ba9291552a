/*!
 * Merge Sort
 * Iterative bottom-up stable merge over an index sequence
 */

/// Stable sort of `items` by `key`, O(n log n) time and O(n) scratch
///
/// Runs of width 1, 2, 4, ... are merged pairwise. On equal keys the left
/// run wins, so items with equal keys keep their input order.
pub(crate) fn merge_sort_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    let len = items.len();
    if len < 2 {
        return items;
    }

    let mut src = items;
    let mut dst: Vec<T> = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        dst.clear();
        let mut lo = 0;
        while lo < len {
            let mid = (lo + width).min(len);
            let hi = (lo + 2 * width).min(len);
            merge(&src[lo..mid], &src[mid..hi], &key, &mut dst);
            lo = hi;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }

    src
}

fn merge<T, K, F>(left: &[T], right: &[T], key: &F, out: &mut Vec<T>)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Strictly smaller right key required to jump ahead of the left run
        if key(&right[j]) < key(&left[i]) {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
