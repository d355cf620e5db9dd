use std::collections::BinaryHeap;

/// The `k` smallest items under `Ord`, in ascending order.
///
/// Ranked types order "better" as "less", so this is the top-k. Runs in
/// `O(m log k)` with a bounded max-heap whose root is the current worst kept item.
pub fn smallest_k<T, I>(items: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }

    let items = items.into_iter();
    let (lower, _) = items.size_hint();
    let mut heap = BinaryHeap::with_capacity(k.min(lower));

    for item in items {
        if heap.len() < k {
            heap.push(item);
        } else if let Some(mut worst) = heap.peek_mut() {
            if item < *worst {
                *worst = item;
            }
        }
    }

    heap.into_sorted_vec()
}
