use super::Counted;

/// Smallest span [`partition`] accepts.
///
/// Median-of-three needs three distinct sample positions; below that the
/// sentinels that bound the inner scans do not exist.
pub const MIN_PARTITION_LEN: usize = 3;

/// Swap so that `items[i]` has a count no smaller than `items[j]`.
fn order<T: Counted>(items: &mut [T], i: usize, j: usize) {
    if items[i].count() < items[j].count() {
        items.swap(i, j);
    }
}

/// Arrange first, middle and last into descending order.
fn sort_first_middle_last<T: Counted>(items: &mut [T], first: usize, mid: usize, last: usize) {
    order(items, first, mid);
    order(items, mid, last);
    order(items, first, mid);
}

/// Partition `items` around a median-of-three pivot and return the pivot's
/// final index.
///
/// Afterwards everything left of the pivot has a count `>=` the pivot's and
/// everything right of it a count `<=`.
///
/// # Panics
///
/// If `items.len() < MIN_PARTITION_LEN`, in every build profile. The
/// sorter only calls this on spans at or above its threshold.
pub(crate) fn partition<T: Counted>(items: &mut [T]) -> usize {
    debug_assert!(
        items.len() >= MIN_PARTITION_LEN,
        "partition needs at least {MIN_PARTITION_LEN} items, got {}",
        items.len()
    );
    let first = 0;
    let last = items.len() - 1;
    let mid = last / 2;

    sort_first_middle_last(items, first, mid, last);

    // items[first] >= pivot >= items[last]: they act as sentinels, so
    // neither scan below can leave the span.
    items.swap(mid, last - 1);
    let pivot_index = last - 1;
    let pivot = items[pivot_index].count();

    let mut left = first + 1;
    let mut right = last - 2;
    loop {
        while items[left].count() > pivot {
            left += 1;
        }
        while items[right].count() < pivot {
            right -= 1;
        }

        if left < right {
            items.swap(left, right);
            left += 1;
            right -= 1;
        } else {
            break;
        }
    }

    items.swap(pivot_index, left);
    left
}
