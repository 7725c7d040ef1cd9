use super::Counted;

/// Sort `items` into non-increasing count order by insertion.
///
/// An item only moves left past strictly smaller counts, so equal counts
/// keep their relative order within the span.
pub fn insertion_sort<T: Counted>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1].count() < items[j].count() {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
