use std::ops::Range;

/// Fixed page size of the category browser.
pub const PRODUCTS_PER_PAGE: usize = 12;

/// Number of pages needed to show `len` items, `per_page` at a time.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Index range of a one-based page, clamped to `len`.
pub fn page_bounds(page: usize, per_page: usize, len: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    start..end
}

/// Items shown on a one-based page; out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    &items[page_bounds(page, per_page, items.len())]
}
