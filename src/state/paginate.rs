//! Fixed-size page windows over the filtered records.
//!
//! The paginator is total and never clamps: out-of-range pages yield an
//! empty slice. Keeping the page in range is the engine's job.

use std::num::NonZeroUsize;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Slice `[(page-1)*size, page*size)` of `items`, clipped to bounds.
///
/// `page` is 1-based; page 0 yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    let Some(zero_based) = page.checked_sub(1) else {
        return &[];
    };

    let size = page_size.get();
    let start = zero_based.saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items. Zero items need zero pages.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}
