pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Slice out a 1-based page of `items`.
///
/// Pages at or below zero are read as page 1. A page past the end (or a zero
/// page size) yields an empty slice; turning that into a 404 is the caller's call.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
