pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed page of `items`. Pages past the end, and the
/// invalid page 0, come back empty; the routes turn an empty page into 404.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let Some(page) = (page as usize).checked_sub(1) else {
        return &[];
    };
    let start = page.saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + QUESTIONS_PER_PAGE, items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_the_default_size() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 1), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_may_be_short() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 3), vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 5600).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 0).is_empty());
    }

    #[test]
    fn empty_input_has_no_pages() {
        assert!(paginate::<u32>(&[], 1).is_empty());
    }
}
