/// Slices `items` into fixed-size pages.
///
/// `page` is 1-indexed. Returns the page contents and the total page
/// count (`ceil(len / page_size)`, 0 for empty input). A page past the
/// end yields no items; clamping the page back into range is the
/// caller's job.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, usize) {
    let total_pages = (items.len() + page_size - 1) / page_size;

    if page == 0 || page > total_pages {
        return (Vec::new(), total_pages);
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    (items[start..end].to_vec(), total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let (items, total_pages) = paginate::<u32>(&[], 1, 10);
        assert!(items.is_empty());
        assert_eq!(total_pages, 0);
    }

    #[test]
    fn test_partial_last_page() {
        let data: Vec<u32> = (1..=25).collect();
        let (page3, total_pages) = paginate(&data, 3, 10);
        assert_eq!(total_pages, 3);
        assert_eq!(page3, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_exact_multiple() {
        let data: Vec<u32> = (1..=20).collect();
        let (_, total_pages) = paginate(&data, 1, 10);
        assert_eq!(total_pages, 2);
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let data: Vec<u32> = (1..=5).collect();
        let (items, total_pages) = paginate(&data, 2, 10);
        assert!(items.is_empty());
        assert_eq!(total_pages, 1);
    }

    #[test]
    fn test_pages_cover_input_without_gaps_or_duplicates() {
        let data: Vec<u32> = (1..=43).collect();
        let page_size = 8;
        let (_, total_pages) = paginate(&data, 1, page_size);

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            let (items, _) = paginate(&data, page, page_size);
            rebuilt.extend(items);
        }
        assert_eq!(rebuilt, data);
    }
}
