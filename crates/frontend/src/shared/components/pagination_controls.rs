use crate::shared::icons::icon;
use leptos::prelude::*;

/// One slot in the numbered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageToken {
    Page(usize),
    Ellipsis,
}

/// Computes the visible page numbers around `current`, with ellipsis gaps.
/// Pages are 1-indexed; at most 5 numbered slots plus the two endpoints.
fn page_window(current: usize, total: usize) -> Vec<PageToken> {
    use PageToken::*;

    if total <= 5 {
        return (1..=total).map(Page).collect();
    }

    let mut tokens = vec![Page(1)];
    if current > 3 {
        tokens.push(Ellipsis);
    }

    let (start, end) = if current <= 3 {
        (2, 4)
    } else if current >= total - 2 {
        ((total - 3).max(2), total - 1)
    } else {
        (current - 1, current + 1)
    };

    for page in start..=end {
        tokens.push(Page(page));
    }

    if current < total - 2 {
        tokens.push(Ellipsis);
    }
    tokens.push(Page(total));

    tokens
}

/// PaginationControls component - numbered pagination with prev/next.
///
/// Shows "<selected> of <total> row(s) selected." on the left when a
/// selection is active, plain totals otherwise.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Count of rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    /// Count of selected rows
    #[prop(into)]
    selected_count: Signal<usize>,

    /// Callback when the page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <div class="pagination__summary">
                {move || {
                    let selected = selected_count.get();
                    let total = total_count.get();
                    if selected > 0 {
                        format!("{} of {} row(s) selected.", selected, total)
                    } else {
                        format!("Total {} orders", total)
                    }
                }}
            </div>

            <div class="pagination__controls">
                <button
                    class="pagination__btn"
                    title="Previous page"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                >
                    {icon("chevron-left")}
                </button>

                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|token| match token {
                            PageToken::Page(page) => view! {
                                <button
                                    class="pagination__btn pagination__btn--page"
                                    class:pagination__btn--current=move || page == current
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }.into_any(),
                            PageToken::Ellipsis => view! {
                                <span class="pagination__ellipsis">"..."</span>
                            }.into_any(),
                        })
                        .collect_view()
                }}

                <button
                    class="pagination__btn"
                    title="Next page"
                    on:click=move |_| {
                        let page = current_page.get();
                        let total = total_pages.get();
                        if page < total {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || {
                        let total = total_pages.get();
                        total == 0 || current_page.get() >= total
                    }
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::PageToken::*;
    use super::*;

    #[test]
    fn test_few_pages_listed_in_full() {
        assert_eq!(page_window(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_window(5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            page_window(9, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
