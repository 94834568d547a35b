use crate::config::{MAX_PAGE_BUTTONS, RESULTS_PER_PAGE};

/// 1-indexed page cursor over the filtered record list.
///
/// The paginator holds no copy of the data; callers pass the filtered
/// slice (or its length) and it does the window arithmetic. Whoever owns
/// it must reset to page 1 whenever the filtered set's identity changes,
/// or stale out-of-range windows would surface.
#[derive(Debug, Clone)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
}

/// What the pagination control renders: at most `MAX_PAGE_BUTTONS`
/// numbered buttons plus ellipsis markers for hidden ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub leading_ellipsis: bool,
    pub pages: Vec<usize>,
    pub trailing_ellipsis: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self::with_page_size(RESULTS_PER_PAGE)
    }

    /// `page_size` must be at least 1.
    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// At least 1 even for an empty list, so the control row always has
    /// a page to stand on.
    pub fn total_pages(&self, filtered_len: usize) -> usize {
        filtered_len.div_ceil(self.page_size).max(1)
    }

    /// Jump to `page`. Anything outside `[1, total_pages]` is a no-op,
    /// so programmatic calls are as safe as the disabled buttons.
    pub fn go_to(&mut self, page: usize, filtered_len: usize) -> bool {
        if page < 1 || page > self.total_pages(filtered_len) {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Back to page 1. Called on every filter change and store mutation.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Index window of the current page, clipped to the list bounds.
    pub fn window(&self, filtered_len: usize) -> std::ops::Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(filtered_len);
        let end = (start + self.page_size).min(filtered_len);
        start..end
    }

    /// The current page's slice of the filtered list.
    pub fn page<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[self.window(filtered.len())]
    }

    /// "Showing X to Y of Z" bookkeeping: `(0, 0)` when the list is
    /// empty, else 1-indexed inclusive bounds.
    pub fn range_info(&self, filtered_len: usize) -> (usize, usize) {
        if filtered_len == 0 {
            return (0, 0);
        }
        let start = (self.current_page - 1) * self.page_size + 1;
        let end = (self.current_page * self.page_size).min(filtered_len);
        (start, end)
    }

    /// Numbered buttons centered on the current page. When the centered
    /// window would overrun the last page it shifts left just enough to
    /// end at `total_pages`; the start is clamped to 1 by construction.
    pub fn controls(&self, filtered_len: usize) -> PageControls {
        let total = self.total_pages(filtered_len);

        let start_page = self
            .current_page
            .saturating_sub(MAX_PAGE_BUTTONS / 2)
            .max(1);
        let mut end_page = start_page + MAX_PAGE_BUTTONS - 1;

        let start_page = if end_page > total {
            end_page = total;
            end_page.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1)
        } else {
            start_page
        };

        PageControls {
            leading_ellipsis: start_page > 1,
            pages: (start_page..=end_page).collect(),
            trailing_ellipsis: end_page < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        let pager = Paginator::new();
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(20), 1);
        assert_eq!(pager.total_pages(21), 2);
        assert_eq!(pager.total_pages(45), 3);
    }

    #[test]
    fn window_never_exceeds_page_size_or_bounds() {
        let mut pager = Paginator::new();
        let items: Vec<usize> = (0..45).collect();

        assert_eq!(pager.page(&items), &items[0..20]);

        assert!(pager.go_to(3, items.len()));
        let last = pager.page(&items);
        assert_eq!(last.len(), 5);
        assert_eq!(last, &items[40..45]);
    }

    #[test]
    fn out_of_range_navigation_is_a_no_op() {
        let mut pager = Paginator::new();
        let len = 45;

        assert!(!pager.go_to(0, len));
        assert_eq!(pager.current_page(), 1);

        assert!(pager.go_to(2, len));
        assert!(!pager.go_to(4, len));
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn range_info_matches_showing_text() {
        let mut pager = Paginator::new();
        assert_eq!(pager.range_info(45), (1, 20));

        pager.go_to(3, 45);
        assert_eq!(pager.range_info(45), (41, 45));
    }

    #[test]
    fn empty_list_shows_zero_range_on_page_one() {
        let pager = Paginator::new();
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.range_info(0), (0, 0));
        let empty: &[u8] = &[];
        assert!(pager.page(empty).is_empty());
    }

    #[test]
    fn stale_page_window_clips_to_empty_rather_than_panicking() {
        // The reset invariant should prevent this state; if it is ever
        // violated the window degrades to an empty slice.
        let mut pager = Paginator::new();
        pager.go_to(3, 45);
        let shrunk: Vec<usize> = (0..5).collect();
        assert!(pager.page(&shrunk).is_empty());
    }

    #[test]
    fn controls_show_single_button_for_one_page() {
        let pager = Paginator::new();
        let controls = pager.controls(10);
        assert_eq!(controls.pages, vec![1]);
        assert!(!controls.leading_ellipsis);
        assert!(!controls.trailing_ellipsis);
    }

    #[test]
    fn controls_fit_small_page_counts_without_ellipses() {
        let pager = Paginator::new();
        let controls = pager.controls(45); // 3 pages
        assert_eq!(controls.pages, vec![1, 2, 3]);
        assert!(!controls.leading_ellipsis);
        assert!(!controls.trailing_ellipsis);
    }

    #[test]
    fn controls_center_on_current_page() {
        let mut pager = Paginator::with_page_size(10);
        let len = 100; // 10 pages
        pager.go_to(5, len);

        let controls = pager.controls(len);
        assert_eq!(controls.pages, vec![3, 4, 5, 6, 7]);
        assert!(controls.leading_ellipsis);
        assert!(controls.trailing_ellipsis);
    }

    #[test]
    fn controls_shift_left_at_the_end() {
        let mut pager = Paginator::with_page_size(10);
        let len = 100;

        pager.go_to(9, len);
        let controls = pager.controls(len);
        assert_eq!(controls.pages, vec![6, 7, 8, 9, 10]);
        assert!(controls.leading_ellipsis);
        assert!(!controls.trailing_ellipsis);

        pager.go_to(10, len);
        assert_eq!(pager.controls(len).pages, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn controls_clamp_at_the_start() {
        let mut pager = Paginator::with_page_size(10);
        let len = 100;

        pager.go_to(2, len);
        let controls = pager.controls(len);
        assert_eq!(controls.pages, vec![1, 2, 3, 4, 5]);
        assert!(!controls.leading_ellipsis);
        assert!(controls.trailing_ellipsis);
    }
}
