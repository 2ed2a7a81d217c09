//! Windowed pagination over tabular result sets.
//!
//! [`PageWindow`] does the slice arithmetic, [`build_buttons`] produces the
//! compact button row a renderer draws, and [`PaginationEngine`] combines
//! the two into a [`Paginated`] snapshot. All of it is pure computation:
//! every call builds a fresh value from its inputs, nothing is mutated in
//! place across requests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Items per page used when the caller does not specify a limit.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Default number of page buttons pinned to the start and end of the row.
pub const DEFAULT_ON_ENDS: usize = 1;
/// Default number of page buttons on each side of the current page.
pub const DEFAULT_ON_EACH_SIDE: usize = 2;

/// Errors produced while computing a page window.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// Page size must be at least one item per page.
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}

/// Display labels for the non-numeric pagination buttons.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageLabels {
    pub ellided: String,
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
}

impl Default for PageLabels {
    fn default() -> Self {
        Self {
            ellided: "...".to_string(),
            first: "«".to_string(),
            prev: "prev".to_string(),
            next: "next".to_string(),
            last: "»".to_string(),
        }
    }
}

/// Layout knobs controlling how many numeric buttons appear in the row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutParams {
    /// Page buttons pinned to the very start and end of the row.
    pub on_ends: usize,
    /// Page buttons shown on each side of the current page; the visible
    /// block is `on_each_side * 2 + 1` pages wide.
    pub on_each_side: usize,
    pub labels: PageLabels,
}

impl LayoutParams {
    pub fn new(on_ends: usize, on_each_side: usize) -> Self {
        Self {
            on_ends,
            on_each_side,
            labels: PageLabels::default(),
        }
    }

    /// Builder-style override of the button labels.
    pub fn labels(mut self, labels: PageLabels) -> Self {
        self.labels = labels;
        self
    }
}

impl Default for LayoutParams {
    /// `on_ends = 1`, `on_each_side = 2`, standard labels.
    fn default() -> Self {
        Self::new(DEFAULT_ON_ENDS, DEFAULT_ON_EACH_SIDE)
    }
}

/// One entry in the rendered pagination control.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ButtonToken {
    /// A 1-indexed page number.
    Page(usize),
    /// Non-interactive marker for skipped page numbers.
    Ellipsis,
    First,
    Prev,
    Next,
    Last,
}

impl ButtonToken {
    /// Returns the display string for this button under `labels`.
    pub fn label(&self, labels: &PageLabels) -> String {
        match self {
            ButtonToken::Page(page) => page.to_string(),
            ButtonToken::Ellipsis => labels.ellided.clone(),
            ButtonToken::First => labels.first.clone(),
            ButtonToken::Prev => labels.prev.clone(),
            ButtonToken::Next => labels.next.clone(),
            ButtonToken::Last => labels.last.clone(),
        }
    }

    /// Parses a clicked label back into a token.
    ///
    /// Label matches take precedence over numeric parsing, so a
    /// navigational label that happens to look like a number shadows that
    /// page. Unrecognized, non-numeric labels (and "page 0") yield `None`.
    pub fn from_label(label: &str, labels: &PageLabels) -> Option<Self> {
        if label == labels.ellided {
            Some(ButtonToken::Ellipsis)
        } else if label == labels.first {
            Some(ButtonToken::First)
        } else if label == labels.prev {
            Some(ButtonToken::Prev)
        } else if label == labels.next {
            Some(ButtonToken::Next)
        } else if label == labels.last {
            Some(ButtonToken::Last)
        } else {
            label
                .parse::<usize>()
                .ok()
                .filter(|page| *page > 0)
                .map(ButtonToken::Page)
        }
    }
}

/// Slice boundaries for one page of a result set.
///
/// Recomputed from scratch on every request; holds no reference to the
/// rows themselves.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PageWindow {
    pub total_items: usize,
    pub page_size: usize,
    /// 1-indexed current page.
    pub current_page: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl PageWindow {
    /// Computes slice boundaries for `current_page`.
    ///
    /// A `current_page` of zero is treated as page one. Pages past the end
    /// are not rejected: they yield an empty slice with `start_index`
    /// clamped to `total_items`, so `start_index <= end_index <=
    /// total_items` always holds. Callers wanting strict bounds must clamp
    /// before calling.
    pub fn compute(
        total_items: usize,
        page_size: usize,
        current_page: usize,
    ) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize);
        }
        let current_page = current_page.max(1);
        let total_pages = total_items.div_ceil(page_size);
        let start_index = ((current_page - 1) * page_size).min(total_items);
        let end_index = (start_index + page_size).min(total_items);

        Ok(Self {
            total_items,
            page_size,
            current_page,
            total_pages,
            start_index,
            end_index,
        })
    }
}

/// Builds the ordered button row for a page window.
///
/// The visible block of page numbers is aligned to fixed-size blocks
/// counted from page one rather than centered on the current page, so the
/// current page may sit anywhere inside its block. An empty result set
/// produces an empty row.
pub fn build_buttons(window: &PageWindow, layout: &LayoutParams) -> Vec<ButtonToken> {
    let total_pages = window.total_pages;
    if total_pages == 0 {
        return Vec::new();
    }

    let current = window.current_page;
    let page_length = layout.on_each_side * 2 + 1;
    let window_start = (current - 1) / page_length * page_length + 1;

    let mut buttons = Vec::new();

    if current > 1 {
        buttons.push(ButtonToken::First);
        buttons.push(ButtonToken::Prev);
    }

    // Pages leading into the visible block.
    let lead_start = window_start.saturating_sub(layout.on_each_side).max(1);
    for page in lead_start..window_start {
        buttons.push(ButtonToken::Page(page));
    }
    if window_start > layout.on_ends + 1 {
        buttons.push(ButtonToken::Ellipsis);
    }

    // The visible block, truncated at the last page.
    let window_end = (window_start + page_length - 1).min(total_pages);
    for page in window_start..=window_end {
        buttons.push(ButtonToken::Page(page));
    }
    if window_start + page_length + layout.on_ends <= total_pages {
        buttons.push(ButtonToken::Ellipsis);
    }

    // Pages pinned to the tail of the row.
    let tail_start =
        (window_start + page_length).max((total_pages + 1).saturating_sub(layout.on_ends));
    for page in tail_start..=total_pages {
        buttons.push(ButtonToken::Page(page));
    }

    if current < total_pages {
        buttons.push(ButtonToken::Next);
        buttons.push(ButtonToken::Last);
    }

    buttons
}

/// Immutable snapshot of one paginated view over a result set.
///
/// Owned by the caller and discarded after rendering; the next navigation
/// produces a fresh one.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Paginated<T> {
    /// The `[start_index, end_index)` slice of the full result set.
    pub rows: Vec<T>,
    /// Column names in display order.
    pub headers: Vec<String>,
    pub buttons: Vec<ButtonToken>,
    pub page: usize,
    pub limit: usize,
    /// Size of the full result set.
    pub count: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
    /// Page after the current one, when there is one.
    pub next: Option<usize>,
    /// Page before the current one, when there is one.
    pub previous: Option<usize>,
    pub labels: PageLabels,
}

/// Combines window arithmetic with button layout.
#[derive(Clone, Debug, Default)]
pub struct PaginationEngine {
    layout: LayoutParams,
}

impl PaginationEngine {
    pub fn new(layout: LayoutParams) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LayoutParams {
        &self.layout
    }

    /// Slices one page out of `rows` and packages it with its button row.
    pub fn paginate<T: Clone>(
        &self,
        rows: &[T],
        headers: &[String],
        page: usize,
        limit: usize,
    ) -> Result<Paginated<T>, PaginationError> {
        let window = PageWindow::compute(rows.len(), limit, page)?;
        let buttons = build_buttons(&window, &self.layout);

        Ok(Paginated {
            rows: rows[window.start_index..window.end_index].to_vec(),
            headers: headers.to_vec(),
            buttons,
            page: window.current_page,
            limit: window.page_size,
            count: window.total_items,
            total_pages: window.total_pages,
            start_index: window.start_index,
            end_index: window.end_index,
            next: (window.end_index < window.total_items).then(|| window.current_page + 1),
            previous: (window.start_index > 0).then(|| window.current_page - 1),
            labels: self.layout.labels.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(total: usize, size: usize, page: usize) -> PageWindow {
        PageWindow::compute(total, size, page).unwrap()
    }

    #[test]
    fn rejects_zero_page_size() {
        assert_eq!(
            PageWindow::compute(10, 0, 1),
            Err(PaginationError::InvalidPageSize)
        );
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(window(0, 10, 1).total_pages, 0);
        assert_eq!(window(1, 10, 1).total_pages, 1);
        assert_eq!(window(10, 10, 1).total_pages, 1);
        assert_eq!(window(11, 10, 1).total_pages, 2);
        assert_eq!(window(95, 10, 1).total_pages, 10);
    }

    #[test]
    fn last_page_slice_is_clamped() {
        // 25 items, page 3 of 3: [20, 25), not [20, 30).
        let w = window(25, 10, 3);
        assert_eq!(w.start_index, 20);
        assert_eq!(w.end_index, 25);
    }

    #[test]
    fn page_past_the_end_yields_empty_slice() {
        let w = window(25, 10, 7);
        assert_eq!(w.start_index, 25);
        assert_eq!(w.end_index, 25);
        assert_eq!(w.end_index - w.start_index, 0);
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        assert_eq!(window(25, 10, 0), window(25, 10, 1));
    }

    #[test]
    fn compute_is_idempotent() {
        assert_eq!(window(95, 10, 4), window(95, 10, 4));
    }

    #[test]
    fn slice_never_exceeds_page_size() {
        for total in [0, 1, 9, 10, 11, 95, 100] {
            for page in 1..=12 {
                let w = window(total, 10, page);
                assert!(w.end_index - w.start_index <= w.page_size);
                assert!(w.start_index <= w.end_index);
                assert!(w.end_index <= w.total_items);
            }
        }
    }

    #[test]
    fn first_page_of_ninety_five() {
        let layout = LayoutParams::default();
        let buttons = build_buttons(&window(95, 10, 1), &layout);
        assert_eq!(
            buttons,
            vec![
                ButtonToken::Page(1),
                ButtonToken::Page(2),
                ButtonToken::Page(3),
                ButtonToken::Page(4),
                ButtonToken::Page(5),
                ButtonToken::Ellipsis,
                ButtonToken::Page(10),
                ButtonToken::Next,
                ButtonToken::Last,
            ]
        );
    }

    #[test]
    fn empty_result_set_has_no_buttons() {
        let buttons = build_buttons(&window(0, 10, 1), &LayoutParams::default());
        assert!(buttons.is_empty());
    }

    #[test]
    fn single_page_is_one_numeric_button() {
        let buttons = build_buttons(&window(7, 10, 1), &LayoutParams::default());
        assert_eq!(buttons, vec![ButtonToken::Page(1)]);
    }

    #[test]
    fn window_snaps_to_blocks_from_page_one() {
        // Page length 5: pages 6..=10 share one block, so page 7 renders
        // the same block as page 6, not a block centered on 7.
        let layout = LayoutParams::default();
        let buttons = build_buttons(&window(200, 10, 7), &layout);
        let pages: Vec<usize> = buttons
            .iter()
            .filter_map(|b| match b {
                ButtonToken::Page(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(pages, vec![4, 5, 6, 7, 8, 9, 10, 20]);
    }

    #[test]
    fn nav_buttons_track_position() {
        let layout = LayoutParams::default();

        let first = build_buttons(&window(95, 10, 1), &layout);
        assert!(!first.contains(&ButtonToken::First));
        assert!(!first.contains(&ButtonToken::Prev));
        assert!(first.contains(&ButtonToken::Next));
        assert!(first.contains(&ButtonToken::Last));

        let middle = build_buttons(&window(95, 10, 5), &layout);
        for token in [
            ButtonToken::First,
            ButtonToken::Prev,
            ButtonToken::Next,
            ButtonToken::Last,
        ] {
            assert!(middle.contains(&token));
        }

        let last = build_buttons(&window(95, 10, 10), &layout);
        assert!(last.contains(&ButtonToken::First));
        assert!(last.contains(&ButtonToken::Prev));
        assert!(!last.contains(&ButtonToken::Next));
        assert!(!last.contains(&ButtonToken::Last));
    }

    #[test]
    fn never_two_consecutive_ellipses() {
        for total in [0, 5, 30, 95, 200, 1000] {
            for page in 1..=20 {
                for on_ends in 0..=3 {
                    for on_each_side in 0..=3 {
                        let layout = LayoutParams::new(on_ends, on_each_side);
                        let buttons = build_buttons(&window(total, 10, page), &layout);
                        let consecutive = buttons.windows(2).any(|pair| {
                            matches!(pair, [ButtonToken::Ellipsis, ButtonToken::Ellipsis])
                        });
                        assert!(
                            !consecutive,
                            "double ellipsis: total={total} page={page} \
                             on_ends={on_ends} on_each_side={on_each_side}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn zero_layout_params_do_not_panic() {
        let layout = LayoutParams::new(0, 0);
        let buttons = build_buttons(&window(95, 10, 5), &layout);
        assert!(buttons.contains(&ButtonToken::Page(5)));
    }

    #[test]
    fn tail_pins_the_last_pages() {
        let layout = LayoutParams::new(2, 2);
        let buttons = build_buttons(&window(200, 10, 1), &layout);
        let tail: Vec<ButtonToken> = buttons[buttons.len() - 4..].to_vec();
        assert_eq!(
            tail,
            vec![
                ButtonToken::Page(19),
                ButtonToken::Page(20),
                ButtonToken::Next,
                ButtonToken::Last,
            ]
        );
    }

    #[test]
    fn engine_fills_navigation_metadata() {
        let rows: Vec<u32> = (0..95).collect();
        let headers = vec!["value".to_string()];
        let engine = PaginationEngine::default();

        let first = engine.paginate(&rows, &headers, 1, 10).unwrap();
        assert_eq!(first.rows, (0..10).collect::<Vec<u32>>());
        assert_eq!(first.count, 95);
        assert_eq!(first.total_pages, 10);
        assert_eq!(first.next, Some(2));
        assert_eq!(first.previous, None);

        let last = engine.paginate(&rows, &headers, 10, 10).unwrap();
        assert_eq!(last.rows.len(), 5);
        assert_eq!(last.start_index, 90);
        assert_eq!(last.end_index, 95);
        assert_eq!(last.next, None);
        assert_eq!(last.previous, Some(9));
    }

    #[test]
    fn engine_on_empty_result_set() {
        let rows: Vec<u32> = Vec::new();
        let engine = PaginationEngine::default();
        let snapshot = engine.paginate(&rows, &[], 1, 10).unwrap();
        assert!(snapshot.rows.is_empty());
        assert!(snapshot.buttons.is_empty());
        assert_eq!(snapshot.total_pages, 0);
        assert_eq!(snapshot.next, None);
        assert_eq!(snapshot.previous, None);
    }

    #[test]
    fn labels_round_trip_through_tokens() {
        let labels = PageLabels::default();
        for token in [
            ButtonToken::Page(7),
            ButtonToken::Ellipsis,
            ButtonToken::First,
            ButtonToken::Prev,
            ButtonToken::Next,
            ButtonToken::Last,
        ] {
            let label = token.label(&labels);
            assert_eq!(ButtonToken::from_label(&label, &labels), Some(token));
        }
        assert_eq!(ButtonToken::from_label("bogus", &labels), None);
        assert_eq!(ButtonToken::from_label("0", &labels), None);
    }

    #[test]
    fn numeric_looking_label_shadows_page_number() {
        let labels = PageLabels {
            prev: "7".to_string(),
            ..PageLabels::default()
        };
        assert_eq!(
            ButtonToken::from_label("7", &labels),
            Some(ButtonToken::Prev)
        );
    }
}
