//! Click handling for pagination buttons.
//!
//! A renderer reports clicks either as typed [`ButtonToken`]s or as the raw
//! label strings it drew; both resolve to a target page here. Resolution is
//! pure: the caller updates its own page state and triggers the next
//! recomputation.

use crate::pagination::{ButtonToken, Paginated};

/// Outcome of resolving a clicked pagination button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Navigate to this 1-indexed page.
    Go(usize),
    /// The click does not navigate anywhere.
    Ignore,
}

impl NavTarget {
    pub fn page(self) -> Option<usize> {
        match self {
            NavTarget::Go(page) => Some(page),
            NavTarget::Ignore => None,
        }
    }
}

/// Maps a clicked button back to the page it navigates to.
///
/// `Prev`/`Next` resolve through the snapshot's `previous`/`next` fields,
/// so a forced `Prev` on page one is ignored rather than underflowing.
/// `Last` on an empty result set is likewise ignored.
pub fn resolve_target<T>(token: ButtonToken, current: &Paginated<T>) -> NavTarget {
    match token {
        ButtonToken::Page(page) => NavTarget::Go(page),
        ButtonToken::Ellipsis => NavTarget::Ignore,
        ButtonToken::First => NavTarget::Go(1),
        ButtonToken::Prev => current.previous.map_or(NavTarget::Ignore, NavTarget::Go),
        ButtonToken::Next => current.next.map_or(NavTarget::Ignore, NavTarget::Go),
        ButtonToken::Last if current.total_pages > 0 => NavTarget::Go(current.total_pages),
        ButtonToken::Last => NavTarget::Ignore,
    }
}

/// Resolves a raw clicked label against the snapshot's own labels.
///
/// Label matches take precedence over numeric parsing (see
/// [`ButtonToken::from_label`]); unrecognized labels are ignored.
pub fn resolve_label<T>(label: &str, current: &Paginated<T>) -> NavTarget {
    match ButtonToken::from_label(label, &current.labels) {
        Some(token) => resolve_target(token, current),
        None => NavTarget::Ignore,
    }
}
