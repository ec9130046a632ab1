//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::FilterDraft;
use crate::constants::DEFAULT_BASE_URL;
use crate::messages::ui_events::FilterField;
use crate::models::{Candidate, Filters};

/// Mutually exclusive presentation of the candidate list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Fetch in flight; list and pagination are hidden
    Loading,
    /// Banner shown above whatever records are cached
    Error,
    /// No records on this page
    Empty,
    /// One card per record
    Ready,
}

/// Pagination controls as displayed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Controls are only shown when not loading and there is more than one page.
///
/// Both the renderer and the page-change handlers go through this, so a
/// disabled control can never issue a request.
pub fn pagination_controls(loading: bool, page: u32, total_pages: u32) -> Option<PaginationView> {
    if loading || total_pages <= 1 {
        return None;
    }
    Some(PaginationView {
        label: format!("Page {} of {}", page + 1, total_pages),
        prev_enabled: page > 0,
        next_enabled: page + 1 < total_pages,
    })
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub base_url: String,

    // View state
    pub records: Vec<Candidate>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub total_pages: u32,

    /// At least one create is in flight
    pub creating: bool,
    pub last_time_ms: Option<u64>,
    pub list_scroll: u16,

    // Filters
    pub filters: Filters,
    pub show_filter_input: bool,
    pub filter_draft: FilterDraft,
    pub filter_field: FilterField,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn presentation(&self) -> Presentation {
        if self.loading {
            Presentation::Loading
        } else if self.error.is_some() {
            Presentation::Error
        } else if self.records.is_empty() {
            Presentation::Empty
        } else {
            Presentation::Ready
        }
    }

    pub fn pagination(&self) -> Option<PaginationView> {
        pagination_controls(self.loading, self.page, self.total_pages)
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            base_url: String::from(DEFAULT_BASE_URL),
            records: Vec::new(),
            // The first fetch is issued on startup
            loading: true,
            error: None,
            page: 0,
            total_pages: 0,
            creating: false,
            last_time_ms: None,
            list_scroll: 0,
            filters: Filters::default(),
            show_filter_input: false,
            filter_draft: FilterDraft::default(),
            filter_field: FilterField::Search,
            show_help: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_controls_for_single_or_zero_pages() {
        assert_eq!(pagination_controls(false, 0, 0), None);
        assert_eq!(pagination_controls(false, 0, 1), None);
    }

    #[test]
    fn test_no_controls_while_loading() {
        assert_eq!(pagination_controls(true, 0, 5), None);
    }

    #[test]
    fn test_first_and_last_page_controls() {
        let first = pagination_controls(false, 0, 2).unwrap();
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);
        assert_eq!(first.label, "Page 1 of 2");

        let last = pagination_controls(false, 1, 2).unwrap();
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);
    }

    #[test]
    fn test_presentation_priority() {
        let mut state = RenderState::default();
        state.error = Some("boom".into());
        assert_eq!(state.presentation(), Presentation::Loading);

        state.loading = false;
        assert_eq!(state.presentation(), Presentation::Error);

        state.error = None;
        assert_eq!(state.presentation(), Presentation::Empty);
    }
}
