//! App state - pure data structure with no I/O logic

use std::collections::HashSet;

use crate::constants::DEFAULT_BASE_URL;
use crate::messages::ui_events::FilterField;
use crate::messages::RenderState;
use crate::models::{Candidate, Filters};

/// Text being typed into the filter popup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub search: String,
    pub skills: String,
    /// Digits only
    pub experience: String,
    pub location: String,
}

impl FilterDraft {
    pub fn from_filters(filters: &Filters) -> Self {
        FilterDraft {
            search: filters.search.clone().unwrap_or_default(),
            skills: filters.skills.clone().unwrap_or_default(),
            experience: filters.experience.map(|y| y.to_string()).unwrap_or_default(),
            location: filters.location.clone().unwrap_or_default(),
        }
    }

    /// Blank fields become `None`
    pub fn to_filters(&self) -> Filters {
        fn non_blank(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        Filters {
            search: non_blank(&self.search),
            skills: non_blank(&self.skills),
            experience: self.experience.trim().parse().ok(),
            location: non_blank(&self.location),
        }
    }

    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Skills => &self.skills,
            FilterField::Experience => &self.experience,
            FilterField::Location => &self.location,
        }
    }

    pub fn field_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Search => &mut self.search,
            FilterField::Skills => &mut self.skills,
            FilterField::Experience => &mut self.experience,
            FilterField::Location => &mut self.location,
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub base_url: String,

    // View state
    pub records: Vec<Candidate>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub total_pages: u32,

    // Request bookkeeping
    pub next_request_id: u64,
    /// Id of the most recently issued fetch; only its response is applied
    pub latest_fetch_id: Option<u64>,
    pub pending_creates: HashSet<u64>,
    pub last_time_ms: Option<u64>,

    // List
    pub list_scroll: u16,

    // Filters
    pub filters: Filters,
    pub filter_draft: FilterDraft,
    pub filter_field: FilterField,
    pub show_filter_input: bool,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        AppState {
            base_url: base_url.into(),
            records: Vec::new(),
            loading: false,
            error: None,
            page: 0,
            total_pages: 0,
            next_request_id: 1,
            latest_fetch_id: None,
            pending_creates: HashSet::new(),
            last_time_ms: None,
            list_scroll: 0,
            filters: Filters::default(),
            filter_draft: FilterDraft::default(),
            filter_field: FilterField::Search,
            show_filter_input: false,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            base_url: self.base_url.clone(),
            records: self.records.clone(),
            loading: self.loading,
            error: self.error.clone(),
            page: self.page,
            total_pages: self.total_pages,
            creating: !self.pending_creates.is_empty(),
            last_time_ms: self.last_time_ms,
            list_scroll: self.list_scroll,
            filters: self.filters.clone(),
            show_filter_input: self.show_filter_input,
            filter_draft: self.filter_draft.clone(),
            filter_field: self.filter_field,
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_round_trips_through_filters() {
        let draft = FilterDraft {
            search: "  rust ".into(),
            skills: String::new(),
            experience: "4".into(),
            location: "Berlin".into(),
        };
        let filters = draft.to_filters();
        assert_eq!(filters.search.as_deref(), Some("rust"));
        assert_eq!(filters.skills, None);
        assert_eq!(filters.experience, Some(4));
        assert_eq!(FilterDraft::from_filters(&filters).search, "rust");
    }

    #[test]
    fn test_request_ids_increase() {
        let mut state = AppState::default();
        let a = state.next_id();
        let b = state.next_id();
        assert!(b > a);
    }
}
