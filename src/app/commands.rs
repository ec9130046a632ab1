//! Command handlers - business logic for processing UI events and responses

use crate::app::AppState;
use crate::app::state::FilterDraft;
use crate::constants::{CREATE_ERROR_MESSAGE, FETCH_ERROR_MESSAGE, MAX_EXPERIENCE_DIGITS};
use crate::messages::render::pagination_controls;
use crate::messages::ui_events::FilterField;
use crate::messages::{NetworkCommand, NetworkResponse, Operation};
use crate::models::{NewCandidate, PageQuery};
use crate::ui::candidate_card;

impl AppState {
    // ========================
    // Paging
    // ========================

    /// Start fetching `index`. Any fetch still in flight becomes stale.
    pub fn load_page(&mut self, index: u32) -> NetworkCommand {
        let id = self.next_id();
        self.page = index;
        self.loading = true;
        self.error = None;
        self.latest_fetch_id = Some(id);
        self.list_scroll = 0;

        tracing::debug!(id, page = index, "Loading page");
        NetworkCommand::SearchCandidates {
            id,
            query: PageQuery::newest_first(index, self.filters.clone()),
        }
    }

    pub fn prev_page(&mut self) -> Option<NetworkCommand> {
        let controls = pagination_controls(self.loading, self.page, self.total_pages)?;
        if !controls.prev_enabled {
            return None;
        }
        Some(self.load_page(self.page - 1))
    }

    pub fn next_page(&mut self) -> Option<NetworkCommand> {
        let controls = pagination_controls(self.loading, self.page, self.total_pages)?;
        if !controls.next_enabled {
            return None;
        }
        Some(self.load_page(self.page + 1))
    }

    pub fn refresh(&mut self) -> NetworkCommand {
        self.load_page(self.page)
    }

    // ========================
    // Create
    // ========================

    pub fn create_sample(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_creates.insert(id);
        tracing::debug!(id, "Creating sample candidate");
        NetworkCommand::CreateCandidate {
            id,
            candidate: NewCandidate::sample(),
        }
    }

    // ========================
    // Responses
    // ========================

    /// Apply a network response. May return a follow-up fetch.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        let id = response.id();
        let time_ms = response.time_ms();

        match response {
            NetworkResponse::PageLoaded { page, .. } => {
                if !self.settle_fetch(id) {
                    return None;
                }
                self.last_time_ms = Some(time_ms);
                self.records = page.content;
                self.total_pages = page.total_pages;

                // The collection shrank under us
                if self.total_pages > 0 && self.page >= self.total_pages {
                    tracing::info!(
                        page = self.page,
                        total_pages = self.total_pages,
                        "Page out of range, loading last page"
                    );
                    return Some(self.load_page(self.total_pages - 1));
                }
                None
            }
            NetworkResponse::Error { operation: Operation::Search, message, .. } => {
                if !self.settle_fetch(id) {
                    return None;
                }
                tracing::warn!(id, error = %message, "Fetch failed");
                self.last_time_ms = Some(time_ms);
                self.error = Some(String::from(FETCH_ERROR_MESSAGE));
                None
            }
            NetworkResponse::CandidateCreated { candidate, .. } => {
                if !self.pending_creates.remove(&id) {
                    return None;
                }
                tracing::info!(id, candidate = %candidate.id, "Candidate created, refreshing");
                self.last_time_ms = Some(time_ms);
                Some(self.refresh())
            }
            NetworkResponse::Error { operation: Operation::Create, message, .. } => {
                if !self.pending_creates.remove(&id) {
                    return None;
                }
                tracing::warn!(id, error = %message, "Create failed");
                self.last_time_ms = Some(time_ms);
                self.error = Some(String::from(CREATE_ERROR_MESSAGE));
                None
            }
        }
    }

    /// Returns true if `id` is the latest fetch, clearing the loading flag.
    fn settle_fetch(&mut self, id: u64) -> bool {
        if self.latest_fetch_id != Some(id) {
            tracing::debug!(id, latest = ?self.latest_fetch_id, "Discarding stale response");
            return false;
        }
        self.latest_fetch_id = None;
        self.loading = false;
        true
    }

    // ========================
    // List scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.list_scroll = self.list_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.list_scroll < self.max_scroll() {
            self.list_scroll += 1;
        }
    }

    /// Last scroll offset that still shows a line of the card list
    fn max_scroll(&self) -> u16 {
        let lines: usize = self.records.iter().map(|c| candidate_card(c).len() + 1).sum();
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    // ========================
    // Filters
    // ========================

    pub fn open_filter_input(&mut self) {
        self.filter_draft = FilterDraft::from_filters(&self.filters);
        self.filter_field = FilterField::Search;
        self.show_filter_input = true;
    }

    pub fn filter_char(&mut self, c: char) {
        if self.filter_field == FilterField::Experience
            && (!c.is_ascii_digit() || self.filter_draft.experience.len() >= MAX_EXPERIENCE_DIGITS)
        {
            return;
        }
        self.filter_draft.field_mut(self.filter_field).push(c);
    }

    pub fn filter_backspace(&mut self) {
        self.filter_draft.field_mut(self.filter_field).pop();
    }

    pub fn next_filter_field(&mut self) {
        self.filter_field = self.filter_field.next();
    }

    pub fn cancel_filter_input(&mut self) {
        self.show_filter_input = false;
    }

    /// Filters change the result set, so paging restarts at 0
    pub fn apply_filters(&mut self) -> NetworkCommand {
        self.show_filter_input = false;
        self.filters = self.filter_draft.to_filters();
        tracing::info!(filters = %self.filters.describe(), "Filters applied");
        self.load_page(0)
    }

    pub fn clear_filters(&mut self) -> Option<NetworkCommand> {
        if self.filters.is_empty() {
            return None;
        }
        self.filters = Default::default();
        Some(self.load_page(0))
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
