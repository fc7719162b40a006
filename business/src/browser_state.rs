//! State for the request browser panel.
//!
//! This lives in `triage-business` so UI code can remain "dumb":
//! - UI reads state and renders
//! - UI issues network calls from a single dispatch point (`take_pending_fetch`)
//! - Pagination, search and action-reset rules all live here
//!
//! Fetches are identified by a monotonically increasing generation token.
//! A response is only applied when it carries the latest token, so a slow
//! response from an earlier keystroke can never overwrite newer data.

use std::any::Any;

use chrono::{DateTime, Utc};
use triage_states::State;

use crate::RequestItem;

/// Fixed page size of the listing endpoint.
pub const PAGE_SIZE: u64 = 10;

/// State for the request browser panel.
///
/// Stored in `StateCtx` and accessed via `state_mut::<RequestBrowserState>()`.
#[derive(Debug)]
pub struct RequestBrowserState {
    /// Page currently shown, 1-based.
    current_page: u64,

    /// True once the operator has typed into the search box. Stays true even
    /// when the box is cleared, until an approve/reject resets it.
    search_active: bool,

    /// Last submitted search string, already trimmed.
    search_query: String,

    /// Raw edit buffer bound to the search box.
    search_input: String,

    /// Rows of the last applied page.
    requests: Vec<RequestItem>,

    /// Total item count reported with the last applied page.
    total_items: u64,

    /// Whether a fetch is in flight.
    is_fetching: bool,

    /// Whether the panel should issue a fetch on its next render.
    pending_fetch: bool,

    /// Generation token of the most recently issued fetch.
    fetch_generation: u64,

    /// Request shown in the detail popup, if any.
    selected: Option<RequestItem>,

    /// When the last page was applied, from the mockable `Time` state.
    last_fetch: Option<DateTime<Utc>>,
}

impl Default for RequestBrowserState {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_active: false,
            search_query: String::new(),
            search_input: String::new(),
            requests: Vec::new(),
            total_items: 0,
            is_fetching: false,
            // Fetch the first unfiltered page as soon as the panel renders.
            pending_fetch: true,
            fetch_generation: 0,
            selected: None,
            last_fetch: None,
        }
    }
}

impl State for RequestBrowserState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl RequestBrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    // =====================
    // Fetch lifecycle
    // =====================

    /// Schedule a fetch for the panel's next render.
    pub fn request_fetch(&mut self) {
        self.pending_fetch = true;
    }

    /// Consume the pending-fetch flag. The panel calls this once per frame
    /// and is the only place network calls are issued from.
    pub fn take_pending_fetch(&mut self) -> bool {
        std::mem::take(&mut self.pending_fetch)
    }

    /// Mark a fetch as started and return its generation token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.is_fetching = true;
        self.fetch_generation
    }

    /// Apply a fetched page.
    ///
    /// A page carrying anything but the latest generation token is stale and
    /// is discarded. Takes `now` as a parameter to allow test mockability via
    /// the `Time` state.
    pub fn apply_page(
        &mut self,
        generation: u64,
        requests: Vec<RequestItem>,
        total_items: u64,
        now: DateTime<Utc>,
    ) {
        if generation != self.fetch_generation {
            log::debug!(
                "discarding stale page response (generation {generation}, latest {})",
                self.fetch_generation
            );
            return;
        }
        self.requests = requests;
        self.total_items = total_items;
        self.is_fetching = false;
        self.last_fetch = Some(now);
    }

    // =====================
    // Search
    // =====================

    /// Submit the current contents of the search box.
    ///
    /// Called on every keystroke: marks search as active (an empty string
    /// counts), trims the text, jumps back to page 1 and schedules a
    /// re-query.
    pub fn submit_search(&mut self) {
        self.search_active = true;
        self.search_query = self.search_input.trim().to_owned();
        self.current_page = 1;
        self.request_fetch();
    }

    // =====================
    // Pagination
    // =====================

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.request_fetch();
        }
    }

    pub fn next_page(&mut self) {
        self.current_page += 1;
        self.request_fetch();
    }

    /// `[start, end]` range of item numbers for the current page.
    ///
    /// `start` is the raw 1-based formula; `end` clamps to the total.
    pub fn page_window(&self) -> (u64, u64) {
        let start = (self.current_page - 1) * PAGE_SIZE + 1;
        let end = (start + PAGE_SIZE - 1).min(self.total_items);
        (start, end)
    }

    /// Pagination summary, `"{start}-{end} of {total}"`.
    ///
    /// When the page has no rows the displayed start is forced to 0 while the
    /// end keeps the raw formula. That asymmetry is load-bearing: callers
    /// display exactly this string.
    pub fn pagination_text(&self) -> String {
        let (start, end) = self.page_window();
        let start = if self.requests.is_empty() { 0 } else { start };
        format!("{start}-{end} of {}", self.total_items)
    }

    /// Enablement of the (prev, next) pagination buttons.
    ///
    /// Two rules applied in order, last write wins:
    /// 1. an active search spanning more than one page follows the plain
    ///    boundary rule (prev locked on page 1, next locked at the end);
    ///    any other search outcome locks both buttons;
    /// 2. browsing without a search re-applies the boundary rule but also
    ///    locks both buttons when everything fits on one page.
    pub fn pagination_buttons(&self) -> (bool, bool) {
        let (_, end) = self.page_window();
        let total = self.total_items;

        let mut prev_disabled;
        let mut next_disabled;

        if self.search_active && total > PAGE_SIZE {
            prev_disabled = self.current_page == 1;
            next_disabled = end == total;
        } else {
            prev_disabled = true;
            next_disabled = true;
        }

        if !self.search_active {
            prev_disabled = self.current_page == 1 || total == 0 || total <= PAGE_SIZE;
            next_disabled = end == total || total == 0 || total <= PAGE_SIZE;
        }

        (!prev_disabled, !next_disabled)
    }

    /// Sequential display number for the row at `index` on the current page.
    pub fn display_number(&self, index: usize) -> u64 {
        (self.current_page - 1) * PAGE_SIZE + index as u64 + 1
    }

    // =====================
    // Actions
    // =====================

    /// An approve/reject succeeded: return the view to the default state.
    ///
    /// Page 1, search fully cleared (flag, query and edit buffer), and an
    /// unfiltered refetch scheduled. Failed actions never reach this point;
    /// they are logged only and leave the view untouched.
    pub fn on_action_success(&mut self) {
        self.current_page = 1;
        self.search_active = false;
        self.search_query.clear();
        self.search_input.clear();
        self.request_fetch();
    }

    // =====================
    // Detail popup
    // =====================

    pub fn open_detail(&mut self, request: RequestItem) {
        self.selected = Some(request);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&RequestItem> {
        self.selected.as_ref()
    }

    // =====================
    // Accessors
    // =====================

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn requests(&self) -> &[RequestItem] {
        &self.requests
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn search_active(&self) -> bool {
        self.search_active
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Edit buffer for binding to the search box widget.
    pub fn search_input_mut(&mut self) -> &mut String {
        &mut self.search_input
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    /// Whether the "no results" message should be visible: a completed fetch
    /// returned zero rows. Nothing is shown while the first fetch is still in
    /// flight.
    pub fn show_no_results(&self) -> bool {
        !self.is_fetching && self.last_fetch.is_some() && self.requests.is_empty()
    }
}
