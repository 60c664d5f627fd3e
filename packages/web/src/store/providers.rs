//! Provider list state container.
//!
//! Reducer-style: `ProviderListState` owns the data and every change goes
//! through an explicit transition method, so the merge and mutation rules are
//! testable without a UI or a network attached. `ProvidersStore` pairs those
//! transitions with the REST client and is handed to pages through context.
//!
//! Mutations are confirmed-only: nothing is inserted, swapped, or removed
//! locally until the backend has acknowledged the operation, so a failed
//! request can never leave a ghost row behind.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::types::{Provider, ProviderDraft, ProvidersResponse};

/// Page size used by the providers screen
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// How a fetched page is merged into the current list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    /// Discard the current list and install exactly the fetched page
    Replace,
    /// Concatenate the fetched page onto the end of the current list
    /// (infinite scroll)
    Append,
}

/// Aggregate state behind the providers screen
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderListState {
    pub items: Vec<Provider>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Highest page index merged so far in append mode, or the page last
    /// requested in replace mode
    pub current_page: u32,
    pub page_size: u32,
    pub loading: bool,
    pub loading_more: bool,
    pub error: Option<String>,
    pub success_message: Option<String>,
}

impl Default for ProviderListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
            loading_more: false,
            error: None,
            success_message: None,
        }
    }
}

impl ProviderListState {
    /// Whether a page exists beyond the highest one merged so far
    pub fn has_more(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    /// Mark a page fetch as started
    pub fn begin_load(&mut self, mode: LoadMode) {
        match mode {
            LoadMode::Replace => self.loading = true,
            LoadMode::Append => self.loading_more = true,
        }
        self.error = None;
    }

    /// Merge a fetched page. A bare array counts as a single unpaginated
    /// page; envelope counters that are missing fall back to the last known
    /// values or to the length of what was returned.
    pub fn merge_page(&mut self, response: ProvidersResponse, requested_page: u32, mode: LoadMode) {
        self.loading = false;
        self.loading_more = false;

        let (new_items, total_elements, total_pages, page_index) = match response {
            ProvidersResponse::Items(items) => {
                let len = items.len() as u64;
                (items, len, 1, requested_page)
            }
            ProvidersResponse::Page(page) => {
                let len = page.content.len() as u64;
                (
                    page.content,
                    page.total_elements.unwrap_or(len),
                    page.total_pages.unwrap_or(self.total_pages.max(1)),
                    page.page_index.unwrap_or(requested_page),
                )
            }
        };

        self.total_elements = total_elements;
        self.total_pages = total_pages;
        self.current_page = page_index;

        match mode {
            LoadMode::Replace => self.items = new_items,
            // No dedup on append: the backend owns page boundaries, so an
            // overlapping page is concatenated as-is.
            LoadMode::Append => self.items.extend(new_items),
        }
    }

    /// A page fetch failed; the list stays exactly as it was
    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.loading_more = false;
        self.error = Some(message);
    }

    /// Mark a create, update, or delete as started
    pub fn begin_mutation(&mut self) {
        self.loading = true;
        self.error = None;
        self.success_message = None;
    }

    /// A confirmed create: the server-assigned record goes to the front
    pub fn apply_created(&mut self, provider: Provider) {
        self.loading = false;
        self.items.insert(0, provider);
        self.total_elements += 1;
        self.success_message = Some("Provider created successfully".to_string());
    }

    /// A confirmed update: swap the matching record in place. An id we do
    /// not hold locally still counts as success (stale-data gap, see
    /// DESIGN.md).
    pub fn apply_updated(&mut self, provider: Provider) {
        self.loading = false;
        if let Some(slot) = self.items.iter_mut().find(|p| p.id == provider.id) {
            *slot = provider;
        }
        self.success_message = Some("Provider updated successfully".to_string());
    }

    /// A confirmed delete: drop every record carrying the id
    pub fn apply_removed(&mut self, id: i64) {
        self.loading = false;
        self.items.retain(|p| p.id != id);
        self.total_elements = self.total_elements.saturating_sub(1);
        self.success_message = Some("Provider deleted successfully".to_string());
    }

    /// A create, update, or delete failed; the list stays exactly as it was
    pub fn fail_mutation(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn clear_success_message(&mut self) {
        self.success_message = None;
    }
}

/// Context-provided handle pairing the list state with the REST client
#[derive(Clone)]
pub struct ProvidersStore {
    pub state: Signal<ProviderListState>,
    client: ApiClient,
}

impl ProvidersStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            state: Signal::new(ProviderListState::default()),
            client,
        }
    }

    /// Fetch one page and merge it according to `mode`
    pub async fn load(&self, page: u32, size: u32, mode: LoadMode) {
        let mut state = self.state;
        state.write().begin_load(mode);
        match self.client.fetch_providers(page, size).await {
            Ok(response) => {
                let mut s = state.write();
                s.page_size = size;
                s.merge_page(response, page, mode);
            }
            Err(err) => state
                .write()
                .fail_load(err.user_message("Could not load providers")),
        }
    }

    /// Load the page after the highest one merged so far. Skipped while a
    /// load is already in flight or no further page exists; that call-site
    /// check is the only debounce, the state itself takes no locks.
    pub async fn load_more(&self) {
        let (skip, next_page, size) = {
            let s = self.state.peek();
            (
                s.loading || s.loading_more || !s.has_more(),
                s.current_page + 1,
                s.page_size,
            )
        };
        if skip {
            return;
        }
        self.load(next_page, size, LoadMode::Append).await;
    }

    /// Create a provider. Returns whether the backend confirmed it, so the
    /// form knows when to close.
    pub async fn create(&self, draft: ProviderDraft) -> bool {
        let mut state = self.state;
        state.write().begin_mutation();
        match self.client.create_provider(&draft).await {
            Ok(provider) => {
                state.write().apply_created(provider);
                true
            }
            Err(err) => {
                state
                    .write()
                    .fail_mutation(err.user_message("Could not create provider"));
                false
            }
        }
    }

    /// Update a provider in place. Returns whether the backend confirmed it.
    pub async fn update(&self, id: i64, draft: ProviderDraft) -> bool {
        let mut state = self.state;
        state.write().begin_mutation();
        match self.client.update_provider(id, &draft).await {
            Ok(provider) => {
                state.write().apply_updated(provider);
                true
            }
            Err(err) => {
                state
                    .write()
                    .fail_mutation(err.user_message("Could not update provider"));
                false
            }
        }
    }

    /// Delete a provider. Returns whether the backend confirmed it.
    pub async fn remove(&self, id: i64) -> bool {
        let mut state = self.state;
        state.write().begin_mutation();
        match self.client.delete_provider(id).await {
            Ok(()) => {
                state.write().apply_removed(id);
                true
            }
            Err(err) => {
                state
                    .write()
                    .fail_mutation(err.user_message("Could not delete provider"));
                false
            }
        }
    }

    pub fn clear_error(&self) {
        let mut state = self.state;
        state.write().clear_error();
    }

    pub fn clear_success_message(&self) {
        let mut state = self.state;
        state.write().clear_success_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderPage;

    fn provider(id: i64, name: &str) -> Provider {
        Provider {
            id,
            name: name.to_string(),
            legal_name: format!("{name} S.A."),
            address: format!("{name} Street 1"),
        }
    }

    fn envelope(
        items: Vec<Provider>,
        total_elements: Option<u64>,
        total_pages: Option<u32>,
        page_index: Option<u32>,
    ) -> ProvidersResponse {
        ProvidersResponse::Page(ProviderPage {
            content: items,
            total_elements,
            total_pages,
            page_index,
        })
    }

    #[test]
    fn replace_load_is_idempotent() {
        let page = || envelope(vec![provider(1, "A"), provider(2, "B")], Some(2), Some(1), Some(0));

        let mut state = ProviderListState::default();
        state.begin_load(LoadMode::Replace);
        state.merge_page(page(), 0, LoadMode::Replace);
        let first = state.items.clone();

        state.begin_load(LoadMode::Replace);
        state.merge_page(page(), 0, LoadMode::Replace);

        assert_eq!(state.items, first);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total_elements, 2);
    }

    #[test]
    fn append_accumulates_and_advances_page() {
        let mut state = ProviderListState::default();
        state.merge_page(
            envelope(vec![provider(1, "A"), provider(2, "B")], Some(4), Some(2), Some(0)),
            0,
            LoadMode::Replace,
        );

        state.begin_load(LoadMode::Append);
        assert!(state.loading_more);

        state.merge_page(
            envelope(vec![provider(3, "C"), provider(4, "D")], Some(4), Some(2), Some(1)),
            1,
            LoadMode::Append,
        );

        let ids: Vec<i64> = state.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(state.current_page, 1);
        assert!(!state.loading_more);
    }

    #[test]
    fn create_prepends_confirmed_record() {
        let mut state = ProviderListState::default();
        state.merge_page(envelope(vec![provider(1, "X")], Some(1), Some(1), Some(0)), 0, LoadMode::Replace);

        state.begin_mutation();
        state.apply_created(provider(2, "Y"));

        let ids: Vec<i64> = state.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(state.total_elements, 2);
        assert!(state.success_message.is_some());
        assert!(!state.loading);
    }

    #[test]
    fn update_swaps_matching_record_in_place() {
        let mut state = ProviderListState::default();
        state.merge_page(envelope(vec![provider(1, "A")], Some(1), Some(1), Some(0)), 0, LoadMode::Replace);

        state.begin_mutation();
        state.apply_updated(provider(1, "B"));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 1);
        assert_eq!(state.items[0].name, "B");
        assert!(state.success_message.is_some());
    }

    #[test]
    fn update_for_unknown_id_reports_success_without_touching_items() {
        let mut state = ProviderListState::default();
        state.merge_page(envelope(vec![provider(1, "A")], Some(1), Some(1), Some(0)), 0, LoadMode::Replace);
        let before = state.items.clone();

        state.begin_mutation();
        state.apply_updated(provider(99, "Ghost"));

        assert_eq!(state.items, before);
        assert!(state.success_message.is_some());
    }

    #[test]
    fn remove_filters_all_matches_and_decrements_total() {
        let mut state = ProviderListState::default();
        state.merge_page(
            envelope(vec![provider(1, "A"), provider(2, "B")], Some(2), Some(1), Some(0)),
            0,
            LoadMode::Replace,
        );

        state.begin_mutation();
        state.apply_removed(1);

        let ids: Vec<i64> = state.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(state.total_elements, 1);
        assert!(state.success_message.is_some());
    }

    #[test]
    fn has_more_tracks_the_page_boundary() {
        let mut state = ProviderListState {
            total_pages: 3,
            current_page: 1,
            ..Default::default()
        };
        assert!(state.has_more());

        state.current_page = 2;
        assert!(!state.has_more());
    }

    #[test]
    fn has_more_is_false_before_any_load() {
        assert!(!ProviderListState::default().has_more());
    }

    #[test]
    fn failed_load_leaves_everything_untouched() {
        let mut state = ProviderListState::default();
        state.merge_page(
            envelope(vec![provider(1, "A"), provider(2, "B")], Some(5), Some(3), Some(0)),
            0,
            LoadMode::Replace,
        );
        let before = state.clone();

        state.begin_load(LoadMode::Append);
        state.fail_load("boom".to_string());

        assert_eq!(state.items, before.items);
        assert_eq!(state.total_elements, before.total_elements);
        assert_eq!(state.total_pages, before.total_pages);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.loading && !state.loading_more);
    }

    #[test]
    fn failed_mutation_leaves_everything_untouched() {
        let mut state = ProviderListState::default();
        state.merge_page(envelope(vec![provider(1, "A")], Some(1), Some(1), Some(0)), 0, LoadMode::Replace);
        let before = state.clone();

        state.begin_mutation();
        state.fail_mutation("no".to_string());

        assert_eq!(state.items, before.items);
        assert_eq!(state.total_elements, before.total_elements);
        assert_eq!(state.error.as_deref(), Some("no"));
    }

    #[test]
    fn begin_load_clears_a_stale_error() {
        let mut state = ProviderListState::default();
        state.fail_load("old".to_string());

        state.begin_load(LoadMode::Replace);

        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn bare_array_counts_as_a_single_page() {
        let mut state = ProviderListState::default();
        state.merge_page(
            ProvidersResponse::Items(vec![provider(1, "A"), provider(2, "B")]),
            0,
            LoadMode::Replace,
        );

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total_elements, 2);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.current_page, 0);
        assert!(!state.has_more());
    }

    #[test]
    fn envelope_counters_are_adopted() {
        let mut state = ProviderListState::default();
        state.merge_page(
            envelope(vec![provider(1, "A")], Some(5), Some(3), Some(0)),
            0,
            LoadMode::Replace,
        );

        assert_eq!(state.total_elements, 5);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.current_page, 0);
        assert!(state.has_more());
    }

    #[test]
    fn envelope_missing_counters_fall_back_to_known_values() {
        let mut state = ProviderListState::default();
        state.merge_page(
            envelope(vec![provider(1, "A")], Some(4), Some(2), Some(0)),
            0,
            LoadMode::Replace,
        );

        // Next page arrives without counters: totals stick, the page index
        // falls back to the one requested, totalElements falls back to the
        // returned length.
        state.merge_page(
            envelope(vec![provider(2, "B")], None, None, None),
            1,
            LoadMode::Append,
        );

        assert_eq!(state.total_pages, 2);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_elements, 1);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn clearing_transient_signals_is_idempotent() {
        let mut state = ProviderListState::default();
        state.fail_load("x".to_string());
        state.clear_error();
        state.clear_error();
        assert!(state.error.is_none());

        state.apply_created(provider(1, "A"));
        state.clear_success_message();
        state.clear_success_message();
        assert!(state.success_message.is_none());
    }

    // Known race: two appends of the same page double-append. The store
    // deliberately has no guard for it; this pins the current behavior.
    #[test]
    fn double_append_keeps_duplicate_entries() {
        let mut state = ProviderListState::default();
        state.merge_page(envelope(vec![provider(1, "A")], Some(2), Some(2), Some(0)), 0, LoadMode::Replace);

        let page = || envelope(vec![provider(2, "B")], Some(2), Some(2), Some(1));
        state.merge_page(page(), 1, LoadMode::Append);
        state.merge_page(page(), 1, LoadMode::Append);

        let ids: Vec<i64> = state.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 2]);
    }
}
