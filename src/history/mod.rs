//! Prediction history — the state core behind the history screen.
//!
//! Store → filter → paginator is a pure derivation pipeline: filtered
//! list, page count, and the visible window are recomputed from current
//! inputs on demand instead of cached in mutable fields, so there is no
//! invalidation logic to scatter around. The aggregator reads the full
//! store independently of the active filter.

pub mod filter;
pub mod pagination;
pub mod stats;
pub mod store;

pub use filter::CategoryFilter;
pub use pagination::{PageControls, Paginator};
pub use stats::{DashboardSummary, HistoryStats};
pub use store::{HistoryStore, LoadTicket};

use crate::api::{ApiError, PlatformApi};
use crate::models::PredictionRecord;
use crate::session::AuthSession;

/// Page-level owner of the history screen's state.
///
/// Two invariants are enforced here rather than in the UI layer:
/// the current page resets to 1 whenever the filtered set's identity
/// changes (filter switch, reload, delete), and a delete only mutates
/// the store after the backend confirmed it.
#[derive(Debug, Default)]
pub struct HistoryView {
    store: HistoryStore,
    filter: CategoryFilter,
    pager: Paginator,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Reload the store for the current credential. Signed out is a
    /// valid terminal state: empty store, no network call. When several
    /// refreshes overlap, only the most recently initiated one lands
    /// (see `HistoryStore::complete_load`).
    pub async fn refresh<A: PlatformApi>(&mut self, api: &A, session: &AuthSession) {
        let Some(token) = session.token() else {
            self.store.clear_for_signed_out();
            self.pager.reset();
            return;
        };

        let ticket = self.store.begin_load();
        let result = api.fetch_history(token).await;
        if self.store.complete_load(ticket, result) {
            self.pager.reset();
        }
    }

    // ── User actions ─────────────────────────────────────────────────

    /// Select a category filter. Always lands on page 1.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.pager.reset();
    }

    /// Jump to a page of the current filtered view. Out-of-range
    /// requests leave the page unchanged.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let len = self.filtered().len();
        self.pager.go_to(page, len)
    }

    /// Delete a record: backend first, then the local store. The store
    /// is untouched when the backend refuses, and a confirmed removal
    /// resets pagination because the filtered set changed.
    pub async fn delete<A: PlatformApi>(
        &mut self,
        api: &A,
        session: &AuthSession,
        id: &str,
    ) -> Result<(), ApiError> {
        let token = session.token().ok_or(ApiError::NotAuthenticated)?;

        api.delete_prediction(token, id).await?;
        if self.store.remove(id) {
            self.pager.reset();
        }
        Ok(())
    }

    // ── Derived views ────────────────────────────────────────────────

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// The filtered list, order preserved from the store.
    pub fn filtered(&self) -> Vec<&PredictionRecord> {
        filter::apply(self.store.records(), self.filter)
    }

    /// The records visible on the current page.
    pub fn page(&self) -> Vec<&PredictionRecord> {
        let filtered = self.filtered();
        self.pager.page(&filtered).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered().len())
    }

    /// "Showing X to Y of Z" bounds over the filtered list.
    pub fn range_info(&self) -> (usize, usize) {
        self.pager.range_info(self.filtered().len())
    }

    pub fn page_controls(&self) -> PageControls {
        self.pager.controls(self.filtered().len())
    }

    /// Stat-card numbers over the full unfiltered store.
    pub fn stats(&self) -> HistoryStats {
        HistoryStats::compute(self.store.records())
    }

    pub fn records(&self) -> &[PredictionRecord] {
        self.store.records()
    }

    pub fn error(&self) -> Option<&str> {
        self.store.error()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPlatformApi;
    use crate::models::DementiaCategory;
    use crate::session::UserProfile;

    fn record(id: &str, category: DementiaCategory) -> PredictionRecord {
        PredictionRecord {
            id: id.into(),
            user_id: "u1".into(),
            category,
            confidence: 88.0,
            created_at: "2025-03-08T10:30:00Z".into(),
            image_url: None,
            details: None,
        }
    }

    fn signed_in() -> AuthSession {
        let mut session = AuthSession::new();
        session.log_in(
            "jwt-abc".into(),
            UserProfile {
                id: "u1".into(),
                name: "Alice".into(),
                email: "alice@example.com".into(),
            },
        );
        session
    }

    fn bulk(count: usize, category: DementiaCategory) -> Vec<PredictionRecord> {
        (0..count)
            .map(|i| record(&format!("r{i}"), category))
            .collect()
    }

    #[tokio::test]
    async fn refresh_loads_records_for_signed_in_session() {
        let api = MockPlatformApi::new().with_history(bulk(3, DementiaCategory::NonDemented));
        let mut view = HistoryView::new();

        view.refresh(&api, &signed_in()).await;
        assert_eq!(view.records().len(), 3);
        assert!(view.error().is_none());
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn refresh_signed_out_is_empty_without_network() {
        let api = MockPlatformApi::new().failing("should never be called");
        let mut view = HistoryView::new();

        view.refresh(&api, &AuthSession::new()).await;
        assert!(view.records().is_empty());
        assert!(view.error().is_none());
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn fetch_failure_shows_message_and_zeroed_stats() {
        let api = MockPlatformApi::new().failing("Database unavailable");
        let mut view = HistoryView::new();

        view.refresh(&api, &signed_in()).await;
        assert!(view.records().is_empty());
        assert_eq!(view.error(), Some("Database unavailable"));

        let stats = view.stats();
        assert_eq!(stats.total_scans, 0);
        assert_eq!(stats.average_confidence_display(), "0.0%");
    }

    #[tokio::test]
    async fn forty_five_records_paginate_into_three_pages() {
        let api = MockPlatformApi::new().with_history(bulk(45, DementiaCategory::NonDemented));
        let mut view = HistoryView::new();
        view.refresh(&api, &signed_in()).await;

        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.page().len(), 20);
        assert_eq!(view.range_info(), (1, 20));

        assert!(view.go_to_page(3));
        assert_eq!(view.page().len(), 5);
        assert_eq!(view.range_info(), (41, 45));
        assert_eq!(view.page()[0].id, "r40");
    }

    #[tokio::test]
    async fn filter_change_resets_to_first_page() {
        let mut records = bulk(40, DementiaCategory::NonDemented);
        records.push(record("mild", DementiaCategory::MildDementia));
        let api = MockPlatformApi::new().with_history(records);

        let mut view = HistoryView::new();
        view.refresh(&api, &signed_in()).await;
        assert!(view.go_to_page(2));

        view.set_filter(CategoryFilter::Only(DementiaCategory::MildDementia));
        assert_eq!(view.current_page(), 1);
        let page = view.page();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "mild");
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page_controls().pages, vec![1]);
    }

    #[tokio::test]
    async fn stats_ignore_the_active_filter() {
        let mut records = bulk(7, DementiaCategory::NonDemented);
        records.extend(bulk(3, DementiaCategory::MildDementia));
        let api = MockPlatformApi::new().with_history(records);

        let mut view = HistoryView::new();
        view.refresh(&api, &signed_in()).await;
        view.set_filter(CategoryFilter::Only(DementiaCategory::MildDementia));

        assert_eq!(view.filtered().len(), 3);
        let stats = view.stats();
        assert_eq!(stats.total_scans, 10);
        assert_eq!(stats.non_demented, 7);
    }

    #[tokio::test]
    async fn delete_confirms_on_backend_then_updates_store() {
        let api = MockPlatformApi::new().with_history(bulk(41, DementiaCategory::NonDemented));
        let mut view = HistoryView::new();
        let session = signed_in();
        view.refresh(&api, &session).await;

        // 41 records: page 3 holds exactly one record.
        assert_eq!(view.total_pages(), 3);
        assert!(view.go_to_page(3));
        assert_eq!(view.page().len(), 1);

        view.delete(&api, &session, "r40").await.unwrap();
        assert_eq!(api.deleted_prediction_ids(), vec!["r40".to_string()]);
        assert_eq!(view.records().len(), 40);
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.current_page(), 1);
    }

    #[tokio::test]
    async fn failed_backend_delete_leaves_store_untouched() {
        let api = MockPlatformApi::new().with_history(bulk(3, DementiaCategory::NonDemented));
        let mut view = HistoryView::new();
        let session = signed_in();
        view.refresh(&api, &session).await;

        let failing = MockPlatformApi::new().failing("Prediction not found");
        let err = view.delete(&failing, &session, "r0").await.unwrap_err();
        assert_eq!(err.to_string(), "Prediction not found");
        assert_eq!(view.records().len(), 3);
    }

    #[tokio::test]
    async fn delete_requires_a_credential() {
        let api = MockPlatformApi::new();
        let mut view = HistoryView::new();

        let err = view
            .delete(&api, &AuthSession::new(), "r0")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
        assert!(api.deleted_prediction_ids().is_empty());
    }
}
