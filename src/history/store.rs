use crate::api::ApiError;
use crate::models::PredictionRecord;

/// Ticket identifying one load attempt. Completing a ticket after a
/// newer load began is ignored, so an abandoned fetch that resolves late
/// can never overwrite fresher data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Authoritative record list for the current session.
///
/// Single source of truth for the history screen: the filter and
/// paginator only compute views over it and never write back. Fetch
/// failures collapse to a display message here; downstream stages always
/// see a well-formed (possibly empty) list.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<PredictionRecord>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a load attempt, invalidating any outstanding ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Apply a load result. Returns false — and changes nothing — when a
    /// newer load superseded this ticket. On success the list is
    /// replaced wholesale; on failure it empties and the message is kept
    /// for display.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<PredictionRecord>, ApiError>,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale history load"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "history loaded");
                self.error = None;
                self.records = records;
            }
            Err(err) => {
                tracing::warn!(error = %err, "history fetch failed");
                self.records.clear();
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// No credential: a valid terminal state with an empty list and no
    /// network call. Also invalidates any load still in flight for the
    /// previous credential.
    pub fn clear_for_signed_out(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.records.clear();
        self.error = None;
    }

    /// Remove exactly one record by id, locally. The caller is
    /// responsible for any backend delete before this.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }
}
