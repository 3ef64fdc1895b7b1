use crate::domain::{Observation, ObservationDraft};
use crate::error::Result;

/// Append-only observation log.
///
/// The store only ever inserts: the core never issues an update to an
/// existing record, which is what makes concurrent multi-platform writes
/// commutative and order-independent. `observed_at` is assigned by the
/// store at insert time.
pub trait ObservationStore: Send + Sync {
    /// Persists each draft as a new immutable record and returns the stored
    /// observations. Partial batches (some platforms missing) are valid.
    fn insert_batch(&self, drafts: Vec<ObservationDraft>) -> Result<Vec<Observation>>;

    fn observations_for_hotel(&self, hotel_id: &str) -> Result<Vec<Observation>>;

    fn observations_for_hotels(&self, hotel_ids: &[&str]) -> Result<Vec<Observation>>;
}
