use crate::domain::storage::ObservationStore;
use crate::domain::{Hotel, ObservationDraft, Platform};
use crate::error::{Result, ScoreError};
use crate::infrastructure::RatingProvider;
use crate::services::normalize::normalize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

/// One platform fetch that did not produce an observation.
#[derive(Debug)]
pub struct RefreshFailure {
    pub hotel_id: String,
    pub platform: Platform,
    pub reason: String,
}

/// What a bulk refresh accomplished. Failures sit next to the successes:
/// there is no all-or-nothing transaction across platforms.
#[derive(Debug, Default)]
pub struct RefreshOutcome {
    pub stored: usize,
    pub failures: Vec<RefreshFailure>,
}

/// Pulls fresh ratings for a set of hotels through the provider boundary
/// and appends them to the observation log.
///
/// Per hotel the four platform fetches fan out concurrently; between hotels
/// a fixed delay throttles the provider. Throttling is this caller's policy,
/// the scoring engine accepts observations in any order.
pub struct RefreshService {
    provider: Arc<dyn RatingProvider>,
    store: Arc<dyn ObservationStore>,
    delay: Duration,
}

impl RefreshService {
    pub fn new(
        provider: Arc<dyn RatingProvider + 'static>,
        store: Arc<dyn ObservationStore + 'static>,
        delay: Duration,
    ) -> Self {
        Self {
            provider,
            store,
            delay,
        }
    }

    pub async fn refresh_all(&self, hotels: &[Hotel]) -> Result<RefreshOutcome> {
        let pb = ProgressBar::new(hotels.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| ScoreError::Other(e.to_string()))?,
        );

        let mut outcome = RefreshOutcome::default();

        for hotel in hotels {
            pb.set_message(format!("Fetching {}", hotel.name));

            let (drafts, failures) = self.fetch_hotel(hotel).await;

            // Successful platforms are persisted even when siblings failed.
            let stored = self.store.insert_batch(drafts)?;
            outcome.stored += stored.len();
            outcome.failures.extend(failures);

            pb.inc(1);
            sleep(self.delay).await;
        }

        pb.finish_with_message("Refresh done");

        for failure in &outcome.failures {
            warn!(
                "{} on {} failed: {}",
                failure.hotel_id, failure.platform, failure.reason
            );
        }

        Ok(outcome)
    }

    /// Fan-out/fan-in over one hotel's platform listings.
    pub async fn fetch_hotel(
        &self,
        hotel: &Hotel,
    ) -> (Vec<ObservationDraft>, Vec<RefreshFailure>) {
        let mut handles = Vec::with_capacity(hotel.listings.len());

        for listing in hotel.listings.clone() {
            let provider = Arc::clone(&self.provider);
            let platform = listing.platform;
            handles.push((
                platform,
                tokio::spawn(async move {
                    let fetched = provider.fetch_rating(&listing).await;
                    (listing, fetched)
                }),
            ));
        }

        let mut drafts = Vec::new();
        let mut failures = Vec::new();

        for (platform, handle) in handles {
            let (listing, fetched) = match handle.await {
                Ok(pair) => pair,
                Err(e) => {
                    failures.push(RefreshFailure {
                        hotel_id: hotel.id.clone(),
                        platform,
                        reason: format!("fetch task panicked: {e}"),
                    });
                    continue;
                }
            };

            match fetched {
                Ok(Some(rating)) => {
                    let scale = rating
                        .scale
                        .unwrap_or_else(|| listing.platform.default_scale());

                    let draft = ObservationDraft {
                        hotel_id: hotel.id.clone(),
                        platform: listing.platform,
                        raw_rating: rating.rating,
                        normalized_rating: normalize(rating.rating, scale),
                        review_count: rating.review_count,
                    };

                    match draft.validate() {
                        Ok(()) => drafts.push(draft),
                        Err(e) => failures.push(RefreshFailure {
                            hotel_id: hotel.id.clone(),
                            platform: listing.platform,
                            reason: e.to_string(),
                        }),
                    }
                }
                // No determinable rating: absence, not a zero-rated record.
                Ok(None) => {
                    debug!("no rating for {} on {}", hotel.id, listing.platform);
                }
                Err(e) => failures.push(RefreshFailure {
                    hotel_id: hotel.id.clone(),
                    platform: listing.platform,
                    reason: e.to_string(),
                }),
            }
        }

        (drafts, failures)
    }
}
