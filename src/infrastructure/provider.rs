use crate::domain::{Listing, NativeScale};
use crate::error::{Result, ScoreError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// What the provider knows about one listing: a raw rating in the scale it
/// tags, and the review volume behind it.
#[derive(Debug, Clone)]
pub struct ProviderRating {
    pub rating: f64,
    pub review_count: u64,
    /// Explicit scale tag. When the provider omits it we fall back to the
    /// platform's default scale rather than guessing from the value.
    pub scale: Option<NativeScale>,
}

/// The opaque rating source. How ratings are obtained (search, scraping,
/// official APIs) is entirely the provider's business.
#[async_trait]
pub trait RatingProvider: Send + Sync {
    /// `Ok(None)` means the provider could not determine a rating at all.
    /// That produces no observation downstream — absence, not zero.
    async fn fetch_rating(&self, listing: &Listing) -> Result<Option<ProviderRating>>;
}

#[derive(Debug, Deserialize)]
struct RatingResponse {
    rating: Option<f64>,
    review_count: Option<u64>,
    scale: Option<NativeScale>,
}

pub struct HttpRatingProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpRatingProvider {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl RatingProvider for HttpRatingProvider {
    async fn fetch_rating(&self, listing: &Listing) -> Result<Option<ProviderRating>> {
        let url = format!(
            "{}/ratings/{}/{}",
            self.base_url,
            listing.platform.as_str(),
            listing.listing_ref
        );

        let mut request = self.client.get(&url);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ScoreError::Provider(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let body: RatingResponse = response.json().await?;
        match body.rating {
            Some(rating) => Ok(Some(ProviderRating {
                rating,
                review_count: body.review_count.unwrap_or(0),
                scale: body.scale,
            })),
            None => {
                debug!("provider has no rating for {}", url);
                Ok(None)
            }
        }
    }
}
