use crate::domain::Platform;
use serde::{Deserialize, Serialize};

/// A managed property. Beyond identity the core only needs the display
/// columns (name, city) and the platform listings to fetch from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

/// Where to find the hotel on one platform. The listing reference is opaque
/// to us, it is passed through to the rating provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub platform: Platform,
    pub listing_ref: String,
}

/// A named set of hotels. Membership is resolved to ids in the portfolio
/// file; the scoring engine only ever sees the member id list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub hotel_ids: Vec<String>,
}
