mod provider;
mod storage;

pub use provider::{HttpRatingProvider, ProviderRating, RatingProvider};
pub use storage::fs_store::FileSystemStore;
