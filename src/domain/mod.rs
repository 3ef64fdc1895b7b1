mod hotel;
mod observation;
mod platform;
mod score;
pub mod storage;

pub use hotel::{Group, Hotel, Listing};
pub use observation::{Observation, ObservationDraft};
pub use platform::{NativeScale, Platform};
pub use score::{CompositeScore, GroupAggregate, PlatformScore, TrendPoint};
