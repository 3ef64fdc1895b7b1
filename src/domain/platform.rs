use serde::{Deserialize, Serialize};
use std::fmt;

/// The four review platforms we track. Closed set: adding a platform means
/// adding a variant plus its default scale, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Google,
    Tripadvisor,
    Booking,
    Expedia,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Google,
        Platform::Tripadvisor,
        Platform::Booking,
        Platform::Expedia,
    ];

    /// The scale the platform natively reports in, used when the provider
    /// response carries no explicit scale tag.
    pub fn default_scale(&self) -> NativeScale {
        match self {
            Platform::Google | Platform::Tripadvisor | Platform::Expedia => NativeScale::FiveStar,
            Platform::Booking => NativeScale::TenPoint,
        }
    }

    /// Wire identifier, matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Google => "google",
            Platform::Tripadvisor => "tripadvisor",
            Platform::Booking => "booking",
            Platform::Expedia => "expedia",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Google => "Google",
            Platform::Tripadvisor => "TripAdvisor",
            Platform::Booking => "Booking.com",
            Platform::Expedia => "Expedia",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The rating scale a raw value was reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeScale {
    /// 1 to 5 stars.
    FiveStar,
    /// 0 to 10 points. Some sources report this as 0 to 100.
    TenPoint,
}
