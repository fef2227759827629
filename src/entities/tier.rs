use serde::{Deserialize, Serialize};

/// A catalog entry the passenger picks for the trip. Immutable once
/// fetched; the rate is trusted as-is from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarTier {
    pub name: String,
    pub rate_per_km: f64,
    pub image_url: String,
}
