use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lat, coordinates.lng)
    }
}

/// A resolved endpoint: coordinates plus the human-readable label the
/// passenger picked it by. Held in the locations KV store so routes can
/// reference endpoints by token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub token: Uuid,
    pub coordinates: Coordinates,
    pub description: String,
}

impl Location {
    pub fn new(coordinates: Coordinates, description: String) -> Self {
        Self {
            token: Uuid::new_v4(),
            coordinates,
            description,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationSource {
    Coordinates(Coordinates),
    GooglePlaces {
        place_id: String,
        session_token: String,
    },
}
