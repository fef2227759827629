use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Location};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub token: Uuid,
    pub origin: Location,
    pub destination: Location,
    pub path: Vec<Coordinates>,
    pub distance_km: f64,
}

impl Route {
    pub fn new(
        origin: Location,
        destination: Location,
        path: Vec<Coordinates>,
        distance_km: f64,
    ) -> Self {
        Self {
            token: Uuid::new_v4(),
            origin,
            destination,
            path,
            distance_km,
        }
    }

    /// The degraded form used when the directions lookup fails or returns
    /// no route. Valid everywhere a real route is: it reaches the
    /// confirmable state and prices to zero.
    pub fn fallback(origin: Location, destination: Location) -> Self {
        Self::new(origin, destination, Vec::new(), 0.0)
    }
}
