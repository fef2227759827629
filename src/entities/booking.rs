use chrono::{DateTime, Utc};
use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{CarTier, Coordinates, Route};
use crate::pricing;

/// The persisted record of a confirmed trip request. Created exactly once
/// and never mutated by this service; `driver_name`/`driver_mobile` are
/// filled in later by the dispatch process.
#[derive(Clone, Debug, Serialize, Deserialize, PolarClass)]
pub struct Booking {
    #[polar(attribute)]
    pub id: Uuid,
    #[polar(attribute)]
    pub user_id: Uuid,
    pub from_description: String,
    pub to_description: String,
    pub from: Coordinates,
    pub to: Coordinates,
    pub car_tier: String,
    pub distance_km: f64,
    pub rate_per_km: f64,
    pub total_price: i64,
    pub driver_name: String,
    pub driver_mobile: String,
    pub timestamp: DateTime<Utc>,
}

impl Booking {
    pub fn new(user_id: Uuid, route: &Route, tier: &CarTier, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            from_description: route.origin.description.clone(),
            to_description: route.destination.description.clone(),
            from: route.origin.coordinates,
            to: route.destination.coordinates,
            car_tier: tier.name.clone(),
            distance_km: route.distance_km,
            rate_per_km: tier.rate_per_km,
            total_price: pricing::total_price(tier.rate_per_km, route.distance_km),
            driver_name: String::new(),
            driver_mobile: String::new(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Location;

    fn route(distance_km: f64) -> Route {
        let origin = Location::new(Coordinates { lat: 40.7128, lng: -74.0060 }, "origin".into());
        let destination = Location::new(Coordinates { lat: 40.6413, lng: -73.7781 }, "destination".into());
        Route::new(origin, destination, Vec::new(), distance_km)
    }

    #[test]
    fn price_invariant_holds_at_creation() {
        let tier = CarTier {
            name: "sedan".into(),
            rate_per_km: 1.33,
            image_url: "".into(),
        };

        let booking = Booking::new(Uuid::new_v4(), &route(7.0), &tier, Utc::now());

        assert_eq!(
            booking.total_price,
            pricing::total_price(booking.rate_per_km, booking.distance_km)
        );
        assert_eq!(booking.total_price, 9);
    }

    #[test]
    fn driver_fields_start_empty() {
        let tier = CarTier {
            name: "suv".into(),
            rate_per_km: 2.5,
            image_url: "".into(),
        };

        let booking = Booking::new(Uuid::new_v4(), &route(10.0), &tier, Utc::now());

        assert!(booking.driver_name.is_empty());
        assert!(booking.driver_mobile.is_empty());
        assert_eq!(booking.total_price, 25);
    }
}
