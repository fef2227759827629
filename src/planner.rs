use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Booking, CarTier, Location, Route};
use crate::error::{invalid_input_error, invalid_state_error, Error};

/// How far the session has progressed towards a confirmable trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NoOrigin,
    OriginSet,
    DestinationSet,
    RouteComputed,
    CarSelected,
}

/// One passenger's in-progress trip request.
///
/// The planner owns the session state the booking flow needs: endpoints,
/// the computed route, and the selected tier. Changing either endpoint
/// invalidates the route and tier, so a stale fare can never be submitted
/// against updated endpoints. A booking is constructible only once all
/// four inputs are simultaneously present.
///
/// Endpoint changes bump a generation counter. Directions lookups carry
/// the generation they were started under, and a completion from a
/// superseded lookup is dropped on arrival.
#[derive(Clone, Debug, Default)]
pub struct TripPlanner {
    origin: Option<Location>,
    destination: Option<Location>,
    route: Option<Route>,
    tier: Option<CarTier>,
    generation: u64,
}

impl TripPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        match (&self.origin, &self.destination, &self.route, &self.tier) {
            (None, ..) => Stage::NoOrigin,
            (Some(_), None, ..) => Stage::OriginSet,
            (Some(_), Some(_), None, _) => Stage::DestinationSet,
            (Some(_), Some(_), Some(_), None) => Stage::RouteComputed,
            (Some(_), Some(_), Some(_), Some(_)) => Stage::CarSelected,
        }
    }

    pub fn is_confirmable(&self) -> bool {
        self.stage() == Stage::CarSelected
    }

    /// The generation a directions lookup started now should carry back
    /// into `attach_route`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn origin(&self) -> Option<&Location> {
        self.origin.as_ref()
    }

    pub fn destination(&self) -> Option<&Location> {
        self.destination.as_ref()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn tier(&self) -> Option<&CarTier> {
        self.tier.as_ref()
    }

    /// Always legal. Invalidates any computed route and tier selection and
    /// supersedes in-flight lookups; returns the new generation.
    #[tracing::instrument]
    pub fn set_origin(&mut self, origin: Location) -> u64 {
        self.origin = Some(origin);
        self.invalidate_downstream()
    }

    /// Requires an origin. Invalidates any computed route and tier
    /// selection and supersedes in-flight lookups; returns the new
    /// generation.
    #[tracing::instrument]
    pub fn set_destination(&mut self, destination: Location) -> Result<u64, Error> {
        if self.origin.is_none() {
            return Err(invalid_state_error());
        }

        self.destination = Some(destination);
        Ok(self.invalidate_downstream())
    }

    /// Accepts a completed directions lookup. Returns `Ok(false)` when the
    /// lookup was started under a superseded generation; the planner state
    /// is untouched in that case. A zero-distance fallback route is
    /// accepted exactly like a real one.
    #[tracing::instrument]
    pub fn attach_route(&mut self, route: Route, generation: u64) -> Result<bool, Error> {
        let (origin, destination) = match (&self.origin, &self.destination) {
            (Some(origin), Some(destination)) => (origin, destination),
            _ => return Err(invalid_state_error()),
        };

        if generation != self.generation {
            return Ok(false);
        }

        if route.origin.token != origin.token || route.destination.token != destination.token {
            return Err(invalid_input_error());
        }

        self.route = Some(route);
        self.tier = None;

        Ok(true)
    }

    /// Requires a computed route.
    #[tracing::instrument]
    pub fn select_tier(&mut self, tier: CarTier) -> Result<(), Error> {
        if self.route.is_none() {
            return Err(invalid_state_error());
        }

        self.tier = Some(tier);
        Ok(())
    }

    /// Assembles the booking record. Legal only in the confirmable state;
    /// performs no I/O and leaves the planner untouched, so a failed write
    /// downstream can simply be retried.
    #[tracing::instrument]
    pub fn booking(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<Booking, Error> {
        match (&self.route, &self.tier) {
            (Some(route), Some(tier)) => Ok(Booking::new(user_id, route, tier, now)),
            _ => Err(invalid_state_error()),
        }
    }

    fn invalidate_downstream(&mut self) -> u64 {
        self.route = None;
        self.tier = None;
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Coordinates;
    use crate::pricing;

    fn location(lat: f64, lng: f64, description: &str) -> Location {
        Location::new(Coordinates { lat, lng }, description.into())
    }

    fn route_between(origin: &Location, destination: &Location, distance_km: f64) -> Route {
        Route::new(
            origin.clone(),
            destination.clone(),
            vec![origin.coordinates, destination.coordinates],
            distance_km,
        )
    }

    fn sedan() -> CarTier {
        CarTier {
            name: "sedan".into(),
            rate_per_km: 2.5,
            image_url: "https://img.example/sedan.png".into(),
        }
    }

    fn confirmable_planner() -> TripPlanner {
        let mut planner = TripPlanner::new();
        let origin = location(40.7128, -74.0060, "downtown");
        let destination = location(40.6413, -73.7781, "airport");

        planner.set_origin(origin.clone());
        let generation = planner.set_destination(destination.clone()).unwrap();
        let route = route_between(&origin, &destination, 10.0);
        assert!(planner.attach_route(route, generation).unwrap());
        planner.select_tier(sedan()).unwrap();

        planner
    }

    #[test]
    fn walks_through_every_stage() {
        let mut planner = TripPlanner::new();
        assert_eq!(planner.stage(), Stage::NoOrigin);

        let origin = location(40.7128, -74.0060, "downtown");
        planner.set_origin(origin.clone());
        assert_eq!(planner.stage(), Stage::OriginSet);

        let destination = location(40.6413, -73.7781, "airport");
        let generation = planner.set_destination(destination.clone()).unwrap();
        assert_eq!(planner.stage(), Stage::DestinationSet);

        let route = route_between(&origin, &destination, 10.0);
        assert!(planner.attach_route(route, generation).unwrap());
        assert_eq!(planner.stage(), Stage::RouteComputed);

        planner.select_tier(sedan()).unwrap();
        assert_eq!(planner.stage(), Stage::CarSelected);
        assert!(planner.is_confirmable());
    }

    #[test]
    fn destination_requires_origin() {
        let mut planner = TripPlanner::new();
        let destination = location(40.6413, -73.7781, "airport");

        assert!(planner.set_destination(destination).is_err());
    }

    #[test]
    fn booking_is_illegal_before_confirmable() {
        let mut planner = TripPlanner::new();
        assert!(planner.booking(Uuid::new_v4(), Utc::now()).is_err());

        let origin = location(40.7128, -74.0060, "downtown");
        planner.set_origin(origin.clone());
        let destination = location(40.6413, -73.7781, "airport");
        let generation = planner.set_destination(destination.clone()).unwrap();
        assert!(planner.booking(Uuid::new_v4(), Utc::now()).is_err());

        let route = route_between(&origin, &destination, 10.0);
        planner.attach_route(route, generation).unwrap();
        assert!(planner.booking(Uuid::new_v4(), Utc::now()).is_err());

        planner.select_tier(sedan()).unwrap();
        assert!(planner.booking(Uuid::new_v4(), Utc::now()).is_ok());
    }

    #[test]
    fn endpoint_change_clears_route_and_tier() {
        let mut planner = confirmable_planner();

        planner.set_origin(location(40.7306, -73.9352, "uptown"));

        assert_eq!(planner.stage(), Stage::DestinationSet);
        assert!(!planner.is_confirmable());
        assert!(planner.route().is_none());
        assert!(planner.tier().is_none());
        assert!(planner.booking(Uuid::new_v4(), Utc::now()).is_err());
    }

    #[test]
    fn destination_change_also_invalidates() {
        let mut planner = confirmable_planner();

        planner
            .set_destination(location(40.7484, -73.9857, "midtown"))
            .unwrap();

        assert_eq!(planner.stage(), Stage::DestinationSet);
        assert!(planner.route().is_none());
        assert!(planner.tier().is_none());
    }

    #[test]
    fn superseded_route_lookup_is_dropped() {
        let mut planner = TripPlanner::new();
        let origin = location(40.7128, -74.0060, "downtown");
        planner.set_origin(origin.clone());
        let first_destination = location(40.6413, -73.7781, "airport");
        let stale_generation = planner.set_destination(first_destination.clone()).unwrap();
        let stale_route = route_between(&origin, &first_destination, 10.0);

        // destination changes while the first lookup is still in flight
        let second_destination = location(40.7484, -73.9857, "midtown");
        let generation = planner.set_destination(second_destination.clone()).unwrap();

        assert!(!planner.attach_route(stale_route, stale_generation).unwrap());
        assert_eq!(planner.stage(), Stage::DestinationSet);

        let route = route_between(&origin, &second_destination, 4.0);
        assert!(planner.attach_route(route, generation).unwrap());
        assert_eq!(planner.stage(), Stage::RouteComputed);
    }

    #[test]
    fn route_for_other_endpoints_is_rejected() {
        let mut planner = TripPlanner::new();
        let origin = location(40.7128, -74.0060, "downtown");
        planner.set_origin(origin.clone());
        let destination = location(40.6413, -73.7781, "airport");
        let generation = planner.set_destination(destination).unwrap();

        let elsewhere = location(40.7484, -73.9857, "midtown");
        let mismatched = route_between(&origin, &elsewhere, 4.0);

        assert!(planner.attach_route(mismatched, generation).is_err());
    }

    #[test]
    fn fallback_route_reaches_confirmable_and_prices_to_zero() {
        let mut planner = TripPlanner::new();
        let origin = location(40.7128, -74.0060, "downtown");
        planner.set_origin(origin.clone());
        let destination = location(40.6413, -73.7781, "airport");
        let generation = planner.set_destination(destination.clone()).unwrap();

        let fallback = Route::fallback(origin, destination);
        assert!(planner.attach_route(fallback, generation).unwrap());
        planner.select_tier(sedan()).unwrap();

        let booking = planner.booking(Uuid::new_v4(), Utc::now()).unwrap();
        assert_eq!(booking.total_price, 0);
        assert!(booking.from_description == "downtown" && booking.to_description == "airport");
    }

    #[test]
    fn booking_carries_the_priced_fare() {
        let planner = confirmable_planner();
        let user_id = Uuid::new_v4();

        let booking = planner.booking(user_id, Utc::now()).unwrap();

        assert_eq!(booking.user_id, user_id);
        assert_eq!(booking.car_tier, "sedan");
        assert_eq!(
            booking.total_price,
            pricing::total_price(booking.rate_per_km, booking.distance_km)
        );
        assert_eq!(booking.total_price, 25);
    }
}
