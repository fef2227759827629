use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{
    Booking, CarTier, Coordinates, HelpRequest, IssueReport, Location, LocationSource, Route,
};
use crate::error::Error;
use crate::external::google_maps::PlaceSuggestion;

#[async_trait]
pub trait PlaceAPI {
    /// Degrades to an empty list when the autocomplete service is
    /// unavailable; the passenger retries by typing again.
    async fn list_place_suggestions(
        &self,
        user: User,
        input: String,
        location: Coordinates,
        radius: f64,
        session_token: String,
    ) -> Result<Vec<PlaceSuggestion>, Error>;

    /// `Ok(None)` when a place id cannot be resolved to coordinates.
    async fn create_location(
        &self,
        user: User,
        source: LocationSource,
    ) -> Result<Option<Location>, Error>;

    async fn find_location(&self, user: User, token: Uuid) -> Result<Location, Error>;
}

#[async_trait]
pub trait RouteAPI {
    /// Never fails on the directions lookup itself: any upstream failure
    /// or empty result degrades to a stored route with an empty path and
    /// zero distance.
    async fn create_route(
        &self,
        user: User,
        origin_token: Uuid,
        destination_token: Uuid,
    ) -> Result<Route, Error>;

    async fn find_route(&self, user: User, token: Uuid) -> Result<Route, Error>;
}

#[async_trait]
pub trait TierAPI {
    /// Degrades to an empty catalog on failure.
    async fn list_tiers(&self, user: User) -> Result<Vec<CarTier>, Error>;

    async fn upsert_tier(&self, user: User, tier: CarTier) -> Result<(), Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn create_booking(
        &self,
        user: User,
        route_token: Uuid,
        tier_name: String,
    ) -> Result<Booking, Error>;

    async fn find_booking(&self, user: User, id: Uuid) -> Result<Booking, Error>;

    /// The caller's own bookings, most recent first.
    async fn list_bookings(&self, user: User) -> Result<Vec<Booking>, Error>;
}

#[async_trait]
pub trait SupportAPI {
    async fn submit_help_request(&self, user: User, reason: String) -> Result<HelpRequest, Error>;

    async fn report_issue(
        &self,
        user: User,
        description: String,
        image_base64: Option<String>,
    ) -> Result<IssueReport, Error>;
}

pub trait API: PlaceAPI + RouteAPI + TierAPI + BookingAPI + SupportAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
