pub mod bookings;
pub mod locations;
pub mod places;
pub mod routes;
pub mod support;
pub mod tiers;
