mod booking;
mod location;
mod route;
mod support;
mod tier;

pub use booking::Booking;
pub use location::{Coordinates, Location, LocationSource};
pub use route::Route;
pub use support::{HelpRequest, IssueReport};
pub use tier::CarTier;
