use oso::{Oso, PolarClass};

use crate::auth::{Catalog, User};
use crate::entities::Booking;

pub fn new() -> Oso {
    let mut o = Oso::new();

    o.register_class(Catalog::get_polar_class()).unwrap();
    o.register_class(User::get_polar_class()).unwrap();
    o.register_class(Booking::get_polar_class()).unwrap();

    o.load_str(include_str!("rules.polar")).unwrap();

    o
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CarTier, Coordinates, Location, Route};
    use chrono::Utc;
    use uuid::Uuid;

    fn booking_for(user_id: Uuid) -> Booking {
        let origin = Location::new(Coordinates { lat: 0.0, lng: 0.0 }, "a".into());
        let destination = Location::new(Coordinates { lat: 1.0, lng: 1.0 }, "b".into());
        let route = Route::new(origin, destination, Vec::new(), 5.0);
        let tier = CarTier {
            name: "sedan".into(),
            rate_per_km: 2.0,
            image_url: "".into(),
        };

        Booking::new(user_id, &route, &tier, Utc::now())
    }

    #[test]
    fn owner_reads_own_booking() {
        let authorizor = new();
        let owner = User::new(Uuid::new_v4());
        let booking = booking_for(owner.id);

        let result = authorizor.is_allowed(owner, "read", booking);
        assert_eq!(result.unwrap(), true);
    }

    #[test]
    fn stranger_cannot_read_booking() {
        let authorizor = new();
        let stranger = User::new(Uuid::new_v4());
        let booking = booking_for(Uuid::new_v4());

        let result = authorizor.is_allowed(stranger.clone(), "read", booking);
        assert_eq!(result.unwrap(), false);

        let result = authorizor.is_allowed(stranger, "manage_catalog", Catalog::default());
        assert_eq!(result.unwrap(), false);
    }

    #[test]
    fn system_role_is_unrestricted() {
        let authorizor = new();
        let system = User::new_system_user();
        let booking = booking_for(Uuid::new_v4());

        let result = authorizor.is_allowed(system.clone(), "read", booking);
        assert_eq!(result.unwrap(), true);

        let result = authorizor.is_allowed(system, "manage_catalog", Catalog::default());
        assert_eq!(result.unwrap(), true);
    }
}
