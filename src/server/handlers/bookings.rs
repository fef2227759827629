use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::Booking;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    route_token: Uuid,
    tier_name: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Booking>, Error> {
    let booking = api
        .create_booking(user, params.route_token, params.tier_name)
        .await?;

    Ok(booking.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, Error> {
    let booking = api.find_booking(user, id).await?;

    Ok(booking.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Booking>>, Error> {
    let bookings = api.list_bookings(user).await?;

    Ok(bookings.into())
}
