use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::Coordinates;
use crate::error::Error;
use crate::external::google_maps::PlaceSuggestion;

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    input: String,
    lat: f64,
    lng: f64,
    radius: f64,
    session_token: String,
}

pub async fn list_suggestions(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<PlaceSuggestion>>, Error> {
    let location = Coordinates {
        lat: params.lat,
        lng: params.lng,
    };

    let suggestions = api
        .list_place_suggestions(
            user,
            params.input,
            location,
            params.radius,
            params.session_token,
        )
        .await?;

    Ok(suggestions.into())
}
