use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::PlaceAPI,
    auth::User,
    entities::{Coordinates, Location, LocationSource},
    error::{invalid_input_error, Error},
    external::google_maps::{self, PlaceSuggestion},
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_place_suggestions(
        &self,
        user: User,
        input: String,
        location: Coordinates,
        radius: f64,
        session_token: String,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        match google_maps::find_place_suggestions(input, location, radius, session_token).await {
            Ok(suggestions) => Ok(suggestions),
            Err(err) => {
                tracing::warn!(code = err.code, "autocomplete lookup failed, returning no suggestions");
                Ok(Vec::new())
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn create_location(
        &self,
        user: User,
        source: LocationSource,
    ) -> Result<Option<Location>, Error> {
        let location: Location = match source {
            LocationSource::Coordinates(coordinates) => Location::new(coordinates, "".into()),
            LocationSource::GooglePlaces {
                place_id,
                session_token,
            } => match google_maps::find_place(place_id, session_token).await {
                Ok(place) => Location::new(place.geometry.location, place.formatted_address),
                Err(err) => {
                    tracing::warn!(code = err.code, "place lookup failed, nothing selected");
                    return Ok(None);
                }
            },
        };

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO locations (token, data) VALUES ($1, $2)")
                .bind(&location.token)
                .bind(Json(&location)),
        )
        .await?;

        Ok(Some(location))
    }

    #[tracing::instrument(skip(self))]
    async fn find_location(&self, user: User, token: Uuid) -> Result<Location, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM locations WHERE token = $1").bind(&token))
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;
        let Json(location) = result.try_get("data")?;

        Ok(location)
    }
}
