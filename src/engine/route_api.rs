use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::{PlaceAPI, RouteAPI},
    auth::User,
    entities::Route,
    error::{invalid_input_error, Error},
    external::google_maps,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_route(
        &self,
        user: User,
        origin_token: Uuid,
        destination_token: Uuid,
    ) -> Result<Route, Error> {
        let origin = self.find_location(user.clone(), origin_token).await?;
        let destination = self.find_location(user.clone(), destination_token).await?;

        let route =
            match google_maps::find_directions(origin.coordinates, destination.coordinates).await {
                Ok(Some(leg)) => Route::new(origin, destination, leg.path, leg.distance_km),
                Ok(None) => Route::fallback(origin, destination),
                Err(err) => {
                    tracing::warn!(code = err.code, "directions lookup failed, storing empty route");
                    Route::fallback(origin, destination)
                }
            };

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("INSERT INTO routes (token, data) VALUES ($1, $2)")
                .bind(&route.token)
                .bind(Json(&route)),
        )
        .await?;

        Ok(route)
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(&self, user: User, token: Uuid) -> Result<Route, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM routes WHERE token = $1").bind(&token))
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;
        let Json(route) = result.try_get("data")?;

        Ok(route)
    }
}
