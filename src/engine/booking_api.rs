use super::Engine;

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::{BookingAPI, RouteAPI},
    auth::User,
    entities::Booking,
    error::{invalid_input_error, Error},
};

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_booking(
        &self,
        user: User,
        route_token: Uuid,
        tier_name: String,
    ) -> Result<Booking, Error> {
        let route = self.find_route(user.clone(), route_token).await?;
        let tier = self.find_tier(&tier_name).await?;

        let booking = Booking::new(user.id, &route, &tier, Utc::now());

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO bookings (id, user_id, created_at, data) VALUES ($1, $2, $3, $4)",
            )
            .bind(&booking.id)
            .bind(&booking.user_id)
            .bind(&booking.timestamp)
            .bind(Json(&booking)),
        )
        .await?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn find_booking(&self, user: User, id: Uuid) -> Result<Booking, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM bookings WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;
        let Json::<Booking>(booking) = result.try_get("data")?;

        self.authorize(user, "read", booking.clone())?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn list_bookings(&self, user: User) -> Result<Vec<Booking>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut rows = conn.fetch(
            sqlx::query(
                "SELECT data FROM bookings WHERE user_id = $1 ORDER BY created_at DESC, id",
            )
            .bind(&user.id),
        );

        let mut bookings = Vec::new();

        while let Some(row) = rows.try_next().await? {
            let Json(booking) = row.try_get("data")?;
            bookings.push(booking);
        }

        Ok(bookings)
    }
}
