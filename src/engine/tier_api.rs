use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{types::Json, Executor, Row};

use crate::{
    api::TierAPI,
    auth::{Catalog, User},
    entities::CarTier,
    error::{invalid_input_error, Error},
};

impl Engine {
    async fn fetch_tiers(&self) -> Result<Vec<CarTier>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut rows = conn.fetch(sqlx::query("SELECT data FROM tiers ORDER BY name"));
        let mut tiers = Vec::new();

        while let Some(row) = rows.try_next().await? {
            let Json(tier) = row.try_get("data")?;
            tiers.push(tier);
        }

        Ok(tiers)
    }

    pub(super) async fn find_tier(&self, name: &str) -> Result<CarTier, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM tiers WHERE name = $1").bind(name))
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;
        let Json(tier) = result.try_get("data")?;

        Ok(tier)
    }
}

#[async_trait]
impl TierAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_tiers(&self, user: User) -> Result<Vec<CarTier>, Error> {
        match self.fetch_tiers().await {
            Ok(tiers) => Ok(tiers),
            Err(err) => {
                tracing::warn!(code = err.code, "tier catalog unavailable, returning none");
                Ok(Vec::new())
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn upsert_tier(&self, user: User, tier: CarTier) -> Result<(), Error> {
        self.authorize(user, "manage_catalog", Catalog::default())?;

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO tiers (name, data) VALUES ($1, $2) ON CONFLICT (name) DO UPDATE SET data = $2",
            )
            .bind(&tier.name)
            .bind(Json(&tier)),
        )
        .await?;

        Ok(())
    }
}
