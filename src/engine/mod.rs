mod booking_api;
mod place_api;
mod route_api;
mod support_api;
mod tier_api;

use oso::Oso;
use sqlx::{Executor, Pool, Postgres};

use crate::{
    api::API,
    auth::authorizor,
    error::{unauthorized_error, Error},
};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    authorizor: Oso,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        // location service (KV store)
        pool.execute("CREATE TABLE IF NOT EXISTS locations (token UUID PRIMARY KEY, data JSONB NOT NULL)")
            .await?;

        // route service (KV store)
        pool.execute("CREATE TABLE IF NOT EXISTS routes (token UUID PRIMARY KEY, data JSONB NOT NULL)")
            .await?;

        // tier catalog
        pool.execute("CREATE TABLE IF NOT EXISTS tiers (name VARCHAR PRIMARY KEY, data JSONB NOT NULL)")
            .await?;

        // booking service
        pool.execute("CREATE TABLE IF NOT EXISTS bookings (id UUID PRIMARY KEY, user_id UUID NOT NULL, created_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)")
            .await?;
        pool.execute("CREATE INDEX IF NOT EXISTS bookings_by_user_recency ON bookings (user_id, created_at DESC, id)")
            .await?;

        // support surface
        pool.execute("CREATE TABLE IF NOT EXISTS help_requests (id UUID PRIMARY KEY, data JSONB NOT NULL)")
            .await?;
        pool.execute("CREATE TABLE IF NOT EXISTS issues (id UUID PRIMARY KEY, data JSONB NOT NULL)")
            .await?;

        Ok(Self {
            pool,
            authorizor: authorizor::new(),
        })
    }
}

impl Engine {
    pub fn authorize<Actor, Action, Resource>(
        &self,
        actor: Actor,
        action: Action,
        resource: Resource,
    ) -> Result<(), Error>
    where
        Actor: oso::ToPolar,
        Action: oso::ToPolar,
        Resource: oso::ToPolar,
    {
        if self.authorizor.is_allowed(actor, action, resource)? {
            return Ok(());
        }

        Err(unauthorized_error())
    }
}

impl API for Engine {}
