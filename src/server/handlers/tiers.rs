use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::CarTier;
use crate::error::Error;

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<CarTier>>, Error> {
    let tiers = api.list_tiers(user).await?;

    Ok(tiers.into())
}

pub async fn upsert(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(tier): Json<CarTier>,
) -> Result<Json<CarTier>, Error> {
    api.upsert_tier(user, tier.clone()).await?;

    Ok(tier.into())
}
