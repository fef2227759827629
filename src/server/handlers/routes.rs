use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::Route;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    origin_token: Uuid,
    destination_token: Uuid,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Route>, Error> {
    let route = api
        .create_route(user, params.origin_token, params.destination_token)
        .await?;

    Ok(route.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
) -> Result<Json<Route>, Error> {
    let route = api.find_route(user, token).await?;

    Ok(route.into())
}
