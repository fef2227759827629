use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::{HelpRequest, IssueReport};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct HelpRequestParams {
    reason: String,
}

pub async fn create_help_request(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<HelpRequestParams>,
) -> Result<Json<HelpRequest>, Error> {
    let request = api.submit_help_request(user, params.reason).await?;

    Ok(request.into())
}

#[derive(Serialize, Deserialize)]
pub struct IssueParams {
    description: String,
    image_base64: Option<String>,
}

pub async fn create_issue(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<IssueParams>,
) -> Result<Json<IssueReport>, Error> {
    let report = api
        .report_issue(user, params.description, params.image_base64)
        .await?;

    Ok(report.into())
}
