use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor};

use crate::{
    api::SupportAPI,
    auth::User,
    entities::{HelpRequest, IssueReport},
    error::Error,
};

#[async_trait]
impl SupportAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn submit_help_request(&self, user: User, reason: String) -> Result<HelpRequest, Error> {
        let request = HelpRequest::new(user.id, reason);

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO help_requests (id, data) VALUES ($1, $2)")
                .bind(&request.id)
                .bind(Json(&request)),
        )
        .await?;

        Ok(request)
    }

    #[tracing::instrument(skip(self, image_base64))]
    async fn report_issue(
        &self,
        user: User,
        description: String,
        image_base64: Option<String>,
    ) -> Result<IssueReport, Error> {
        let report = IssueReport::new(user.id, description, image_base64);

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO issues (id, data) VALUES ($1, $2)")
                .bind(&report.id)
                .bind(Json(&report)),
        )
        .await?;

        Ok(report)
    }
}
