mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::server::handlers::{bookings, locations, places, routes, support, tiers};
use crate::{
    api::{DynAPI, API},
    auth::User,
};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/places/suggestions", get(places::list_suggestions))
        .route("/locations", post(locations::create))
        .route("/locations/:token", get(locations::find))
        .route("/routes", post(routes::create))
        .route("/routes/:token", get(routes::find))
        .route("/tiers", get(tiers::list).put(tiers::upsert))
        .route("/bookings", post(bookings::create).get(bookings::list))
        .route("/bookings/:id", get(bookings::find))
        .route("/help_requests", post(support::create_help_request))
        .route("/issues", post(support::create_issue))
        .layer(Extension(api))
        .layer(Extension(User::new_system_user()));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
