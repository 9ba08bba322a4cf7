use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, cost, invite, itinerary, member, poll, profile, task, trip},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Tripboard API", description = "Collaborative trip planning"),
    tags(
        (name = "auth", description = "Registration, login and session"),
        (name = "profile", description = "Profile and account settings"),
        (name = "trip", description = "Trips"),
        (name = "member", description = "Trip participants"),
        (name = "invite", description = "Trip invitations"),
        (name = "itinerary", description = "Itinerary items"),
        (name = "cost", description = "Shared costs and balances"),
        (name = "task", description = "Trip checklist"),
        (name = "poll", description = "Polls and voting"),
    )
)]
struct ApiDoc;

/// Builds the API router with the OpenAPI document and Swagger UI.
///
/// The document is served at `/api/docs/openapi.json` and the UI at `/api/docs`.
/// Session and CORS layers are applied by the caller.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(profile::get_profile, profile::update_profile))
        .routes(routes!(profile::change_password))
        .routes(routes!(profile::delete_account))
        .routes(routes!(trip::get_trips, trip::create_trip))
        .routes(routes!(trip::get_trip, trip::update_trip, trip::delete_trip))
        .routes(routes!(member::get_members))
        .routes(routes!(member::remove_member))
        .routes(routes!(invite::get_trip_invites, invite::create_invite))
        .routes(routes!(invite::revoke_invite))
        .routes(routes!(invite::get_my_invites))
        .routes(routes!(invite::accept_invite))
        .routes(routes!(invite::decline_invite))
        .routes(routes!(itinerary::get_items, itinerary::create_item))
        .routes(routes!(
            itinerary::get_item,
            itinerary::update_item,
            itinerary::delete_item
        ))
        .routes(routes!(cost::get_costs, cost::create_cost))
        .routes(routes!(cost::get_cost, cost::update_cost, cost::delete_cost))
        .routes(routes!(cost::get_balances))
        .routes(routes!(task::get_tasks, task::create_task))
        .routes(routes!(task::update_task, task::delete_task))
        .routes(routes!(poll::get_polls, poll::create_poll))
        .routes(routes!(poll::get_poll, poll::delete_poll))
        .routes(routes!(poll::cast_vote, poll::retract_vote))
        .routes(routes!(poll::close_poll))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
