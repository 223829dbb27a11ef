//! OpenAPI document assembled from the controllers' `utoipa::path` annotations.

use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::controller::{auth, gallery, game, otp, review, schedule, user, waitlist};

#[derive(OpenApi)]
#[openapi(
    info(title = "Elite Club API", description = "Waitlist, schedule and venue content"),
    paths(
        auth::register,
        auth::login,
        auth::get_user,
        gallery::get_gallery,
        gallery::create_gallery_item,
        gallery::update_gallery_item,
        gallery::delete_gallery_item,
        schedule::get_schedules,
        schedule::get_schedule_games,
        schedule::get_schedule,
        schedule::create_schedule,
        schedule::update_schedule,
        schedule::delete_schedule,
        waitlist::get_waitlist,
        waitlist::create_waitlist_entry,
        waitlist::update_waitlist_entry,
        waitlist::delete_waitlist_entry,
        waitlist::check_in_waitlist_entry,
        waitlist::reset_waitlist_entry,
        user::verify_user,
        user::create_user,
        otp::send_otp,
        otp::verify_otp,
        game::get_games,
        game::create_game,
        game::update_game,
        game::delete_game,
        review::get_reviews,
        review::create_review,
        review::update_review,
        review::delete_review,
    ),
    modifiers(&BearerSecurity),
)]
pub struct ApiDoc;

/// Registers the `bearer` JWT scheme referenced by protected routes.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// GET /api/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
