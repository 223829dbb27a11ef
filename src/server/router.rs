use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::server::{
    controller::{
        auth::{get_user, login, register},
        gallery::{create_gallery_item, delete_gallery_item, get_gallery, update_gallery_item},
        game::{create_game, delete_game, get_games, update_game},
        otp::{send_otp, verify_otp},
        review::{create_review, delete_review, get_reviews, update_review},
        schedule::{
            create_schedule, delete_schedule, get_schedule, get_schedule_games, get_schedules,
            update_schedule,
        },
        user::{create_user, verify_user},
        waitlist::{
            check_in_waitlist_entry, create_waitlist_entry, delete_waitlist_entry, get_waitlist,
            reset_waitlist_entry, update_waitlist_entry,
        },
    },
    openapi::openapi_json,
    state::AppState,
    util::upload::UPLOADS_ROUTE,
};

/// Largest request body accepted, sized for gallery image uploads.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Builds the application router.
///
/// # Arguments
/// - `uploads_dir` - Directory served under `/uploads`
pub fn router(uploads_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/auth/user", get(get_user))
        .route("/api/gallery", get(get_gallery).post(create_gallery_item))
        .route(
            "/api/gallery/{id}",
            put(update_gallery_item).delete(delete_gallery_item),
        )
        .route("/api/schedule", get(get_schedules).post(create_schedule))
        .route("/api/schedule/games", get(get_schedule_games))
        .route(
            "/api/schedule/{id}",
            get(get_schedule)
                .put(update_schedule)
                .delete(delete_schedule),
        )
        .route("/api/waitlist", get(get_waitlist).post(create_waitlist_entry))
        .route(
            "/api/waitlist/{id}",
            put(update_waitlist_entry).delete(delete_waitlist_entry),
        )
        .route("/api/waitlist/checkin/{id}", put(check_in_waitlist_entry))
        .route("/api/waitlist/reset/{id}", put(reset_waitlist_entry))
        .route("/api/verify/{phone}", get(verify_user))
        .route("/api/users", post(create_user))
        .route("/api/send-otp", post(send_otp))
        .route("/api/verify-otp", post(verify_otp))
        .route("/api/game", get(get_games).post(create_game))
        .route("/api/game/{id}", put(update_game).delete(delete_game))
        .route("/api/reviews", get(get_reviews).post(create_review))
        .route(
            "/api/reviews/{id}",
            put(update_review).delete(delete_review),
        )
        .nest_service(UPLOADS_ROUTE, ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
}

async fn hello() -> &'static str {
    "Hello"
}
