// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{authentications, comments, likes, replies, root, threads, users},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Public routes: index, registration, authentications, thread details.
/// * Bearer-protected routes: every mutation on threads, comments, replies and likes.
/// * Global middleware: Trace, CORS.
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let auth = || middleware::from_fn_with_state(state.clone(), auth_middleware);

    Router::new()
        .route("/", get(root::index))
        .route("/users", post(users::post_user))
        .route(
            "/authentications",
            post(authentications::post_authentication)
                .put(authentications::put_authentication)
                .delete(authentications::delete_authentication),
        )
        .route("/threads", post(threads::post_thread).route_layer(auth()))
        .route("/threads/{threadId}", get(threads::get_thread_details))
        .route(
            "/threads/{threadId}/comments",
            post(comments::post_comment).route_layer(auth()),
        )
        .route(
            "/threads/{threadId}/comments/{commentId}",
            delete(comments::delete_comment).route_layer(auth()),
        )
        .route(
            "/threads/{threadId}/comments/{commentId}/replies",
            post(replies::post_reply).route_layer(auth()),
        )
        .route(
            "/threads/{threadId}/comments/{commentId}/replies/{replyId}",
            delete(replies::delete_reply).route_layer(auth()),
        )
        .route(
            "/threads/{threadId}/comments/{commentId}/likes",
            put(likes::put_like).route_layer(auth()),
        )
        .fallback(root::not_found)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
