use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers::{add_user, delete_user, get_user, get_users, index, update_user};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add_user", post(add_user))
        .route("/users", get(get_users))
        .route("/user/{id}", get(get_user))
        .route("/update_user/{id}", put(update_user))
        .route("/delete_user/{id}", delete(delete_user))
        .with_state(state)
}
