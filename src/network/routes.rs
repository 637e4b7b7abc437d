use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;

use crate::common::PostForm;
use crate::storage::MessageStore;
use crate::ui::render_board;

pub const BOARD_PATH: &str = "/board";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

pub fn build_router(store: Arc<MessageStore>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(BOARD_PATH) }))
        .route(BOARD_PATH, get(show_board).post(submit_post))
        .with_state(store)
}

async fn show_board(State(store): State<Arc<MessageStore>>) -> impl IntoResponse {
    let snapshot = store.snapshot();
    let body = render_board(snapshot.as_slice());
    ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], body)
}

/// Always redirects back to the board. Invalid posts are dropped without
/// telling the client.
async fn submit_post(
    State(store): State<Arc<MessageStore>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Redirect {
    match form {
        Ok(Form(pairs)) => match PostForm::from_pairs(pairs).validate() {
            Some(post) => {
                let message = store.append(post.nickname, post.content);
                log::debug!(
                    "Accepted post {} from {:?} ({} messages)",
                    message.id(),
                    message.nickname(),
                    store.len()
                );
            }
            None => log::debug!("Dropped post with blank nickname or content"),
        },
        Err(rejection) => log::debug!("Dropped unreadable post: {rejection}"),
    }

    Redirect::to(BOARD_PATH)
}
