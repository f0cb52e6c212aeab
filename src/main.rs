use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

mod dto;
mod error;
mod templates;

use dto::{Item, NewItem};
use error::AppError;
use templates::IndexTemplate;

/// Base URL of the items API when TODO_API_URL is not set.
const DEFAULT_API_URL: &str = "http://localhost:5001";

#[derive(Clone)]
struct AppState {
    client: reqwest::Client,
    api_base: String,
}

impl AppState {
    fn new(api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/api/items", self.api_base)
    }

    // Re-encode the (already decoded) path segment so spaces and reserved
    // characters survive the trip to the items API as one segment.
    fn item_url(&self, item: &str) -> String {
        format!("{}/api/items/{}", self.api_base, urlencoding::encode(item))
    }
}

async fn show_list(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let todos = state
        .client
        .get(state.items_url())
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Item>>()
        .await?;

    Ok(IndexTemplate { todos })
}

async fn add_entry(
    State(state): State<AppState>,
    Form(form): Form<NewItem>,
) -> Result<Redirect, AppError> {
    state
        .client
        .post(state.items_url())
        .json(&form)
        .send()
        .await?;

    Ok(Redirect::to("/"))
}

async fn delete_entry(
    State(state): State<AppState>,
    Path(item): Path<String>,
) -> Result<Redirect, AppError> {
    state.client.delete(state.item_url(&item)).send().await?;

    Ok(Redirect::to("/"))
}

async fn mark_as_done(
    State(state): State<AppState>,
    Path(item): Path<String>,
) -> Result<Redirect, AppError> {
    state.client.put(state.item_url(&item)).send().await?;

    Ok(Redirect::to("/"))
}

async fn styles() -> impl IntoResponse {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/css")
        .body(include_str!("../templates/styles.css").to_owned())
        .unwrap()
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_list))
        .route("/add", post(add_entry))
        .route("/delete/:item", get(delete_entry))
        .route("/mark/:item", get(mark_as_done))
        .route("/styles.css", get(styles))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let api_base =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let state = AppState::new(api_base);

    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    tracing::info!(%addr, api = %state.api_base, "todolist web listening");

    axum::Server::bind(&addr)
        .serve(app(state).into_make_service())
        .await
        .expect("server error");
}
