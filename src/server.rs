use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

use tower_http::{services::ServeDir, trace::TraceLayer};

use tracing::{debug, info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::ui::components::ButtonStyle;
use crate::ui::gallery::{self, PreviewQuery, StoryArgs};

/// Directory holding the compiled stylesheet linked from every page.
const STATIC_DIR: &str = "static";

/// Build the gallery router.
pub fn router(config: Arc<AppConfig>) -> Router {
    let state = AppState { config };

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(|| async { "ok" }))
        .route("/stories", get(list_stories_handler))
        .route("/stories/{name}", get(story_handler))
        .route("/preview", get(preview_handler))
        .route("/api/classes", get(classes_handler))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let address = config.bind_address();
    let app = router(Arc::clone(&config));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(
        name: "server.listening",
        address = %address,
        title = %config.gallery.title,
        "Gallery server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Demo page handler.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let gallery_config = &state.config.gallery;
    Html(gallery::gallery_page(
        &gallery_config.title,
        &gallery_config.default_label,
    ))
}

/// Summary of a story for the index endpoint.
#[derive(Debug, Serialize)]
struct StorySummary {
    name: &'static str,
    title: &'static str,
}

/// Story index handler.
async fn list_stories_handler() -> Json<Vec<StorySummary>> {
    Json(
        gallery::stories()
            .into_iter()
            .map(|story| StorySummary {
                name: story.name,
                title: story.title,
            })
            .collect(),
    )
}

/// Single story handler.
async fn story_handler(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match gallery::find_story(&name) {
        Some(story) => {
            debug!(story = %name, "Rendering story");
            Html(gallery::story_page(&state.config.gallery.title, &story)).into_response()
        }
        None => {
            warn!(story = %name, "Unknown story requested");
            (
                StatusCode::NOT_FOUND,
                Html(gallery::html_shell(
                    "Not found",
                    &format!("<p>No story named <code>{}</code>.</p>", escape(&name)),
                )),
            )
                .into_response()
        }
    }
}

/// Parses preview args, logging any names that fell back to defaults.
fn preview_args(state: &AppState, query: &PreviewQuery) -> StoryArgs {
    let (args, errors) = StoryArgs::from_query(query, &state.config.gallery.default_label);
    for error in errors {
        warn!(error = %error, "Invalid preview parameter, using default");
    }
    args
}

/// Live preview handler.
async fn preview_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Html<String> {
    let args = preview_args(&state, &query);
    Html(gallery::preview_page(&state.config.gallery.title, &args))
}

/// Derived class lists for one button.
#[derive(Debug, Serialize)]
struct ClassesResponse {
    style: ButtonStyle,
    classes: Vec<&'static str>,
    icon: String,
    label: &'static str,
}

/// Class inspection handler.
async fn classes_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Json<ClassesResponse> {
    let style = preview_args(&state, &query).style;
    Json(ClassesResponse {
        style,
        classes: style.class_list(),
        icon: style.icon_classes(),
        label: style.label_classes(),
    })
}

/// Minimal HTML escaping for echoed path segments.
fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
