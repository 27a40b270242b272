//! HTTP API server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::records: list pages, search, pagination, add/edit/delete for every resource

pub mod error;
pub mod routes;

use adminweb_config::Config;
use adminweb_core::{ResourceKind, Workspace};
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub workspace: Arc<RwLock<Workspace>>,
}

impl AppState {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace: Arc::new(RwLock::new(workspace)),
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::records::{
        api_record_detail, api_records, htmx_record_create_form, htmx_record_delete, htmx_record_edit_form,
        htmx_record_store, htmx_record_update, htmx_records_list, page_records,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/summary", get(api_summary))
        .route("/api/:resource", get(api_records))
        .route("/api/:resource/:id", get(api_record_detail))
        // HTMX page routes
        .route("/", get(index_page))
        .route("/dashboard", get(index_page))
        .route("/:resource", get(page_records).post(htmx_record_store))
        // HTMX partial routes
        // GET /:resource/list stores q/page/step in the session's list state
        .route("/:resource/list", get(htmx_records_list))
        .route("/:resource/create", get(htmx_record_create_form))
        .route("/:resource/:id/edit", get(htmx_record_edit_form))
        .route("/:resource/:id", put(htmx_record_update).delete(htmx_record_delete))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Record counts per resource (JSON API)
async fn api_summary(state: axum::extract::State<AppState>) -> axum::Json<adminweb_core::WorkspaceSummary> {
    let workspace = state.workspace.read().await;
    axum::Json(workspace.summary())
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Admin Dashboard</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
        button[disabled] {{ cursor: not-allowed; opacity: 0.5; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        adminweb_utils::escape_html(title),
        content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let mut links = vec![("/dashboard".to_string(), "Dashboard")];
    links.extend(
        ResourceKind::ALL
            .iter()
            .map(|kind| (format!("/{}", kind.slug()), nav_label(*kind))),
    );

    let mut nav = String::from("<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-indigo-600'>Admin</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>");

    for (path, label) in &links {
        let is_active = if path == "/dashboard" {
            current_path == "/" || current_path == "/dashboard"
        } else {
            current_path.starts_with(path.as_str())
        };
        let active_class = if is_active { "bg-indigo-50 text-indigo-600" } else { "text-gray-600 hover:bg-gray-50" };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'><span>{}</span></a></li>"#,
            path, active_class, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

fn nav_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Users => "Users",
        ResourceKind::Subscriptions => "Subscriptions",
        ResourceKind::Transactions => "Transactions",
    }
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, current_path: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area
        format!(
            r#"<main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>"#,
            inner_content
        )
    } else {
        base_html(
            title,
            &format!(
                r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
                nav_sidebar(current_path),
                inner_content
            ),
        )
    }
}

/// Dashboard page with a card per resource
async fn index_page(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;

    let cards: String = ResourceKind::ALL
        .iter()
        .map(|kind| {
            format!(
                r#"<a href='/{}' class='block bg-white p-4 rounded-lg border hover:border-indigo-300'><p class='text-sm text-gray-600'>{}</p><p class='text-2xl font-bold text-indigo-700'>{}</p></a>"#,
                kind.slug(),
                nav_label(*kind),
                workspace.view(*kind).len()
            )
        })
        .collect();

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Dashboard</h2></div>
        <div class='grid grid-cols-1 md:grid-cols-3 gap-4'>{}</div>"#,
        cards
    );

    axum::response::Html(page_response(&headers, "Dashboard", "/dashboard", &inner_content))
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(config: Config, workspace: Workspace) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let router = create_router(AppState::new(workspace));

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting admin dashboard on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    for kind in ResourceKind::ALL {
        log::info!("  - /{} ({})", kind.slug(), kind.page_title());
    }
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

// ==================== Tests ====================
