//! Record API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_records: Visible page of a list (JSON)
//! - api_record_detail: Single record (JSON)
//! - htmx_records_list: Search / pagination (HTML fragment)
//! - htmx_record_create_form: Add form modal (HTML fragment)
//! - htmx_record_store: Add record (HTMX)
//! - htmx_record_edit_form: Edit form modal (HTML fragment)
//! - htmx_record_update: Edit record (HTMX)
//! - htmx_record_delete: Delete record (HTMX)

use super::page::{render_form, render_list};
use super::prompt::RequestPrompt;
use super::{parse_kind, report};
use crate::{ApiError, AppState};
use adminweb_core::{Actions, CoreError, CoreResult, FieldMap, ListViewState, PageView, Record, RecordId, ResourceKind};
use axum::extract::{Path, Query};
use axum::response::Html;
use std::collections::HashMap;

/// Apply `q`, `page` and `step` query parameters to a list view
///
/// A present `q` replaces the search term (and so resets to page 1) before
/// `page` jumps or `step=prev|next` moves the cursor. Parameters are checked
/// before anything changes, so a rejected request leaves the view as it was.
pub(crate) fn apply_list_params(view: &mut ListViewState, params: &HashMap<String, String>) -> CoreResult<()> {
    let page = match params.get("page") {
        Some(raw) => Some(parse_page(raw)?),
        None => None,
    };
    let step = match params.get("step").map(String::as_str) {
        None => None,
        Some(step @ ("prev" | "next")) => Some(step),
        Some(other) => {
            return Err(CoreError::InvalidInput {
                message: format!("step must be prev or next, got {:?}", other),
            })
        }
    };

    if let Some(q) = params.get("q") {
        view.set_search_term(q.as_str());
    }
    if let Some(page) = page {
        view.set_page(page);
    }
    match step {
        Some("prev") => view.prev_page(),
        Some("next") => view.next_page(),
        _ => {}
    }
    Ok(())
}

/// Parse a page number; any integer is accepted and left to the view to clamp
fn parse_page(raw: &str) -> CoreResult<usize> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidInput {
            message: format!("page must be a whole number, got {:?}", raw),
        });
    }
    if trimmed.starts_with('-') {
        return Ok(0);
    }
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}

/// Decode an `application/x-www-form-urlencoded` body, keeping only the
/// resource's column fields
pub(crate) fn parse_form(kind: ResourceKind, body: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key);
        if kind.columns().iter().any(|c| c.field == key) {
            fields.insert(key, decode_component(value));
        }
    }
    fields
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Visible page of a list (JSON API)
///
/// `q` and `page` are applied to a copy; the session's list state is left alone.
pub async fn api_records(
    state: axum::extract::State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<axum::Json<PageView>, ApiError> {
    let kind = parse_kind(&resource, "api_records")?;
    let workspace = state.workspace.read().await;
    let mut view = workspace.view(kind).clone();
    apply_list_params(&mut view, &params).map_err(|e| report(e, "api_records", kind))?;
    Ok(axum::Json(view.snapshot()))
}

/// Single record (JSON API)
pub async fn api_record_detail(
    state: axum::extract::State<AppState>,
    Path((resource, id)): Path<(String, RecordId)>,
) -> Result<axum::Json<Record>, ApiError> {
    let kind = parse_kind(&resource, "api_record_detail")?;
    let workspace = state.workspace.read().await;
    let record = workspace
        .record(kind, id)
        .map_err(|e| report(e, "api_record_detail", kind))?;
    Ok(axum::Json(record.clone()))
}

/// HTMX: List fragment after a search keystroke or a page button
///
/// Unlike the JSON list this GET writes `q` / `page` / `step` into the
/// session's list state, so the next full page load shows the same search
/// and page.
pub async fn htmx_records_list(
    state: axum::extract::State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let kind = parse_kind(&resource, "htmx_records_list")?;
    let mut workspace = state.workspace.write().await;
    let view = workspace.view_mut(kind);
    apply_list_params(view, &params).map_err(|e| report(e, "htmx_records_list", kind))?;
    Ok(Html(render_list(kind, view, &[])))
}

/// HTMX: Add form modal
pub async fn htmx_record_create_form(Path(resource): Path<String>) -> Result<Html<String>, ApiError> {
    let kind = parse_kind(&resource, "htmx_record_create_form")?;
    Ok(Html(render_form(kind, None)))
}

/// HTMX: Add a record, respond with the refreshed list
pub async fn htmx_record_store(
    state: axum::extract::State<AppState>,
    Path(resource): Path<String>,
    body: String,
) -> Result<Html<String>, ApiError> {
    let kind = parse_kind(&resource, "htmx_record_store")?;
    let fields = parse_form(kind, &body);

    let mut workspace = state.workspace.write().await;
    let view = workspace.view_mut(kind);
    let mut prompt = RequestPrompt::new(true);
    Actions::new(&mut prompt).add(kind, view, fields);
    Ok(Html(render_list(kind, view, prompt.notices())))
}

/// HTMX: Edit form modal, prefilled with the record's current values
pub async fn htmx_record_edit_form(
    state: axum::extract::State<AppState>,
    Path((resource, id)): Path<(String, RecordId)>,
) -> Result<Html<String>, ApiError> {
    let kind = parse_kind(&resource, "htmx_record_edit_form")?;
    let workspace = state.workspace.read().await;
    let record = workspace
        .record(kind, id)
        .map_err(|e| report(e, "htmx_record_edit_form", kind))?;
    Ok(Html(render_form(kind, Some(record))))
}

/// HTMX: Merge form fields into a record, respond with the refreshed list
pub async fn htmx_record_update(
    state: axum::extract::State<AppState>,
    Path((resource, id)): Path<(String, RecordId)>,
    body: String,
) -> Result<Html<String>, ApiError> {
    let kind = parse_kind(&resource, "htmx_record_update")?;
    let fields = parse_form(kind, &body);

    let mut workspace = state.workspace.write().await;
    let view = workspace.view_mut(kind);
    let mut prompt = RequestPrompt::new(true);
    Actions::new(&mut prompt).edit(kind, view, id, fields);
    Ok(Html(render_list(kind, view, prompt.notices())))
}

/// HTMX: Delete a record once the request carries `confirm=true`
pub async fn htmx_record_delete(
    state: axum::extract::State<AppState>,
    Path((resource, id)): Path<(String, RecordId)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let kind = parse_kind(&resource, "htmx_record_delete")?;

    let mut workspace = state.workspace.write().await;
    let view = workspace.view_mut(kind);
    let mut prompt = RequestPrompt::from_params(&params);
    Actions::new(&mut prompt).delete(kind, view, id);
    Ok(Html(render_list(kind, view, prompt.notices())))
}
