//! Record page rendering - Full page and HTML fragments
//!
//! Endpoints:
//! - page_records: Main list page with search box and add button
//!
//! Helper functions:
//! - render_list: Notices, table and pagination controls (the `#records-content` fragment)
//! - render_form: Add / edit modal

use crate::{ApiError, AppState};
use adminweb_core::{CellFormat, Column, ListViewState, Notice, NoticeLevel, Record, ResourceKind};
use adminweb_utils::escape_html;
use axum::extract::Path;

/// Records page - search box, add button and the current page of the list
pub async fn page_records(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Path(resource): Path<String>,
) -> Result<axum::response::Html<String>, ApiError> {
    let kind = super::parse_kind(&resource, "page_records")?;
    let workspace = state.workspace.read().await;
    let view = workspace.view(kind);
    let slug = kind.slug();

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>{title}</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <div class='flex items-center justify-between mb-4'>
                <h3 class='text-lg font-semibold'>{heading}</h3>
                <div class='flex gap-2'>
                    <input type='text' name='q' value='{term}' placeholder='{placeholder}'
                        hx-get='/{slug}/list' hx-target='#records-content' hx-trigger='keyup changed delay:300ms'
                        class='px-4 py-2 border rounded-lg w-56'>
                    <button hx-get='/{slug}/create' hx-swap='beforeend' hx-target='body'
                        class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>{add}</button>
                </div>
            </div>
            <div id='records-content'>{list}</div>
        </div>"#,
        title = kind.page_title(),
        heading = kind.list_heading(),
        term = escape_html(view.search_term()),
        placeholder = kind.search_placeholder(),
        slug = slug,
        add = kind.add_label(),
        list = render_list(kind, view, &[]),
    );

    Ok(axum::response::Html(crate::page_response(
        &headers,
        kind.page_title(),
        &format!("/{}", slug),
        &inner_content,
    )))
}

/// Render notices, the visible page of records and the pagination controls
pub fn render_list(kind: ResourceKind, view: &ListViewState, notices: &[Notice]) -> String {
    let mut html = render_notices(notices);
    html.push_str(&render_table(kind, view));
    html.push_str(&render_pagination(kind, view));
    html
}

fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| {
            let class = match notice.level {
                NoticeLevel::Success => "bg-green-50 border-green-200 text-green-800",
                NoticeLevel::Info => "bg-blue-50 border-blue-200 text-blue-800",
                NoticeLevel::Warning => "bg-yellow-50 border-yellow-200 text-yellow-800",
            };
            format!(
                r#"<div class='notice mb-3 px-4 py-2 border rounded-lg text-sm {}'>{}</div>"#,
                class,
                escape_html(&notice.message)
            )
        })
        .collect()
}

fn render_table(kind: ResourceKind, view: &ListViewState) -> String {
    let columns = kind.columns();
    let mut html = String::from("<table class='w-full text-left'><thead><tr class='border-b text-sm text-gray-500'>");
    for column in columns {
        html.push_str(&format!("<th class='py-2 px-3'>{}</th>", column.header));
    }
    html.push_str("<th class='py-2 px-3 text-right'>Actions</th></tr></thead><tbody>");

    let rows = view.paginated();
    if rows.is_empty() {
        html.push_str(&format!(
            "<tr><td colspan='{}' class='py-6 text-center text-gray-500'>{}</td></tr>",
            columns.len() + 1,
            kind.empty_message()
        ));
    }

    for record in rows {
        html.push_str("<tr class='border-b hover:bg-gray-50'>");
        for column in columns {
            html.push_str(&format!("<td class='py-2 px-3'>{}</td>", format_cell(column, record)));
        }
        html.push_str(&render_row_actions(kind, record));
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn format_cell(column: &Column, record: &Record) -> String {
    let value = escape_html(record.value(column.field));
    match column.format {
        CellFormat::Emphasis => format!("<span class='font-medium'>{}</span>", value),
        CellFormat::Muted => format!("<span class='text-gray-600'>{}</span>", value),
        CellFormat::Code => format!("<code class='text-sm bg-gray-100 px-1 rounded'>{}</code>", value),
        CellFormat::Date => format!("<time datetime='{0}' class='text-gray-600'>{0}</time>", value),
    }
}

fn render_row_actions(kind: ResourceKind, record: &Record) -> String {
    let slug = kind.slug();
    format!(
        r#"<td class='py-2 px-3 text-right whitespace-nowrap'>
            <button hx-get='/{slug}/{id}/edit' hx-swap='beforeend' hx-target='body' class='px-3 py-1 text-sm border rounded hover:bg-gray-100'>Edit</button>
            <button hx-delete='/{slug}/{id}?confirm=true' hx-confirm='Are you sure you want to delete {name}?' hx-target='#records-content' class='px-3 py-1 text-sm border border-red-200 text-red-600 rounded hover:bg-red-50'>Delete</button>
        </td>"#,
        slug = slug,
        id = record.id,
        name = escape_html(kind.display_name(record)),
    )
}

fn render_pagination(kind: ResourceKind, view: &ListViewState) -> String {
    format!(
        r#"<div class='mt-4 flex items-center justify-between'>
            <span class='text-sm text-gray-500'>Page {page} of {total}</span>
            <div class='flex items-center gap-2'>
                <button {prev_disabled} hx-get='/{slug}/list?step=prev' hx-target='#records-content' class='px-3 py-1 border rounded hover:bg-gray-100'>Previous</button>
                <button {next_disabled} hx-get='/{slug}/list?step=next' hx-target='#records-content' class='px-3 py-1 border rounded hover:bg-gray-100'>Next</button>
            </div>
        </div>"#,
        page = view.page(),
        total = view.total_pages(),
        prev_disabled = if view.has_prev() { "" } else { "disabled" },
        next_disabled = if view.has_next() { "" } else { "disabled" },
        slug = kind.slug(),
    )
}

/// Add form (no record) or edit form (prefilled from the record)
pub fn render_form(kind: ResourceKind, record: Option<&Record>) -> String {
    let slug = kind.slug();
    let (title, action, submit) = match record {
        Some(record) => (
            format!("Edit {}", escape_html(kind.display_name(record))),
            format!("hx-put='/{}/{}'", slug, record.id),
            "Save",
        ),
        None => (kind.add_label().to_string(), format!("hx-post='/{}'", slug), "Add"),
    };

    let inputs: String = kind
        .columns()
        .iter()
        .map(|column| {
            let value = record.map(|r| escape_html(r.value(column.field))).unwrap_or_default();
            let input_type = if column.format == CellFormat::Date { "date" } else { "text" };
            format!(
                r#"<label class='block mb-3'><span class='text-sm text-gray-700'>{}</span>
                    <input type='{}' name='{}' value='{}' class='mt-1 w-full px-3 py-2 border rounded-lg'></label>"#,
                column.header, input_type, column.field, value
            )
        })
        .collect();

    format!(
        r#"<div id='record-modal' class='fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center' onclick='if(event.target.id === "record-modal") closeRecordModal()'>
    <div class='bg-white rounded-xl shadow-2xl w-full max-w-lg' onclick='event.stopPropagation()'>
        <div class='flex items-center justify-between px-6 py-4 border-b'>
            <h2 class='text-xl font-bold'>{title}</h2>
            <button onclick='closeRecordModal()' class='text-gray-500 hover:text-gray-700 p-2'>&times;</button>
        </div>
        <form {action} hx-target='#records-content' hx-swap='innerHTML' hx-on::after-request='closeRecordModal()' class='p-6'>
            {inputs}
            <div class='flex justify-end gap-2 mt-4'>
                <button type='button' onclick='closeRecordModal()' class='px-4 py-2 border rounded-lg hover:bg-gray-50'>Cancel</button>
                <button type='submit' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>{submit}</button>
            </div>
        </form>
    </div>
</div>
<script>
function closeRecordModal() {{
    const modal = document.getElementById('record-modal');
    if (modal) {{ modal.remove(); }}
}}
</script>"#,
        title = title,
        action = action,
        inputs = inputs,
        submit = submit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_message() {
        let mut view = ResourceKind::Users.demo_view(5);
        view.set_search_term("nobody-matches-this");
        let html = render_list(ResourceKind::Users, &view, &[]);
        assert!(html.contains("No users found."));
        assert!(html.contains("Page 1 of 1"));
        assert_eq!(html.matches(" disabled ").count(), 2);
    }

    #[test]
    fn test_pagination_buttons() {
        let kind = ResourceKind::Subscriptions;
        let mut view = kind.demo_view(5);
        let html = render_list(kind, &view, &[]);
        assert!(html.contains("Page 1 of 3"));
        assert!(html.contains("<button disabled hx-get='/subscriptions/list?step=prev'"));
        assert!(html.contains("<button  hx-get='/subscriptions/list?step=next'"));

        view.set_page(3);
        let html = render_list(kind, &view, &[]);
        assert!(html.contains("Page 3 of 3"));
        assert!(html.contains("<button  hx-get='/subscriptions/list?step=prev'"));
        assert!(html.contains("<button disabled hx-get='/subscriptions/list?step=next'"));
        assert!(html.contains("Business Plan"));
        assert!(!html.contains("Basic Plan"));
    }

    #[test]
    fn test_cells_are_escaped() {
        let kind = ResourceKind::Users;
        let mut view = kind.empty_view(5);
        view.add_record(adminweb_core::record::fields([("fullName", "<b>Eve</b>")]));
        let html = render_list(kind, &view, &[Notice::success("Added user <b>Eve</b>")]);
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(!html.contains("<b>Eve</b>"));
        assert!(html.contains("bg-green-50"));
    }

    #[test]
    fn test_forms() {
        let kind = ResourceKind::Transactions;
        let add = render_form(kind, None);
        assert!(add.contains("hx-post='/transactions'"));
        assert!(add.contains("Add Transaction"));
        assert!(add.contains("type='date' name='createdAt' value=''"));

        let view = kind.demo_view(5);
        let edit = render_form(kind, view.record(8));
        assert!(edit.contains("hx-put='/transactions/8'"));
        assert!(edit.contains("name='transactionName' value='Chargeback'"));
        assert!(edit.contains("value='2025-08-22'"));
    }
}
