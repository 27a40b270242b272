//! Record routes - list, search, pagination and record actions
//!
//! One set of handlers serves every resource; the `:resource` path segment
//! selects the list view in the workspace.
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page and fragment rendering
//! - prompt.rs: Request-scoped confirmation for record actions

pub mod api;
pub mod page;
pub mod prompt;

use crate::ApiError;
use adminweb_core::{CoreError, DefaultErrorLogger, ErrorContext, ErrorLogger, ResourceKind};

pub use api::{
    api_record_detail,
    api_records,
    htmx_record_create_form,
    htmx_record_delete,
    htmx_record_edit_form,
    htmx_record_store,
    htmx_record_update,
    htmx_records_list,
};
pub use page::{page_records, render_form, render_list};
pub use prompt::RequestPrompt;

/// Log a failed lookup or bad parameter and turn it into a response error
pub(crate) fn report(error: CoreError, operation: &str, kind: ResourceKind) -> ApiError {
    DefaultErrorLogger.log_error(&error, &ErrorContext::new(operation).with_resource(kind));
    ApiError::from(error)
}

/// Resolve the `:resource` path segment
pub(crate) fn parse_kind(resource: &str, operation: &str) -> Result<ResourceKind, ApiError> {
    resource.parse::<ResourceKind>().map_err(|_| {
        let error = CoreError::UnknownResource {
            name: resource.to_string(),
        };
        DefaultErrorLogger.log_error(&error, &ErrorContext::new(operation));
        ApiError::from(error)
    })
}
