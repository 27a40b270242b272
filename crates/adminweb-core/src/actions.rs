//! Add / edit / delete actions with an injected confirmation capability
//!
//! The list view itself never asks questions or reports results. `Actions`
//! sits between user input and `ListViewState`: it asks the supplied
//! `Prompt` before destructive changes and reports every outcome back to it.

use serde::{Deserialize, Serialize};

use crate::error::{DefaultErrorLogger, ErrorContext, ErrorLogger};
use crate::listview::ListViewState;
use crate::record::{FieldMap, RecordId};
use crate::resource::ResourceKind;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

/// Message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }
}

/// Confirmation and notification capability supplied by the caller
pub trait Prompt {
    /// Ask the user to confirm; `false` cancels the action
    fn confirm(&mut self, message: &str) -> bool;
    /// Report the result of an action
    fn notify(&mut self, notice: Notice);
}

/// Prompt that confirms everything and writes notices to the log
#[derive(Debug, Default)]
pub struct AutoConfirm;

impl Prompt for AutoConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        log::debug!("auto-confirmed: {}", message);
        true
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Warning => log::warn!("{}", notice.message),
            _ => log::info!("{}", notice.message),
        }
    }
}

/// Result of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "id")]
pub enum ActionOutcome {
    /// The change was made to the record with this id
    Applied(RecordId),
    /// The user declined the confirmation
    Declined,
    /// No record has the requested id
    NotFound,
    /// The submitted fields were all empty
    Rejected,
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied(_))
    }
}

/// Action collaborator bound to one prompt
pub struct Actions<'a, P: Prompt + ?Sized> {
    prompt: &'a mut P,
}

impl<'a, P: Prompt + ?Sized> Actions<'a, P> {
    pub fn new(prompt: &'a mut P) -> Self {
        Self { prompt }
    }

    /// Add a record from form fields
    ///
    /// Derived fields are filled in only after the submitted ones are known
    /// to hold at least one value.
    pub fn add(&mut self, kind: ResourceKind, view: &mut ListViewState, mut fields: FieldMap) -> ActionOutcome {
        fields.retain(|_, v| !v.trim().is_empty());
        if fields.is_empty() {
            self.prompt.notify(Notice::warning(format!("Nothing to add: the {} form was empty", kind.noun())));
            return ActionOutcome::Rejected;
        }
        kind.complete_fields(&mut fields);

        let name = fields.get(kind.name_field()).cloned().unwrap_or_default();
        let id = view.add_record(fields);
        log::info!("added {} #{} ({})", kind.noun(), id, name);
        self.prompt.notify(Notice::success(format!("Added {} {}", kind.noun(), name)));
        ActionOutcome::Applied(id)
    }

    /// Merge non-empty form fields into an existing record
    pub fn edit(&mut self, kind: ResourceKind, view: &mut ListViewState, id: RecordId, mut fields: FieldMap) -> ActionOutcome {
        // Blank inputs keep the current value
        fields.retain(|_, v| !v.trim().is_empty());

        match view.edit_record(id, fields) {
            Some(record) => {
                let name = kind.display_name(record).to_string();
                log::info!("edited {} #{} ({})", kind.noun(), id, name);
                self.prompt.notify(Notice::success(format!("Updated {} {}", kind.noun(), name)));
                ActionOutcome::Applied(id)
            }
            None => {
                self.notify_missing("edit", kind, id);
                ActionOutcome::NotFound
            }
        }
    }

    /// Delete a record after the prompt confirms
    pub fn delete(&mut self, kind: ResourceKind, view: &mut ListViewState, id: RecordId) -> ActionOutcome {
        let name = match view.record(id) {
            Some(record) => kind.display_name(record).to_string(),
            None => {
                self.notify_missing("delete", kind, id);
                return ActionOutcome::NotFound;
            }
        };

        if !self.prompt.confirm(&format!("Are you sure you want to delete {}?", name)) {
            log::debug!("delete of {} #{} declined", kind.noun(), id);
            return ActionOutcome::Declined;
        }

        match view.delete_record(id) {
            Some(_) => {
                log::info!("deleted {} #{} ({})", kind.noun(), id, name);
                self.prompt.notify(Notice::success(format!("Deleted {} {}", kind.noun(), name)));
                ActionOutcome::Applied(id)
            }
            None => {
                self.notify_missing("delete", kind, id);
                ActionOutcome::NotFound
            }
        }
    }

    fn notify_missing(&mut self, operation: &str, kind: ResourceKind, id: RecordId) {
        DefaultErrorLogger.log_warning(
            &format!("{} #{} not found", kind.noun(), id),
            &ErrorContext::new(operation).with_resource(kind),
        );
        self.prompt.notify(Notice::warning(format!("The {} #{} no longer exists", kind.noun(), id)));
    }
}
