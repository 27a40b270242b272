//! Core list view state and record actions for the admin dashboard

pub mod actions;
pub mod error;
pub mod listview;
pub mod record;
pub mod resource;

use adminweb_config::Config;
use serde::{Deserialize, Serialize};

pub use actions::{ActionOutcome, Actions, AutoConfirm, Notice, NoticeLevel, Prompt};
pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity};
pub use listview::{ListViewState, PageView};
pub use record::{FieldMap, Record, RecordId};
pub use resource::{CellFormat, Column, ResourceKind};

/// Session state: one list view per resource
pub struct Workspace {
    users: ListViewState,
    subscriptions: ListViewState,
    transactions: ListViewState,
}

/// Record counts for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSummary {
    pub users: usize,
    pub subscriptions: usize,
    pub transactions: usize,
    pub page_size: usize,
}

impl Workspace {
    /// Workspace with every list empty
    pub fn empty(page_size: usize) -> Self {
        Self::build(page_size, ResourceKind::empty_view)
    }

    /// Workspace with every list seeded with demo data
    pub fn demo(page_size: usize) -> Self {
        Self::build(page_size, ResourceKind::demo_view)
    }

    /// Build from configuration
    pub fn from_config(config: &Config) -> Self {
        let page_size = config.pagination.page_size;
        if config.data.demo_data {
            log::info!("Seeding workspace with demo data (page size {})", page_size);
            Self::demo(page_size)
        } else {
            log::info!("Starting with empty lists (page size {})", page_size);
            Self::empty(page_size)
        }
    }

    fn build(page_size: usize, make: fn(&ResourceKind, usize) -> ListViewState) -> Self {
        Self {
            users: make(&ResourceKind::Users, page_size),
            subscriptions: make(&ResourceKind::Subscriptions, page_size),
            transactions: make(&ResourceKind::Transactions, page_size),
        }
    }

    pub fn view(&self, kind: ResourceKind) -> &ListViewState {
        match kind {
            ResourceKind::Users => &self.users,
            ResourceKind::Subscriptions => &self.subscriptions,
            ResourceKind::Transactions => &self.transactions,
        }
    }

    pub fn view_mut(&mut self, kind: ResourceKind) -> &mut ListViewState {
        match kind {
            ResourceKind::Users => &mut self.users,
            ResourceKind::Subscriptions => &mut self.subscriptions,
            ResourceKind::Transactions => &mut self.transactions,
        }
    }

    /// Look up a record, reporting a miss as an error
    pub fn record(&self, kind: ResourceKind, id: RecordId) -> CoreResult<&Record> {
        self.view(kind)
            .record(id)
            .ok_or(CoreError::RecordNotFound { kind, id })
    }

    pub fn summary(&self) -> WorkspaceSummary {
        WorkspaceSummary {
            users: self.users.len(),
            subscriptions: self.subscriptions.len(),
            transactions: self.transactions.len(),
            page_size: self.users.page_size(),
        }
    }
}

// ==================== Tests ====================
