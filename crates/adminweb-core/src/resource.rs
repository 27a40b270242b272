//! Resource definitions: which lists exist, how they are searched and shown

use serde::{Deserialize, Serialize};

use crate::listview::ListViewState;
use crate::record::{fields, FieldMap, Record};

/// Kind of record managed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Users,
    Subscriptions,
    Transactions,
}

/// How a cell value is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    /// Primary column, bold
    Emphasis,
    /// Secondary text
    Muted,
    /// Monospace identifier
    Code,
    /// YYYY-MM-DD date
    Date,
}

/// Table column: field name, header label, formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub header: &'static str,
    pub format: CellFormat,
}

const fn column(field: &'static str, header: &'static str, format: CellFormat) -> Column {
    Column { field, header, format }
}

static USER_COLUMNS: [Column; 3] = [
    column("fullName", "Full Name", CellFormat::Emphasis),
    column("email", "Email", CellFormat::Muted),
    column("role", "Role", CellFormat::Muted),
];

static SUBSCRIPTION_COLUMNS: [Column; 2] = [
    column("planName", "Subscription Plan", CellFormat::Emphasis),
    column("slug", "Slug", CellFormat::Code),
];

static TRANSACTION_COLUMNS: [Column; 2] = [
    column("transactionName", "Transaction Name", CellFormat::Emphasis),
    column("createdAt", "Created Date", CellFormat::Date),
];

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Users,
        ResourceKind::Subscriptions,
        ResourceKind::Transactions,
    ];

    /// URL slug
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Subscriptions => "subscriptions",
            ResourceKind::Transactions => "transactions",
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            ResourceKind::Users => &USER_COLUMNS,
            ResourceKind::Subscriptions => &SUBSCRIPTION_COLUMNS,
            ResourceKind::Transactions => &TRANSACTION_COLUMNS,
        }
    }

    /// Fields the search box matches against
    pub fn search_fields(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Users => &["fullName", "email", "role"],
            ResourceKind::Subscriptions => &["planName", "slug"],
            ResourceKind::Transactions => &["transactionName"],
        }
    }

    /// Field naming a record in prompts and notices
    pub fn name_field(&self) -> &'static str {
        self.columns()[0].field
    }

    /// Human-readable name of a record
    pub fn display_name<'a>(&self, record: &'a Record) -> &'a str {
        record.value(self.name_field())
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            ResourceKind::Users => "Users Management",
            ResourceKind::Subscriptions => "Subscription Management",
            ResourceKind::Transactions => "Transaction Management",
        }
    }

    pub fn list_heading(&self) -> &'static str {
        match self {
            ResourceKind::Users => "User List",
            ResourceKind::Subscriptions => "Subscriptions",
            ResourceKind::Transactions => "Transactions",
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            ResourceKind::Users => "Search user...",
            ResourceKind::Subscriptions => "Search subscriptions...",
            ResourceKind::Transactions => "Search transactions...",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ResourceKind::Users => "No users found.",
            ResourceKind::Subscriptions => "No subscriptions found.",
            ResourceKind::Transactions => "No transactions found.",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            ResourceKind::Users => "user",
            ResourceKind::Subscriptions => "subscription",
            ResourceKind::Transactions => "transaction",
        }
    }

    pub fn add_label(&self) -> &'static str {
        match self {
            ResourceKind::Users => "Add User",
            ResourceKind::Subscriptions => "Add Subscription",
            ResourceKind::Transactions => "Add Transaction",
        }
    }

    /// Fill in fields the add form may leave empty
    ///
    /// Subscriptions derive `slug` from `planName`; transactions default
    /// `createdAt` to today.
    pub fn complete_fields(&self, fields: &mut FieldMap) {
        fields.retain(|_, v| !v.trim().is_empty());
        match self {
            ResourceKind::Users => {}
            ResourceKind::Subscriptions => {
                if !fields.contains_key("slug") {
                    if let Some(name) = fields.get("planName") {
                        let slug = adminweb_utils::slugify(name);
                        fields.insert("slug".to_string(), slug);
                    }
                }
            }
            ResourceKind::Transactions => {
                fields
                    .entry("createdAt".to_string())
                    .or_insert_with(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            }
        }
    }

    /// Empty list view for this kind
    pub fn empty_view(&self, page_size: usize) -> ListViewState {
        ListViewState::new(self.search_fields().iter().copied(), page_size)
    }

    /// List view seeded with demo data
    pub fn demo_view(&self, page_size: usize) -> ListViewState {
        self.empty_view(page_size).with_records(self.demo_records())
    }

    /// Demo records shown on a fresh dashboard
    pub fn demo_records(&self) -> Vec<FieldMap> {
        match self {
            ResourceKind::Users => [
                ("John Carter", "john.carter@example.com", "Administrator"),
                ("Sarah Johnson", "sarah.j@example.com", "Manager"),
                ("Amit Verma", "amit.verma@example.com", "Editor"),
                ("Lisa Wong", "lisa.wong@example.com", "HR Executive"),
                ("Michael Smith", "m.smith@example.com", "Finance"),
                ("Priya Sharma", "priya.sharma@example.com", "Viewer"),
                ("David Green", "david.green@example.com", "Support"),
                ("Emily Brown", "emily.brown@example.com", "Developer"),
                ("Rohit Kumar", "rohit.kumar@example.com", "Operations"),
                ("Anna Lee", "anna.lee@example.com", "Intern"),
            ]
            .into_iter()
            .map(|(name, email, role)| fields([("fullName", name), ("email", email), ("role", role)]))
            .collect(),
            ResourceKind::Subscriptions => [
                "Basic Plan",
                "Pro Plan",
                "Enterprise Plan",
                "Startup Plan",
                "Premium Plan",
                "Advanced Plan",
                "Team Plan",
                "Solo Plan",
                "Unlimited Plan",
                "Trial Plan",
                "Business Plan",
                "Ultimate Plan",
            ]
            .into_iter()
            .map(|name| {
                let mut record = fields([("planName", name)]);
                self.complete_fields(&mut record);
                record
            })
            .collect(),
            ResourceKind::Transactions => [
                ("Payment - Invoice #1001", "2025-09-12"),
                ("Refund - Invoice #1002", "2025-10-01"),
                ("Payment - Subscription", "2025-10-15"),
                ("Adjustment - Credit", "2025-11-02"),
                ("Payment - Order #2023", "2025-11-04"),
                ("Refund - Order #2022", "2025-09-29"),
                ("Payment - Renewal", "2025-10-10"),
                ("Chargeback", "2025-08-22"),
                ("Payment - Invoice #1010", "2025-09-05"),
                ("Refund - Invoice #1011", "2025-11-06"),
            ]
            .into_iter()
            .map(|(name, date)| fields([("transactionName", name), ("createdAt", date)]))
            .collect(),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "users" => Ok(ResourceKind::Users),
            "subscriptions" => Ok(ResourceKind::Subscriptions),
            "transactions" => Ok(ResourceKind::Transactions),
            _ => Err(format!("Unknown resource: {}", s)),
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}
