//! Record data model shared by every list view

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique record identifier within one list view
pub type RecordId = u64;

/// Field name to display value
pub type FieldMap = BTreeMap<String, String>;

/// One row of application data (a user, subscription, or transaction)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier assigned by the owning list view
    pub id: RecordId,
    /// Display values keyed by field name
    pub fields: FieldMap,
}

impl Record {
    pub fn new(id: RecordId, fields: FieldMap) -> Self {
        Self { id, fields }
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Get a field value or an empty string
    pub fn value(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Merge fields into this record, replacing existing values
    pub fn merge(&mut self, fields: FieldMap) {
        self.fields.extend(fields);
    }

    /// Check whether any of the given fields contains `needle_lower`
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, search_fields: &[String], needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        search_fields.iter().any(|field| {
            self.get(field)
                .map_or(false, |v| v.to_lowercase().contains(needle_lower))
        })
    }
}

/// Build a `FieldMap` from string pairs
pub fn fields<'a, I>(pairs: I) -> FieldMap
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
