//! Searchable, paginated in-memory list view
//!
//! `ListViewState` owns a record set together with the search term and the
//! page cursor. Every derived view (`filtered`, `paginated`, `snapshot`) is
//! computed from that state on demand, so renderers never hold stale slices.
//!
//! The page cursor is 1-based and always satisfies
//! `1 <= page <= total_pages()`, where `total_pages()` is at least 1 even
//! when nothing matches.

use serde::{Deserialize, Serialize};

use crate::record::{FieldMap, Record, RecordId};

/// Record set plus search and pagination cursor for one list
#[derive(Debug, Clone)]
pub struct ListViewState {
    records: Vec<Record>,
    search_fields: Vec<String>,
    page_size: usize,
    search_term: String,
    page: usize,
    next_id: RecordId,
}

/// Serializable snapshot of the visible page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    pub rows: Vec<Record>,
    pub page: usize,
    pub total_pages: usize,
    /// Number of records matching the search term
    pub total_count: usize,
    pub page_size: usize,
    pub search_term: String,
    pub has_prev: bool,
    pub has_next: bool,
}

impl ListViewState {
    /// Create an empty list searching the given fields
    ///
    /// A page size of 0 is treated as 1.
    pub fn new<I, S>(search_fields: I, page_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: Vec::new(),
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            page_size: page_size.max(1),
            search_term: String::new(),
            page: 1,
            next_id: 1,
        }
    }

    /// Create a list pre-populated with records, assigning ids from 1
    pub fn with_records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = FieldMap>,
    {
        for fields in records {
            self.add_record(fields);
        }
        self
    }

    // ==================== State ====================

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// All records in insertion order, ignoring the search term
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records, ignoring the search term
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id, ignoring the search term
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    // ==================== Transitions ====================

    /// Replace the search term and go back to the first page
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
        log::debug!(
            "search term set to {:?}: {} of {} records match",
            self.search_term,
            self.total_count(),
            self.records.len()
        );
    }

    /// Move to page `n`, clamped to `[1, total_pages]`
    pub fn set_page(&mut self, n: usize) {
        let total_pages = self.total_pages();
        self.page = n.clamp(1, total_pages);
        if self.page != n {
            log::debug!("page {} clamped to {} (of {})", n, self.page, total_pages);
        }
    }

    /// Previous control; stays on page 1
    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Next control; stays on the last page
    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    /// Append a record with a fresh id; the page cursor is left alone
    pub fn add_record(&mut self, fields: FieldMap) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(Record::new(id, fields));
        log::debug!("record {} added ({} total)", id, self.records.len());
        id
    }

    /// Merge fields into the record with `id`
    ///
    /// Returns `None` and leaves the list untouched when no record matches.
    pub fn edit_record(&mut self, id: RecordId, fields: FieldMap) -> Option<&Record> {
        let index = self.records.iter().position(|r| r.id == id)?;
        self.records[index].merge(fields);
        // An edited record may stop matching the search term
        self.clamp_page();
        log::debug!("record {} edited", id);
        Some(&self.records[index])
    }

    /// Remove the record with `id`
    ///
    /// Returns the removed record, or `None` when no record matches.
    pub fn delete_record(&mut self, id: RecordId) -> Option<Record> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(index);
        self.clamp_page();
        log::debug!("record {} deleted, now on page {}", id, self.page);
        Some(removed)
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }

    // ==================== Derived views ====================

    /// Records whose search fields contain the search term, case-insensitively
    pub fn filtered(&self) -> Vec<&Record> {
        let needle = self.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches(&self.search_fields, &needle))
            .collect()
    }

    /// Number of records matching the search term
    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    /// Number of pages, never less than 1
    pub fn total_pages(&self) -> usize {
        let count = self.total_count();
        ((count + self.page_size - 1) / self.page_size).max(1)
    }

    /// The slice of `filtered()` shown on the current page
    pub fn paginated(&self) -> Vec<&Record> {
        let start = (self.page - 1) * self.page_size;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Owned snapshot of the current page for renderers and the JSON API
    pub fn snapshot(&self) -> PageView {
        PageView {
            rows: self.paginated().into_iter().cloned().collect(),
            page: self.page,
            total_pages: self.total_pages(),
            total_count: self.total_count(),
            page_size: self.page_size,
            search_term: self.search_term.clone(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fields;

    fn plans(count: usize) -> ListViewState {
        let names: Vec<String> = (1..=count).map(|i| format!("Plan {}", i)).collect();
        ListViewState::new(["planName", "slug"], 5).with_records(
            names
                .iter()
                .map(|name| fields([("planName", name.as_str()), ("slug", "tier")])),
        )
    }

    fn ids(records: &[&Record]) -> Vec<RecordId> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_first_page_of_twelve() {
        let view = plans(12);
        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.page(), 1);
        assert_eq!(ids(&view.paginated()), vec![1, 2, 3, 4, 5]);
        assert!(!view.has_prev());
        assert!(view.has_next());
    }

    #[test]
    fn test_total_pages_never_zero() {
        let view = ListViewState::new(["name"], 5);
        assert_eq!(view.total_count(), 0);
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page(), 1);
        assert!(view.paginated().is_empty());
        assert!(!view.has_next());
    }

    #[test]
    fn test_zero_page_size_is_one() {
        let view = ListViewState::new(["name"], 0).with_records(vec![
            fields([("name", "a")]),
            fields([("name", "b")]),
        ]);
        assert_eq!(view.page_size(), 1);
        assert_eq!(view.total_pages(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let mut view = ListViewState::new(["fullName", "role"], 5).with_records(vec![
            fields([("fullName", "John Carter"), ("role", "Administrator")]),
            fields([("fullName", "Sarah Johnson"), ("role", "Manager")]),
            fields([("fullName", "Amit Verma"), ("role", "Editor")]),
        ]);

        view.set_search_term("JOHN");
        assert_eq!(ids(&view.filtered()), vec![1, 2]);

        view.set_search_term("edit");
        assert_eq!(ids(&view.filtered()), vec![3]);

        view.set_search_term("nobody");
        assert!(view.filtered().is_empty());
        assert_eq!(view.total_pages(), 1);

        view.set_search_term("");
        assert_eq!(ids(&view.filtered()), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_only_returns_matches() {
        let view_terms = ["", "plan", "1", "Plan 1", "tier", "x", "PLAN 12"];
        for term in view_terms {
            let mut view = plans(12);
            view.set_search_term(term);
            let needle = term.to_lowercase();
            for record in view.filtered() {
                assert!(
                    record.value("planName").to_lowercase().contains(&needle)
                        || record.value("slug").to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn test_search_resets_page() {
        let mut view = plans(12);
        view.set_page(3);
        assert_eq!(view.page(), 3);
        view.set_search_term("plan");
        assert_eq!(view.page(), 1);

        view.set_page(2);
        view.set_search_term("plan");
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_matching_search_keeps_count_and_clamps_page() {
        let mut view = plans(12);
        view.set_search_term("plan");
        assert_eq!(view.filtered().len(), 12);
        view.set_page(10);
        assert_eq!(view.page(), 3);
        view.set_page(0);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_pages_concat_to_filtered() {
        for count in [0, 1, 4, 5, 6, 12, 15] {
            for term in ["", "1", "plan 2", "none"] {
                let mut view = plans(count);
                view.set_search_term(term);
                let expected = ids(&view.filtered());

                let mut collected = Vec::new();
                for page in 1..=view.total_pages() {
                    view.set_page(page);
                    let rows = view.paginated();
                    assert!(rows.len() <= view.page_size());
                    collected.extend(ids(&rows));
                }
                assert_eq!(collected, expected, "count={} term={:?}", count, term);
            }
        }
    }

    #[test]
    fn test_prev_next_saturate() {
        let mut view = plans(12);
        view.prev_page();
        assert_eq!(view.page(), 1);
        view.next_page();
        view.next_page();
        assert_eq!(view.page(), 3);
        assert!(!view.has_next());
        view.next_page();
        assert_eq!(view.page(), 3);
        assert_eq!(ids(&view.paginated()), vec![11, 12]);
    }

    #[test]
    fn test_delete_last_record_on_last_page_moves_back() {
        let mut view = plans(11);
        view.set_page(3);
        assert_eq!(ids(&view.paginated()), vec![11]);

        let removed = view.delete_record(11).unwrap();
        assert_eq!(removed.id, 11);
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn test_delete_only_record_stays_on_page_one() {
        let mut view = plans(1);
        assert!(view.delete_record(1).is_some());
        assert!(view.is_empty());
        assert_eq!(view.page(), 1);
        assert_eq!(view.total_pages(), 1);
    }

    #[test]
    fn test_delete_keeps_page_when_still_valid() {
        let mut view = plans(12);
        view.set_page(2);
        view.delete_record(1);
        assert_eq!(view.page(), 2);
        assert_eq!(ids(&view.paginated()), vec![7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let mut view = plans(6);
        view.set_page(2);
        let before = view.records().to_vec();

        assert!(view.delete_record(99).is_none());
        assert!(view.edit_record(99, fields([("planName", "Ghost")])).is_none());
        assert_eq!(view.records(), before.as_slice());
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn test_add_keeps_page_and_uses_fresh_ids() {
        let mut view = plans(12);
        view.set_page(2);
        let id = view.add_record(fields([("planName", "Family Plan"), ("slug", "family-plan")]));
        assert_eq!(id, 13);
        assert_eq!(view.page(), 2);
        assert!(view.filtered().iter().any(|r| r.id == id));

        // ids are never reused after a delete
        view.delete_record(13);
        let next = view.add_record(fields([("planName", "Another")]));
        assert_eq!(next, 14);
    }

    #[test]
    fn test_added_record_respects_search_term() {
        let mut view = plans(12);
        view.set_search_term("plan");
        view.set_page(2);

        let id = view.add_record(fields([("planName", "Gold"), ("slug", "gold")]));
        assert_eq!(view.page(), 2);
        assert!(!view.filtered().iter().any(|r| r.id == id));

        view.set_search_term("gold");
        assert_eq!(ids(&view.paginated()), vec![id]);
    }

    #[test]
    fn test_edit_merges_fields() {
        let mut view = plans(3);
        let edited = view.edit_record(2, fields([("slug", "renamed")])).unwrap();
        assert_eq!(edited.get("slug"), Some("renamed"));
        assert_eq!(edited.get("planName"), Some("Plan 2"));
    }

    #[test]
    fn test_edit_out_of_filter_clamps_page() {
        let mut view = plans(6);
        view.set_search_term("plan");
        view.set_page(2);
        assert_eq!(ids(&view.paginated()), vec![6]);

        view.edit_record(6, fields([("planName", "Legacy"), ("slug", "legacy")]));
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_snapshot() {
        let mut view = plans(12);
        view.set_page(3);
        let snapshot = view.snapshot();
        assert_eq!(snapshot.page, 3);
        assert_eq!(snapshot.total_pages, 3);
        assert_eq!(snapshot.total_count, 12);
        assert_eq!(snapshot.rows.len(), 2);
        assert!(snapshot.has_prev);
        assert!(!snapshot.has_next);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["rows"][0]["fields"]["planName"], "Plan 11");
    }

    #[test]
    fn test_total_count_follows_filter() {
        let mut view = plans(12);
        for (term, expected) in [("", 12), ("1", 4), ("TIER", 12), ("plan 2", 1), ("zzz", 0)] {
            view.set_search_term(term);
            assert_eq!(view.total_count(), expected, "term {:?}", term);
            assert_eq!(view.total_count(), view.filtered().len());
        }
    }
}
