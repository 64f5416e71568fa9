use std::collections::HashMap;

use tracing::warn;

use crate::models::{ReviewBadge, ReviewState, ThreadRecord, ThreadSummary};

/// Normalized thread store - single source of truth for the review session.
///
/// Records are keyed by `thread_id` with backend order kept separately, so
/// there is exactly one copy of every record; the UI refers to the selected
/// thread by id and looks it up here. Reloading the process discards all of
/// it and re-fetches, by design.
#[derive(Debug, Default)]
pub struct ThreadStore {
    records: HashMap<String, ThreadRecord>,
    order: Vec<String>,
}

impl ThreadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with a fresh fetch result, preserving backend
    /// order. A duplicate `thread_id` keeps the last occurrence; the id is
    /// the join key and must stay unique.
    pub fn load(&mut self, records: Vec<ThreadRecord>) {
        self.records.clear();
        self.order.clear();
        for record in records {
            let id = record.thread_id().to_string();
            if self.records.insert(id.clone(), record).is_some() {
                warn!(thread_id = %id, "duplicate thread_id in fetch result");
            } else {
                self.order.push(id);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, thread_id: &str) -> Option<&ThreadRecord> {
        self.records.get(thread_id)
    }

    /// Records in backend order
    pub fn records(&self) -> impl Iterator<Item = &ThreadRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Position of a thread in display order
    pub fn position(&self, thread_id: &str) -> Option<usize> {
        self.order.iter().position(|id| id == thread_id)
    }

    pub fn record_at(&self, index: usize) -> Option<&ThreadRecord> {
        self.order.get(index).and_then(|id| self.records.get(id))
    }

    pub fn review_badge(&self, thread_id: &str) -> ReviewBadge {
        ReviewBadge::of(self.get(thread_id).and_then(|r| r.summary.as_ref()))
    }

    /// Install a freshly generated summary as `Pending`. Replaces whatever is
    /// present: racing generate requests resolve latest-response-wins.
    /// Returns false when the thread is unknown.
    pub fn install_summary(&mut self, thread_id: &str, mut summary: ThreadSummary) -> bool {
        let Some(record) = self.records.get_mut(thread_id) else {
            warn!(thread_id, "summary arrived for unknown thread");
            return false;
        };
        summary.review = ReviewState::Pending;
        record.summary = Some(summary);
        true
    }

    /// Commit an edit: replace summary text and action items only, marking
    /// the summary `Edited`. Refused when no summary exists or the summary is
    /// already approved.
    pub fn apply_edit(
        &mut self,
        thread_id: &str,
        text: String,
        action_items: Vec<String>,
    ) -> bool {
        let Some(summary) = self
            .records
            .get_mut(thread_id)
            .and_then(|r| r.summary.as_mut())
        else {
            return false;
        };
        if summary.review.is_approved() {
            return false;
        }
        summary.summary = text;
        summary.action_items = action_items;
        summary.review = ReviewState::Edited;
        true
    }

    /// Mark a summary approved. Idempotent; no-op when no summary exists.
    pub fn approve(&mut self, thread_id: &str) -> bool {
        let Some(summary) = self
            .records
            .get_mut(thread_id)
            .and_then(|r| r.summary.as_mut())
        else {
            return false;
        };
        summary.review = ReviewState::Approved;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Sentiment, SummaryStatus};

    fn record(id: &str) -> ThreadRecord {
        serde_json::from_value(serde_json::json!({
            "thread_id": id,
            "topic": "damaged item",
            "subject": format!("Subject for {id}"),
            "initiated_by": "customer",
            "order_id": format!("ORD-{id}"),
            "product": "Espresso Machine",
            "messages": [
                {
                    "id": format!("{id}-msg-1"),
                    "sender": "customer",
                    "timestamp": "2024-03-05T14:12:00Z",
                    "body": "My order arrived damaged."
                }
            ]
        }))
        .unwrap()
    }

    fn summary(id: &str) -> ThreadSummary {
        serde_json::from_value(serde_json::json!({
            "thread_id": id,
            "order_id": format!("ORD-{id}"),
            "product": "Espresso Machine",
            "issue_category": "shipping damage",
            "summary": "Damaged unit, replacement requested.",
            "sentiment": "negative",
            "status": "in_progress",
            "action_items": ["a", "b"],
            "priority": "high"
        }))
        .unwrap()
    }

    fn store_with(ids: &[&str]) -> ThreadStore {
        let mut store = ThreadStore::new();
        store.load(ids.iter().map(|id| record(id)).collect());
        store
    }

    #[test]
    fn test_load_preserves_backend_order() {
        let store = store_with(&["T3", "T1", "T2"]);
        let ids: Vec<&str> = store.records().map(|r| r.thread_id()).collect();
        assert_eq!(ids, ["T3", "T1", "T2"]);
        assert_eq!(store.position("T1"), Some(1));
    }

    #[test]
    fn test_badge_is_no_summary_until_generation() {
        let store = store_with(&["T1"]);
        assert_eq!(store.review_badge("T1"), ReviewBadge::NoSummary);
    }

    #[test]
    fn test_install_summary_yields_pending_badge() {
        let mut store = store_with(&["T1"]);
        assert!(store.install_summary("T1", summary("T1")));

        let installed = store.get("T1").unwrap().summary.as_ref().unwrap();
        assert_eq!(installed.review, ReviewState::Pending);
        assert_eq!(installed.sentiment, Sentiment::Negative);
        assert_eq!(store.review_badge("T1"), ReviewBadge::Pending);
    }

    #[test]
    fn test_install_summary_for_unknown_thread_is_noop() {
        let mut store = store_with(&["T1"]);
        assert!(!store.install_summary("T9", summary("T9")));
        assert!(store.get("T9").is_none());
    }

    #[test]
    fn test_install_summary_strips_stale_review_flags() {
        let mut store = store_with(&["T1"]);
        let mut stale = summary("T1");
        stale.review = ReviewState::Approved;
        store.install_summary("T1", stale);
        assert_eq!(store.review_badge("T1"), ReviewBadge::Pending);
    }

    #[test]
    fn test_apply_edit_changes_only_text_and_items() {
        let mut store = store_with(&["T1"]);
        store.install_summary("T1", summary("T1"));

        assert!(store.apply_edit(
            "T1",
            "Rewritten by a human.".to_string(),
            vec!["b".to_string()],
        ));

        let edited = store.get("T1").unwrap().summary.as_ref().unwrap();
        assert_eq!(edited.summary, "Rewritten by a human.");
        assert_eq!(edited.action_items, vec!["b"]);
        assert_eq!(edited.review, ReviewState::Edited);
        // Everything else untouched
        assert_eq!(edited.issue_category, "shipping damage");
        assert_eq!(edited.sentiment, Sentiment::Negative);
        assert_eq!(edited.status, SummaryStatus::InProgress);
        assert_eq!(edited.priority, Priority::High);
    }

    #[test]
    fn test_apply_edit_without_summary_is_refused() {
        let mut store = store_with(&["T1"]);
        assert!(!store.apply_edit("T1", "text".into(), vec![]));
        assert!(store.get("T1").unwrap().summary.is_none());
    }

    #[test]
    fn test_approved_summary_rejects_edits() {
        let mut store = store_with(&["T1"]);
        store.install_summary("T1", summary("T1"));
        store.approve("T1");

        assert!(!store.apply_edit("T1", "sneaky".into(), vec![]));
        let locked = store.get("T1").unwrap().summary.as_ref().unwrap();
        assert_eq!(locked.summary, "Damaged unit, replacement requested.");
        assert_eq!(locked.review, ReviewState::Approved);
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut store = store_with(&["T1"]);
        store.install_summary("T1", summary("T1"));

        assert!(store.approve("T1"));
        let first = store.get("T1").unwrap().summary.clone().unwrap();

        assert!(store.approve("T1"));
        let second = store.get("T1").unwrap().summary.clone().unwrap();
        assert_eq!(first, second);
        assert_eq!(second.review, ReviewState::Approved);
    }

    #[test]
    fn test_approve_without_summary_is_noop() {
        let mut store = store_with(&["T1"]);
        assert!(!store.approve("T1"));
        assert_eq!(store.review_badge("T1"), ReviewBadge::NoSummary);
    }

    #[test]
    fn test_reselecting_a_thread_sees_its_current_state() {
        // Selection is an id lookup, so edits made while "away" are visible
        // when the id is looked up again.
        let mut store = store_with(&["A", "B"]);
        store.install_summary("A", summary("A"));
        store.apply_edit("A", "Edited while selected.".into(), vec!["x".into()]);

        // "Select B, then re-select A"
        let _b = store.get("B").unwrap();
        let a = store.get("A").unwrap().summary.as_ref().unwrap();
        assert_eq!(a.summary, "Edited while selected.");
        assert_eq!(a.review, ReviewState::Edited);
    }

    #[test]
    fn test_generate_replaces_existing_summary_latest_wins() {
        let mut store = store_with(&["T1"]);
        store.install_summary("T1", summary("T1"));

        let mut newer = summary("T1");
        newer.summary = "Second response.".to_string();
        store.install_summary("T1", newer);

        let current = store.get("T1").unwrap().summary.as_ref().unwrap();
        assert_eq!(current.summary, "Second response.");
        assert_eq!(current.review, ReviewState::Pending);
    }
}
