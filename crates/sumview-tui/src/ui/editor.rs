use sumview_core::models::ThreadSummary;

use crate::ui::text_editor::TextEditor;

/// Which draft field has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Summary,
    Item(usize),
}

/// Local editing draft for one summary.
///
/// Existence of a draft IS the editing state: the app holds
/// `Option<SummaryDraft>`, so viewing vs editing is a tagged state, and the
/// draft stays decoupled from the committed summary until save. Cancel simply
/// drops the draft.
#[derive(Debug, Clone)]
pub struct SummaryDraft {
    pub thread_id: String,
    pub summary: TextEditor,
    pub items: Vec<TextEditor>,
    pub field: DraftField,
}

impl SummaryDraft {
    pub fn new(source: &ThreadSummary) -> Self {
        Self {
            thread_id: source.thread_id.clone(),
            summary: TextEditor::with_text(&source.summary),
            items: source
                .action_items
                .iter()
                .map(TextEditor::with_text)
                .collect(),
            field: DraftField::Summary,
        }
    }

    pub fn active_editor(&mut self) -> &mut TextEditor {
        match self.field {
            DraftField::Summary => &mut self.summary,
            // Focus is clamped by the mutation methods, so the index is valid
            DraftField::Item(i) => &mut self.items[i],
        }
    }

    /// Append an empty item and focus it
    pub fn add_item(&mut self) {
        self.items.push(TextEditor::new());
        self.field = DraftField::Item(self.items.len() - 1);
    }

    /// Remove the item at `index`, keeping focus on something sensible
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.remove(index);
        self.field = match self.field {
            DraftField::Item(_) if self.items.is_empty() => DraftField::Summary,
            DraftField::Item(i) if i > index || i >= self.items.len() => {
                DraftField::Item(i.saturating_sub(1).min(self.items.len() - 1))
            }
            other => other,
        };
    }

    /// Paste into the focused field. Items are single-line fields, so
    /// embedded newlines become spaces there; the summary keeps them.
    pub fn handle_paste(&mut self, text: &str) {
        match self.field {
            DraftField::Summary => self.summary.handle_paste(text),
            DraftField::Item(_) => {
                let single_line = text.replace('\n', " ");
                self.active_editor().handle_paste(&single_line);
            }
        }
    }

    /// Remove the focused item; no-op when the summary field is focused
    pub fn remove_focused_item(&mut self) {
        if let DraftField::Item(i) = self.field {
            self.remove_item(i);
        }
    }

    pub fn focus_next(&mut self) {
        self.field = match self.field {
            DraftField::Summary if !self.items.is_empty() => DraftField::Item(0),
            DraftField::Summary => DraftField::Summary,
            DraftField::Item(i) if i + 1 < self.items.len() => DraftField::Item(i + 1),
            DraftField::Item(_) => DraftField::Summary,
        };
    }

    pub fn focus_prev(&mut self) {
        self.field = match self.field {
            DraftField::Summary if !self.items.is_empty() => {
                DraftField::Item(self.items.len() - 1)
            }
            DraftField::Summary => DraftField::Summary,
            DraftField::Item(0) => DraftField::Summary,
            DraftField::Item(i) => DraftField::Item(i - 1),
        };
    }

    pub fn summary_text(&self) -> String {
        self.summary.text.clone()
    }

    /// Draft items in display order
    pub fn item_texts(&self) -> Vec<String> {
        self.items.iter().map(|e| e.text.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumview_core::models::ThreadSummary;

    fn summary() -> ThreadSummary {
        serde_json::from_value(serde_json::json!({
            "thread_id": "T1",
            "order_id": "ORD-1001",
            "product": "Espresso Machine",
            "issue_category": "shipping damage",
            "summary": "Damaged unit on arrival.",
            "sentiment": "negative",
            "status": "in_progress",
            "action_items": ["a", "b"],
            "priority": "high"
        }))
        .unwrap()
    }

    #[test]
    fn test_draft_copies_committed_values() {
        let draft = SummaryDraft::new(&summary());
        assert_eq!(draft.summary_text(), "Damaged unit on arrival.");
        assert_eq!(draft.item_texts(), vec!["a", "b"]);
        assert_eq!(draft.field, DraftField::Summary);
    }

    #[test]
    fn test_remove_first_item_leaves_second() {
        let mut draft = SummaryDraft::new(&summary());
        draft.remove_item(0);
        assert_eq!(draft.item_texts(), vec!["b"]);
    }

    #[test]
    fn test_remove_focused_item_moves_focus_back() {
        let mut draft = SummaryDraft::new(&summary());
        draft.field = DraftField::Item(1);
        draft.remove_focused_item();
        assert_eq!(draft.field, DraftField::Item(0));

        draft.remove_focused_item();
        assert!(draft.items.is_empty());
        assert_eq!(draft.field, DraftField::Summary);
    }

    #[test]
    fn test_add_item_appends_and_focuses() {
        let mut draft = SummaryDraft::new(&summary());
        draft.add_item();
        assert_eq!(draft.item_texts(), vec!["a", "b", ""]);
        assert_eq!(draft.field, DraftField::Item(2));
        draft.active_editor().insert_char('c');
        assert_eq!(draft.item_texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut draft = SummaryDraft::new(&summary());
        draft.focus_next();
        assert_eq!(draft.field, DraftField::Item(0));
        draft.focus_next();
        assert_eq!(draft.field, DraftField::Item(1));
        draft.focus_next();
        assert_eq!(draft.field, DraftField::Summary);
        draft.focus_prev();
        assert_eq!(draft.field, DraftField::Item(1));
    }

    #[test]
    fn test_focus_stays_on_summary_with_no_items() {
        let mut source = summary();
        source.action_items.clear();
        let mut draft = SummaryDraft::new(&source);
        draft.focus_next();
        assert_eq!(draft.field, DraftField::Summary);
        draft.focus_prev();
        assert_eq!(draft.field, DraftField::Summary);
    }

    #[test]
    fn test_multiline_paste_into_item_stays_single_line() {
        let mut draft = SummaryDraft::new(&summary());
        draft.field = DraftField::Item(0);
        draft.handle_paste("step one\r\nstep two\nstep three");

        let items = draft.item_texts();
        assert_eq!(items[0], "astep one step two step three");
        assert!(!items[0].contains('\n'));
    }

    #[test]
    fn test_multiline_paste_into_summary_keeps_newlines() {
        let mut draft = SummaryDraft::new(&summary());
        draft.handle_paste("\nSecond paragraph.");
        assert_eq!(
            draft.summary_text(),
            "Damaged unit on arrival.\nSecond paragraph."
        );
    }

    #[test]
    fn test_editing_draft_leaves_source_untouched() {
        let source = summary();
        let mut draft = SummaryDraft::new(&source);
        draft.active_editor().handle_paste(" More detail.");
        draft.remove_item(0);
        // Cancel = drop the draft; the committed summary never saw the edits
        drop(draft);
        assert_eq!(source.summary, "Damaged unit on arrival.");
        assert_eq!(source.action_items, vec!["a", "b"]);
    }
}
