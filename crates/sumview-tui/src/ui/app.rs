use std::collections::HashSet;
use std::sync::mpsc::Receiver;

use tracing::{debug, warn};

use sumview_core::models::ThreadRecord;
use sumview_core::runtime::{BackendCommand, CoreHandle, DataChange, RequestKind};
use sumview_core::store::ThreadStore;

use crate::ui::editor::SummaryDraft;
use crate::ui::notifications::{Notification, NotificationQueue};

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Top-level application state.
///
/// The store is the single copy of every thread record; `selected` is an id
/// reference into it, never a snapshot. `editor` being Some IS the editing
/// state of the summary panel.
pub struct App {
    pub store: ThreadStore,
    handle: CoreHandle,
    data_rx: Receiver<DataChange>,

    pub running: bool,
    pub pending_quit: bool,

    /// Selected thread id; resolved against the store on every use
    pub selected: Option<String>,
    /// Scroll offset into the message pane, clamped during render
    pub message_scroll: u16,
    /// Editing draft for the selected thread's summary, when editing
    pub editor: Option<SummaryDraft>,

    /// Initial fetch in flight
    pub loading_threads: bool,
    /// Thread ids with a summarize request in flight
    pub summarizing: HashSet<String>,

    notifications: NotificationQueue,
    frame: u64,
}

impl App {
    pub fn new(handle: CoreHandle, data_rx: Receiver<DataChange>) -> Self {
        Self {
            store: ThreadStore::new(),
            handle,
            data_rx,
            running: true,
            pending_quit: false,
            selected: None,
            message_scroll: 0,
            editor: None,
            loading_threads: false,
            summarizing: HashSet::new(),
            notifications: NotificationQueue::new(),
            frame: 0,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        self.notifications.advance();
    }

    pub fn spinner(&self) -> char {
        // ~5 frames per step at the 50ms tick
        SPINNER_FRAMES[(self.frame / 5) as usize % SPINNER_FRAMES.len()]
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selected_record(&self) -> Option<&ThreadRecord> {
        self.selected.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_deref().and_then(|id| self.store.position(id))
    }

    /// Select by id: resets the message scroll and discards any open draft,
    /// matching the web tool where switching threads dropped the editor.
    pub fn select_thread(&mut self, thread_id: String) {
        if self.selected.as_deref() == Some(thread_id.as_str()) {
            return;
        }
        self.selected = Some(thread_id);
        self.message_scroll = 0;
        self.editor = None;
    }

    pub fn select_next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(i) => (i + 1).min(self.store.len() - 1),
            None => 0,
        };
        if let Some(record) = self.store.record_at(next) {
            self.select_thread(record.thread_id().to_string());
        }
    }

    pub fn select_prev(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let prev = match self.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        if let Some(record) = self.store.record_at(prev) {
            self.select_thread(record.thread_id().to_string());
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.message_scroll = self.message_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.message_scroll = self.message_scroll.saturating_add(lines);
    }

    // -------------------------------------------------------------------------
    // Review intents
    // -------------------------------------------------------------------------

    /// Issue the initial thread fetch. Failure is reported once and the
    /// collection stays empty; there is no automatic retry.
    pub fn request_threads(&mut self) {
        self.loading_threads = true;
        if self.handle.send(BackendCommand::FetchThreads).is_err() {
            self.loading_threads = false;
            self.notify(Notification::error("Backend worker is gone; restart the app"));
        }
    }

    /// Request AI summarization for the selected thread. Only offered when no
    /// summary exists; duplicate requests are not coalesced (latest wins).
    pub fn generate_summary(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        if record.summary.is_some() {
            return;
        }
        let thread = record.thread.clone();
        let thread_id = thread.thread_id.clone();

        if self
            .handle
            .send(BackendCommand::Summarize { thread })
            .is_err()
        {
            self.notify(Notification::error("Backend worker is gone; restart the app"));
            return;
        }
        self.summarizing.insert(thread_id.clone());
        self.notify(Notification::info(format!("Summarizing {thread_id}...")));
    }

    /// Open the editing draft. Refused on approved summaries: approval is
    /// terminal.
    pub fn begin_edit(&mut self) {
        if self.editor.is_some() {
            return;
        }
        let Some(record) = self.selected_record() else {
            return;
        };
        let Some(summary) = record.summary.as_ref() else {
            return;
        };
        if summary.review.is_approved() {
            self.notify(Notification::warning("Approved summaries are read-only"));
            return;
        }
        self.editor = Some(SummaryDraft::new(summary));
    }

    /// Commit the draft: only summary text and action items change
    pub fn save_edit(&mut self) {
        let Some(draft) = self.editor.take() else {
            return;
        };
        let text = draft.summary_text();
        let items = draft.item_texts();
        if self.store.apply_edit(&draft.thread_id, text, items) {
            self.notify(Notification::success("Summary updated"));
        } else {
            // Approved out from under the draft, or the summary vanished
            warn!(thread_id = %draft.thread_id, "edit rejected by store");
            self.notify(Notification::warning("Could not save: summary is locked"));
        }
    }

    /// Discard the draft without emitting anything
    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    pub fn approve_summary(&mut self) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        if self.store.approve(&id) {
            self.notify(Notification::success(format!(
                "{id} approved - ready for CRM export"
            )));
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Some(draft) = self.editor.as_mut() {
            draft.handle_paste(text);
        }
    }

    // -------------------------------------------------------------------------
    // Worker results
    // -------------------------------------------------------------------------

    /// Drain the data channel; called from the tick arm of the select loop
    pub fn check_for_data_updates(&mut self) {
        let changes: Vec<DataChange> =
            std::iter::from_fn(|| self.data_rx.try_recv().ok()).collect();

        for change in changes {
            match change {
                DataChange::ThreadsLoaded(records) => {
                    self.loading_threads = false;
                    self.store.load(records);
                    debug!(count = self.store.len(), "store loaded");

                    // Keep the selection valid against the new collection
                    let selection_alive = self
                        .selected
                        .as_deref()
                        .map(|id| self.store.get(id).is_some())
                        .unwrap_or(false);
                    if !selection_alive {
                        self.selected = self
                            .store
                            .record_at(0)
                            .map(|r| r.thread_id().to_string());
                        self.message_scroll = 0;
                        self.editor = None;
                    }
                    self.notify(Notification::success(format!(
                        "Loaded {} threads",
                        self.store.len()
                    )));
                }
                DataChange::SummaryReady { thread_id, summary } => {
                    self.summarizing.remove(&thread_id);
                    if self.store.install_summary(&thread_id, summary) {
                        self.notify(Notification::success(format!(
                            "Summary ready for {thread_id}"
                        )));
                    }
                }
                DataChange::RequestFailed { kind, error } => {
                    match kind {
                        RequestKind::FetchThreads => self.loading_threads = false,
                        RequestKind::Summarize { ref thread_id } => {
                            self.summarizing.remove(thread_id);
                        }
                    }
                    self.notify(Notification::error(error));
                }
            }
        }
    }
}
