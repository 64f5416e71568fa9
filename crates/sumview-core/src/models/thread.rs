use serde::{Deserialize, Serialize};

use super::message::{Message, Sender};
use super::summary::ThreadSummary;

/// One email conversation about an order/product. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub thread_id: String,
    pub topic: String,
    pub subject: String,
    pub initiated_by: Sender,
    pub order_id: String,
    pub product: String,
    pub messages: Vec<Message>,
}

/// A thread together with its (optional) AI summary. Absence of the summary
/// is a real state: it is what drives the "Generate Summary" affordance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRecord {
    #[serde(flatten)]
    pub thread: Thread,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ThreadSummary>,
}

impl ThreadRecord {
    pub fn thread_id(&self) -> &str {
        &self.thread.thread_id
    }

    pub fn message_count(&self) -> usize {
        self.thread.messages.len()
    }
}
