use serde::{Deserialize, Serialize};

/// Customer sentiment as classified by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Frustrated,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::Frustrated => "frustrated",
        }
    }
}

/// Resolution status of the underlying support issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Pending,
    InProgress,
    Resolved,
    Unresolved,
}

impl SummaryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SummaryStatus::Pending => "pending",
            SummaryStatus::InProgress => "in progress",
            SummaryStatus::Resolved => "resolved",
            SummaryStatus::Unresolved => "unresolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Review lifecycle of a summary.
///
/// Approved is absorbing: the store refuses edits on approved summaries, so
/// the "no edits after approval" rule holds without any UI cooperation.
/// On the wire this maps to the `isApproved`/`isEdited` boolean pair the CRM
/// export expects; approval wins when a payload sets both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewState {
    #[default]
    Pending,
    Edited,
    Approved,
}

impl ReviewState {
    pub fn is_approved(&self) -> bool {
        matches!(self, ReviewState::Approved)
    }

    fn from_flags(is_approved: bool, is_edited: bool) -> Self {
        if is_approved {
            ReviewState::Approved
        } else if is_edited {
            ReviewState::Edited
        } else {
            ReviewState::Pending
        }
    }
}

/// AI-generated summary of one thread, plus its review state.
///
/// The backend's summarize response carries no review flags; deserializing
/// such a payload yields `ReviewState::Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SummaryWire", into = "SummaryWire")]
pub struct ThreadSummary {
    pub thread_id: String,
    pub order_id: String,
    pub product: String,
    pub issue_category: String,
    pub summary: String,
    pub sentiment: Sentiment,
    pub status: SummaryStatus,
    pub action_items: Vec<String>,
    pub priority: Priority,
    pub review: ReviewState,
}

/// Wire shape: review state flattened into the two booleans downstream
/// consumers (and the original frontend) use.
#[derive(Serialize, Deserialize)]
struct SummaryWire {
    thread_id: String,
    order_id: String,
    product: String,
    issue_category: String,
    summary: String,
    sentiment: Sentiment,
    status: SummaryStatus,
    action_items: Vec<String>,
    priority: Priority,
    #[serde(rename = "isApproved", default)]
    is_approved: bool,
    #[serde(rename = "isEdited", default)]
    is_edited: bool,
}

impl From<SummaryWire> for ThreadSummary {
    fn from(wire: SummaryWire) -> Self {
        ThreadSummary {
            thread_id: wire.thread_id,
            order_id: wire.order_id,
            product: wire.product,
            issue_category: wire.issue_category,
            summary: wire.summary,
            sentiment: wire.sentiment,
            status: wire.status,
            action_items: wire.action_items,
            priority: wire.priority,
            review: ReviewState::from_flags(wire.is_approved, wire.is_edited),
        }
    }
}

impl From<ThreadSummary> for SummaryWire {
    fn from(summary: ThreadSummary) -> Self {
        SummaryWire {
            thread_id: summary.thread_id,
            order_id: summary.order_id,
            product: summary.product,
            issue_category: summary.issue_category,
            summary: summary.summary,
            sentiment: summary.sentiment,
            status: summary.status,
            action_items: summary.action_items,
            priority: summary.priority,
            is_approved: summary.review.is_approved(),
            is_edited: matches!(summary.review, ReviewState::Edited),
        }
    }
}

/// What the thread list shows for a record's review progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewBadge {
    NoSummary,
    Pending,
    Edited,
    Approved,
}

impl ReviewBadge {
    pub fn of(summary: Option<&ThreadSummary>) -> Self {
        match summary {
            None => ReviewBadge::NoSummary,
            Some(s) => match s.review {
                ReviewState::Pending => ReviewBadge::Pending,
                ReviewState::Edited => ReviewBadge::Edited,
                ReviewState::Approved => ReviewBadge::Approved,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewBadge::NoSummary => "No Summary",
            ReviewBadge::Pending => "Pending",
            ReviewBadge::Edited => "Edited",
            ReviewBadge::Approved => "Approved",
        }
    }
}
