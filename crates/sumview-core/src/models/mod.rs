pub mod message;
pub mod summary;
pub mod thread;

pub use message::{Message, Sender};
pub use summary::{Priority, ReviewBadge, ReviewState, Sentiment, SummaryStatus, ThreadSummary};
pub use thread::{Thread, ThreadRecord};
