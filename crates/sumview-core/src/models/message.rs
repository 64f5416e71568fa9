use serde::{Deserialize, Serialize};

/// Which side of the conversation a message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Customer,
    Company,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::Customer => "Customer",
            Sender::Company => "Company",
        }
    }
}

/// One email in a thread. Created by the backend, never mutated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    /// RFC3339 timestamp as delivered on the wire
    pub timestamp: String,
    pub body: String,
}
