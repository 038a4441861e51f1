//! The topic index, a projection of the topic documents without the questions.
//!
//! Serialized as a bare JSON array to `topics.json`, in topic table order.

use crate::{output::topic::TopicDocument, topics::TopicName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicIndexEntry {
    pub id: String,
    pub name: TopicName,
    pub count: usize,
}

impl From<&TopicDocument> for TopicIndexEntry {
    fn from(document: &TopicDocument) -> Self {
        Self {
            id: document.id.clone(),
            name: document.name.clone(),
            count: document.count,
        }
    }
}
