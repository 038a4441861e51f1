//! Converts the tab-separated study-question sources into per-topic JSON
//! files and the `topics.json` index consumed by the study-app frontend.

pub mod convert;
pub mod input;
pub mod output;
pub mod topics;

pub use input::{primary, secondary};
pub use output::{topic, topic_index};
