//! Types and functionality for creating the output documents.

pub mod topic;
pub mod topic_index;
