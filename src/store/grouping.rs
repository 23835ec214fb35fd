//! Sender grouping transform.
//!
//! Folds the flat, time-ordered row list coming back from the backend into
//! per-sender groups. Group order is the order in which each sender first
//! appears in the input; within a group, records keep input order, so a
//! descending-time input yields descending-time groups.
//!
//! A plain map iteration would not reproduce that ordering, so the fold
//! keeps an ordered `Vec` of groups alongside a sender-to-position index.

use std::collections::HashMap;

use super::types::{Conversation, SenderGroup};

/// Group a flat row list by sender, preserving first-appearance order.
///
/// No deduplication is performed: if the input contains the same row twice,
/// the group contains it twice. An empty input yields no groups.
#[must_use]
pub fn group_by_sender(rows: Vec<Conversation>) -> Vec<SenderGroup> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<SenderGroup> = Vec::new();

    for row in rows {
        match position.get(&row.sender) {
            Some(&at) => groups[at].conversations.push(row),
            None => {
                position.insert(row.sender.clone(), groups.len());
                groups.push(SenderGroup::from_first(row));
            }
        }
    }

    groups
}

/// Senders of the given groups, one per group, in group order.
#[must_use]
pub fn unique_senders(groups: &[SenderGroup]) -> Vec<String> {
    groups.iter().map(|g| g.sender.clone()).collect()
}
