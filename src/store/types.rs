//! Core types for stored conversation records.

use serde::{Deserialize, Serialize};

/// One stored exchange between a user and the assistant, exactly as the
/// remote table returns it.
///
/// Rows are owned by the backend; this service never mutates or persists
/// them. `id` is unique and stable, `created_at` is whatever timestamp
/// string the backend wrote at insertion time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique row identifier, assigned by the backend.
    pub id: i64,
    /// Creation timestamp as stored by the backend.
    pub created_at: String,
    /// Message sent by the user.
    pub user_message: String,
    /// Reply produced by the assistant.
    pub assistant_message: String,
    /// Phone-number-like identifier of the external party.
    pub sender: String,
    /// Identifier of the receiving side.
    pub recipient: String,
    /// Display name associated with the sender.
    pub name: String,
}

/// All conversations of one sender, in the order the backing query returned
/// them (newest first).
///
/// Derived per request from the flat row list and discarded after
/// serialization; never cached or persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SenderGroup {
    /// Sender identifier shared by every record in the group.
    pub sender: String,
    /// Display name taken from the sender's first record.
    pub name: String,
    /// Records of this sender, newest first.
    pub conversations: Vec<Conversation>,
}

impl SenderGroup {
    /// Create a group seeded with the sender's first record.
    #[must_use]
    pub fn from_first(first: Conversation) -> Self {
        Self {
            sender: first.sender.clone(),
            name: first.name.clone(),
            conversations: vec![first],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Conversation {
        Conversation {
            id: 7,
            created_at: "2024-01-02T00:00:00".to_string(),
            user_message: "what time is it".to_string(),
            assistant_message: "it is noon".to_string(),
            sender: "+15551234".to_string(),
            recipient: "+15550000".to_string(),
            name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_group_seeded_from_first_record() {
        let group = SenderGroup::from_first(record());
        assert_eq!(group.sender, "+15551234");
        assert_eq!(group.name, "Alice");
        assert_eq!(group.conversations.len(), 1);
        assert_eq!(group.conversations[0].id, 7);
    }

    #[test]
    fn test_conversation_round_trips_wire_field_names() {
        let json = serde_json::to_value(record()).ok();
        assert!(json.is_some());
        let json = json.unwrap_or_default();
        assert_eq!(json["id"], 7);
        assert_eq!(json["user_message"], "what time is it");
        assert_eq!(json["assistant_message"], "it is noon");
        assert_eq!(json["sender"], "+15551234");
    }
}
