//! Forum topics and replies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::RawRow;
use super::{ContentRecord, Domain, Rejection};
use crate::query::{SortMode, matches_search};
use crate::types::{RecordId, Timestamp};

/// A discussion topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumTopic {
    pub id: RecordId,
    pub created_at: Timestamp,
    pub title: String,
    pub description: String,
    pub author: String,
    pub category: String,
    pub replies: u32,
}

impl ForumTopic {
    /// Normalize a raw remote row into a topic.
    ///
    /// `id`, `title`, and `description` are required along with a parseable
    /// timestamp. The author name may arrive embedded (a joined `profiles`
    /// select) or flat; either way it defaults to `"Unknown"`. The reply
    /// count may arrive as a flat number or an embedded aggregate.
    pub fn from_row(row: &Value) -> Result<Self, Rejection> {
        let raw = RawRow::new(Domain::ForumTopic, row)?;

        let author = raw
            .nested_str("profiles", "name")
            .or_else(|| raw.opt_str("author_name"))
            .unwrap_or_else(|| "Unknown".to_string());

        let replies = if row.get("replies").is_some_and(Value::is_number) {
            raw.count("replies")
        } else {
            raw.nested_count("forum_replies")
        };

        Ok(Self {
            id: raw.id()?,
            created_at: raw.timestamp(&["created_at", "createdAt"])?,
            title: raw.required_str("title")?,
            description: raw.required_str("description")?,
            author,
            category: raw.str_or("category", "General"),
            replies,
        })
    }
}

impl ContentRecord for ForumTopic {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// A reply within a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumReply {
    pub id: RecordId,
    pub created_at: Timestamp,
    pub content: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<RecordId>,
}

impl ForumReply {
    /// Normalize a raw remote row into a reply.
    ///
    /// `id` and `content` are required along with a parseable timestamp;
    /// anonymous replies default the author to `"Anonymous"`.
    pub fn from_row(row: &Value) -> Result<Self, Rejection> {
        let raw = RawRow::new(Domain::ForumReply, row)?;

        let topic_id = raw
            .opt_str("topic_id")
            .and_then(|s| RecordId::new(&s).ok());

        Ok(Self {
            id: raw.id()?,
            created_at: raw.timestamp(&["created_at", "createdAt"])?,
            content: raw.required_str("content")?,
            author: raw.str_or("author_name", "Anonymous"),
            topic_id,
        })
    }
}

impl ContentRecord for ForumReply {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Search and sort settings for the forum topic list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicQuery {
    /// Free-text term matched against title, description, and category.
    pub search: String,
    pub sort: SortMode,
}

impl TopicQuery {
    /// Whether a single topic passes the search filter.
    pub fn matches(&self, topic: &ForumTopic) -> bool {
        matches_search(
            &self.search,
            &[&topic.title, &topic.description, &topic.category],
        )
    }

    /// Filter and sort a topic collection. `Popular` orders by reply count.
    pub fn apply(&self, topics: &[ForumTopic]) -> Vec<ForumTopic> {
        let mut filtered: Vec<ForumTopic> = topics
            .iter()
            .filter(|topic| self.matches(topic))
            .cloned()
            .collect();

        match self.sort {
            SortMode::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortMode::Oldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortMode::Popular => filtered.sort_by(|a, b| b.replies.cmp(&a.replies)),
        }

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn topic_row(id: &str) -> Value {
        json!({
            "id": id,
            "created_at": "2024-03-01T09:00:00Z",
            "title": "Funding options for new founders",
            "description": "Grants, loans, and investors compared.",
            "category": "Funding",
            "profiles": {"name": "Financial Expert"},
            "forum_replies": [{"count": 18}],
        })
    }

    #[test]
    fn normalizes_joined_row() {
        let topic = ForumTopic::from_row(&topic_row("f1")).unwrap();
        assert_eq!(topic.author, "Financial Expert");
        assert_eq!(topic.replies, 18);
        assert_eq!(topic.category, "Funding");
    }

    #[test]
    fn flat_reply_count_wins_over_aggregate() {
        let mut row = topic_row("f1");
        row["replies"] = json!(7);
        let topic = ForumTopic::from_row(&row).unwrap();
        assert_eq!(topic.replies, 7);
    }

    #[test]
    fn missing_author_defaults_to_unknown() {
        let mut row = topic_row("f1");
        row.as_object_mut().unwrap().remove("profiles");
        let topic = ForumTopic::from_row(&row).unwrap();
        assert_eq!(topic.author, "Unknown");
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut row = topic_row("f1");
        row.as_object_mut().unwrap().remove("title");
        assert!(ForumTopic::from_row(&row).is_err());
    }

    #[test]
    fn reply_defaults_author_to_anonymous() {
        let row = json!({
            "id": "rep1",
            "created_at": "2024-03-02T10:00:00Z",
            "content": "Great summary, thanks.",
        });
        let reply = ForumReply::from_row(&row).unwrap();
        assert_eq!(reply.author, "Anonymous");
        assert!(reply.topic_id.is_none());
    }

    #[test]
    fn reply_requires_content() {
        let row = json!({"id": "rep1", "created_at": "2024-03-02", "content": ""});
        assert!(ForumReply::from_row(&row).is_err());
    }

    #[test]
    fn search_covers_category() {
        let topics = vec![ForumTopic::from_row(&topic_row("f1")).unwrap()];
        let query = TopicQuery {
            search: "funding".to_string(),
            ..Default::default()
        };
        assert_eq!(query.apply(&topics).len(), 1);
    }

    #[test]
    fn popular_sorts_by_reply_count() {
        let quiet = ForumTopic::from_row(&topic_row("f1")).unwrap();
        let mut busy = ForumTopic::from_row(&topic_row("f2")).unwrap();
        busy.replies = 90;

        let query = TopicQuery {
            sort: SortMode::Popular,
            ..Default::default()
        };
        let result = query.apply(&[quiet, busy]);
        assert_eq!(result[0].id.as_str(), "f2");
    }
}
