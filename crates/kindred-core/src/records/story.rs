//! Story records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::RawRow;
use super::{ContentRecord, Domain, Rejection};
use crate::query::{SortMode, matches_search};
use crate::types::{RecordId, Timestamp};

fn default_published() -> bool {
    true
}

/// A published or locally authored story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: RecordId,
    pub created_at: Timestamp,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub author: String,

    /// Cover image URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Author profile image URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub likes: u32,

    #[serde(default = "default_published")]
    pub published: bool,
}

impl Story {
    /// Normalize a raw remote row into a story.
    ///
    /// A story is valid only when `id`, `title`, `excerpt`, `body`, and
    /// `author` are present and non-empty and its timestamp parses. Both
    /// `created_at` and the legacy `createdAt` spelling are accepted.
    pub fn from_row(row: &Value) -> Result<Self, Rejection> {
        let raw = RawRow::new(Domain::Story, row)?;

        Ok(Self {
            id: raw.id()?,
            created_at: raw.timestamp(&["created_at", "createdAt"])?,
            title: raw.required_str("title")?,
            excerpt: raw.required_str("excerpt")?,
            body: raw.required_str("body")?,
            author: raw.required_str("author")?,
            image: raw.opt_str("image"),
            profile_image_url: raw.opt_str("profile_image_url"),
            tags: raw.string_list("tags"),
            likes: raw.count("likes"),
            published: raw.bool_or("published", true),
        })
    }
}

impl ContentRecord for Story {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Search, tag filter, and sort settings for the stories view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryQuery {
    /// Free-text term matched against title, excerpt, and author.
    pub search: String,
    /// Exact tag membership filter; `None` matches everything.
    pub tag: Option<String>,
    pub sort: SortMode,
}

impl StoryQuery {
    /// Whether a single story passes every active filter.
    pub fn matches(&self, story: &Story) -> bool {
        let matches_search =
            matches_search(&self.search, &[&story.title, &story.excerpt, &story.author]);

        let matches_tag = match &self.tag {
            Some(tag) => story.tags.iter().any(|t| t == tag),
            None => true,
        };

        matches_search && matches_tag
    }

    /// Filter and sort a story collection. Ties keep their relative order.
    pub fn apply(&self, stories: &[Story]) -> Vec<Story> {
        let mut filtered: Vec<Story> = stories
            .iter()
            .filter(|story| self.matches(story))
            .cloned()
            .collect();

        match self.sort {
            SortMode::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortMode::Oldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortMode::Popular => filtered.sort_by(|a, b| b.likes.cmp(&a.likes)),
        }

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn story_row(id: &str, created_at: &str) -> Value {
        json!({
            "id": id,
            "created_at": created_at,
            "title": "Tech Leap",
            "excerpt": "From a side project to a studio.",
            "body": "The full journey, in detail.",
            "author": "Priya Sharma",
            "tags": ["startup", "tech"],
            "likes": 12,
        })
    }

    #[test]
    fn normalizes_valid_row() {
        let story = Story::from_row(&story_row("r1", "2024-01-01T00:00:00Z")).unwrap();
        assert_eq!(story.id.as_str(), "r1");
        assert_eq!(story.likes, 12);
        assert!(story.published);
        assert_eq!(story.tags, vec!["startup", "tech"]);
    }

    #[test]
    fn rejects_missing_title() {
        let mut row = story_row("r1", "2024-01-01");
        row.as_object_mut().unwrap().remove("title");
        assert!(Story::from_row(&row).is_err());
    }

    #[test]
    fn rejects_unparseable_timestamp() {
        let row = story_row("r1", "last tuesday");
        assert!(Story::from_row(&row).is_err());
    }

    #[test]
    fn defaults_likes_and_published() {
        let row = json!({
            "id": "r1",
            "created_at": "2024-01-01",
            "title": "T",
            "excerpt": "E",
            "body": "B",
            "author": "A",
            "likes": "lots",
        });
        let story = Story::from_row(&row).unwrap();
        assert_eq!(story.likes, 0);
        assert!(story.published);
        assert!(story.tags.is_empty());
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let stories = vec![
            Story::from_row(&story_row("r1", "2024-01-01")).unwrap(),
            Story::from_row(&{
                let mut row = story_row("r2", "2024-01-02");
                row["title"] = json!("Cooking 101");
                row
            })
            .unwrap(),
        ];

        let query = StoryQuery {
            search: "tech".to_string(),
            ..Default::default()
        };
        let result = query.apply(&stories);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "r1");
    }

    #[test]
    fn newest_sort_orders_descending() {
        let stories = vec![
            Story::from_row(&story_row("r1", "2024-01-01")).unwrap(),
            Story::from_row(&story_row("r2", "2024-02-01")).unwrap(),
        ];

        let query = StoryQuery::default();
        let result = query.apply(&stories);
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r1"]);

        for pair in result.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn oldest_sort_orders_ascending() {
        let stories = vec![
            Story::from_row(&story_row("r2", "2024-02-01")).unwrap(),
            Story::from_row(&story_row("r1", "2024-01-01")).unwrap(),
            Story::from_row(&story_row("r3", "2024-03-01")).unwrap(),
        ];

        let query = StoryQuery {
            sort: SortMode::Oldest,
            ..Default::default()
        };
        let result = query.apply(&stories);
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn popular_sort_orders_by_likes() {
        let mut low = Story::from_row(&story_row("r1", "2024-03-01")).unwrap();
        low.likes = 3;
        let mut high = Story::from_row(&story_row("r2", "2024-01-01")).unwrap();
        high.likes = 99;

        let query = StoryQuery {
            sort: SortMode::Popular,
            ..Default::default()
        };
        let result = query.apply(&[low, high]);
        assert_eq!(result[0].id.as_str(), "r2");
    }

    #[test]
    fn tag_filter_is_exact_membership() {
        let stories = vec![Story::from_row(&story_row("r1", "2024-01-01")).unwrap()];

        let hit = StoryQuery {
            tag: Some("startup".to_string()),
            ..Default::default()
        };
        assert_eq!(hit.apply(&stories).len(), 1);

        let miss = StoryQuery {
            tag: Some("start".to_string()),
            ..Default::default()
        };
        assert!(miss.apply(&stories).is_empty());
    }

    #[test]
    fn query_is_idempotent() {
        let stories = vec![
            Story::from_row(&story_row("r1", "2024-01-01")).unwrap(),
            Story::from_row(&story_row("r2", "2024-02-01")).unwrap(),
        ];
        let query = StoryQuery {
            search: "leap".to_string(),
            ..Default::default()
        };

        let first: Vec<String> = query
            .apply(&stories)
            .iter()
            .map(|s| s.id.to_string())
            .collect();
        let second: Vec<String> = query
            .apply(&stories)
            .iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(first, second);
    }
}
