//! Typed record fetches and writes per content domain.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use kindred_core::types::{ApiUrl, RecordId};
use kindred_core::{
    Business, ForumReply, ForumTopic, Guide, Product, Profile, Rejection, Result, Story,
};

use crate::client::ApiClient;

/// Request body for publishing a story.
#[derive(Debug, serde::Serialize)]
struct StoryRow<'a> {
    title: &'a str,
    excerpt: &'a str,
    body: &'a str,
    author: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    tags: &'a [String],
    likes: u32,
    published: bool,
}

/// Request body for creating a forum topic.
#[derive(Debug, serde::Serialize)]
struct TopicRow<'a> {
    title: &'a str,
    description: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_name: Option<&'a str>,
}

/// Request body for posting a reply.
#[derive(Debug, serde::Serialize)]
struct ReplyRow<'a> {
    topic_id: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_name: Option<&'a str>,
}

/// Request body for listing a business.
#[derive(Debug, serde::Serialize)]
struct BusinessRow<'a> {
    name: &'a str,
    owner: &'a str,
    description: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<&'a str>,
    contact: &'a str,
}

/// Request body for listing a product.
#[derive(Debug, serde::Serialize)]
struct ProductRow<'a> {
    name: &'a str,
    description: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    business_id: Option<&'a str>,
}

/// The remote record fetcher.
///
/// Retrieves row collections per domain and coerces each row into its
/// canonical record shape. Rows failing a domain's validity invariant are
/// dropped and counted; the count goes to the log, never to the user.
/// Transport and protocol failures surface as errors at this boundary and
/// no further.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: ApiClient,
}

impl RemoteSource {
    /// Create a remote source for the given API base URL and key.
    pub fn new(base: ApiUrl, key: impl Into<String>) -> Self {
        Self {
            client: ApiClient::new(base, key),
        }
    }

    /// Returns the API base URL for this source.
    pub fn base(&self) -> &ApiUrl {
        self.client.base()
    }

    /// Normalize every row independently, dropping and counting rejects.
    fn collect<T>(
        table: &str,
        rows: Vec<Value>,
        normalize: impl Fn(&Value) -> std::result::Result<T, Rejection>,
    ) -> Vec<T> {
        let total = rows.len();
        let mut records = Vec::with_capacity(total);
        let mut dropped = 0usize;

        for row in &rows {
            match normalize(row) {
                Ok(record) => records.push(record),
                Err(rejection) => {
                    dropped += 1;
                    debug!(%rejection, "Dropped malformed row");
                }
            }
        }

        if dropped > 0 {
            warn!(table, dropped, total, "Dropped malformed rows from remote source");
        }

        records
    }

    /// Fetch all published stories.
    #[instrument(skip(self))]
    pub async fn stories(&self) -> Result<Vec<Story>> {
        let rows = self
            .client
            .rows("stories", &[("select", "*"), ("published", "eq.true")])
            .await?;
        Ok(Self::collect("stories", rows, Story::from_row))
    }

    /// Fetch a single story by id. A missing or malformed row is `None`.
    #[instrument(skip(self))]
    pub async fn story(&self, id: &RecordId) -> Result<Option<Story>> {
        let filter = format!("eq.{}", id);
        let rows = self
            .client
            .rows("stories", &[("select", "*"), ("id", filter.as_str())])
            .await?;
        Ok(Self::collect("stories", rows, Story::from_row).into_iter().next())
    }

    /// Fetch all member profiles.
    #[instrument(skip(self))]
    pub async fn profiles(&self) -> Result<Vec<Profile>> {
        let rows = self.client.rows("profiles", &[("select", "*")]).await?;
        Ok(Self::collect("profiles", rows, Profile::from_row))
    }

    /// Fetch all forum topics with author names and reply counts, newest
    /// first.
    #[instrument(skip(self))]
    pub async fn forum_topics(&self) -> Result<Vec<ForumTopic>> {
        let rows = self
            .client
            .rows(
                "forum_topics",
                &[
                    ("select", "*,profiles(name),forum_replies(count)"),
                    ("order", "created_at.desc"),
                ],
            )
            .await?;
        Ok(Self::collect("forum_topics", rows, ForumTopic::from_row))
    }

    /// Fetch the replies for a topic, oldest first.
    #[instrument(skip(self))]
    pub async fn forum_replies(&self, topic_id: &RecordId) -> Result<Vec<ForumReply>> {
        let filter = format!("eq.{}", topic_id);
        let rows = self
            .client
            .rows(
                "forum_replies",
                &[
                    ("select", "*"),
                    ("topic_id", filter.as_str()),
                    ("order", "created_at.asc"),
                ],
            )
            .await?;
        Ok(Self::collect("forum_replies", rows, ForumReply::from_row))
    }

    /// Fetch all business listings, ordered by name.
    #[instrument(skip(self))]
    pub async fn businesses(&self) -> Result<Vec<Business>> {
        let rows = self
            .client
            .rows("businesses", &[("select", "*"), ("order", "name")])
            .await?;
        Ok(Self::collect("businesses", rows, Business::from_row))
    }

    /// Fetch all products with their selling business, ordered by name.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>> {
        let rows = self
            .client
            .rows(
                "products",
                &[("select", "*,businesses(name)"), ("order", "name")],
            )
            .await?;
        Ok(Self::collect("products", rows, Product::from_row))
    }

    /// Fetch all guides.
    #[instrument(skip(self))]
    pub async fn guides(&self) -> Result<Vec<Guide>> {
        let rows = self.client.rows("guides", &[("select", "*")]).await?;
        Ok(Self::collect("guides", rows, Guide::from_row))
    }

    /// Publish a locally authored story to the remote source.
    ///
    /// The remote table assigns its own id and timestamp; the local copy
    /// is left untouched.
    #[instrument(skip(self, story), fields(id = %story.id))]
    pub async fn publish_story(&self, story: &Story) -> Result<()> {
        let row = StoryRow {
            title: &story.title,
            excerpt: &story.excerpt,
            body: &story.body,
            author: &story.author,
            image: story.image.as_deref(),
            tags: &story.tags,
            likes: story.likes,
            published: true,
        };
        self.client.insert("stories", &row).await
    }

    /// Delete a remote story by id.
    #[instrument(skip(self))]
    pub async fn delete_story(&self, id: &RecordId) -> Result<()> {
        self.client.delete("stories", id.as_str()).await
    }

    /// Create a new forum topic.
    #[instrument(skip(self, description))]
    pub async fn create_topic(
        &self,
        title: &str,
        description: &str,
        category: &str,
        author_name: Option<&str>,
    ) -> Result<()> {
        let row = TopicRow {
            title,
            description,
            category,
            author_name,
        };
        self.client.insert("forum_topics", &row).await
    }

    /// Post a reply to a topic.
    #[instrument(skip(self, content))]
    pub async fn post_reply(
        &self,
        topic_id: &RecordId,
        content: &str,
        author_name: Option<&str>,
    ) -> Result<()> {
        let row = ReplyRow {
            topic_id: topic_id.as_str(),
            content,
            author_name,
        };
        self.client.insert("forum_replies", &row).await
    }

    /// List a new business in the showcase.
    #[instrument(skip_all)]
    pub async fn add_business(
        &self,
        name: &str,
        owner: &str,
        description: &str,
        category: &str,
        logo: Option<&str>,
        contact: &str,
    ) -> Result<()> {
        let row = BusinessRow {
            name,
            owner,
            description,
            category,
            logo,
            contact,
        };
        self.client.insert("businesses", &row).await
    }

    /// List a new product in the showcase.
    #[instrument(skip_all)]
    pub async fn add_product(
        &self,
        name: &str,
        description: &str,
        category: &str,
        image_url: Option<&str>,
        price: Option<&str>,
        business_id: Option<&str>,
    ) -> Result<()> {
        let row = ProductRow {
            name,
            description,
            category,
            image_url,
            price,
            business_id,
        };
        self.client.insert("products", &row).await
    }
}
