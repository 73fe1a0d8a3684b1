//! Durable storage for user-authored stories.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, instrument, warn};
use url::Url;
use uuid::Uuid;

use kindred_core::error::{Error, InvalidInputError, StorageError};
use kindred_core::{RecordId, Result, Story, Timestamp};

fn map_io(err: std::io::Error) -> Error {
    Error::Storage(StorageError::from(err))
}

/// Input for creating a locally-owned story.
///
/// The store supplies the id, creation timestamp, and like count.
#[derive(Debug, Clone)]
pub struct StoryDraft {
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub author: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

impl StoryDraft {
    /// Check the submission rules before the draft is accepted.
    ///
    /// Each failing field is reported individually so the caller can show
    /// the error next to the offending input.
    pub fn validate(&self) -> std::result::Result<(), Vec<InvalidInputError>> {
        let mut errors = Vec::new();

        // Rules count characters, not bytes.
        if self.title.trim().is_empty() {
            errors.push(InvalidInputError::field("title", "is required"));
        } else if self.title.chars().count() < 10 {
            errors.push(InvalidInputError::field(
                "title",
                "must be at least 10 characters",
            ));
        }

        if self.excerpt.trim().is_empty() {
            errors.push(InvalidInputError::field("excerpt", "is required"));
        } else if self.excerpt.chars().count() < 50 {
            errors.push(InvalidInputError::field(
                "excerpt",
                "must be at least 50 characters",
            ));
        }

        if self.body.trim().is_empty() {
            errors.push(InvalidInputError::field("body", "is required"));
        } else if self.body.chars().count() < 200 {
            errors.push(InvalidInputError::field(
                "body",
                "must be at least 200 characters",
            ));
        }

        if self.author.trim().is_empty() {
            errors.push(InvalidInputError::field("author", "is required"));
        }

        if let Some(image) = &self.image
            && Url::parse(image).is_err()
        {
            errors.push(InvalidInputError::field("image", "must be a valid URL"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Partial update for an owned story. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct StoryPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// The local content store: the sole source of locally owned stories.
///
/// The collection lives in one JSON array on disk, read once at open and
/// rewritten wholesale after every mutation. All operations are
/// synchronous; a mutation either persists fully or returns an error with
/// the in-memory collection already updated for the next attempt.
#[derive(Debug)]
pub struct StoryStore {
    path: PathBuf,
    stories: Vec<Story>,
}

impl StoryStore {
    /// Open the store at the given file path.
    ///
    /// A missing or unreadable blob yields an empty collection; corruption
    /// is logged, never surfaced.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let stories = match fs::read_to_string(&path) {
            Ok(blob) => match serde_json::from_str::<Vec<Story>>(&blob) {
                Ok(stories) => stories,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Corrupt story store, starting empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        debug!(path = %path.display(), count = stories.len(), "Opened story store");

        Self { path, stories }
    }

    /// The path of the persisted blob.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The owned collection, newest first.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Look up an owned story by id.
    pub fn get(&self, id: &RecordId) -> Option<&Story> {
        self.stories.iter().find(|story| &story.id == id)
    }

    /// Returns true iff the id was minted by a local content store.
    pub fn is_owned(id: &RecordId) -> bool {
        id.is_owned()
    }

    /// Create a new owned story from a draft.
    ///
    /// Assigns a fresh owner-prefixed id and the current timestamp, zeroes
    /// the like count, prepends the record, and persists the collection.
    #[instrument(skip(self, draft))]
    pub fn add(&mut self, draft: StoryDraft) -> Result<Story> {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let suffix = Uuid::new_v4().simple().to_string();
        let id = RecordId::owned(millis, &suffix[..9]);

        let story = Story {
            id,
            created_at: Timestamp::now(),
            title: draft.title,
            excerpt: draft.excerpt,
            body: draft.body,
            author: draft.author,
            image: draft.image,
            profile_image_url: None,
            tags: draft.tags,
            likes: 0,
            published: true,
        };

        self.stories.insert(0, story.clone());
        self.persist()?;

        debug!(id = %story.id, "Added local story");

        Ok(story)
    }

    /// Apply a partial update to an owned story.
    ///
    /// Returns `false` without touching the disk when the id is unknown.
    #[instrument(skip(self, patch))]
    pub fn update(&mut self, id: &RecordId, patch: StoryPatch) -> Result<bool> {
        let Some(story) = self.stories.iter_mut().find(|story| &story.id == id) else {
            return Ok(false);
        };

        if let Some(title) = patch.title {
            story.title = title;
        }
        if let Some(excerpt) = patch.excerpt {
            story.excerpt = excerpt;
        }
        if let Some(body) = patch.body {
            story.body = body;
        }
        if let Some(author) = patch.author {
            story.author = author;
        }
        if let Some(image) = patch.image {
            story.image = Some(image);
        }
        if let Some(tags) = patch.tags {
            story.tags = tags;
        }

        self.persist()?;

        debug!(id = %id, "Updated local story");

        Ok(true)
    }

    /// Remove an owned story. Returns `false` when the id is unknown.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &RecordId) -> Result<bool> {
        let before = self.stories.len();
        self.stories.retain(|story| &story.id != id);

        if self.stories.len() == before {
            return Ok(false);
        }

        self.persist()?;

        debug!(id = %id, "Deleted local story");

        Ok(true)
    }

    /// Empty the collection and remove the persisted blob entirely.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        self.stories.clear();

        if self.path.exists() {
            fs::remove_file(&self.path).map_err(map_io)?;
        }

        debug!("Cleared local story store");

        Ok(())
    }

    /// Rewrite the full collection, via a temp file renamed into place so a
    /// failed write never truncates the existing blob.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let blob = serde_json::to_string_pretty(&self.stories).map_err(|e| {
            Error::Storage(StorageError::Serialize {
                message: e.to_string(),
            })
        })?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &blob).map_err(map_io)?;
        fs::rename(&temp_path, &self.path).map_err(map_io)?;

        Ok(())
    }
}
