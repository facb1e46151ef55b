//! Built-in content library: difficulty-tagged reading texts on disk.

mod front_matter;

pub use front_matter::{parse as parse_front_matter, FrontMatter};

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Difficulty tiers, ordered easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Human-readable label for listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }
}

/// Content listing entry, without the full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMeta {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

/// A full content item as served to the reading view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(flatten)]
    pub meta: ContentMeta,
    pub text: String,
}

/// Markdown-file-backed content library.
pub struct ContentLibrary {
    dir: PathBuf,
}

impl ContentLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// List all content metadata, sorted by difficulty then title.
    ///
    /// A missing or unreadable directory degrades to an empty listing with a
    /// warning; the picker shows its own retry message.
    pub fn list(&self) -> Vec<ContentMeta> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %self.dir.display(), "content directory unreadable: {}", err);
                return Vec::new();
            }
        };

        let mut items: Vec<ContentMeta> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                let id = content_id_for_path(&path)?;
                match self.read_item(&id, &path) {
                    Ok(item) => Some(item.meta),
                    Err(err) => {
                        warn!(id = id.as_str(), "skipping unreadable content file: {}", err);
                        None
                    }
                }
            })
            .collect();

        items.sort_by(|a, b| {
            a.difficulty
                .cmp(&b.difficulty)
                .then_with(|| a.title.cmp(&b.title))
        });
        items
    }

    /// Load one content item by id.
    ///
    /// # Errors
    /// [`AppError::ContentNotFound`] for unknown or invalid ids,
    /// [`AppError::StorageMessage`] when the file exists but cannot be read.
    pub fn get(&self, id: &str) -> Result<ContentItem, AppError> {
        if !is_valid_content_id(id) {
            return Err(AppError::ContentNotFound);
        }
        let path = self.dir.join(format!("{}.md", id));
        if !path.is_file() {
            return Err(AppError::ContentNotFound);
        }
        self.read_item(id, &path)
    }

    fn read_item(&self, id: &str, path: &Path) -> Result<ContentItem, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| AppError::StorageMessage(err.to_string()))?;
        let (matter, body) = parse_front_matter(&raw);
        let meta = ContentMeta {
            id: id.to_string(),
            title: matter
                .fields
                .get("title")
                .cloned()
                .unwrap_or_else(|| id.to_string()),
            description: matter.fields.get("description").cloned().unwrap_or_default(),
            difficulty: matter
                .fields
                .get("difficulty")
                .map(|value| Difficulty::parse(value))
                .unwrap_or(Difficulty::Beginner),
            tags: matter.tags,
        };
        Ok(ContentItem { meta, text: body })
    }
}

fn content_id_for_path(path: &Path) -> Option<String> {
    if path.extension()?.to_str()? != "md" {
        return None;
    }
    let id = path.file_stem()?.to_str()?.to_string();
    is_valid_content_id(&id).then_some(id)
}

/// Ids are file stems; only a conservative character set is addressable.
fn is_valid_content_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
