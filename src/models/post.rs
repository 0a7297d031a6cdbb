use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An article as returned by the upstream article API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,

    /// Read back verbatim; the API does not restrict it to [`Category::ALL`].
    pub category: String,

    pub status: Status,

    // The API names these `created_date` / `updated_date`.
    #[serde(default, alias = "created_date")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, alias = "updated_date")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Editorial status of a post.
///
/// `Thrash` is the soft-deleted state; it is the API's spelling and must be
/// sent and received exactly like that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Publish,
    #[default]
    Draft,
    Thrash,
}

impl Status {
    /// Dashboard tab order.
    pub const ALL: [Status; 3] = [Status::Publish, Status::Draft, Status::Thrash];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Publish => "Publish",
            Status::Draft => "Draft",
            Status::Thrash => "Thrash",
        }
    }

    /// Label of the dashboard tab listing posts in this status.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Status::Publish => "Published",
            Status::Draft => "Drafts",
            Status::Thrash => "Trashed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Publish" => Ok(Status::Publish),
            "Draft" => Ok(Status::Draft),
            "Thrash" => Ok(Status::Thrash),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// The fixed set of categories a post can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Technology,
    Business,
    Lifestyle,
    Health,
    Travel,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Business,
        Category::Lifestyle,
        Category::Health,
        Category::Travel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Lifestyle => "Lifestyle",
            Category::Health => "Health",
            Category::Travel => "Travel",
        }
    }

    /// Lowercase name used in CSS class names.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Lifestyle => "lifestyle",
            Category::Health => "health",
            Category::Travel => "travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Write payload for creating or fully updating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: Status,
}

/// Status-only update, used to move a post to the trash.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusUpdate {
    pub status: Status,
}
