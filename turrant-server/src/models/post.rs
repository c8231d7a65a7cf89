//! Blog post records and admin input shapes
//!
//! `Post` is what the store returns. `NewPost` and `PostPatch` are what the
//! admin surface accepts; both serialize without their unset fields so the
//! store only sees columns the caller actually supplied.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::{null_as_default, opaque_id};
use super::slug::validate_slug;
use super::{Validate, ValidationError};

/// Author applied when a new post does not name one
pub const DEFAULT_AUTHOR: &str = "Turrant Team";

/// Card color applied when a new post does not pick one
pub const DEFAULT_CARD_COLOR: &str = "teal";

/// Blog post row from `blog_posts`
///
/// Nullable columns never fail the decode: `null` title/slug/flags read as
/// their defaults, timestamps are passed through exactly as the store wrote
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub card_color: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    /// Columns not modelled here (e.g. `updated_at`), passed through as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_author() -> Option<String> {
    Some(DEFAULT_AUTHOR.to_string())
}

fn default_card_color() -> Option<String> {
    Some(DEFAULT_CARD_COLOR.to_string())
}

fn default_false() -> Option<bool> {
    Some(false)
}

/// Create request body for `POST /api/admin/posts`
///
/// An explicit `null` for a defaulted field clears the default, leaving the
/// column to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default = "default_author", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default = "default_card_color", skip_serializing_if = "Option::is_none")]
    pub card_color: Option<String>,
    #[serde(default = "default_false", skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default = "default_false", skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

impl NewPost {
    /// Minimal post with the documented defaults applied.
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            excerpt: None,
            content: None,
            featured_image: None,
            category: None,
            tags: None,
            author: default_author(),
            card_color: default_card_color(),
            published: default_false(),
            featured: default_false(),
            meta_title: None,
            meta_description: None,
        }
    }

    /// Row to insert: only the fields that are set.
    pub fn to_row(&self) -> Map<String, Value> {
        to_object(self)
    }
}

/// Update request body for `PUT /api/admin/posts/{id}`
///
/// Every field is optional; omitted and `null` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

impl PostPatch {
    /// Columns to update: only the fields that are set.
    pub fn to_row(&self) -> Map<String, Value> {
        to_object(self)
    }
}

impl Validate for NewPost {
    /// Check title and slug before anything reaches the store.
    fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_slug(&self.slug)?;
        Ok(())
    }
}

impl Validate for PostPatch {
    /// Validate only the fields that were supplied.
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(slug) = &self.slug {
            validate_slug(slug)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::Empty { field: "title" });
    }
    Ok(())
}

fn to_object<T: Serialize>(value: &T) -> Map<String, Value> {
    // Plain structs of strings/bools/vecs always serialize to an object.
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
