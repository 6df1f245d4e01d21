//! Post model

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Validation failures for post records
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("post #{index}: field `{field}` must not be blank")]
    Blank { index: usize, field: &'static str },

    #[error("post `{0}`: slug must be lower-case words joined by single hyphens")]
    InvalidSlug(String),

    #[error("post `{slug}`: thumbnail `{thumbnail}` must be a root-relative path or http(s) URL")]
    InvalidThumbnail { slug: String, thumbnail: String },

    #[error("post `{slug}`: category `{category}` has no letters or digits to name its page")]
    InvalidCategory { slug: String, category: String },

    #[error("duplicate slug `{0}`")]
    DuplicateSlug(String),

    #[error("categories `{first}` and `{second}` would share the page /category/{slug}/")]
    CategorySlugCollision {
        first: String,
        second: String,
        slug: String,
    },
}

/// A blog post record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub slug: String,
    pub author: String,
    /// Publication date (YYYY-MM-DD)
    pub date: NaiveDate,
    pub category: String,
    /// Card image, root-relative (`/images/...`) or absolute URL
    pub thumbnail: String,

    /// Rendered body from `_posts/<slug>.md`, empty when none exists
    #[serde(skip)]
    pub content: String,

    /// Short description from the body's front-matter
    #[serde(skip)]
    pub summary: Option<String>,

    #[serde(skip)]
    pub tags: Vec<String>,
}

impl Post {
    /// Create a post with no body
    pub fn new(
        title: &str,
        slug: &str,
        author: &str,
        date: NaiveDate,
        category: &str,
        thumbnail: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
            author: author.to_string(),
            date,
            category: category.to_string(),
            thumbnail: thumbnail.to_string(),
            content: String::new(),
            summary: None,
            tags: Vec::new(),
        }
    }

    /// Check field presence and formats; `index` is the position in the list
    pub fn validate(&self, index: usize) -> Result<(), PostError> {
        let required = [
            ("title", &self.title),
            ("slug", &self.slug),
            ("author", &self.author),
            ("category", &self.category),
            ("thumbnail", &self.thumbnail),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PostError::Blank { index, field });
            }
        }

        if !SLUG_RE.is_match(&self.slug) {
            return Err(PostError::InvalidSlug(self.slug.clone()));
        }

        if self.category_slug().is_empty() {
            return Err(PostError::InvalidCategory {
                slug: self.slug.clone(),
                category: self.category.clone(),
            });
        }

        let thumb = self.thumbnail.as_str();
        let thumb_ok = (thumb.starts_with('/') && !thumb.starts_with("//"))
            || thumb.starts_with("http://")
            || thumb.starts_with("https://");
        if !thumb_ok {
            return Err(PostError::InvalidThumbnail {
                slug: self.slug.clone(),
                thumbnail: self.thumbnail.clone(),
            });
        }

        Ok(())
    }

    /// Path of the post page, relative to the site root
    pub fn href(&self) -> String {
        format!("/blog/{}/", self.slug)
    }

    pub fn category_slug(&self) -> String {
        slug::slugify(&self.category)
    }

    /// Path of the post's category page, relative to the site root
    pub fn category_href(&self) -> String {
        format!("/category/{}/", self.category_slug())
    }

    pub fn has_body(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
