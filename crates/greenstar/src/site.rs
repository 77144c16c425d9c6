//! Site content and configuration

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SiteError;

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier used by `/post/:type/:id`
    pub id: u32,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Category matched against the `:type` route parameter
    #[serde(default = "default_category")]
    pub category: String,
}

impl Post {
    /// Create a post in `category`.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }
}

fn default_category() -> String {
    "general".to_string()
}

/// Site-wide configuration: title, base URL and posts.
///
/// Every field is optional in the JSON form; missing fields take their
/// defaults.
///
/// ```
/// use greenstar::SiteConfig;
///
/// let site = SiteConfig::from_json_str(r#"{ "title": "Notes" }"#).unwrap();
/// assert_eq!(site.title, "Notes");
/// assert_eq!(site.base_url, "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown on the home view
    pub title: String,

    /// Path the site is served under
    pub base_url: String,

    /// All posts
    pub posts: Vec<Post>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Vue로 만든 나만의 블로그".to_string(),
            base_url: "/".to_string(),
            posts: vec![
                Post::new(1, "첫 번째 글", "Vue 블로그를 시작했어요!", "webdev"),
                Post::new(2, "두 번째 글", "GitHub Pages에 올릴 수 있어요.", "webdev"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON site config.
    pub fn from_json_str(json: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON site config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading site config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the base URL and post id uniqueness.
    pub fn validate(&self) -> Result<(), SiteError> {
        if !self.base_url.starts_with('/') {
            return Err(SiteError::InvalidBaseUrl(self.base_url.clone()));
        }
        let mut ids = HashSet::new();
        for post in &self.posts {
            if !ids.insert(post.id) {
                return Err(SiteError::DuplicatePostId(post.id));
            }
        }
        Ok(())
    }

    /// Look up a post by id.
    pub fn post(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts whose category equals `category` (ASCII case-insensitive).
    pub fn posts_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts
            .iter()
            .filter(move |p| p.category.eq_ignore_ascii_case(category))
    }
}
