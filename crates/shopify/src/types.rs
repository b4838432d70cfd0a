//! Typed records for the Admin API's blog resources and the export file.
//!
//! The REST Admin API represents blogs and articles as loose attribute
//! maps; these structs pin down the fields this tool reads and writes.
//! Unknown fields in API responses are ignored, and optional fields are
//! omitted from serialized output rather than written as `null`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blog_portal_core::{ArticleId, BlogId, Handle};

/// A blog as returned by the Admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    /// Platform-assigned identifier.
    pub id: BlogId,
    /// Display title.
    pub title: String,
    /// URL slug, unique within the store.
    pub handle: Handle,
}

/// An article, either fetched from the Admin API or read from an export
/// file.
///
/// `id` and `blog_id` are platform-assigned and therefore present on
/// fetched articles but optional in export files; the importer ignores
/// them and matches purely by handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Platform-assigned identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    /// Owning blog's identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<BlogId>,
    /// Display title.
    pub title: String,
    /// URL slug, unique within the owning blog.
    pub handle: Handle,
    /// Author display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Comma-separated tag list (the REST API's representation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Body content as HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Publication timestamp, preserved across export/import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Featured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ArticleImage>,
}

/// An article's featured image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleImage {
    /// Image source URL.
    pub src: String,
    /// Alt text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Payload for creating a blog.
///
/// Only title and handle are sent; everything else is platform-assigned.
#[derive(Debug, Clone, Serialize)]
pub struct NewBlog {
    /// Display title.
    pub title: String,
    /// URL slug.
    pub handle: Handle,
}

/// Payload for creating an article under a blog.
#[derive(Debug, Clone, Serialize)]
pub struct NewArticle {
    /// Display title.
    pub title: String,
    /// URL slug.
    pub handle: Handle,
    /// Author display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Comma-separated tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Body content as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Publication timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Featured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ArticleImage>,
}

impl From<&Article> for NewArticle {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            handle: article.handle.clone(),
            author: article.author.clone(),
            tags: article.tags.clone(),
            body_html: article.body_html.clone(),
            published_at: article.published_at,
            image: article.image.clone(),
        }
    }
}

/// One blog's entry in the export file: title, handle, and every article.
///
/// A file entry without an `articles` key fails deserialization, which is
/// the importer's data-format error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogExport {
    /// Display title.
    pub title: String,
    /// URL slug, unique within the store.
    pub handle: Handle,
    /// Every article the blog owned at export time.
    pub articles: Vec<Article>,
}

/// The export file's top-level shape: blog handle to exported blog.
///
/// A `BTreeMap` keeps key order stable, so exporting the same store state
/// twice produces byte-identical files.
pub type ExportRecord = BTreeMap<Handle, BlogExport>;

// Wire envelopes: the REST API wraps each resource in a keyed object,
// e.g. `{"blogs": [...]}` or `{"article": {...}}`.

#[derive(Deserialize)]
pub(crate) struct BlogsEnvelope {
    pub blogs: Vec<Blog>,
}

#[derive(Deserialize)]
pub(crate) struct BlogEnvelope {
    pub blog: Blog,
}

#[derive(Deserialize)]
pub(crate) struct ArticlesEnvelope {
    pub articles: Vec<Article>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleEnvelope {
    pub article: Article,
}
