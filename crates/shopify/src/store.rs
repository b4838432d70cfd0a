//! The Admin API operations this tool consumes.

use blog_portal_core::BlogId;

use crate::{Article, Blog, NewArticle, NewBlog, ShopifyError};

/// The four blog operations the exporter and importer are built on.
///
/// [`Session`](crate::Session) implements this against the live Admin
/// API; tests implement it with an in-memory store. Everything above
/// this trait is pure reconciliation and serialization logic.
pub trait BlogStore {
    /// List every blog on the store.
    fn list_blogs(&self) -> Result<Vec<Blog>, ShopifyError>;

    /// List every article under one blog.
    fn list_articles(&self, blog_id: BlogId) -> Result<Vec<Article>, ShopifyError>;

    /// Create a blog.
    fn create_blog(&self, blog: &NewBlog) -> Result<Blog, ShopifyError>;

    /// Create an article under an existing blog.
    fn create_article(&self, blog_id: BlogId, article: &NewArticle)
    -> Result<Article, ShopifyError>;
}
