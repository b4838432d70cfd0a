//! In-memory [`BlogStore`] for exercising the exporter and importer
//! without a network.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;

use blog_portal_core::{ArticleId, BlogId, Handle};

use crate::{Article, Blog, BlogStore, NewArticle, NewBlog, ShopifyError};

/// An in-memory store with the same uniqueness rules as the real API:
/// blog handles unique per store, article handles unique per blog, and a
/// 422-style validation error on duplicates.
#[derive(Default)]
pub struct InMemoryStore {
    state: RefCell<State>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    blogs: Vec<(Blog, Vec<Article>)>,
    create_calls: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a blog in place without going through the create path.
    pub fn seed_blog(&self, title: &str, handle: &str) -> BlogId {
        let mut state = self.state.borrow_mut();
        let id = BlogId::new(state.alloc_id());
        state.blogs.push((
            Blog {
                id,
                title: title.to_owned(),
                handle: Handle::parse(handle).unwrap(),
            },
            Vec::new(),
        ));
        id
    }

    /// Put an article in place without going through the create path.
    pub fn seed_article(&self, blog_id: BlogId, title: &str, handle: &str) -> ArticleId {
        let mut state = self.state.borrow_mut();
        let id = ArticleId::new(state.alloc_id());
        let (_, articles) = state
            .blogs
            .iter_mut()
            .find(|(b, _)| b.id == blog_id)
            .unwrap();
        articles.push(Article {
            id: Some(id),
            blog_id: Some(blog_id),
            title: title.to_owned(),
            handle: Handle::parse(handle).unwrap(),
            author: None,
            tags: None,
            body_html: None,
            published_at: None,
            image: None,
        });
        id
    }

    /// Number of `create_blog`/`create_article` calls made so far.
    pub fn create_calls(&self) -> usize {
        self.state.borrow().create_calls
    }

    /// Article handles currently under the blog with the given handle.
    pub fn article_handles(&self, blog_handle: &str) -> Vec<Handle> {
        let state = self.state.borrow();
        state
            .blogs
            .iter()
            .find(|(b, _)| b.handle.as_str() == blog_handle)
            .map(|(_, articles)| articles.iter().map(|a| a.handle.clone()).collect())
            .unwrap_or_default()
    }

    /// Handles of every blog on the store.
    pub fn blog_handles(&self) -> Vec<Handle> {
        let state = self.state.borrow();
        state.blogs.iter().map(|(b, _)| b.handle.clone()).collect()
    }
}

impl State {
    fn alloc_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl BlogStore for InMemoryStore {
    fn list_blogs(&self) -> Result<Vec<Blog>, ShopifyError> {
        let state = self.state.borrow();
        Ok(state.blogs.iter().map(|(b, _)| b.clone()).collect())
    }

    fn list_articles(&self, blog_id: BlogId) -> Result<Vec<Article>, ShopifyError> {
        let state = self.state.borrow();
        state
            .blogs
            .iter()
            .find(|(b, _)| b.id == blog_id)
            .map(|(_, articles)| articles.clone())
            .ok_or_else(|| ShopifyError::NotFound(format!("blog {blog_id}")))
    }

    fn create_blog(&self, blog: &NewBlog) -> Result<Blog, ShopifyError> {
        let mut state = self.state.borrow_mut();
        state.create_calls += 1;

        if state.blogs.iter().any(|(b, _)| b.handle == blog.handle) {
            return Err(ShopifyError::Validation(
                "handle has already been taken".to_string(),
            ));
        }

        let created = Blog {
            id: BlogId::new(state.alloc_id()),
            title: blog.title.clone(),
            handle: blog.handle.clone(),
        };
        state.blogs.push((created.clone(), Vec::new()));
        Ok(created)
    }

    fn create_article(
        &self,
        blog_id: BlogId,
        article: &NewArticle,
    ) -> Result<Article, ShopifyError> {
        let mut state = self.state.borrow_mut();
        state.create_calls += 1;

        let id = ArticleId::new(state.alloc_id());
        let (_, articles) = state
            .blogs
            .iter_mut()
            .find(|(b, _)| b.id == blog_id)
            .ok_or_else(|| ShopifyError::NotFound(format!("blog {blog_id}")))?;

        if articles.iter().any(|a| a.handle == article.handle) {
            return Err(ShopifyError::Validation(
                "handle has already been taken".to_string(),
            ));
        }

        let created = Article {
            id: Some(id),
            blog_id: Some(blog_id),
            title: article.title.clone(),
            handle: article.handle.clone(),
            author: article.author.clone(),
            tags: article.tags.clone(),
            body_html: article.body_html.clone(),
            published_at: article.published_at,
            image: article.image.clone(),
        };
        articles.push(created.clone());
        Ok(created)
    }
}
