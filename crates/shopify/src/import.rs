//! Blog import: read an export file and reconcile it against the
//! destination store by handle.
//!
//! Reconciliation rule: a blog or article exists iff its handle exists in
//! the same scope. Existing entities are never updated or deleted; the
//! importer only creates what is missing, so running the same import
//! twice creates nothing the second time.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use blog_portal_core::Handle;

use crate::{Article, Blog, BlogStore, ExportRecord, NewArticle, NewBlog, ShopifyError};

/// Errors that can occur while importing.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The export file is missing or unreadable.
    #[error("failed to read export file {}: {source}", path.display())]
    Read {
        /// Path that was given.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON in the export-record shape.
    #[error("export file {} is not a valid blog export: {source}", path.display())]
    Format {
        /// Path that was given.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Admin API call failed. Aborts the rest of the import.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),
}

/// Counts of what an import actually created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Blogs created because no blog with that handle existed.
    pub blogs_created: usize,
    /// Articles created under existing or new blogs.
    pub articles_created: usize,
}

/// Parse an export file into the export-record shape.
///
/// # Errors
///
/// Returns [`ImportError::Read`] if the file cannot be read and
/// [`ImportError::Format`] if it is not valid JSON in the expected shape.
pub fn read_export(path: &Path) -> Result<ExportRecord, ImportError> {
    let bytes = fs::read(path).map_err(|source| ImportError::Read {
        path: path.to_owned(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ImportError::Format {
        path: path.to_owned(),
        source,
    })
}

/// Exported articles whose handles are absent from `existing`.
///
/// This is the whole reconciliation rule: handle-set membership, no
/// content diffing. Already-present articles are left untouched.
#[must_use]
pub fn missing_articles<'a>(existing: &[Article], exported: &'a [Article]) -> Vec<&'a Article> {
    let present: HashSet<&Handle> = existing.iter().map(|a| &a.handle).collect();

    exported
        .iter()
        .filter(|a| !present.contains(&a.handle))
        .collect()
}

/// Import an export file into the destination store.
///
/// For each exported blog handle: if a blog with that handle exists,
/// create only its missing articles under the existing blog's id;
/// otherwise create the blog (title + handle) and then every exported
/// article under the new id. Each creation is reported by handle.
///
/// # Errors
///
/// A missing/malformed file fails before any API call. Any failed create
/// (validation error, duplicate-handle race, network error) aborts the
/// remaining import; there is no per-item retry.
pub fn import_blogs<S: BlogStore>(
    store: &S,
    input_path: impl AsRef<Path>,
) -> Result<ImportSummary, ImportError> {
    let record = read_export(input_path.as_ref())?;

    let existing: HashMap<Handle, Blog> = store
        .list_blogs()?
        .into_iter()
        .map(|b| (b.handle.clone(), b))
        .collect();

    let mut summary = ImportSummary::default();

    for (handle, export) in &record {
        if let Some(blog) = existing.get(handle) {
            let current = store.list_articles(blog.id)?;
            let missing = missing_articles(&current, &export.articles);
            tracing::debug!(
                "blog {} already exists, {} of {} articles missing",
                handle,
                missing.len(),
                export.articles.len()
            );

            for article in missing {
                let created = store.create_article(blog.id, &NewArticle::from(article))?;
                tracing::info!("created article {}", created.handle);
                summary.articles_created += 1;
            }
        } else {
            let created = store.create_blog(&NewBlog {
                title: export.title.clone(),
                handle: handle.clone(),
            })?;
            tracing::info!("created blog {}", created.handle);
            summary.blogs_created += 1;

            for article in &export.articles {
                let created = store.create_article(created.id, &NewArticle::from(article))?;
                tracing::info!("created article {}", created.handle);
                summary.articles_created += 1;
            }
        }
    }

    tracing::info!(
        "import finished: {} blogs and {} articles created",
        summary.blogs_created,
        summary.articles_created
    );
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::export::export_blogs;
    use crate::testing::InMemoryStore;

    fn article(handle: &str) -> Article {
        Article {
            id: None,
            blog_id: None,
            title: handle.to_uppercase(),
            handle: handle.parse().unwrap(),
            author: None,
            tags: None,
            body_html: None,
            published_at: None,
            image: None,
        }
    }

    fn export_file(dir: &tempfile::TempDir, store: &InMemoryStore) -> std::path::PathBuf {
        let path = dir.path().join("blog_export.json");
        export_blogs(store, &path).unwrap();
        path
    }

    #[test]
    fn test_missing_articles_is_set_difference() {
        let existing = vec![article("a1")];
        let exported = vec![article("a1"), article("a2")];

        let missing = missing_articles(&existing, &exported);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing.first().unwrap().handle.as_str(), "a2");
    }

    #[test]
    fn test_missing_articles_when_all_present() {
        let existing = vec![article("a1"), article("a2")];
        let exported = vec![article("a1"), article("a2")];
        assert!(missing_articles(&existing, &exported).is_empty());
    }

    #[test]
    fn test_round_trip_into_empty_store() {
        let source = InMemoryStore::new();
        let b1 = source.seed_blog("Blog One", "h1");
        source.seed_article(b1, "A1", "a1");
        source.seed_article(b1, "A2", "a2");
        source.seed_blog("Blog Two", "h2");

        let dir = tempfile::tempdir().unwrap();
        let path = export_file(&dir, &source);

        let destination = InMemoryStore::new();
        let summary = import_blogs(&destination, &path).unwrap();

        assert_eq!(summary.blogs_created, 2);
        assert_eq!(summary.articles_created, 2);
        assert_eq!(destination.blog_handles().len(), 2);
        assert_eq!(destination.article_handles("h1").len(), 2);
        assert!(destination.article_handles("h2").is_empty());
    }

    #[test]
    fn test_import_is_idempotent() {
        let source = InMemoryStore::new();
        let b1 = source.seed_blog("Blog One", "h1");
        source.seed_article(b1, "A1", "a1");

        let dir = tempfile::tempdir().unwrap();
        let path = export_file(&dir, &source);

        let destination = InMemoryStore::new();
        import_blogs(&destination, &path).unwrap();
        let calls_after_first = destination.create_calls();

        let second = import_blogs(&destination, &path).unwrap();

        assert_eq!(second, ImportSummary::default());
        assert_eq!(destination.create_calls(), calls_after_first);
    }

    #[test]
    fn test_partial_merge_creates_only_missing_articles() {
        let source = InMemoryStore::new();
        let b1 = source.seed_blog("Blog One", "h1");
        source.seed_article(b1, "A1", "a1");
        source.seed_article(b1, "A2", "a2");

        let dir = tempfile::tempdir().unwrap();
        let path = export_file(&dir, &source);

        let destination = InMemoryStore::new();
        let existing_blog = destination.seed_blog("Blog One", "h1");
        destination.seed_article(existing_blog, "A1", "a1");

        let summary = import_blogs(&destination, &path).unwrap();

        assert_eq!(summary.blogs_created, 0);
        assert_eq!(summary.articles_created, 1);
        // one create_article call, no blog recreation
        assert_eq!(destination.create_calls(), 1);
        assert_eq!(destination.article_handles("h1").len(), 2);
    }

    #[test]
    fn test_new_blog_with_empty_article_list_is_still_created() {
        let source = InMemoryStore::new();
        source.seed_blog("Empty", "empty");

        let dir = tempfile::tempdir().unwrap();
        let path = export_file(&dir, &source);

        let destination = InMemoryStore::new();
        let summary = import_blogs(&destination, &path).unwrap();

        assert_eq!(summary.blogs_created, 1);
        assert_eq!(summary.articles_created, 0);
        assert_eq!(destination.create_calls(), 1);
    }

    #[test]
    fn test_invalid_json_fails_with_no_create_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog_export.json");
        std::fs::write(&path, b"not json at all").unwrap();

        let destination = InMemoryStore::new();
        let result = import_blogs(&destination, &path);

        assert!(matches!(result, Err(ImportError::Format { .. })));
        assert_eq!(destination.create_calls(), 0);
    }

    #[test]
    fn test_entry_without_articles_key_fails_with_no_create_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog_export.json");
        std::fs::write(
            &path,
            br#"{"news": {"title": "News", "handle": "news"}}"#,
        )
        .unwrap();

        let destination = InMemoryStore::new();
        let result = import_blogs(&destination, &path);

        assert!(matches!(result, Err(ImportError::Format { .. })));
        assert_eq!(destination.create_calls(), 0);
    }

    #[test]
    fn test_missing_file_fails_with_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.json");

        let destination = InMemoryStore::new();
        let result = import_blogs(&destination, &path);

        assert!(matches!(result, Err(ImportError::Read { .. })));
        assert_eq!(destination.create_calls(), 0);
    }

    #[test]
    fn test_failed_create_aborts_remaining_import() {
        // Two entries in the file share an article handle; the second
        // create collides and the whole import propagates the error.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog_export.json");
        std::fs::write(
            &path,
            br#"{
                "news": {
                    "title": "News",
                    "handle": "news",
                    "articles": [
                        {"title": "Post", "handle": "post"},
                        {"title": "Post again", "handle": "post"}
                    ]
                }
            }"#,
        )
        .unwrap();

        let destination = InMemoryStore::new();
        let result = import_blogs(&destination, &path);

        assert!(matches!(
            result,
            Err(ImportError::Shopify(ShopifyError::Validation(_)))
        ));
        // blog + first article landed before the abort
        assert_eq!(destination.create_calls(), 3);
        assert_eq!(destination.article_handles("news").len(), 1);
    }
}
