//! Blog export: fetch every blog and its articles, write the JSON file.

use std::fs;
use std::path::Path;

use crate::{BlogExport, BlogStore, ExportRecord, ShopifyError};

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Admin API call failed.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),

    /// Writing the output file failed.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the export record failed.
    #[error("failed to serialize export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fetch every blog and its articles, keyed by blog handle.
///
/// # Errors
///
/// Returns the first Admin API failure; nothing fetched so far is kept.
pub fn collect_blogs<S: BlogStore>(store: &S) -> Result<ExportRecord, ShopifyError> {
    let mut record = ExportRecord::new();

    for blog in store.list_blogs()? {
        let articles = store.list_articles(blog.id)?;
        tracing::info!("exported blog {} ({} articles)", blog.handle, articles.len());

        record.insert(
            blog.handle.clone(),
            BlogExport {
                title: blog.title,
                handle: blog.handle,
                articles,
            },
        );
    }

    Ok(record)
}

/// Export a store's blogs to `output_path`, overwriting any existing file.
///
/// The file is written only after every fetch has succeeded, so a failure
/// mid-fetch leaves no output file behind. Returns the record that was
/// written.
///
/// # Errors
///
/// Returns an error if any Admin API call fails, or if serializing or
/// writing the file fails.
pub fn export_blogs<S: BlogStore>(
    store: &S,
    output_path: impl AsRef<Path>,
) -> Result<ExportRecord, ExportError> {
    let record = collect_blogs(store)?;

    let json = serde_json::to_vec_pretty(&record)?;
    fs::write(output_path.as_ref(), json)?;

    tracing::info!(
        "wrote {} blogs to {}",
        record.len(),
        output_path.as_ref().display()
    );
    Ok(record)
}
