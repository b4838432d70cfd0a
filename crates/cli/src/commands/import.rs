//! Blog import command.
//!
//! # Usage
//!
//! ```bash
//! blog-portal import --store-name my-store --api-key KEY --password PW \
//!     --input-file blog_export.json
//! ```

use std::path::Path;

use blog_portal_shopify::{
    Session, StoreCredentials,
    import::{ImportError, import_blogs},
};

/// Connect to the store and reconcile `input_file` against it.
///
/// # Errors
///
/// Returns an error if the session cannot be established, the file is
/// missing or malformed, or any create call fails.
pub fn run(credentials: &StoreCredentials, input_file: &Path) -> Result<(), ImportError> {
    tracing::info!(
        "importing blogs into {} from {}",
        credentials.shop,
        input_file.display()
    );

    let session = Session::connect(credentials)?;
    let summary = import_blogs(&session, input_file)?;

    tracing::info!(
        "import complete: {} blogs and {} articles created",
        summary.blogs_created,
        summary.articles_created
    );
    Ok(())
}
