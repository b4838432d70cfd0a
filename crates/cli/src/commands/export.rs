//! Blog export command.
//!
//! # Usage
//!
//! ```bash
//! blog-portal export --store-name my-store --api-key KEY --password PW \
//!     --output-file blog_export.json
//! ```

use std::path::Path;

use blog_portal_shopify::{
    Session, StoreCredentials,
    export::{ExportError, export_blogs},
};

/// Connect to the store and export every blog to `output_file`.
///
/// # Errors
///
/// Returns an error if the session cannot be established, any Admin API
/// call fails, or the file cannot be written.
pub fn run(credentials: &StoreCredentials, output_file: &Path) -> Result<(), ExportError> {
    tracing::info!(
        "exporting blogs from {} to {}",
        credentials.shop,
        output_file.display()
    );

    let session = Session::connect(credentials)?;
    let record = export_blogs(&session, output_file)?;

    tracing::info!("export complete: {} blogs", record.len());
    Ok(())
}
