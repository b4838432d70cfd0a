//! Blog Portal CLI - Export and import Shopify blog content.
//!
//! # Usage
//!
//! ```bash
//! # Export a store's blogs and articles to blog_export.json
//! blog-portal export --store-name my-store --api-key KEY --password PW
//!
//! # Import blog_export.json into another store, creating what's missing
//! blog-portal import --store-name other-store --api-key KEY --password PW
//!
//! # Pick a different file
//! blog-portal export --store-name my-store --output-file backup.json
//! ```
//!
//! Credentials can also come from `SHOPIFY_STORE`, `SHOPIFY_API_KEY`, and
//! `SHOPIFY_PASSWORD` (a `.env` file is honored); anything still missing
//! is prompted for, with the password read without echo.
//!
//! # Commands
//!
//! - `export` - Write every blog and article to a JSON file
//! - `import` - Reconcile a JSON file against the destination store

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use blog_portal_shopify::StoreCredentials;

mod commands;
mod prompt;

#[derive(Parser)]
#[command(name = "blog-portal")]
#[command(version, about = "Export and import Shopify blog content")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export blogs and articles to a JSON file
    Export {
        #[command(flatten)]
        store: StoreOpts,

        /// Output file path
        #[arg(long, default_value = "blog_export.json")]
        output_file: PathBuf,
    },
    /// Import blogs and articles from a JSON file
    Import {
        #[command(flatten)]
        store: StoreOpts,

        /// Input file path
        #[arg(long, default_value = "blog_export.json")]
        input_file: PathBuf,
    },
}

/// Store credentials, shared by both subcommands.
#[derive(Args)]
struct StoreOpts {
    /// Store to operate on (the `{store}` in `{store}.myshopify.com`)
    #[arg(long)]
    store_name: Option<String>,

    /// Private app API key
    #[arg(long)]
    api_key: Option<String>,

    /// Private app password
    #[arg(long)]
    password: Option<String>,
}

impl StoreOpts {
    /// Resolve each credential: flag, then environment, then prompt.
    fn resolve(self) -> Result<StoreCredentials, prompt::PromptError> {
        let shop = prompt::required(self.store_name, "SHOPIFY_STORE", "Enter store name")?;
        let api_key = prompt::required(self.api_key, "SHOPIFY_API_KEY", "Enter private app api_key")?;
        let password =
            prompt::secret(self.password, "SHOPIFY_PASSWORD", "Enter private app password")?;

        Ok(StoreCredentials::new(shop, api_key, password))
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::Export { store, output_file } => {
            commands::export::run(&store.resolve()?, &output_file)?;
        }
        Commands::Import { store, input_file } => {
            commands::import::run(&store.resolve()?, &input_file)?;
        }
    }
    Ok(())
}
