//! Authenticated session against one store's REST Admin API.
//!
//! - Base URL: `https://{shop}.myshopify.com/admin`
//! - Authentication: private app credentials (API key + password) via
//!   HTTP basic auth on every request
//!
//! A [`Session`] is an ordinary value holding its own HTTP client, so
//! sessions for different stores can coexist in one process.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use blog_portal_core::BlogId;

use crate::{
    Article, Blog, BlogStore, NewArticle, NewBlog, ShopifyError,
    types::{ArticleEnvelope, ArticlesEnvelope, BlogEnvelope, BlogsEnvelope},
};

/// Hosted platform domain; stores live at `{shop}.myshopify.com`.
const PLATFORM_DOMAIN: &str = "myshopify.com";

/// Page size for list requests (the Admin API maximum).
const PAGE_LIMIT: u32 = 250;

/// Private app credentials for one store.
///
/// Immutable once constructed. The password is held behind
/// [`SecretString`], so it is redacted from `Debug` output.
#[derive(Debug, Clone)]
pub struct StoreCredentials {
    /// Store subdomain (the `{shop}` in `{shop}.myshopify.com`).
    pub shop: String,
    /// Private app API key.
    pub api_key: String,
    /// Private app password.
    pub password: SecretString,
}

impl StoreCredentials {
    /// Create credentials for one store.
    #[must_use]
    pub fn new(shop: impl Into<String>, api_key: impl Into<String>, password: SecretString) -> Self {
        Self {
            shop: shop.into(),
            api_key: api_key.into(),
            password,
        }
    }
}

/// Authenticated session against one store's Admin API.
pub struct Session {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl Session {
    /// Establish a session for the given credentials.
    ///
    /// Builds the admin base URL and an HTTP client that sends the
    /// credentials as basic auth on every request. Credentials are not
    /// verified here; a bad API key or password surfaces as
    /// [`ShopifyError::Unauthorized`] on the first real call.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::InvalidDomain`] if the store name does not
    /// form a valid `https://{shop}.myshopify.com/admin` URL, or
    /// [`ShopifyError::Http`] if the HTTP client fails to build.
    pub fn connect(credentials: &StoreCredentials) -> Result<Self, ShopifyError> {
        let base_url = admin_base_url(&credentials.shop)?;

        let encoded = BASE64.encode(format!(
            "{}:{}",
            credentials.api_key,
            credentials.password.expose_secret()
        ));
        let mut auth = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| ShopifyError::Parse(format!("Invalid credential format: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;

        tracing::debug!("session established for {}", base_url);

        Ok(Self { client, base_url })
    }

    /// The admin base URL this session talks to (no credentials in it).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute a GET request against an admin path.
    fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ShopifyError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send()?;
        Self::handle_response(response)
    }

    /// Execute a POST request against an admin path.
    fn post<T: serde::de::DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ShopifyError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.post(&url).json(body).send()?;
        Self::handle_response(response)
    }

    /// Handle an API response and parse the JSON body.
    fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, ShopifyError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .map_err(|e| ShopifyError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response))
    }

    /// Map a non-success response to an error.
    fn parse_error(response: reqwest::blocking::Response) -> ShopifyError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());

        map_error(status, message)
    }
}

/// Map a non-success status and response body to an error.
fn map_error(status: u16, message: String) -> ShopifyError {
    match status {
        401 | 403 => ShopifyError::Unauthorized,
        404 => ShopifyError::NotFound("Resource not found".to_string()),
        // 422 carries the API's validation message (e.g. duplicate handle)
        422 => ShopifyError::Validation(message),
        _ => ShopifyError::Api { status, message },
    }
}

impl BlogStore for Session {
    fn list_blogs(&self) -> Result<Vec<Blog>, ShopifyError> {
        let envelope: BlogsEnvelope = self.get(&format!("/blogs.json?limit={PAGE_LIMIT}"))?;
        Ok(envelope.blogs)
    }

    fn list_articles(&self, blog_id: BlogId) -> Result<Vec<Article>, ShopifyError> {
        let envelope: ArticlesEnvelope =
            self.get(&format!("/blogs/{blog_id}/articles.json?limit={PAGE_LIMIT}"))?;
        Ok(envelope.articles)
    }

    fn create_blog(&self, blog: &NewBlog) -> Result<Blog, ShopifyError> {
        #[derive(Serialize)]
        struct Request<'a> {
            blog: &'a NewBlog,
        }

        let envelope: BlogEnvelope = self.post("/blogs.json", &Request { blog })?;
        Ok(envelope.blog)
    }

    fn create_article(
        &self,
        blog_id: BlogId,
        article: &NewArticle,
    ) -> Result<Article, ShopifyError> {
        #[derive(Serialize)]
        struct Request<'a> {
            article: &'a NewArticle,
        }

        let envelope: ArticleEnvelope =
            self.post(&format!("/blogs/{blog_id}/articles.json"), &Request { article })?;
        Ok(envelope.article)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Build `https://{shop}.myshopify.com/admin`, rejecting store names that
/// would escape that shape. A store name is the bare subdomain: ASCII
/// alphanumerics and hyphens only, no `.myshopify.com` suffix.
fn admin_base_url(shop: &str) -> Result<Url, ShopifyError> {
    let valid = !shop.is_empty()
        && shop
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return Err(ShopifyError::InvalidDomain(shop.to_owned()));
    }

    let candidate = format!("https://{shop}.{PLATFORM_DOMAIN}/admin");
    Url::parse(&candidate).map_err(|_| ShopifyError::InvalidDomain(shop.to_owned()))
}
