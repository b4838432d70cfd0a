//! Handle (URL slug) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Handle`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum HandleError {
    /// The input string is empty.
    #[error("handle cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("handle must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that is not URL-safe.
    #[error(
        "handle contains invalid character {0:?} (allowed: lowercase letters, digits, '-', '_')"
    )]
    InvalidCharacter(char),
}

/// A URL-safe slug identifying a blog or an article within its scope.
///
/// Shopify generates handles from titles (lowercased, whitespace replaced
/// with hyphens). Non-Latin titles keep their letters, so handles may
/// contain unicode. Within one store blog handles are unique, and within
/// one blog article handles are unique, so a handle is the sole identity
/// key the importer needs for reconciliation.
///
/// ## Constraints
///
/// - Length: 1-255 bytes
/// - Allowed characters: alphanumerics without an uppercase form
///   (`a-z`, `0-9`, unicode letters such as `é` or `日`), `-`, `_`
///
/// ## Examples
///
/// ```
/// use blog_portal_core::Handle;
///
/// assert!(Handle::parse("summer-sale-2024").is_ok());
/// assert!(Handle::parse("news").is_ok());
/// assert!(Handle::parse("café-du-jour").is_ok());
///
/// assert!(Handle::parse("").is_err());          // empty
/// assert!(Handle::parse("Summer Sale").is_err()); // uppercase + space
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Maximum length of a handle (Shopify limit).
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `Handle` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 255 bytes
    /// - Contains an uppercase letter, whitespace, or any character that
    ///   is neither alphanumeric nor `-`/`_`
    pub fn parse(s: &str) -> Result<Self, HandleError> {
        if s.is_empty() {
            return Err(HandleError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(HandleError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !((c.is_alphanumeric() && !c.is_uppercase()) || *c == '-' || *c == '_'))
        {
            return Err(HandleError::InvalidCharacter(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Handle` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Handle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Handle {
    type Error = HandleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Handle> for String {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}
