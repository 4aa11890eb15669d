//! URI type with scheme/target splitting.

use std::fmt;

/// Errors related to URI parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriError {
    /// The string contains no `://` separator.
    #[error("URI '{uri}' has no scheme separator")]
    MissingScheme { uri: String },
}

/// A stream wrapper URI of the form `scheme://target`.
///
/// The scheme is everything before the *first* `://`; the target is the
/// remainder and may itself contain a nested scheme
/// (`vault://http://example.com/secret`).
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uri {
    raw: String,
    scheme_len: usize,
}

impl Uri {
    /// Parse a URI string, requiring a `scheme://` prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remotefs_vfs::Uri;
    ///
    /// let uri = Uri::parse("https://example.com/file.txt").unwrap();
    /// assert_eq!(uri.scheme(), "https");
    /// assert_eq!(uri.target(), "example.com/file.txt");
    ///
    /// assert!(Uri::parse("/local/path").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, UriError> {
        let scheme_len = s.find("://").ok_or_else(|| UriError::MissingScheme {
            uri: s.to_string(),
        })?;

        Ok(Uri {
            raw: s.to_string(),
            scheme_len,
        })
    }

    /// The scheme part, without the `://` separator.
    pub fn scheme(&self) -> &str {
        &self.raw[..self.scheme_len]
    }

    /// The target part, everything after the first `://`.
    pub fn target(&self) -> &str {
        &self.raw[self.scheme_len + 3..]
    }

    /// The full URI string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parent of this URI.
    ///
    /// The target's parent is computed with ordinary path-dirname rules:
    /// trailing slashes are ignored, the last segment is dropped, and a
    /// `.` parent is normalized to an empty target, so `http://a/b/`
    /// yields `http://a` while `http://.` and `http://test.txt` both
    /// yield `http://`.
    pub fn dirname(&self) -> Uri {
        let target = self.target().trim_end_matches('/');
        let parent = match target.rfind('/') {
            Some(index) => {
                let head = target[..index].trim_end_matches('/');
                if head.is_empty() {
                    "/"
                } else {
                    head
                }
            }
            None if self.target().len() > target.len() => "/",
            None => ".",
        };
        let parent = if parent == "." { "" } else { parent };

        Uri {
            raw: format!("{}://{}", self.scheme(), parent),
            scheme_len: self.scheme_len,
        }
    }

    /// The final path segment of the target, with any query string or
    /// fragment stripped. Empty when the target ends in `/`.
    pub fn filename(&self) -> &str {
        let target = self.target();
        let end = target.find(['?', '#']).unwrap_or(target.len());
        let path = &target[..end];
        match path.rfind('/') {
            Some(index) => &path[index + 1..],
            None => path,
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
