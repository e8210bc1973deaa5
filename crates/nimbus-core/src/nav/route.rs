//! Route context: the current location's fragment.
//!
//! The route is supplied by the shell on every read; the controller never
//! caches it. Matching against entry URLs is exact string equality on the
//! fragment -- no prefix or path matching.

/// The fragment portion of the current location (leading `#` included).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    fragment: String,
}

impl Route {
    /// A route with no fragment. Matches no entry.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a route from a fragment string such as `"#pricing"`.
    ///
    /// A missing leading `#` is added so callers can pass bare section
    /// names.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        let hash = hash.into();
        if hash.is_empty() || hash.starts_with('#') {
            Self { fragment: hash }
        } else {
            Self {
                fragment: format!("#{hash}"),
            }
        }
    }

    /// The fragment, e.g. `"#pricing"`. Empty when no section is current.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hash_keeps_leading_hash() {
        assert_eq!(Route::from_hash("#a").fragment(), "#a");
    }

    #[test]
    fn from_hash_adds_missing_hash() {
        assert_eq!(Route::from_hash("pricing").fragment(), "#pricing");
    }

    #[test]
    fn none_is_empty() {
        assert_eq!(Route::none().fragment(), "");
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Route::from_hash("#a"), Route::from_hash("#a"));
        assert_ne!(Route::from_hash("#a"), Route::from_hash("#a/"));
    }
}
