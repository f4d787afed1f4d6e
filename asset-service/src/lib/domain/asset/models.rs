use std::fmt;

use crate::domain::asset::errors::AssetNameError;

/// Asset name value type, unique per owner.
///
/// Non-empty, at most 255 bytes, no control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetName(String);

impl AssetName {
    const MAX_LENGTH: usize = 255;

    /// Create a new valid asset name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty
    /// * `TooLong` - Name longer than 255 bytes
    /// * `InvalidCharacters` - Name contains control characters
    pub fn new(name: impl Into<String>) -> Result<Self, AssetNameError> {
        let name = name.into();

        if name.is_empty() {
            return Err(AssetNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(AssetNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }
        if name.chars().any(char::is_control) {
            return Err(AssetNameError::InvalidCharacters);
        }

        Ok(Self(name))
    }

    /// Wrap a name read back from storage without validating it.
    ///
    /// Stored rows may predate the current naming rules.
    pub fn from_stored(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A live (not deleted) asset as returned by read paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: AssetName,
    pub data: Vec<u8>,
}

impl Asset {
    pub fn display_text(&self) -> String {
        display_text(&self.data)
    }
}

/// Render a stored payload for clients.
///
/// Decodes as UTF-8 (invalid sequences become U+FFFD) and drops newlines,
/// tabs, backslashes and double quotes. Not reversible.
pub fn display_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data)
        .chars()
        .filter(|c| !matches!(c, '\n' | '\t' | '\\' | '"'))
        .collect()
}

/// One page of a listing, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_SIZE: i64 = 10;

    /// Build a page request, falling back to defaults for non-positive values.
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: if page < 1 { Self::DEFAULT_PAGE } else { page },
            size: if size < 1 { Self::DEFAULT_SIZE } else { size },
        }
    }

    /// Parse raw query parameters. Absent, non-numeric or non-positive
    /// values fall back to page 1 and size 10.
    pub fn from_raw(page: Option<&str>, size: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<i64>().ok());

        Self::new(
            parse(page).unwrap_or(Self::DEFAULT_PAGE),
            parse(size).unwrap_or(Self::DEFAULT_SIZE),
        )
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// Result of a listing.
///
/// `has_more` is true when the page came back full. It is a hint, not an
/// exact answer: a full last page still reports `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPage {
    pub page: i64,
    pub size: i64,
    pub assets: Vec<Asset>,
    pub has_more: bool,
}

impl AssetPage {
    pub fn new(request: PageRequest, assets: Vec<Asset>) -> Self {
        let has_more = assets.len() as i64 == request.limit();
        Self {
            page: request.page(),
            size: request.size(),
            assets,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_name_validation() {
        assert!(AssetName::new("report.txt").is_ok());
        assert!(AssetName::new("with space and ünïcode").is_ok());
        assert_eq!(AssetName::new(""), Err(AssetNameError::Empty));
        assert_eq!(
            AssetName::new("a".repeat(256)),
            Err(AssetNameError::TooLong {
                max: 255,
                actual: 256
            })
        );
        assert!(AssetName::new("a".repeat(255)).is_ok());
        assert_eq!(
            AssetName::new("bad\nname"),
            Err(AssetNameError::InvalidCharacters)
        );
    }

    #[test]
    fn test_display_text_strips_structural_characters() {
        assert_eq!(
            display_text(b"line one\nline\ttwo \"quoted\" back\\slash"),
            "line oneline two quoted backslash"
        );
        assert_eq!(display_text(b"plain"), "plain");
        assert_eq!(display_text(b""), "");
    }

    #[test]
    fn test_display_text_replaces_invalid_utf8() {
        assert_eq!(display_text(&[b'o', b'k', 0xff]), "ok\u{fffd}");
    }

    #[test]
    fn test_page_request_defaults() {
        let defaults = PageRequest::from_raw(None, None);
        assert_eq!((defaults.page(), defaults.size()), (1, 10));

        let garbage = PageRequest::from_raw(Some("abc"), Some("1.5"));
        assert_eq!((garbage.page(), garbage.size()), (1, 10));

        let non_positive = PageRequest::from_raw(Some("0"), Some("-3"));
        assert_eq!((non_positive.page(), non_positive.size()), (1, 10));

        let explicit = PageRequest::from_raw(Some("3"), Some("25"));
        assert_eq!((explicit.page(), explicit.size()), (3, 25));
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
        assert_eq!(PageRequest::new(i64::MAX, i64::MAX).offset(), i64::MAX);
    }

    #[test]
    fn test_has_more_is_full_page_heuristic() {
        let asset = |n: usize| Asset {
            name: AssetName::new(format!("asset-{}", n)).unwrap(),
            data: vec![],
        };

        let full = AssetPage::new(PageRequest::new(1, 10), (0..10).map(asset).collect());
        assert!(full.has_more);

        let partial = AssetPage::new(PageRequest::new(1, 10), (0..7).map(asset).collect());
        assert!(!partial.has_more);

        let empty = AssetPage::new(PageRequest::new(2, 10), vec![]);
        assert!(!empty.has_more);
    }
}
