use super::{PageCursor, PaginationError};

/// Page size used when the caller does not supply `limit`.
pub const DEFAULT_PAGE_LIMIT: i32 = 10;

/// A validated request for one page of posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return. Always at least 1.
    pub limit: i32,
    /// Exclusive resume point from a previous page.
    pub start_key: Option<PageCursor>,
}

impl PageRequest {
    /// Creates a first-page request.
    ///
    /// Returns an error if `limit` is not positive.
    pub fn new(limit: i32) -> Result<Self, PaginationError> {
        if limit < 1 {
            return Err(PaginationError::InvalidLimit(limit.to_string()));
        }
        Ok(Self {
            limit,
            start_key: None,
        })
    }

    /// Resume after the given cursor.
    pub fn after(mut self, cursor: PageCursor) -> Self {
        self.start_key = Some(cursor);
        self
    }

    /// Build a request from raw query-string values.
    ///
    /// - `limit` falls back to `default_limit` when absent and must otherwise
    ///   parse as an integer in `1..=i32::MAX` (surrounding whitespace is
    ///   ignored).
    /// - An empty `start_key` is treated as absent.
    pub fn from_query(
        limit: Option<&str>,
        start_key: Option<&str>,
        default_limit: i32,
    ) -> Result<Self, PaginationError> {
        let limit = match limit {
            Some(raw) => parse_limit(raw)?,
            None => default_limit,
        };

        let request = Self::new(limit)?;

        Ok(match start_key.filter(|key| !key.is_empty()) {
            Some(key) => request.after(PageCursor::new(key)),
            None => request,
        })
    }
}

fn parse_limit(raw: &str) -> Result<i32, PaginationError> {
    match raw.trim().parse::<i32>() {
        Ok(limit) if limit >= 1 => Ok(limit),
        _ => Err(PaginationError::InvalidLimit(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_supplied() {
        let request = PageRequest::from_query(None, None, DEFAULT_PAGE_LIMIT).unwrap();

        assert_eq!(request.limit, 10);
        assert_eq!(request.start_key, None);
    }

    #[test]
    fn test_parses_limit_and_start_key() {
        let request = PageRequest::from_query(Some("2"), Some("abc"), 10).unwrap();

        assert_eq!(request.limit, 2);
        assert_eq!(request.start_key, Some(PageCursor::new("abc")));
    }

    #[test]
    fn test_empty_start_key_is_absent() {
        let request = PageRequest::from_query(Some("5"), Some(""), 10).unwrap();
        assert_eq!(request.start_key, None);
    }

    #[test]
    fn test_limit_tolerates_surrounding_whitespace() {
        let request = PageRequest::from_query(Some(" 7 "), None, 10).unwrap();
        assert_eq!(request.limit, 7);
    }

    #[test]
    fn test_rejects_non_numeric_limit() {
        assert_eq!(
            PageRequest::from_query(Some("ten"), None, 10),
            Err(PaginationError::InvalidLimit("ten".to_string()))
        );
    }

    #[test]
    fn test_rejects_zero_and_negative_limit() {
        assert!(PageRequest::from_query(Some("0"), None, 10).is_err());
        assert!(PageRequest::from_query(Some("-3"), None, 10).is_err());
    }

    #[test]
    fn test_rejects_limit_out_of_range() {
        assert!(PageRequest::from_query(Some("99999999999"), None, 10).is_err());
    }

    #[test]
    fn test_rejects_empty_limit() {
        assert!(PageRequest::from_query(Some(""), None, 10).is_err());
    }

    #[test]
    fn test_new_rejects_non_positive_default() {
        assert!(PageRequest::new(0).is_err());
        assert!(PageRequest::from_query(None, None, 0).is_err());
    }
}
