use serde::{Deserialize, Serialize};

/// Opaque continuation token for a post scan.
///
/// The token is whatever key the store reported as the last evaluated record.
/// It is not a sort key and carries no ordering meaning; handlers only pass
/// it back to the store verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    /// Wrap a token previously issued by the store or echoed by a client.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
