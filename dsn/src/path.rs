use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::errors::{DsnError, Result};

// Neither pattern is anchored: extra leading or trailing segments are tolerated.
static PROJECT_STORE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/api/([0-9]+)/store/").expect("Invalid project store path pattern")
});

static LEGACY_STORE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/api/store/").expect("Invalid legacy store path pattern"));

/// The store endpoint a request was sent to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorePath {
    /// `/api/<project_id>/store/`
    Project(String),
    /// `/api/store/`, which carries no project id
    Legacy,
}

impl StorePath {
    /// Matches a request path against the known store endpoints.
    ///
    /// A missing trailing slash is tolerated. The project endpoint takes
    /// precedence if both shapes occur in the path.
    pub fn parse(path: &str) -> Result<Self> {
        let normalized: Cow<'_, str> = if path.ends_with('/') {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("{path}/"))
        };

        if let Some(captures) = PROJECT_STORE_PATH.captures(&normalized) {
            return Ok(StorePath::Project(captures[1].to_string()));
        }

        if LEGACY_STORE_PATH.is_match(&normalized) {
            return Ok(StorePath::Legacy);
        }

        Err(DsnError::MissingProjectId(path.to_string()))
    }

    /// Returns the project id, or an empty string for the legacy endpoint
    pub fn project_id(&self) -> &str {
        match self {
            StorePath::Project(project_id) => project_id,
            StorePath::Legacy => "",
        }
    }
}
