//! GitHub repository input parsing

use crate::{VerdraError, VerdraResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

const GITHUB_HOST: &str = "github.com";
const WWW_GITHUB_HOST: &str = "www.github.com";

/// Repository path on GitHub, e.g. `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoUrl {
    path: String,
}

impl RepoUrl {
    /// Parse what a user typed into the scan form.
    ///
    /// Accepts `owner/repo`, `github.com/owner/repo` and full http(s) URLs,
    /// with or without `www.`, a trailing slash or a `.git` suffix. Scheme and
    /// host are matched case-insensitively; any other host is rejected.
    pub fn parse(input: &str) -> VerdraResult<Self> {
        let input = input.trim();
        if input.is_empty() || input.chars().any(char::is_whitespace) {
            return Err(VerdraError::InvalidRepoUrl);
        }

        let url = Url::parse(&qualify(input)).map_err(|_| VerdraError::InvalidRepoUrl)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(VerdraError::InvalidRepoUrl);
        }
        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        if host != GITHUB_HOST && host != WWW_GITHUB_HOST {
            return Err(VerdraError::InvalidRepoUrl);
        }

        let mut segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
            .unwrap_or_default();
        if let Some(last) = segments.last_mut() {
            let name: &str = *last;
            *last = name.strip_suffix(".git").unwrap_or(name);
        }
        segments.retain(|segment| !segment.is_empty());

        if segments.is_empty() {
            return Err(VerdraError::InvalidRepoUrl);
        }

        Ok(Self {
            path: segments.join("/"),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fully-qualified URL sent to the scan service
    pub fn github_url(&self) -> String {
        format!("https://{}/{}", GITHUB_HOST, self.path)
    }
}

/// Turn form input into something `Url::parse` accepts.
///
/// Input with a scheme is left alone. A first segment containing a dot is a
/// host (`github.com/owner/repo`); anything else is an `owner/repo` path.
fn qualify(input: &str) -> String {
    if input.contains("://") {
        return input.to_string();
    }
    let first = input.split('/').next().unwrap_or_default();
    if first.contains('.') {
        format!("https://{input}")
    } else {
        format!("https://{}/{}", GITHUB_HOST, input.trim_start_matches('/'))
    }
}

impl fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for RepoUrl {
    type Err = VerdraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepoUrl::parse(s)
    }
}
