use serde::Serialize;
use std::fmt;

use crate::credentials::Credentials;

const SCHEME: &str = "https://";

/// A reconstructed DSN and the parts it was built from
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dsn {
    /// `https://<public_key>[:<secret_key>]@<host>/<project_id>`, or empty
    /// when the request went to the legacy store endpoint
    #[serde(rename = "dsn")]
    pub url: String,
    pub host: String,
    /// Empty for the legacy store endpoint
    pub project_id: String,
    pub public_key: String,
    pub secret_key: String,
}

impl Dsn {
    /// Assembles a DSN from already validated parts.
    ///
    /// Without a project id no DSN string can be formed; the remaining fields
    /// are still populated so the public key can be used to look the project
    /// up elsewhere.
    pub fn build(credentials: Credentials, host: &str, project_id: &str) -> Self {
        let Credentials {
            public_key,
            secret_key,
        } = credentials;

        let url = if project_id.is_empty() {
            String::new()
        } else if secret_key.is_empty() {
            format!("{SCHEME}{public_key}@{host}/{project_id}")
        } else {
            format!("{SCHEME}{public_key}:{secret_key}@{host}/{project_id}")
        };

        Dsn {
            url,
            host: host.to_string(),
            project_id: project_id.to_string(),
            public_key,
            secret_key,
        }
    }

    /// True if the request was sent to the legacy `/api/store/` endpoint
    pub fn is_legacy(&self) -> bool {
        self.project_id.is_empty()
    }
}

impl fmt::Display for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
