use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{DsnError, Result};

static SENTRY_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sentry_key=[a-f0-9]{32}").expect("Invalid sentry_key pattern")
});

static SENTRY_SECRET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sentry_secret=[a-f0-9]{32}").expect("Invalid sentry_secret pattern")
});

const QUERY_PUBLIC_KEY: &str = "sentry_key";
const QUERY_SECRET_KEY: &str = "sentry_secret";

/// Key material a client authenticated with
///
/// Only ever constructed with a non-empty `public_key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub public_key: String,
    /// Empty when the client did not send a secret key
    pub secret_key: String,
}

impl Credentials {
    /// Extracts credentials from the values of the `X-Sentry-Auth` header.
    ///
    /// Only the first value is used. Both header revisions are accepted:
    ///
    /// ```text
    /// Sentry sentry_key=<pk>,sentry_secret=<sk>,sentry_version=7
    /// sentry_key=<pk>,sentry_secret=<sk>,sentry_version=7
    /// ```
    ///
    /// A token is recognized when it contains `sentry_key=` or `sentry_secret=`
    /// followed by 32 lowercase hex characters. The value is then everything
    /// between the first `=` and the next one, so longer keys are kept whole.
    /// Unrecognized tokens are skipped. A secret key without a public key is
    /// rejected.
    pub fn from_auth_header<'a, I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let value = values.into_iter().next().map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(DsnError::MissingCredential);
        }

        let mut public_key = None;
        let mut secret_key = None;

        for token in strip_scheme(value).split(',').map(str::trim) {
            if SENTRY_KEY.is_match(token) {
                public_key = Some(token_value(token).to_string());
            }
            if SENTRY_SECRET.is_match(token) {
                secret_key = Some(token_value(token).to_string());
            }
        }

        let public_key = public_key.ok_or(DsnError::MissingCredential)?;
        Ok(Credentials {
            public_key,
            secret_key: secret_key.unwrap_or_default(),
        })
    }

    /// Extracts credentials from the `sentry_key` and `sentry_secret` query
    /// parameters.
    ///
    /// Values are taken verbatim, no format check is applied. The first
    /// occurrence of each parameter wins.
    pub fn from_query(query: Option<&str>) -> Result<Self> {
        let mut public_key = None;
        let mut secret_key = None;

        for (name, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            match name.as_ref() {
                QUERY_PUBLIC_KEY if public_key.is_none() => public_key = Some(value.into_owned()),
                QUERY_SECRET_KEY if secret_key.is_none() => secret_key = Some(value.into_owned()),
                _ => {}
            }
        }

        let public_key = public_key
            .filter(|key| !key.is_empty())
            .ok_or(DsnError::MissingCredential)?;
        Ok(Credentials {
            public_key,
            secret_key: secret_key.unwrap_or_default(),
        })
    }
}

/// Value of a `name=value` token, up to any further `=`
fn token_value(token: &str) -> &str {
    token.split('=').nth(1).unwrap_or_default()
}

/// Drops a leading auth scheme (e.g. `Sentry `) if the header has one.
///
/// The scheme is the first whitespace-delimited word, as long as it is not
/// itself a `key=value` pair.
fn strip_scheme(value: &str) -> &str {
    match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if !scheme.contains('=') && !scheme.contains(',') => {
            rest.trim_start()
        }
        _ => value,
    }
}
