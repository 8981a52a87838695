use dsn::{Dsn, DsnError, SENTRY_AUTH_HEADER};
use http::Request;

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),
    #[error(transparent)]
    Dsn(#[from] DsnError),
    #[error("could not serialize dsn: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Resolves the DSN of a request to `url` carrying the given auth header and
/// returns it as pretty printed JSON.
pub fn resolve(url: &str, auth: Option<&str>) -> Result<String, ResolveError> {
    let mut builder = Request::builder().method("POST").uri(url);
    if let Some(auth) = auth {
        builder = builder.header(SENTRY_AUTH_HEADER, auth);
    }
    let request = builder.body(())?;

    let dsn = Dsn::from_request(&request)?;
    Ok(serde_json::to_string_pretty(&dsn)?)
}
