//! DSN Reconstruction
//!
//! Rebuilds the DSN a Sentry SDK was configured with from a request it sent to
//! the store endpoint.
//!
//! # Pipeline
//!
//! 1. **Credentials**: the `X-Sentry-Auth` header is read first, the query
//!    string (`sentry_key`, `sentry_secret`) is the fallback.
//! 2. **Path**: the project id is taken from `/api/<project_id>/store/`. The
//!    legacy `/api/store/` endpoint is accepted and yields no project id.
//! 3. **Build**: `https://<public_key>[:<secret_key>]@<host>/<project_id>`.
//!
//! ```text
//! POST https://sentry.io/api/1234/store/
//! X-Sentry-Auth: Sentry sentry_key=<pk>,sentry_secret=<sk>
//!   -> https://<pk>:<sk>@sentry.io/1234
//! ```
//!
//! Every step is a pure function of the request, so requests can be resolved
//! concurrently without coordination.

mod credentials;
mod descriptor;
mod errors;
mod path;
mod request;

pub use credentials::Credentials;
pub use descriptor::Dsn;
pub use errors::{DsnError, Result};
pub use path::StorePath;
pub use request::{IncomingRequest, SENTRY_AUTH_HEADER};
