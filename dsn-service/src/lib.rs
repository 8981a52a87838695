pub mod config;
pub mod errors;
pub mod metrics_defs;
mod service;

use errors::DsnServiceError;
use shared::admin_service::AdminService;
use shared::http::run_http_service;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub use service::{DsnService, ServiceBody};

pub async fn run(config: config::Config) -> Result<(), DsnServiceError> {
    config.validate()?;

    let ready = Arc::new(AtomicBool::new(false));
    let ready_check = ready.clone();

    let dsn_service = DsnService::new();
    let dsn_task = run_http_service::<_, _, DsnServiceError>(
        &config.listener.host,
        config.listener.port,
        dsn_service,
    );
    let admin_task = run_http_service::<_, _, DsnServiceError>(
        &config.admin_listener.host,
        config.admin_listener.port,
        AdminService::new(move || ready_check.load(Ordering::Relaxed)),
    );
    ready.store(true, Ordering::Relaxed);

    tokio::try_join!(dsn_task, admin_task)?;
    Ok(())
}
