//! HTTP front end. One `ContactManager` is shared by every request through
//! `AppState`; the mutex serializes mutations.

pub mod errors;
pub mod routes;

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::domain::ContactManager;
use crate::errors::AppError;
use errors::ApiError;

pub use routes::build_router;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub export_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppState {
    manager: Arc<Mutex<ContactManager>>,
    pub export_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(manager: ContactManager, export_dir: PathBuf) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
            export_dir: Arc::new(export_dir),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, ContactManager>, ApiError> {
        self.manager
            .lock()
            .map_err(|_| ApiError::internal("contact store lock poisoned"))
    }
}

/// Bind and serve until the process is stopped.
pub async fn run(manager: ContactManager, config: ServerConfig) -> Result<(), AppError> {
    info!(
        medium = manager.storage_medium(),
        contacts = manager.len(),
        "contact store ready"
    );

    let app = build_router(AppState::new(manager, config.export_dir));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "starting contact web server");

    axum::serve(listener, app).await?;
    Ok(())
}
