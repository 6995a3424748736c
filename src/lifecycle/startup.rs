//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener from a validated configuration
//! - Build the repository and the HTTP server around it
//! - Spawn the server and hand back a handle to stop it

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::storage::PersonRepository;

/// Errors raised while starting or running the service.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A service whose server task is running.
pub struct RunningService {
    local_addr: SocketAddr,
    repository: Arc<PersonRepository>,
    shutdown: Shutdown,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningService {
    /// Address actually bound (useful with port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn repository(&self) -> &Arc<PersonRepository> {
        &self.repository
    }

    /// Trigger graceful shutdown and wait for the server to drain.
    pub async fn stop(self) -> Result<(), StartupError> {
        self.shutdown.trigger();
        self.task.await??;
        Ok(())
    }

    /// Run until `signal` resolves or the server exits on its own.
    pub async fn run_until<F>(mut self, signal: F) -> Result<(), StartupError>
    where
        F: Future<Output = std::io::Result<()>>,
    {
        let finished = tokio::select! {
            res = &mut self.task => Some(res),
            res = signal => {
                if let Err(e) = res {
                    tracing::error!(error = %e, "Failed to listen for shutdown signal");
                }
                None
            }
        };

        match finished {
            Some(res) => {
                res??;
                Ok(())
            }
            None => self.stop().await,
        }
    }
}

/// Bind, build and spawn the service.
pub async fn start(config: ServiceConfig) -> Result<RunningService, StartupError> {
    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr()?;

    let repository = Arc::new(PersonRepository::from_config(&config.storage));
    tracing::info!(
        address = %local_addr,
        capacity = ?config.storage.capacity,
        docs_enabled = config.docs.enabled,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, repository.clone());
    let task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    Ok(RunningService {
        local_addr,
        repository,
        shutdown,
        task,
    })
}
