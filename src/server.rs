use std::{fmt, net::SocketAddr, str::FromStr};

use axum::{Extension, Router, routing::get};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use crate::{api, types::CallbackSlot, warning};

#[derive(Debug)]
pub enum ServerError {
    Addr(std::net::AddrParseError),
    Bind(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Addr(e) => write!(f, "invalid server address: {}", e),
            ServerError::Bind(e) => write!(f, "failed to bind callback server: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

/// Local HTTP listener for the OAuth callback with an owned lifecycle.
///
/// The redirect URI registered with Spotify is fixed, so the listener binds
/// a fixed local port. [`CallbackServer::stop`] must complete before the
/// authorization session reaches a terminal state so a retried run can
/// rebind the same port.
pub struct CallbackServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl CallbackServer {
    /// Binds `addr` and starts serving `/callback` and `/health`.
    ///
    /// The slot carries the one-shot sender the callback handler resolves;
    /// see [`crate::api::callback`]. Port 0 binds an ephemeral port, the
    /// actual address is available via [`CallbackServer::addr`].
    pub async fn start(addr: &str, slot: CallbackSlot) -> Result<Self, ServerError> {
        let app = Router::new()
            .route("/health", get(api::health))
            .route("/callback", get(api::callback).layer(Extension(slot)));

        let addr = SocketAddr::from_str(addr).map_err(ServerError::Addr)?;
        let listener = TcpListener::bind(&addr).await.map_err(ServerError::Bind)?;
        let addr = listener.local_addr().map_err(ServerError::Bind)?;

        let (shutdown, shutdown_rx) = oneshot::channel();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });

        let task = tokio::spawn(async move {
            if let Err(e) = server.await {
                warning!("Callback server error: {}", e);
            }
        });

        Ok(CallbackServer {
            addr,
            shutdown,
            task,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Shuts the listener down and waits until the port is released.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }
}
