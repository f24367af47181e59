//! Hyper server setup and request handling.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming as IncomingBody};
use hyper::{Request, Response, Result as HyperResult};
use hyper_util::rt::TokioExecutor;
use hyper_util::rt::TokioIo;
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};

use crate::router::Router;

/// First pause after a failed accept; doubles on each consecutive failure.
const MIN_ACCEPT_BACKOFF: Duration = Duration::from_millis(5);
const MAX_ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Source of inbound connections.
pub trait Acceptor: Send + 'static {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    /// Waits for the next connection.
    fn accept(&mut self) -> impl Future<Output = io::Result<(Self::Stream, SocketAddr)>> + Send;

    fn local_addr(&self) -> io::Result<SocketAddr>;
}

impl Acceptor for TcpListener {
    type Stream = TcpStream;

    fn accept(&mut self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        TcpListener::local_addr(self)
    }
}

/// HTTP server for the car store API.
pub struct Server {
    addr: SocketAddr,
    router: Arc<Router>,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// # Arguments
    /// * `addr` - Socket address to bind to
    /// * `router` - Request router
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self {
            addr,
            router: Arc::new(router),
        }
    }

    /// Binds the configured address and serves connections.
    ///
    /// Only a failed bind returns; accept errors are logged and retried.
    pub async fn serve(self) -> Result<(), io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        self.serve_with_listener(listener).await
    }

    /// Serves connections from an already bound listener.
    pub async fn serve_with_listener(self, listener: TcpListener) -> Result<(), io::Error> {
        self.serve_with_acceptor(listener).await
    }

    /// Serves connections from `acceptor`, each on its own task.
    ///
    /// A failed accept (for example when the process is out of file
    /// descriptors) pauses the loop with exponential backoff, then
    /// accepting resumes.
    pub async fn serve_with_acceptor<A: Acceptor>(
        self,
        mut acceptor: A,
    ) -> Result<(), io::Error> {
        let local_addr = acceptor.local_addr()?;
        tracing::info!(addr = %local_addr, "Server is running on port {}...", local_addr.port());

        let mut backoff: Option<Duration> = None;
        loop {
            let (stream, peer) = match acceptor.accept().await {
                Ok(conn) => {
                    backoff = None;
                    conn
                }
                Err(err) => {
                    let delay = backoff
                        .map_or(MIN_ACCEPT_BACKOFF, |d| (d * 2).min(MAX_ACCEPT_BACKOFF));
                    backoff = Some(delay);
                    tracing::warn!(?delay, "Accept error: {}; retrying", err);
                    tokio::time::sleep(delay).await;
                    continue;
                }
            };

            let io = TokioIo::new(stream);
            let router = Arc::clone(&self.router);

            tokio::task::spawn(async move {
                let builder = ConnectionBuilder::new(TokioExecutor::new());
                if let Err(err) = builder
                    .serve_connection(
                        io,
                        hyper::service::service_fn(move |req| handle_request(req, router.clone())),
                    )
                    .await
                {
                    tracing::warn!(%peer, "Error serving connection: {}", err);
                }
            });
        }
    }
}

/// Handles an incoming HTTP request.
async fn handle_request(
    req: Request<IncomingBody>,
    router: Arc<Router>,
) -> HyperResult<Response<Full<Bytes>>> {
    let response = router.handle(req).await;
    Ok(response.map(Full::new))
}
