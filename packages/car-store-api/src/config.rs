//! API server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the service listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 8060;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Maximum time to wait for a full request body, in milliseconds
    pub request_timeout_ms: u64,
}

impl ApiConfig {
    /// Socket address built from `host` and `port`.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            request_timeout_ms: 5000, // 5 seconds default
        }
    }
}
