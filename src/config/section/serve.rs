//! `[serve]`: where `realty serve` listens.
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"
//! port = 5277
//! ```
//!
//! When the port is taken the server tries the next few ones.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    pub interface: IpAddr,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5277,
        }
    }
}

impl ServeConfig {
    /// First address the preview server tries.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.interface, self.port)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.port == 0 {
            diag.error_with_hint(
                "serve.port",
                "port 0 picks a random port on every start",
                "choose a fixed port, e.g. 5277",
            );
        }
        if self.interface.is_unspecified() {
            // Drafts and the contact form become visible on the local network
            diag.warn(
                "serve.interface",
                format!("{} exposes the preview to the network", self.interface),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::net::Ipv6Addr;

    #[test]
    fn test_serve_section() {
        let config = test_parse_config("[serve]\ninterface = \"::1\"\nport = 8080");
        assert_eq!(
            config.serve.addr(),
            SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 8080)
        );
    }

    #[test]
    fn test_defaults_to_localhost() {
        let config = test_parse_config("[serve]\nport = 3000");
        assert_eq!(config.serve.addr().to_string(), "127.0.0.1:3000");

        let mut diag = ConfigDiagnostics::new();
        config.serve.validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_port_zero_rejected() {
        let config = test_parse_config("[serve]\nport = 0");
        let mut diag = ConfigDiagnostics::new();
        config.serve.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, "serve.port");
    }

    #[test]
    fn test_unspecified_interface_warns() {
        let config = test_parse_config("[serve]\ninterface = \"0.0.0.0\"");
        let mut diag = ConfigDiagnostics::new();
        config.serve.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].0, "serve.interface");
    }
}
