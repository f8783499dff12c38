//! Application settings and the HTTP server configuration built from them.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use org_directory::domain::TraversalLimits;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings layered from CLI flags, `ORG_DIRECTORY_*` variables and the
/// configuration file.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ORG_DIRECTORY")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the directory lives in memory.
    pub database_url: Option<String>,
    /// Longest management chain followed by reporting structure queries.
    pub max_reporting_depth: Option<usize>,
    /// Most subordinates counted by a single reporting structure query.
    pub max_reporting_nodes: Option<usize>,
}

impl AppSettings {
    /// Parse the configured listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Traversal budget with unset values taken from [`TraversalLimits::default`].
    pub fn traversal_limits(&self) -> TraversalLimits {
        let defaults = TraversalLimits::default();
        TraversalLimits {
            max_depth: self.max_reporting_depth.unwrap_or(defaults.max_depth),
            max_reports: self.max_reporting_nodes.unwrap_or(defaults.max_reports),
        }
    }
}

/// Listener and traversal settings for [`super::create_server`].
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) limits: TraversalLimits,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, limits: TraversalLimits) -> Self {
        Self { bind_addr, limits }
    }

    /// Build from loaded settings.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, AddrParseError> {
        Ok(Self::new(settings.bind_addr()?, settings.traversal_limits()))
    }
}
