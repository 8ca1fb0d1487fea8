//! Configuration management for the documentation generator.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the documentation server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Documentation generator configuration.
    pub docs: DocsConfig,

    /// HTTP bind configuration for the serving layer.
    pub http: HttpConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// An external documentation link rendered in the UI header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsLink {
    /// Link text shown to the reader.
    pub text: String,

    /// Target URL.
    pub url: String,
}

impl DocsLink {
    /// Create a new documentation link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// A server entry for the OpenAPI `servers` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenApiServer {
    /// Server base URL.
    pub url: String,

    /// Human-readable description of the server.
    pub description: String,
}

/// Configuration for the documentation generator.
///
/// Immutable after construction; route paths are accepted verbatim without
/// validation. The documentation layer treats this as a read-only value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Documentation title.
    pub title: String,

    /// API version reported in the UI and OpenAPI document.
    pub version: String,

    /// API description.
    pub description: String,

    /// Base URL shown in the UI and used as the OpenAPI server when no
    /// explicit server list is configured.
    pub base_url: Option<String>,

    /// Additional documentation links rendered in the UI.
    #[serde(default)]
    pub docs_links: Vec<DocsLink>,

    /// Route path for the tool listing endpoint.
    pub api_tools_route: String,

    /// Route path for the OpenAPI document endpoint.
    pub openapi_route: String,

    /// Route path for the documentation UI page.
    pub docs_ui_route: String,

    /// OpenAPI specification version emitted in the document.
    pub openapi_version: String,

    /// Explicit OpenAPI server list. When empty, `base_url` is used; when
    /// that is also absent, a localhost default is emitted.
    #[serde(default)]
    pub openapi_servers: Vec<OpenApiServer>,

    /// Optional emoji displayed before the title in the UI header.
    pub page_title_emoji: Option<String>,

    /// Custom favicon URL. When `None`, a default SVG favicon is served
    /// at `/favicon.svg`.
    pub favicon_url: Option<String>,

    /// Emit permissive CORS headers on all documentation endpoints.
    pub enable_cors: bool,

    /// Log each documented tool at info level during extraction.
    pub verbose: bool,
}

/// HTTP bind configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: "MCP Tools Documentation".to_string(),
            version: "1.0.0".to_string(),
            description: "Auto-generated API documentation for MCP Server tools".to_string(),
            base_url: None,
            docs_links: Vec::new(),
            api_tools_route: "/api/tools".to_string(),
            openapi_route: "/openapi.json".to_string(),
            docs_ui_route: "/docs".to_string(),
            openapi_version: "3.1.0".to_string(),
            openapi_servers: Vec::new(),
            page_title_emoji: None,
            favicon_url: None,
            enable_cors: true,
            verbose: true,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs: DocsConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DocsConfig {
    /// Route path for the single-tool detail endpoint, derived from the
    /// listing route.
    pub fn api_tool_detail_route(&self) -> String {
        format!("{}/{{name}}", self.api_tools_route)
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_DOCS_`.
    /// For example: `MCP_DOCS_TITLE`, `MCP_DOCS_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(title) = std::env::var("MCP_DOCS_TITLE") {
            config.docs.title = title;
        }

        if let Ok(version) = std::env::var("MCP_DOCS_VERSION") {
            config.docs.version = version;
        }

        if let Ok(description) = std::env::var("MCP_DOCS_DESCRIPTION") {
            config.docs.description = description;
        }

        if let Ok(base_url) = std::env::var("MCP_DOCS_BASE_URL") {
            config.docs.base_url = Some(base_url);
        }

        if let Ok(cors) = std::env::var("MCP_DOCS_CORS") {
            config.docs.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        if let Ok(verbose) = std::env::var("MCP_DOCS_VERBOSE") {
            config.docs.verbose = verbose.to_lowercase() != "false" && verbose != "0";
        }

        if let Ok(host) = std::env::var("MCP_DOCS_HTTP_HOST") {
            config.http.host = host;
        }

        if let Ok(port) = std::env::var("MCP_DOCS_HTTP_PORT") {
            if let Ok(port) = port.parse() {
                config.http.port = port;
            }
        }

        if let Ok(level) = std::env::var("MCP_DOCS_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_docs_defaults() {
        let config = DocsConfig::default();
        assert_eq!(config.title, "MCP Tools Documentation");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.api_tools_route, "/api/tools");
        assert_eq!(config.openapi_route, "/openapi.json");
        assert_eq!(config.docs_ui_route, "/docs");
        assert_eq!(config.openapi_version, "3.1.0");
        assert!(config.enable_cors);
        assert!(config.verbose);
        assert!(config.base_url.is_none());
        assert!(config.docs_links.is_empty());
    }

    #[test]
    fn test_detail_route_derived_from_listing_route() {
        let config = DocsConfig::default();
        assert_eq!(config.api_tool_detail_route(), "/api/tools/{name}");

        let custom = DocsConfig {
            api_tools_route: "/v2/tools".to_string(),
            ..Default::default()
        };
        assert_eq!(custom.api_tool_detail_route(), "/v2/tools/{name}");
    }

    #[test]
    fn test_title_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_TITLE", "Deploy Tools");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.title, "Deploy Tools");
        unsafe {
            std::env::remove_var("MCP_DOCS_TITLE");
        }
    }

    #[test]
    fn test_cors_disabled_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_CORS", "false");
        }
        let config = Config::from_env();
        assert!(!config.docs.enable_cors);
        unsafe {
            std::env::remove_var("MCP_DOCS_CORS");
        }
    }

    #[test]
    fn test_route_paths_accepted_verbatim() {
        // No validation beyond types: odd paths are stored as-is.
        let config = DocsConfig {
            docs_ui_route: "no-leading-slash".to_string(),
            ..Default::default()
        };
        assert_eq!(config.docs_ui_route, "no-leading-slash");
    }
}
