//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the
//! documentation generator: error handling and configuration.

pub mod config;
pub mod error;

pub use config::{Config, DocsConfig, DocsLink, HttpConfig, LoggingConfig, OpenApiServer};
pub use error::{Error, Result};
