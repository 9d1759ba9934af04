/*!
 * Prelude module for yoctoproxy core.
 *
 * Re-exports commonly used types so downstream crates can import them in one line.
 */

// Re-export error types
pub use crate::error::{Error, Result};

// Re-export core types
pub use crate::types::{
    proxy_string, proxy_uint, HardwareId, Rebased, INVALID_STRING, INVALID_UINT,
    NATIVE_INVALID_ENUM, NATIVE_INVALID_STRING, NATIVE_INVALID_UINT, SUCCESS,
};

// Re-export config types
pub use crate::config::{Config, ConfigBuilder, LoggingConfig, ProxyConfig, SharedConfig};

// Re-export logging macros
pub use tracing::{debug, error, info, trace, warn};

// Re-export core initialization
pub use crate::init;
