/*!
 * Error type for proxy operations.
 *
 * The proxy layer raises a single error of its own: an operation attempted
 * while no native function is linked. Native failures are reported through
 * the status codes and sentinels the native calls return.
 */
use thiserror::Error;

use yoctoproxy_core::error::Error as CoreError;

/// Error type for proxy operations
#[derive(Error, Debug)]
pub enum ProxyError {
    /// No native function is linked to the proxy
    #[error("No {0} connected")]
    NotConnected(&'static str),

    /// Core error
    #[error("Core error: {0}")]
    CoreError(#[from] CoreError),
}

impl ProxyError {
    /// Whether this is the "not connected" error
    pub fn is_not_connected(&self) -> bool {
        matches!(self, ProxyError::NotConnected(_))
    }
}

/// Result type for proxy operations
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_connected_message_names_class() {
        let err = ProxyError::NotConnected("SerialPort");
        assert_eq!(err.to_string(), "No SerialPort connected");
        assert!(err.is_not_connected());
    }

    #[test]
    fn test_core_error_wraps() {
        let err: ProxyError = CoreError::config("bad").into();
        assert!(!err.is_not_connected());
        assert_eq!(err.to_string(), "Core error: Configuration error: bad");
    }
}
