/*!
 * yoctoproxy functions
 *
 * Typed proxies over a native device-access library. A [`ProxyManager`]
 * resolves function names to proxies and keeps one proxy per hardware
 * function. Each proxy offers authoritative accessors that go to the device
 * and cached accessors that read a snapshot refreshed on arrival,
 * configuration change and advertised-value notifications.
 */

#![warn(missing_docs)]

pub mod error;
pub mod function;
pub mod native;
pub mod port;
pub mod proxies;
pub mod records;
pub mod registry;
pub mod sim;

pub use error::{ProxyError, Result};
pub use function::{FunctionProxy, Link, ManagedProxy, ProxyEvent, ProxyKind};
pub use registry::{ProxyManager, SharedProxyManager};

/// Everything needed to resolve and drive proxies
pub mod prelude {
    pub use yoctoproxy_core::prelude::*;

    pub use crate::error::{ProxyError, Result as ProxyResult};
    pub use crate::function::{ManagedProxy, ProxyEvent, ProxyKind};
    pub use crate::native::NativeLibrary;
    pub use crate::port::{MessagePort, StreamPort, VoltageLevel};
    pub use crate::proxies::*;
    pub use crate::records::{
        I2cSnoopingRecord, Sdi12SensorInfo, Sdi12SnoopingRecord, SnoopingRecord, SpiSnoopingRecord,
    };
    pub use crate::registry::{ProxyManager, SharedProxyManager};
}

/// yoctoproxy functions crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging and report the crate version
pub fn init() -> std::result::Result<(), yoctoproxy_core::error::Error> {
    yoctoproxy_core::init()?;
    tracing::info!("yoctoproxy functions {} initialized", VERSION);
    Ok(())
}
