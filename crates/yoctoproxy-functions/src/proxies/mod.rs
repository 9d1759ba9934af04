/*!
 * Typed proxies, one per function class.
 *
 * Every proxy wraps a [`FunctionProxy`](crate::function::FunctionProxy) base
 * and adds its class-specific cached fields, authoritative accessors and
 * pass-through actions.
 */

/// Resolution and identity surface shared by every proxy type
macro_rules! function_proxy_common {
    ($proxy:ident) => {
        impl $proxy {
            /// Resolve a proxy by name through the manager.
            ///
            /// An empty name selects the first reachable function of this class.
            pub fn find(manager: &$crate::registry::ProxyManager, func: &str) -> ::std::sync::Arc<Self> {
                manager.find::<Self>(func)
            }

            /// Hardware ids of every reachable function of this class
            pub fn similar_functions(manager: &$crate::registry::ProxyManager) -> Vec<String> {
                manager.similar_functions::<Self>()
            }

            /// Name the proxy was resolved with
            pub fn function_name(&self) -> String {
                self.base.function_name()
            }

            /// Whether a native function object is linked
            pub fn is_linked(&self) -> bool {
                self.base.is_linked()
            }

            /// Whether the function was reachable at the last notification
            pub fn is_online(&self) -> bool {
                self.base.is_online()
            }

            /// Hardware id, `SERIAL.functionId`
            pub fn hardware_id(&self) -> String {
                self.base.hardware_id()
            }

            /// Function id within the module
            pub fn function_id(&self) -> String {
                self.base.function_id()
            }

            /// Serial number of the hosting module
            pub fn serial_number(&self) -> String {
                self.base.serial_number()
            }

            /// Friendly name of the function
            pub fn friendly_name(&self) -> String {
                self.base.friendly_name()
            }

            /// Logical name, read from the device
            pub fn logical_name(&self) -> $crate::error::Result<String> {
                self.base.logical_name()
            }

            /// Change the logical name on the device
            pub fn set_logical_name(&self, newval: &str) -> $crate::error::Result<i32> {
                self.base.set_logical_name(newval)
            }

            /// Logical name from the cache
            pub fn cached_logical_name(&self) -> String {
                self.base.cached_logical_name()
            }

            /// Change the logical name when online and different from the cache
            pub fn set_cached_logical_name(&self, newval: &str) {
                self.base.set_cached_logical_name(newval)
            }

            /// Advertised value, read from the device
            pub fn advertised_value(&self) -> $crate::error::Result<String> {
                self.base.advertised_value()
            }

            /// Last advertised value received
            pub fn cached_advertised_value(&self) -> String {
                self.base.cached_advertised_value()
            }
        }
    };
}

pub mod color_led_cluster;
pub mod color_sensor;
pub mod i2c_port;
pub mod network;
pub mod sdi12_port;
pub mod serial_port;
pub mod spi_port;

pub use color_led_cluster::{ColorLedClusterProxy, LedType};
pub use color_sensor::{ColorSensorProxy, EstimationModel, NearSimpleColor, WorkingMode};
pub use i2c_port::{I2cPortProxy, I2cVoltageLevel};
pub use network::{CallbackEncoding, CallbackMethod, Discoverable, NetworkProxy, Readiness};
pub use sdi12_port::Sdi12PortProxy;
pub use serial_port::SerialPortProxy;
pub use spi_port::{ShiftSampling, SpiPortProxy, SsPolarity};
