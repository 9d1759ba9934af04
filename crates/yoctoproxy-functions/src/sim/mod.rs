/*!
 * In-memory native library.
 *
 * `SimHub` implements [`NativeLibrary`] over simulated modules so proxies can
 * be exercised without hardware. Each simulated function keeps a property
 * store (unset properties read as the native sentinels), logs every write
 * and action it receives, answers queries from scripted replies, and can
 * publish advertised values through the registered callback.
 */
use std::fmt;
use std::sync::{Arc, RwLock, Weak};

use tracing::{debug, info};

use crate::function::{read_lock, write_lock};
use crate::native::{
    NativeColorLedCluster, NativeColorSensor, NativeI2cPort, NativeLibrary, NativeNetwork,
    NativeSdi12Port, NativeSerialPort, NativeSpiPort,
};

mod function;
mod impls;

pub use function::{SimCall, SimFunction, DEVICE_NOT_FOUND};

/// Function classes the simulator can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimClass {
    /// Serial port
    SerialPort,
    /// I2C port
    I2cPort,
    /// SPI port
    SpiPort,
    /// SDI-12 port
    Sdi12Port,
    /// RGB LED cluster
    ColorLedCluster,
    /// Color sensor
    ColorSensor,
    /// Network interface
    Network,
}

#[derive(Debug, Default)]
pub(crate) struct HubState {
    functions: RwLock<Vec<Arc<SimFunction>>>,
}

impl HubState {
    /// First online function of `class` strictly after `current` in declaration order
    pub(crate) fn next_after(&self, current: &SimFunction, class: SimClass) -> Option<Arc<SimFunction>> {
        let functions = read_lock(&self.functions);
        let position = functions
            .iter()
            .position(|f| std::ptr::eq(Arc::as_ptr(f), current))?;
        functions[position + 1..]
            .iter()
            .find(|f| f.class() == class && f.online())
            .cloned()
    }

    fn first(&self, class: SimClass) -> Option<Arc<SimFunction>> {
        read_lock(&self.functions)
            .iter()
            .find(|f| f.class() == class && f.online())
            .cloned()
    }

    fn resolve(&self, class: SimClass, name: &str) -> Option<Arc<SimFunction>> {
        read_lock(&self.functions)
            .iter()
            .filter(|f| f.class() == class)
            .find(|f| f.answers_to(name))
            .cloned()
    }
}

/// A simulated native library hosting any number of modules
#[derive(Clone, Default)]
pub struct SimHub {
    state: Arc<HubState>,
}

impl fmt::Debug for SimHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let functions = read_lock(&self.state.functions);
        f.debug_struct("SimHub")
            .field("functions", &functions.iter().map(|f| f.hardware_id_str()).collect::<Vec<_>>())
            .finish()
    }
}

impl SimHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a function hosted by module `serial`. It stays offline until
    /// the module is plugged.
    pub fn add_function(&self, serial: &str, class: SimClass, function_id: &str) -> Arc<SimFunction> {
        let function = Arc::new(SimFunction::new(
            Arc::downgrade(&self.state),
            class,
            serial,
            function_id,
        ));
        write_lock(&self.state.functions).push(Arc::clone(&function));
        debug!(serial, function_id, ?class, "declared simulated function");
        function
    }

    /// Bring every function of module `serial` online
    pub fn plug(&self, serial: &str) {
        self.set_module_online(serial, true);
        info!(serial, "module plugged");
    }

    /// Take every function of module `serial` offline
    pub fn unplug(&self, serial: &str) {
        self.set_module_online(serial, false);
        info!(serial, "module unplugged");
    }

    fn set_module_online(&self, serial: &str, online: bool) {
        for function in read_lock(&self.state.functions).iter() {
            if function.serial() == serial {
                function.set_online(online);
            }
        }
    }

    /// A declared function by hardware id
    pub fn function(&self, hardware_id: &str) -> Option<Arc<SimFunction>> {
        read_lock(&self.state.functions)
            .iter()
            .find(|f| f.hardware_id_str() == hardware_id)
            .cloned()
    }

    /// Every declared function, in declaration order
    pub fn functions(&self) -> Vec<Arc<SimFunction>> {
        read_lock(&self.state.functions).clone()
    }

    /// Resolve by name, or hand out an offline object that matches nothing
    fn find(&self, class: SimClass, name: &str) -> Arc<SimFunction> {
        self.state
            .resolve(class, name)
            .unwrap_or_else(|| Arc::new(SimFunction::detached(class)))
    }
}

impl NativeLibrary for SimHub {
    fn find_serial_port(&self, func: &str) -> Arc<dyn NativeSerialPort> {
        self.find(SimClass::SerialPort, func)
    }

    fn first_serial_port(&self) -> Option<Arc<dyn NativeSerialPort>> {
        self.state
            .first(SimClass::SerialPort)
            .map(|f| f as Arc<dyn NativeSerialPort>)
    }

    fn find_i2c_port(&self, func: &str) -> Arc<dyn NativeI2cPort> {
        self.find(SimClass::I2cPort, func)
    }

    fn first_i2c_port(&self) -> Option<Arc<dyn NativeI2cPort>> {
        self.state
            .first(SimClass::I2cPort)
            .map(|f| f as Arc<dyn NativeI2cPort>)
    }

    fn find_spi_port(&self, func: &str) -> Arc<dyn NativeSpiPort> {
        self.find(SimClass::SpiPort, func)
    }

    fn first_spi_port(&self) -> Option<Arc<dyn NativeSpiPort>> {
        self.state
            .first(SimClass::SpiPort)
            .map(|f| f as Arc<dyn NativeSpiPort>)
    }

    fn find_sdi12_port(&self, func: &str) -> Arc<dyn NativeSdi12Port> {
        self.find(SimClass::Sdi12Port, func)
    }

    fn first_sdi12_port(&self) -> Option<Arc<dyn NativeSdi12Port>> {
        self.state
            .first(SimClass::Sdi12Port)
            .map(|f| f as Arc<dyn NativeSdi12Port>)
    }

    fn find_color_led_cluster(&self, func: &str) -> Arc<dyn NativeColorLedCluster> {
        self.find(SimClass::ColorLedCluster, func)
    }

    fn first_color_led_cluster(&self) -> Option<Arc<dyn NativeColorLedCluster>> {
        self.state
            .first(SimClass::ColorLedCluster)
            .map(|f| f as Arc<dyn NativeColorLedCluster>)
    }

    fn find_color_sensor(&self, func: &str) -> Arc<dyn NativeColorSensor> {
        self.find(SimClass::ColorSensor, func)
    }

    fn first_color_sensor(&self) -> Option<Arc<dyn NativeColorSensor>> {
        self.state
            .first(SimClass::ColorSensor)
            .map(|f| f as Arc<dyn NativeColorSensor>)
    }

    fn find_network(&self, func: &str) -> Arc<dyn NativeNetwork> {
        self.find(SimClass::Network, func)
    }

    fn first_network(&self) -> Option<Arc<dyn NativeNetwork>> {
        self.state
            .first(SimClass::Network)
            .map(|f| f as Arc<dyn NativeNetwork>)
    }
}

/// Next online function of the same class, for the `next_*` native calls
pub(crate) fn next_of(hub: &Weak<HubState>, current: &SimFunction) -> Option<Arc<SimFunction>> {
    hub.upgrade()?.next_after(current, current.class())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::NativeFunction;

    #[test]
    fn test_first_and_next_skip_offline_and_other_classes() {
        let hub = SimHub::new();
        hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
        hub.add_function("YI2CMK01-00002", SimClass::I2cPort, "i2cPort");
        hub.add_function("RS485MK2-00003", SimClass::SerialPort, "serialPort");
        hub.add_function("RS485MK2-00004", SimClass::SerialPort, "serialPort");
        hub.plug("RS232MK3-00001");
        hub.plug("YI2CMK01-00002");
        hub.plug("RS485MK2-00004");

        let first = hub.first_serial_port().unwrap();
        assert_eq!(first.hardware_id(), "RS232MK3-00001.serialPort");
        let next = first.next_serial_port().unwrap();
        assert_eq!(next.hardware_id(), "RS485MK2-00004.serialPort");
        assert!(next.next_serial_port().is_none());
    }

    #[test]
    fn test_find_unknown_name_is_detached_and_offline() {
        let hub = SimHub::new();
        let port = hub.find_spi_port("nowhere");
        assert!(!port.is_online());
        assert_eq!(port.hardware_id(), yoctoproxy_core::types::NATIVE_INVALID_STRING);
        assert!(port.next_spi_port().is_none());
    }

    #[test]
    fn test_find_by_logical_name() {
        let hub = SimHub::new();
        let sensor = hub.add_function("YCOLMK01-00010", SimClass::ColorSensor, "colorSensor");
        sensor.set_property("logical_name", "shelf");
        hub.plug("YCOLMK01-00010");

        let found = hub.find_color_sensor("shelf");
        assert_eq!(found.hardware_id(), "YCOLMK01-00010.colorSensor");
        let found = hub.find_color_sensor("YCOLMK01-00010.shelf");
        assert!(found.is_online());
    }
}
