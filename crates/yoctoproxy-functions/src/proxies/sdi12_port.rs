/*!
 * SDI-12 port proxy.
 */
use std::sync::Arc;

use yoctoproxy_core::types::{proxy_string, proxy_uint, Rebased};

use crate::error::Result;
use crate::function::{Cached, FunctionProxy, ProxyKind};
use crate::native::{NativeLibrary, NativeSdi12Port};
use crate::port::{MessagePort, StreamPort, VoltageLevel};
use crate::records::{wrap_records, Sdi12SensorInfo, Sdi12SnoopingRecord};

/// Proxy for an SDI-12 bus master
#[derive(Debug)]
pub struct Sdi12PortProxy {
    base: FunctionProxy<dyn NativeSdi12Port>,
    serial_mode: Cached<String>,
    protocol: Cached<String>,
    voltage_level: Cached<VoltageLevel>,
    job_max_task: Cached<i32>,
    job_max_size: Cached<i32>,
}

impl ProxyKind for Sdi12PortProxy {
    type Native = dyn NativeSdi12Port;

    const CLASS_NAME: &'static str = "Sdi12Port";

    fn find_native(library: &dyn NativeLibrary, func: &str) -> Arc<Self::Native> {
        library.find_sdi12_port(func)
    }

    fn first_native(library: &dyn NativeLibrary) -> Option<Arc<Self::Native>> {
        library.first_sdi12_port()
    }

    fn next_native(native: &Self::Native) -> Option<Arc<Self::Native>> {
        native.next_sdi12_port()
    }

    fn from_base(base: FunctionProxy<Self::Native>) -> Self {
        Self {
            base,
            serial_mode: Cached::string(),
            protocol: Cached::string(),
            voltage_level: Cached::enumeration(),
            job_max_task: Cached::uint(),
            job_max_size: Cached::uint(),
        }
    }

    fn base(&self) -> &FunctionProxy<Self::Native> {
        &self.base
    }

    fn function_arrival(&self) {
        if let Ok(n) = self.base.native() {
            self.job_max_task.store(proxy_uint(n.job_max_task()));
            self.job_max_size.store(proxy_uint(n.job_max_size()));
        }
    }

    fn module_config_has_changed(&self) {
        if let Ok(n) = self.base.native() {
            self.serial_mode.store(proxy_string(n.serial_mode()));
            self.protocol.store(proxy_string(n.protocol()));
            self.voltage_level.store(VoltageLevel::from_native(n.voltage_level()));
        }
    }
}

function_proxy_common!(Sdi12PortProxy);

impl MessagePort for Sdi12PortProxy {
    type Port = dyn NativeSdi12Port;

    fn port(&self) -> &FunctionProxy<dyn NativeSdi12Port> {
        &self.base
    }
}

impl StreamPort for Sdi12PortProxy {
    type Stream = dyn NativeSdi12Port;

    fn stream(&self) -> &FunctionProxy<dyn NativeSdi12Port> {
        &self.base
    }
}

impl Sdi12PortProxy {
    /// Serial mode, e.g. `1200,7E1`
    pub fn serial_mode(&self) -> Result<String> {
        self.base.get_string(|n| n.serial_mode())
    }

    /// Change the serial mode
    pub fn set_serial_mode(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_serial_mode(v))
    }

    /// Serial mode from the cache
    pub fn cached_serial_mode(&self) -> String {
        self.base.read_cached(&self.serial_mode)
    }

    /// Change the serial mode when online and different from the cache
    pub fn set_cached_serial_mode(&self, newval: &str) {
        self.base
            .write_cached(&self.serial_mode, newval.to_string(), |n, v| n.set_serial_mode(v));
    }

    /// Protocol from the cache
    pub fn cached_protocol(&self) -> String {
        self.base.read_cached(&self.protocol)
    }

    /// Change the protocol when online and different from the cache
    pub fn set_cached_protocol(&self, newval: &str) {
        self.base
            .write_cached(&self.protocol, newval.to_string(), |n, v| n.set_protocol(v));
    }

    /// Voltage level from the cache
    pub fn cached_voltage_level(&self) -> VoltageLevel {
        self.base.read_cached(&self.voltage_level)
    }

    /// Change the voltage level when online and different from the cache
    pub fn set_cached_voltage_level(&self, newval: VoltageLevel) {
        self.base.write_cached(&self.voltage_level, newval, |n, v| {
            n.set_voltage_level(v.to_native())
        });
    }

    /// Maximum number of tasks in a job, from the cache
    pub fn cached_job_max_task(&self) -> i32 {
        self.base.read_cached(&self.job_max_task)
    }

    /// Maximum job file size, from the cache
    pub fn cached_job_max_size(&self) -> i32 {
        self.base.read_cached(&self.job_max_size)
    }

    /// Send a command to a sensor and return its reply
    pub fn query_sdi12(&self, sensor_addr: &str, cmd: &str, max_wait: i32) -> Result<String> {
        self.base
            .with_native(|n| n.query_sdi12(sensor_addr, cmd, max_wait))
    }

    /// Identify the only sensor on the bus
    pub fn discover_single_sensor(&self) -> Result<Sdi12SensorInfo> {
        self.base
            .with_native(|n| Sdi12SensorInfo::from(n.discover_single_sensor()))
    }

    /// Identify every sensor on the bus
    pub fn discover_all_sensors(&self) -> Result<Vec<Sdi12SensorInfo>> {
        self.base.with_native(|n| {
            n.discover_all_sensors()
                .into_iter()
                .map(Sdi12SensorInfo::from)
                .collect()
        })
    }

    /// Run a measurement command and return the values
    pub fn read_sensor(&self, sensor_addr: &str, meas_cmd: &str, max_wait: i32) -> Result<Vec<f64>> {
        self.base
            .with_native(|n| n.read_sensor(sensor_addr, meas_cmd, max_wait))
    }

    /// Change the address of a sensor
    pub fn change_address(&self, old_address: &str, new_address: &str) -> Result<Sdi12SensorInfo> {
        self.base
            .with_native(|n| Sdi12SensorInfo::from(n.change_address(old_address, new_address)))
    }

    /// Identification data of a sensor
    pub fn sensor_information(&self, sensor_addr: &str) -> Result<Sdi12SensorInfo> {
        self.base
            .with_native(|n| Sdi12SensorInfo::from(n.sensor_information(sensor_addr)))
    }

    /// Collect the results of a concurrent measurement
    pub fn read_concurrent_measurements(&self, sensor_addr: &str) -> Result<Vec<f64>> {
        self.base
            .with_native(|n| n.read_concurrent_measurements(sensor_addr))
    }

    /// Start a concurrent measurement
    pub fn request_concurrent_measurements(&self, sensor_addr: &str) -> Result<i32> {
        self.base
            .with_native(|n| n.request_concurrent_measurements(sensor_addr))
    }

    /// Messages captured by the snooping buffer
    pub fn snoop_messages(&self, max_wait: i32) -> Result<Vec<Sdi12SnoopingRecord>> {
        self.base
            .with_native(|n| wrap_records(n.snoop_messages(max_wait)))
    }

    /// At most `max_msg` messages captured by the snooping buffer
    pub fn snoop_messages_ex(&self, max_wait: i32, max_msg: i32) -> Result<Vec<Sdi12SnoopingRecord>> {
        self.base
            .with_native(|n| wrap_records(n.snoop_messages_ex(max_wait, max_msg)))
    }
}
